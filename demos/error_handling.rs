//! Error handling example for countryatlas-rs
//!
//! This example demonstrates proper error handling and edge cases

use countryatlas_core::prelude::*;

fn main() -> Result<()> {
    println!("=== CountryAtlas Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading the country set with error handling ---");
    match Atlas::<StandardBackend>::load() {
        Ok(atlas) => {
            println!("✓ Country set loaded successfully");
            println!("  Countries: {}", atlas.country_count());
        }
        Err(e) => {
            eprintln!("✗ Failed to load country set: {e}");
            return Err(e);
        }
    }
    println!();

    let atlas = Atlas::<StandardBackend>::load()?;

    // Example 2: Handling missing countries
    println!("--- Example 2: Searching for non-existent codes ---");
    let codes = vec!["XX", "YY", "ZZZ"];
    for code in codes {
        match atlas.find_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.cca3()),
            None => println!("  Not found: {code}"),
        }
    }
    println!();

    // Example 3: Handling invalid codes
    println!("--- Example 3: Handling invalid codes ---");
    let invalid = vec!["", "A", "ABCD", "123"];
    for code in invalid {
        match atlas.find_by_code(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.cca3()),
            None => println!("  Not found: {code}"),
        }
    }
    println!();

    // Example 4: The context reports misses as typed errors
    println!("--- Example 4: Context fetch errors ---");
    let ctx = CountryContext::new(atlas.clone());
    match ctx.fetch_country_data("XYZ") {
        Ok(outcome) => println!("  Unexpected success: {outcome:?}"),
        Err(AtlasError::CountryNotFound(code)) => {
            println!("  No country for `{code}`; held record unchanged");
        }
        Err(e) => println!("  Other error: {e}"),
    }
    println!();

    // Example 5: Safe access to optional fields
    println!("--- Example 5: Safe country data access ---");
    if let Some(country) = atlas.find_by_code("ATA") {
        println!("  Country: {} ({})", country.name(), country.cca3());
        println!("  Capital: {}", country.capital_display());
        println!("  Population: {:?}", country.population());
        println!("  Location: {}", country.location_display());
    } else {
        println!("  Country 'ATA' not found");
    }

    Ok(())
}
