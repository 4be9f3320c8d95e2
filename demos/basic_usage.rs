//! Basic usage example for countryatlas-rs
//!
//! This example demonstrates how to:
//! - Load the country set (live API behind a local cache)
//! - Search the listing and look countries up by code
//! - Navigate borders through the shared context
//! - Use the caching mechanism

use countryatlas_core::prelude::*;

fn main() -> Result<()> {
    println!("=== CountryAtlas Basic Usage Example ===\n");

    // Load the country set
    println!("Loading country set...");
    let atlas = Atlas::<StandardBackend>::load()?;
    println!("✓ Loaded successfully\n");

    // Example 1: Get all countries
    println!("--- Example 1: List all countries ---");
    let countries = atlas.countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.cca3());
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: Find a specific country
    println!("--- Example 2: Find country by code ---");
    if let Some(country) = atlas.find_by_code("DE") {
        println!("Found: {}", country.name());
        println!("CCA2: {}", country.cca2());
        println!("CCA3: {}", country.cca3());
        println!("Capital: {}", country.capital_display());
        println!("Region: {}", country.region());
        println!("Population: {:?}", country.population());
        println!("Borders: {}", country.borders().len());
    }
    println!();

    // Example 3: Search the listing
    println!("--- Example 3: Filter the listing by name ---");
    let mut session = ExplorerSession::new();
    session.set_query("united");
    let hits = session.filtered(&atlas);
    println!("Countries matching 'united': {}", hits.len());
    for country in &hits {
        println!("- {}", country.name());
    }
    println!();

    // Example 4: Border navigation through the shared context
    println!("--- Example 4: Pivot through borders ---");
    let ctx = CountryContext::new(atlas.clone());
    ctx.fetch_country_data("CHE")?;
    if let Some(current) = ctx.current() {
        println!("Viewing: {}", current.name());
        for code in current.borders().iter().take(3) {
            ctx.fetch_country_data(code.as_ref())?;
            if let Some(neighbour) = ctx.current() {
                println!("→ {} ({})", neighbour.name(), neighbour.cca3());
            }
        }
    }
    println!();

    // Example 5: Location preview
    println!("--- Example 5: Location preview ---");
    if let Some(country) = atlas.find_by_code("JPN") {
        match country.latlng() {
            Some(pos) => {
                session.select_location(pos);
                println!("{} is at {}", country.name(), pos);
                session.close_map();
            }
            None => println!("{}: {}", country.name(), country.location_display()),
        }
    }
    println!();

    // Example 6: Using the cache
    println!("--- Example 6: Cache usage ---");
    println!("First load (will cache):");
    let start = std::time::Instant::now();
    let _a1 = Atlas::<StandardBackend>::load()?;
    println!("Time: {:?}", start.elapsed());

    println!("Second load (from cache):");
    let start = std::time::Instant::now();
    let _a2 = Atlas::<StandardBackend>::load()?;
    println!("Time: {:?}", start.elapsed());
    println!();

    // Example 7: Statistics
    println!("--- Example 7: Country set statistics ---");
    let stats = atlas.stats();
    println!("Total countries: {}", stats.countries);
    println!("Distinct regions: {}", stats.regions);
    println!("Without land borders: {}", stats.borderless);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
