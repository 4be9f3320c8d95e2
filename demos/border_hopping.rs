//! Border navigation example for countryatlas-rs
//!
//! This example demonstrates filtering the country set and walking the
//! border graph the way the detail view's pivot buttons do

use countryatlas_core::prelude::*;

fn main() -> Result<()> {
    println!("=== CountryAtlas Border Hopping Example ===\n");

    let atlas = Atlas::<StandardBackend>::load()?;

    // Example 1: Countries in a region
    println!("--- Example 1: Countries in Europe ---");
    let european = atlas.countries_in_region("Europe");
    println!("Found {} countries:", european.len());
    for country in european.iter().take(5) {
        println!("- {} ({})", country.name(), country.cca3());
    }
    println!();

    // Example 2: The most-bordered countries
    println!("--- Example 2: Top 5 countries by border count ---");
    let mut by_borders: Vec<_> = atlas
        .countries()
        .iter()
        .map(|c| (c.name(), c.borders().len()))
        .collect();
    by_borders.sort_by(|a, b| b.1.cmp(&a.1));

    for (i, (name, count)) in by_borders.iter().take(5).enumerate() {
        println!("{}. {} - {} borders", i + 1, name, count);
    }
    println!();

    // Example 3: Landlocked countries
    println!("--- Example 3: Landlocked countries ---");
    let landlocked: Vec<_> = atlas
        .countries()
        .iter()
        .filter(|c| c.landlocked)
        .collect();
    println!("Landlocked countries: {}", landlocked.len());
    for country in landlocked.iter().take(5) {
        println!("- {}", country.name());
    }
    println!();

    // Example 4: Resolve one country's neighbours to full records
    println!("--- Example 4: Neighbours of Austria ---");
    if let Some(austria) = atlas.find_by_code("AUT") {
        for neighbour in atlas.borders_of(austria) {
            println!(
                "- {} ({}), capital {}",
                neighbour.name(),
                neighbour.cca3(),
                neighbour.capital_display()
            );
        }
    }
    println!();

    // Example 5: Hop a chain of borders through the context
    println!("--- Example 5: A walk from Portugal eastwards ---");
    let ctx = CountryContext::new(atlas.clone());
    ctx.fetch_country_data("PRT")?;

    for _ in 0..4 {
        let Some(current) = ctx.current() else { break };
        println!("Standing in {}", current.name());
        // Always take the last border chip; the walk ends on an island or
        // a dead end.
        let Some(next) = current.borders().last() else {
            println!("No borders left to cross.");
            break;
        };
        ctx.fetch_country_data(next.as_ref())?;
    }
    println!();

    // Example 6: Islands render the fallback badge
    println!("--- Example 6: Borderless countries ---");
    let islands: Vec<_> = atlas
        .countries()
        .iter()
        .filter(|c| !c.has_borders())
        .take(5)
        .collect();
    for country in islands {
        println!("- {}: {}", country.name(), country.borders_display());
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
