//! countryatlas — Command-line interface for countryatlas-core
//!
//! This binary is a terminal front end for the country explorer: a listing
//! of country cards with client-side search, and a detail view with border
//! navigation and a location preview.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ countryatlas stats
//!
//! - List all countries as cards (optionally narrowed)
//!   $ countryatlas countries
//!   $ countryatlas countries --query united
//!   $ countryatlas search united
//!
//! - Show the detail view for a country by code (cca2 or cca3, case-insensitive)
//!   $ countryatlas country de
//!   $ countryatlas country DEU
//!
//! - List the bordering countries of a country
//!   $ countryatlas borders CHE
//!
//! - Show a country's coordinates and map link
//!   $ countryatlas locate JPN
//!
//! Data source
//! -----------
//!
//! By default the listing commands fetch the full set from the REST Countries
//! API once and cache a binary copy next to the core crate for fast
//! subsequent runs (`--refresh` refetches). Detail commands hit the
//! single-country endpoint directly, like the in-browser detail view would.
//! Use `--input <path>` to run fully offline against an /all-style JSON dump.
//!
//! See also: the repository README for more details and examples.
mod args;

use crate::args::{CliArgs, Commands, ThemeArg};
use anyhow::Context as _;
use clap::Parser;
use countryatlas_core::api::{CountryCard, CountryDetail};
use countryatlas_core::{
    Country, CountryContext, CountrySource, DefaultAtlas, DefaultBackend, ExplorerSession, Theme,
};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut session = ExplorerSession::new();
    session.set_theme(match args.theme {
        ThemeArg::Light => Theme::Light,
        ThemeArg::Dark => Theme::Dark,
    });

    match &args.command {
        Commands::Stats => {
            let atlas = load_atlas(&args)?;
            let stats = atlas.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Country set statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  Regions: {}", stats.regions);
                println!("  Without borders: {}", stats.borderless);
            }
        }

        Commands::Countries { query } => {
            if let Some(q) = query {
                session.set_query(q.clone());
            }
            let atlas = load_atlas(&args)?;
            print_listing(&atlas, &session, args.json)?;
        }

        Commands::Search { query } => {
            session.set_query(query.clone());
            let atlas = load_atlas(&args)?;
            print_listing(&atlas, &session, args.json)?;
        }

        Commands::Country { code } => {
            let ctx = CountryContext::new(country_source(&args)?);
            ctx.fetch_country_data(code)?;
            let country = ctx
                .current()
                .with_context(|| format!("no record held after fetching {code}"))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&CountryDetail(&country))?);
            } else {
                print_detail(&country, session.theme());
            }
        }

        Commands::Borders { code } => {
            let source = country_source(&args)?;
            let country = source.fetch_by_code(code)?;
            if args.json {
                let codes: Vec<&str> = country.borders().iter().map(|b| b.as_ref()).collect();
                println!("{}", serde_json::to_string_pretty(&codes)?);
            } else {
                print_borders(&country, session.theme());
            }
        }

        Commands::Locate { code } => {
            let source = country_source(&args)?;
            let country = source.fetch_by_code(code)?;

            // Location preview: open, render, close.
            if let Some(latlng) = country.latlng() {
                session.select_location(latlng);
            }
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&session.selected_location())?
                );
            } else {
                let theme = session.theme();
                println!(
                    "{}{}{} — {}",
                    theme.heading(),
                    country.name(),
                    Theme::RESET,
                    country.location_display()
                );
                if let Some(url) = country.osm_url() {
                    println!("Map: {url}");
                } else if let Some(pos) = session.selected_location() {
                    println!(
                        "Map: https://www.openstreetmap.org/#map=5/{}/{}",
                        pos.lat, pos.lng
                    );
                }
            }
            session.close_map();
        }
    }

    Ok(())
}

/// Load the full listing set: dump file if `--input` was given, otherwise the
/// live API behind the binary cache.
#[cfg(feature = "fetch")]
fn load_atlas(args: &CliArgs) -> anyhow::Result<DefaultAtlas> {
    if let Some(input) = &args.input {
        return Ok(DefaultAtlas::load_raw_json(input)?);
    }

    // A mirror base URL bypasses the cache entirely; mixing datasets in one
    // cache file helps nobody.
    if let Some(base) = &args.base_url {
        let client = countryatlas_core::RestCountriesClient::with_base_url(base);
        return Ok(client.fetch_atlas()?);
    }

    let dir = DefaultAtlas::default_data_dir();
    if args.refresh {
        Ok(DefaultAtlas::refresh(dir)?)
    } else {
        Ok(DefaultAtlas::load_or_fetch(dir)?)
    }
}

#[cfg(not(feature = "fetch"))]
fn load_atlas(args: &CliArgs) -> anyhow::Result<DefaultAtlas> {
    match &args.input {
        Some(input) => Ok(DefaultAtlas::load_raw_json(input)?),
        None => anyhow::bail!("built without the 'fetch' feature; pass --input <dump.json>"),
    }
}

/// Source for single-country fetches: the dump when offline, the live
/// `/alpha/{code}` endpoint otherwise.
#[cfg(feature = "fetch")]
fn country_source(args: &CliArgs) -> anyhow::Result<Box<dyn CountrySource<DefaultBackend>>> {
    if let Some(input) = &args.input {
        return Ok(Box::new(DefaultAtlas::load_raw_json(input)?));
    }

    let client = match &args.base_url {
        Some(base) => countryatlas_core::RestCountriesClient::with_base_url(base),
        None => countryatlas_core::RestCountriesClient::new(),
    };
    Ok(Box::new(client))
}

#[cfg(not(feature = "fetch"))]
fn country_source(args: &CliArgs) -> anyhow::Result<Box<dyn CountrySource<DefaultBackend>>> {
    match &args.input {
        Some(input) => Ok(Box::new(DefaultAtlas::load_raw_json(input)?)),
        None => anyhow::bail!("built without the 'fetch' feature; pass --input <dump.json>"),
    }
}

fn print_listing(atlas: &DefaultAtlas, session: &ExplorerSession, json: bool) -> anyhow::Result<()> {
    let filtered = session.filtered(atlas);

    if json {
        let cards: Vec<CountryCard<'_, DefaultBackend>> =
            filtered.iter().map(|&c| CountryCard(c)).collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No countries match: {}", session.query());
        return Ok(());
    }

    let theme = session.theme();
    for country in filtered {
        print_card(country, theme);
    }
    Ok(())
}

fn print_card(country: &Country<DefaultBackend>, theme: Theme) {
    println!(
        "{}{} {}{}",
        theme.heading(),
        country.flag_emoji(),
        country.name(),
        Theme::RESET
    );
    print_border_badges(country, theme);
    println!("  Capital: {}", country.capital_display());
    println!("  CCA3: {}", country.cca3());
    println!("  Location: {}", country.location_display());
    println!();
}

fn print_detail(country: &Country<DefaultBackend>, theme: Theme) {
    if let Some(png) = country.flag_png() {
        println!("Flag: {png}");
    }
    println!(
        "{}{} {}{}",
        theme.heading(),
        country.flag_emoji(),
        country.name(),
        Theme::RESET
    );
    if let Some(official) = country.official_name() {
        println!("Official name: {official}");
    }
    println!("Capital: {}", country.capital_display());
    println!("Region: {}", country.region());
    if !country.subregion().is_empty() {
        println!("Subregion: {}", country.subregion());
    }
    match country.population() {
        Some(p) => println!("Population: {p}"),
        None => println!("Population: unknown"),
    }
    print_border_badges(country, theme);
}

fn print_borders(country: &Country<DefaultBackend>, theme: Theme) {
    println!("Borders of {}:", country.name());
    print_border_badges(country, theme);
}

/// Border chips: the codes double as labels and as navigation keys for
/// `countryatlas country <code>`.
fn print_border_badges(country: &Country<DefaultBackend>, theme: Theme) {
    if country.has_borders() {
        let badges: Vec<String> = country
            .borders()
            .iter()
            .map(|b| format!("{} {} {}", theme.badge(), b, Theme::RESET))
            .collect();
        println!("  {}", badges.join(" "));
    } else {
        println!("  {} No borders {}", theme.badge(), Theme::RESET);
    }
}
