//! countryatlas-cli
//! ================
//!
//! Command-line interface for the `countryatlas-core` country explorer.
//!
//! This crate primarily provides a binary (`countryatlas`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install countryatlas-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! countryatlas --help
//! countryatlas countries --query united
//! countryatlas country DEU
//! countryatlas borders CHE
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`countryatlas-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/countryatlas/countryatlas-rs>
//! - Core crate: <https://docs.rs/countryatlas-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
