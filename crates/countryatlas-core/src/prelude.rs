//! countryatlas-rs prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::api::{CountryCard, CountryDetail};
pub use crate::context::{CountryContext, FetchOutcome};
pub use crate::error::{AtlasError, Result};
pub use crate::model::{
    build_atlas, Atlas, AtlasStats, Country, DefaultAtlas, DefaultBackend, LatLng,
    StandardBackend,
};
pub use crate::session::{ExplorerSession, Theme};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{AtlasBackend, CountrySource, NameMatch};

#[cfg(feature = "fetch")]
pub use crate::client::RestCountriesClient;
