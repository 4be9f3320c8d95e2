// crates/countryatlas-core/src/lib.rs

pub mod api; // JSON views
#[cfg(feature = "fetch")]
pub mod client;
pub mod context;
pub mod error;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod search; // Lookup/filter impls on Atlas
pub mod session;
pub mod text;
pub mod traits;
// Shared Raw Input (wire-format mirror, used by client and loaders)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{AtlasError, Result};
pub use crate::model::{
    build_atlas, Atlas, AtlasStats, Country, DefaultAtlas, DefaultBackend, LatLng,
    StandardBackend,
};
pub use crate::context::{CountryContext, FetchOutcome};
pub use crate::session::{ExplorerSession, Theme};
// Export Text Utils
pub use crate::text::{equals_folded, fold_key};
// Export the Traits (Crucial for users!)
pub use crate::traits::{AtlasBackend, CountrySource, NameMatch};

#[cfg(feature = "fetch")]
pub use crate::client::{RestCountriesClient, API_BASE_URL};
