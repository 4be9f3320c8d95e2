// crates/countryatlas-core/src/traits.rs
use crate::error::Result;
use crate::model::Country;
use crate::text::fold_key;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the atlas.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so atlases can be cached
/// via bincode.
pub trait AtlasBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;
    /// Convert an `f64` into the backend float representation.
    fn float_from(f: f64) -> Self::Float;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }

    /// Convert backend float to plain `f64` (useful for WASM serialization).
    fn float_to_f64(v: Self::Float) -> f64;
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes Unicode‑aware, accent-insensitive and case-insensitive
/// comparisons based on [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`] — equality on folded form
/// - [`NameMatch::name_contains`] — substring match on folded form
///
/// # Examples
/// ```rust
/// use countryatlas_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Türkiye").is_named("turkiye"));
/// assert!(Place("Åland Islands").name_contains("aland"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// Where country records come from.
///
/// The two operations mirror the remote API surface: the full set for the
/// listing, and a single record by short code for the detail view. The live
/// HTTP client implements this; so does [`crate::Atlas`] itself, which makes
/// the in-memory set usable as an offline source and keeps tests off the
/// network.
pub trait CountrySource<B: AtlasBackend> {
    /// Fetch the full country set.
    fn fetch_all(&self) -> Result<Vec<Country<B>>>;

    /// Fetch one country by its short code (cca2 or cca3).
    ///
    /// An empty result from the underlying source is an error
    /// ([`crate::AtlasError::CountryNotFound`]), never a silent absence.
    fn fetch_by_code(&self, code: &str) -> Result<Country<B>>;
}

impl<B: AtlasBackend, S: CountrySource<B> + ?Sized> CountrySource<B> for Box<S> {
    fn fetch_all(&self) -> Result<Vec<Country<B>>> {
        (**self).fetch_all()
    }

    fn fetch_by_code(&self, code: &str) -> Result<Country<B>> {
        (**self).fetch_by_code(code)
    }
}
