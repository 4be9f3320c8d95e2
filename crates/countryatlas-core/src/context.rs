// crates/countryatlas-core/src/context.rs

//! The shared country-data context.
//!
//! One holder for "the currently viewed country", shared between views. The
//! detail view asks it to fetch by code; every consumer observes the same
//! record and re-renders when the version counter moves.

use crate::error::Result;
use crate::model::{Country, DefaultBackend};
use crate::traits::{AtlasBackend, CountrySource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// What happened to a fetched response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the held record.
    Applied,
    /// A newer request was issued while this one was in flight; the response
    /// was discarded and the held record is untouched.
    Stale,
}

/// Shared holder for the currently selected country.
///
/// The holder is either absent or present; a successful fetch moves it to
/// `present(record)`, and `present` can transition directly to a different
/// `present`. Failures leave the previous value untouched.
///
/// Requests are tagged with a generation token. A response whose token is no
/// longer current is discarded instead of applied, so out-of-order responses
/// cannot overwrite a newer selection.
pub struct CountryContext<S, B = DefaultBackend>
where
    B: AtlasBackend,
    S: CountrySource<B>,
{
    source: S,
    slot: Mutex<Option<Country<B>>>,
    generation: AtomicU64,
    version: AtomicU64,
}

impl<S, B> CountryContext<S, B>
where
    B: AtlasBackend,
    S: CountrySource<B>,
{
    pub fn new(source: S) -> Self {
        CountryContext {
            source,
            slot: Mutex::new(None),
            generation: AtomicU64::new(0),
            version: AtomicU64::new(0),
        }
    }

    /// The source this context fetches from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot of the currently held record, if any.
    pub fn current(&self) -> Option<Country<B>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Monotonic counter bumped on every applied replacement.
    ///
    /// Consumers keep the last version they rendered and re-render when this
    /// moves.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Fetch a country by code from the source and replace the held record.
    ///
    /// The code is trimmed before dispatch; no other validation happens here,
    /// the remote API is the authority on what a valid code is. On success
    /// the first matching record from the response becomes the held value.
    ///
    /// Returns [`FetchOutcome::Stale`] when a newer request overtook this one
    /// while its response was in flight.
    pub fn fetch_country_data(&self, code: &str) -> Result<FetchOutcome> {
        let ticket = self.begin_request();
        let country = self.source.fetch_by_code(code.trim())?;
        Ok(self.apply_response(ticket, country))
    }

    // Request lifecycle is split so the apply step can be exercised with
    // interleaved tickets. `begin_request` is the suspension boundary:
    // everything after it may observe a world where newer requests exist.

    fn begin_request(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn apply_response(&self, ticket: u64, country: Country<B>) -> FetchOutcome {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::Acquire) != ticket {
            return FetchOutcome::Stale;
        }
        *slot = Some(country);
        self.version.fetch_add(1, Ordering::AcqRel);
        FetchOutcome::Applied
    }
}
