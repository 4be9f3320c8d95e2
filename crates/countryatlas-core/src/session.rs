// crates/countryatlas-core/src/session.rs

//! Ephemeral state of the listing view: search query, location preview,
//! display mode. Everything here dies with the session; nothing feeds back
//! into the data layer.

use crate::model::{Atlas, Country, LatLng};
use crate::traits::AtlasBackend;

/// Display mode for rendered output.
///
/// Presentation only: toggling the theme changes the style codes a renderer
/// picks, never the data being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip to the other mode. Exactly one flip per call.
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// ANSI style prefix for headings.
    pub fn heading(&self) -> &'static str {
        match self {
            Theme::Light => "\x1b[1;30m",
            Theme::Dark => "\x1b[1;97m",
        }
    }

    /// ANSI style prefix for badges (border chips, fallbacks).
    pub fn badge(&self) -> &'static str {
        match self {
            Theme::Light => "\x1b[44;97m",
            Theme::Dark => "\x1b[104;30m",
        }
    }

    /// ANSI reset suffix.
    pub const RESET: &'static str = "\x1b[0m";
}

/// Listing-view session state.
///
/// - the search query, replaced on every keystroke
/// - the selected location, created by a map-preview request and destroyed
///   when the preview closes
/// - the display mode
#[derive(Debug, Clone, Default)]
pub struct ExplorerSession {
    query: String,
    selected: Option<LatLng>,
    theme: Theme,
}

impl ExplorerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query (keystroke semantics: whole-value replace).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The location currently previewed, if any.
    pub fn selected_location(&self) -> Option<LatLng> {
        self.selected
    }

    /// Open a location preview.
    pub fn select_location(&mut self, latlng: LatLng) {
        self.selected = Some(latlng);
    }

    /// Close the preview, destroying the selected location.
    pub fn close_map(&mut self) {
        self.selected = None;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The listing, filtered by the current query.
    pub fn filtered<'a, B: AtlasBackend>(&self, atlas: &'a Atlas<B>) -> Vec<&'a Country<B>> {
        atlas.filter_by_name(&self.query)
    }
}
