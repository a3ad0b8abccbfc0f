//! The font catalog
//!
//! A [`Catalog`] maps font names to parsed [`Font`]s. It is populated exactly
//! once, either from the definitions bundled in the `marquee-fonts` crate or
//! from any other collection of named `.mqf` definitions, and then serves
//! lookups for the rest of its life.

use std::collections::BTreeMap;

use itertools::Itertools as _;
#[cfg(feature = "fonts")]
pub use marquee_fonts::FontFile;
use thiserror::Error;

use crate::font::{Font, FontError};

/// How many known names a [`FontNotFoundError`] quotes back.
const SAMPLE_NAMES: usize = 5;

/// A named collection of fonts.
///
/// Names are kept sorted, so [`names`](Catalog::names) and everything built on
/// it come out in a stable order.
#[derive(Debug, Default)]
pub struct Catalog {
    fonts: BTreeMap<String, Font>,
    loaded: bool,
}

impl Catalog {
    /// Creates an empty, not yet loaded catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fonts: BTreeMap::new(),
            loaded: false,
        }
    }

    /// Parses and registers every definition in `source`, once.
    ///
    /// A definition that fails to parse is skipped rather than aborting the
    /// load: the fonts that did parse stay usable and the failures come back
    /// in an aggregated [`CatalogLoadError`], `Ok(None)` meaning every
    /// definition parsed. If two definitions share a name, the last one wins.
    ///
    /// # Errors
    /// Returns `Err` if the catalog has already been loaded; the existing
    /// fonts are left untouched.
    pub fn load_all<'d>(
        &mut self,
        source: impl IntoIterator<Item = (&'d str, &'d str)>,
    ) -> Result<Option<CatalogLoadError>, AlreadyLoadedError> {
        if self.loaded {
            return Err(AlreadyLoadedError);
        }
        self.loaded = true;
        let mut failures = Vec::new();
        for (name, definition) in source {
            match Font::parse(definition) {
                Ok(font) => {
                    log::debug!("loaded font {name}");
                    drop(self.fonts.insert(name.to_owned(), font));
                }
                Err(error) => {
                    log::warn!("skipping font {name}: {error}");
                    failures.push(FontLoadFailure {
                        name: name.to_owned(),
                        error,
                    });
                }
            }
        }
        Ok((!failures.is_empty()).then(|| CatalogLoadError { failures }))
    }

    /// Creates a catalog holding the fonts bundled in the `marquee-fonts`
    /// crate.
    ///
    /// Only available with the `fonts` feature.
    #[expect(clippy::missing_panics_doc, reason = "should be caught in tests")]
    #[cfg(feature = "fonts")]
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let failures = catalog
            .load_all(FontFile::ALL.map(|font| (font.name(), font.definition())))
            .expect("a fresh catalog has not been loaded");
        assert!(failures.is_none(), "Should be tested");
        catalog
    }

    /// Looks up a font by name.
    ///
    /// # Errors
    /// Returns `Err` if no font with that name is registered; the error quotes
    /// a few valid names to point the caller somewhere useful.
    pub fn get(&self, name: &str) -> Result<&Font, FontNotFoundError> {
        self.fonts
            .get(name)
            .ok_or_else(|| FontNotFoundError::new(name, self))
    }

    /// The registered font names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    /// Number of registered fonts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Returns true if no fonts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// An error for loading into a catalog that was already loaded
#[derive(Debug, Error, PartialEq, Eq)]
#[error("font catalog has already been loaded")]
pub struct AlreadyLoadedError;

/// An aggregated report of the definitions a load skipped
///
/// Produced by [`Catalog::load_all`]. Holding one of these does not mean the
/// catalog is unusable; every definition that parsed was registered.
#[derive(Debug, Error)]
#[error(
    "failed to load {} font definition(s): {}",
    .failures.len(),
    Self::describe(.failures)
)]
pub struct CatalogLoadError {
    failures: Vec<FontLoadFailure>,
}

impl CatalogLoadError {
    /// The skipped definitions, in source order.
    #[must_use]
    pub fn failures(&self) -> &[FontLoadFailure] {
        &self.failures
    }

    fn describe(failures: &[FontLoadFailure]) -> String {
        failures.iter().map(ToString::to_string).join("; ")
    }
}

/// A single definition that failed to parse during a load
#[derive(Debug, Error)]
#[error(r#"font "{name}": {error}"#)]
pub struct FontLoadFailure {
    /// The name the definition was registered under
    pub name: String,
    /// Why parsing failed
    pub error: FontError,
}

/// An error for looking up a name with no registered font
#[derive(Debug, Error)]
#[error(r#"font "{requested}" not found: {}"#, Self::describe(.sample, *.total))]
pub struct FontNotFoundError {
    requested: String,
    sample: Vec<String>,
    total: usize,
}

impl FontNotFoundError {
    fn new(requested: &str, catalog: &Catalog) -> Self {
        Self {
            requested: requested.to_owned(),
            sample: catalog
                .names()
                .take(SAMPLE_NAMES)
                .map(str::to_owned)
                .collect(),
            total: catalog.len(),
        }
    }

    /// The name that was requested.
    #[must_use]
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Up to [`SAMPLE_NAMES`] registered names, in sorted order.
    #[must_use]
    pub fn sample(&self) -> &[String] {
        &self.sample
    }

    /// How many fonts the catalog holds in total.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    fn describe(sample: &[String], total: usize) -> String {
        if total == 0 {
            "the catalog is empty".to_owned()
        } else {
            format!("valid fonts include {} ({total} total)", sample.join(", "))
        }
    }
}
