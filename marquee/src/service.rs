//! The banner service
//!
//! [`Service`] bundles a catalog with the three operations an outer transport
//! (HTTP handler, CLI, whatever) exposes: generate art from parameters, list
//! the fonts, and produce a random sample. Parameters and responses are plain
//! serde types so any boundary can shuttle them as JSON unchanged.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::render::{Justify, Metadata, RenderError, RenderRequest, RenderResult, Renderer};

/// Font used when a request does not name one.
pub const DEFAULT_FONT: &str = "standard";
/// Output width used when a request does not give one.
pub const DEFAULT_WIDTH: i64 = 80;

/// Phrases the random sample draws from.
const SAMPLE_TEXTS: [&str; 5] = [
    "Hello World",
    "ASCII Rocks",
    "Marquee",
    "Big Type",
    "Make Art",
];

/// A catalog plus the operations served over it.
#[derive(Debug)]
pub struct Service {
    catalog: Catalog,
}

impl Service {
    /// Creates a service over an already loaded catalog.
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Creates a service over the bundled fonts.
    ///
    /// Only available with the `fonts` feature.
    #[cfg(feature = "fonts")]
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    /// The catalog this service draws from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Renders banner art from boundary parameters.
    ///
    /// The justification arrives as a string and is parsed here, so an
    /// unknown mode fails as a [`ValidationError`](RenderError::Validation)
    /// before any font is resolved or composed.
    ///
    /// # Errors
    /// Returns `Err` if the parameters fail validation, the font is unknown,
    /// or the font cannot draw the text.
    pub fn generate(&self, params: &RenderParams) -> Result<ArtResponse, RenderError> {
        let justify: Justify = params.justify.parse()?;
        let request = RenderRequest::new(
            params.text.as_str(),
            params.font.as_str(),
            params.width,
            justify,
        )?;
        let rendered = Renderer::new(&self.catalog).render(&request)?;
        Ok(ArtResponse::new(rendered))
    }

    /// Lists the registered fonts in sorted order, with their count.
    #[must_use]
    pub fn fonts(&self) -> FontList {
        let fonts: Vec<String> = self.catalog.names().map(str::to_owned).collect();
        let count = fonts.len();
        FontList { fonts, count }
    }

    /// Renders a random sample phrase in a random font, using the default
    /// width and justification.
    ///
    /// The font is drawn once and that same draw both renders the art and is
    /// reported in the response, so the two can never disagree.
    ///
    /// # Errors
    /// Returns `Err` with [`RenderError::EmptyCatalog`] if there are no fonts
    /// to pick from.
    pub fn random(&self) -> Result<ArtResponse, RenderError> {
        let names: Vec<&str> = self.catalog.names().collect();
        if names.is_empty() {
            return Err(RenderError::EmptyCatalog);
        }
        let seed = clock_seed();
        let font = names[seed % names.len()];
        let text = SAMPLE_TEXTS[(seed / names.len()) % SAMPLE_TEXTS.len()];
        log::debug!("random sample: {text:?} in font {font}");
        let request = RenderRequest::new(text, font, DEFAULT_WIDTH, Justify::default())?;
        let rendered = Renderer::new(&self.catalog).render(&request)?;
        Ok(ArtResponse::new(rendered))
    }
}

/// Picks a pseudo-random seed off the wall clock. Uniform enough for choosing
/// a sample phrase; not a source of real randomness.
#[expect(
    clippy::cast_possible_truncation,
    reason = "seconds and nanoseconds are only stirred into a seed"
)]
fn clock_seed() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() as usize ^ elapsed.as_secs() as usize)
        .unwrap_or_default()
}

/// Parameters for [`Service::generate`], as they arrive from a boundary.
///
/// Everything except the text is optional on the wire; missing fields take
/// the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    /// The text to render.
    pub text: String,
    /// Font name; defaults to [`DEFAULT_FONT`].
    #[serde(default = "default_font")]
    pub font: String,
    /// Output width; defaults to [`DEFAULT_WIDTH`]. Kept signed so that a
    /// negative width reaches validation instead of failing to deserialize.
    #[serde(default = "default_width")]
    pub width: i64,
    /// Justification mode; defaults to `"center"`. Held as a string and
    /// validated by [`Service::generate`].
    #[serde(default = "default_justify")]
    pub justify: String,
}

impl RenderParams {
    /// Parameters for `text` with every other field at its default.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: default_font(),
            width: DEFAULT_WIDTH,
            justify: default_justify(),
        }
    }
}

fn default_font() -> String {
    DEFAULT_FONT.to_owned()
}

const fn default_width() -> i64 {
    DEFAULT_WIDTH
}

fn default_justify() -> String {
    Justify::default().to_string()
}

/// A rendered banner, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtResponse {
    /// The rendered rows joined with newlines.
    pub ascii_art: String,
    /// The font that drew the art.
    pub font_used: String,
    /// How the art was produced.
    pub metadata: Metadata,
}

impl ArtResponse {
    fn new(rendered: RenderResult) -> Self {
        let ascii_art = rendered.to_string();
        let metadata = rendered.into_metadata();
        Self {
            ascii_art,
            font_used: metadata.font.clone(),
            metadata,
        }
    }
}

/// The font inventory, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontList {
    /// Registered font names in sorted order.
    pub fonts: Vec<String>,
    /// How many there are.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DEFAULT_FONT, DEFAULT_WIDTH, RenderParams, SAMPLE_TEXTS, Service};
    use crate::catalog::Catalog;
    use crate::font::tests::ARROWS;
    use crate::render::RenderError;

    fn arrows_service() -> Service {
        let mut catalog = Catalog::new();
        catalog.load_all([("arrows", ARROWS)]).unwrap();
        Service::new(catalog)
    }

    #[test]
    fn params_default_off_the_wire() {
        let params: RenderParams = serde_json::from_value(json!({"text": "hi"})).unwrap();
        assert_eq!(params.font, DEFAULT_FONT);
        assert_eq!(params.width, DEFAULT_WIDTH);
        assert_eq!(params.justify, "center");
    }

    #[test]
    fn generate_renders_and_reports() {
        let service = arrows_service();
        let params = RenderParams {
            text: "AV".to_owned(),
            font: "arrows".to_owned(),
            width: 6,
            justify: "left".to_owned(),
        };
        let response = service.generate(&params).unwrap();
        assert_eq!(response.ascii_art, "/\\\\/  \n\\//\\  ");
        assert_eq!(response.font_used, "arrows");
        assert_eq!(response.metadata.line_count, 2);
        assert_eq!(response.metadata.original_text, "AV");
    }

    #[test]
    fn generate_rejects_unknown_justify_before_font_lookup() {
        let service = arrows_service();
        let params = RenderParams {
            font: "no-such-font".to_owned(),
            justify: "sideways".to_owned(),
            ..RenderParams::new("A")
        };
        let error = service.generate(&params).unwrap_err();
        assert!(
            matches!(error, RenderError::Validation(_)),
            "expected validation to fail first, got {error:?}"
        );
    }

    #[test]
    fn generate_rejects_empty_text() {
        let service = arrows_service();
        let error = service.generate(&RenderParams::new("")).unwrap_err();
        assert!(matches!(error, RenderError::Validation(_)));
    }

    #[test]
    fn fonts_lists_names_and_count() {
        let service = arrows_service();
        let list = service.fonts();
        assert_eq!(list.fonts, ["arrows"]);
        assert_eq!(list.count, 1);
        assert_eq!(list.count, list.fonts.len());
    }

    #[test]
    fn art_response_serializes_the_agreed_shape() {
        let service = arrows_service();
        let params = RenderParams {
            font: "arrows".to_owned(),
            ..RenderParams::new("A")
        };
        let value = serde_json::to_value(service.generate(&params).unwrap()).unwrap();
        assert!(value["ascii_art"].is_string());
        assert_eq!(value["font_used"], "arrows");
        let metadata = &value["metadata"];
        assert_eq!(metadata["original_text"], "A");
        assert_eq!(metadata["font"], "arrows");
        assert_eq!(metadata["width"], 80);
        assert_eq!(metadata["alignment"], "center");
        assert_eq!(metadata["line_count"], 2);
    }

    #[test]
    fn font_list_serializes_the_agreed_shape() {
        let service = arrows_service();
        let value = serde_json::to_value(service.fonts()).unwrap();
        assert_eq!(value, json!({"fonts": ["arrows"], "count": 1}));
    }

    #[cfg(feature = "fonts")]
    #[test]
    fn random_draws_from_catalog_and_samples() {
        let service = Service::builtin();
        let response = service.random().unwrap();
        assert!(
            service.catalog().names().any(|name| name == response.font_used),
            "font {} is not in the catalog",
            response.font_used
        );
        assert!(
            SAMPLE_TEXTS.contains(&response.metadata.original_text.as_str()),
            "unexpected sample {:?}",
            response.metadata.original_text
        );
        assert_eq!(response.metadata.width, 80);
        assert_eq!(response.metadata.alignment.to_string(), "center");
        assert_eq!(response.font_used, response.metadata.font);
    }

    #[test]
    fn random_on_empty_catalog_is_an_error() {
        let service = Service::new(Catalog::new());
        let error = service.random().unwrap_err();
        assert!(matches!(error, RenderError::EmptyCatalog));
    }
}
