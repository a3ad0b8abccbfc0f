//! Renderer and rendering results
mod request;

use std::fmt::{self, Display};

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{Catalog, FontNotFoundError};
use crate::font::Font;

pub use request::{Justify, RenderRequest, ValidationError};

/// The main type for rendering
///
/// A renderer borrows a [`Catalog`] and turns [`RenderRequest`]s into banner
/// art. Each input line is composed by concatenating the glyph rows of its
/// characters at full size, hardblanks are replaced with blanks, and every
/// output row is justified within the requested width.
///
/// ```
/// # use marquee::catalog::Catalog;
/// # use marquee::render::{Justify, RenderRequest, Renderer};
/// let catalog = Catalog::builtin();
/// let request = RenderRequest::new("OK", "mini", 14, Justify::Center).unwrap();
/// let rendered = Renderer::new(&catalog).render(&request).unwrap();
/// let expected = concat!(
/// "    _         \n",
/// "   / \\ |_/    \n",
/// "   \\_/ | \\    "
/// );
/// assert_eq!(rendered.to_string(), expected);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'catalog> {
    catalog: &'catalog Catalog,
}

impl<'catalog> Renderer<'catalog> {
    /// Creates a renderer over the given catalog.
    pub const fn new(catalog: &'catalog Catalog) -> Self {
        Self { catalog }
    }

    /// Renders a request.
    ///
    /// The request's text is split into logical lines (`\r\n`, `\r` and `\n`
    /// all break lines; a trailing terminator does not produce an extra empty
    /// line) and each line contributes `height` output rows. The requested
    /// width only ever adds padding: input is never wrapped to fit it and
    /// rows wider than it are passed through whole.
    ///
    /// # Errors
    /// Returns `Err` if the requested font is not in the catalog or if the
    /// font has no glyph for one of the characters in the text.
    pub fn render(&self, request: &RenderRequest) -> Result<RenderResult, RenderError> {
        let font = self.catalog.get(request.font())?;
        let text = request.text().replace("\r\n", "\n").replace('\r', "\n");
        let mut rows = Vec::new();
        for (index, line) in text.lines().enumerate() {
            for row in Self::compose_line(font, line, index)? {
                let row = row
                    .chars()
                    .map(|c| if font.header().hardblank == c { ' ' } else { c })
                    .collect();
                rows.push(request.justify().pad(row, request.width()));
            }
        }
        log::debug!(
            "rendered {} chars into {} rows with font {}",
            request.text().chars().count(),
            rows.len(),
            request.font()
        );
        Ok(RenderResult::new(request, rows))
    }

    /// Composes one logical line by concatenating glyph rows at full size.
    fn compose_line(
        font: &Font,
        line: &str,
        index: usize,
    ) -> Result<Vec<String>, UnsupportedGlyphError> {
        let mut rows = vec![String::new(); font.header().height.get()];
        for (column, char) in line.chars().enumerate() {
            let Some(glyph) = font.get(char) else {
                return Err(UnsupportedGlyphError {
                    glyph: char,
                    line: index + 1,
                    column: column + 1,
                });
            };
            for (row, glyph_row) in rows.iter_mut().zip(glyph.rows()) {
                row.push_str(glyph_row);
            }
        }
        Ok(rows)
    }
}

/// The outcome of a successful render: output rows plus request metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    rows: Vec<String>,
    metadata: Metadata,
}

impl RenderResult {
    fn new(request: &RenderRequest, rows: Vec<String>) -> Self {
        let metadata = Metadata {
            original_text: request.text().to_owned(),
            font: request.font().to_owned(),
            width: request.width(),
            alignment: request.justify(),
            line_count: rows.len(),
        };
        Self { rows, metadata }
    }

    /// The rendered rows, top to bottom. A text of `n` logical lines drawn
    /// with a height-`h` font has exactly `n * h` rows.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Metadata describing the request that produced this result.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn into_metadata(self) -> Metadata {
        self.metadata
    }
}

impl Display for RenderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in &self.rows {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
            first = false;
        }
        Ok(())
    }
}

/// A description of how a [`RenderResult`] was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// The text that was rendered, exactly as requested.
    pub original_text: String,
    /// The name of the font that drew it.
    pub font: String,
    /// The requested output width.
    pub width: usize,
    /// The justification mode.
    pub alignment: Justify,
    /// Number of output rows. Counts actual rows, so a height-3 font drawing
    /// one line gives 3.
    pub line_count: usize,
}

/// An error in rendering a request
///
/// The first three variants are caused by the request and map to client
/// errors at an HTTP boundary; [`EmptyCatalog`](RenderError::EmptyCatalog) is
/// a deployment problem and maps to a server error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested font is not in the catalog.
    #[error("{0}")]
    FontNotFound(#[from] FontNotFoundError),
    /// The request parameters fail validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The font has no glyph for one of the characters in the text.
    #[error("{0}")]
    UnsupportedGlyph(#[from] UnsupportedGlyphError),
    /// There are no fonts to draw with at all.
    #[error("the font catalog is empty")]
    EmptyCatalog,
}

/// An error for a character the chosen font cannot draw
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "font has no glyph for {} (line {line}, column {column})",
    Self::char_debug(*.glyph)
)]
pub struct UnsupportedGlyphError {
    /// The character with no glyph
    pub glyph: char,
    /// 1-based logical line of the character in the input
    pub line: usize,
    /// 1-based column of the character within its line
    pub column: usize,
}

impl UnsupportedGlyphError {
    pub(crate) fn char_debug(glyph: char) -> String {
        format!("{glyph:?} (U+{:04X})", u32::from(glyph))
    }
}
