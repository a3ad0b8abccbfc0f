//! Banner fonts
//!
//! Font types and the logic for parsing `.mqf` font definitions.
//!
//! A `.mqf` file is line oriented. The first line is the header: the signature
//! `mqf1` immediately followed by the hardblank character, then the glyph
//! height and optionally the number of comment lines, separated by blanks.
//! After the comment lines come the glyph blocks. Each block is a *code tag*
//! line holding one or more codepoints (decimal, or hexadecimal with a `0x`
//! prefix) followed by exactly `height` rows of artwork, each terminated by an
//! `@` endmark. A tag with several codepoints binds the same artwork to each
//! of them, which is how fonts without distinct lowercase shapes alias `a`-`z`
//! onto `A`-`Z`.

use std::collections::HashMap;
use std::num::NonZero;
use std::str::FromStr;

use itertools::Itertools as _;
use thiserror::Error;

/// Endmark terminating every glyph row, stripped during parsing.
const ENDMARK: char = '@';

/// A banner font: a set of fixed-height glyphs keyed by character.
#[derive(Debug)]
pub struct Font {
    header: Header,
    comments: String,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    /// Decodes the contents of an `.mqf` file.
    ///
    /// Line endings are normalized first, so definitions saved with CRLF or
    /// bare CR terminators parse the same as LF ones.
    ///
    /// # Errors
    /// Returns `Err` if the header is malformed or any glyph block is
    /// incomplete, unterminated, or not rectangular; see [`FontError`] for
    /// details.
    pub fn parse(definition: &str) -> Result<Self, FontError> {
        let definition = definition.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines = definition.lines();
        let Some(header_line) = lines.next() else {
            return Err(FontError::BadHeader(HeaderError::Missing));
        };
        let header = Header::decode(header_line)?;
        let comments = lines.by_ref().take(header.comment_lines).join("\n");
        let mut glyphs = HashMap::new();
        for mut block in &lines.chunks(header.height.get() + 1) {
            let tag = block.next().expect("chunk size >= 1");
            let codepoints = Self::decode_tag(tag)?;
            let glyph = Glyph::parse(block, codepoints[0], &header)?;
            for codepoint in codepoints {
                // If two or more blocks bind the same codepoint, the last one
                // in the file is the one used.
                drop(glyphs.insert(codepoint, glyph.clone()));
            }
        }
        if glyphs.is_empty() {
            return Err(FontError::Empty);
        }
        Ok(Self {
            header,
            comments,
            glyphs,
        })
    }

    /// Splits a code tag line into the characters it binds.
    fn decode_tag(tag: &str) -> Result<Vec<char>, FontError> {
        let codepoints: Vec<char> = tag
            .split_whitespace()
            .map(Self::decode_codepoint)
            .try_collect()?;
        if codepoints.is_empty() {
            return Err(FontError::InvalidCodepoint(tag.to_owned()));
        }
        Ok(codepoints)
    }

    /// Parses a single codepoint, written either in decimal or in hexadecimal
    /// with a `0x`/`0X` prefix.
    fn decode_codepoint(codepoint: &str) -> Result<char, FontError> {
        let value = if let Some(hex) = codepoint
            .strip_prefix("0x")
            .or_else(|| codepoint.strip_prefix("0X"))
        {
            u32::from_str_radix(hex, 16)
        } else {
            codepoint.parse()
        }
        .map_err(|_| FontError::InvalidCodepoint(codepoint.to_owned()))?;
        char::from_u32(value).ok_or(FontError::CodepointOutOfRange(value))
    }

    /// The *comments* portion of the font, between the header and the glyph
    /// blocks. Usually names the font and its author.
    #[must_use]
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// The fully decoded font header.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Returns true if the font has a glyph for `char`.
    #[must_use]
    pub fn supports(&self, char: char) -> bool {
        self.glyphs.contains_key(&char)
    }

    /// The characters this font can draw, in no particular order.
    pub fn charset(&self) -> impl Iterator<Item = char> {
        self.glyphs.keys().copied()
    }

    pub(crate) fn get(&self, char: char) -> Option<&Glyph> {
        self.glyphs.get(&char)
    }
}

/// A font header.
#[derive(Clone, Copy, Debug)]
pub struct Header {
    /// The *hardblank* character; rendered as a blank (`' '`) but protected
    /// from being mistaken for layout padding inside glyph artwork. See
    /// [`Hardblank`].
    pub hardblank: Hardblank,
    /// Number of rows in each glyph. Every glyph in a given font has the same
    /// height, including any empty space above or below the visible shape.
    pub height: NonZero<usize>,
    /// Number of comment lines between the header and the glyph blocks. See
    /// also [`Font::comments`].
    pub comment_lines: usize,
}

impl Header {
    pub(crate) fn decode(header_line: &str) -> Result<Self, HeaderError> {
        let mut parameters = header_line.split_whitespace();
        let Some([signature_and_hardblank, height]) = parameters.next_array() else {
            return Err(HeaderError::NotEnoughParameters(header_line.to_owned()));
        };
        let comment_lines = parameters.next();
        let Some(hardblank) = signature_and_hardblank.strip_prefix("mqf1") else {
            return Err(HeaderError::UnknownSignature(
                signature_and_hardblank.to_owned(),
            ));
        };
        let Ok(hardblank) = hardblank.chars().exactly_one() else {
            return Err(HeaderError::HardblankLength(hardblank.to_owned()));
        };
        let hardblank = hardblank
            .try_into()
            .map_err(HeaderError::InvalidHardblankChar)?;
        let Some(height) = NonZero::new(IntParameter::Height.parse(height)?) else {
            return Err(HeaderError::ZeroHeight);
        };
        let comment_lines = comment_lines
            .map(|count| IntParameter::CommentLines.parse(count))
            .transpose()?
            .unwrap_or(0);
        Ok(Self {
            hardblank,
            height,
            comment_lines,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum IntParameter {
    Height,
    CommentLines,
}

impl IntParameter {
    fn parse<T: FromStr>(self, parameter: &str) -> Result<T, HeaderError> {
        parameter
            .parse()
            .map_err(|_| HeaderError::Parse(self.name(), parameter.to_owned()))
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Height => "Height",
            Self::CommentLines => "Comment_Lines",
        }
    }
}

/// A hardblank character
///
/// A hardblank is a special cell which is displayed as a blank (`' '`) once
/// rendered but counts as part of the glyph artwork until then, so blanks that
/// belong to a shape survive editors that trim trailing whitespace.
///
/// The usual hardblank is a `$`, but it can be any character except a blank
/// (`' '`), a carriage-return, a newline or a null character. A font whose
/// charset includes its own hardblank character could never draw it, so fonts
/// covering all of printable ASCII pick a hardblank outside that range.
#[derive(Clone, Copy, Debug)]
pub struct Hardblank(char);

impl PartialEq<char> for Hardblank {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other
    }
}

impl TryFrom<char> for Hardblank {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if matches!(value, ' ' | '\r' | '\n' | '\0') {
            Err(value)
        } else {
            Ok(Self(value))
        }
    }
}

/// One glyph: a rectangular block of rows, all the same width.
#[derive(Debug, Clone)]
pub struct Glyph {
    width: usize,
    rows: Vec<String>,
}

impl Glyph {
    #[expect(
        single_use_lifetimes,
        reason = "https://github.com/rust-lang/rust/issues/137575"
    )]
    fn parse<'a>(
        rows: impl Iterator<Item = &'a str>,
        glyph: char,
        header: &Header,
    ) -> Result<Self, FontError> {
        let mut parsed = Vec::with_capacity(header.height.get());
        for (row, line) in rows.enumerate() {
            let Some(line) = line.strip_suffix(ENDMARK) else {
                return Err(FontError::MissingEndmark { glyph, row });
            };
            parsed.push(line.to_owned());
        }
        if parsed.len() < header.height.get() {
            return Err(FontError::TruncatedGlyph {
                glyph,
                found: parsed.len(),
                height: header.height.get(),
            });
        }
        let width = parsed
            .iter()
            .map(|row| row.chars().count())
            .unique()
            .exactly_one()
            .map_err(|_| FontError::InconsistentWidth(glyph))?;
        Ok(Self {
            width,
            rows: parsed,
        })
    }

    /// Width of this glyph in character cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The glyph's rows, endmarks stripped, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// An error in decoding a font definition
#[derive(Debug, Error)]
pub enum FontError {
    /// An error in decoding the header
    #[error("bad header: {0}")]
    BadHeader(#[from] HeaderError),
    /// A code tag that is empty or cannot be parsed as a codepoint
    #[error(r#""{0}" is not a valid code tag"#)]
    InvalidCodepoint(String),
    /// A codepoint that is not a Unicode scalar value
    #[error("{0:#x} is not a Unicode scalar value")]
    CodepointOutOfRange(u32),
    /// A glyph row without a terminating endmark
    #[error("row {row} of glyph {glyph:?} does not end with an endmark")]
    MissingEndmark {
        /// The character the glyph block binds
        glyph: char,
        /// The offending row, counted from 0
        row: usize,
    },
    /// A glyph block cut short by the end of the file
    #[error("glyph {glyph:?} has {found} rows, expected {height}")]
    TruncatedGlyph {
        /// The character the glyph block binds
        glyph: char,
        /// The number of rows present
        found: usize,
        /// The height declared in the header
        height: usize,
    },
    /// A glyph whose rows are not all the same width
    #[error("glyph {0:?} has inconsistent width")]
    InconsistentWidth(char),
    /// A definition with no glyph blocks at all
    #[error("font defines no glyphs")]
    Empty,
}

/// An error in decoding a font header
#[derive(Debug, Error)]
pub enum HeaderError {
    /// There is no header, ie the contents are empty.
    #[error("missing header")]
    Missing,
    /// The header has no height parameter after the signature and hardblank.
    #[error(r#""{0}" does not include enough parameters"#)]
    NotEnoughParameters(String),
    /// The header does not begin with `"mqf1"`.
    #[error(r#""{0}" does not begin with "mqf1""#)]
    UnknownSignature(String),
    /// The hardblank is either missing or contains more than one character.
    #[error(r#"hardblank "{0}" is not exactly one character"#)]
    HardblankLength(String),
    /// The specified hardblank is a blank (space), a carriage-return, a
    /// newline (linefeed) or a null character.
    #[error("{0:?} must not be the hardblank")]
    InvalidHardblankChar(char),
    /// One of the integer parameters cannot be parsed.
    #[error(r#""{1}" cannot be parsed as the parameter `{0}`"#)]
    Parse(&'static str, String),
    /// The height parameter is 0
    #[error("height parameter is 0")]
    ZeroHeight,
}
