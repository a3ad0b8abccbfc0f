use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The choice of line justification within the output width
///
/// Every output row is padded with blanks to the requested width. A row that
/// is already wider than the requested width is passed through untouched, so
/// justifying is idempotent and never truncates artwork.
///
/// The default is [`Justify::Center`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Flush left; all padding goes on the right.
    Left,
    /// Centered. When the padding is odd, the extra blank goes on the right.
    /// This is the default.
    #[default]
    Center,
    /// Flush right; all padding goes on the left.
    Right,
}

impl Justify {
    pub(crate) fn pad(self, row: String, to_width: usize) -> String {
        let Some(padding) = to_width.checked_sub(row.chars().count()) else {
            return row;
        };
        match self {
            Self::Left => row + &" ".repeat(padding),
            Self::Center => {
                let start = padding / 2;
                format!("{}{row}{}", " ".repeat(start), " ".repeat(padding - start))
            }
            Self::Right => " ".repeat(padding) + &row,
        }
    }
}

impl FromStr for Justify {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(ValidationError::UnknownJustify(other.to_owned())),
        }
    }
}

impl Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Center => write!(f, "center"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A validated rendering request
///
/// Construction through [`RenderRequest::new`] is the only way to get one, so
/// holding a `RenderRequest` means the text is non-empty and the width is
/// positive. The width is accepted as a signed integer because requests
/// arrive from boundaries (query strings, JSON) where nothing stops a caller
/// from sending `-5`, and that has to be reportable rather than unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    text: String,
    font: String,
    width: usize,
    justify: Justify,
}

impl RenderRequest {
    /// Validates the inputs and builds a request.
    ///
    /// Validation does not consult any catalog: whether `font` actually
    /// exists is decided at render time, after the request itself is known to
    /// be well-formed.
    ///
    /// # Errors
    /// Returns `Err` if `text` is empty or `width` is not positive.
    pub fn new(
        text: impl Into<String>,
        font: impl Into<String>,
        width: i64,
        justify: Justify,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let Ok(width @ 1..) = usize::try_from(width) else {
            return Err(ValidationError::NonPositiveWidth(width));
        };
        Ok(Self {
            text,
            font: font.into(),
            width,
            justify,
        })
    }

    /// The text to draw.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The name of the font to draw with.
    #[must_use]
    pub fn font(&self) -> &str {
        &self.font
    }

    /// The output width, in character cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The justification mode.
    #[must_use]
    pub const fn justify(&self) -> Justify {
        self.justify
    }
}

/// An error for request parameters that fail validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The text to render is empty.
    #[error("text must not be empty")]
    EmptyText,
    /// The requested width is zero or negative.
    #[error("width must be positive, got {0}")]
    NonPositiveWidth(i64),
    /// The justification is not one of the known modes.
    #[error(r#""{0}" is not a justification mode, expecting left, center or right"#)]
    UnknownJustify(String),
}

#[cfg(test)]
mod tests {
    use super::{Justify, RenderRequest, ValidationError};

    #[test]
    fn empty_text_rejected() {
        let result = RenderRequest::new("", "standard", 80, Justify::Center);
        assert_eq!(result.unwrap_err(), ValidationError::EmptyText);
    }

    #[test]
    fn non_positive_widths_rejected() {
        for width in [0, -1, -80, i64::MIN] {
            let result = RenderRequest::new("hi", "standard", width, Justify::Center);
            assert_eq!(
                result.unwrap_err(),
                ValidationError::NonPositiveWidth(width)
            );
        }
    }

    #[test]
    fn width_one_is_accepted() {
        let request = RenderRequest::new("hi", "standard", 1, Justify::Left).unwrap();
        assert_eq!(request.width(), 1);
    }

    #[test]
    fn unknown_font_passes_validation() {
        // existence is the catalog's concern, not the request's
        let request = RenderRequest::new("hi", "no-such-font", 80, Justify::Center);
        assert!(request.is_ok());
    }

    #[test]
    fn justify_parses_exactly_the_three_modes() {
        assert_eq!("left".parse::<Justify>().unwrap(), Justify::Left);
        assert_eq!("center".parse::<Justify>().unwrap(), Justify::Center);
        assert_eq!("right".parse::<Justify>().unwrap(), Justify::Right);
        assert_eq!(
            "centre".parse::<Justify>().unwrap_err(),
            ValidationError::UnknownJustify("centre".to_owned())
        );
        assert!("LEFT".parse::<Justify>().is_err());
    }

    #[test]
    fn justify_display_round_trips() {
        for justify in [Justify::Left, Justify::Center, Justify::Right] {
            assert_eq!(justify.to_string().parse::<Justify>().unwrap(), justify);
        }
    }

    #[test]
    fn pad_left_right_center() {
        assert_eq!(Justify::Left.pad("ab".to_owned(), 5), "ab   ");
        assert_eq!(Justify::Right.pad("ab".to_owned(), 5), "   ab");
        // odd padding: one fewer blank on the left
        assert_eq!(Justify::Center.pad("ab".to_owned(), 5), " ab  ");
        assert_eq!(Justify::Center.pad("ab".to_owned(), 6), "  ab  ");
    }

    #[test]
    fn pad_passes_through_wide_rows() {
        for justify in [Justify::Left, Justify::Center, Justify::Right] {
            assert_eq!(justify.pad("abcdef".to_owned(), 3), "abcdef");
        }
    }

    #[test]
    fn pad_is_idempotent() {
        for justify in [Justify::Left, Justify::Center, Justify::Right] {
            let once = justify.pad("ab".to_owned(), 7);
            let twice = justify.pad(once.clone(), 7);
            assert_eq!(once, twice);
        }
    }
}
