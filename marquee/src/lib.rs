//! A crate for rendering text as ASCII-art banners using named bitmap fonts.
//!
//! # Features
//!
//! - A catalog of named fonts, loaded once from `.mqf` definitions
//!   ([`Catalog`](crate::catalog::Catalog))
//! - Full-size glyph composition with multi-line input
//!   ([`Renderer`](crate::render::Renderer))
//! - Width-aware justification that pads but never wraps or truncates
//!   ([`Justify`](crate::render::Justify))
//! - A boundary-friendly operation surface with serde-ready parameter and
//!   response types ([`Service`](crate::service::Service))
//!
//! # Example
//!
//! ```
//! # use marquee::catalog::Catalog;
//! # use marquee::render::{Justify, RenderRequest, Renderer};
//! let catalog = Catalog::builtin();
//! let request = RenderRequest::new("HI", "standard", 1, Justify::Left)?;
//! let rendered = Renderer::new(&catalog).render(&request)?;
//! let expected = concat!(
//! r"|   | ___ ", "\n",
//! r"|   |  |  ", "\n",
//! r"|___|  |  ", "\n",
//! r"|   |  |  ", "\n",
//! r"|   | _|_ ", "\n",
//! r"          "
//! );
//! assert_eq!(rendered.to_string(), expected);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature flags
//!
//! - `fonts` (default): bundles the font definitions from the
//!   `marquee-fonts` package (via a dependency), which can be loaded using
//!   [`Catalog::builtin()`](crate::catalog::Catalog::builtin)

pub mod catalog;
pub mod font;
pub mod render;
pub mod service;
