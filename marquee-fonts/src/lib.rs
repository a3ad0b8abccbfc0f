//! Collection of `.mqf` fonts to be used by the [`marquee`] crate.
//!
//! [`marquee`]: ../marquee/index.html

macro_rules! fonts {
    ($($name:ident => $file_name:expr,)*) => {

        /// Bundled fonts
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[non_exhaustive]
        pub enum FontFile {
            $(
                #[doc = concat!("Font `", $file_name, ".mqf`")]
                $name,
            )*
        }

        impl FontFile {
            /// An array containing all the variants
            pub const ALL: [Self; const{0 $(+ {_ = $file_name; 1} )*}] = [$(Self::$name),*];

            /// The contents of a font definition file
            #[must_use]
            pub const fn definition(&self) -> &'static str {
                match self {
                    $(Self::$name => include_str!(concat!("../fonts/", $file_name, ".mqf")),)*
                }
            }

            /// The file stem, used as the catalog name
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => $file_name,)*
                }
            }

            /// Match a font name to a bundled font
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($file_name => Some(Self::$name),)*
                    _ => None,
                }
            }

        }

    };
}

fonts! {
    Banner => "banner",
    Mini => "mini",
    Slant => "slant",
    Standard => "standard",
    Term => "term",
}

#[cfg(test)]
mod tests {
    use super::FontFile;

    #[test]
    fn names_round_trip() {
        for font in FontFile::ALL {
            assert_eq!(FontFile::from_name(font.name()), Some(font));
        }
        assert_eq!(FontFile::from_name("no such font"), None);
    }

    #[test]
    fn definitions_carry_the_signature() {
        for font in FontFile::ALL {
            assert!(
                font.definition().starts_with("mqf1"),
                "{} does not look like a font definition",
                font.name()
            );
        }
    }
}
