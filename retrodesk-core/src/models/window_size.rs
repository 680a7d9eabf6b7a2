use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// One axis of a window's sizing hint. Either a fixed pixel value or `"auto"`,
/// meaning the content decides.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "DimensionRepr", into = "DimensionRepr")]
pub enum Dimension {
    Pixel(i32),
    Auto,
}

impl Dimension {
    /// Turn the hint into an absolute value. Pixel values are returned as is,
    /// `Auto` falls back to the provided `intrinsic` size.
    #[must_use]
    pub const fn into_absolute(self, intrinsic: i32) -> i32 {
        match self {
            Dimension::Pixel(x) => x,
            Dimension::Auto => intrinsic,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DimensionRepr {
    Pixel(i32),
    Keyword(String),
}

impl TryFrom<DimensionRepr> for Dimension {
    type Error = String;

    fn try_from(repr: DimensionRepr) -> Result<Self, Self::Error> {
        match repr {
            DimensionRepr::Pixel(x) => Ok(Dimension::Pixel(x)),
            DimensionRepr::Keyword(word) if word == "auto" => Ok(Dimension::Auto),
            DimensionRepr::Keyword(word) => match word.strip_suffix("px").map(str::parse) {
                Some(Ok(x)) => Ok(Dimension::Pixel(x)),
                _ => Err(format!("expected a pixel size or \"auto\", found {word:?}")),
            },
        }
    }
}

impl From<Dimension> for DimensionRepr {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Pixel(x) => DimensionRepr::Pixel(x),
            Dimension::Auto => DimensionRepr::Keyword("auto".to_owned()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl WindowSize {
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn pixels(width: i32, height: i32) -> Self {
        Self::new(Dimension::Pixel(width), Dimension::Pixel(height))
    }
}
