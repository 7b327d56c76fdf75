use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour mode {0:?} (expected bw, wb or color)")]
pub struct ParseColourModeError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMode {
    /// Inside black, outside white.
    #[default]
    BlackWhite,
    /// Inside white, outside black.
    WhiteBlack,
    /// Inside black, outside cycles through hues by escape iteration.
    ColourCycle,
}

impl ColourMode {
    pub const ALL: &'static [Self] = &[Self::BlackWhite, Self::WhiteBlack, Self::ColourCycle];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::BlackWhite => Self::WhiteBlack,
            Self::WhiteBlack => Self::ColourCycle,
            Self::ColourCycle => Self::BlackWhite,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BlackWhite => "Black/white",
            Self::WhiteBlack => "White/black",
            Self::ColourCycle => "Colour cycle",
        }
    }
}

impl FromStr for ColourMode {
    type Err = ParseColourModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bw" => Ok(Self::BlackWhite),
            "wb" => Ok(Self::WhiteBlack),
            "color" | "colour" => Ok(Self::ColourCycle),
            _ => Err(ParseColourModeError(s.to_owned())),
        }
    }
}

impl std::fmt::Display for ColourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
