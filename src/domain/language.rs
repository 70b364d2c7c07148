//! Editing language value object

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidLanguageError;

/// Languages the note backend understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// The wire code sent to the backend
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// The other language; translation always targets the opposite of
    /// the editing language
    pub const fn opposite(&self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            _ => Err(InvalidLanguageError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hi);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn opposite_flips() {
        assert_eq!(Language::En.opposite(), Language::Hi);
        assert_eq!(Language::Hi.opposite(), Language::En);
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Hi.to_string(), "hi");
    }
}
