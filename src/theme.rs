//! Light/dark theme and terminal theme detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable set by many terminals as `"<fg>;<bg>"`.
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// Page theme (light or dark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

impl Theme {
    /// Detect the theme reported by the environment.
    ///
    /// Reads `COLORFGBG`; defaults to Dark when unset or unreadable.
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var(COLORFGBG_ENV).ok().as_deref())
    }

    /// Interpret a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
    ///
    /// The last field is the background palette index. Indices 7 and 9..=15
    /// are light backgrounds.
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match background {
            Some(7) | Some(9..=15) => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns true if this is the dark theme.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns true if this is the light theme.
    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Lowercase name used in TOML and the page's `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn is_dark_and_is_light() {
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
        assert!(Theme::Light.is_light());
        assert!(!Theme::Dark.is_light());
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn colorfgbg_detection() {
        assert_eq!(Theme::from_colorfgbg(Some("15;0")), Theme::Dark);
        assert_eq!(Theme::from_colorfgbg(Some("0;15")), Theme::Light);
        assert_eq!(Theme::from_colorfgbg(Some("0;default;7")), Theme::Light);
        assert_eq!(Theme::from_colorfgbg(Some("garbage")), Theme::Dark);
        assert_eq!(Theme::from_colorfgbg(None), Theme::Dark);
    }

    #[test]
    fn serde_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            theme: Theme,
        }
        let s = toml::to_string(&Wrap { theme: Theme::Light }).unwrap();
        assert!(s.contains("theme = \"light\""));
        let w: Wrap = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(w.theme, Theme::Dark);
    }
}
