use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target operating system of a mod. Stored in the database and shown in the
/// UI as its label ("Android", "Windows", "iPhone"); addressed in URLs by its
/// lowercase section key ("android", "windows", "iphone").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Android,
    Windows,
    #[serde(rename = "iPhone")]
    Iphone,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Invalid platform: {0}")]
pub struct PlatformParseError(pub String);

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Android, Platform::Windows, Platform::Iphone];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Windows => "Windows",
            Platform::Iphone => "iPhone",
        }
    }

    pub fn section(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Windows => "windows",
            Platform::Iphone => "iphone",
        }
    }

    /// Parses the `section` URL parameter value.
    pub fn from_section(s: &str) -> Option<Platform> {
        match s {
            "android" => Some(Platform::Android),
            "windows" => Some(Platform::Windows),
            "iphone" => Some(Platform::Iphone),
            _ => None,
        }
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Android" => Ok(Platform::Android),
            "Windows" => Ok(Platform::Windows),
            "iPhone" => Ok(Platform::Iphone),
            _ => Err(PlatformParseError(s.into())),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
