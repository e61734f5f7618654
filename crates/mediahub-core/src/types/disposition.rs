//! `Content-Disposition` type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a download is rendered by the client or saved to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispositionType {
    /// Render in the browser.
    Inline,
    /// Force a download.
    Attachment,
}

impl DispositionType {
    /// The header token for this disposition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Attachment => "attachment",
        }
    }
}

impl fmt::Display for DispositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispositionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "attachment" => Ok(Self::Attachment),
            other => Err(format!("Unknown disposition type: {other}")),
        }
    }
}
