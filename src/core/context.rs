//! Layer 2: context vocabulary
//!
//! Contexts are a fixed closed set of short codes, validated once at the
//! collaborator boundary. The core never derives them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ContextParseError;

/// Where/when a task can be worked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Home, daytime.
    Hmdy,
    /// Home, evening.
    Hmev,
    /// Workday, at the desk.
    Wkdy,
    /// Work, right now.
    Wknw,
    /// Weekend.
    Wknd,
    /// Errands, out of the house.
    Errd,
}

impl Context {
    pub const ALL: [Context; 6] = [
        Context::Hmdy,
        Context::Hmev,
        Context::Wkdy,
        Context::Wknw,
        Context::Wknd,
        Context::Errd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hmdy => "hmdy",
            Self::Hmev => "hmev",
            Self::Wkdy => "wkdy",
            Self::Wknw => "wknw",
            Self::Wknd => "wknd",
            Self::Errd => "errd",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Context {
    type Err = ContextParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ContextParseError { raw: s.to_string() })
    }
}
