use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of one of the windows registered with the shell, e.g. `"about"` or `"notepad"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for WindowId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
