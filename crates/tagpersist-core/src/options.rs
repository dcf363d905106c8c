//! Persistence configuration
//!
//! Options are plain serde data so a hosting application can keep them in
//! its own configuration file and hand them over as JSON.

use serde::{Deserialize, Serialize};

use crate::errors::{PersistError, Result};

/// Default bound on component nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Tunables for a persist call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistOptions {
    /// Maximum component nesting before `DepthExceeded` is raised
    pub max_depth: usize,
    /// Indentation unit written once per nesting level
    pub tab_string: String,
    /// Line terminator
    pub new_line: String,
    /// Mark explicit child controls with `runat="server"`
    pub child_controls_run_at_server: bool,
}

impl Default for PersistOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            tab_string: "\t".to_string(),
            new_line: "\n".to_string(),
            child_controls_run_at_server: false,
        }
    }
}

impl PersistOptions {
    /// Parse options from JSON; absent fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the JSON is malformed or the resulting
    /// options fail [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).map_err(|e| PersistError::InvalidInput {
            reason: format!("Invalid persist options: {}", e),
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_tab_string(mut self, tab_string: impl Into<String>) -> Self {
        self.tab_string = tab_string.into();
        self
    }

    pub fn with_child_controls_run_at_server(mut self, enabled: bool) -> Self {
        self.child_controls_run_at_server = enabled;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` when `max_depth` is zero, `tab_string` is empty
    /// or contains non-whitespace, or `new_line` is neither `\n` nor `\r\n`.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(PersistError::InvalidInput {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        if self.tab_string.is_empty() || !self.tab_string.chars().all(|c| c == ' ' || c == '\t') {
            return Err(PersistError::InvalidInput {
                reason: "tab_string must be one or more spaces or tabs".to_string(),
            });
        }
        if self.new_line != "\n" && self.new_line != "\r\n" {
            return Err(PersistError::InvalidInput {
                reason: "new_line must be \\n or \\r\\n".to_string(),
            });
        }
        Ok(())
    }
}
