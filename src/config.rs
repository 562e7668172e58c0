//! Engine configuration, read from JSON.
//!
//! Every field has a default, so `{}` is a complete configuration:
//!
//! ```json
//! {
//!   "depth": 3,
//!   "capture_policy": "per_piece",
//!   "first_side": "red",
//!   "automated_side": "white",
//!   "pruning": "alpha_beta",
//!   "max_nodes": null,
//!   "max_plies": 200
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checkers::piece::Side;
use crate::checkers::rules::CapturePolicy;
use crate::game::TurnController;
use crate::search::{Pruning, SearchConfig, SearchLimits, DEFAULT_DEPTH};

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_first_side() -> Side {
    Side::Red
}

fn default_automated_side() -> Side {
    Side::White
}

fn default_max_plies() -> u32 {
    200
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default)]
    pub capture_policy: CapturePolicy,
    #[serde(default = "default_first_side")]
    pub first_side: Side,
    #[serde(default = "default_automated_side")]
    pub automated_side: Side,
    #[serde(default)]
    pub pruning: Pruning,
    #[serde(default)]
    pub max_nodes: Option<u64>,
    /// Turn cap for self-play drivers.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            capture_policy: CapturePolicy::default(),
            first_side: default_first_side(),
            automated_side: default_automated_side(),
            pruning: Pruning::default(),
            max_nodes: None,
            max_plies: default_max_plies(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, error: String },
    Parse { path: String, error: String },
    Invalid { reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, error } => write!(f, "cannot read {path}: {error}"),
            ConfigError::Parse { path, error } => write!(f, "invalid JSON in {path}: {error}"),
            ConfigError::Invalid { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, "<string>")
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse {
                path: origin.to_string(),
                error: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Invalid {
                reason: "depth must be >= 1".to_string(),
            });
        }
        if self.max_nodes == Some(0) {
            return Err(ConfigError::Invalid {
                reason: "max_nodes must be >= 1 when set".to_string(),
            });
        }
        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_depth(self.depth)
            .with_pruning(self.pruning)
            .with_capture_policy(self.capture_policy)
            .with_limits(SearchLimits {
                max_nodes: self.max_nodes.unwrap_or(u64::MAX),
            })
    }

    /// Whether the engine, rather than a human, moves for `side`.
    #[inline]
    pub fn engine_plays(&self, side: Side) -> bool {
        side == self.automated_side
    }

    pub fn new_game(&self) -> TurnController {
        TurnController::new()
            .with_first_side(self.first_side)
            .with_policy(self.capture_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{"depth": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
