use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How [`resume_attributes_updates`](crate::AttributesManager::resume_attributes_updates)
/// treats values that become pending while it is flushing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushMode {
    /// Flush a snapshot of the pending values taken when the flush starts.
    #[default]
    SinglePass,
    /// Keep flushing until nothing is pending, up to `max_flush_passes`.
    Fixpoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flush mode: {0:?}")]
pub struct ParseFlushModeError(pub String);

impl FromStr for FlushMode {
    type Err = ParseFlushModeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-pass" | "single_pass" | "single" => Ok(FlushMode::SinglePass),
            "fixpoint" | "drain" => Ok(FlushMode::Fixpoint),
            _ => Err(ParseFlushModeError(s.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    pub flush_mode: FlushMode,
    /// Flush pending writes when a render pass completes while connected.
    pub flush_after_render: bool,
    pub max_flush_passes: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            flush_mode: FlushMode::default(),
            flush_after_render: false,
            max_flush_passes: 16,
        }
    }
}

impl ManagerConfig {
    pub fn with_flush_mode(mut self, flush_mode: FlushMode) -> Self {
        self.flush_mode = flush_mode;
        self
    }

    pub fn with_flush_after_render(mut self, flush_after_render: bool) -> Self {
        self.flush_after_render = flush_after_render;
        self
    }

    pub fn with_max_flush_passes(mut self, max_flush_passes: usize) -> Self {
        self.max_flush_passes = max_flush_passes;
        self
    }
}
