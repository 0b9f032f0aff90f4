use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Host-supplied engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum undo depth. `None` keeps every snapshot.
    pub history_limit: Option<usize>,
    /// End a drag without committing when the surface loses focus.
    pub release_on_focus_loss: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            release_on_focus_loss: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_limit == Some(0) {
            debug!("rejecting config with zero history limit");
            return Err(Error::InvalidConfig(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
