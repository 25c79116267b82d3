use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fixtures::Fixtures;
use crate::gateway::{LatencyProfile, MockGateway};
use crate::StoreError;

pub const SEED_ENV_VAR: &str = "PORTAL_SEED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// When false every service answers immediately.
    pub simulate_latency: bool,
    /// Seed file; the built-in catalogue is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            seed_path: None,
        }
    }
}

impl StoreConfig {
    /// Seed path precedence: CLI argument, then `PORTAL_SEED`, then the YAML
    /// config, then the built-in catalogue. `instant` from the CLI switches
    /// latency off regardless of the YAML value.
    pub fn from_cli_or_env_or_yaml(
        cli_seed: Option<PathBuf>,
        instant: bool,
        yaml_config: Option<StoreConfig>,
    ) -> Self {
        let yaml_config = yaml_config.unwrap_or_default();
        let seed_path = if let Some(arg) = cli_seed {
            Some(arg)
        } else if let Ok(env) = std::env::var(SEED_ENV_VAR) {
            Some(PathBuf::from(env))
        } else {
            yaml_config.seed_path
        };

        Self {
            simulate_latency: yaml_config.simulate_latency && !instant,
            seed_path,
        }
    }

    pub fn load_fixtures(&self) -> Result<Fixtures, StoreError> {
        match &self.seed_path {
            Some(path) => Fixtures::from_path(path),
            None => Ok(Fixtures::builtin()),
        }
    }

    pub fn gateway(&self, profile: LatencyProfile) -> MockGateway {
        if self.simulate_latency {
            MockGateway::new(profile)
        } else {
            MockGateway::instant()
        }
    }
}
