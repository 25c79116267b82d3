use std::path::{Path, PathBuf};

use database::StoreConfig;
use serde::{Deserialize, Serialize};

use crate::PortalError;

pub const CONFIG_ENV_VAR: &str = "PORTAL_CONFIG";

/// Site-wide settings managed from the admin area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub admin_email: String,
    pub games_per_page: usize,
    pub featured_games_count: usize,
    pub posts_per_page: usize,
    pub enable_comments: bool,
    pub enable_blog: bool,
    pub enable_categories: bool,
    pub enable_search: bool,
    pub enable_maintenance: bool,
    pub maintenance_message: String,
    pub store: StoreConfig,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Zontal Arcade".to_string(),
            site_description: "The ultimate HTML5 gaming portal".to_string(),
            admin_email: "admin@zontal-arcade.com".to_string(),
            games_per_page: 12,
            featured_games_count: 8,
            posts_per_page: 6,
            enable_comments: true,
            enable_blog: true,
            enable_categories: true,
            enable_search: true,
            enable_maintenance: false,
            maintenance_message: "Site is under maintenance. Please check back later.".to_string(),
            store: StoreConfig::default(),
        }
    }
}

impl SiteSettings {
    pub fn from_yaml_str(contents: &str) -> Result<Self, PortalError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PortalError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PortalError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Config file precedence: CLI argument, then `PORTAL_CONFIG`, then
    /// defaults. Store settings inside the file are then overridden by
    /// `cli_seed` and `instant` as `StoreConfig::from_cli_or_env_or_yaml`
    /// describes.
    pub fn from_cli_or_env_or_yaml(
        cli_config: Option<PathBuf>,
        cli_seed: Option<PathBuf>,
        instant: bool,
    ) -> Result<Self, PortalError> {
        let config_path = if let Some(arg) = cli_config {
            Some(arg)
        } else if let Ok(env) = std::env::var(CONFIG_ENV_VAR) {
            Some(PathBuf::from(env))
        } else {
            None
        };

        let mut settings = match config_path {
            Some(path) => {
                log::info!("Loading site settings from {}", path.display());
                Self::from_path(&path)?
            }
            None => Self::default(),
        };
        settings.store = StoreConfig::from_cli_or_env_or_yaml(cli_seed, instant, Some(settings.store));
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_admin_screen() {
        let settings = SiteSettings::default();
        assert_eq!(settings.games_per_page, 12);
        assert_eq!(settings.featured_games_count, 8);
        assert_eq!(settings.posts_per_page, 6);
        assert!(settings.enable_comments);
        assert!(!settings.enable_maintenance);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let settings = SiteSettings::from_yaml_str(
            "site_name: Retro Corner\ngames_per_page: 24\nstore:\n  simulate_latency: false\n",
        )
        .unwrap();
        assert_eq!(settings.site_name, "Retro Corner");
        assert_eq!(settings.games_per_page, 24);
        assert_eq!(settings.posts_per_page, 6);
        assert!(!settings.store.simulate_latency);
    }

    #[test]
    fn test_cli_config_path_is_read() {
        let path = std::env::temp_dir().join("portal-settings-cli-test.yaml");
        std::fs::write(&path, "enable_blog: false\n").unwrap();

        let settings = SiteSettings::from_cli_or_env_or_yaml(Some(path.clone()), None, true).unwrap();
        assert!(!settings.enable_blog);
        assert!(!settings.store.simulate_latency);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let path = PathBuf::from("/definitely/not/here/portal.yaml");
        let err = SiteSettings::from_path(&path).unwrap_err();
        assert!(matches!(err, PortalError::Config { .. }));
    }
}
