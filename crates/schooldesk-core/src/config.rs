use crate::error::SchoolDeskError;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::result::SchoolDeskResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_ITEMS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub default_items_per_page: Option<usize>,
    #[serde(default)]
    pub items_per_page_options: Option<Vec<usize>>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/schooldesk/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("schooldesk/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("schooldesk\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults on any problem.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring config file: {}", e),
                }
            }
        }
        Self::default()
    }

    /// Load an explicitly named config file.
    pub fn load_from(path: &Path) -> SchoolDeskResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| SchoolDeskError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> SchoolDeskResult<Self> {
        toml::from_str(content).map_err(|source| SchoolDeskError::Config {
            path: "<inline>".to_string(),
            source,
        })
    }

    pub fn effective_items_per_page(&self) -> usize {
        self.default_items_per_page
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    /// Page sizes offered by the pager, zeros dropped.
    pub fn effective_items_per_page_options(&self) -> Vec<usize> {
        let options: Vec<usize> = self
            .items_per_page_options
            .iter()
            .flatten()
            .copied()
            .filter(|&n| n > 0)
            .collect();
        if options.is_empty() {
            DEFAULT_ITEMS_PER_PAGE_OPTIONS.to_vec()
        } else {
            options
        }
    }

    pub fn is_allowed_page_size(&self, items_per_page: usize) -> bool {
        self.effective_items_per_page_options()
            .contains(&items_per_page)
    }
}
