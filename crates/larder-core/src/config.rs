use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root application configuration, loaded from `~/.config/larder/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub dialog: DialogConfig,
    pub worker: WorkerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding the consumable catalog.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Overlay size as a percentage of the terminal, `[width, height]`.
    pub overlay_size: [u16; 2],
    pub confirm_delete_prompt: String,
    /// Open the selection dialog when the add-consumption form is shown
    /// and nothing has been picked yet.
    pub auto_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub enabled: bool,
    pub script_url: String,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for CatalogConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("larder");

        Self {
            path: data_dir.join("catalog.json").to_string_lossy().to_string(),
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            overlay_size: [60, 70],
            confirm_delete_prompt: "Are you sure you want to delete this?".to_string(),
            auto_open: true,
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script_url: "/assets/service-worker.js".to_string(),
        }
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/larder/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("LARDER_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("larder")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the standard path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        self.save_to(&path)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Path to the catalog file.
    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.catalog.path)
    }

    /// Directory for log files written while the TUI owns the terminal.
    pub fn log_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("larder")
            .join("logs")
    }

    /// Flat key/value listing used by `larder config list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("catalog.path", self.catalog.path.clone()),
            (
                "dialog.overlay_size",
                format!("{}x{}", self.dialog.overlay_size[0], self.dialog.overlay_size[1]),
            ),
            (
                "dialog.confirm_delete_prompt",
                self.dialog.confirm_delete_prompt.clone(),
            ),
            ("dialog.auto_open", self.dialog.auto_open.to_string()),
            ("worker.enabled", self.worker.enabled.to_string()),
            ("worker.script_url", self.worker.script_url.clone()),
        ]
    }
}
