use crate::router::Route;
use cricket_api::client::DataSource;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_BASE_URL: &str = "HCTUI_BASE_URL";
pub const ENV_DATA_DIR: &str = "HCTUI_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "HCTUI_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub data_source: DataSource,
    pub initial_route: Route,
    /// Problems met while loading. Settings are read before the logger is
    /// installed, so `main` logs these once it is.
    pub warnings: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            data_source: DataSource::default(),
            initial_route: Route::Home,
            warnings: Vec::new(),
        }
    }
}

/// `settings.json` layout. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct SettingsFile {
    base_url: Option<String>,
    data_dir: Option<PathBuf>,
    log_level: Option<String>,
    full_screen: Option<bool>,
    start_route: Option<String>,
}

impl AppSettings {
    /// Defaults, then the settings file, then environment variables.
    pub fn load() -> Self {
        Self::load_from(&settings_path(), |key| std::env::var(key).ok())
    }

    fn load_from(path: &Path, var: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Ok(content) = std::fs::read_to_string(path) {
            match serde_json::from_str::<SettingsFile>(&content) {
                Ok(file) => settings.apply_file(file),
                Err(e) => settings
                    .warnings
                    .push(format!("ignoring invalid settings file {}: {e}", path.display())),
            }
        }
        settings.apply_env(var);
        settings
    }

    fn apply_file(&mut self, file: SettingsFile) {
        if let Some(url) = file.base_url.filter(|u| !u.trim().is_empty()) {
            self.data_source = DataSource::Http(url);
        }
        if let Some(dir) = file.data_dir {
            self.data_source = DataSource::Directory(dir);
        }
        if let Some(level) = file.log_level {
            self.set_log_level(&level);
        }
        if let Some(full_screen) = file.full_screen {
            self.full_screen = full_screen;
        }
        if let Some(route) = file.start_route {
            self.initial_route = Route::parse(&route);
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            self.data_source = DataSource::Http(url);
        }
        // A local directory wins over a base URL when both are set.
        if let Some(dir) = var(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            self.data_source = DataSource::Directory(PathBuf::from(dir));
        }
        if let Some(level) = var(ENV_LOG_LEVEL) {
            self.set_log_level(&level);
        }
    }

    pub fn set_log_level(&mut self, level: &str) {
        match LevelFilter::from_str(level.trim()) {
            Ok(level) => self.log_level = Some(level),
            Err(_) => self.warnings.push(format!("unknown log level {level:?}")),
        }
    }
}

fn settings_path() -> PathBuf {
    config_dir(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
    .join("settings.json")
}

fn config_dir(xdg: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(config_dir) = xdg.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(config_dir).join("hctui");
    }
    if let Some(home) = home.filter(|h| !h.trim().is_empty()) {
        return Path::new(&home).join(".config").join("hctui");
    }
    PathBuf::from(".")
}
