use crate::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Operating systems with distinct cache-directory and binary-name
/// conventions. Anything that is not macOS or Windows follows the
/// Linux/XDG rules.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        return Platform::MacOs;

        #[cfg(target_os = "windows")]
        return Platform::Windows;

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return Platform::Linux;
    }
}

/// Environment-derived inputs to resolution, captured once up front so the
/// resolver never reads the process environment itself.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    pub platform: Platform,
    pub home_dir: PathBuf,
    /// `CHROME_PATH` override: trusted verbatim when it exists on disk.
    pub chrome_path: Option<PathBuf>,
    /// `LOCALAPPDATA` base directory (Windows only).
    pub local_app_data: Option<PathBuf>,
    /// `XDG_CACHE_HOME` base directory (Linux/Unix only).
    pub xdg_cache_home: Option<PathBuf>,
    /// When set, used verbatim as the cache directory instead of the
    /// per-OS convention. Driven by `GETCHROME_CACHE_ROOT`.
    pub cache_root: Option<PathBuf>,
}

impl ResolverConfig {
    /// Capture the real process environment.
    pub fn from_env() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| Error::Config("could not determine home directory".to_string()))?;

        Ok(Self {
            platform: Platform::current(),
            home_dir,
            chrome_path: env_path("CHROME_PATH"),
            local_app_data: env_path("LOCALAPPDATA"),
            xdg_cache_home: env_path("XDG_CACHE_HOME"),
            cache_root: env_path("GETCHROME_CACHE_ROOT"),
        })
    }

    /// Per-OS, per-user directory where browser binaries are cached.
    /// Shared with @puppeteer/browsers, which installs into it.
    pub fn cache_dir(&self) -> PathBuf {
        if let Some(root) = &self.cache_root {
            return root.clone();
        }

        match self.platform {
            Platform::MacOs => self
                .home_dir
                .join("Library")
                .join("Caches")
                .join("puppeteer-browsers"),
            Platform::Windows => self
                .local_app_data
                .clone()
                .unwrap_or_else(|| self.home_dir.join("AppData").join("Local"))
                .join("puppeteer-browsers"),
            Platform::Linux => self
                .xdg_cache_home
                .clone()
                .unwrap_or_else(|| self.home_dir.join(".cache"))
                .join("puppeteer-browsers"),
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}
