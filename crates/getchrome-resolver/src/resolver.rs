use crate::installer::{self, CommandRunner, ProcessRunner};
use crate::{Error, ResolverConfig, Result, scan};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Marker file inside the cache directory whose presence means a previous
/// installation completed. Content is an informational timestamp, never
/// parsed.
pub const INSTALL_MARKER: &str = ".chrome-installed";

/// Resolve the path to a Chrome for Testing executable, installing one into
/// the per-user cache directory if none has been installed yet.
///
/// Resolution order: `CHROME_PATH` override, then marker-gated install via
/// @puppeteer/browsers, then a ranked scan of the cache directory.
pub fn resolve(config: &ResolverConfig, runner: &dyn CommandRunner) -> Result<PathBuf> {
    if let Some(chrome_path) = &config.chrome_path {
        if chrome_path.exists() {
            debug!(path = %chrome_path.display(), "using CHROME_PATH override");
            return Ok(chrome_path.clone());
        }
    }

    let cache_dir = config.cache_dir();
    let marker = cache_dir.join(INSTALL_MARKER);

    if !cache_dir.exists() || !marker.exists() {
        info!(cache_dir = %cache_dir.display(), "installing Chrome for Testing");
        fs::create_dir_all(&cache_dir)?;

        let invocations = installer::install_invocations(&cache_dir);
        installer::run_install(runner, &invocations)?;

        fs::write(&marker, chrono::Utc::now().to_rfc3339())?;
    }

    let candidates = scan::collect_candidates(&cache_dir, config.platform);
    debug!(count = candidates.len(), "collected executable candidates");

    scan::rank(candidates)
        .into_iter()
        .find(|p| p.exists())
        .ok_or(Error::NotFound { cache_dir })
}

/// Resolve using the real process environment and process spawner.
pub fn resolve_from_env() -> Result<PathBuf> {
    let config = ResolverConfig::from_env()?;
    resolve(&config, &ProcessRunner)
}
