//! Locates, and if necessary installs, a Chrome for Testing executable.
//!
//! Resolution checks the `CHROME_PATH` override, then a per-OS cache
//! directory shared with @puppeteer/browsers, installing via `npx` on the
//! first run.

mod config;
mod error;
pub mod installer;
mod resolver;
pub mod scan;

pub use config::{Platform, ResolverConfig};
pub use error::{Error, Result};
pub use installer::{CommandRunner, ProcessRunner};
pub use resolver::{INSTALL_MARKER, resolve, resolve_from_env};
