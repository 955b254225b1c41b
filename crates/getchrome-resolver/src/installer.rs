use crate::{Error, Result};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// One way of invoking the installer: a program plus its arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    fn npx(program: PathBuf, cache_dir: &Path) -> Self {
        let args = vec![
            "-y".to_string(),
            "@puppeteer/browsers".to_string(),
            "install".to_string(),
            "chrome@stable".to_string(),
            "--path".to_string(),
            cache_dir.display().to_string(),
            "--quiet".to_string(),
        ];
        Self { program, args }
    }
}

/// Ordered installer strategies: `npx` from PATH first, then an `npx`
/// sitting next to the current executable (covers Node installs whose bin
/// directory is not on PATH).
pub fn install_invocations(cache_dir: &Path) -> Vec<Invocation> {
    let mut invocations = vec![Invocation::npx(PathBuf::from("npx"), cache_dir)];

    if let Ok(current_exe) = env::current_exe() {
        if let Some(dir) = current_exe.parent() {
            invocations.push(Invocation::npx(dir.join("npx"), cache_dir));
        }
    }

    invocations
}

/// Executes installer invocations. Kept behind a trait so tests can script
/// exit statuses without spawning anything.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ExitStatus>;
}

/// Spawns the real process with inherited stdio and blocks until it exits,
/// so installer progress and errors reach the user's terminal.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ExitStatus> {
        Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
    }
}

/// Try each invocation in order; the first zero exit wins.
pub fn run_install(runner: &dyn CommandRunner, invocations: &[Invocation]) -> Result<()> {
    if which::which("npx").is_err() {
        warn!("npx not found on PATH, relying on fallback invocation");
    }

    for invocation in invocations {
        debug!(
            program = %invocation.program.display(),
            "invoking @puppeteer/browsers installer"
        );
        match runner.run(invocation) {
            Ok(status) if status.success() => return Ok(()),
            Ok(status) => {
                debug!(code = ?status.code(), "installer invocation exited non-zero");
            }
            Err(e) => {
                debug!(error = %e, "installer invocation failed to start");
            }
        }
    }

    Err(Error::Installation(
        "all installer invocations failed".to_string(),
    ))
}
