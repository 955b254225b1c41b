use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "get-chrome")]
#[command(author, version)]
#[command(
    about = "Ensure Chrome for Testing is installed and emit its executable path",
    long_about = "Ensures Chrome for Testing is installed via @puppeteer/browsers and prints \
                  its executable path as JSON. Set CHROME_PATH to bypass installation entirely."
)]
struct Cli {}

#[derive(Serialize)]
#[serde(untagged)]
enum Payload {
    Path { path: String },
    Error { error: String },
}

fn main() -> Result<ExitCode> {
    let Cli {} = Cli::parse();

    init_logging();

    // Both payloads go to stdout; only the exit status distinguishes them.
    match getchrome_resolver::resolve_from_env() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "resolved chrome executable");
            let payload = Payload::Path {
                path: path.display().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let payload = Payload::Error {
                error: e.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    // Diagnostics go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
