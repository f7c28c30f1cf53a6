use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::{commands::run, host::ActionsHost, options::FormatOptions};
pub mod commands;
pub mod host;
pub mod options;
pub mod rewrite;
mod strategies;

pub use commands::RunStatus;
pub use host::{Host, MockHost};
pub use rewrite::{rewrite, rewrite_with};
pub use strategies::get_strategy;

/// Command line flags. Each input flag overrides the matching `INPUT_*` variable of an Actions step.
#[derive(Parser, Debug)]
#[command(
    name = "versionbump",
    author,
    version,
    about = "Rewrite the declared version of a Quarkus (pom.xml) or Angular (package.json) project",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    /// Project type: quarkus or angular
    #[arg(short, long)]
    app: Option<String>,

    /// Version to write into the manifest
    #[arg(short, long)]
    new_version: Option<String>,

    /// Directory containing the manifest (default: current directory)
    #[arg(short, long)]
    path: Option<String>,

    /// Fail when the manifest declares no version
    #[arg(short, long, default_value = "false")]
    error_on_unknown: bool,

    #[arg(short, long)]
    format: Option<FormatOptions>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn host(&self, host: ActionsHost) -> ActionsHost {
        let mut host = host;
        if let Some(app) = &self.app {
            host = host.with_input("app", app);
        }
        if let Some(new_version) = &self.new_version {
            host = host.with_input("new-version", new_version);
        }
        if let Some(path) = &self.path {
            host = host.with_input("path", path);
        }
        if self.error_on_unknown {
            host = host.with_input("error-on-unknown", "true");
        }
        host
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose).as_str().to_lowercase()));
    // a subscriber may already be installed when main runs more than once in a process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub async fn main(args: &[String]) -> RunStatus {
    let cli = Cli::parse_from(args);
    init_tracing(cli.verbose);
    let host = cli.host(ActionsHost::from_env());
    run(&host, cli.format).await
}
