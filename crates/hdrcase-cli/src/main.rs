// crates/hdrcase-cli/src/main.rs

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cmd;

#[derive(Parser)]
#[command(name = "hdrcase")]
#[command(about = "Normalize header-name and char literal casing in a generated source file", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub target: cmd::TargetArgs,

    /// Report lines that would change without writing; exit non-zero if any would
    #[arg(long)]
    pub check: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the changed lines, logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    if cli.check {
        cmd::check::run(cli.target)
    } else {
        cmd::rewrite::run(cli.target)
    }
}
