use clap::{Parser, Subcommand};
use gstscope_core::cli::conf::ConfigCmd;
use gstscope_core::cli::upload::UploadArgs;
use gstscope_core::conf::load_config;
use gstscope_core::logging::{init_cli_logging, init_logging};
use gstscope_core::{cli, server};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gstscope",
    version,
    about = "gstscope: upload, filter and chart GStreamer debug logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the gstscope server (default)
    Run {
        /// Path to the config directory
        #[arg(long, default_value = "config")]
        config: PathBuf,
    },

    /// Upload a log file to a running server
    Upload(UploadArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run { config }) => serve(config),
        None => serve(PathBuf::from("config")),
        Some(Command::Upload(args)) => {
            init_cli_logging();
            cli::upload::run(args)
        }
        Some(Command::Config { cmd }) => cli::conf::run(cmd),
    }
}

fn serve(config_dir: PathBuf) -> anyhow::Result<()> {
    let cfg = load_config(&config_dir)?;
    init_logging(&cfg.logging);
    tracing::info!(config = %config_dir.display(), "starting gstscope");
    server::run(cfg)
}
