// CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::grpc::Transport;

/// Send one test request to a DebtSimplifier service, or serve one
#[derive(Parser, Debug)]
#[command(name = "debtsimpl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "DebtSimplifier test client and echo service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Install shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send the test request and log the response (default)
    Invoke(InvokeArgs),

    /// Run the echo service on the RPC port
    Serve(ServeArgs),

    /// Settle a Splitwise export with as few transactions as possible
    Simplify(SimplifyArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InvokeArgs {
    /// Host the service runs on (overrides config file and environment)
    #[arg(long)]
    pub hostname: Option<String>,

    /// Wire protocol used to reach the service
    #[arg(long, value_enum)]
    pub transport: Option<Transport>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Interface to listen on
    #[arg(long)]
    pub address: Option<String>,

    /// Port to listen on
    #[arg(short = 'p', long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
pub struct SimplifyArgs {
    /// Splitwise CSV export to read
    #[arg(long, value_name = "FILE")]
    pub input_csv: PathBuf,
}
