use std::path::PathBuf;

use clap::Parser;

/// Faultline demo server
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "Demo server rendering every error kind as a uniform JSON body")]
pub struct Args {
    /// Path to configuration file; built-in defaults are used when omitted
    #[arg(short, long, env = "FAULTLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "FAULTLINE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
