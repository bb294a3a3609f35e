use clap::{ArgAction, Parser};
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server settings, read from flags or `CALC_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "calculation-api")]
#[command(about = "HTTP API for basic arithmetic and random numbers")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "CALC_BIND", default_value_t = default_bind())]
    pub bind: SocketAddr,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "CALC_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Allow cross-origin requests from any origin
    #[arg(
        long,
        env = "CALC_CORS_PERMISSIVE",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub cors_permissive: bool,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            cors_permissive: true,
        }
    }
}
