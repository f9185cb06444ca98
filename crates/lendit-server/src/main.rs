use std::net::SocketAddr;

use clap::Parser;
use lendit_core::LendingPolicy;
use lendit_server::{LenditServer, ServerConfig};

#[derive(Parser)]
#[command(name = "lendit-server", about = "Peer-to-peer item-lending registry", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Lending policy: `permissive` only requires that the item and
    /// borrower exist, `strict` also rejects self-borrow and re-borrow.
    #[arg(long, value_enum, default_value = "permissive")]
    policy: PolicyArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PolicyArg {
    Permissive,
    Strict,
}

impl From<PolicyArg> for LendingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Permissive => LendingPolicy::Permissive,
            PolicyArg::Strict => LendingPolicy::Strict,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = ServerConfig {
        bind_addr: cli.bind,
        policy: cli.policy.into(),
    };
    LenditServer::in_memory(config).serve().await?;
    Ok(())
}
