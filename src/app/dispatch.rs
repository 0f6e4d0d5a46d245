use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use verified_card::Config;
use verified_card::core::providers::create_executor;
use verified_card::core::verification::{
    HEALTH_CHECK_MESSAGE, VerificationOracle, VerificationVerdict, build_verification_prompt,
    verify_offline,
};
use verified_card::transport::gateway::run_gateway;
use verified_card::transport::rpc::RpcClient;

fn print_verdict(verdict: &VerificationVerdict) -> Result<()> {
    let rendered = serde_json::to_string_pretty(verdict).context("render verdict")?;
    println!("{rendered}");
    Ok(())
}

/// Verify one card through the configured backend.
async fn run_verify(
    mut config: Config,
    name: &str,
    role: &str,
    provider: Option<String>,
    model: Option<String>,
) -> Result<()> {
    if let Some(provider) = provider {
        config.provider = provider;
    }
    if model.is_some() {
        config.model = model;
    }
    config.validate()?;

    let executor = create_executor(&config)?;
    let oracle = VerificationOracle::new(Arc::from(executor));
    info!(
        executor = oracle.executor_name(),
        "verifying card against backend"
    );

    print_verdict(&oracle.verify_card(name, role).await)
}

/// Run one subcommand. Only commands that talk to a backend or bind a socket
/// read `config.toml`.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Verify {
            name,
            role,
            provider,
            model,
            offline,
        } => {
            if offline {
                info!("verifying card offline");
                return print_verdict(&verify_offline(&name, &role));
            }
            run_verify(Config::load_or_init()?, &name, &role, provider, model).await
        }

        Commands::Health => {
            println!("{HEALTH_CHECK_MESSAGE}");
            Ok(())
        }

        Commands::Gateway { port, host } => {
            let mut gateway = Config::load_or_init()?.gateway;
            if let Some(port) = port {
                gateway.port = port;
            }
            if let Some(host) = host {
                gateway.host = host;
            }
            if gateway.port == 0 {
                info!("Starting mock gateway on {} (random port)", gateway.host);
            } else {
                info!("Starting mock gateway on {}:{}", gateway.host, gateway.port);
            }
            run_gateway(&gateway).await
        }

        Commands::Call { name, role, url } => {
            let mut config = Config::load_or_init()?;
            if let Some(url) = url {
                config.rpc.url = url;
            }
            let client = RpcClient::from_config(&config);
            info!(url = client.url(), "calling verify_card over JSON-RPC");
            print_verdict(&client.verify_card(&name, &role).await)
        }

        Commands::Prompt { name, role } => {
            println!("{}", build_verification_prompt(&name, &role)?);
            Ok(())
        }
    }
}
