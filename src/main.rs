mod core;
mod init;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::core::ops::commands::{
    handle_deploy_token, handle_list_deployments, handle_show_params, handle_to_base_units,
};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Handle CLI commands
    if args.len() > 1 {
        match args[1].as_str() {
            "deploy-token" => return handle_deploy_token(&args).await,
            "show-params" => return handle_show_params(),
            "list-deployments" => return handle_list_deployments(),
            "to-base-units" => return handle_to_base_units(&args),
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("\nAvailable commands:");
                eprintln!("  deploy-token [identity]  - Deploy AcrenToken on local dfx network");
                eprintln!("  show-params              - Print constructor parameters and encoded args");
                eprintln!("  list-deployments         - List recorded token deployments");
                eprintln!("  to-base-units <amount> [unit] - Convert an amount to base units");
                std::process::exit(1);
            }
        }
    }

    // Default behavior: deploy the token if no arguments
    handle_deploy_token(&args).await
}
