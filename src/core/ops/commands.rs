// CLI command handlers

use anyhow::{Context, Result};

use crate::core::data_output::{get_output_path, read_records};
use crate::core::ops::deployment::{deploy_acren_token, print_parameters};
use crate::core::params::ParametersData;
use crate::core::units::{Unit, format_base_units, to_base_units};
use crate::core::utils::{print_header, print_info, print_warning};
use crate::init::token_config::{CONTRACT_NAME, build_deployment_parameters};

/// Handle deploy-token command
pub async fn handle_deploy_token(args: &[String]) -> Result<()> {
    let identity_name = args.get(2).map(String::as_str);
    deploy_acren_token(identity_name).await
}

/// Handle show-params command (no network access)
pub fn handle_show_params() -> Result<()> {
    print_header(&format!("{CONTRACT_NAME} Constructor Parameters"));

    let params = build_deployment_parameters()?;
    print_parameters(&params);

    let json = serde_json::to_string_pretty(&ParametersData::from(&params))
        .context("Failed to serialize parameters")?;
    println!("\n{json}\n");

    let encoded = params.constructor_args()?;
    print_info(&format!("Encoded constructor args: {}", encoded.to_hex()));
    Ok(())
}

/// Handle list-deployments command
pub fn handle_list_deployments() -> Result<()> {
    print_header("Recorded Deployments");

    let records = read_records()?;
    if records.is_empty() {
        print_warning(&format!(
            "No deployments recorded in {}",
            get_output_path().display()
        ));
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        println!(
            "  [{}] {} {} ({}) at {}",
            i + 1,
            record.contract_name,
            record.canister_id,
            record.network,
            record.deployed_at_unix_secs
        );
        println!("      deployer: {}", record.deployer_principal);
        println!("      module:   {}", record.module_hash);
    }
    Ok(())
}

/// Handle to-base-units command
pub fn handle_to_base_units(args: &[String]) -> Result<()> {
    if args.len() < 3 {
        print_to_base_units_usage(&args[0]);
        std::process::exit(1);
    }

    let unit = match args.get(3) {
        Some(unit) => unit.parse::<Unit>()?,
        None => Unit::Ether,
    };
    let amount = to_base_units(&args[2], unit)?;
    println!("{}", format_base_units(&amount));
    Ok(())
}

fn print_to_base_units_usage(program: &str) {
    eprintln!("Usage: {program} to-base-units <amount> [unit]");
    eprintln!("  unit: wei, kwei, mwei, gwei, szabo, finney, ether (default: ether)");
    eprintln!("\nExample:");
    eprintln!("  {program} to-base-units 1 ether   # 1000000000000000000");
}
