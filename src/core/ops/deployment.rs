// Deployment orchestration functions

use anyhow::{Context, Result};
use candid::{Nat, Principal};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::core::data_output::{DeploymentRecord, append_record, get_output_path};
use crate::core::ops::artifacts::{Artifact, resolve_artifact};
use crate::core::ops::deployer::{DeployedContract, Deployer};
use crate::core::ops::ic_deployer::IcDeployer;
use crate::core::ops::identity::{create_agent, load_dfx_identity};
use crate::core::params::{DeploymentParameters, ParametersData};
use crate::core::units::format_base_units;
use crate::core::utils::constants::*;
use crate::core::utils::{print_header, print_info, print_step, print_success, print_warning};
use crate::init::token_config::{CONTRACT_NAME, build_deployment_parameters};

/// Issue exactly one deployment of `artifact` with `params` as constructor
/// arguments. Nothing is retried; running it again deploys a second contract.
pub async fn deploy_token<D: Deployer>(
    deployer: &D,
    artifact: &Artifact,
    params: &DeploymentParameters,
) -> Result<DeployedContract> {
    let args = params.constructor_args()?;

    info!(
        contract = %artifact.contract_name,
        network = deployer.network(),
        arg_bytes = args.as_bytes().len(),
        "deploying contract"
    );

    deployer
        .deploy(artifact, &args)
        .await
        .context("Deployment invocation failed")
}

/// Build an ic-agent backed deployer for the local replica
pub async fn initialize_deployer(identity_name: Option<&str>) -> Result<IcDeployer> {
    print_step("Loading dfx identity...");
    let identity = load_dfx_identity(identity_name)
        .context("Failed to load dfx identity. Make sure dfx is configured.")?;
    print_success("Dfx identity loaded");

    print_step("Creating agent...");
    let agent = create_agent(REPLICA_URL, identity).await?;
    print_success("Agent created");

    let effective_canister_id = Principal::from_text(EFFECTIVE_CANISTER_ID)
        .context("Failed to parse EFFECTIVE_CANISTER_ID principal")?;

    let deployer = IcDeployer::new(
        agent,
        REPLICA_URL.to_string(),
        effective_canister_id,
        TOKEN_CANISTER_CYCLES,
    );
    print_info(&format!(
        "Deployer principal: {}",
        deployer.deployer_principal()?
    ));

    Ok(deployer)
}

pub fn print_parameters(params: &DeploymentParameters) {
    print_info(&format!("Name: {}", params.name));
    print_info(&format!("Symbol: {}", params.symbol));
    print_info(&format!(
        "Initial supply: {} base units",
        format_base_units(&params.initial_supply)
    ));
    print_info(&format!("Reserve ratio: {} ppm", params.reserve_ratio));
    print_info(&format!(
        "Platform address: {}",
        format_base_units(&params.platform_address)
    ));
    print_info(&format!("Sell fee: {} bp", params.sell_fee_basis_points));
}

/// Build the record written after a successful deployment
pub fn build_record<D: Deployer>(
    deployer: &D,
    artifact: &Artifact,
    params: &DeploymentParameters,
    deployed: &DeployedContract,
) -> Result<DeploymentRecord> {
    let deployed_at_unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the unix epoch")?
        .as_secs();

    Ok(DeploymentRecord {
        contract_name: artifact.contract_name.clone(),
        canister_id: deployed.canister_id.to_string(),
        module_hash: hex::encode(deployed.module_hash),
        deployer_principal: deployer.deployer_principal()?.to_string(),
        network: deployer.network().to_string(),
        parameters: ParametersData::from(params),
        deployed_at_unix_secs,
    })
}

/// Main token deployment function - resolves, deploys and records the token
pub async fn deploy_acren_token(identity_name: Option<&str>) -> Result<()> {
    println!("🚀 Deploying {CONTRACT_NAME} on local dfx network\n");

    print_header("Constructor Parameters");
    let params = build_deployment_parameters()?;
    print_parameters(&params);
    if params.platform_address == Nat::from(params.reserve_ratio) {
        print_warning("Platform address equals the reserve ratio; check token_config.rs");
    }

    print_header("Resolving Artifact");
    print_step(&format!("Looking up {CONTRACT_NAME} in {ARTIFACTS_DIR}/..."));
    let artifact = resolve_artifact(Path::new(ARTIFACTS_DIR), CONTRACT_NAME)?;
    print_success(&format!("Artifact loaded: {}", artifact.path.display()));
    print_info(&format!("Module hash: {}", artifact.module_hash_hex()));

    print_header("Connecting to Replica");
    let deployer = initialize_deployer(identity_name).await?;

    print_header("Deploying Contract");
    print_step(&format!("Creating canister and installing {CONTRACT_NAME}..."));
    let deployed = deploy_token(&deployer, &artifact, &params).await?;
    print_success(&format!("{CONTRACT_NAME} deployed"));

    print_header("Writing Deployment Data");
    let record = build_record(&deployer, &artifact, &params, &deployed)?;
    append_record(record).context("Failed to write deployment data file")?;
    let output_path = get_output_path();
    print_success(&format!(
        "Deployment data written to: {}",
        output_path.display()
    ));

    print_header("Token Deployment Complete");
    print_info(&format!("Canister: {}", deployed.canister_id));
    print_info(&format!("Module hash: {}", hex::encode(deployed.module_hash)));
    println!("\n💡 Re-running deploy-token creates another, independent canister");

    Ok(())
}
