// Token configuration for deployment
// Modify this file to customize the constructor parameters

use anyhow::{Context, Result};
use candid::Nat;

use crate::core::params::DeploymentParameters;
use crate::core::units::{Unit, to_base_units};

/// Contract to resolve from the artifacts directory
pub const CONTRACT_NAME: &str = "AcrenToken";

// ============================================================================
// CONSTRUCTOR PARAMETERS
// ============================================================================
pub const TOKEN_NAME: &str = "Gyld Token";
pub const TOKEN_SYMBOL: &str = "GYL";

/// Initial supply in human units, converted with `INITIAL_SUPPLY_UNIT`
pub const INITIAL_SUPPLY: &str = "1";
pub const INITIAL_SUPPLY_UNIT: Unit = Unit::Ether;

/// Bonding-curve reserve ratio in parts per million (500_000 = 50%)
pub const RESERVE_RATIO: u32 = 500_000;

/// Placeholder carried over as-is. It equals RESERVE_RATIO and is almost
/// certainly not a real platform address; confirm with the contract owner
/// before deploying anywhere but a local replica.
pub const PLATFORM_ADDRESS: u64 = 500_000;

/// Fee charged on sells, in basis points
pub const SELL_FEE: u32 = 20;

/// Build the constructor parameters for the token contract
pub fn build_deployment_parameters() -> Result<DeploymentParameters> {
    let initial_supply = to_base_units(INITIAL_SUPPLY, INITIAL_SUPPLY_UNIT)
        .context("Failed to convert initial supply to base units")?;

    Ok(DeploymentParameters {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        initial_supply,
        reserve_ratio: RESERVE_RATIO,
        platform_address: Nat::from(PLATFORM_ADDRESS),
        sell_fee_basis_points: SELL_FEE,
    })
}
