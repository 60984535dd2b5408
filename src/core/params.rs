// Constructor parameters and their positional encoding

use anyhow::{Context, Result};
use candid::{Nat, encode_args};
use serde::{Deserialize, Serialize};

use crate::core::units::format_base_units;

/// Constructor parameters for the token contract.
///
/// Ranges are not checked here; the contract's constructor owns that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    pub name: String,
    pub symbol: String,
    /// Base units (human quantity scaled by 10^18)
    pub initial_supply: Nat,
    /// Parts per million
    pub reserve_ratio: u32,
    pub platform_address: Nat,
    pub sell_fee_basis_points: u32,
}

/// Candid-encoded constructor arguments, ready to pass as the init arg
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorArgs(pub Vec<u8>);

impl ConstructorArgs {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl DeploymentParameters {
    /// Encode as `(name, symbol, initial_supply, reserve_ratio, platform_address, sell_fee)`
    pub fn constructor_args(&self) -> Result<ConstructorArgs> {
        let bytes = encode_args((
            &self.name,
            &self.symbol,
            &self.initial_supply,
            self.reserve_ratio,
            &self.platform_address,
            self.sell_fee_basis_points,
        ))
        .context("Failed to encode constructor arguments")?;

        Ok(ConstructorArgs(bytes))
    }
}

/// JSON view of the parameters, amounts as plain decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametersData {
    pub name: String,
    pub symbol: String,
    pub initial_supply: String,
    pub reserve_ratio: u32,
    pub platform_address: String,
    pub sell_fee_basis_points: u32,
}

impl From<&DeploymentParameters> for ParametersData {
    fn from(params: &DeploymentParameters) -> Self {
        Self {
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            initial_supply: format_base_units(&params.initial_supply),
            reserve_ratio: params.reserve_ratio,
            platform_address: format_base_units(&params.platform_address),
            sell_fee_basis_points: params.sell_fee_basis_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candid::Decode;

    fn sample() -> DeploymentParameters {
        DeploymentParameters {
            name: "Gyld Token".to_string(),
            symbol: "GYL".to_string(),
            initial_supply: Nat::from(1_000_000_000_000_000_000u64),
            reserve_ratio: 500_000,
            platform_address: Nat::from(500_000u64),
            sell_fee_basis_points: 20,
        }
    }

    #[test]
    fn constructor_args_keep_positional_order() {
        let args = sample().constructor_args().unwrap();

        let (name, symbol, supply, ratio, platform, fee) =
            Decode!(args.as_bytes(), String, String, Nat, u32, Nat, u32).unwrap();

        assert_eq!(name, "Gyld Token");
        assert_eq!(symbol, "GYL");
        assert_eq!(supply, Nat::from(1_000_000_000_000_000_000u64));
        assert_eq!(ratio, 500_000);
        assert_eq!(platform, Nat::from(500_000u64));
        assert_eq!(fee, 20);
    }

    #[test]
    fn swapped_fields_change_the_encoding() {
        let mut swapped = sample();
        std::mem::swap(&mut swapped.name, &mut swapped.symbol);

        assert_ne!(
            sample().constructor_args().unwrap(),
            swapped.constructor_args().unwrap()
        );
    }

    #[test]
    fn json_view_uses_plain_decimal_amounts() {
        let data = ParametersData::from(&sample());
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["initial_supply"], "1000000000000000000");
        assert_eq!(json["platform_address"], "500000");
        assert_eq!(json["reserve_ratio"], 500_000);
        assert_eq!(json["sell_fee_basis_points"], 20);
    }
}
