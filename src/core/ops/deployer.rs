// Deployer capability: the seam between the invoker and the ledger

use anyhow::Result;
use candid::Principal;

use crate::core::ops::artifacts::Artifact;
use crate::core::params::ConstructorArgs;

/// Handle to a freshly deployed contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    pub canister_id: Principal,
    pub module_hash: [u8; 32],
}

/// Something that can turn an artifact plus constructor arguments into a
/// deployed contract. Network access, signing and fees live behind this trait.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Principal that signs the deployment
    fn deployer_principal(&self) -> Result<Principal>;

    /// Endpoint the deployment is sent to, for the record
    fn network(&self) -> &str;

    async fn deploy(&self, artifact: &Artifact, args: &ConstructorArgs) -> Result<DeployedContract>;
}
