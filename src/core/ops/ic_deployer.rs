// Deployer backed by an ic-agent and the management canister

use anyhow::{Context, Result};
use candid::{Decode, Nat, Principal, encode_args};
use ic_agent::Agent;
use tracing::debug;

use crate::core::declarations::management::{
    CanisterInstallMode, CanisterSettings, CreateCanisterResult, InstallCodeArgs,
    ProvisionalCreateCanisterWithCyclesArgs,
};
use crate::core::ops::artifacts::Artifact;
use crate::core::ops::deployer::{DeployedContract, Deployer};
use crate::core::params::ConstructorArgs;

pub struct IcDeployer {
    pub agent: Agent,
    pub url: String,
    pub effective_canister_id: Principal,
    pub cycles: u128,
}

impl IcDeployer {
    pub const fn new(
        agent: Agent,
        url: String,
        effective_canister_id: Principal,
        cycles: u128,
    ) -> Self {
        Self {
            agent,
            url,
            effective_canister_id,
            cycles,
        }
    }

    /// Create an empty canister controlled by the agent's principal
    pub async fn create_canister(&self) -> Result<Principal> {
        let controller = self.deployer_principal()?;
        let args = ProvisionalCreateCanisterWithCyclesArgs {
            amount: Some(Nat::from(self.cycles)),
            settings: Some(CanisterSettings {
                controllers: Some(vec![controller]),
                ..Default::default()
            }),
            specified_id: None,
        };

        debug!(
            effective_canister_id = %self.effective_canister_id,
            cycles = self.cycles,
            "provisional_create_canister_with_cycles"
        );

        let result_bytes = self
            .agent
            .update(
                &Principal::management_canister(),
                "provisional_create_canister_with_cycles",
            )
            .with_effective_canister_id(self.effective_canister_id)
            .with_arg(encode_args((args,))?)
            .call_and_wait()
            .await
            .context("Failed to call provisional_create_canister_with_cycles")?;

        let result = Decode!(&result_bytes, CreateCanisterResult)
            .context("Failed to decode create canister result")?;

        Ok(result.canister_id)
    }

    /// Install a module into an empty canister
    pub async fn install_code(
        &self,
        canister_id: Principal,
        wasm_module: &[u8],
        arg: &[u8],
    ) -> Result<()> {
        let args = InstallCodeArgs {
            mode: CanisterInstallMode::Install,
            canister_id,
            wasm_module: wasm_module.to_vec(),
            arg: arg.to_vec(),
        };

        debug!(
            %canister_id,
            module_bytes = wasm_module.len(),
            arg_bytes = arg.len(),
            "install_code"
        );

        self.agent
            .update(&Principal::management_canister(), "install_code")
            .with_effective_canister_id(canister_id)
            .with_arg(encode_args((args,))?)
            .call_and_wait()
            .await
            .context("Failed to call install_code")?;

        Ok(())
    }
}

impl Deployer for IcDeployer {
    fn deployer_principal(&self) -> Result<Principal> {
        self.agent
            .get_principal()
            .map_err(|e| anyhow::anyhow!("Failed to get principal: {e}"))
    }

    fn network(&self) -> &str {
        &self.url
    }

    async fn deploy(&self, artifact: &Artifact, args: &ConstructorArgs) -> Result<DeployedContract> {
        let canister_id = self
            .create_canister()
            .await
            .with_context(|| format!("Failed to create canister for {}", artifact.contract_name))?;

        self.install_code(canister_id, &artifact.wasm_module, args.as_bytes())
            .await
            .with_context(|| {
                format!(
                    "Failed to install {} into canister {canister_id}",
                    artifact.contract_name
                )
            })?;

        Ok(DeployedContract {
            canister_id,
            module_hash: artifact.module_hash,
        })
    }
}
