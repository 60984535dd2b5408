// Management canister (aaaaa-aa) Candid type definitions
// Only the calls used for creating and installing a canister

#![allow(dead_code)]

use candid::{CandidType, Deserialize, Nat, Principal};

#[derive(CandidType, Deserialize, Debug, Default)]
pub struct CanisterSettings {
    pub controllers: Option<Vec<Principal>>,
    pub compute_allocation: Option<Nat>,
    pub memory_allocation: Option<Nat>,
    pub freezing_threshold: Option<Nat>,
}

#[derive(CandidType, Deserialize, Debug)]
pub struct ProvisionalCreateCanisterWithCyclesArgs {
    pub amount: Option<Nat>,
    pub settings: Option<CanisterSettings>,
    pub specified_id: Option<Principal>,
}

#[derive(CandidType, Deserialize, Debug)]
pub struct CreateCanisterResult {
    pub canister_id: Principal,
}

#[derive(CandidType, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanisterInstallMode {
    #[serde(rename = "install")]
    Install,
    #[serde(rename = "reinstall")]
    Reinstall,
}

#[derive(CandidType, Deserialize, Debug)]
pub struct InstallCodeArgs {
    pub mode: CanisterInstallMode,
    pub canister_id: Principal,
    pub wasm_module: Vec<u8>, // blob
    pub arg: Vec<u8>,         // blob
}
