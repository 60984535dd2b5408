// Constants for token deployment

// Local replica (dfx start)
pub const REPLICA_URL: &str = "http://127.0.0.1:8080";
pub const INGRESS_EXPIRY_SECS: u64 = 300;

// Management canister calls need an effective canister id on the target subnet.
// Any canister id on the local application subnet works; the NNS ledger is always there.
pub const EFFECTIVE_CANISTER_ID: &str = "ryjl3-tyaaa-aaaaa-aaaba-cai";

// Cycles attached to the new token canister (provisional, local replica only)
pub const TOKEN_CANISTER_CYCLES: u128 = 2_000_000_000_000; // 2T cycles

// Compiled contract modules, one <snake_case_name>.wasm(.gz) per contract
pub const ARTIFACTS_DIR: &str = "artifacts";
