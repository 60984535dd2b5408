// Candid declarations for the canisters this tool calls

pub mod management;
