// Output data structure for token deployment results

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::params::ParametersData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub canister_id: String,
    pub module_hash: String, // hex sha256 of the installed module
    pub deployer_principal: String,
    pub network: String,
    pub parameters: ParametersData,
    pub deployed_at_unix_secs: u64,
}

const OUTPUT_DIR: &str = "generated";
const OUTPUT_FILE: &str = "token_deployments.json";

pub fn get_output_dir() -> PathBuf {
    PathBuf::from(OUTPUT_DIR)
}

pub fn get_output_path() -> PathBuf {
    get_output_dir().join(OUTPUT_FILE)
}

/// Read every recorded deployment; a missing file means none yet
pub fn read_records_from(path: &Path) -> anyhow::Result<Vec<DeploymentRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read deployment data: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse deployment data JSON: {}", path.display()))
}

/// Append a record, keeping earlier deployments
pub fn append_record_to(path: &Path, record: DeploymentRecord) -> anyhow::Result<()> {
    let mut records = read_records_from(path)?;
    records.push(record);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write deployment data: {}", path.display()))?;
    Ok(())
}

pub fn read_records() -> anyhow::Result<Vec<DeploymentRecord>> {
    read_records_from(&get_output_path())
}

pub fn append_record(record: DeploymentRecord) -> anyhow::Result<()> {
    append_record_to(&get_output_path(), record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(canister_id: &str) -> DeploymentRecord {
        DeploymentRecord {
            contract_name: "AcrenToken".to_string(),
            canister_id: canister_id.to_string(),
            module_hash: "00".repeat(32),
            deployer_principal: "2vxsx-fae".to_string(),
            network: "http://127.0.0.1:8080".to_string(),
            parameters: ParametersData {
                name: "Gyld Token".to_string(),
                symbol: "GYL".to_string(),
                initial_supply: "1000000000000000000".to_string(),
                reserve_ratio: 500_000,
                platform_address: "500000".to_string(),
                sell_fee_basis_points: 20,
            },
            deployed_at_unix_secs: 1_700_000_000,
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let records = read_records_from(&dir.path().join("none.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn appends_instead_of_overwriting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generated").join(OUTPUT_FILE);

        append_record_to(&path, record("rrkah-fqaaa-aaaaa-aaaaq-cai")).unwrap();
        append_record_to(&path, record("ryjl3-tyaaa-aaaaa-aaaba-cai")).unwrap();

        let records = read_records_from(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].canister_id, "rrkah-fqaaa-aaaaa-aaaaq-cai");
        assert_eq!(records[1].canister_id, "ryjl3-tyaaa-aaaaa-aaaba-cai");
        assert_eq!(records[1], record("ryjl3-tyaaa-aaaaa-aaaba-cai"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        std::fs::write(&path, "{not json").unwrap();

        assert!(read_records_from(&path).is_err());
        assert!(append_record_to(&path, record("2vxsx-fae")).is_err());
    }
}
