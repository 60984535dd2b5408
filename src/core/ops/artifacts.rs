// Contract artifact resolution

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

const WASM_MAGIC: &[u8] = b"\0asm";
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// A compiled contract module ready to install
#[derive(Debug, Clone)]
pub struct Artifact {
    pub contract_name: String,
    pub path: PathBuf,
    pub wasm_module: Vec<u8>,
    pub module_hash: [u8; 32],
}

impl Artifact {
    pub fn module_hash_hex(&self) -> String {
        hex::encode(self.module_hash)
    }
}

/// File stem for a contract name: `AcrenToken` -> `acren_token`
pub fn artifact_file_stem(contract_name: &str) -> String {
    let mut stem = String::with_capacity(contract_name.len() + 4);
    let mut prev_lower_or_digit = false;

    for c in contract_name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                stem.push('_');
            }
            stem.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else if c == '-' || c == ' ' {
            stem.push('_');
            prev_lower_or_digit = false;
        } else {
            stem.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }

    stem
}

/// Candidate paths in lookup order
pub fn candidate_paths(artifacts_dir: &Path, contract_name: &str) -> Vec<PathBuf> {
    let stem = artifact_file_stem(contract_name);
    vec![
        artifacts_dir.join(format!("{stem}.wasm")),
        artifacts_dir.join(format!("{stem}.wasm.gz")),
    ]
}

/// Load an artifact from an explicit path
pub fn load_artifact(contract_name: &str, path: &Path) -> Result<Artifact> {
    let wasm_module = std::fs::read(path)
        .with_context(|| format!("Failed to read artifact: {}", path.display()))?;

    if wasm_module.is_empty() {
        anyhow::bail!("Artifact is empty: {}", path.display());
    }
    if !wasm_module.starts_with(WASM_MAGIC) && !wasm_module.starts_with(GZIP_MAGIC) {
        anyhow::bail!(
            "Artifact is not a wasm module (or gzipped wasm): {}",
            path.display()
        );
    }

    let module_hash: [u8; 32] = Sha256::digest(&wasm_module).into();

    Ok(Artifact {
        contract_name: contract_name.to_string(),
        path: path.to_path_buf(),
        wasm_module,
        module_hash,
    })
}

/// Resolve a contract by name from the artifacts directory
pub fn resolve_artifact(artifacts_dir: &Path, contract_name: &str) -> Result<Artifact> {
    let candidates = candidate_paths(artifacts_dir, contract_name);

    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => load_artifact(contract_name, path),
        None => {
            let tried = candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            anyhow::bail!("Artifact for {contract_name} not found (tried: {tried})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL_WASM: &[u8] = b"\0asm\x01\0\0\0";

    #[test]
    fn file_stem_is_snake_case() {
        assert_eq!(artifact_file_stem("AcrenToken"), "acren_token");
        assert_eq!(artifact_file_stem("ERC20Token"), "erc20_token");
        assert_eq!(artifact_file_stem("token"), "token");
        assert_eq!(artifact_file_stem("My Token"), "my_token");
    }

    #[test]
    fn resolves_plain_wasm_with_hash() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("acren_token.wasm"), MINIMAL_WASM).unwrap();

        let artifact = resolve_artifact(dir.path(), "AcrenToken").unwrap();

        assert_eq!(artifact.contract_name, "AcrenToken");
        assert_eq!(artifact.wasm_module, MINIMAL_WASM);
        let expected: [u8; 32] = Sha256::digest(MINIMAL_WASM).into();
        assert_eq!(artifact.module_hash, expected);
        assert_eq!(artifact.module_hash_hex().len(), 64);
    }

    #[test]
    fn prefers_plain_wasm_over_gzip() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("acren_token.wasm"), MINIMAL_WASM).unwrap();
        std::fs::write(dir.path().join("acren_token.wasm.gz"), [0x1f, 0x8b, 0x08]).unwrap();

        let artifact = resolve_artifact(dir.path(), "AcrenToken").unwrap();
        assert!(artifact.path.ends_with("acren_token.wasm"));
    }

    #[test]
    fn falls_back_to_gzip() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("acren_token.wasm.gz"), [0x1f, 0x8b, 0x08]).unwrap();

        let artifact = resolve_artifact(dir.path(), "AcrenToken").unwrap();
        assert!(artifact.path.ends_with("acren_token.wasm.gz"));
    }

    #[test]
    fn missing_artifact_lists_tried_paths() {
        let dir = TempDir::new().unwrap();

        let err = resolve_artifact(dir.path(), "AcrenToken").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("acren_token.wasm"), "{msg}");
        assert!(msg.contains("acren_token.wasm.gz"), "{msg}");
    }

    #[test]
    fn rejects_empty_and_non_wasm_files() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty.wasm");
        let text = dir.path().join("text.wasm");
        std::fs::write(&empty, b"").unwrap();
        std::fs::write(&text, b"not a module").unwrap();

        assert!(load_artifact("Empty", &empty).is_err());
        assert!(load_artifact("Text", &text).is_err());
    }
}
