// Identity loading and agent creation

use anyhow::{Context, Result};
use ic_agent::identity::{BasicIdentity, Secp256k1Identity};
use ic_agent::{Agent, Identity};
use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;
use tracing::debug;

use crate::core::utils::constants::INGRESS_EXPIRY_SECS;

pub const DEFAULT_IDENTITY: &str = "default";

/// Location of a dfx identity PEM under `home`
pub fn identity_pem_path(home: &Path, identity_name: &str) -> PathBuf {
    home.join(".config/dfx/identity")
        .join(identity_name)
        .join("identity.pem")
}

/// Parse a dfx PEM, trying Secp256k1 (older dfx) then Ed25519 (newer dfx)
pub fn parse_identity_pem(pem_content: &str) -> Result<Box<dyn Identity>> {
    if let Ok(identity) = Secp256k1Identity::from_pem(pem_content) {
        return Ok(Box::new(identity));
    }

    if let Ok(identity) = BasicIdentity::from_pem(pem_content) {
        return Ok(Box::new(identity));
    }

    anyhow::bail!("Failed to load identity: could not parse as Secp256k1 or Ed25519")
}

/// Load a dfx identity by name ("default" when `None`)
pub fn load_dfx_identity(identity_name: Option<&str>) -> Result<Box<dyn Identity>> {
    let name = identity_name.unwrap_or(DEFAULT_IDENTITY);
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let identity_path = identity_pem_path(Path::new(&home), name);

    if !identity_path.exists() {
        anyhow::bail!("Identity not found at: {}", identity_path.display());
    }

    let pem_content = std::fs::read_to_string(&identity_path)
        .with_context(|| format!("Failed to read identity file: {}", identity_path.display()))?;

    debug!(identity = name, path = %identity_path.display(), "loaded dfx identity");
    parse_identity_pem(&pem_content)
}

/// Create an agent for `url` and fetch the replica root key (local replica only)
pub async fn create_agent(url: &str, identity: Box<dyn Identity>) -> Result<Agent> {
    let agent = Agent::builder()
        .with_url(url)
        .with_ingress_expiry(StdDuration::from_secs(INGRESS_EXPIRY_SECS))
        .with_identity(identity)
        .build()
        .with_context(|| format!("Failed to build agent for {url}"))?;

    agent
        .fetch_root_key()
        .await
        .with_context(|| format!("Failed to fetch root key from {url}. Is the replica running?"))?;
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pem_path_follows_dfx_layout() {
        let path = identity_pem_path(Path::new("/home/dev"), "deployer");
        assert_eq!(
            path,
            PathBuf::from("/home/dev/.config/dfx/identity/deployer/identity.pem")
        );
    }

    #[test]
    fn garbage_pem_is_rejected() {
        let err = parse_identity_pem("not a pem").err().unwrap();
        assert!(err.to_string().contains("Secp256k1 or Ed25519"));
    }
}
