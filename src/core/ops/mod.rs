// Operations modules for deploying the token contract

pub mod artifacts;
pub mod commands;
pub mod deployer;
pub mod deployment;
pub mod ic_deployer;
pub mod identity;
