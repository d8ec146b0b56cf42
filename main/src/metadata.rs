// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use crate::{
    constants::{DEFAULT_PRIMARY_CHAIN, DEFAULT_SECONDARY_CHAIN},
    error::HandlerError,
};
use alloy_primitives::Address;
use std::collections::BTreeMap;

/// Which side of the chain pair a value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainRole {
    /// Where the contract was originally deployed.
    Primary,
    /// The rollup hosting the predeploy.
    Secondary,
}

/// Chain keys backing the two roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPair {
    pub primary: String,
    pub secondary: String,
}

impl ChainPair {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn chain(&self, role: ChainRole) -> &str {
        match role {
            ChainRole::Primary => &self.primary,
            ChainRole::Secondary => &self.secondary,
        }
    }

    /// The chain on the other side of `role`.
    pub fn paired(&self, role: ChainRole) -> &str {
        match role {
            ChainRole::Primary => &self.secondary,
            ChainRole::Secondary => &self.primary,
        }
    }
}

impl Default for ChainPair {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_CHAIN, DEFAULT_SECONDARY_CHAIN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentTx {
    pub input: String,
    pub to: Option<Address>,
}

/// Everything fetched for one contract on one chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractData {
    pub interface_json: Option<String>,
    pub deployed_bytecode: String,
    pub deployment_tx: DeploymentTx,
}

/// A remotely sourced contract, filled in by exactly one handler run and then written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteContractMetadata {
    pub name: String,
    pub package_name: String,
    /// Whether the explorer has a verified interface for the contract.
    pub verified: bool,
    pub deployments: BTreeMap<String, Address>,
    pub deployment_salt: Option<String>,
    pub deployer_address: Option<Address>,
    pub interface_json: String,
    pub deployed_bin: String,
    pub init_bin: String,
}

impl RemoteContractMetadata {
    pub fn deployment_on(&self, chain: &str) -> Result<Address, HandlerError> {
        self.deployments
            .get(chain)
            .copied()
            .ok_or_else(|| HandlerError::MissingDeployment {
                contract: self.name.clone(),
                chain: chain.to_owned(),
            })
    }

    /// The deployment salt, treating an empty one as absent.
    pub fn salt(&self) -> Option<&str> {
        self.deployment_salt.as_deref().filter(|salt| !salt.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn pair_roles() {
        let pair = ChainPair::default();
        assert_eq!(pair.chain(ChainRole::Primary), "eth");
        assert_eq!(pair.paired(ChainRole::Primary), "op");
        assert_eq!(pair.chain(ChainRole::Secondary), "op");
        assert_eq!(pair.paired(ChainRole::Secondary), "eth");
    }

    #[test]
    fn missing_deployment_is_an_error() {
        let metadata = RemoteContractMetadata {
            name: "MultiCall3".into(),
            deployments: BTreeMap::from([(
                "eth".to_owned(),
                address!("ca11bde05977b3631167028862be2a173976ca11"),
            )]),
            ..Default::default()
        };
        assert!(metadata.deployment_on("eth").is_ok());
        let err = metadata.deployment_on("op").unwrap_err();
        assert_eq!(err.to_string(), "no op deployment recorded for MultiCall3");
    }

    #[test]
    fn empty_salt_is_absent() {
        let mut metadata = RemoteContractMetadata {
            deployment_salt: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(metadata.salt(), None);
        metadata.deployment_salt = Some("abcd".into());
        assert_eq!(metadata.salt(), Some("abcd"));
    }
}
