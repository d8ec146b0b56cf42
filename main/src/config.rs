// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use crate::{
    error::ConfigError,
    metadata::{ChainPair, RemoteContractMetadata},
};
use alloy_primitives::Address;
use serde::Deserialize;
use std::{collections::BTreeMap, env, fs, path::Path};

/// One entry of the contracts list's `remote` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteContract {
    pub name: String,
    #[serde(default)]
    pub verified: bool,
    pub deployments: BTreeMap<String, Address>,
    #[serde(default)]
    pub deployment_salt: Option<String>,
    #[serde(default)]
    pub deployer_address: Option<Address>,
}

impl RemoteContract {
    pub fn into_metadata(self, package_name: &str) -> RemoteContractMetadata {
        RemoteContractMetadata {
            name: self.name,
            package_name: package_name.to_owned(),
            verified: self.verified,
            deployments: self.deployments,
            deployment_salt: self.deployment_salt,
            deployer_address: self.deployer_address,
            ..Default::default()
        }
    }
}

/// The contracts list. Only remotely sourced contracts are read; other keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractsList {
    #[serde(default)]
    pub remote: Vec<RemoteContract>,
}

impl ContractsList {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&read(path.as_ref())?)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::ContractsList)
    }

    /// Keeps only the named contracts, in list order. An empty selection keeps everything.
    pub fn select(self, only: &[String]) -> Result<Vec<RemoteContract>, ConfigError> {
        if let Some(unknown) = only
            .iter()
            .find(|name| !self.remote.iter().any(|c| &c.name == *name))
        {
            return Err(ConfigError::UnknownContract(unknown.clone()));
        }
        Ok(self
            .remote
            .into_iter()
            .filter(|c| only.is_empty() || only.contains(&c.name))
            .collect())
    }
}

/// Where to reach one chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Etherscan-compatible API base, e.g. `https://api.etherscan.io/api`.
    pub explorer_url: String,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Environment variable holding the explorer API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ChainConfig {
    pub fn api_key(&self, chain: &str) -> Result<Option<String>, ConfigError> {
        let Some(var) = &self.api_key_env else {
            return Ok(None);
        };
        env::var(var)
            .map(Some)
            .map_err(|_| ConfigError::MissingApiKey {
                chain: chain.to_owned(),
                var: var.clone(),
            })
    }
}

/// The chains file, keyed by the chain names used in contract deployments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainsConfig {
    pub chains: BTreeMap<String, ChainConfig>,
}

impl ChainsConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&read(path.as_ref())?)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::Chains)
    }

    /// Ensures both chains of the pair are configured.
    pub fn require(&self, pair: &ChainPair) -> Result<(), ConfigError> {
        for chain in [&pair.primary, &pair.secondary] {
            if !self.chains.contains_key(chain) {
                return Err(ConfigError::MissingChain(chain.clone()));
            }
        }
        Ok(())
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
