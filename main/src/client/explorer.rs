// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use super::ChainDataClient;
use crate::{
    config::ChainsConfig,
    constants::{EXPLORER_STATUS_OK, EXPLORER_TIMEOUT_SECS},
    error::{ClientError, ConfigError},
    metadata::DeploymentTx,
};
use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use ethers::{
    providers::{Http, Middleware, Provider},
    types::{H160, H256},
};
use predeploy_bindgen_util::{sys, text::encode0x};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::{collections::BTreeMap, time::Duration};

/// Reads interfaces and creation hashes from an Etherscan-compatible explorer, and bytecode
/// and transactions from the chain's RPC endpoint.
#[derive(Debug)]
pub struct ExplorerClient {
    http: reqwest::Client,
    chains: BTreeMap<String, ChainEndpoint>,
}

#[derive(Debug)]
struct ChainEndpoint {
    explorer_url: String,
    api_key: Option<String>,
    provider: Provider<Http>,
}

#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    message: String,
    result: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContractCreation {
    tx_hash: TxHash,
}

impl ExplorerClient {
    pub fn new(config: &ChainsConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(EXPLORER_TIMEOUT_SECS))
            .user_agent(concat!("predeploy-bindgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;

        let mut chains = BTreeMap::new();
        for (name, chain) in &config.chains {
            let provider =
                sys::new_provider(&chain.rpc_url).map_err(|e| ConfigError::Provider {
                    chain: name.clone(),
                    reason: format!("{e:#}"),
                })?;
            let endpoint = ChainEndpoint {
                explorer_url: chain.explorer_url.clone(),
                api_key: chain.api_key(name)?,
                provider,
            };
            chains.insert(name.clone(), endpoint);
        }
        Ok(Self { http, chains })
    }

    fn endpoint(&self, chain: &str) -> Result<&ChainEndpoint, ClientError> {
        self.chains
            .get(chain)
            .ok_or_else(|| ClientError::UnknownChain(chain.to_owned()))
    }

    async fn query<T: DeserializeOwned>(
        &self,
        chain: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let endpoint = self.endpoint(chain)?;
        let mut request = self.http.get(&endpoint.explorer_url).query(params);
        if let Some(key) = &endpoint.api_key {
            request = request.query(&[("apikey", key)]);
        }
        let response: ExplorerResponse = request.send().await?.error_for_status()?.json().await?;
        parse_response(response)
    }
}

/// Checks the explorer's status and decodes its result.
fn parse_response<T: DeserializeOwned>(response: ExplorerResponse) -> Result<T, ClientError> {
    if response.status != EXPLORER_STATUS_OK {
        let detail = match &response.result {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        return Err(ClientError::Explorer {
            message: format!("{}: {detail}", response.message),
        });
    }
    Ok(serde_json::from_value(response.result)?)
}

fn first_creation(creations: Vec<ContractCreation>, address: &str) -> Result<TxHash, ClientError> {
    creations
        .first()
        .map(|creation| creation.tx_hash)
        .ok_or_else(|| ClientError::NotFound(format!("creation transaction of {address}")))
}

#[async_trait]
impl ChainDataClient for ExplorerClient {
    async fn fetch_interface(&self, chain: &str, address: Address) -> Result<String, ClientError> {
        let address = address.to_string();
        self.query(
            chain,
            &[
                ("module", "contract"),
                ("action", "getabi"),
                ("address", &address),
            ],
        )
        .await
    }

    async fn fetch_deployed_bytecode(
        &self,
        chain: &str,
        address: Address,
    ) -> Result<String, ClientError> {
        let endpoint = self.endpoint(chain)?;
        let code = endpoint
            .provider
            .get_code(H160(address.0 .0), None)
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        Ok(encode0x(code))
    }

    async fn fetch_deployment_tx_hash(
        &self,
        chain: &str,
        address: Address,
    ) -> Result<TxHash, ClientError> {
        let address = address.to_string();
        let creations: Vec<ContractCreation> = self
            .query(
                chain,
                &[
                    ("module", "contract"),
                    ("action", "getcontractcreation"),
                    ("contractaddresses", &address),
                ],
            )
            .await?;
        first_creation(creations, &address)
    }

    async fn fetch_deployment_tx(
        &self,
        chain: &str,
        tx_hash: TxHash,
    ) -> Result<DeploymentTx, ClientError> {
        let endpoint = self.endpoint(chain)?;
        let tx = endpoint
            .provider
            .get_transaction(H256(tx_hash.0))
            .await
            .map_err(|e| ClientError::Rpc(e.to_string()))?
            .ok_or_else(|| ClientError::NotFound(format!("transaction {tx_hash}")))?;
        Ok(DeploymentTx {
            input: encode0x(&tx.input),
            to: tx.to.map(|to| Address::from(to.0)),
        })
    }
}
