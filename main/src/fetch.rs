// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Consolidates the chain data calls for one contract into a single [`ContractData`].

use crate::{
    client::ChainDataClient,
    error::{ClientError, FetchError, FetchStage, SaltMismatchError},
    metadata::ContractData,
};
use alloy_primitives::Address;

/// Fetches a contract's artifacts on `chain`.
///
/// The interface is only requested when `fetch_interface` is set. When `salt` is given, it
/// must sit right after the `0x` of the deployment input, and both are removed from it.
pub async fn fetch_contract_data(
    client: &impl ChainDataClient,
    chain: &str,
    address: Address,
    fetch_interface: bool,
    salt: Option<&str>,
) -> Result<ContractData, FetchError> {
    let failed = stage_error(chain, address);
    tracing::debug!(chain, %address, fetch_interface, "fetching contract data");

    let interface = async {
        match fetch_interface {
            true => client.fetch_interface(chain, address).await.map(Some),
            false => Ok(None),
        }
    };
    let (interface, deployed) =
        tokio::join!(interface, client.fetch_deployed_bytecode(chain, address));
    let interface_json = interface.map_err(|e| failed(FetchStage::Interface, e))?;
    let deployed_bytecode = deployed.map_err(|e| failed(FetchStage::DeployedBytecode, e))?;

    let tx_hash = client
        .fetch_deployment_tx_hash(chain, address)
        .await
        .map_err(|e| failed(FetchStage::TxHash, e))?;
    let mut deployment_tx = client
        .fetch_deployment_tx(chain, tx_hash)
        .await
        .map_err(|e| failed(FetchStage::TxData, e))?;

    if let Some(salt) = salt.filter(|salt| !salt.is_empty()) {
        deployment_tx.input = strip_deployment_salt(&deployment_tx.input, salt)?;
    }

    Ok(ContractData {
        interface_json,
        deployed_bytecode,
        deployment_tx,
    })
}

/// Fetches only the runtime bytecode of a contract.
pub async fn fetch_deployed_bytecode(
    client: &impl ChainDataClient,
    chain: &str,
    address: Address,
) -> Result<String, FetchError> {
    client
        .fetch_deployed_bytecode(chain, address)
        .await
        .map_err(|e| stage_error(chain, address)(FetchStage::DeployedBytecode, e))
}

/// Removes `0x` followed by `salt` from the front of `input`, leaving the bare remaining digits.
///
/// The salt is compared literally, never as a pattern.
pub fn strip_deployment_salt(input: &str, salt: &str) -> Result<String, SaltMismatchError> {
    input
        .strip_prefix("0x")
        .and_then(|digits| digits.strip_prefix(salt))
        .map(str::to_owned)
        .ok_or_else(|| SaltMismatchError {
            salt: salt.to_owned(),
            input: input.to_owned(),
        })
}

fn stage_error(chain: &str, address: Address) -> impl Fn(FetchStage, ClientError) -> FetchError + '_ {
    move |stage, source| FetchError::Client {
        stage,
        chain: chain.to_owned(),
        address,
        source,
    }
}
