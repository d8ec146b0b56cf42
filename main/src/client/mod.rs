// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Retrieval of contract artifacts from chain data sources.

use crate::{error::ClientError, metadata::DeploymentTx};
use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;

mod explorer;

pub use explorer::ExplorerClient;

/// Read-only access to contract artifacts on a set of named chains.
///
/// Implementations are shared by every contract of a run and must tolerate concurrent use.
#[async_trait]
pub trait ChainDataClient: Send + Sync {
    /// The verified JSON interface of the contract.
    async fn fetch_interface(&self, chain: &str, address: Address) -> Result<String, ClientError>;

    /// The runtime bytecode at `address`, as `0x`-prefixed hex.
    async fn fetch_deployed_bytecode(
        &self,
        chain: &str,
        address: Address,
    ) -> Result<String, ClientError>;

    /// Hash of the transaction that created the contract.
    async fn fetch_deployment_tx_hash(
        &self,
        chain: &str,
        address: Address,
    ) -> Result<TxHash, ClientError>;

    async fn fetch_deployment_tx(
        &self,
        chain: &str,
        tx_hash: TxHash,
    ) -> Result<DeploymentTx, ClientError>;
}
