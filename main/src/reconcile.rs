// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Cross-chain bytecode comparison.
//!
//! A mismatch is reported as a [`Divergence`] and logged at critical severity, but never
//! aborts the run. Failing to fetch the paired chain's data does.

use crate::{
    client::ChainDataClient,
    error::HandlerError,
    fetch,
    metadata::{ChainPair, ChainRole, ContractData, RemoteContractMetadata},
};
use std::fmt;

/// The reconciled metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BytecodeField {
    Init,
    Deployed,
}

impl fmt::Display for BytecodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init bytecode"),
            Self::Deployed => write!(f, "deployed bytecode"),
        }
    }
}

/// Bytecode that differs between the primary and secondary chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub contract: String,
    pub field: BytecodeField,
    pub primary: String,
    pub secondary: String,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} differs between chains: primary {} secondary {}",
            self.contract, self.field, self.primary, self.secondary
        )
    }
}

/// Compares `metadata`, sourced from the `source` side of `chains`, against the other side.
pub async fn reconcile(
    client: &impl ChainDataClient,
    chains: &ChainPair,
    source: ChainRole,
    metadata: &RemoteContractMetadata,
) -> Result<Vec<Divergence>, HandlerError> {
    let paired_chain = chains.paired(source);
    let address = metadata.deployment_on(paired_chain)?;
    let paired = fetch::fetch_contract_data(client, paired_chain, address, false, metadata.salt())
        .await
        .map_err(|err| HandlerError::Reconcile {
            contract: metadata.name.clone(),
            source: err,
        })?;

    let divergences = find_divergences(metadata, source, &paired);
    for divergence in &divergences {
        tracing::error!(
            severity = "critical",
            contract = %divergence.contract,
            field = %divergence.field,
            primary = %divergence.primary,
            secondary = %divergence.secondary,
            "bytecode divergence between {} and {}",
            chains.primary,
            chains.secondary
        );
    }
    Ok(divergences)
}

/// Non-empty local fields that differ from the paired chain's values.
pub fn find_divergences(
    metadata: &RemoteContractMetadata,
    source: ChainRole,
    paired: &ContractData,
) -> Vec<Divergence> {
    let fields = [
        (BytecodeField::Init, &metadata.init_bin, &paired.deployment_tx.input),
        (BytecodeField::Deployed, &metadata.deployed_bin, &paired.deployed_bytecode),
    ];
    fields
        .into_iter()
        .filter(|(_, local, remote)| !local.is_empty() && local != remote)
        .map(|(field, local, remote)| {
            let (primary, secondary) = match source {
                ChainRole::Primary => (local, remote),
                ChainRole::Secondary => (remote, local),
            };
            Divergence {
                contract: metadata.name.clone(),
                field,
                primary: primary.clone(),
                secondary: secondary.clone(),
            }
        })
        .collect()
}
