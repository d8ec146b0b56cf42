// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Per-contract handling strategies.
//!
//! Each predeploy kind decides which chain is authoritative for its artifacts, which fields
//! it keeps, what it validates and whether its bytecode is reconciled against the other
//! chain. [`PredeployHandler::run`] composes those choices and is the only driver.

use crate::{
    bindings::BindingGenerator,
    client::ChainDataClient,
    constants::{CREATE2_DEPLOYER, MULTI_SEND, MULTI_SEND_CALL_ONLY, PERMIT2, SENDER_CREATOR},
    error::{DeployerMismatchError, HandlerError},
    fetch,
    metadata::{ChainPair, ChainRole, ContractData, RemoteContractMetadata},
    reconcile::{self, Divergence},
    templates::MetadataTemplate,
    writer::MetadataWriter,
};
use alloy_primitives::Address;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredeployHandler {
    /// Artifacts from the primary chain, reconciled against the secondary chain.
    Standard,
    /// Artifacts from the secondary chain only. The contract holds an immutable resolving
    /// to its own address, so only the bytecode at the predeploy address is usable.
    MultiSend,
    /// Deployed bytecode alone, from the primary chain, then reconciled.
    SenderCreator,
    /// Like [`Self::Standard`], but the deployed bytecode depends on the chain id and is
    /// never stored. The deployment must come from the recorded deployer.
    Permit2,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutcome {
    pub contract: String,
    pub handler: PredeployHandler,
    pub template: MetadataTemplate,
    pub metadata_path: PathBuf,
    pub divergences: Vec<Divergence>,
}

impl PredeployHandler {
    pub fn for_contract(name: &str) -> Self {
        match name {
            MULTI_SEND | MULTI_SEND_CALL_ONLY => Self::MultiSend,
            SENDER_CREATOR => Self::SenderCreator,
            PERMIT2 => Self::Permit2,
            _ => Self::Standard,
        }
    }

    /// The chain whose artifacts end up in the metadata.
    pub fn source_role(self) -> ChainRole {
        match self {
            Self::MultiSend => ChainRole::Secondary,
            Self::Standard | Self::SenderCreator | Self::Permit2 => ChainRole::Primary,
        }
    }

    /// Fetches from `chain` and fills in the fields this handler trusts.
    pub async fn populate(
        self,
        client: &impl ChainDataClient,
        chain: &str,
        address: Address,
        metadata: &mut RemoteContractMetadata,
    ) -> Result<ContractData, HandlerError> {
        if self == Self::SenderCreator {
            let deployed_bytecode = fetch::fetch_deployed_bytecode(client, chain, address).await?;
            metadata.deployed_bin = deployed_bytecode.clone();
            return Ok(ContractData {
                deployed_bytecode,
                ..Default::default()
            });
        }

        let data =
            fetch::fetch_contract_data(client, chain, address, metadata.verified, metadata.salt())
                .await?;
        metadata.interface_json = data.interface_json.clone().unwrap_or_default();
        metadata.init_bin = data.deployment_tx.input.clone();
        match self {
            Self::Permit2 => metadata.deployed_bin.clear(),
            _ => metadata.deployed_bin = data.deployed_bytecode.clone(),
        }
        Ok(data)
    }

    /// Checks the fetched data before anything is compared or written.
    pub fn validate(
        self,
        metadata: &RemoteContractMetadata,
        data: &ContractData,
    ) -> Result<(), DeployerMismatchError> {
        if self != Self::Permit2 {
            return Ok(());
        }
        let actual = data.deployment_tx.to;
        match metadata.deployer_address {
            Some(expected) if Some(expected) == actual => Ok(()),
            expected => Err(DeployerMismatchError {
                contract: metadata.name.clone(),
                expected,
                actual,
            }),
        }
    }

    /// Whether `contract`'s bytecode is compared against the other chain.
    pub fn reconciles(self, contract: &str) -> bool {
        match self {
            Self::MultiSend => false,
            // predeployed as a modified variant that the secondary chain doesn't have yet
            Self::Standard => contract != CREATE2_DEPLOYER,
            Self::SenderCreator | Self::Permit2 => true,
        }
    }

    pub fn template(self) -> MetadataTemplate {
        match self {
            Self::Permit2 => MetadataTemplate::Permit2,
            Self::Standard | Self::MultiSend | Self::SenderCreator => MetadataTemplate::Standard,
        }
    }

    /// Fetches, validates, reconciles and writes one contract. Any failure stops the run
    /// before the writer is invoked; divergences do not.
    pub async fn run<B: BindingGenerator>(
        self,
        client: &impl ChainDataClient,
        chains: &ChainPair,
        writer: &MetadataWriter<B>,
        metadata: &mut RemoteContractMetadata,
    ) -> Result<HandlerOutcome, HandlerError> {
        let role = self.source_role();
        let chain = chains.chain(role);
        let address = metadata.deployment_on(chain)?;

        let data = self.populate(client, chain, address, metadata).await?;
        self.validate(metadata, &data)?;

        let divergences = match self.reconciles(&metadata.name) {
            true => reconcile::reconcile(client, chains, role, metadata).await?,
            false => vec![],
        };

        let template = self.template();
        let metadata_path = writer.write_all_outputs(metadata, template)?;
        Ok(HandlerOutcome {
            contract: metadata.name.clone(),
            handler: self,
            template,
            metadata_path,
            divergences,
        })
    }
}
