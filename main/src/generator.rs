// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use crate::{
    bindings::BindingGenerator,
    client::ChainDataClient,
    config::RemoteContract,
    error::ContractError,
    handler::{HandlerOutcome, PredeployHandler},
    metadata::ChainPair,
    writer::MetadataWriter,
};

/// Generates metadata for remotely sourced contracts.
pub struct RemoteGenerator<C, B> {
    client: C,
    chains: ChainPair,
    writer: MetadataWriter<B>,
    package_name: String,
}

impl<C: ChainDataClient, B: BindingGenerator> RemoteGenerator<C, B> {
    pub fn new(
        client: C,
        chains: ChainPair,
        writer: MetadataWriter<B>,
        package_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            chains,
            writer,
            package_name: package_name.into(),
        }
    }

    pub fn writer(&self) -> &MetadataWriter<B> {
        &self.writer
    }

    /// Runs the handler selected by the contract's name.
    pub async fn generate(&self, contract: RemoteContract) -> Result<HandlerOutcome, ContractError> {
        let handler = PredeployHandler::for_contract(&contract.name);
        tracing::info!(contract = %contract.name, ?handler, "generating metadata");

        let mut metadata = contract.into_metadata(&self.package_name);
        handler
            .run(&self.client, &self.chains, &self.writer, &mut metadata)
            .await
            .map_err(|source| ContractError {
                contract: metadata.name.clone(),
                source,
            })
    }

    /// Processes contracts in order, stopping at the first failure.
    pub async fn generate_all(
        &self,
        contracts: Vec<RemoteContract>,
    ) -> Result<Vec<HandlerOutcome>, ContractError> {
        let mut outcomes = Vec::with_capacity(contracts.len());
        for contract in contracts {
            outcomes.push(self.generate(contract).await?);
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ContractsList,
        error::HandlerError,
        testing::{MockChain, MockChainClient, RecordingBindings},
    };
    use std::fs;
    use tempfile::TempDir;

    const CONTRACTS: &str = r#"{
        "local": ["L1Block"],
        "remote": [
            {
                "name": "MultiCall3",
                "verified": true,
                "deployments": {
                    "eth": "0xcA11bde05977b3631167028862bE2a173976CA11",
                    "op": "0xcA11bde05977b3631167028862bE2a173976CA11"
                }
            },
            {
                "name": "MultiSend",
                "verified": false,
                "deployments": {
                    "eth": "0x998739BFdAAdde7C933B942a68053933098f9EDa",
                    "op": "0x998739BFdAAdde7C933B942a68053933098f9EDa"
                }
            },
            {
                "name": "Safe",
                "verified": true,
                "deployments": {
                    "eth": "0xd9Db270c1B5E3Bd161E8c8503c55cEABeE709552"
                }
            }
        ]
    }"#;

    fn generator(
        client: MockChainClient,
        out: &TempDir,
    ) -> RemoteGenerator<MockChainClient, RecordingBindings> {
        let writer = MetadataWriter::new(out.path(), out.path(), RecordingBindings::default());
        RemoteGenerator::new(client, ChainPair::default(), writer, "bindings")
    }

    #[tokio::test]
    async fn generates_each_contract_in_order() {
        let out = TempDir::new().unwrap();
        let client = MockChainClient::default()
            .with_chain("eth", MockChain::new("0x6001", "0x6080").with_interface("[]"))
            .with_chain("op", MockChain::new("0x6001", "0x6080"));
        let generator = generator(client, &out);

        let contracts = ContractsList::from_json(CONTRACTS)
            .unwrap()
            .select(&["MultiCall3".into(), "MultiSend".into()])
            .unwrap();
        let outcomes = generator.generate_all(contracts).await.unwrap();

        let names: Vec<_> = outcomes.iter().map(|o| o.contract.as_str()).collect();
        assert_eq!(names, vec!["MultiCall3", "MultiSend"]);
        assert_eq!(outcomes[1].handler, PredeployHandler::MultiSend);
        assert!(out.path().join("multicall3_more.rs").exists());
        assert!(out.path().join("multisend_more.rs").exists());

        let requests = generator.writer().bindings().requests();
        assert!(requests.iter().all(|r| r.package == "bindings"));
    }

    #[tokio::test]
    async fn first_failure_stops_the_batch() {
        let out = TempDir::new().unwrap();
        let client = MockChainClient::default()
            .with_chain("eth", MockChain::new("0x6001", "0x6080").with_interface("[]"))
            .with_chain("op", MockChain::new("0x6001", "0x6080"));
        let generator = generator(client, &out);

        let mut contracts = ContractsList::from_json(CONTRACTS).unwrap().remote;
        contracts.rotate_left(2);
        let err = generator.generate_all(contracts).await.unwrap_err();

        assert_eq!(err.contract, "Safe");
        assert!(matches!(err.source, HandlerError::MissingDeployment { .. }));
        assert_eq!(err.to_string(), "failed to generate metadata for Safe");
        assert!(fs::read_dir(out.path())
            .unwrap()
            .all(|entry| !entry.unwrap().file_name().to_string_lossy().ends_with("_more.rs")));
    }
}
