// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! In-memory doubles for the chain data client and the binding generator.

use crate::{
    bindings::BindingGenerator,
    client::ChainDataClient,
    error::{BindingError, ClientError},
    metadata::DeploymentTx,
};
use alloy_primitives::{Address, TxHash, B256};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// A client call, tagged with the chain it targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Interface(String),
    DeployedBytecode(String),
    TxHash(String),
    TxData(String),
}

impl Call {
    pub(crate) fn chain(&self) -> &str {
        match self {
            Self::Interface(chain)
            | Self::DeployedBytecode(chain)
            | Self::TxHash(chain)
            | Self::TxData(chain) => chain,
        }
    }
}

/// What one chain serves. Absent values fail with [`ClientError::NotFound`].
#[derive(Debug, Clone, Default)]
pub(crate) struct MockChain {
    interface: Option<String>,
    deployed_bytecode: Option<String>,
    tx_hash: Option<TxHash>,
    tx: Option<DeploymentTx>,
}

impl MockChain {
    pub(crate) fn new(deployed_bytecode: &str, input: &str) -> Self {
        Self {
            interface: None,
            deployed_bytecode: Some(deployed_bytecode.to_owned()),
            tx_hash: Some(B256::repeat_byte(0x11)),
            tx: Some(DeploymentTx {
                input: input.to_owned(),
                to: None,
            }),
        }
    }

    pub(crate) fn with_interface(mut self, interface: &str) -> Self {
        self.interface = Some(interface.to_owned());
        self
    }

    pub(crate) fn with_to(mut self, to: Address) -> Self {
        if let Some(tx) = &mut self.tx {
            tx.to = Some(to);
        }
        self
    }

    pub(crate) fn without_tx_hash(mut self) -> Self {
        self.tx_hash = None;
        self
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockChainClient {
    chains: BTreeMap<String, MockChain>,
    calls: Mutex<Vec<Call>>,
}

impl MockChainClient {
    pub(crate) fn with_chain(mut self, name: &str, chain: MockChain) -> Self {
        self.chains.insert(name.to_owned(), chain);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub(crate) fn calls_on(&self, chain: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.chain() == chain).count()
    }

    fn serve<T: Clone>(
        &self,
        call: Call,
        value: impl FnOnce(&MockChain) -> Option<T>,
    ) -> Result<T, ClientError> {
        let name = call.chain().to_owned();
        let what = format!("{call:?}");
        self.calls.lock().push(call);
        let chain = self
            .chains
            .get(&name)
            .ok_or(ClientError::UnknownChain(name))?;
        value(chain).ok_or(ClientError::NotFound(what))
    }
}

#[async_trait]
impl ChainDataClient for MockChainClient {
    async fn fetch_interface(&self, chain: &str, _: Address) -> Result<String, ClientError> {
        self.serve(Call::Interface(chain.into()), |c| c.interface.clone())
    }

    async fn fetch_deployed_bytecode(&self, chain: &str, _: Address) -> Result<String, ClientError> {
        self.serve(Call::DeployedBytecode(chain.into()), |c| {
            c.deployed_bytecode.clone()
        })
    }

    async fn fetch_deployment_tx_hash(&self, chain: &str, _: Address) -> Result<TxHash, ClientError> {
        self.serve(Call::TxHash(chain.into()), |c| c.tx_hash)
    }

    async fn fetch_deployment_tx(&self, chain: &str, _: TxHash) -> Result<DeploymentTx, ClientError> {
        self.serve(Call::TxData(chain.into()), |c| c.tx.clone())
    }
}

/// What a binding generator was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BindingRequest {
    pub(crate) package: String,
    pub(crate) name: String,
    pub(crate) interface: String,
    pub(crate) bytecode: String,
}

/// Records requests instead of generating bindings, optionally failing every one.
#[derive(Debug, Default)]
pub(crate) struct RecordingBindings {
    pub(crate) fail: bool,
    requests: Mutex<Vec<BindingRequest>>,
}

impl RecordingBindings {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<BindingRequest> {
        self.requests.lock().clone()
    }
}

impl BindingGenerator for RecordingBindings {
    fn generate(
        &self,
        interface_path: &Path,
        bytecode_path: &Path,
        package: &str,
        name: &str,
    ) -> Result<PathBuf, BindingError> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| BindingError::Read {
                path: path.to_path_buf(),
                source,
            })
        };
        let request = BindingRequest {
            package: package.to_owned(),
            name: name.to_owned(),
            interface: read(interface_path)?,
            bytecode: read(bytecode_path)?,
        };
        self.requests.lock().push(request);
        if self.fail {
            return Err(BindingError::Bytecode {
                path: bytecode_path.to_path_buf(),
                reason: "generator failed".into(),
            });
        }
        Ok(PathBuf::from(format!("{}.rs", name.to_lowercase())))
    }
}
