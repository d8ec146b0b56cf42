// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Errors raised while fetching, reconciling and writing predeploy metadata.
//!
//! Bytecode divergence between chains is not among them: it is reported as a
//! [`crate::reconcile::Divergence`] and never aborts a run.

use alloy_primitives::Address;
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// The chain data retrieval step a [`FetchError`] happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Interface,
    DeployedBytecode,
    TxHash,
    TxData,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface => write!(f, "ABI"),
            Self::DeployedBytecode => write!(f, "deployed bytecode"),
            Self::TxHash => write!(f, "deployment transaction hash"),
            Self::TxData => write!(f, "deployment transaction data"),
        }
    }
}

/// Failures of a [`crate::client::ChainDataClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("chain {0} is not configured")]
    UnknownChain(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("explorer error: {message}")]
    Explorer { message: String },

    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("error fetching {stage} of {address} on {chain}")]
    Client {
        stage: FetchStage,
        chain: String,
        address: Address,
        #[source]
        source: ClientError,
    },

    #[error(transparent)]
    SaltMismatch(#[from] SaltMismatchError),
}

impl FetchError {
    /// The retrieval stage that failed, if the failure came from the client.
    pub fn stage(&self) -> Option<FetchStage> {
        match self {
            Self::Client { stage, .. } => Some(*stage),
            Self::SaltMismatch(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "expected salt: {salt} to be at the beginning of the contract initialization code: {input}, but it wasn't"
)]
pub struct SaltMismatchError {
    pub salt: String,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "expected deployer address: {} doesn't match the to address: {} for {contract}'s deployment transaction",
    display_address(.expected),
    display_address(.actual)
)]
pub struct DeployerMismatchError {
    pub contract: String,
    pub expected: Option<Address>,
    pub actual: Option<Address>,
}

fn display_address(address: &Option<Address>) -> String {
    address.map_or_else(|| "<none>".to_owned(), |address| address.to_string())
}

/// Failures of a [`crate::bindings::BindingGenerator`].
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid interface JSON in {}", .path.display())]
    Interface {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid bytecode in {}: {reason}", .path.display())]
    Bytecode { path: PathBuf, reason: String },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("error writing {name}'s artifacts at {}", .path.display())]
    Artifacts {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "error generating {name}'s bindings from {} and {}",
        .interface_path.display(),
        .bytecode_path.display()
    )]
    Bindings {
        name: String,
        interface_path: PathBuf,
        bytecode_path: PathBuf,
        #[source]
        source: BindingError,
    },

    #[error("error opening {name}'s metadata file at {}", .path.display())]
    Open {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing {name}'s contract metadata at {}", .path.display())]
    Render {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything that aborts a single contract's run.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("no {chain} deployment recorded for {contract}")]
    MissingDeployment { contract: String, chain: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    DeployerMismatch(#[from] DeployerMismatchError),

    #[error("error comparing contract bytecode for {contract}")]
    Reconcile {
        contract: String,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Write(#[from] WriteError),
}

#[derive(Debug, Error)]
#[error("failed to generate metadata for {contract}")]
pub struct ContractError {
    pub contract: String,
    #[source]
    pub source: HandlerError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("conflicting {kind} already registered for {name}")]
    Conflict { kind: &'static str, name: String },

    #[error("invalid {kind} for {name}: {reason}")]
    Invalid {
        kind: &'static str,
        name: String,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid contracts list")]
    ContractsList(#[source] serde_json::Error),

    #[error("invalid chains config")]
    Chains(#[source] toml::de::Error),

    #[error("chain {0} has no entry in the chains config")]
    MissingChain(String),

    #[error("environment variable {var} holding the {chain} explorer API key is not set")]
    MissingApiKey { chain: String, var: String },

    #[error("contract {0} is not in the contracts list")]
    UnknownContract(String),

    #[error("failed to connect to {chain}: {reason}")]
    Provider { chain: String, reason: String },

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
