// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

/// Chain key of the network where remote contracts were originally deployed.
pub const DEFAULT_PRIMARY_CHAIN: &str = "eth";

/// Chain key of the rollup that hosts the predeploys.
pub const DEFAULT_SECONDARY_CHAIN: &str = "op";

/// Default package name recorded in generated files.
pub const DEFAULT_BINDINGS_PACKAGE: &str = "bindings";

/// Predeployed as a modified variant that does not exist on the secondary chain yet,
/// so its bytecode cannot be reconciled.
/// See https://github.com/ethereum-optimism/op-geth/pull/126
pub const CREATE2_DEPLOYER: &str = "Create2Deployer";

pub const MULTI_SEND: &str = "MultiSend";
pub const MULTI_SEND_CALL_ONLY: &str = "MultiSendCallOnly";
pub const SENDER_CREATOR: &str = "SenderCreator";
pub const PERMIT2: &str = "Permit2";

/// Suffix of generated metadata files, placed after the lowercased contract name.
pub const METADATA_FILE_SUFFIX: &str = "_more.rs";

/// Extension of the interface artifact written for the binding generator.
pub const INTERFACE_ARTIFACT_EXT: &str = "abi";

/// Extension of the init bytecode artifact written for the binding generator.
pub const BYTECODE_ARTIFACT_EXT: &str = "bin";

/// Header placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.";

/// Etherscan-compatible status value for a successful response.
pub const EXPLORER_STATUS_OK: &str = "1";

/// Seconds before an explorer request is abandoned.
pub const EXPLORER_TIMEOUT_SECS: u64 = 15;
