// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Name-keyed predeploy data, filled by the `register` functions of generated metadata files.
//!
//! Build one [`PredeployRegistry`] at startup, pass it by `&mut` to every `register` call and
//! share it by `&` afterwards. Registration order does not matter: re-registering an identical
//! value is a no-op and a different value for a known name is a [`RegistryError::Conflict`].

pub use crate::error::RegistryError;
use alloy_primitives::Address;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A solc storage layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StorageLayout {
    pub storage: Vec<StorageEntry>,
    #[serde(default)]
    pub types: BTreeMap<String, StorageType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEntry {
    pub ast_id: u64,
    pub contract: String,
    pub label: String,
    pub offset: u64,
    pub slot: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageType {
    pub encoding: String,
    pub label: String,
    pub number_of_bytes: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub base: Option<String>,
}

/// Byte range of an immutable value inside deployed bytecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImmutableReference {
    pub start: u64,
    pub length: u64,
}

/// Immutable references keyed by AST id.
pub type ImmutableReferences = BTreeMap<String, Vec<ImmutableReference>>;

#[derive(Debug, Clone, Default)]
pub struct PredeployRegistry {
    deployed_bytecodes: BTreeMap<String, String>,
    init_bytecodes: BTreeMap<String, String>,
    deployment_salts: BTreeMap<String, String>,
    deployer_addresses: BTreeMap<String, Address>,
    storage_layouts: BTreeMap<String, StorageLayout>,
    immutable_references: BTreeMap<String, ImmutableReferences>,
}

impl PredeployRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_deployed_bytecode(&mut self, name: &str, bin: &str) -> Result<(), RegistryError> {
        insert(&mut self.deployed_bytecodes, "deployed bytecode", name, bin.to_owned())
    }

    pub fn insert_init_bytecode(&mut self, name: &str, bin: &str) -> Result<(), RegistryError> {
        insert(&mut self.init_bytecodes, "init bytecode", name, bin.to_owned())
    }

    pub fn insert_deployment_salt(&mut self, name: &str, salt: &str) -> Result<(), RegistryError> {
        insert(&mut self.deployment_salts, "deployment salt", name, salt.to_owned())
    }

    /// Registers a deployer address given as hex text.
    pub fn insert_deployer_address(
        &mut self,
        name: &str,
        address: &str,
    ) -> Result<(), RegistryError> {
        const KIND: &str = "deployer address";
        let address = address.parse::<Address>().map_err(|e| RegistryError::Invalid {
            kind: KIND,
            name: name.to_owned(),
            reason: e.to_string(),
        })?;
        insert(&mut self.deployer_addresses, KIND, name, address)
    }

    /// Registers a storage layout given as solc's JSON output.
    pub fn insert_storage_layout(&mut self, name: &str, json: &str) -> Result<(), RegistryError> {
        const KIND: &str = "storage layout";
        let layout = parse_json(KIND, name, json)?;
        insert(&mut self.storage_layouts, KIND, name, layout)
    }

    /// Registers immutable references given as solc's JSON output.
    pub fn insert_immutable_references(
        &mut self,
        name: &str,
        json: &str,
    ) -> Result<(), RegistryError> {
        const KIND: &str = "immutable references";
        let references = parse_json(KIND, name, json)?;
        insert(&mut self.immutable_references, KIND, name, references)
    }

    pub fn deployed_bytecode(&self, name: &str) -> Option<&str> {
        self.deployed_bytecodes.get(name).map(String::as_str)
    }

    pub fn init_bytecode(&self, name: &str) -> Option<&str> {
        self.init_bytecodes.get(name).map(String::as_str)
    }

    pub fn deployment_salt(&self, name: &str) -> Option<&str> {
        self.deployment_salts.get(name).map(String::as_str)
    }

    pub fn deployer_address(&self, name: &str) -> Option<Address> {
        self.deployer_addresses.get(name).copied()
    }

    pub fn storage_layout(&self, name: &str) -> Option<&StorageLayout> {
        self.storage_layouts.get(name)
    }

    pub fn immutable_references(&self, name: &str) -> Option<&ImmutableReferences> {
        self.immutable_references.get(name)
    }

    /// Names with a registered deployed bytecode, in order.
    pub fn deployed_names(&self) -> impl Iterator<Item = &str> {
        self.deployed_bytecodes.keys().map(String::as_str)
    }
}

fn insert<V: PartialEq>(
    map: &mut BTreeMap<String, V>,
    kind: &'static str,
    name: &str,
    value: V,
) -> Result<(), RegistryError> {
    match map.get(name) {
        Some(existing) if *existing == value => Ok(()),
        Some(_) => Err(RegistryError::Conflict {
            kind,
            name: name.to_owned(),
        }),
        None => {
            map.insert(name.to_owned(), value);
            Ok(())
        }
    }
}

fn parse_json<T: for<'de> Deserialize<'de>>(
    kind: &'static str,
    name: &str,
    json: &str,
) -> Result<T, RegistryError> {
    serde_json::from_str(json).map_err(|e| RegistryError::Invalid {
        kind,
        name: name.to_owned(),
        reason: e.to_string(),
    })
}
