// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use crate::{constants::GENERATED_HEADER, error::BindingError};
use alloy_json_abi::{Function, JsonAbi};
use predeploy_bindgen_util::text;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Turns an interface and init bytecode artifact into source bindings.
pub trait BindingGenerator: Send + Sync {
    /// Returns the path of the generated file.
    fn generate(
        &self,
        interface_path: &Path,
        bytecode_path: &Path,
        package: &str,
        name: &str,
    ) -> Result<PathBuf, BindingError>;
}

/// Emits a Rust module per contract holding its JSON interface, init bytecode and
/// function selectors.
#[derive(Debug, Clone)]
pub struct SolBindingGenerator {
    out_dir: PathBuf,
}

impl SolBindingGenerator {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl BindingGenerator for SolBindingGenerator {
    fn generate(
        &self,
        interface_path: &Path,
        bytecode_path: &Path,
        package: &str,
        name: &str,
    ) -> Result<PathBuf, BindingError> {
        let interface = read(interface_path)?;
        // unverified contracts have no interface
        let abi: JsonAbi = match interface.trim().is_empty() {
            true => JsonAbi::default(),
            false => serde_json::from_str(&interface).map_err(|source| BindingError::Interface {
                path: interface_path.to_path_buf(),
                source,
            })?,
        };

        let bytecode = read(bytecode_path)?;
        let bytecode = text::decode0x(bytecode.trim()).map_err(|e| BindingError::Bytecode {
            path: bytecode_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut body = format!("{GENERATED_HEADER}\n\n");
        body += &format!("//! Bindings for `{name}` in the `{package}` package.\n\n");
        body += "#![allow(non_upper_case_globals)]\n\n";
        body += &format!("pub const ABI: &str = {:?};\n", interface.trim());
        body += &format!("pub const BIN: &str = {:?};\n", text::encode0x(bytecode));
        body += &selectors(&abi);

        let out = self.out_dir.join(format!("{}.rs", name.to_lowercase()));
        let write_err = |source| BindingError::Write {
            path: out.clone(),
            source,
        };
        fs::create_dir_all(&self.out_dir).map_err(write_err)?;
        fs::write(&out, body).map_err(write_err)?;
        Ok(out)
    }
}

/// One constant per function, overloads numbered by signature order.
fn selectors(abi: &JsonAbi) -> String {
    let mut methods: BTreeMap<&str, Vec<&Function>> = BTreeMap::new();
    for function in abi.functions() {
        methods.entry(function.name.as_str()).or_default().push(function);
    }

    let mut body = String::new();
    for (simple_name, mut overloads) in methods {
        overloads.sort_by_key(|f| f.signature());
        for (index, overload) in overloads.iter().enumerate() {
            let const_name = match index {
                0 => simple_name.to_owned(),
                x => format!("{simple_name}_{x}"),
            };
            let selector = u32::from_be_bytes(overload.selector().0);
            let sig = overload.signature();
            body += &format!("\n/// `{sig}`\npub const SELECTOR_{const_name}: u32 = 0x{selector:08x};\n");
        }
    }
    body
}

fn read(path: &Path) -> Result<String, BindingError> {
    fs::read_to_string(path).map_err(|source| BindingError::Read {
        path: path.to_path_buf(),
        source,
    })
}
