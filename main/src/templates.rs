// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use crate::{constants::GENERATED_HEADER, metadata::RemoteContractMetadata};
use indoc::indoc;

/// Layout of a generated metadata file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataTemplate {
    /// Records the deployed bytecode.
    Standard,
    /// Records the init bytecode, deployment salt and deployer address of a contract
    /// whose deployed bytecode differs per chain.
    Permit2,
}

impl MetadataTemplate {
    pub fn render(self, metadata: &RemoteContractMetadata) -> String {
        match self {
            Self::Standard => render_standard(metadata),
            Self::Permit2 => render_permit2(metadata),
        }
    }
}

fn render_standard(metadata: &RemoteContractMetadata) -> String {
    let name = &metadata.name;
    format!(
        indoc! {r#"
        {header}

        //! Predeploy metadata for `{name}` in the `{package}` package.

        use predeploy_bindgen::registry::{{PredeployRegistry, RegistryError}};

        #[allow(non_upper_case_globals)]
        pub const {name}DeployedBin: &str = {bin:?};

        pub fn register(registry: &mut PredeployRegistry) -> Result<(), RegistryError> {{
            registry.insert_deployed_bytecode({name:?}, {name}DeployedBin)?;
            Ok(())
        }}
        "#},
        header = GENERATED_HEADER,
        name = name,
        package = metadata.package_name,
        bin = metadata.deployed_bin,
    )
}

fn render_permit2(metadata: &RemoteContractMetadata) -> String {
    let name = &metadata.name;
    let salt = metadata.deployment_salt.as_deref().unwrap_or_default();
    let deployer = metadata
        .deployer_address
        .map(|address| address.to_string())
        .unwrap_or_default();
    format!(
        indoc! {r#"
        {header}

        //! Predeploy metadata for `{name}` in the `{package}` package.

        use predeploy_bindgen::registry::{{PredeployRegistry, RegistryError}};

        #[allow(non_upper_case_globals)]
        pub const {name}InitBin: &str = {init:?};
        #[allow(non_upper_case_globals)]
        pub const {name}DeploymentSalt: &str = {salt:?};
        #[allow(non_upper_case_globals)]
        pub const {name}DeployerAddress: &str = {deployer:?};

        pub fn register(registry: &mut PredeployRegistry) -> Result<(), RegistryError> {{
            registry.insert_init_bytecode({name:?}, {name}InitBin)?;
            registry.insert_deployment_salt({name:?}, {name}DeploymentSalt)?;
            registry.insert_deployer_address({name:?}, {name}DeployerAddress)?;
            Ok(())
        }}
        "#},
        header = GENERATED_HEADER,
        name = name,
        package = metadata.package_name,
        init = metadata.init_bin,
        salt = salt,
        deployer = deployer,
    )
}
