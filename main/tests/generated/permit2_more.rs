// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.

//! Predeploy metadata for `Permit2` in the `bindings` package.

use predeploy_bindgen::registry::{PredeployRegistry, RegistryError};

#[allow(non_upper_case_globals)]
pub const Permit2InitBin: &str = "6040";
#[allow(non_upper_case_globals)]
pub const Permit2DeploymentSalt: &str = "abcd";
#[allow(non_upper_case_globals)]
pub const Permit2DeployerAddress: &str = "0x4e59b44847b379578588920cA78FbF26c0B4956C";

pub fn register(registry: &mut PredeployRegistry) -> Result<(), RegistryError> {
    registry.insert_init_bytecode("Permit2", Permit2InitBin)?;
    registry.insert_deployment_salt("Permit2", Permit2DeploymentSalt)?;
    registry.insert_deployer_address("Permit2", Permit2DeployerAddress)?;
    Ok(())
}
