// Code generated - DO NOT EDIT.
// This file is a generated binding and any manual changes will be lost.

//! Predeploy metadata for `Foo` in the `bindings` package.

use predeploy_bindgen::registry::{PredeployRegistry, RegistryError};

#[allow(non_upper_case_globals)]
pub const FooDeployedBin: &str = "0x6080";

pub fn register(registry: &mut PredeployRegistry) -> Result<(), RegistryError> {
    registry.insert_deployed_bytecode("Foo", FooDeployedBin)?;
    Ok(())
}
