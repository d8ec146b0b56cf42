// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

//! Verified metadata for contracts predeployed into a rollup's genesis state.
//!
//! For every tracked contract, a [`PredeployHandler`] fetches the original artifacts, checks
//! that its bytecode matches across the primary and secondary chain, and writes a generated
//! source file that registers the verified values into a [`registry::PredeployRegistry`].

pub mod bindings;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod handler;
pub mod metadata;
pub mod reconcile;
pub mod registry;
pub mod templates;
pub mod writer;

#[cfg(test)]
mod testing;

pub use generator::RemoteGenerator;
pub use handler::{HandlerOutcome, PredeployHandler};
