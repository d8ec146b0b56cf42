// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use clap::{Args, Parser};
use eyre::{eyre, Context, Result};
use predeploy_bindgen::{
    bindings::SolBindingGenerator,
    client::ExplorerClient,
    config::{ChainsConfig, ContractsList},
    constants::{DEFAULT_BINDINGS_PACKAGE, DEFAULT_PRIMARY_CHAIN, DEFAULT_SECONDARY_CHAIN},
    metadata::ChainPair,
    writer::MetadataWriter,
    RemoteGenerator,
};
use std::{fs, io, path::PathBuf};
use tokio::runtime::Builder;
use tracing_subscriber::EnvFilter;

mod macros;

use macros::*;

#[derive(Parser, Debug)]
#[command(name = "predeploy-bindgen")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Generates verified metadata for contracts predeployed into a rollup's genesis", long_about = None)]
#[command(propagate_version = true)]
#[command(version)]
struct Opts {
    /// Log at debug level. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Apis,
}

#[derive(Parser, Debug, Clone)]
enum Apis {
    /// Generate metadata for remotely sourced contracts.
    #[command(alias = "r")]
    Remote(RemoteConfig),
}

#[derive(Args, Clone, Debug)]
struct RemoteConfig {
    /// JSON file listing the tracked contracts.
    #[arg(long)]
    contracts_list: PathBuf,
    /// TOML file describing how to reach each chain.
    #[arg(long)]
    chains: PathBuf,
    /// Directory receiving the generated metadata files.
    #[arg(long)]
    metadata_out: PathBuf,
    /// Directory receiving the generated contract bindings.
    #[arg(long)]
    bindings_out: PathBuf,
    /// Package name recorded in generated files.
    #[arg(long, default_value = DEFAULT_BINDINGS_PACKAGE)]
    bindings_package: String,
    /// Chain where the contracts were originally deployed.
    #[arg(long, default_value = DEFAULT_PRIMARY_CHAIN)]
    primary_chain: String,
    /// Chain hosting the predeploys.
    #[arg(long, default_value = DEFAULT_SECONDARY_CHAIN)]
    secondary_chain: String,
    /// Only generate the named contract. May be repeated.
    #[arg(long, value_name = "NAME")]
    only: Vec<String>,
}

fn main() -> Result<()> {
    let args = Opts::parse();
    init_tracing(args.verbose);

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(main_impl(args))
}

fn init_tracing(verbose: bool) {
    let default = match verbose {
        true => "debug",
        false => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

async fn main_impl(args: Opts) -> Result<()> {
    macro_rules! run {
        ($expr:expr, $($msg:expr),+) => {
            $expr.await.wrap_err_with(|| eyre!($($msg),+))
        };
    }

    match args.command {
        Apis::Remote(config) => run!(
            self::remote(config),
            "failed to generate remote contract metadata"
        ),
    }
}

async fn remote(config: RemoteConfig) -> Result<()> {
    let contracts = ContractsList::load(&config.contracts_list)?.select(&config.only)?;
    let chains = ChainsConfig::load(&config.chains)?;
    let pair = ChainPair::new(config.primary_chain, config.secondary_chain);
    chains.require(&pair)?;
    let client = ExplorerClient::new(&chains)?;

    let metadata_out = &config.metadata_out;
    fs::create_dir_all(metadata_out)
        .wrap_err_with(|| eyre!("failed to create {}", metadata_out.display()))?;
    let artifacts = tempfile::Builder::new()
        .prefix("predeploy-artifacts")
        .tempdir()
        .wrap_err("failed to create artifacts dir")?;

    let bindings = SolBindingGenerator::new(&config.bindings_out);
    let writer = MetadataWriter::new(artifacts.path(), metadata_out, bindings);
    let generator = RemoteGenerator::new(client, pair, writer, &config.bindings_package);

    greyln!("generating metadata for {} contracts", contracts.len());
    let outcomes = generator.generate_all(contracts).await?;

    let mut divergences = 0;
    for outcome in &outcomes {
        mintln!(
            "wrote {} metadata to {}",
            outcome.contract,
            outcome.metadata_path.display()
        );
        for divergence in &outcome.divergences {
            epinkln!("{divergence}");
            divergences += 1;
        }
    }
    if divergences > 0 {
        egreyln!("{divergences} bytecode divergences need review");
    }
    Ok(())
}
