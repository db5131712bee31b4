//! Mines a network's genesis block at a new time.
//!
//! Prints the nonce, time, block hash and merkle root of the first block that
//! meets the network's difficulty, ready to be hard-coded into the chain
//! parameters.
//!
//! Genesis blocks are mined with Neoscrypt, whose hashes are computed by an
//! external program, called as `<program> <algorithm> <header-hex>`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spacexpanse_chain::{
    block::{miner::mine_genesis, Block},
    parameters::{select, ChainOptions},
    work::pow::ExternalPowHasher,
};

/// Mine a genesis block for a SpaceXpanse network.
#[derive(Parser, Debug)]
#[command(name = "mine-genesis")]
struct Args {
    /// The network to mine: main, test, signet or regtest.
    network: String,

    /// The genesis block time, in seconds since the Unix epoch.
    /// Defaults to the current time.
    #[arg(long)]
    time: Option<i64>,

    /// The external program that computes proof-of-work hashes.
    #[arg(long)]
    hasher: PathBuf,

    /// A TOML config file with a `[chain]` section of chain options.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// The parts of the config file this tool reads.
#[derive(Debug, serde::Deserialize)]
struct Config {
    #[serde(default)]
    chain: ChainOptions,
}

fn main() -> Result<()> {
    init_tracing()?;

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => load_options(path)?,
        None => ChainOptions::default(),
    };
    let params = select(&args.network, &options)?;

    let time = match args.time {
        Some(time) => DateTime::from_timestamp(time, 0)
            .ok_or_else(|| eyre!("genesis time {time} is out of range"))?,
        None => Utc::now(),
    };

    let hasher = ExternalPowHasher::new(args.hasher);

    let block = mine_genesis(
        Block::clone(&params.genesis_block()),
        time,
        params.consensus().pow_limit_neoscrypt,
        &hasher,
    )
    .wrap_err_with(|| format!("mining the {} genesis block", params.network()))?;

    print!("{}", report(&block));

    Ok(())
}

/// Logs the mined block and returns the lines to print for it.
fn report(block: &Block) -> String {
    let nonce = block.header.pow.nonce();
    let time = block.header.time().timestamp();
    let block_hash = block.hash();
    let merkle_root = block.header.merkle_root();

    tracing::info!(nonce, time, %block_hash, %merkle_root, "mined genesis block");

    format!(
        "nonce: {nonce}\ntime: {time}\nblock hash: {block_hash}\nmerkle root: {merkle_root}\n"
    )
}

/// Reads chain options from the config file at `path`.
fn load_options(path: &Path) -> Result<ChainOptions> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading config file {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .wrap_err_with(|| format!("parsing config file {}", path.display()))?;

    Ok(config.chain)
}

/// Logs to stderr, at `info` unless `RUST_LOG` says otherwise.
fn init_tracing() -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    color_eyre::install()
}
