//! Selects and builds the parameters of a network.

use super::{chain_params, ChainOptions, ChainParams, ConfigError, Network};

/// Builds the parameters of the network named `network_name`, applying the
/// startup `options` that are relevant to it.
///
/// Signet uses the challenge and seed node options, and regtest uses the
/// activation override and pruning options. Other options are ignored.
///
/// # Panics
///
/// If the hard-coded genesis block of the network doesn't match its
/// construction inputs.
pub fn select(network_name: &str, options: &ChainOptions) -> Result<ChainParams, ConfigError> {
    let network: Network = network_name.parse()?;

    let params = ChainParams::new(network, options)?;

    tracing::info!(
        %network,
        genesis_hash = %params.genesis_hash(),
        magic = ?params.magic(),
        "selected chain parameters",
    );

    Ok(params)
}

impl ChainParams {
    /// Builds the parameters of `network`, applying the relevant `options`.
    ///
    /// See [`select`] for details.
    pub fn new(network: Network, options: &ChainOptions) -> Result<ChainParams, ConfigError> {
        match network {
            Network::Mainnet => Ok(chain_params::mainnet()),
            Network::Testnet => Ok(chain_params::testnet()),
            Network::Signet => chain_params::signet(options),
            Network::Regtest => chain_params::regtest(options),
        }
    }
}
