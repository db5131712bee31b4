//! The SpaceXpanse networks.

use std::{fmt, str::FromStr};

use super::ConfigError;

pub mod magic;

/// An enum describing the possible network choices.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production mainnet.
    #[default]
    #[serde(rename = "main")]
    Mainnet,

    /// The public test network, which is reset from time to time.
    #[serde(rename = "test")]
    Testnet,

    /// A test network whose blocks must be signed by a challenge script.
    #[serde(rename = "signet")]
    Signet,

    /// A private regression test network, with minimal difficulty.
    #[serde(rename = "regtest")]
    Regtest,
}

impl Network {
    /// Returns an iterator over all the networks.
    pub fn iter() -> impl Iterator<Item = Network> {
        [
            Network::Mainnet,
            Network::Testnet,
            Network::Signet,
            Network::Regtest,
        ]
        .into_iter()
    }

    /// Returns the token that selects this network.
    pub fn token(&self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
            Network::Signet => "signet",
            Network::Regtest => "regtest",
        }
    }

    /// Returns the default peer-to-peer port of this network.
    pub fn default_port(&self) -> u16 {
        match self {
            Network::Mainnet => 11998,
            Network::Testnet => 18398,
            Network::Signet => 38398,
            Network::Regtest => 18498,
        }
    }

    /// Returns true if this is a test network.
    pub fn is_a_test_network(&self) -> bool {
        *self != Network::Mainnet
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Network::iter()
            .find(|network| network.token() == string)
            .ok_or_else(|| ConfigError::UnknownNetwork(string.to_string()))
    }
}
