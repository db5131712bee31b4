//! Definitions of SpaceXpanse chain constants, including:
//! - network magics,
//! - address encoding prefixes,
//! - DNS seeds, and
//! - the shared merge-mining and subsidy constants.

use crate::amount::Amount;

/// The merge-mining chain id, which identifies SpaceXpanse commitments in the
/// coinbase of a parent chain block.
pub const AUXPOW_CHAIN_ID: u32 = 1899;

/// The block subsidy before the first halving.
pub const INITIAL_SUBSIDY: Amount = Amount::from_coins(800);

/// The challenge script used by signet when none is configured: a 1-of-2
/// multisig.
pub const DEFAULT_SIGNET_CHALLENGE: &str =
    "512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be430\
     210359ef5021964fe22d6f8e05b2463c9540ce96883fe3b278760f048f5189f2e6c452ae";

/// Magic numbers used to identify different SpaceXpanse networks.
pub mod magics {
    use crate::parameters::network::magic::Magic;

    /// The production mainnet.
    pub const MAINNET: Magic = Magic([0xa2, 0xf2, 0xf6, 0x93]);
    /// The testnet.
    pub const TESTNET: Magic = Magic([0xc8, 0xc3, 0x95, 0x87]);
    /// The signet with the default challenge.
    ///
    /// Other signets derive their magic from their challenge, see
    /// [`Magic::from_signet_challenge`].
    pub const DEFAULT_SIGNET: Magic = Magic([0x0a, 0x03, 0xcf, 0x40]);
    /// The regtest.
    pub const REGTEST: Magic = Magic([0xce, 0xb3, 0xbb, 0xd4]);
}

/// Constants for the production mainnet.
pub mod mainnet {
    /// The prefix for a Base58Check-encoded mainnet public key hash address.
    pub const B58_PUBKEY_ADDRESS_PREFIX: [u8; 1] = [60];

    /// The prefix for a Base58Check-encoded mainnet script hash address.
    pub const B58_SCRIPT_ADDRESS_PREFIX: [u8; 1] = [75];

    /// The prefix for a Base58Check-encoded mainnet secret key.
    pub const B58_SECRET_KEY_PREFIX: [u8; 1] = [78];

    /// The prefix for a Base58Check-encoded mainnet extended public key.
    pub const B58_EXT_PUBLIC_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0xe4, 0xad];

    /// The prefix for a Base58Check-encoded mainnet extended secret key.
    pub const B58_EXT_SECRET_KEY_PREFIX: [u8; 4] = [0x04, 0x88, 0x1e, 0xb2];

    /// The HRP for a Bech32-encoded mainnet segwit address.
    pub const HRP_SEGWIT_ADDRESS: &str = "rod";

    /// The DNS seeds that list mainnet peers.
    pub const DNS_SEEDS: [&str; 2] = ["seed1.spacexpanse.net", "seed2.spacexpanse.net"];
}

/// Constants for the test networks.
///
/// Signet and regtest share the testnet address prefixes, but each test
/// network has its own segwit HRP.
pub mod testnet {
    /// The prefix for a Base58Check-encoded testnet public key hash address.
    pub const B58_PUBKEY_ADDRESS_PREFIX: [u8; 1] = [122];

    /// The prefix for a Base58Check-encoded testnet script hash address.
    pub const B58_SCRIPT_ADDRESS_PREFIX: [u8; 1] = [137];

    /// The prefix for a Base58Check-encoded testnet secret key.
    pub const B58_SECRET_KEY_PREFIX: [u8; 1] = [140];

    /// The prefix for a Base58Check-encoded testnet extended public key.
    pub const B58_EXT_PUBLIC_KEY_PREFIX: [u8; 4] = [0x04, 0x35, 0x87, 0xcf];

    /// The prefix for a Base58Check-encoded testnet extended secret key.
    pub const B58_EXT_SECRET_KEY_PREFIX: [u8; 4] = [0x04, 0x35, 0x83, 0x94];

    /// The HRP for a Bech32-encoded testnet segwit address.
    pub const HRP_SEGWIT_ADDRESS: &str = "rodtn";

    /// The HRP for a Bech32-encoded signet segwit address.
    pub const SIGNET_HRP_SEGWIT_ADDRESS: &str = "rodtb";

    /// The HRP for a Bech32-encoded regtest segwit address.
    pub const REGTEST_HRP_SEGWIT_ADDRESS: &str = "rodrt";

    /// The DNS seeds that list testnet peers.
    pub const DNS_SEEDS: [&str; 2] = [
        "seed1.testnet.spacexpanse.net",
        "seed2.testnet.spacexpanse.net",
    ];
}
