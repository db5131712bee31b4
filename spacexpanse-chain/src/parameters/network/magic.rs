//! Network `Magic` type and implementation.

use std::fmt;

use crate::{
    serialization::{sha256d, ConsensusSerialize},
    transparent::Script,
};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// A magic number identifying the network in peer-to-peer message headers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Magic(pub [u8; 4]);

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Magic").field(&hex::encode(self.0)).finish()
    }
}

impl Magic {
    /// Returns the magic of a signet with `challenge`: the first four bytes of
    /// the SHA-256d hash of the length-prefixed challenge script.
    pub fn from_signet_challenge(challenge: &Script) -> Magic {
        let mut writer = sha256d::Writer::default();
        challenge
            .consensus_serialize(&mut writer)
            .expect("writing to a hasher never fails");
        let hash = writer.finish();

        Magic([hash[0], hash[1], hash[2], hash[3]])
    }
}

#[cfg(test)]
mod magic_proptest {
    use hex::FromHex;
    use proptest::prelude::*;

    use super::Magic;
    use crate::{
        parameters::constants::{magics, DEFAULT_SIGNET_CHALLENGE},
        transparent::Script,
    };

    #[test]
    fn magic_debug() {
        let _init_guard = spacexpanse_test::init();

        assert_eq!(format!("{:?}", magics::MAINNET), "Magic(\"a2f2f693\")");
        assert_eq!(format!("{:?}", magics::TESTNET), "Magic(\"c8c39587\")");
        assert_eq!(format!("{:?}", magics::DEFAULT_SIGNET), "Magic(\"0a03cf40\")");
        assert_eq!(format!("{:?}", magics::REGTEST), "Magic(\"ceb3bbd4\")");
    }

    #[test]
    fn signet_magic_is_derived_from_the_challenge() {
        let _init_guard = spacexpanse_test::init();

        let default_challenge =
            Script::from_hex(DEFAULT_SIGNET_CHALLENGE).expect("hard-coded hex is valid");
        assert_eq!(
            Magic::from_signet_challenge(&default_challenge),
            magics::DEFAULT_SIGNET
        );

        // OP_TRUE
        let op_true = Script::new(&[0x51]);
        assert_eq!(
            Magic::from_signet_challenge(&op_true),
            Magic([0x54, 0xd2, 0x6f, 0xbd])
        );
    }

    proptest! {

        #[test]
        fn proptest_magic_from_array(data in any::<[u8; 4]>()) {
            let _init_guard = spacexpanse_test::init();

            assert_eq!(format!("{:?}", Magic(data)), format!("Magic({:x?})", hex::encode(data)));
        }
    }
}
