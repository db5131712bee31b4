//! Fixed test vectors for proof-of-work data, difficulty and spacing.

use crate::{
    block::{self, Height, PureHeader},
    serialization::ConsensusSerialize,
    work::{
        algorithm::PowAlgo,
        difficulty::{CompactDifficulty, ExpandedDifficulty, U256},
        pow::{Error, PowData, PowHasher, Sha256dHasher},
        spacing::{avg_target_spacing, combine_spacings, SpacingError, DEFAULT_SPACING},
    },
};

/// The most permissive target allowed on regtest.
const REGTEST_POW_LIMIT: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Hashes every algorithm's headers with SHA-256d, so Neoscrypt proof-of-work
/// can be mined in tests.
struct Sha256dForAll;

impl PowHasher for Sha256dForAll {
    fn pow_hash(&self, _algorithm: PowAlgo, header: &[u8]) -> Result<[u8; 32], Error> {
        Sha256dHasher.pow_hash(PowAlgo::Sha256d, header)
    }
}

#[test]
fn compact_difficulty_expansion() {
    let _init_guard = spacexpanse_test::init();

    // The genesis difficulty of the public networks.
    let genesis = CompactDifficulty(0x1e0ffff0)
        .to_expanded()
        .expect("genesis bits are valid");
    assert_eq!(genesis.as_u256(), U256::from(0x0ffff0u64) << (8 * 27));

    // The regtest genesis difficulty.
    let regtest = CompactDifficulty(0x207fffff)
        .to_expanded()
        .expect("regtest bits are valid");
    assert_eq!(regtest.as_u256(), U256::from(0x7fffffu64) << (8 * 29));
    assert!(regtest <= ExpandedDifficulty::from_hex_const(REGTEST_POW_LIMIT));

    // Small exponents shift the mantissa right.
    assert_eq!(
        CompactDifficulty(0x01123456).to_expanded().map(|d| d.as_u256()),
        Some(U256::from(0x12u64))
    );

    // Zero, negative and overflowing values are not valid targets.
    assert_eq!(CompactDifficulty(0).to_expanded(), None);
    assert_eq!(CompactDifficulty(0x04923456).to_expanded(), None);
    assert_eq!(CompactDifficulty(0xff123456).to_expanded(), None);
    assert_eq!(CompactDifficulty(0x21010000).to_expanded(), None);
}

#[test]
fn compact_difficulty_round_trips_through_expanded() {
    let _init_guard = spacexpanse_test::init();

    for bits in [0x1e0ffff0, 0x207fffff, 0x1d00ffff, 0x1b0404cb] {
        let expanded = CompactDifficulty(bits)
            .to_expanded()
            .expect("test vectors are valid");
        assert_eq!(expanded.to_compact(), CompactDifficulty(bits));
    }
}

#[test]
fn native_pow_data_serialization() -> Result<(), color_eyre::Report> {
    let _init_guard = spacexpanse_test::init();

    let block_hash = block::Hash([0x11; 32]);
    let pow = PowData::native(PowAlgo::Neoscrypt, CompactDifficulty(0x1e0ffff0), block_hash, 7);

    let bytes = pow.consensus_serialize_to_vec()?;
    assert_eq!(bytes.len(), 1 + 4 + 80);
    assert_eq!(bytes[0], 0x02);
    assert_eq!(&bytes[1..5], &0x1e0ffff0u32.to_le_bytes());
    // version and previous block hash are zero
    assert!(bytes[5..41].iter().all(|b| *b == 0));
    // the merkle root commits to the block hash
    assert_eq!(&bytes[41..73], &[0x11; 32]);
    // time and bits are zero, then the nonce
    assert_eq!(&bytes[73..81], &[0; 8]);
    assert_eq!(&bytes[81..85], &7u32.to_le_bytes());

    let merge_mined = PowData::MergeMined {
        algorithm: PowAlgo::Sha256d,
        difficulty_threshold: CompactDifficulty(0x1e0ffff0),
        parent_header: PureHeader::null(),
    };
    assert_eq!(merge_mined.consensus_serialize_to_vec()?[0], 0x81);
    assert!(merge_mined.is_merge_mined());
    assert_eq!(PowAlgo::from_code(0x81), Some(PowAlgo::Sha256d));

    Ok(())
}

#[test]
fn pow_verification_dispatch() {
    let _init_guard = spacexpanse_test::init();

    let limit = ExpandedDifficulty::from_hex_const(REGTEST_POW_LIMIT);
    let block_hash = block::Hash([0x22; 32]);
    let bits = CompactDifficulty(0x207fffff);

    // Find a nonce that meets the easiest target.
    let pow = (0..)
        .map(|nonce| PowData::native(PowAlgo::Neoscrypt, bits, block_hash, nonce))
        .find(|pow| pow.verify(block_hash, limit, &Sha256dForAll).is_ok())
        .expect("about half of all nonces meet the regtest target");

    // The built-in hasher has no Neoscrypt implementation.
    assert_eq!(
        pow.verify(block_hash, limit, &Sha256dHasher),
        Err(Error::UnsupportedAlgorithm(PowAlgo::Neoscrypt))
    );

    // The proof-of-work must commit to the block being checked.
    assert!(matches!(
        pow.verify(block::Hash([0x33; 32]), limit, &Sha256dForAll),
        Err(Error::CommitmentMismatch { .. })
    ));

    // Targets above the network limit are rejected before hashing.
    let strict_limit = ExpandedDifficulty::from_hex_const(
        "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    );
    assert_eq!(
        pow.verify(block_hash, strict_limit, &Sha256dForAll),
        Err(Error::TargetAbovePowLimit(bits))
    );

    // SHA-256d is only valid when merge-mined, and Neoscrypt only stand-alone.
    let standalone_sha = PowData::native(PowAlgo::Sha256d, bits, block_hash, pow.nonce());
    assert!(matches!(
        standalone_sha.verify(block_hash, limit, &Sha256dHasher),
        Err(Error::WrongMiningMode {
            algorithm: PowAlgo::Sha256d,
            merge_mined: true,
        })
    ));

    let invalid_bits = PowData::native(PowAlgo::Neoscrypt, CompactDifficulty(0), block_hash, 0);
    assert_eq!(
        invalid_bits.verify(block_hash, limit, &Sha256dForAll),
        Err(Error::InvalidDifficulty(CompactDifficulty(0)))
    );
}

#[test]
fn insufficient_work_is_rejected() {
    let _init_guard = spacexpanse_test::init();

    let limit = ExpandedDifficulty::from_hex_const(REGTEST_POW_LIMIT);
    let block_hash = block::Hash([0x44; 32]);
    // A target of 1 is practically impossible to meet.
    let pow = PowData::native(PowAlgo::Neoscrypt, CompactDifficulty(0x03000001), block_hash, 0);

    assert_eq!(
        pow.verify(block_hash, limit, &Sha256dForAll),
        Err(Error::InsufficientWork)
    );
}

#[test]
fn merge_mined_pow_checks_the_parent_header() {
    let _init_guard = spacexpanse_test::init();

    let limit = ExpandedDifficulty::from_hex_const(REGTEST_POW_LIMIT);
    let bits = CompactDifficulty(0x207fffff);

    let pow = (0..)
        .map(|nonce| PowData::MergeMined {
            algorithm: PowAlgo::Sha256d,
            difficulty_threshold: bits,
            parent_header: PureHeader {
                nonce,
                ..PureHeader::null()
            },
        })
        .find(|pow| {
            pow.verify(block::Hash([0x55; 32]), limit, &Sha256dHasher)
                .is_ok()
        })
        .expect("about half of all nonces meet the regtest target");

    assert_eq!(
        pow.verify(block::Hash([0x55; 32]), limit, &Sha256dHasher),
        Ok(())
    );
}

#[test]
fn default_spacing_combines_to_thirty_seconds() {
    let _init_guard = spacexpanse_test::init();

    assert_eq!(avg_target_spacing(&DEFAULT_SPACING, Height(0)), 30);
    assert_eq!(avg_target_spacing(&DEFAULT_SPACING, Height::MAX), 30);
    assert_eq!(combine_spacings([120, 40]), Ok(30));
    assert_eq!(combine_spacings([40, 120]), Ok(30));
    assert_eq!(combine_spacings([60]), Ok(60));
    assert_eq!(combine_spacings([60, 60, 60]), Ok(20));
}

#[test]
fn invalid_spacings_are_rejected() {
    let _init_guard = spacexpanse_test::init();

    assert_eq!(combine_spacings(Vec::new()), Err(SpacingError::Empty));
    assert_eq!(combine_spacings([60, 0]), Err(SpacingError::NotPositive(0)));
    assert_eq!(combine_spacings([-5, 60]), Err(SpacingError::NotPositive(-5)));
    assert_eq!(
        combine_spacings([3, 3]),
        Err(SpacingError::Inexact {
            numerator: 9,
            denominator: 6,
        })
    );
    assert_eq!(
        combine_spacings([i64::MAX, 2]),
        Err(SpacingError::Overflow)
    );
}

#[test]
#[should_panic(expected = "must combine exactly")]
fn inexact_network_spacing_panics() {
    let _init_guard = spacexpanse_test::init();

    let rules = crate::work::spacing::AlgorithmSpacing {
        sha256d: 7,
        neoscrypt: 3,
    };
    avg_target_spacing(&rules, Height(0));
}
