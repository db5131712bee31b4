use hex::FromHex;

use crate::block::genesis;

use super::{CoinbaseData, Script, ScriptHash};

#[test]
fn redeem_script_hash_matches_test_premine() -> Result<(), color_eyre::Report> {
    let _init_guard = spacexpanse_test::init();

    let redeem_script = Script::from_hex(genesis::TESTNET_PREMINE_REDEEM_SCRIPT)?;
    let expected: ScriptHash = genesis::TESTNET_PREMINE_SCRIPT_HASH.parse()?;

    assert_eq!(redeem_script.script_hash(), expected);

    Ok(())
}

#[test]
fn pay_to_script_hash_layout() -> Result<(), color_eyre::Report> {
    let _init_guard = spacexpanse_test::init();

    let script_hash: ScriptHash = "fe546eafc3574b33f1c9e20a4d44680c4e54074d".parse()?;
    let script = Script::pay_to_script_hash(&script_hash);

    assert_eq!(
        script.to_string(),
        "a914fe546eafc3574b33f1c9e20a4d44680c4e54074d87"
    );
    assert_eq!(script.p2sh_script_hash(), Some(script_hash));
    assert_eq!(Script::new(&[0x51]).p2sh_script_hash(), None);

    Ok(())
}

#[test]
fn data_pushes_use_the_smallest_encoding() {
    let _init_guard = spacexpanse_test::init();

    let short = CoinbaseData::push(&[0xaa; 75]);
    assert_eq!(short.as_ref()[0], 75);
    assert_eq!(short.as_ref().len(), 76);

    let pushdata1 = CoinbaseData::push(&[0xaa; 76]);
    assert_eq!(&pushdata1.as_ref()[..2], &[0x4c, 76]);

    let pushdata2 = CoinbaseData::push(&[0xaa; 256]);
    assert_eq!(&pushdata2.as_ref()[..3], &[0x4d, 0x00, 0x01]);

    let timestamp = CoinbaseData::push(b"SpaceXpance Testnet");
    assert_eq!(timestamp.as_ref()[0], 19);
    assert_eq!(&timestamp.as_ref()[1..], b"SpaceXpance Testnet");
}
