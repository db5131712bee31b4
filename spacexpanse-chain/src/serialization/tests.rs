use hex_literal::hex;

use super::{sha256d, CompactSizeMessage, ConsensusSerialize};

#[test]
fn compact_size_boundaries() -> Result<(), color_eyre::Report> {
    let _init_guard = spacexpanse_test::init();

    let cases: [(u64, &[u8]); 7] = [
        (0, &[0x00]),
        (0xfc, &[0xfc]),
        (0xfd, &[0xfd, 0xfd, 0x00]),
        (0xffff, &[0xfd, 0xff, 0xff]),
        (0x1_0000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
        (0xffff_ffff, &[0xfe, 0xff, 0xff, 0xff, 0xff]),
        (
            0x1_0000_0000,
            &[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
        ),
    ];

    for (value, expected) in cases {
        let size = CompactSizeMessage::from(value);
        assert_eq!(size.consensus_serialize_to_vec()?, expected, "value {value:#x}");
        assert_eq!(size.consensus_serialized_size(), expected.len());
    }

    Ok(())
}

#[test]
fn byte_vectors_are_length_prefixed() -> Result<(), color_eyre::Report> {
    let _init_guard = spacexpanse_test::init();

    let data = vec![0xab; 3];
    assert_eq!(data.consensus_serialize_to_vec()?, vec![0x03, 0xab, 0xab, 0xab]);

    Ok(())
}

#[test]
fn sha256d_of_empty_input() {
    let _init_guard = spacexpanse_test::init();

    assert_eq!(
        sha256d::hash(&[]),
        hex!("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"),
    );
}
