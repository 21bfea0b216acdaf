use anyhow::Result;
use svarint::{
    MAX_LEN_32, MAX_LEN_64, decode_var_int, decode_var_long, encode_to_array, encode_var_int,
    encode_var_long, encoded_len,
};

fn known_encodings_int() -> Vec<(i32, Vec<u8>)> {
    vec![
        // Signs alternate as the encoded value grows.
        (0, vec![0x00]),
        (-1, vec![0x01]),
        (1, vec![0x02]),
        (-2, vec![0x03]),
        (2, vec![0x04]),
        // Largest magnitudes that still fit one byte.
        (63, vec![0x7e]),
        (-64, vec![0x7f]),
        (64, vec![0x80, 0x01]),
        (-65, vec![0x81, 0x01]),
        (65, vec![0x82, 0x01]),
        // Max and min differ only in the lowest payload bit.
        (i32::MAX, vec![0xfe, 0xff, 0xff, 0xff, 0x0f]),
        (i32::MIN, vec![0xff, 0xff, 0xff, 0xff, 0x0f]),
    ]
}

fn known_encodings_long() -> Vec<(i64, Vec<u8>)> {
    let mut cases: Vec<(i64, Vec<u8>)> = known_encodings_int()
        .into_iter()
        .map(|(value, bytes)| (i64::from(value), bytes))
        .collect();
    // Nine 7-bit groups plus one byte carrying the 64th bit.
    let mut max = vec![0xfe];
    max.extend([0xff; 8]);
    max.push(0x01);
    cases.push((i64::MAX, max));
    let mut min = vec![0xff; 9];
    min.push(0x01);
    cases.push((i64::MIN, min));
    cases
}

#[test]
fn encode_var_int_matches_known_bytes() {
    for (value, expected) in known_encodings_int() {
        let mut buffer: Vec<u8> = Vec::new();
        let written = encode_var_int(value, &mut buffer);
        assert_eq!(buffer, expected, "encoding {value}");
        assert_eq!(written, expected.len());
    }
}

#[test]
fn decode_var_int_matches_known_values() -> Result<()> {
    for (value, encoded) in known_encodings_int() {
        let mut offset = 0;
        let decoded = decode_var_int(&encoded, &mut offset)?;
        assert_eq!(decoded, value);
        assert_eq!(offset, encoded.len());
    }
    Ok(())
}

#[test]
fn encode_var_long_matches_known_bytes() {
    for (value, expected) in known_encodings_long() {
        let mut buffer: Vec<u8> = Vec::new();
        let written = encode_var_long(value, &mut buffer);
        assert_eq!(buffer, expected, "encoding {value}");
        assert_eq!(written, expected.len());
    }
}

#[test]
fn decode_var_long_matches_known_values() -> Result<()> {
    for (value, encoded) in known_encodings_long() {
        let mut offset = 0;
        let decoded = decode_var_long(&encoded, &mut offset)?;
        assert_eq!(decoded, value);
        assert_eq!(offset, encoded.len());
    }
    Ok(())
}

#[test]
fn extremes_use_maximum_length() {
    assert_eq!(encoded_len(i32::MAX), MAX_LEN_32);
    assert_eq!(encoded_len(i32::MIN), MAX_LEN_32);
    assert_eq!(encoded_len(i64::MAX), MAX_LEN_64);
    assert_eq!(encoded_len(i64::MIN), MAX_LEN_64);
    assert_eq!(encoded_len(0i32), 1);
    assert_eq!(encoded_len(0i64), 1);
}

#[test]
fn encode_to_array_stays_inline() {
    let encoded = encode_to_array(i64::MIN);
    assert!(!encoded.spilled());
    assert_eq!(encoded.len(), MAX_LEN_64);
    assert_eq!(encoded.last(), Some(&0x01));

    let zero = encode_to_array(0i32);
    assert_eq!(zero.as_slice(), &[0x00]);
}

#[test]
fn encode_appends_without_touching_existing_bytes() {
    let mut buffer: Vec<u8> = vec![0xaa, 0xbb];
    encode_var_int(64, &mut buffer);
    assert_eq!(buffer, [0xaa, 0xbb, 0x80, 0x01]);
}
