//! Tests for base32 decoding (from_base32 / decode).

use base32_codec::{decode, from_base32, max_decoded_size, to_base32, Base32Error};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base32(&blob);
        let decoded = from_base32(&encoded).unwrap();
        assert_eq!(decoded, blob);

        let limit = max_decoded_size(encoded.len());
        let mut out = vec![0u8; limit];
        let length = decode(encoded.as_bytes(), &mut out, limit).unwrap();
        assert_eq!(&out[..length], blob.as_slice());
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = to_base32(&blob);
        let invalid = format!("{}!!!!!!!!", encoded);
        let result = from_base32(&invalid);
        assert_eq!(
            result,
            Err(Base32Error::InvalidSymbol {
                position: encoded.len()
            })
        );
    }
}

#[test]
fn rejects_out_of_alphabet_characters() {
    for ch in ['a', 'z', '0', '1', '8', '9', '+', '/', '-', '_', ' ', '.'] {
        let input = format!("MZX{}6===", ch);
        assert_eq!(
            from_base32(&input),
            Err(Base32Error::InvalidSymbol { position: 3 }),
            "character {:?}",
            ch
        );
    }
}

#[test]
fn padding_placement() {
    assert_eq!(from_base32("MY======").unwrap(), vec![0x66]);
    assert!(matches!(
        from_base32("M=Y====="),
        Err(Base32Error::InvalidSymbol { .. })
    ));
}

#[test]
fn empty_input() {
    assert_eq!(from_base32("").unwrap(), b"");
}

#[test]
fn rfc4648_vectors() {
    assert_eq!(from_base32("MY======").unwrap(), b"f");
    assert_eq!(from_base32("MZXQ====").unwrap(), b"fo");
    assert_eq!(from_base32("MZXW6===").unwrap(), b"foo");
    assert_eq!(from_base32("MZXW6YQ=").unwrap(), b"foob");
    assert_eq!(from_base32("MZXW6YTB").unwrap(), b"fooba");
    assert_eq!(from_base32("MZXW6YTBOI======").unwrap(), b"foobar");
}

#[test]
fn round_trips_text_samples() {
    let samples = [
        "",
        "f",
        "fo",
        "foo",
        "foob",
        "fooba",
        "foobar",
        "Hello, World!",
        "asdqwd",
        "MY======",
        "MZXQ====",
        "MZXW6===",
        "MZXW6YQ=",
        "MZXW6YTB",
        "MZXW6YTBOI======",
        "mmmmm",
        "AZXW6YTBOI======1",
        "sizeof() returns the size in bytes of its operand, but its meaning depends on what the operand is",
    ];
    for sample in samples {
        let encoded = to_base32(sample.as_bytes());
        let decoded = from_base32(&encoded).unwrap();
        assert_eq!(decoded, sample.as_bytes(), "sample {:?}", sample);
    }
}

#[test]
fn stops_at_out_limit() {
    let encoded = to_base32(b"foobarbaz");
    let mut out = [0u8; 16];
    for limit in 0..=9 {
        let length = decode(encoded.as_bytes(), &mut out, limit).unwrap();
        assert_eq!(length, limit);
        assert_eq!(&out[..length], &b"foobarbaz"[..limit]);
    }
}

#[test]
fn early_end_returns_fewer_bytes() {
    let mut out = [0u8; 32];
    let length = decode(b"MZXW6===", &mut out, 32).unwrap();
    assert_eq!(length, 3);
}

#[test]
fn concatenated_groups() {
    assert_eq!(from_base32("MY======MZXQ====").unwrap(), b"ffo");
}
