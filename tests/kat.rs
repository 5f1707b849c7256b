//! Known-answer tests for Xoodyak hash and AEAD.
//!
//! Vectors use the LWC KAT field names (`msg`/`md`, `key`/`nonce`/`pt`/`ad`/`ct`)
//! with the tag appended to `ct`.

use serde::{de, Deserialize};
use xoodyak::aead_api::{AeadInPlace, KeyInit};
use xoodyak::digest::Digest;
use xoodyak::{Hash, KeyedXoodyak, Xoodyak, XoodyakAead};

const HASH_VECTORS: &[u8] = include_bytes!("data/hash.json");
const AEAD_VECTORS: &[u8] = include_bytes!("data/aead.json");

fn parse_json<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).expect("json")
}

fn de_hex<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let encoded = <&str>::deserialize(deserializer)?;
    hex::decode(encoded).map_err(de::Error::custom)
}

#[derive(Deserialize)]
struct HashVector {
    count: u32,
    #[serde(deserialize_with = "de_hex")]
    msg: Vec<u8>,
    #[serde(deserialize_with = "de_hex")]
    md: Vec<u8>,
}

#[derive(Deserialize)]
struct AeadVector {
    count: u32,
    #[serde(deserialize_with = "de_hex")]
    key: Vec<u8>,
    #[serde(deserialize_with = "de_hex")]
    nonce: Vec<u8>,
    #[serde(deserialize_with = "de_hex")]
    pt: Vec<u8>,
    #[serde(deserialize_with = "de_hex")]
    ad: Vec<u8>,
    #[serde(deserialize_with = "de_hex")]
    ct: Vec<u8>,
}

#[test]
fn hash_known_answers() {
    let vectors: Vec<HashVector> = parse_json(HASH_VECTORS);
    assert!(!vectors.is_empty());

    for v in &vectors {
        let mut xoodyak = Xoodyak::new();
        xoodyak.absorb(&v.msg);

        let mut digest = (0u8..32).collect::<Vec<_>>();
        xoodyak.squeeze_to(&mut digest, v.md.len());
        assert_eq!(&digest[32..], &v.md[..], "hash vector {}", v.count);

        assert_eq!(Hash::digest(&v.msg).as_slice(), &v.md[..], "digest vector {}", v.count);
    }
}

#[test]
fn aead_known_answers() {
    let vectors: Vec<AeadVector> = parse_json(AEAD_VECTORS);
    assert!(!vectors.is_empty());

    for v in &vectors {
        let tag_len = v.ct.len() - v.pt.len();
        let (ciphertext, tag) = v.ct.split_at(v.pt.len());

        let mut encryptor = KeyedXoodyak::new(&v.key);
        encryptor.absorb(&v.nonce);
        encryptor.absorb(&v.ad);
        let mut decryptor = encryptor.clone();

        let mut sealed = (0u8..32).collect::<Vec<_>>();
        encryptor.encrypt_to(&v.pt, &mut sealed);
        encryptor.squeeze_to(&mut sealed, tag_len);
        assert_eq!(&sealed[32..], &v.ct[..], "encrypt vector {}", v.count);

        let mut opened = (0u8..32).collect::<Vec<_>>();
        decryptor.decrypt_to(ciphertext, &mut opened);
        assert_eq!(&opened[32..], &v.pt[..], "decrypt vector {}", v.count);
        assert_eq!(decryptor.squeeze(tag_len), tag, "tag vector {}", v.count);
    }
}

#[test]
fn aead_trait_known_answers() {
    let vectors: Vec<AeadVector> = parse_json(AEAD_VECTORS);

    for v in vectors.iter().filter(|v| v.ct.len() - v.pt.len() == 16) {
        let cipher = <XoodyakAead as KeyInit>::new_from_slice(&v.key).expect("16-byte key");
        let nonce = v.nonce.as_slice().into();
        let (ciphertext, tag) = v.ct.split_at(v.pt.len());

        let mut buffer = v.pt.clone();
        let computed = cipher
            .encrypt_in_place_detached(nonce, &v.ad, &mut buffer)
            .expect("encrypt");
        assert_eq!(buffer, ciphertext, "vector {}", v.count);
        assert_eq!(computed.as_slice(), tag, "vector {}", v.count);

        cipher
            .decrypt_in_place_detached(nonce, &v.ad, &mut buffer, tag.into())
            .expect("decrypt");
        assert_eq!(buffer, v.pt, "vector {}", v.count);
    }
}
