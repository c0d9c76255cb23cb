use std::str::FromStr;

use bitcoin::util::address::{Address, Payload};
use sha2::{Digest, Sha256};

use carlisle::{AddressDeriver, Network, INFO_URL_TEMPLATE};

fn inputs() -> Vec<Vec<u8>> {
    vec![
        vec![],
        b"hello".to_vec(),
        b"correct horse battery staple".to_vec(),
        vec![0u8; 1024],
        (0..=255).collect(),
    ]
}

fn assert_p2pkh(address: &str, network: bitcoin::Network) {
    let parsed = Address::from_str(address).unwrap();
    assert_eq!(parsed.network, network);
    match parsed.payload {
        Payload::PubkeyHash(_) => (),
        other => panic!("{} is not p2pkh: {:?}", address, other),
    }
}

#[test]
fn derivation_is_deterministic() {
    let deriver = AddressDeriver::default();
    for data in inputs() {
        for &compress in &[false, true] {
            let first = deriver.derive(&data, compress).unwrap();
            let second = deriver.derive(&data, compress).unwrap();
            assert_eq!(first, second);
            // independent deriver instances agree as well
            assert_eq!(AddressDeriver::default().derive(&data, compress).unwrap(), first);
        }
    }
}

#[test]
fn private_key_is_sha256_of_input() {
    let deriver = AddressDeriver::default();
    for data in inputs() {
        let expected = hex::encode(Sha256::digest(&data));
        assert_eq!(deriver.derive(&data, false).unwrap().private_key(), expected);
        assert_eq!(deriver.derive(&data, true).unwrap().private_key(), expected);
    }
}

#[test]
fn compression_only_changes_public_key_and_address() {
    let deriver = AddressDeriver::default();
    for data in inputs() {
        let uncompressed = deriver.derive_uncompressed(&data).unwrap();
        let compressed = deriver.derive(&data, true).unwrap();

        assert_eq!(uncompressed.private_key(), compressed.private_key());
        assert!(!uncompressed.compressed());
        assert!(compressed.compressed());

        assert_eq!(uncompressed.public_key().len(), 130);
        assert_eq!(compressed.public_key().len(), 66);
        // both encodings share the x coordinate
        assert_eq!(&uncompressed.public_key()[2..66], &compressed.public_key()[2..]);

        assert_ne!(uncompressed.address(), compressed.address());
        assert_p2pkh(uncompressed.address(), bitcoin::Network::Bitcoin);
        assert_p2pkh(compressed.address(), bitcoin::Network::Bitcoin);
    }
}

#[test]
fn empty_input() {
    let deriver = AddressDeriver::default();
    let result = deriver.derive(b"", false).unwrap();
    assert_eq!(
        result.private_key(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(result.address(), "1HZwkjkeaoZfTSaJxDw6aKkxp45agDiEzN");

    let result = deriver.derive(b"", true).unwrap();
    assert_eq!(result.address(), "1F3sAm6ZtwLAUnj7d38pGFxtP3RVEvtsbV");
}

#[test]
fn info_url_embeds_address() {
    for network in &[Network::Bitcoin, Network::Testnet] {
        let deriver = AddressDeriver::new(*network);
        for data in inputs() {
            for &compress in &[false, true] {
                let result = deriver.derive(&data, compress).unwrap();
                assert_eq!(
                    result.info_url(),
                    format!("https://blockchain.info/address/{}", result.address())
                );
                assert!(result.info_url().starts_with(INFO_URL_TEMPLATE));
            }
        }
    }
}

#[test]
fn hello_round_trips_through_address_parser() {
    let result = AddressDeriver::default().derive(b"hello", false).unwrap();
    assert_eq!(
        result.private_key(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_p2pkh(result.address(), bitcoin::Network::Bitcoin);
    assert_eq!(
        Address::from_str(result.address()).unwrap().to_string(),
        result.address()
    );
}

#[test]
fn network_only_changes_address() {
    let mainnet = AddressDeriver::new(Network::Bitcoin)
        .derive(b"hello", true)
        .unwrap();
    let testnet = AddressDeriver::new(Network::Testnet)
        .derive(b"hello", true)
        .unwrap();
    assert_eq!(mainnet.private_key(), testnet.private_key());
    assert_eq!(mainnet.public_key(), testnet.public_key());
    assert_ne!(mainnet.address(), testnet.address());
    assert_p2pkh(testnet.address(), bitcoin::Network::Testnet);
}

#[test]
fn deriver_is_shareable_across_threads() {
    let deriver = std::sync::Arc::new(AddressDeriver::default());
    let expected = deriver.derive(b"hello", false).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let deriver = deriver.clone();
            std::thread::spawn(move || deriver.derive(b"hello", false).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
