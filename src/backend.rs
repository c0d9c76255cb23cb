use bitcoin::secp256k1::{self, All, Secp256k1, SecretKey};
use bitcoin::{Address, PublicKey};
use sha2::{Digest, Sha256};

use crate::chain::Network;
use crate::errors::*;

/// Hashing and curve operations the deriver is built from.
///
/// Public keys cross this boundary as SEC1 bytes: 65 bytes (`0x04` prefix) uncompressed,
/// 33 bytes (`0x02`/`0x03` prefix) compressed. Implementations must be pure functions of
/// their arguments.
pub trait KeyBackend {
    /// Single-round SHA-256 (not bitcoin's double hash).
    fn hash256(&self, data: &[u8]) -> [u8; 32];

    /// Derive the uncompressed public key for a private scalar given as 64 hex digits.
    fn scalar_to_pubkey(&self, hex_scalar: &str) -> Result<Vec<u8>>;

    /// Re-encode a public key in compressed form. Compressed input is returned as is.
    fn compress_pubkey(&self, pubkey: &[u8]) -> Result<Vec<u8>>;

    /// P2PKH address of the key bytes exactly as given.
    fn pubkey_to_address(&self, pubkey: &[u8]) -> Result<String>;
}

pub struct Secp256k1Backend {
    secp: Secp256k1<All>,
    network: Network,
}

impl Secp256k1Backend {
    pub fn new(network: Network) -> Self {
        Secp256k1Backend {
            secp: Secp256k1::new(),
            network,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }
}

impl Default for Secp256k1Backend {
    fn default() -> Self {
        Secp256k1Backend::new(Network::default())
    }
}

fn parse_scalar(hex_scalar: &str) -> Result<SecretKey> {
    let bytes = hex::decode(hex_scalar)
        .map_err(|e| ErrorKind::InvalidScalar(format!("{:?}: {}", hex_scalar, e)))?;
    if bytes.len() != 32 {
        bail!(ErrorKind::InvalidScalar(format!(
            "expected 32 bytes, got {}",
            bytes.len()
        )));
    }
    // libsecp256k1 refuses zero and anything >= n instead of reducing
    SecretKey::from_slice(&bytes).map_err(|e| match e {
        secp256k1::Error::InvalidSecretKey => ErrorKind::ScalarOutOfRange.into(),
        e => e.into(),
    })
}

fn parse_pubkey(pubkey: &[u8]) -> Result<secp256k1::PublicKey> {
    secp256k1::PublicKey::from_slice(pubkey).map_err(|e| {
        ErrorKind::InvalidPublicKey(format!("{} ({}): {}", hex::encode(pubkey), pubkey.len(), e))
            .into()
    })
}

impl KeyBackend for Secp256k1Backend {
    fn hash256(&self, data: &[u8]) -> [u8; 32] {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(data));
        digest
    }

    fn scalar_to_pubkey(&self, hex_scalar: &str) -> Result<Vec<u8>> {
        let secret = parse_scalar(hex_scalar)?;
        let point = secp256k1::PublicKey::from_secret_key(&self.secp, &secret);
        Ok(point.serialize_uncompressed().to_vec())
    }

    fn compress_pubkey(&self, pubkey: &[u8]) -> Result<Vec<u8>> {
        Ok(parse_pubkey(pubkey)?.serialize().to_vec())
    }

    fn pubkey_to_address(&self, pubkey: &[u8]) -> Result<String> {
        let key = PublicKey::from_slice(pubkey)
            .map_err(|e| ErrorKind::InvalidPublicKey(format!("{}: {}", hex::encode(pubkey), e)))?;
        let address = Address::p2pkh(&key, self.network.into());
        trace!("p2pkh address {}", address);
        Ok(address.to_string())
    }
}
