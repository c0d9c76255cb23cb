use crate::backend::{KeyBackend, Secp256k1Backend};
use crate::chain::Network;
use crate::errors::*;

/// Block explorer page for an address; the address is appended verbatim.
pub const INFO_URL_TEMPLATE: &str = "https://blockchain.info/address/";

/// Key pair and address derived from one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationResult {
    private_key: String,
    public_key: String,
    compressed: bool,
    address: String,
    info_url: String,
}

impl DerivationResult {
    /// Hex SHA-256 digest of the input, used as the secp256k1 secret scalar.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Hex SEC1 encoding of the public point.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn info_url(&self) -> &str {
        &self.info_url
    }
}

pub struct AddressDeriver<B = Secp256k1Backend> {
    backend: B,
}

impl AddressDeriver<Secp256k1Backend> {
    pub fn new(network: Network) -> Self {
        AddressDeriver::with_backend(Secp256k1Backend::new(network))
    }
}

impl Default for AddressDeriver<Secp256k1Backend> {
    fn default() -> Self {
        AddressDeriver::new(Network::default())
    }
}

impl<B: KeyBackend> AddressDeriver<B> {
    pub fn with_backend(backend: B) -> Self {
        AddressDeriver { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Hash `data` into a private key and derive its public key and P2PKH address.
    ///
    /// Fails with `ScalarOutOfRange` when the digest is zero or not below the curve order;
    /// the scalar is never reduced.
    pub fn derive(&self, data: &[u8], compress: bool) -> Result<DerivationResult> {
        let private_key = hex::encode(self.backend.hash256(data));

        let mut public_key = self.backend.scalar_to_pubkey(&private_key)?;
        if compress {
            public_key = self.backend.compress_pubkey(&public_key)?;
        }

        let address = self.backend.pubkey_to_address(&public_key)?;
        debug!(
            "derived {} from {} bytes (compressed={})",
            address,
            data.len(),
            compress
        );

        Ok(DerivationResult {
            private_key,
            public_key: hex::encode(public_key),
            compressed: compress,
            info_url: format!("{}{}", INFO_URL_TEMPLATE, address),
            address,
        })
    }

    pub fn derive_uncompressed(&self, data: &[u8]) -> Result<DerivationResult> {
        self.derive(data, false)
    }
}
