use std::fmt;
use std::str::FromStr;

pub use bitcoin::network::constants::Network as BNetwork;

use crate::errors::*;

/// Network whose P2PKH version byte is used for address encoding.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Serialize, Ord, PartialOrd, Eq)]
pub enum Network {
    Bitcoin,
    Testnet,
    Regtest,
    Signet,
}

impl Network {
    pub fn names() -> Vec<String> {
        vec![
            "mainnet".to_string(),
            "testnet".to_string(),
            "regtest".to_string(),
            "signet".to_string(),
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Bitcoin => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
            Network::Signet => "signet",
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Bitcoin
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(network_name: &str) -> Result<Self> {
        Ok(match network_name {
            "mainnet" => Network::Bitcoin,
            "testnet" => Network::Testnet,
            "regtest" => Network::Regtest,
            "signet" => Network::Signet,
            _ => bail!(ErrorKind::InvalidInput(format!(
                "unsupported network: {:?} (expected one of {})",
                network_name,
                Network::names().join(", ")
            ))),
        })
    }
}

impl From<Network> for BNetwork {
    fn from(network: Network) -> Self {
        match network {
            Network::Bitcoin => BNetwork::Bitcoin,
            Network::Testnet => BNetwork::Testnet,
            Network::Regtest => BNetwork::Regtest,
            Network::Signet => BNetwork::Signet,
        }
    }
}
