#![recursion_limit = "1024"]

#[macro_use]
extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod backend;
pub mod chain;
pub mod config;
pub mod deriver;
pub mod errors;

pub use crate::backend::{KeyBackend, Secp256k1Backend};
pub use crate::chain::Network;
pub use crate::deriver::{AddressDeriver, DerivationResult, INFO_URL_TEMPLATE};
