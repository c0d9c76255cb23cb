use clap::{App, Arg, ArgMatches};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::chain::Network;
use crate::errors::*;

/// Where the bytes to hash come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw bytes of a command line argument; need not be UTF-8.
    Arg(Vec<u8>),
    /// Hex-encoded bytes.
    Hex(String),
    File(PathBuf),
    Stdin,
}

impl Input {
    /// Exact input bytes, without trimming trailing newlines.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Input::Arg(bytes) => Ok(bytes.clone()),
            Input::Hex(encoded) => hex::decode(encoded.trim()).map_err(|e| {
                ErrorKind::InvalidInput(format!("--hex is not valid hex: {}", e)).into()
            }),
            Input::File(path) => {
                fs::read(path).chain_err(|| format!("failed to read {}", path.display()))
            }
            Input::Stdin => {
                let mut buf = vec![];
                io::stdin()
                    .read_to_end(&mut buf)
                    .chain_err(|| "failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub network_type: Network,
    pub compress: bool,
    pub input: Input,
    pub pretty: bool,
}

#[cfg(unix)]
fn os_bytes(value: &OsStr) -> Result<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(value.as_bytes().to_vec())
}

#[cfg(not(unix))]
fn os_bytes(value: &OsStr) -> Result<Vec<u8>> {
    Ok(utf8_value("DATA", value)?.as_bytes().to_vec())
}

fn utf8_value<'a>(name: &str, value: &'a OsStr) -> Result<&'a str> {
    value.to_str().ok_or_else(|| {
        ErrorKind::InvalidInput(format!("{} is not valid UTF-8: {:?}", name, value)).into()
    })
}

fn app(network_help: &str) -> App<'_, '_> {
    App::new("carlisle")
        .version(crate_version!())
        .about("Derive a bitcoin key pair and address from the SHA-256 of arbitrary data")
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .arg(
            Arg::with_name("timestamp")
                .long("timestamp")
                .help("Prepend log lines with a timestamp"),
        )
        .arg(
            Arg::with_name("network")
                .long("network")
                .help(network_help)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("compress")
                .short("c")
                .long("compress")
                .help("Use the compressed public key encoding"),
        )
        .arg(
            Arg::with_name("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output"),
        )
        .arg(
            Arg::with_name("hex")
                .long("hex")
                .help("Hex-encoded input bytes")
                .takes_value(true)
                .conflicts_with_all(&["file", "data"]),
        )
        .arg(
            Arg::with_name("file")
                .long("file")
                .help("Read input bytes from a file ('-' for stdin)")
                .takes_value(true)
                .conflicts_with_all(&["hex", "data"]),
        )
        .arg(
            Arg::with_name("data")
                .help("Text to hash (stdin is read when no input is given)")
                .index(1),
        )
}

impl Config {
    /// Parse the process arguments and initialize logging.
    pub fn from_args() -> Result<Config> {
        let network_help = format!("Select network type ({})", Network::names().join(", "));
        let m = app(&network_help).get_matches();

        let mut log = stderrlog::new();
        log.verbosity(m.occurrences_of("verbosity") as usize);
        log.timestamp(if m.is_present("timestamp") {
            stderrlog::Timestamp::Millisecond
        } else {
            stderrlog::Timestamp::Off
        });
        log.init().chain_err(|| "logging initialization failed")?;

        let config = Config::from_matches(&m)?;
        debug!(
            "network={} compress={} pretty={}",
            config.network_type, config.compress, config.pretty
        );
        Ok(config)
    }

    /// Parse an explicit argument list (the first item is the program name).
    pub fn parse_from<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let network_help = format!("Select network type ({})", Network::names().join(", "));
        let m = app(&network_help)
            .get_matches_from_safe(args)
            .map_err(|e| ErrorKind::InvalidInput(e.message))?;
        Config::from_matches(&m)
    }

    fn from_matches(m: &ArgMatches) -> Result<Config> {
        let network_type = match m.value_of_os("network") {
            Some(name) => utf8_value("--network", name)?.parse()?,
            None => Network::default(),
        };

        let input = if let Some(encoded) = m.value_of_os("hex") {
            Input::Hex(utf8_value("--hex", encoded)?.to_string())
        } else if let Some(path) = m.value_of_os("file") {
            if path == "-" {
                Input::Stdin
            } else {
                Input::File(PathBuf::from(path))
            }
        } else if let Some(data) = m.value_of_os("data") {
            Input::Arg(os_bytes(data)?)
        } else {
            Input::Stdin
        };

        Ok(Config {
            network_type,
            compress: m.is_present("compress"),
            input,
            pretty: m.is_present("pretty"),
        })
    }
}
