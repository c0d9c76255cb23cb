extern crate carlisle;

#[macro_use]
extern crate log;

use error_chain::ChainedError;
use std::process;

use carlisle::{config::Config, errors::*, AddressDeriver};

fn run() -> Result<()> {
    let config = Config::from_args()?;
    let data = config.input.read()?;

    let deriver = AddressDeriver::new(config.network_type);
    let result = deriver.derive(&data, config.compress)?;
    info!("{} ({})", result.address(), config.network_type);

    let output = if config.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e.display_chain());
        process::exit(1);
    }
}
