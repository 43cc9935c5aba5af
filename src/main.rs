//! ATM Simulator CLI
//!
//! Reads keypad entries from stdin, one integer per line, and prints the
//! screen to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- [--bills 500] [accounts.csv]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use atm_simulator::{Atm, AtmConfig, DepositSlot, LineKeypad, Result, Screen};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AtmConfig::from_args(env::args().skip(1))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut atm = Atm::with_devices(
        LineKeypad::new(stdin.lock()),
        Screen::new(stdout.lock()),
        config.bank_database()?,
        config.cash_dispenser(),
        DepositSlot::new(),
    );

    atm.run()
}
