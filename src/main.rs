//! Address Book - demo entry point
//!
//! Builds a small book, edits and queries it, and prints each step to stdout.
//! Logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

fn main() -> Result<()> {
    // Start logging (stderr only) before config so load failures are reported.
    // RUST_LOG wins; otherwise the default is swapped for LOG_LEVEL below.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if !from_env {
        filter_handle.reload(EnvFilter::new(&config.log_level))?;
    }

    info!(log_level = %config.log_level, "Configuration loaded");

    if let Err(e) = run_demo() {
        error!("Demo failed: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    let mut book = AddressBook::new();

    let mut john_record = Record::new("John");
    john_record.add_phone("0937777777")?;
    john_record.add_phone("5555555555")?;
    book.add_record(john_record);

    let mut jane_record = Record::new("Jane");
    jane_record.add_phone("9876543210")?;
    book.add_record(jane_record);

    print!("{}", book);

    let john = book.find_mut("John")?;
    john.edit_phone("0937777777", "0936666666")?;
    println!("{}", john);

    match john.find_phone("5555555555") {
        Some(phone) => println!("{}: {}", john.name(), phone),
        None => println!("{}: no such phone", john.name()),
    }

    book.delete("Jane")?;
    println!("Jane's record deleted.");

    print!("{}", book);

    info!(contacts = book.len(), "Demo finished");
    Ok(())
}
