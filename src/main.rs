//! passgen - A terminal password generator
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use passgen::Args;
use passgen_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    passgen::run(Args::parse()).await
}
