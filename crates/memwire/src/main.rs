//! memwire - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `memwire check` | Validate, wire and compile the configured instances |
//! | `memwire dump` | Print the wired service definitions as JSON |
//! | `memwire drivers` | List registered client drivers |

// Force-link memwire-providers to ensure linkme registrations are included
extern crate memwire_providers;

use clap::Parser;
use memwire::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    run(&Cli::parse())
}
