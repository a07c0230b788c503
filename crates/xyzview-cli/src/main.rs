//! xyzview command-line entry point
//!
//! Run with:
//! ```bash
//! cargo run -p xyzview-cli
//! cargo run -p xyzview-cli -- water.xyz
//! XYZVIEW_STORE=~/.xyzview.json cargo run -p xyzview-cli -- water.xyz.gz
//! ```
//!
//! Without a file argument the last persisted source is validated again.

use std::process::ExitCode;

use tokio::runtime::Runtime;
use xyzview_io::Atom;
use xyzview_source::{PathFile, SourceConfig, SourceManager, SourceResult};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the active source is valid XYZ
fn run() -> SourceResult<bool> {
    let config = SourceConfig::from_env()?;
    let mut manager = SourceManager::initialize(config.open_store()?)?;

    if let Some(path) = std::env::args().nth(1) {
        let runtime = Runtime::new()?;
        runtime.block_on(manager.import_source(&PathFile::new(path)))?;
    }

    let is_valid = manager.validate();
    if is_valid {
        print_atoms(manager.source_name(), manager.atoms());
    } else {
        // Non-fatal: the previous atom list (if any) stays in place
        match manager.validation_error() {
            Some(e) => log::warn!("'{}' is not valid XYZ: {}", manager.source_name(), e),
            None => log::warn!("'{}' is not valid XYZ", manager.source_name()),
        }
    }

    manager.teardown()?;
    Ok(is_valid)
}

fn print_atoms(name: &str, atoms: &[Atom]) {
    println!("{} ({} atoms)", name, atoms.len());
    for atom in atoms {
        let [x, y, z] = atom.coords();
        println!(
            "{:>6}  {:<4} {:>14.6} {:>14.6} {:>14.6}",
            atom.id, atom.element, x, y, z
        );
    }
}
