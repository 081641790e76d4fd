//! Development-mode flag manager for pipeline applications.
//!
//! Toggles named boolean flags stored in `$DEVFLAGS_CONFIG_DIR/devflags.yaml`.
//! Each invocation loads the config, runs exactly one operation, writes the
//! config back if the operation mutated it, and exits with one of the
//! stable codes in [`devflags::exit_codes`].

use std::path::Path;

use clap::{Parser, Subcommand};

use devflags::core::ops::{self, ListFormat};
use devflags::core::store::FlagStore;
use devflags::error::{Error, Result};
use devflags::io::{flag_file, site};
use devflags::logging;

#[derive(Parser)]
#[command(
    name = "devflags",
    version,
    about = "Manage development-mode flags for pipeline applications"
)]
struct Cli {
    /// Diagnostic verbosity, 0 (errors only) to 3 (trace detail); clamped.
    /// Never changes operation semantics.
    #[arg(short = 'v', long, global = true, default_value_t = 0)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value of one flag as 1 or 0.
    Get { name: String },
    /// Set flags to true.
    Set {
        names: Vec<String>,
        /// Apply to every declared flag; mutually exclusive with names.
        #[arg(long)]
        all: bool,
    },
    /// Set flags to false.
    Unset {
        names: Vec<String>,
        /// Apply to every declared flag; mutually exclusive with names.
        #[arg(long)]
        all: bool,
    },
    /// List every flag and its value.
    List {
        /// Output mode: default, bash, or structured.
        #[arg(long, default_value = "default")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(command: Command) -> Result<()> {
    let path = site::config_path_from_env()?;
    let mut store = flag_file::load_flags(&path)?;
    match command {
        Command::Get { name } => cmd_get(&store, &name),
        Command::Set { names, all } => cmd_apply(&mut store, &path, names, all, true),
        Command::Unset { names, all } => cmd_apply(&mut store, &path, names, all, false),
        Command::List { format } => cmd_list(&store, &format),
    }
}

/// Print one flag value. An unknown name is a diagnostic, not a failure.
fn cmd_get(store: &FlagStore, name: &str) -> Result<()> {
    match store.get(name) {
        Ok(value) => {
            println!("{}", ops::render_bool(value));
            Ok(())
        }
        Err(Error::UnknownFlag(name)) => {
            tracing::error!(flag = %name, "not a declared dev flag");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Run one `set`/`unset` batch and persist the resulting snapshot.
fn cmd_apply(
    store: &mut FlagStore,
    path: &Path,
    names: Vec<String>,
    all: bool,
    value: bool,
) -> Result<()> {
    let targets = ops::resolve_targets(store, names, all)?;
    let outcome = store.set_many(&targets, value);
    for name in &outcome.skipped {
        tracing::warn!(flag = %name, "not a declared dev flag; skipped");
    }
    flag_file::write_flags(path, &outcome.flags)
}

fn cmd_list(store: &FlagStore, format: &str) -> Result<()> {
    let format: ListFormat = format.parse()?;
    println!("{}", ops::render_list(store, format));
    Ok(())
}
