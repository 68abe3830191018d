//! Sortr CLI application entry point
//!
//! A background sorter: every managed directory owns tags, and arriving
//! files move to the directory whose tags best match their filename.
//!
//! # Usage
//!
//! ```bash
//! # One-time setup
//! sortr init ~/Downloads --ignore-char '!'
//!
//! # Teach it the home tree
//! sortr add ~/Pictures img png photo --recursive
//! sortr add ~/Documents/Invoices invoice receipt --parent-tags
//!
//! # Run it (default command)
//! sortr
//! sortr watch --sort
//!
//! # Inspect and maintain
//! sortr display dirs
//! sortr search invoices
//! sortr remove-tag receipt -d ~/Documents/Invoices
//! sortr rename ~/Pictures ~/Media/Pictures
//! ```
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/sortr/config.json` on Linux) along with the movement log.

use std::process::ExitCode;

use sortr::cli::{Cli, Commands};
use sortr::commands;
use sortr::config::SorterConfig;
use sortr::movelog::FileLog;
use sortr::placement::Sorter;
use sortr::watch::{self, WatchOptions};
use sortr::Result;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let quiet = cli.quiet;

    // Init is the one command that must work without an existing config.
    if let Commands::Init {
        watch_dir,
        ignore_char,
        ignored_names,
    } = cli.command()
    {
        return commands::init(watch_dir, &ignore_char, ignored_names, quiet);
    }

    let mut config = SorterConfig::load()?;
    let mut registry = config.build_registry();

    match cli.command() {
        Commands::Init { .. } => unreachable!("handled above"),

        Commands::Set {
            watch_dir,
            ignore_char,
            ignored_names,
        } => {
            commands::set(&mut config, watch_dir, ignore_char, ignored_names, quiet)?;
            config.save()?;
        }

        Commands::Add {
            directory,
            tags,
            recursive,
            parent_tags,
        } => {
            commands::add(&mut registry, directory, &tags, recursive, parent_tags, quiet)?;
            persist(&mut config, &registry)?;
        }

        Commands::RemoveDir { directories, yes } => {
            commands::remove_dir(&mut registry, &directories, yes, quiet)?;
            persist(&mut config, &registry)?;
        }

        Commands::RemoveTag { tag, directories } => {
            commands::remove_tag(&mut registry, &tag, &directories, quiet)?;
            persist(&mut config, &registry)?;
        }

        Commands::Rename { old, new } => {
            commands::rename(&mut registry, &old, new, quiet)?;
            persist(&mut config, &registry)?;
        }

        Commands::Search { name } => {
            commands::search(&registry, &name, quiet)?;
        }

        Commands::Display { selection } => {
            commands::display(&registry, &config, selection, quiet);
        }

        Commands::Watch { sort } => {
            let log = FileLog::new(SorterConfig::log_path()?, quiet);
            let mut sorter = Sorter::new(
                config.ignore_char(),
                config.ignored_names.clone(),
                Box::new(log),
            );
            watch::run(
                &mut config,
                &mut registry,
                &mut sorter,
                WatchOptions {
                    initial_sort: sort,
                    quiet,
                },
            )?;
        }
    }

    Ok(())
}

/// Export the registry into the config and save it
fn persist(config: &mut SorterConfig, registry: &sortr::Registry) -> Result<()> {
    config.capture_registry(registry);
    config.save()?;
    Ok(())
}
