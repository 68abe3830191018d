//! Filesystem watch loop
//!
//! Subscribes to change notifications on the watch directory and feeds one
//! candidate file at a time into the placement pipeline. Single-threaded by
//! construction: placement and any registry mutation happen on this one
//! loop, so a scoring scan never races a tag write.
//!
//! Creation events are ignored; every create is followed by a modify, which
//! is the signal acted on (same for the destination side of a move). A short
//! settling delay runs between seeing an event and touching the file, so a
//! producer still writing it is not raced.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use notify::event::{EventKind, ModifyKind};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::SorterConfig;
use crate::placement::Sorter;
use crate::registry::Registry;

/// Delay between detecting a file and acting on it
pub const SETTLING_DELAY: Duration = Duration::from_secs(1);

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Watch loop errors
#[derive(Debug, Error)]
pub enum WatchError {
    /// The change-notification backend failed
    #[error("Watcher error: {0}")]
    Notify(#[from] notify::Error),

    /// Saving the configuration at shutdown failed
    #[error("Could not persist configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Installing the interrupt handler failed
    #[error("Could not install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}

/// Options for one run of the watch loop
#[derive(Debug, Clone, Copy, Default)]
pub struct WatchOptions {
    /// Sweep files already present in the watch directory before watching
    pub initial_sort: bool,
    /// Suppress per-event console output
    pub quiet: bool,
}

/// Watch the configured directory until interrupted.
///
/// On interrupt the loop stops accepting events, finishes the in-flight
/// placement, exports the registry into the config and saves it.
///
/// # Errors
/// Returns [`WatchError`] if the watcher cannot be set up or the final config
/// save fails. Individual placement failures are reported and dropped, they
/// never stop the loop.
pub fn run(
    config: &mut SorterConfig,
    registry: &mut Registry,
    sorter: &mut Sorter,
    options: WatchOptions,
) -> Result<(), WatchError> {
    let running = Arc::new(AtomicBool::new(true));
    let interrupt_flag = Arc::clone(&running);
    ctrlc::set_handler(move || {
        interrupt_flag.store(false, Ordering::SeqCst);
    })?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |event| {
            let _ = tx.send(event);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config.watch_dir, RecursiveMode::Recursive)?;

    if options.initial_sort {
        initial_sweep(registry, sorter, config, options.quiet);
    }

    if !options.quiet {
        println!("Watching {} (Ctrl-C to stop)", config.watch_dir.display());
    }

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(Ok(event)) => {
                if !is_candidate(&event.kind) {
                    continue;
                }
                for path in &event.paths {
                    settle();
                    handle_candidate(registry, sorter, path, options.quiet);
                }
            }
            Ok(Err(err)) => eprintln!("Watcher error: {err}"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if !options.quiet {
        println!("Sorter terminated.");
    }

    config.capture_registry(registry);
    config.save()?;
    Ok(())
}

/// Modified and moved events are signals; created is redundant noise
fn is_candidate(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_) | ModifyKind::Any)
    )
}

fn settle() {
    std::thread::sleep(SETTLING_DELAY);
}

/// One placement attempt; failures are reported and the event dropped
fn handle_candidate(registry: &Registry, sorter: &mut Sorter, path: &Path, quiet: bool) {
    // Directory events carry no file to place; a path that vanished between
    // the event and the settling delay is likewise skipped.
    if !path.is_file() {
        return;
    }

    if let Err(err) = sorter.sort_file(registry, path) {
        if !quiet {
            eprintln!("Could not sort {}: {err}", path.display());
        }
    }
}

/// Sort everything already sitting in the watch directory
fn initial_sweep(registry: &Registry, sorter: &mut Sorter, config: &SorterConfig, quiet: bool) {
    let files: Vec<_> = WalkDir::new(&config.watch_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();

    for path in files {
        handle_candidate(registry, sorter, &path, quiet);
    }
}
