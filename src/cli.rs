//! Command-line interface definitions and parsing
//!
//! Defines the complete CLI structure for sortr using the `clap` crate.
//! Running with no subcommand starts the watch loop, which is the program's
//! reason to exist; everything else configures the tag vocabulary it sorts
//! by.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// What the display command should show
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    /// Every tag in use, with the directories that own it
    Tags,
    /// Every managed directory, with its tags
    Dirs,
    /// The configuration summary
    Config,
}

/// Tag-based background file sorter
#[derive(Parser, Debug)]
#[command(name = "sortr", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The requested command, defaulting to the watch loop
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Watch { sort: false })
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create the configuration file
    Init {
        /// Directory to watch for arriving files
        watch_dir: PathBuf,

        /// Character marking a file as do-not-move
        #[arg(short = 'i', long, default_value = "!")]
        ignore_char: String,

        /// Filenames containing any of these are never moved
        #[arg(long = "ignored-name", value_name = "NAME", num_args = 0..)]
        ignored_names: Vec<String>,
    },

    /// Update configuration values
    Set {
        /// New watch directory
        #[arg(long)]
        watch_dir: Option<PathBuf>,

        /// New ignore character
        #[arg(short = 'i', long)]
        ignore_char: Option<String>,

        /// Ignored names to append
        #[arg(long = "ignored-name", value_name = "NAME", num_args = 0..)]
        ignored_names: Vec<String>,
    },

    /// Register a directory with tags (merges tags if already registered)
    Add {
        /// The directory to register
        directory: PathBuf,

        /// Tags to associate with the directory
        #[arg(required = true, value_name = "TAG", num_args = 1..)]
        tags: Vec<String>,

        /// Also apply the tags to every subdirectory
        #[arg(short, long)]
        recursive: bool,

        /// Also inherit the parent directory's tags
        #[arg(short = 'p', long)]
        parent_tags: bool,
    },

    /// Remove directories from the registry
    #[command(visible_alias = "rm-dir")]
    RemoveDir {
        /// Directories to remove
        #[arg(required = true, num_args = 1..)]
        directories: Vec<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove a tag from all directories, or from a named subset
    #[command(visible_alias = "rm-tag")]
    RemoveTag {
        /// The tag to remove
        tag: String,

        /// Only remove the tag from these directories
        #[arg(short = 'd', long = "dir", value_name = "DIRECTORY", num_args = 1..)]
        directories: Vec<PathBuf>,
    },

    /// Move a registered directory to a new path, keeping its tags
    Rename {
        /// Current registered path
        old: PathBuf,

        /// New path
        new: PathBuf,
    },

    /// Search managed directories by name
    Search {
        /// Name fragment to look for (case-insensitive)
        name: String,
    },

    /// Show tags, directories or the configuration
    Display {
        /// What to show
        #[arg(value_enum)]
        selection: DisplayVariant,
    },

    /// Watch the configured directory and sort arriving files (default)
    Watch {
        /// Sort files already in the watch directory before watching
        #[arg(long)]
        sort: bool,
    },
}
