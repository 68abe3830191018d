//! Integration tests for sortr
//!
//! These exercise the real filesystem: temporary home trees, real moves via
//! `std::fs::rename`, and the walkdir-backed subtree walker.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use sortr::config::SorterConfig;
use sortr::movelog::{FileLog, NullLog};
use sortr::placement::{PlacementOutcome, Sorter};
use sortr::registry::Registry;
use sortr::tree::{self, FsWalker};

fn make_dir(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(&path).unwrap();
    path
}

fn make_file(directory: &Path, name: &str) -> PathBuf {
    let path = directory.join(name);
    fs::write(&path, b"test content").unwrap();
    path
}

fn sorter() -> Sorter {
    Sorter::new('!', vec![], Box::new(NullLog))
}

#[test]
fn sorts_a_real_file_into_the_best_directory() {
    let home = TempDir::new().unwrap();
    let photos = make_dir(home.path(), "photos");
    let docs = make_dir(home.path(), "docs");
    let watch = make_dir(home.path(), "inbox");

    let mut registry = Registry::new();
    registry.register(&photos, ["img", "png"]);
    registry.register(&docs, ["report"]);

    let candidate = make_file(&watch, "img_vacation.png");
    let outcome = sorter().sort_file(&registry, &candidate).unwrap();

    assert_eq!(
        outcome,
        PlacementOutcome::Moved {
            from: candidate.clone(),
            to: photos.join("img_vacation.png"),
        }
    );
    assert!(!candidate.exists());
    assert!(photos.join("img_vacation.png").exists());
}

#[test]
fn collision_on_disk_gets_a_numbered_name() {
    let home = TempDir::new().unwrap();
    let docs = make_dir(home.path(), "docs");
    let watch = make_dir(home.path(), "inbox");

    let mut registry = Registry::new();
    registry.register(&docs, ["report"]);

    make_file(&docs, "report.txt");
    let first = make_file(&watch, "report.txt");
    sorter().sort_file(&registry, &first).unwrap();
    assert!(docs.join("report (1).txt").exists());

    let second = make_file(&watch, "report.txt");
    sorter().sort_file(&registry, &second).unwrap();
    assert!(docs.join("report (2).txt").exists());
}

#[test]
fn ignore_char_keeps_the_file_in_place() {
    let home = TempDir::new().unwrap();
    let docs = make_dir(home.path(), "docs");
    let watch = make_dir(home.path(), "inbox");

    let mut registry = Registry::new();
    registry.register(&docs, ["report"]);

    let keeper = make_file(&watch, "!report.txt");
    let outcome = sorter().sort_file(&registry, &keeper).unwrap();

    assert_eq!(outcome, PlacementOutcome::Ignored);
    assert!(keeper.exists());
}

#[test]
fn zero_match_keeps_the_file_in_place() {
    let home = TempDir::new().unwrap();
    let docs = make_dir(home.path(), "docs");
    let watch = make_dir(home.path(), "inbox");

    let mut registry = Registry::new();
    registry.register(&docs, ["report"]);

    let stranger = make_file(&watch, "song.mp3");
    let outcome = sorter().sort_file(&registry, &stranger).unwrap();

    assert_eq!(outcome, PlacementOutcome::NoMatch);
    assert!(stranger.exists());
}

#[test]
fn subtree_propagation_covers_a_real_tree() {
    let home = TempDir::new().unwrap();
    let root = make_dir(home.path(), "media");
    make_dir(home.path(), "media/photos");
    make_dir(home.path(), "media/photos/2024");
    make_dir(home.path(), "media/music");
    let outside = make_dir(home.path(), "other");

    let mut registry = Registry::new();
    registry.register(&root, ["media"]);
    registry.register(&outside, ["other"]);

    let tags: std::collections::BTreeSet<String> = ["x".to_string()].into();
    tree::apply_tags_to_subtree(&mut registry, &FsWalker, &root, &tags);

    for sub in ["media/photos", "media/photos/2024", "media/music"] {
        let dir = registry.lookup(home.path().join(sub)).unwrap();
        assert!(dir.tags().contains("x"), "missing tag on {sub}");
    }
    assert!(!registry.lookup(&outside).unwrap().tags().contains("x"));
}

#[test]
fn parent_inheritance_through_a_real_tree() {
    let home = TempDir::new().unwrap();
    let parent = make_dir(home.path(), "docs");
    let child = make_dir(home.path(), "docs/taxes");
    make_dir(home.path(), "docs/taxes/2024");

    let mut registry = Registry::new();
    registry.register(&parent, ["document"]);
    registry.register(&child, ["tax"]);

    tree::inherit_parent_tags(&mut registry, &FsWalker, &child, true).unwrap();

    assert!(registry.lookup(&child).unwrap().tags().contains("document"));
    let grandchild = registry.lookup(home.path().join("docs/taxes/2024")).unwrap();
    assert!(grandchild.tags().contains("document"));
}

#[test]
fn config_round_trip_drives_a_sort() {
    let home = TempDir::new().unwrap();
    let photos = make_dir(home.path(), "photos");
    let watch = make_dir(home.path(), "inbox");
    let config_path = home.path().join("config.json");

    let mut config = SorterConfig::new(watch.clone(), "!", vec![]).unwrap();
    let mut registry = Registry::new();
    registry.register(&photos, ["img"]);
    config.capture_registry(&registry);
    config.save_to(&config_path).unwrap();

    // A fresh process: load config, rebuild the registry, sort.
    let loaded = SorterConfig::load_from(&config_path).unwrap();
    let registry = loaded.build_registry();
    let mut sorter = Sorter::new(loaded.ignore_char(), loaded.ignored_names.clone(), Box::new(NullLog));

    let candidate = make_file(&watch, "img_001.png");
    sorter.sort_file(&registry, &candidate).unwrap();
    assert!(photos.join("img_001.png").exists());
}

#[test]
fn movement_log_appends_a_line_per_move() {
    let home = TempDir::new().unwrap();
    let docs = make_dir(home.path(), "docs");
    let watch = make_dir(home.path(), "inbox");
    let log_path = home.path().join("moves.log");

    let mut registry = Registry::new();
    registry.register(&docs, ["report"]);

    let log = FileLog::new(&log_path, true);
    let mut sorter = Sorter::new('!', vec![], Box::new(log));

    let candidate = make_file(&watch, "report.txt");
    sorter.sort_file(&registry, &candidate).unwrap();

    let contents = fs::read_to_string(&log_path).unwrap();
    assert_eq!(contents.lines().count(), 1);
    assert!(contents.contains("report.txt"));
}
