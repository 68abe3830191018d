use super::*;

fn registry_of(entries: &[(&str, &[&str])]) -> Registry {
    let mut registry = Registry::new();
    for (path, tags) in entries {
        registry.register(*path, tags.iter());
    }
    registry
}

#[test]
fn counts_each_tag_independently() {
    let dir = Directory::new("/d", ["img", "png", "holiday"]);
    assert_eq!(matching_tag_count(&dir, "holiday_img_001.png"), 3);
    assert_eq!(matching_tag_count(&dir, "receipt.pdf"), 0);
}

#[test]
fn matching_is_substring_not_token_based() {
    let dir = Directory::new("/d", ["cat"]);
    assert_eq!(matching_tag_count(&dir, "concatenate.txt"), 1);
}

#[test]
fn matching_ignores_filename_case() {
    let dir = Directory::new("/d", ["report"]);
    assert_eq!(matching_tag_count(&dir, "REPORT_FINAL.docx"), 1);
}

#[test]
fn best_directory_picks_highest_count() {
    let registry = registry_of(&[
        ("/home/docs", &["pdf"]),
        ("/home/finance", &["pdf", "invoice"]),
    ]);

    let best = best_directory(&registry, "invoice_march.pdf").unwrap();
    assert_eq!(best.path, PathBuf::from("/home/finance"));
    assert_eq!(best.count, 2);
}

#[test]
fn best_directory_reports_zero_count_wins() {
    let registry = registry_of(&[("/home/docs", &["pdf"]), ("/home/music", &["mp3"])]);

    let best = best_directory(&registry, "notes.txt").unwrap();
    assert_eq!(best.count, 0);
}

#[test]
fn ties_resolve_to_fewest_path_components() {
    let registry = registry_of(&[
        ("/a/b/photos2", &["img"]),
        ("/a/photos", &["img"]),
    ]);

    let best = best_directory(&registry, "img_001.png").unwrap();
    assert_eq!(best.path, PathBuf::from("/a/photos"));
    assert_eq!(best.count, 1);
}

#[test]
fn equal_depth_ties_resolve_lexicographically() {
    let registry = registry_of(&[("/a/zebra", &["img"]), ("/a/apple", &["img"])]);

    let best = best_directory(&registry, "img_001.png").unwrap();
    assert_eq!(best.path, PathBuf::from("/a/apple"));
}

#[test]
fn scoring_is_deterministic() {
    let registry = registry_of(&[
        ("/x/one", &["a"]),
        ("/x/two", &["a"]),
        ("/x/three", &["a"]),
    ]);

    let first = best_directory(&registry, "a_file.txt").unwrap();
    let second = best_directory(&registry, "a_file.txt").unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_registry_is_an_error() {
    let registry = Registry::new();
    assert_eq!(
        best_directory(&registry, "anything.txt"),
        Err(EngineError::NoDirectoriesRegistered)
    );
}
