use super::*;
use crate::config::LibrarySettings;
use crate::error::MetadataError;
use crate::library::Selection;
use crate::metadata::{MetadataLoader, TagData, TagReader};
use crate::playback::PlaybackOrder;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

/// Tags are stored as `title|artist` in the file body.
struct PipeReader;

impl TagReader for PipeReader {
    fn read(&self, bytes: &[u8]) -> Result<TagData, MetadataError> {
        let text = String::from_utf8_lossy(bytes);
        let (title, artist) = text
            .split_once('|')
            .ok_or_else(|| MetadataError::Parse("no separator".into()))?;
        Ok(TagData {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            picture: None,
        })
    }
}

fn session() -> Session<PipeReader> {
    Session::with_loader(
        LibrarySettings::default(),
        MetadataLoader::with_reader(PipeReader, 5),
        PlaybackOrder::seeded(11),
    )
}

fn folder(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (name, body) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, body).unwrap();
    }
    dir
}

fn select(dir: &Path) -> Selection {
    Selection::Directory(dir.to_path_buf())
}

#[tokio::test]
async fn load_then_enrich_populates_the_registry() {
    let dir = folder(&[
        ("a.mp3", "Alpha|Ann"),
        ("sub/b.mp3", "Beta|Bob"),
        ("sub/deeper/c.MP3", "broken"),
        ("notes.txt", "Nope|Nobody"),
    ]);
    let mut s = session();

    let outcome = s.load(select(dir.path()));
    assert!(matches!(outcome, LoadOutcome::Loaded { tracks: 3, .. }));
    assert_eq!(s.order(), &[0, 1, 2]);

    let report = s.enrichment().await;
    assert_eq!(report.enriched, 2);
    assert_eq!(report.unresolved, 1);

    assert_eq!(s.track(0).unwrap().title.as_deref(), Some("Alpha"));
    assert_eq!(s.track(1).unwrap().artist.as_deref(), Some("Bob"));
    assert_eq!(s.track(2).unwrap().title, None);
    assert_eq!(s.track(2).unwrap().display_name, "c");
}

#[test]
fn cancelled_and_denied_selections_leave_state_untouched() {
    let dir = folder(&[("a.mp3", "A|X"), ("b.mp3", "B|Y")]);
    let mut s = session();
    s.load(select(dir.path()));
    s.select(1);

    assert_eq!(s.load(Selection::Cancelled), LoadOutcome::Cancelled);
    assert!(matches!(
        s.load(select(&dir.path().join("missing"))),
        LoadOutcome::Denied(_)
    ));

    assert_eq!(s.len(), 2);
    assert_eq!(s.current(), Some(1));
    assert_eq!(s.order(), &[0, 1]);
}

#[test]
fn empty_folder_replaces_the_registry() {
    let full = folder(&[("a.mp3", "A|X")]);
    let empty = folder(&[("cover.jpg", "")]);
    let mut s = session();
    s.load(select(full.path()));

    assert_eq!(s.load(select(empty.path())), LoadOutcome::Empty);
    assert!(s.is_empty());
    assert!(s.order().is_empty());
    assert_eq!(s.next(), None);
}

#[tokio::test]
async fn reload_stops_the_previous_enrichment() {
    let first = folder(&[("a.mp3", "A|X"), ("b.mp3", "B|Y")]);
    let second = folder(&[("c.mp3", "C|Z")]);
    let mut s = session();

    s.load(select(first.path()));
    let stale_task = s.enrichment();
    s.load(select(second.path()));

    let report = stale_task.await;
    assert!(report.stopped_early);
    assert!(report.batch_sizes.is_empty());

    assert_eq!(s.len(), 1);
    assert_eq!(s.track(0).unwrap().title, None);

    let fresh = s.enrichment().await;
    assert_eq!(fresh.enriched, 1);
    assert_eq!(s.track(0).unwrap().title.as_deref(), Some("C"));
}

#[test]
fn refresh_rescans_the_last_selection() {
    let dir = folder(&[("a.mp3", "A|X")]);
    let mut s = session();
    assert_eq!(s.refresh(), LoadOutcome::Cancelled);

    s.load(select(dir.path()));
    fs::write(dir.path().join("b.mp3"), "B|Y").unwrap();

    assert!(matches!(s.refresh(), LoadOutcome::Loaded { tracks: 2, .. }));
}

#[test]
fn toggling_shuffle_rebuilds_a_valid_order() {
    let files: Vec<(String, &str)> = (0..8).map(|i| (format!("{i}.mp3"), "T|A")).collect();
    let refs: Vec<(&str, &str)> = files.iter().map(|(n, b)| (n.as_str(), *b)).collect();
    let dir = folder(&refs);
    let mut s = session();
    s.load(select(dir.path()));

    s.toggle_shuffle();
    assert!(s.shuffle());
    let mut sorted = s.order().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..8).collect::<Vec<_>>());

    s.toggle_shuffle();
    assert!(!s.shuffle());
    assert_eq!(s.order(), (0..8).collect::<Vec<_>>().as_slice());
}

#[test]
fn next_and_previous_follow_the_order_and_wrap() {
    let dir = folder(&[("a.mp3", ""), ("b.mp3", ""), ("c.mp3", "")]);
    let mut s = session();
    s.load(select(dir.path()));

    assert_eq!(s.next(), Some(0));
    assert_eq!(s.next(), Some(1));
    assert_eq!(s.next(), Some(2));
    assert_eq!(s.next(), Some(0));
    assert_eq!(s.previous(), Some(2));

    assert!(s.select(1));
    assert!(!s.select(3));
    assert_eq!(s.current(), Some(1));
    assert_eq!(s.previous(), Some(0));
}

#[tokio::test]
async fn search_matches_names_and_tags_without_touching_order() {
    let dir = folder(&[
        ("01 intro.mp3", "Opening|Quartet"),
        ("02 song.mp3", "Blue Light|Duo"),
        ("03 outro.mp3", "Closing|Quartet"),
    ]);
    let mut s = session();
    s.load(select(dir.path()));
    s.enrichment().await;

    assert_eq!(s.search("quartet"), vec![0, 2]);
    assert_eq!(s.search("  BLUE "), vec![1]);
    assert_eq!(s.search("outro"), vec![2]);
    assert_eq!(s.search(""), vec![0, 1, 2]);
    assert!(s.search("zzz").is_empty());
    assert_eq!(s.order(), &[0, 1, 2]);
}
