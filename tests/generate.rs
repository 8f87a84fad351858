use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xspf_exporter::probe::StubProbe;
use xspf_exporter::{GeneratorConfig, PlaylistGenerator, RootOutcome};

/// Create an empty fixture file, parents included
fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture folders");
    }
    fs::write(path, b"fixture").expect("Failed to create fixture file");
}

/// A root with media at three levels plus some noise to ignore
fn create_show_root(base: &Path) -> PathBuf {
    let root = base.join("My Shows");
    touch(&root.join("intro.mp4"));
    touch(&root.join("season 1/ep1.mp4"));
    touch(&root.join("season 1/ep2.mp4"));
    touch(&root.join("season 1/extras/gag reel.mkv"));
    touch(&root.join("season 1/notes.txt"));
    touch(&root.join("artwork/poster.jpg"));
    root
}

fn generate(root: &Path, config: GeneratorConfig, probe: StubProbe) -> Vec<xspf_exporter::RootReport> {
    let generator = PlaylistGenerator::new(config, probe);
    generator
        .generate(&[root.to_path_buf()])
        .expect("Failed to run the generator")
}

fn read_playlist(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join(name)).expect("Playlist file missing")
}

#[test]
fn test_generates_playlist_with_nested_groups() {
    let temp = TempDir::new().unwrap();
    let root = create_show_root(temp.path());

    let probe = StubProbe::fixed(60_000);
    let reports = generate(&root, GeneratorConfig::new(), probe);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].outcome, RootOutcome::Success);
    assert_eq!(reports[0].tracks, 4);

    let xml = read_playlist(&root, "My Shows.xspf");
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<playlist xmlns=\"http://xspf.org/ns/0/\""));
    assert!(xml.contains("xmlns:vlc=\"http://www.videolan.org/vlc/playlist/ns/0/\""));
    assert!(xml.contains("<title>My Shows</title>"));
    assert!(xml.contains("<vlc:node title=\"season 1\">"));
    assert!(xml.contains("<vlc:node title=\"extras\">"));

    // 4 tracks of one minute each
    assert!(xml.contains("<annotation>4 tracks, total duration 0:04:00</annotation>"));
    assert_eq!(xml.matches("<track>").count(), 4);
    assert_eq!(xml.matches("<vlc:item tid=").count(), 4);

    // The folder block nests extras inside season 1
    let season_pos = xml.find("<vlc:node title=\"season 1\">").unwrap();
    let extras_pos = xml.find("<vlc:node title=\"extras\">").unwrap();
    assert!(season_pos < extras_pos);

    // The noise never made it in
    assert!(!xml.contains("notes.txt"));
    assert!(!xml.contains("poster.jpg"));
    assert!(!xml.contains("artwork"));
}

#[test]
fn test_track_list_order_and_ids() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("episodes");
    touch(&root.join("ep1.mp4"));
    touch(&root.join("ep2.mp4"));
    touch(&root.join("ep10.mp4"));

    let reports = generate(&root, GeneratorConfig::new(), StubProbe::fixed(1000));
    assert_eq!(reports[0].outcome, RootOutcome::Success);

    let xml = read_playlist(&root, "episodes.xspf");

    // Natural order: ep2 comes before ep10
    let p1 = xml.find("ep1.mp4").unwrap();
    let p2 = xml.find("ep2.mp4").unwrap();
    let p10 = xml.find("ep10.mp4").unwrap();
    assert!(p1 < p2);
    assert!(p2 < p10);

    // trackNum counts from 1, vlc:id from 0
    assert!(xml.contains("<trackNum>1</trackNum>"));
    assert!(xml.contains("<trackNum>3</trackNum>"));
    assert!(xml.contains("<vlc:id>0</vlc:id>"));
    assert!(xml.contains("<vlc:id>2</vlc:id>"));
    assert!(!xml.contains("<trackNum>0</trackNum>"));
}

#[test]
fn test_output_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = create_show_root(temp.path());

    let first = generate(&root, GeneratorConfig::new(), StubProbe::fixed(2000));
    assert_eq!(first[0].outcome, RootOutcome::Success);
    let first_bytes = fs::read(root.join("My Shows.xspf")).unwrap();

    let second = generate(&root, GeneratorConfig::new(), StubProbe::fixed(2000));
    assert_eq!(second[0].outcome, RootOutcome::Success);
    let second_bytes = fs::read(root.join("My Shows.xspf")).unwrap();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_failed_probe_degrades_to_zero_duration() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("mixed");
    touch(&root.join("good.mp4"));
    touch(&root.join("corrupt.avi"));

    let probe = StubProbe::fixed(90_000).failing_on("corrupt.avi");
    let reports = generate(&root, GeneratorConfig::new(), probe);

    // The playlist is still written, with a warning attached
    assert_eq!(reports[0].outcome, RootOutcome::Partial);
    assert_eq!(reports[0].tracks, 2);
    assert_eq!(reports[0].diagnostics.len(), 1);

    let xml = read_playlist(&root, "mixed.xspf");
    assert!(xml.contains("<title>corrupt</title>"));
    assert!(xml.contains("<duration>0</duration>"));
    assert!(xml.contains("<duration>90000</duration>"));
    assert!(xml.contains("<annotation>2 tracks, total duration 0:01:30</annotation>"));
}

#[test]
fn test_invalid_root_fails_without_touching_others() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("good");
    touch(&good.join("a.mp4"));
    let missing = temp.path().join("does-not-exist");

    let generator = PlaylistGenerator::new(GeneratorConfig::new(), StubProbe::fixed(1000));
    let reports = generator
        .generate(&[good.clone(), missing.clone()])
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].outcome, RootOutcome::Success);
    assert_eq!(reports[0].root, good);
    assert!(good.join("good.xspf").exists());

    assert_eq!(reports[1].outcome, RootOutcome::Failed);
    assert_eq!(reports[1].root, missing);
    assert!(reports[1].playlist.is_none());
}

#[test]
fn test_each_root_gets_its_own_playlist() {
    let temp = TempDir::new().unwrap();
    let movies = temp.path().join("movies");
    let concerts = temp.path().join("concerts");
    touch(&movies.join("film.mp4"));
    touch(&concerts.join("live.mkv"));

    let generator = PlaylistGenerator::new(GeneratorConfig::new(), StubProbe::fixed(1000));
    let reports = generator
        .generate(&[movies.clone(), concerts.clone()])
        .unwrap();

    assert!(reports.iter().all(|r| r.outcome == RootOutcome::Success));
    let movies_xml = read_playlist(&movies, "movies.xspf");
    let concerts_xml = read_playlist(&concerts, "concerts.xspf");

    assert!(movies_xml.contains("film.mp4"));
    assert!(!movies_xml.contains("live.mkv"));
    assert!(concerts_xml.contains("live.mkv"));
    assert!(!concerts_xml.contains("film.mp4"));
}

#[test]
fn test_empty_folders_are_pruned() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("library");
    touch(&root.join("keep/film.mp4"));
    touch(&root.join("drop/readme.txt"));
    fs::create_dir_all(root.join("hollow/deeper")).unwrap();

    let reports = generate(&root, GeneratorConfig::new(), StubProbe::fixed(1000));
    assert_eq!(reports[0].outcome, RootOutcome::Success);
    assert_eq!(reports[0].folders, 2);

    let xml = read_playlist(&root, "library.xspf");
    assert!(xml.contains("<vlc:node title=\"keep\">"));
    assert!(!xml.contains("drop"));
    assert!(!xml.contains("hollow"));
}

#[test]
fn test_empty_root_still_writes_playlist() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("nothing here");
    fs::create_dir_all(&root).unwrap();

    let reports = generate(&root, GeneratorConfig::new(), StubProbe::fixed(1000));
    assert_eq!(reports[0].outcome, RootOutcome::Success);
    assert_eq!(reports[0].tracks, 0);

    let xml = read_playlist(&root, "nothing here.xspf");
    assert!(xml.contains("<title>nothing here</title>"));
    assert!(xml.contains("<annotation>0 tracks, total duration 0:00:00</annotation>"));
    assert!(!xml.contains("<track>"));
}

#[test]
fn test_skip_existing_leaves_playlist_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("stable");
    touch(&root.join("a.mp4"));
    fs::write(root.join("stable.xspf"), b"sentinel bytes").unwrap();

    let config = GeneratorConfig::new().with_skip_existing(true);
    let reports = generate(&root, config, StubProbe::fixed(1000));

    assert_eq!(reports[0].outcome, RootOutcome::Skipped);
    assert_eq!(read_playlist(&root, "stable.xspf"), "sentinel bytes");
}

#[test]
fn test_existing_playlist_is_overwritten_by_default() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("stable");
    touch(&root.join("a.mp4"));
    fs::write(root.join("stable.xspf"), b"sentinel bytes").unwrap();

    let reports = generate(&root, GeneratorConfig::new(), StubProbe::fixed(1000));

    assert_eq!(reports[0].outcome, RootOutcome::Success);
    let xml = read_playlist(&root, "stable.xspf");
    assert!(xml.contains("<?xml"));
    assert!(!xml.contains("sentinel"));
}

#[test]
fn test_output_name_override() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("anything");
    touch(&root.join("a.mp4"));

    let config = GeneratorConfig::new().with_output_name("watch-next");
    let reports = generate(&root, config, StubProbe::fixed(1000));

    assert_eq!(
        reports[0].playlist.as_deref(),
        Some(root.join("watch-next.xspf").as_path())
    );
    assert!(root.join("watch-next.xspf").exists());
    assert!(!root.join("anything.xspf").exists());

    // The playlist title still comes from the folder
    let xml = read_playlist(&root, "watch-next.xspf");
    assert!(xml.contains("<title>anything</title>"));
}

#[test]
fn test_container_titles_and_durations_flow_through() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("tagged");
    touch(&root.join("ep1.mp4"));
    touch(&root.join("ep2.mp4"));

    let probe = StubProbe::fixed(30_000)
        .with_duration("ep1.mp4", 95_500)
        .with_title("ep1.mp4", "The Pilot");
    let reports = generate(&root, GeneratorConfig::new(), probe);
    assert_eq!(reports[0].total_duration_ms, 125_500);

    let xml = read_playlist(&root, "tagged.xspf");
    assert!(xml.contains("<title>The Pilot</title>"));
    assert!(xml.contains("<duration>95500</duration>"));
    assert!(xml.contains("<title>ep2</title>"));
}

#[test]
fn test_spaces_in_paths_are_percent_encoded() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("home videos");
    touch(&root.join("summer trip/day 1.mp4"));

    let reports = generate(&root, GeneratorConfig::new(), StubProbe::fixed(1000));
    assert_eq!(reports[0].outcome, RootOutcome::Success);

    let xml = read_playlist(&root, "home videos.xspf");
    assert!(xml.contains("summer%20trip/day%201.mp4</location>"));
    assert!(!xml.contains("summer trip/day 1.mp4</location>"));
}

#[test]
fn test_json_report_shape() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("jsonable");
    touch(&root.join("a.mp4"));

    let reports = generate(&root, GeneratorConfig::new(), StubProbe::fixed(1000));
    let json = serde_json::to_value(&reports).unwrap();

    assert_eq!(json[0]["outcome"], "success");
    assert_eq!(json[0]["tracks"], 1);
    assert_eq!(json[0]["total_duration_ms"], 1000);
    assert!(json[0]["playlist"].as_str().unwrap().ends_with("jsonable.xspf"));
}
