//! Loading and reading the manuscript model.

use std::path::{Path, PathBuf};

use otis_adapters::MemoryFilesystem;
use otis_core::{
    domain::{DomainError, Manuscript},
    error::OtisError,
};

const ROOT: &str = "/novel/manuscript";

fn ms(rel: &str) -> PathBuf {
    Path::new(ROOT).join(rel)
}

fn flat_work() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.add_file(ms("work.yml"), "title: Flat Example\nauthor: Jane Q Writer\n")
        .add_file(ms("00-a.md"), "one two three")
        .add_file(ms("01-b.md"), "four five")
        .add_file(ms(".DS_Store"), "junk");
    fs
}

fn chaptered_work() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.add_file(ms("work.yml"), "title: The Long Book\nrunningTitle: Long\nauthor: A. Author\nauthorSurname: Author\n")
        .add_file(ms("00-prologue/chapter.yml"), "title: Prologue\nnumbered: false\n")
        .add_file(ms("00-prologue/00-a.md"), "a")
        .add_file(ms("01-one/chapter.yml"), "title: One\n")
        .add_file(ms("01-one/00-b.md"), "b")
        .add_file(ms("01-one/01-part/00-c.md"), "c")
        .add_file(ms("02-interlude/00-d.md"), "d")
        .add_file(ms("03-two/chapter.yml"), "title: Two\n")
        .add_file(ms("03-two/00-e.md"), "e");
    fs
}

fn load_err(fs: &MemoryFilesystem) -> DomainError {
    match Manuscript::load(fs, Path::new(ROOT)) {
        Err(OtisError::Domain(err)) => err,
        other => panic!("expected a domain error, got {other:?}"),
    }
}

fn names(scenes: &[otis_core::domain::Scene<'_>]) -> Vec<String> {
    scenes
        .iter()
        .map(|s| s.path().file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn flat_work_loads_with_fallback_metadata() {
    let fs = flat_work();
    let manuscript = Manuscript::load(&fs, Path::new(ROOT)).unwrap();

    let works = manuscript.works();
    assert_eq!(works.len(), 1);
    let work = works[0];
    assert_eq!(work.title(), "Flat Example");
    assert_eq!(work.running_title(), "Flat Example");
    assert_eq!(work.author_surname(), "Writer");
    assert!(work.chapters().is_empty());
    assert_eq!(names(&work.scenes()), ["00-a.md", "01-b.md"]);
}

#[test]
fn scene_text_and_word_counts() {
    let fs = flat_work();
    let manuscript = Manuscript::load(&fs, Path::new(ROOT)).unwrap();
    let work = manuscript.works()[0];

    let scene = manuscript.resolve_scene(&ms("00-a.md")).unwrap();
    assert_eq!(scene.text().unwrap(), "one two three");
    assert_eq!(scene.number(), 0);
    assert_eq!(scene.pretty_file_name(), "A");
    assert_eq!(work.word_count().unwrap(), 5);
    assert_eq!(work.approximate_word_count().unwrap(), 0);
    assert_eq!(manuscript.word_count().unwrap(), 5);
}

#[test]
fn multiple_works_under_the_root() {
    let fs = MemoryFilesystem::new();
    fs.add_file(ms("book-one/work.yml"), "title: One\n")
        .add_file(ms("book-one/00-a.md"), "")
        .add_file(ms("book-two/work.yml"), "title: Two\n")
        .add_file(ms("book-two/00-a.md"), "");

    let manuscript = Manuscript::load(&fs, Path::new(ROOT)).unwrap();
    let titles: Vec<_> = manuscript.works().iter().map(|w| w.title()).collect();
    assert_eq!(titles, ["One", "Two"]);
    assert_eq!(manuscript.works()[1].number(), None);
}

#[test]
fn chapters_number_only_numbered_waypoints() {
    let fs = chaptered_work();
    let manuscript = Manuscript::load(&fs, Path::new(ROOT)).unwrap();
    let work = manuscript.works()[0];
    assert_eq!(work.running_title(), "Long");

    let chapters = work.chapters();
    let summary: Vec<_> = chapters.iter().map(|c| (c.title(), c.number())).collect();
    assert_eq!(
        summary,
        [("Prologue", None), ("One", Some(1)), ("Two", Some(2))]
    );
}

#[test]
fn chapter_scenes_span_folders_until_the_next_waypoint() {
    let fs = chaptered_work();
    let manuscript = Manuscript::load(&fs, Path::new(ROOT)).unwrap();
    let chapters = manuscript.works()[0].chapters();

    assert_eq!(names(&chapters[0].scenes()), ["00-a.md"]);
    assert_eq!(names(&chapters[1].scenes()), ["00-b.md", "00-c.md", "00-d.md"]);
    assert_eq!(names(&chapters[2].scenes()), ["00-e.md"]);
    assert_eq!(chapters[1].word_count().unwrap(), 3);
}

#[test]
fn folders_expose_direct_and_recursive_scenes() {
    let fs = chaptered_work();
    let manuscript = Manuscript::load(&fs, Path::new(ROOT)).unwrap();

    let one = manuscript.resolve_folder(&ms("01-one")).unwrap();
    assert_eq!(one.number(), Some(1));
    assert_eq!(one.pretty_file_name(), "One");
    assert_eq!(names(&one.scenes()), ["00-b.md"]);
    assert_eq!(names(&one.all_scenes()), ["00-b.md", "00-c.md"]);
    assert_eq!(one.folders().len(), 1);
}

#[test]
fn resolution_requires_an_exact_match() {
    let fs = chaptered_work();
    let manuscript = Manuscript::load(&fs, Path::new(ROOT)).unwrap();

    assert!(manuscript.resolve_folder(Path::new(ROOT)).is_ok());
    assert!(matches!(
        manuscript.resolve_folder(&ms("01-one/00-b.md")),
        Err(OtisError::Domain(DomainError::FolderPathNotFound { .. }))
    ));
    assert!(matches!(
        manuscript.resolve_scene(&ms("01-one")),
        Err(OtisError::Domain(DomainError::ScenePathNotFound { .. }))
    ));
}

#[test]
fn unnumbered_scene_is_rejected() {
    let fs = flat_work();
    fs.add_file(ms("notes.md"), "");
    assert!(matches!(load_err(&fs), DomainError::MissingFileNumber { .. }));
}

#[test]
fn unnumbered_plain_folder_is_rejected() {
    let fs = flat_work();
    fs.add_dir(ms("drafts"));
    assert!(matches!(load_err(&fs), DomainError::MissingFileNumber { .. }));
}

#[test]
fn stray_file_is_rejected() {
    let fs = flat_work();
    fs.add_file(ms("cover.png"), "");
    match load_err(&fs) {
        DomainError::UnexpectedFile { path } => assert_eq!(path, ms("cover.png")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn dot_entries_are_ignored() {
    let fs = flat_work();
    fs.add_file(ms(".git/config"), "").add_file(ms(".notes.txt"), "");
    assert!(Manuscript::load(&fs, Path::new(ROOT)).is_ok());
}

#[test]
fn scene_before_the_only_chapter_is_rejected() {
    let fs = MemoryFilesystem::new();
    fs.add_file(ms("work.yml"), "title: W\n")
        .add_file(ms("00-stray.md"), "")
        .add_file(ms("01-chapter/chapter.yml"), "title: Only\n")
        .add_file(ms("01-chapter/00-a.md"), "");
    assert!(matches!(
        load_err(&fs),
        DomainError::ScenesBeforeFirstChapter { .. }
    ));
}

#[test]
fn missing_root_and_missing_works() {
    let fs = MemoryFilesystem::new();
    assert!(matches!(load_err(&fs), DomainError::MissingManuscript { .. }));

    fs.add_file(ms("00-a.md"), "");
    assert!(matches!(load_err(&fs), DomainError::NoWorks { .. }));
}

#[test]
fn malformed_sidecar_is_rejected() {
    let fs = flat_work();
    fs.add_file(ms("00-act/chapter.yml"), "title: [oops");
    assert!(matches!(load_err(&fs), DomainError::InvalidMetadata { .. }));
}
