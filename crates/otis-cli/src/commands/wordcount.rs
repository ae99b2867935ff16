//! `otis wordcount`: word counts per folder, scene and work.

use serde::Serialize;
use tracing::instrument;

use otis_core::{
    domain::{
        Folder, Manuscript,
        numbering::base_name,
        text::with_thousands_separator,
    },
    error::OtisResult,
};

use crate::{
    cli::{GlobalArgs, WordcountArgs},
    commands::Session,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const LABEL_WIDTH: usize = 40;
const INDENT: &str = "  ";

/// One line of the report: a folder (with children) or a scene.
#[derive(Debug, Serialize)]
struct CountNode {
    name: String,
    path: String,
    words: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<CountNode>,
    #[serde(skip)]
    is_folder: bool,
}

#[derive(Debug, Serialize)]
struct WorkTotal {
    title: String,
    author: String,
    path: String,
    words: u64,
    approximate: u64,
}

#[derive(Debug, Serialize)]
struct Report {
    tree: CountNode,
    works: Vec<WorkTotal>,
}

#[instrument(skip_all)]
pub fn execute(
    args: WordcountArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let session = Session::open(&global, &config)?;
    let manuscript = session.service().load(session.manuscript())?;

    let folder = match &args.path {
        Some(path) => manuscript.resolve_folder(&session.resolve(path)?)?,
        None => manuscript.resolve_folder(manuscript.path())?,
    };

    let report = build_report(&session, &manuscript, folder)?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    print_node(&report.tree, "", &output)?;
    if !report.works.is_empty() {
        output.print("")?;
    }
    for work in &report.works {
        output.print(&format!(
            "{}: {} words (about {})",
            work.title,
            with_thousands_separator(work.words),
            with_thousands_separator(work.approximate),
        ))?;
    }
    Ok(())
}

fn build_report(session: &Session, manuscript: &Manuscript<'_>, folder: Folder<'_>) -> OtisResult<Report> {
    let tree = count_folder(session, folder)?;

    let mut works = Vec::new();
    for work in manuscript.works() {
        if !work.path().starts_with(folder.path()) {
            continue;
        }
        works.push(WorkTotal {
            title: work.title().to_string(),
            author: work.author().to_string(),
            path: session.display(work.path()),
            words: work.word_count()?,
            approximate: work.approximate_word_count()?,
        });
    }

    Ok(Report { tree, works })
}

/// Sub-folders first, then scenes, each in directory listing order.
fn count_folder(session: &Session, folder: Folder<'_>) -> OtisResult<CountNode> {
    let mut children = Vec::new();
    for sub in folder.folders() {
        children.push(count_folder(session, sub)?);
    }
    for scene in folder.scenes() {
        children.push(CountNode {
            name: base_name(scene.path()),
            path: session.display(scene.path()),
            words: scene.word_count()?,
            children: Vec::new(),
            is_folder: false,
        });
    }

    Ok(CountNode {
        name: base_name(folder.path()),
        path: session.display(folder.path()),
        words: children.iter().map(|c| c.words).sum(),
        children,
        is_folder: true,
    })
}

fn print_node(node: &CountNode, indent: &str, output: &OutputManager) -> std::io::Result<()> {
    let line = format!(
        "{:<width$} : {:>7}",
        truncate(&format!("{indent}{}", node.name)),
        with_thousands_separator(node.words),
        width = LABEL_WIDTH,
    );
    if node.is_folder {
        output.header(&line)?;
    } else {
        output.print(&line)?;
    }

    let indent = format!("{indent}{INDENT}");
    for child in &node.children {
        print_node(child, &indent, output)?;
    }
    Ok(())
}

/// Cut `label` to the column width, marking the cut with an ellipsis.
fn truncate(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        return label.to_string();
    }
    let mut out: String = label.chars().take(LABEL_WIDTH - 1).collect();
    out.push('…');
    out
}
