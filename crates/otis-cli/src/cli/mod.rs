//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "otis",
    bin_name = "otis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Keep a numbered manuscript in order",
    long_about = "otis manages a manuscript stored as numbered Markdown scenes \
                  and folders, inserting and moving entries while keeping \
                  every sibling group contiguously numbered.",
    after_help = "EXAMPLES:\n\
        \x20 otis touch manuscript/01-act-two \"The Long Night\" --at 1\n\
        \x20 otis mkdir manuscript \"Act Three\"\n\
        \x20 otis mv manuscript/01-act-two/03-dawn.md --at 0\n\
        \x20 otis wordcount",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new scene.
    #[command(
        about = "Create a new numbered scene",
        after_help = "EXAMPLES:\n\
            \x20 otis touch manuscript/01-act-two \"The Long Night\"\n\
            \x20 otis touch manuscript/01-act-two \"Interlude\" --at 0 --force"
    )]
    Touch(CreateArgs),

    /// Create a new folder.
    #[command(
        about = "Create a new numbered folder",
        after_help = "EXAMPLES:\n\
            \x20 otis mkdir manuscript \"Act Three\"\n\
            \x20 otis mkdir manuscript \"Act One and a Half\" --at 1"
    )]
    Mkdir(CreateArgs),

    /// Move a scene or folder.
    #[command(
        about = "Reorder a scene or folder, optionally into another folder",
        after_help = "EXAMPLES:\n\
            \x20 otis mv manuscript/01-act-two/03-dawn.md --at 0\n\
            \x20 otis mv manuscript/01-act-two/03-dawn.md manuscript/02-act-three\n\
            \x20 otis mv manuscript/01-act-two manuscript --at 0 --dry-run"
    )]
    Mv(MoveArgs),

    /// Count words.
    #[command(
        visible_alias = "wc",
        about = "Show word counts per folder, scene and work",
        after_help = "EXAMPLES:\n\
            \x20 otis wordcount\n\
            \x20 otis wordcount manuscript/01-act-two\n\
            \x20 otis wordcount --output-format json"
    )]
    Wordcount(WordcountArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 otis completions bash > ~/.local/share/bash-completion/completions/otis\n\
            \x20 otis completions zsh  > ~/.zfunc/_otis\n\
            \x20 otis completions fish > ~/.config/fish/completions/otis.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the otis configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 otis config get changes.confirm\n\
            \x20 otis config list\n\
            \x20 otis config path"
    )]
    Config(ConfigCommands),
}

// ── shared change flags ───────────────────────────────────────────────────────

/// Flags shared by every command that changes the manuscript.
#[derive(Debug, Args)]
pub struct ChangeArgs {
    /// Skip the confirmation prompt for multi-step changes.
    #[arg(short = 'f', long = "force", help = "Apply without confirmation")]
    pub force: bool,

    /// Print the planned changes without applying them.
    #[arg(long = "dry-run", help = "Show the planned changes only")]
    pub dry_run: bool,
}

// ── touch / mkdir ─────────────────────────────────────────────────────────────

/// Arguments for `otis touch` and `otis mkdir`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Folder to create the new entry in.
    #[arg(value_name = "FOLDER", help = "Containing folder")]
    pub folder: PathBuf,

    /// Title; kebab-cased into the file name.
    #[arg(value_name = "TITLE", help = "Title of the new entry")]
    pub title: String,

    /// Position among its siblings (default: after the last one).
    #[arg(long = "at", value_name = "N", help = "Insert at this index")]
    pub at: Option<u32>,

    #[command(flatten)]
    pub change: ChangeArgs,
}

// ── mv ────────────────────────────────────────────────────────────────────────

/// Arguments for `otis mv`.
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Scene or folder to move.
    #[arg(value_name = "PATH", help = "Scene or folder to move")]
    pub path: PathBuf,

    /// Destination folder (default: stay in the current folder).
    #[arg(value_name = "TARGET", help = "Destination folder")]
    pub target: Option<PathBuf>,

    /// New position (default: after the last sibling in the destination).
    #[arg(long = "at", value_name = "N", help = "Move to this index")]
    pub at: Option<u32>,

    #[command(flatten)]
    pub change: ChangeArgs,
}

// ── wordcount ─────────────────────────────────────────────────────────────────

/// Arguments for `otis wordcount`.
#[derive(Debug, Args)]
pub struct WordcountArgs {
    /// Restrict the report to one folder.
    #[arg(value_name = "PATH", help = "Folder to count (default: whole manuscript)")]
    pub path: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `otis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `otis config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `changes.confirm`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_touch_with_index() {
        let cli = Cli::parse_from(["otis", "touch", "ms/01-act", "The Long Night", "--at", "2"]);
        match cli.command {
            Commands::Touch(args) => {
                assert_eq!(args.folder, PathBuf::from("ms/01-act"));
                assert_eq!(args.title, "The Long Night");
                assert_eq!(args.at, Some(2));
                assert!(!args.change.force);
            }
            other => panic!("expected touch, got {other:?}"),
        }
    }

    #[test]
    fn parse_mv_without_target() {
        let cli = Cli::parse_from(["otis", "mv", "ms/02-c.md", "--at", "0", "-f"]);
        match cli.command {
            Commands::Mv(args) => {
                assert!(args.target.is_none());
                assert_eq!(args.at, Some(0));
                assert!(args.change.force);
            }
            other => panic!("expected mv, got {other:?}"),
        }
    }

    #[test]
    fn wordcount_alias() {
        let cli = Cli::parse_from(["otis", "wc"]);
        assert!(matches!(cli.command, Commands::Wordcount(_)));
    }

    #[test]
    fn negative_index_is_rejected() {
        assert!(Cli::try_parse_from(["otis", "touch", "ms", "x", "--at", "-1"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["otis", "--quiet", "--verbose", "wordcount"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_manuscript_flag_after_subcommand() {
        let cli = Cli::parse_from(["otis", "wordcount", "--manuscript", "/tmp/ms"]);
        assert_eq!(cli.global.manuscript, Some(PathBuf::from("/tmp/ms")));
    }
}
