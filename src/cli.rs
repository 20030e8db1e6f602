//! Command-line argument parsing
//!
//! Supports:
//! - Highlighting a pattern across every cell of a notebook script
//! - Finding the first definition of a name

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::FindReplaceState;

/// Search highlighting and navigation for cell notebooks
#[derive(Parser, Debug)]
#[command(name = "cellfind", version, about = "Search and navigate notebook cells")]
pub struct CliArgs {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every cell's visible lines with matches marked
    Highlight(HighlightArgs),
    /// Print the position of the first definition of a name
    Goto(GotoArgs),
}

#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// Notebook script to read
    #[arg(value_name = "NOTEBOOK")]
    pub notebook: PathBuf,

    /// Text or regular expression to search for
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Match case exactly
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Treat PATTERN as a regular expression
    #[arg(short = 'r', long)]
    pub regex: bool,

    /// Only match whole words
    #[arg(short = 'w', long)]
    pub whole_word: bool,

    /// Do not interpret `\n`, `\t` and friends in PATTERN
    #[arg(long)]
    pub literal: bool,

    /// First visible line of every cell (1-indexed)
    #[arg(long, value_name = "LINE")]
    pub top: Option<usize>,

    /// Number of visible lines per cell
    #[arg(long, value_name = "N")]
    pub lines: Option<usize>,

    /// Select the first match of every cell
    #[arg(long)]
    pub select_first: bool,
}

#[derive(Args, Debug)]
pub struct GotoArgs {
    /// Notebook script to read
    #[arg(value_name = "NOTEBOOK")]
    pub notebook: PathBuf,

    /// Identifier to look for
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl HighlightArgs {
    /// Apply the command-line flags on top of the configured find defaults.
    /// Flags only ever switch options on.
    pub fn find_params(&self, defaults: &FindReplaceState) -> FindReplaceState {
        FindReplaceState {
            find_text: self.pattern.clone(),
            replace_text: defaults.replace_text.clone(),
            case_sensitive: defaults.case_sensitive || self.case_sensitive,
            regexp: defaults.regexp || self.regex,
            whole_word: defaults.whole_word || self.whole_word,
            literal: defaults.literal || self.literal,
        }
    }

    /// Convert `--top` from 1-indexed (user input) to 0-indexed
    pub fn top_line(&self) -> Option<usize> {
        self.top.map(|line| line.saturating_sub(1))
    }
}
