use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use text_rope::config::DEFAULT_LEAF_MAX;

#[derive(Debug, Parser)]
#[command(name = "rope", version, about = "Build a rope from text and run one operation on it")]
#[command(group(ArgGroup::new("source").required(true).args(["file", "text"])))]
pub struct Args {
    /// Read the initial text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Use the given initial text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Maximum characters per leaf
    #[arg(long, env = "ROPE_LEAF_MAX", default_value_t = DEFAULT_LEAF_MAX)]
    pub leaf_max: usize,

    /// Never rebuild the tree automatically
    #[arg(long)]
    pub no_rebalance: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the whole text
    Show,
    /// Print the character at an index
    CharAt { index: usize },
    /// Print the characters in [start, end)
    Substring { start: usize, end: usize },
    /// Insert text at an index and print the result
    Insert { index: usize, text: String },
    /// Delete [start, end) and print the result
    Delete { start: usize, end: usize },
    /// Split at an index and print both halves
    Split { index: usize },
    /// Print length, height, leaf count and balance
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_text_source_and_subcommand() {
        let args = Args::try_parse_from(["rope", "--text", "abc", "--leaf-max", "8", "substring", "0", "2"]).unwrap();
        assert_eq!(args.text.as_deref(), Some("abc"));
        assert_eq!(args.leaf_max, 8);
        assert!(matches!(args.command, Command::Substring { start: 0, end: 2 }));
    }

    #[test]
    fn source_is_required_and_exclusive() {
        assert!(Args::try_parse_from(["rope", "show"]).is_err());
        assert!(Args::try_parse_from(["rope", "--text", "a", "--file", "a.txt", "show"]).is_err());
    }
}
