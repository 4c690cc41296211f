use std::fs;

use color_eyre::{eyre::WrapErr, Report};
use text_rope::Rope;
use tracing::info;

use super::{Args, Command};

pub fn load_source(args: &Args) -> Result<String, Report> {
    match (&args.file, &args.text) {
        (Some(path), _) => {
            let text = fs::read_to_string(path).wrap_err_with(|| format!("Error reading file '{}'", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "loaded source file");
            Ok(text)
        }
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => Ok(String::new()),
    }
}

/// Runs one command against `rope` and renders what it produced.
pub fn execute(rope: &Rope, command: &Command) -> Result<String, Report> {
    let output = match command {
        Command::Show => rope.collect(),
        Command::CharAt { index } => rope.char_at(*index)?.to_string(),
        Command::Substring { start, end } => rope.substring(*start, *end)?,
        Command::Insert { index, text } => rope.insert_at(*index, text)?.collect(),
        Command::Delete { start, end } => rope.delete_range(*start, *end)?.collect(),
        Command::Split { index } => {
            let (left, right) = rope.split(*index)?;
            format!("{}\n{}", left, right)
        }
        Command::Stats => format!(
            "length: {}\nheight: {}\nleaves: {}\nbalanced: {}",
            rope.len(),
            rope.height(),
            rope.leaf_count(),
            rope.is_balanced()
        ),
    };

    Ok(output)
}
