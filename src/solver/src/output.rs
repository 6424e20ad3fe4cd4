use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::OutputFormat;
use crate::game::FoundWord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializablePosition {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableAnswer {
    pub word: String,
    pub score: u32,
    pub path: Vec<SerializablePosition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableResults {
    pub words: Vec<SerializableAnswer>,
    pub count: usize,
}

impl From<&FoundWord> for SerializableAnswer {
    fn from(found: &FoundWord) -> Self {
        Self {
            word: found.word.clone(),
            score: found.score,
            path: found
                .path
                .iter()
                .map(|cell| SerializablePosition {
                    row: cell.y,
                    col: cell.x,
                })
                .collect(),
        }
    }
}

/// One line per word in ranked order, then a line with the total.
pub fn render_text(words: &[FoundWord], show_scores: bool) -> String {
    let mut out = String::new();
    for found in words {
        if show_scores {
            let _ = writeln!(out, "Found: {} score of {}", found.word, found.score);
        } else {
            let _ = writeln!(out, "{}", found.word);
        }
    }
    let _ = writeln!(out, "Found: {}", words.len());
    out
}

pub fn render_json(words: &[FoundWord]) -> Result<String, serde_json::Error> {
    let results = SerializableResults {
        words: words.iter().map(SerializableAnswer::from).collect(),
        count: words.len(),
    };
    serde_json::to_string_pretty(&results)
}

pub fn write_results<W: Write>(
    out: &mut W,
    words: &[FoundWord],
    format: OutputFormat,
    show_scores: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render_text(words, show_scores).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_json(words)?)?,
    }
    out.flush()?;
    Ok(())
}
