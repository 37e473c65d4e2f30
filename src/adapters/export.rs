use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::model::{Assignment, OutputFormat, Pair};
use crate::utils::error::Result;

#[derive(Debug, Serialize)]
struct DrawExport<'a> {
    drawn_at: DateTime<Utc>,
    participants: usize,
    pairs: &'a [Pair],
}

/// Formats a draw for output. Text yields one `giver -> recipient` line per
/// pair, CSV has a `giver,recipient` header, JSON wraps the pairs with the
/// draw time.
pub fn render_assignment(
    assignment: &Assignment,
    format: OutputFormat,
    drawn_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut text = assignment.to_string();
            text.push('\n');
            Ok(text)
        }
        OutputFormat::Json => {
            let export = DrawExport {
                drawn_at,
                participants: assignment.len(),
                pairs: assignment.pairs(),
            };
            let mut json = serde_json::to_string_pretty(&export)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for pair in assignment {
                writer.serialize(pair)?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}

/// Where a rendered draw ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSink {
    Stdout,
    File(PathBuf),
}

impl ResultSink {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => ResultSink::File(PathBuf::from(path)),
            None => ResultSink::Stdout,
        }
    }

    pub fn write(&self, contents: &str) -> Result<()> {
        match self {
            ResultSink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(contents.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
            ResultSink::File(path) => write_file(path, contents.as_bytes()),
        }
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, data)?;
    tracing::info!("📁 Draw result saved to: {}", path.display());
    Ok(())
}
