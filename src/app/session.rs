use chrono::Utc;
use std::io::{BufRead, Write};

use crate::adapters::export::{render_assignment, ResultSink};
use crate::core::draw::DrawOrchestrator;
use crate::domain::model::OutputFormat;
use crate::domain::ports::{Presenter, RandomSource};
use crate::utils::error::{DrawError, Result};

const HELP: &str = "\
Commands:
  add <name>    add a participant (bare text works too)
  draw          draw secret friends
  list          show the participants
  reset         clear participants and results
  save <path>   write the last draw to a file
  help          show this message
  quit          leave the session";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Draw,
    List,
    Reset,
    Save(String),
    Help,
    Quit,
}

impl Command {
    /// Keywords are matched ignoring case; anything else is a name to add.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_lowercase().as_str() {
            "add" => Command::Add(rest.to_string()),
            "draw" if rest.is_empty() => Command::Draw,
            "list" if rest.is_empty() => Command::List,
            "reset" if rest.is_empty() => Command::Reset,
            "save" if !rest.is_empty() => Command::Save(rest.to_string()),
            "help" | "?" if rest.is_empty() => Command::Help,
            "quit" | "exit" if rest.is_empty() => Command::Quit,
            _ => Command::Add(line.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub added: usize,
    pub rejected: usize,
    pub draws: usize,
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Rejected names and refused draws are reported through the presenter and
/// the session carries on; internal errors end the session.
pub fn run_session<P, S, R, W>(
    orchestrator: &mut DrawOrchestrator<P, S>,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<SessionSummary>
where
    P: Presenter,
    S: RandomSource,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();
    writeln!(output, "Secret friend draw. Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let outcome = match Command::parse(&line) {
            Command::Add(name) => orchestrator.add_participant(&name).map(|_| {
                summary.added += 1;
            }),
            Command::Draw => orchestrator.run_draw().map(|_| {
                summary.draws += 1;
            }),
            Command::List => {
                let roster = orchestrator.roster();
                if roster.is_empty() {
                    writeln!(output, "Participants: (none)")?;
                } else {
                    writeln!(output, "Participants: {}", roster)?;
                }
                Ok(())
            }
            Command::Reset => {
                orchestrator.reset();
                Ok(())
            }
            Command::Save(path) => save_last_draw(orchestrator, &path, format, output),
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                Ok(())
            }
            Command::Quit => break,
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                if matches!(e, DrawError::InvalidInput | DrawError::DuplicateName { .. }) {
                    summary.rejected += 1;
                }
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(?summary, "Session finished");
    Ok(summary)
}

fn save_last_draw<P, S, W>(
    orchestrator: &DrawOrchestrator<P, S>,
    path: &str,
    format: OutputFormat,
    output: &mut W,
) -> Result<()>
where
    P: Presenter,
    S: RandomSource,
    W: Write,
{
    let Some(assignment) = orchestrator.last_draw() else {
        writeln!(output, "Nothing to save yet; run 'draw' first.")?;
        return Ok(());
    };

    let rendered = render_assignment(assignment, format, Utc::now())?;
    match ResultSink::File(path.into()).write(&rendered) {
        Ok(()) => writeln!(output, "Saved to {}", path)?,
        Err(e) => {
            tracing::warn!("Failed to save draw: {}", e);
            writeln!(output, "⚠️  {}", e.user_friendly_message())?;
        }
    }
    Ok(())
}
