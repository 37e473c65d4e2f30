use std::io::{self, Stderr, Stdout, Write};

use crate::domain::model::{Assignment, Roster};
use crate::domain::ports::Presenter;
use crate::utils::error::DrawError;

/// Renders roster and draw updates as text; alerts go to a separate writer.
pub struct TerminalPresenter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl TerminalPresenter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TerminalPresenter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn get_ref(&self) -> (&W, &E) {
        (&self.out, &self.err)
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_roster(&mut self, roster: &Roster) -> io::Result<()> {
        if roster.is_empty() {
            writeln!(self.out, "Participants: (none)")
        } else {
            writeln!(self.out, "Participants: {}", roster)
        }
    }

    fn write_draw(&mut self, assignment: Option<&Assignment>) -> io::Result<()> {
        match assignment {
            Some(assignment) => {
                writeln!(self.out, "Draw result:")?;
                for pair in assignment {
                    writeln!(self.out, "{}", pair)?;
                }
                Ok(())
            }
            None => writeln!(self.out, "Draw result cleared."),
        }
    }
}

impl<W: Write, E: Write> Presenter for TerminalPresenter<W, E> {
    fn roster_changed(&mut self, roster: &Roster) {
        if let Err(e) = self.write_roster(roster) {
            tracing::warn!("Failed to render roster: {}", e);
        }
    }

    fn draw_published(&mut self, assignment: Option<&Assignment>) {
        if let Err(e) = self.write_draw(assignment) {
            tracing::warn!("Failed to render draw result: {}", e);
        }
    }

    fn alert(&mut self, error: &DrawError) {
        if let Err(e) = writeln!(self.err, "⚠️  {}", error.user_friendly_message()) {
            tracing::warn!("Failed to render alert: {}", e);
        }
    }
}
