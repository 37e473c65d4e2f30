use crate::domain::model::{Assignment, Roster};
use crate::domain::ports::Presenter;
use crate::utils::error::DrawError;

/// Presenter for batch runs: state changes become log events and the draw
/// itself is written by a [`ResultSink`](crate::adapters::ResultSink).
#[derive(Debug, Default)]
pub struct TracingPresenter {
    alerts: usize,
}

impl TracingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> usize {
        self.alerts
    }
}

impl Presenter for TracingPresenter {
    fn roster_changed(&mut self, roster: &Roster) {
        tracing::debug!(participants = roster.len(), "Roster: {}", roster);
    }

    fn draw_published(&mut self, assignment: Option<&Assignment>) {
        match assignment {
            Some(assignment) => tracing::debug!(pairs = assignment.len(), "Draw published"),
            None => tracing::debug!("Draw cleared"),
        }
    }

    fn alert(&mut self, error: &DrawError) {
        self.alerts += 1;
        tracing::warn!("⚠️ {}", error.user_friendly_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_alerts() {
        let mut presenter = TracingPresenter::new();
        presenter.roster_changed(&Roster::new());
        presenter.alert(&DrawError::InvalidInput);
        presenter.alert(&DrawError::InsufficientParticipants {
            required: 3,
            actual: 0,
        });
        assert_eq!(presenter.alerts(), 2);
    }
}
