use crate::core::pairing::assign_pairs;
use crate::core::shuffle::shuffle;
use crate::domain::model::{Assignment, Roster};
use crate::domain::ports::{Presenter, RandomSource};
use crate::utils::error::{DrawError, Result};
use crate::utils::validation::{is_duplicate, normalize_name};

/// Fewest participants a draw accepts.
pub const MIN_PARTICIPANTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    /// Not enough participants yet; draws are refused.
    Building,
    Ready,
}

/// Owns the roster and the last published draw, and drives the presenter.
pub struct DrawOrchestrator<P: Presenter, S: RandomSource> {
    roster: Roster,
    last_draw: Option<Assignment>,
    presenter: P,
    source: S,
    min_participants: usize,
}

impl<P: Presenter, S: RandomSource> DrawOrchestrator<P, S> {
    pub fn new(presenter: P, source: S) -> Self {
        Self::with_min_participants(presenter, source, MIN_PARTICIPANTS)
    }

    /// Values below [`MIN_PARTICIPANTS`] are raised to it.
    pub fn with_min_participants(presenter: P, source: S, min_participants: usize) -> Self {
        Self {
            roster: Roster::new(),
            last_draw: None,
            presenter,
            source,
            min_participants: min_participants.max(MIN_PARTICIPANTS),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn last_draw(&self) -> Option<&Assignment> {
        self.last_draw.as_ref()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn min_participants(&self) -> usize {
        self.min_participants
    }

    pub fn state(&self) -> DrawState {
        if self.roster.len() >= self.min_participants {
            DrawState::Ready
        } else {
            DrawState::Building
        }
    }

    /// Trims `raw_name` and appends it to the roster, returning the stored name.
    ///
    /// Blank names fail with [`DrawError::InvalidInput`] and case-insensitive
    /// repeats with [`DrawError::DuplicateName`]; either way the roster is
    /// untouched and the presenter is alerted.
    pub fn add_participant(&mut self, raw_name: &str) -> Result<&str> {
        let name = match self.admit(raw_name) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Participant rejected: {}", e);
                self.presenter.alert(&e);
                return Err(e);
            }
        };

        tracing::debug!(participant = %name, total = self.roster.len() + 1, "Participant added");
        self.roster.push(name);
        if self.roster.len() == self.min_participants {
            tracing::info!("Roster ready for a draw ({} participants)", self.min_participants);
        }
        self.presenter.roster_changed(&self.roster);

        let names = self.roster.names();
        Ok(names[names.len() - 1].as_str())
    }

    fn admit(&self, raw_name: &str) -> Result<String> {
        let name = normalize_name(raw_name)?;
        if is_duplicate(&name, self.roster.names()) {
            return Err(DrawError::DuplicateName { name });
        }
        Ok(name)
    }

    /// Adds every name in turn and returns the rejections.
    pub fn add_participants<I, N>(&mut self, names: I) -> Vec<DrawError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.add_participant(name.as_ref()).err())
            .collect()
    }

    /// Shuffles the roster, pairs it and publishes the result.
    ///
    /// Refuses with [`DrawError::InsufficientParticipants`] below the minimum,
    /// without touching the random source. Pairing failures are internal
    /// errors and are returned without alerting the presenter.
    pub fn run_draw(&mut self) -> Result<&Assignment> {
        if self.roster.len() < self.min_participants {
            let e = DrawError::InsufficientParticipants {
                required: self.min_participants,
                actual: self.roster.len(),
            };
            tracing::warn!("Draw refused: {}", e);
            self.presenter.alert(&e);
            return Err(e);
        }

        let shuffled = shuffle(self.roster.names(), &mut self.source);
        let assignment = match assign_pairs(self.roster.names(), &shuffled) {
            Ok(assignment) => assignment,
            Err(e) => {
                tracing::error!("Pairing failed: {}", e);
                return Err(e);
            }
        };

        tracing::info!("Draw completed for {} participants", assignment.len());
        tracing::trace!(pairs = ?assignment.lines(), "Draw result");

        let published: &Assignment = self.last_draw.insert(assignment);
        self.presenter.draw_published(Some(published));
        Ok(published)
    }

    /// Empties the roster and discards the published draw.
    pub fn reset(&mut self) {
        tracing::info!("Resetting draw ({} participants discarded)", self.roster.len());
        self.roster.clear();
        self.last_draw = None;
        self.presenter.roster_changed(&self.roster);
        self.presenter.draw_published(None);
    }
}
