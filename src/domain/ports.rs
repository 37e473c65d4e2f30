use crate::domain::model::{Assignment, OutputFormat, Roster};
use crate::utils::error::DrawError;
use rand::Rng;

/// Presentation collaborator. The orchestrator calls it after every state
/// change; implementations only render.
pub trait Presenter {
    fn roster_changed(&mut self, roster: &Roster);

    /// `None` means the published draw was cleared.
    fn draw_published(&mut self, assignment: Option<&Assignment>);

    /// Called for recoverable, user-facing errors only.
    fn alert(&mut self, error: &DrawError);
}

/// Headless presenter.
impl Presenter for () {
    fn roster_changed(&mut self, _roster: &Roster) {}

    fn draw_published(&mut self, _assignment: Option<&Assignment>) {}

    fn alert(&mut self, _error: &DrawError) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn roster_changed(&mut self, roster: &Roster) {
        (**self).roster_changed(roster)
    }

    fn draw_published(&mut self, assignment: Option<&Assignment>) {
        (**self).draw_published(assignment)
    }

    fn alert(&mut self, error: &DrawError) {
        (**self).alert(error)
    }
}

/// Source of uniform indices for the shuffle.
pub trait RandomSource {
    /// Uniform integer in `0..=upper`.
    fn pick_inclusive(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_inclusive(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// One configuration layer. `None` / empty means "not set here".
pub trait ConfigProvider {
    fn min_participants(&self) -> Option<usize>;
    fn seed(&self) -> Option<u64>;
    fn participants(&self) -> Vec<String>;
    fn output_format(&self) -> Option<OutputFormat>;
    fn output_path(&self) -> Option<&str>;
    fn json_logs(&self) -> Option<bool>;
}
