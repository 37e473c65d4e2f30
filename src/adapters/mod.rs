// Adapters layer: concrete presenters and result sinks for the terminal and file system.

pub mod export;
pub mod log;
pub mod terminal;

pub use export::{render_assignment, ResultSink};
pub use log::TracingPresenter;
pub use terminal::TerminalPresenter;
