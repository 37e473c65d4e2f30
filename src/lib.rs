pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, DrawSettings};

pub use adapters::{render_assignment, ResultSink, TerminalPresenter, TracingPresenter};
pub use core::{
    draw::{DrawOrchestrator, DrawState, MIN_PARTICIPANTS},
    pairing::assign_pairs,
    shuffle::shuffle,
};
pub use domain::model::{Assignment, OutputFormat, Pair, Roster};
pub use domain::ports::{ConfigProvider, Presenter, RandomSource};
pub use utils::error::{DrawError, ErrorSeverity, Result};
