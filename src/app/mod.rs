// Application layer: front ends that drive the draw orchestrator.

pub mod session;

pub use session::{run_session, Command, SessionSummary};
