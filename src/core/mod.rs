pub mod draw;
pub mod pairing;
pub mod shuffle;

pub use crate::domain::model::{Assignment, Pair, Roster};
pub use crate::domain::ports::{ConfigProvider, Presenter, RandomSource};
pub use crate::utils::error::Result;
