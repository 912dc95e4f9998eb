pub mod compare;
pub mod engine;
pub mod entry;

pub use crate::domain::model::{CommandOutcome, DistanceReport, SitePair};
pub use crate::domain::ports::{CommandRunner, Pipeline, Storage};
pub use crate::utils::error::Result;
