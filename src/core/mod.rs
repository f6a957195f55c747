pub mod features;
pub mod labels;
mod role;
mod score;

pub use labels::{Label, LabelSource};
pub use role::NodeRole;
pub use score::ScoreRecord;
