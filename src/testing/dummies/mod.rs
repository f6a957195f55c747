mod scenario;

pub use scenario::{scenario_features, scenario_labels};
