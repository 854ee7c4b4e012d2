//! Domain records and their datasets

pub mod clear_cut;
pub mod dataset;
pub mod mock;

pub use clear_cut::{ClearCut, ClearCutStatus};
pub use dataset::{load_from_yaml_file, load_from_yaml_str};
pub use mock::{FilterBounds, filter_bounds, mock_clear_cuts};
