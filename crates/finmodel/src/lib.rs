//! Command-line front end for the finmodel projection engine
//!
//! Loads model files (YAML or JSON), runs projections and scenario
//! comparisons through `finmodel_core`, prints plain-text reports and writes
//! CSV/JSON exports. Also owns logging setup for the binary.

pub mod commands;
pub mod logging;
pub mod model_file;
pub mod report;
pub mod util;

pub use commands::{Command, execute};
pub use logging::init_logging;
pub use model_file::{ModelFile, ModelFileError, load_model};
