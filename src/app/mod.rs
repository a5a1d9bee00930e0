pub mod cli;
pub mod config_loader;
pub mod directory_provisioner;
pub mod pipeline;

pub use pipeline::{GenerationReport, Stage};
