pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod render;
pub mod templates;
pub mod writer;

pub use crate::config::Config;
pub use error::{GenError, GenerationAborted, Result, ScaffoldError, TemplateError};
pub use naming::{EntityName, NameForms};
pub use render::render;
pub use templates::{ScaffoldTaskSpec, TemplateRegistry};
pub use writer::{
    GenerationReport, TaskEvent, TaskOutcome, TaskStatus, generate, generate_with_progress,
};
