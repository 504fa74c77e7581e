use std::path::PathBuf;
use thiserror::Error;

use crate::writer::GenerationReport;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("entity name must not be empty")]
    EmptyEntityName,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Placeholder errors raised while rendering a path or body template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown placeholder '{name}' at byte {offset}")]
    UnknownPlaceholder { name: String, offset: usize },

    #[error("unterminated placeholder starting at byte {offset}")]
    Unterminated { offset: usize },
}

/// Fatal conditions that stop a generation run.
///
/// Every filesystem variant carries the path it was operating on so the
/// message is enough to diagnose the failure without a backtrace.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("failed to check file status for {}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create file {}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template for task '{task}'")]
    Template {
        task: String,
        #[source]
        source: TemplateError,
    },
}

impl ScaffoldError {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScaffoldError::Stat { path, .. }
            | ScaffoldError::CreateDir { path, .. }
            | ScaffoldError::CreateFile { path, .. }
            | ScaffoldError::Write { path, .. } => Some(path),
            ScaffoldError::Template { .. } => None,
        }
    }
}

/// A run that stopped on a fatal error. Files written before the failure
/// stay on disk; `report` lists them.
#[derive(Error, Debug)]
#[error("generation aborted after {} completed task(s)", .report.len())]
pub struct GenerationAborted {
    pub report: GenerationReport,
    #[source]
    pub source: ScaffoldError,
}

impl From<config::ConfigError> for GenError {
    fn from(err: config::ConfigError) -> Self {
        GenError::Configuration(err.to_string())
    }
}
