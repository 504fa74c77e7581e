//! Writes rendered templates to disk, never touching files that exist.
//!
//! Tasks run one at a time in registry order. The first fatal error stops
//! the run; files written before it are left in place, so rerunning after
//! fixing the cause skips them and picks up where the failure happened.

use serde::Serialize;
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::error::{GenerationAborted, ScaffoldError};
use crate::naming::NameForms;
use crate::render::render;
use crate::templates::{ScaffoldTaskSpec, TemplateRegistry};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Created,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub name: String,
    pub path: PathBuf,
    pub status: TaskStatus,
}

/// Per-task outcomes of a run, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl GenerationReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn created(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|o| o.status == TaskStatus::Created)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|o| o.status == TaskStatus::Skipped)
    }
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent<'a> {
    Skipping { task: &'a str, path: &'a Path },
    Generating { task: &'a str, path: &'a Path },
    /// `path` is `None` when the path template itself failed to render.
    Failed { task: &'a str, path: Option<&'a Path> },
}

/// Generates every task of `registry` under `root`.
pub fn generate(
    root: &Path,
    forms: &NameForms,
    registry: &TemplateRegistry,
) -> Result<GenerationReport, GenerationAborted> {
    generate_with_progress(root, forms, registry, |_| {})
}

/// Like [`generate`], calling `progress` as each task is decided, before
/// any directory or file for it is created.
#[instrument(
    skip(forms, registry, progress),
    fields(entity = %forms.pascal, tasks = registry.len())
)]
pub fn generate_with_progress(
    root: &Path,
    forms: &NameForms,
    registry: &TemplateRegistry,
    mut progress: impl FnMut(TaskEvent<'_>),
) -> Result<GenerationReport, GenerationAborted> {
    let mut report = GenerationReport::default();

    for task in registry.tasks() {
        match run_task(root, forms, task, &mut progress) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(source) => {
                progress(TaskEvent::Failed {
                    task: &task.name,
                    path: source.path(),
                });
                return Err(GenerationAborted { report, source });
            }
        }
    }

    info!(
        created = report.created().count(),
        skipped = report.skipped().count(),
        "Generation finished"
    );
    Ok(report)
}

fn run_task(
    root: &Path,
    forms: &NameForms,
    task: &ScaffoldTaskSpec,
    progress: &mut impl FnMut(TaskEvent<'_>),
) -> Result<TaskOutcome, ScaffoldError> {
    let relative =
        render(&task.path_template, forms).map_err(|source| ScaffoldError::Template {
            task: task.name.clone(),
            source,
        })?;
    let path = root.join(relative);

    if entry_exists(&path)? {
        info!(task = %task.name, path = %path.display(), "Skipping existing file");
        progress(TaskEvent::Skipping {
            task: &task.name,
            path: &path,
        });
        return Ok(TaskOutcome {
            name: task.name.clone(),
            path,
            status: TaskStatus::Skipped,
        });
    }

    progress(TaskEvent::Generating {
        task: &task.name,
        path: &path,
    });

    if let Some(parent) = path.parent() {
        create_dirs(parent)?;
    }

    // Render before creating the file so a broken template leaves nothing
    // behind for the next run to skip.
    let body = render(&task.body_template, forms).map_err(|source| ScaffoldError::Template {
        task: task.name.clone(),
        source,
    })?;
    write_new_file(&path, &body)?;

    info!(task = %task.name, path = %path.display(), "Generated file");
    Ok(TaskOutcome {
        name: task.name.clone(),
        path,
        status: TaskStatus::Created,
    })
}

/// Any entry counts, including a dangling symlink.
fn entry_exists(path: &Path) -> Result<bool, ScaffoldError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ScaffoldError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn create_dirs(dir: &Path) -> Result<(), ScaffoldError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    debug!(dir = %dir.display(), "Ensuring directory exists");

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir).map_err(|source| ScaffoldError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// The handle lives only inside this function, so it is closed on every
/// return path including write errors.
fn write_new_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| ScaffoldError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| ScaffoldError::Write {
            path: path.to_path_buf(),
            source,
        })
}
