//! Built-in Go CRUD templates and the registry that orders them.
//!
//! Bodies are plain text with `{{PASCAL_CASE}}`, `{{CAMEL_CASE}}`,
//! `{{LOWER_CASE}}` and `{{KEBAB_CASE}}` placeholders; see [`crate::render`].

pub mod controller;
pub mod repository;
pub mod request;
pub mod service;

/// One artifact to generate: where it goes and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTaskSpec {
    pub name: String,
    pub path_template: String,
    pub body_template: String,
}

impl ScaffoldTaskSpec {
    pub fn new(
        name: impl Into<String>,
        path_template: impl Into<String>,
        body_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path_template: path_template.into(),
            body_template: body_template.into(),
        }
    }
}

/// Ordered set of tasks handed to [`crate::writer::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    tasks: Vec<ScaffoldTaskSpec>,
}

impl TemplateRegistry {
    pub fn new(tasks: Vec<ScaffoldTaskSpec>) -> Self {
        Self { tasks }
    }

    /// Repository, service, controller and request files, in that order.
    pub fn go_crud() -> Self {
        Self::new(vec![
            ScaffoldTaskSpec::new("repository", repository::PATH, repository::BODY),
            ScaffoldTaskSpec::new("service", service::PATH, service::BODY),
            ScaffoldTaskSpec::new("controller", controller::PATH, controller::BODY),
            ScaffoldTaskSpec::new("request", request::PATH, request::BODY),
        ])
    }

    pub fn tasks(&self) -> &[ScaffoldTaskSpec] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::go_crud()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{EntityName, NameForms};
    use crate::render::render;

    #[test]
    fn test_go_crud_order() {
        let registry = TemplateRegistry::go_crud();
        let names: Vec<&str> = registry.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["repository", "service", "controller", "request"]);
    }

    #[test]
    fn test_every_builtin_template_renders() {
        let forms = NameForms::derive(&EntityName::new("SbsFee").unwrap());
        for task in TemplateRegistry::default().tasks() {
            assert!(render(&task.path_template, &forms).is_ok(), "path of {}", task.name);
            assert!(render(&task.body_template, &forms).is_ok(), "body of {}", task.name);
        }
    }

    #[test]
    fn test_builtin_paths_are_distinct() {
        let forms = NameForms::derive(&EntityName::new("Order").unwrap());
        let mut paths: Vec<String> = TemplateRegistry::default()
            .tasks()
            .iter()
            .map(|t| render(&t.path_template, &forms).unwrap())
            .collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }
}
