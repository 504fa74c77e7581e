use std::path::Path;

/// Shows `path` relative to `root` when it lives underneath it.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Joins an error and its sources the way `{:#}` does for anyhow errors.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        format!("1 {}", word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_relative() {
        assert_eq!(
            display_relative(Path::new("./internal/service/order.go"), Path::new(".")),
            "internal/service/order.go"
        );
        assert_eq!(
            display_relative(Path::new("/elsewhere/a.go"), Path::new("/root")),
            "/elsewhere/a.go"
        );
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let err = gocrud_gen::ScaffoldError::CreateDir {
            path: "internal/service".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error_chain(&err),
            "failed to create directory internal/service: denied"
        );
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("file", 1), "1 file");
        assert_eq!(pluralize("file", 0), "0 files");
        assert_eq!(pluralize("file", 3), "3 files");
    }
}
