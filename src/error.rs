//! Section Error Types
//!
//! Centralized error handling for schema validation, list editing and
//! media loading.

use std::fmt;

/// A single violated rule, addressed by its field path
/// (`title`, `animation.duration`, `images[2].url`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Re-root this error under `prefix` (`title` -> `[3].title`).
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.path = join_path(prefix, &self.path);
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Schema violations collected while validating one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(path, message)],
        }
    }

    /// First error reported for `path`, if any.
    pub fn field(&self, path: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.path == path)
    }

    pub fn has_field(&self, path: &str) -> bool {
        self.field(path).is_some()
    }

    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            errors: self
                .errors
                .into_iter()
                .map(|e| e.prefixed(prefix))
                .collect(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Section errors
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Patch for '{found}' cannot be applied to a '{expected}' section")]
    VariantMismatch { expected: String, found: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Media source error: {0}")]
    MediaSource(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SectionError {
    /// The field errors carried by a validation failure, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SectionError::Validation(v) => &v.errors,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for SectionError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON error: {:?}", err);
        SectionError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SectionError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        SectionError::MediaSource(err.to_string())
    }
}

/// Flatten `validator` output into path-addressed field errors.
pub(crate) fn collect_validator_errors(
    prefix: &str,
    result: Result<(), validator::ValidationErrors>,
    out: &mut Vec<FieldError>,
) {
    if let Err(errors) = result {
        flatten(prefix, &errors, out);
    }
}

fn flatten(prefix: &str, errors: &validator::ValidationErrors, out: &mut Vec<FieldError>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = join_path(prefix, &to_camel_case(&field.to_string()));
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                    out.push(FieldError::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

pub(crate) fn join_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) if path.starts_with('[') => format!("{}{}", prefix, path),
        (false, false) => format!("{}.{}", prefix, path),
    }
}

/// Field paths follow the serialized (camelCase) names.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "title"), "title");
        assert_eq!(join_path("animation", "duration"), "animation.duration");
        assert_eq!(join_path("[3]", "title"), "[3].title");
        assert_eq!(join_path("images", "[0]"), "images[0]");
        assert_eq!(join_path("style", ""), "style");
    }

    #[test]
    fn test_camel_case_paths() {
        assert_eq!(to_camel_case("background_image"), "backgroundImage");
        assert_eq!(to_camel_case("title"), "title");
    }

    #[test]
    fn test_display() {
        let err = ValidationError::new(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("", "Section must be an object"),
        ]);
        assert_eq!(
            err.to_string(),
            "title: Title is required; Section must be an object"
        );
    }
}
