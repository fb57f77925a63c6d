//! Diagnostics reported back to the caller of a data source.
//!
//! Validation and rendering never fail fast: every problem found is collected as a
//! [`Diagnostic`] so that the caller can report all of them at once.
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step into a configuration tree
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathStep {
    /// A named attribute of an object
    Attribute(String),
    /// A position in a list
    Index(usize),
    /// A key of a map
    Key(String),
}

/// Location of an attribute inside a configuration tree
///
/// Renders as `spec.config.installer_volumes[0].name` or `metadata.labels["app"]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    /// Path to a top level attribute
    pub fn root(name: &str) -> Self {
        Self(vec![PathStep::Attribute(name.to_string())])
    }

    /// Extend the path with a nested attribute
    #[must_use]
    pub fn attribute(&self, name: &str) -> Self {
        self.push(PathStep::Attribute(name.to_string()))
    }

    /// Extend the path with a list index
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.push(PathStep::Index(index))
    }

    /// Extend the path with a map key
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        self.push(PathStep::Key(key.to_string()))
    }

    /// The steps of this path, outermost first
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    /// Whether this path points at the configuration root
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{name}")?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(idx) => write!(f, "[{idx}]")?,
                PathStep::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

/// A single error report with a short summary and a longer detail
///
/// Every diagnostic aborts the operation that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Short, human-readable summary
    pub summary: String,
    /// Longer explanation, may be empty
    pub detail: String,
    /// Attribute the problem is attached to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<AttributePath>,
}

impl Diagnostic {
    /// Construct an error diagnostic
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        }
    }

    /// Attach the diagnostic to an attribute
    #[must_use]
    pub fn with_path(mut self, path: AttributePath) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = self.path.as_ref().filter(|p| !p.is_empty()) {
            write!(f, "{path}: ")?;
        }
        write!(f, "{}", self.summary)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// An ordered collection of diagnostics
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Append a diagnostic
    pub fn push(&mut self, diag: Diagnostic) {
        self.0.push(diag);
    }

    /// Append an error that is not tied to any attribute
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic::error(summary, detail));
    }

    /// Append an error attached to an attribute
    pub fn add_attribute_error(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::error(summary, detail).with_path(path));
    }

    /// Whether any error was reported
    pub fn has_error(&self) -> bool {
        !self.0.is_empty()
    }

    /// Number of diagnostics
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no diagnostics at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the diagnostics in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type IntoIter = std::vec::IntoIter<Diagnostic>;
    type Item = Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type IntoIter = std::slice::Iter<'a, Diagnostic>;
    type Item = &'a Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diag) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diag}")?;
        }
        Ok(())
    }
}
