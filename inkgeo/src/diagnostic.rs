//! Non-fatal problems found during conversion.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind of a non-fatal problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A path segment sequence resolved to fewer than 2 points. The ring was dropped.
    DegenerateRing,
    /// Inverse projection did not reach the tolerance within the iteration limit. The best estimate is used.
    ProjectionNonConvergence,
    /// Inverse projection hit a singular Jacobian. The last estimate is used.
    SingularJacobian,
    /// Containing rings of a ring do not reduce to one innermost ring. The parent was chosen by tie-break.
    AmbiguousContainment,
    /// Polygon was not simple and was rebuilt from its planar subdivision.
    SelfIntersectingRing,
    /// Worker task failed. Its contribution is missing from the output.
    TaskFailed,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiagnosticKind::DegenerateRing => "degenerate ring",
            DiagnosticKind::ProjectionNonConvergence => "projection did not converge",
            DiagnosticKind::SingularJacobian => "singular jacobian",
            DiagnosticKind::AmbiguousContainment => "ambiguous containment",
            DiagnosticKind::SelfIntersectingRing => "self-intersecting ring",
            DiagnosticKind::TaskFailed => "task failed",
        };
        f.write_str(name)
    }
}

/// Non-fatal problem attached to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    shape_id: Option<String>,
    detail: String,
}

impl Diagnostic {
    /// Creates a new diagnostic and logs it.
    pub fn new(kind: DiagnosticKind, shape_id: Option<&str>, detail: impl Into<String>) -> Self {
        let diagnostic = Self {
            kind,
            shape_id: shape_id.map(str::to_string),
            detail: detail.into(),
        };

        match kind {
            DiagnosticKind::DegenerateRing => log::debug!("{diagnostic}"),
            DiagnosticKind::TaskFailed => log::error!("{diagnostic}"),
            _ => log::warn!("{diagnostic}"),
        }

        diagnostic
    }

    /// Kind of the problem.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Identifier of the shape the problem was found in, if known.
    pub fn shape_id(&self) -> Option<&str> {
        self.shape_id.as_deref()
    }

    /// Human readable description.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub(crate) fn with_shape_id(mut self, shape_id: &str) -> Self {
        if self.shape_id.is_none() {
            self.shape_id = Some(shape_id.to_string());
        }
        self
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.shape_id {
            Some(id) => write!(f, "{} in '{id}': {}", self.kind, self.detail),
            None => write!(f, "{}: {}", self.kind, self.detail),
        }
    }
}

/// Best-effort value together with the problems found while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reported<T> {
    /// Computed value.
    pub value: T,
    /// Problems found on the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Reported<T> {
    /// Value without diagnostics.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: vec![],
        }
    }

    /// Value with the given diagnostics.
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Transforms the value keeping diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reported<U> {
        Reported {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Moves diagnostics into `sink` and returns the value.
    pub fn unpack(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }

    /// Returns true if there are no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_shape() {
        let diagnostic = Diagnostic::new(DiagnosticKind::DegenerateRing, Some("lake"), "1 point");
        assert_eq!(diagnostic.to_string(), "degenerate ring in 'lake': 1 point");

        let diagnostic = diagnostic.with_shape_id("other");
        assert_eq!(diagnostic.shape_id(), Some("lake"));
    }

    #[test]
    fn unpack_moves_diagnostics() {
        let mut sink = vec![];
        let reported = Reported::new(
            5,
            vec![Diagnostic::new(DiagnosticKind::TaskFailed, None, "panic")],
        );
        assert!(!reported.is_clean());
        assert_eq!(reported.map(|v| v * 2).unpack(&mut sink), 10);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].kind(), DiagnosticKind::TaskFailed);
    }
}
