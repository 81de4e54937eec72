//! Error types for building and rendering workspaces

use std::{fmt, io};

use thiserror::Error;

/// Errors that can occur while rendering a workspace to DSL
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output sink rejected a write while an entity was being emitted
    #[error("failed to write {kind} '{name}'")]
    Write {
        kind: &'static str,
        name: String,
        #[source]
        source: fmt::Error,
    },

    /// The finished document could not be written to an io sink
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// An element id that does not exist in the rendered model
    #[error("unknown {kind} with index {index}")]
    UnknownElement { kind: &'static str, index: usize },

    /// A view id that does not exist in the rendered view set
    #[error("unknown {kind} view with index {index}")]
    UnknownView { kind: &'static str, index: usize },
}

impl RenderError {
    /// Wrap a sink failure with the entity being emitted
    pub fn write(kind: &'static str, name: impl Into<String>, source: fmt::Error) -> Self {
        Self::Write {
            kind,
            name: name.into(),
            source,
        }
    }
}

/// Result extension attaching the entity being emitted to a sink failure
pub(crate) trait WriteContext<T> {
    fn entity(self, kind: &'static str, name: &str) -> Result<T, RenderError>;
}

impl<T> WriteContext<T> for Result<T, fmt::Error> {
    fn entity(self, kind: &'static str, name: &str) -> Result<T, RenderError> {
        self.map_err(|source| RenderError::write(kind, name, source))
    }
}

/// Structural violations rejected while building a model
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Attaching a deployment node under itself or one of its descendants
    #[error("deployment node '{child}' cannot be nested under '{parent}': it would form a cycle")]
    DeploymentCycle { parent: String, child: String },
}
