//! Shared state of one render pass

use super::config::RenderConfig;
use super::identifier::Resolver;
use super::writer::DslWriter;
use crate::error::{RenderError, WriteContext};
use crate::model::Model;
use crate::view::Views;
use crate::workspace::Workspace;

/// Walks a workspace depth-first, writing each entity as it is reached
///
/// Entity emitters live in the sibling modules as `impl Emitter` blocks. Each
/// one wraps failures of its own lines with its kind and name and passes
/// failures of its children through untouched.
pub(crate) struct Emitter<'a, 'w> {
    pub(crate) w: DslWriter<'w>,
    pub(crate) workspace: &'a Workspace,
    pub(crate) resolver: Resolver<'a>,
    pub(crate) config: &'a RenderConfig,
}

impl<'a, 'w> Emitter<'a, 'w> {
    pub(crate) fn new(
        workspace: &'a Workspace,
        config: &'a RenderConfig,
        out: &'w mut dyn std::fmt::Write,
    ) -> Self {
        Self {
            w: DslWriter::new(out, config),
            workspace,
            resolver: Resolver::new(workspace.model()),
            config,
        }
    }

    pub(crate) fn model(&self) -> &'a Model {
        self.workspace.model()
    }

    pub(crate) fn views(&self) -> &'a Views {
        self.workspace.views()
    }

    /// Single line when there is nothing to nest, `header { body }` otherwise
    pub(crate) fn entity_block<F>(
        &mut self,
        kind: &'static str,
        name: &str,
        header: &str,
        has_body: bool,
        body: F,
    ) -> Result<(), RenderError>
    where
        F: FnOnce(&mut Self) -> Result<(), RenderError>,
    {
        if !has_body {
            return self.w.line(header).entity(kind, name);
        }
        self.w.open(header).entity(kind, name)?;
        body(self)?;
        self.w.close().entity(kind, name)
    }

    /// Always `header { body }`, even when the body is empty
    pub(crate) fn block<F>(
        &mut self,
        kind: &'static str,
        name: &str,
        header: &str,
        body: F,
    ) -> Result<(), RenderError>
    where
        F: FnOnce(&mut Self) -> Result<(), RenderError>,
    {
        self.entity_block(kind, name, header, true, body)
    }
}
