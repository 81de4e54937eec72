//! DSL renderer for workspaces
//!
//! The renderer makes one depth-first pass over a [`Workspace`], writing each
//! entity as it is reached. Output is deterministic: rendering the same
//! workspace twice yields identical text, and the workspace is never mutated.

mod attributes;
pub mod config;
mod deployment;
mod elements;
mod emitter;
mod identifier;
mod styles;
mod views;
mod workspace;
mod writer;

use std::fmt;

pub use config::RenderConfig;
pub use identifier::identifier;

use crate::error::RenderError;
use crate::model::{ElementId, RelationshipId};
use crate::view::ViewId;
use crate::workspace::Workspace;
use emitter::Emitter;

/// A single entity to render outside of its workspace block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Element(ElementId),
    Relationship(RelationshipId),
    View(ViewId),
    Styles,
}

/// Render a workspace to DSL text
pub fn render_dsl(workspace: &Workspace, config: &RenderConfig) -> Result<String, RenderError> {
    let mut out = String::new();
    write_dsl(workspace, config, &mut out)?;
    Ok(out)
}

/// Render a workspace into any text sink
///
/// A failing sink aborts the render with an error naming the entity being
/// written.
pub fn write_dsl(
    workspace: &Workspace,
    config: &RenderConfig,
    out: &mut dyn fmt::Write,
) -> Result<(), RenderError> {
    Emitter::new(workspace, config, out).workspace()
}

/// Render one entity at depth zero, as it would appear inside its block
pub fn render_fragment(
    workspace: &Workspace,
    fragment: Fragment,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut out = String::new();
    let mut emitter = Emitter::new(workspace, config, &mut out);
    match fragment {
        Fragment::Element(id) => emitter.element(id)?,
        Fragment::Relationship(id) => emitter.relationship(id)?,
        Fragment::View(id) => emitter.view(id)?,
        Fragment::Styles => emitter.styles()?,
    }
    Ok(out)
}

impl Emitter<'_, '_> {
    fn element(&mut self, id: ElementId) -> Result<(), RenderError> {
        match id {
            ElementId::Person(id) => self.person(id),
            ElementId::SoftwareSystem(id) => self.software_system(id),
            ElementId::Container(id) => self.container(id),
            ElementId::Component(id) => self.component(id),
            ElementId::DeploymentNode(id) => self.deployment_node(id),
            ElementId::InfrastructureNode(id) => self.infrastructure_node(id),
            ElementId::ContainerInstance(id) => self.container_instance(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;
    use crate::model::{PersonId, SoftwareSystemId};
    use crate::view::SystemContextViewId;

    /// Sink that accepts a fixed number of writes and then fails
    struct FailingSink {
        remaining: usize,
    }

    impl fmt::Write for FailingSink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            if self.remaining == 0 {
                return Err(fmt::Error);
            }
            self.remaining -= 1;
            Ok(())
        }
    }

    #[test]
    fn test_failing_sink_names_the_entity() {
        let mut workspace = Workspace::new("w", "");
        workspace.model_mut().add_person("Customer", "");

        // two writes for `workspace {`, three for the indented `model {`
        let mut sink = FailingSink { remaining: 5 };
        let err = write_dsl(&workspace, &RenderConfig::default(), &mut sink).unwrap_err();
        assert!(matches!(
            &err,
            RenderError::Write { kind: "person", name, .. } if name == "Customer"
        ));
        assert_eq!(err.to_string(), "failed to write person 'Customer'");
    }

    #[test]
    fn test_foreign_ids_are_errors() {
        let workspace = Workspace::new("w", "");
        let config = RenderConfig::default();

        let err = render_fragment(&workspace, Fragment::Element(PersonId(3).into()), &config)
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownElement { kind: "person", index: 3 }));

        let err = render_fragment(
            &workspace,
            Fragment::View(SystemContextViewId(0).into()),
            &config,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown system context view with index 0");
    }

    #[test]
    fn test_view_over_foreign_system_fails() {
        let mut other = Workspace::new("other", "");
        let system = other.model_mut().add_software_system("A", "");
        let mut workspace = Workspace::new("w", "");
        workspace.views_mut().add_system_context_view(system, "", "");
        assert_eq!(system, SoftwareSystemId(0));

        let err = render_dsl(&workspace, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownElement { kind: "software system", .. }));
    }

    #[test]
    fn test_render_is_pure() {
        let mut workspace = Workspace::new("w", "");
        let model = workspace.model_mut();
        let a = model.add_person("A", "");
        let b = model.add_software_system("B", "");
        model.uses(a, b, "Uses");
        let before = workspace.clone();

        let config = RenderConfig::default();
        let first = render_dsl(&workspace, &config).unwrap();
        let second = render_dsl(&workspace, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(workspace, before);
    }
}
