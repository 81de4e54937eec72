//! Rustructurizr - C4 architecture models rendered as Structurizr DSL
//!
//! This library provides an in-memory model of people, software systems,
//! containers, components and their deployment, views over that model, and a
//! serializer that writes the whole workspace as Structurizr DSL text.
//!
//! # Example
//!
//! ```rust
//! use rustructurizr::{render, Workspace};
//!
//! let mut workspace = Workspace::new("Getting Started", "");
//! let (model, views) = workspace.parts_mut();
//! let user = model.add_person("User", "A user of my software system.");
//! let system = model.add_software_system("Software System", "My software system.");
//! model.uses(user, system, "Uses");
//! let context = views.add_system_context_view(system, "SystemContext", "");
//! views[context].add_all_elements().with_auto_layout(true);
//!
//! let dsl = render(&workspace).unwrap();
//! assert!(dsl.contains("user -> softwareSystem \"Uses\""));
//! assert!(dsl.contains("systemContext softwareSystem \"SystemContext\" {"));
//! ```

pub mod demos;
pub mod error;
pub mod model;
pub mod renderer;
pub mod style;
pub mod theme;
pub mod view;
pub mod workspace;

use std::io;

pub use error::{ModelError, RenderError};
pub use model::{ElementId, Environment, Model, Named};
pub use renderer::{identifier, render_dsl, render_fragment, write_dsl, Fragment, RenderConfig};
pub use style::{ElementStyle, RelationshipStyle, Shape, Styles};
pub use theme::{Theme, ThemeError};
pub use view::{ViewId, Views};
pub use workspace::Workspace;

/// Render a workspace to DSL with default configuration
///
/// This is the main entry point for the library.
pub fn render(workspace: &Workspace) -> Result<String, RenderError> {
    render_with_config(workspace, &RenderConfig::default())
}

/// Render a workspace to DSL with custom configuration
///
/// # Example
///
/// ```rust
/// use rustructurizr::{render_with_config, RenderConfig, Workspace};
///
/// let mut workspace = Workspace::new("Tabs", "");
/// workspace.model_mut().add_person("User", "");
///
/// let config = RenderConfig::new().with_indent_width(2);
/// let dsl = render_with_config(&workspace, &config).unwrap();
/// assert!(dsl.contains("\n    user = person \"User\"\n"));
/// ```
pub fn render_with_config(
    workspace: &Workspace,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    render_dsl(workspace, config)
}

/// Render a workspace and write the finished document to `out`
///
/// Nothing is written when rendering fails.
pub fn write_to(
    workspace: &Workspace,
    config: &RenderConfig,
    mut out: impl io::Write,
) -> Result<(), RenderError> {
    let dsl = render_dsl(workspace, config)?;
    out.write_all(dsl.as_bytes())?;
    out.flush()?;
    Ok(())
}
