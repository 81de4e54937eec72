//! The root of an architecture description

use crate::model::Model;
use crate::view::Views;

/// One model plus the views over it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    name: Option<String>,
    description: Option<String>,
    extends: Option<String>,
    model: Model,
    views: Views,
}

impl Workspace {
    /// Create a workspace; empty arguments are treated as not provided
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let description = description.into();
        Self {
            name: (!name.is_empty()).then_some(name),
            description: (!description.is_empty()).then_some(description),
            ..Self::default()
        }
    }

    /// Create a workspace that extends another one
    ///
    /// Extending workspaces never emit their own name or description.
    pub fn extending(path: impl Into<String>) -> Self {
        Self {
            extends: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_extends(&mut self, path: impl Into<String>) -> &mut Self {
        self.extends = Some(path.into());
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut Views {
        &mut self.views
    }

    /// Borrow the model and views mutably at the same time
    pub fn parts_mut(&mut self) -> (&mut Model, &mut Views) {
        (&mut self.model, &mut self.views)
    }
}
