//! Views of one deployment environment

use super::{view_header_methods, ViewHeader};
use crate::model::{ElementId, Environment, RelationshipId, SoftwareSystemId};

/// The deployment topology of one environment
///
/// Relationships are never derived from the model automatically. Either add
/// them one by one or opt into [`DeploymentView::add_all_relationships`],
/// which copies the model's relationship list when the view is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentView {
    pub(crate) software_system: Option<SoftwareSystemId>,
    pub(crate) environment: Environment,
    pub(crate) header: ViewHeader,
    pub(crate) elements: Vec<ElementId>,
    pub(crate) relationships: Vec<RelationshipId>,
    pub(crate) all_deployment_nodes: bool,
    pub(crate) all_relationships: bool,
}

impl DeploymentView {
    pub(crate) fn new(
        software_system: Option<SoftwareSystemId>,
        environment: Environment,
        header: ViewHeader,
    ) -> Self {
        Self {
            software_system,
            environment,
            header,
            elements: Vec::new(),
            relationships: Vec::new(),
            all_deployment_nodes: false,
            all_relationships: false,
        }
    }

    pub fn software_system(&self) -> Option<SoftwareSystemId> {
        self.software_system
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub fn relationships(&self) -> &[RelationshipId] {
        &self.relationships
    }

    pub fn includes_all_relationships(&self) -> bool {
        self.all_relationships
    }

    pub fn includes_all_deployment_nodes(&self) -> bool {
        self.all_deployment_nodes
    }

    view_header_methods!();

    pub fn with_environment(&mut self, environment: Environment) -> &mut Self {
        self.environment = environment;
        self
    }

    pub fn for_dev(&mut self) -> &mut Self {
        self.with_environment(Environment::Development)
    }

    pub fn for_test(&mut self) -> &mut Self {
        self.with_environment(Environment::Test)
    }

    pub fn for_staging(&mut self) -> &mut Self {
        self.with_environment(Environment::Staging)
    }

    pub fn for_production(&mut self) -> &mut Self {
        self.with_environment(Environment::Production)
    }

    pub fn add_element(&mut self, element: impl Into<ElementId>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    pub fn add_relationship(&mut self, relationship: RelationshipId) -> &mut Self {
        self.relationships.push(relationship);
        self
    }

    /// Include every top-level deployment node of the view's environment
    pub fn add_all_deployment_nodes(&mut self) -> &mut Self {
        self.all_deployment_nodes = true;
        self
    }

    /// Include every relationship of the model, resolved at render time
    pub fn add_all_relationships(&mut self) -> &mut Self {
        self.all_relationships = true;
        self
    }
}
