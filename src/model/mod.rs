//! The architecture model: people, systems, deployment topology and the
//! relationships between them
//!
//! All entities live in arenas owned by [`Model`]. Factory methods on the
//! model create an entity, append its id to the parent's child list and
//! record the back-reference in one step, so a [`Component`] can only exist
//! inside a [`Container`], a [`Container`] inside a [`SoftwareSystem`], and so
//! on. Use `model[id]` to reach an entity's `with_*` setters.
//!
//! Factory arguments left empty (`""`) are treated as not provided. Call the
//! matching `with_*` setter to emit an explicitly empty string.
//!
//! # Example
//!
//! ```rust
//! use rustructurizr::model::{Model, Named};
//!
//! let mut model = Model::new();
//! let user = model.add_person("User", "A user of my software system.");
//! let system = model.add_software_system("Software System", "My software system.");
//! let web = model.add_container(system, "Web Application");
//! model[web].with_technology("Rust").with_tag("Web");
//! model.uses(user, system, "Uses");
//!
//! assert_eq!(model[web].name(), "Web Application");
//! assert_eq!(model[system].containers(), &[web]);
//! ```

mod attributes;
mod deployment;
mod element;
pub(crate) mod id;
mod relationship;
pub mod tags;

use std::ops::{Index, IndexMut};

pub use attributes::{Properties, Tags};
pub use deployment::{
    ContainerInstance, DeploymentNode, Environment, HealthCheck, InfrastructureNode, Location,
};
pub use element::{Component, Container, Enterprise, Named, Person, SoftwareSystem};
pub use id::{
    ComponentId, ContainerId, ContainerInstanceId, DeploymentNodeId, ElementId,
    InfrastructureNodeId, PersonId, RelationshipId, SoftwareSystemId,
};
pub use relationship::{InteractionStyle, Relationship};

use crate::error::ModelError;

/// The universe of architecture elements described by a workspace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    persons: Vec<Person>,
    software_systems: Vec<SoftwareSystem>,
    containers: Vec<Container>,
    components: Vec<Component>,
    deployment_nodes: Vec<DeploymentNode>,
    infrastructure_nodes: Vec<InfrastructureNode>,
    container_instances: Vec<ContainerInstance>,
    relationships: Vec<Relationship>,
    /// Top-level deployment nodes in insertion order
    top_level_nodes: Vec<DeploymentNodeId>,
    enterprise: Option<Enterprise>,
    properties: Properties,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- people and software systems -------------------------------------

    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> PersonId {
        let id = PersonId(self.persons.len());
        let person = Person::new(name.into(), given(description));
        self.persons.push(person);
        id
    }

    pub fn add_software_system(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> SoftwareSystemId {
        let id = SoftwareSystemId(self.software_systems.len());
        let system = SoftwareSystem::new(name.into(), given(description));
        self.software_systems.push(system);
        id
    }

    /// Add a container owned by `system`
    pub fn add_container(
        &mut self,
        system: SoftwareSystemId,
        name: impl Into<String>,
    ) -> ContainerId {
        let id = ContainerId(self.containers.len());
        self.containers.push(Container::new(name.into(), system));
        self.software_systems[system.0].containers.push(id);
        id
    }

    /// Add a component owned by `container`
    pub fn add_component(
        &mut self,
        container: ContainerId,
        name: impl Into<String>,
    ) -> ComponentId {
        let id = ComponentId(self.components.len());
        self.components.push(Component::new(name.into(), container));
        self.containers[container.0].components.push(id);
        id
    }

    // ---- relationships ---------------------------------------------------

    /// Add a directed relationship between any two elements
    ///
    /// Endpoints are not validated: any element may be used, including
    /// elements from unrelated subtrees.
    pub fn add_relationship(
        &mut self,
        from: impl Into<ElementId>,
        to: impl Into<ElementId>,
    ) -> RelationshipId {
        let id = RelationshipId(self.relationships.len());
        let relationship = Relationship::new(from.into(), to.into());
        self.relationships.push(relationship);
        id
    }

    /// Add a relationship with a description
    pub fn uses(
        &mut self,
        from: impl Into<ElementId>,
        to: impl Into<ElementId>,
        description: impl Into<String>,
    ) -> RelationshipId {
        let id = self.add_relationship(from, to);
        self.relationships[id.0].description = given(description);
        id
    }

    // ---- enterprise and model properties ---------------------------------

    /// Set the enterprise boundary, replacing any previous one
    pub fn set_enterprise(&mut self, name: impl Into<String>) -> &mut Enterprise {
        self.enterprise.insert(Enterprise::new(name.into()))
    }

    /// Place a person or software system inside the enterprise boundary
    ///
    /// Returns `false` if no enterprise has been set. Adding a member twice
    /// keeps one entry. Other element kinds are accepted but never rendered
    /// inside the boundary.
    pub fn add_to_enterprise(&mut self, element: impl Into<ElementId>) -> bool {
        match self.enterprise.as_mut() {
            Some(enterprise) => {
                let element = element.into();
                if !enterprise.is_member(element) {
                    enterprise.members.push(element);
                }
                true
            }
            None => false,
        }
    }

    pub fn enterprise(&self) -> Option<&Enterprise> {
        self.enterprise.as_ref()
    }

    pub fn enterprise_mut(&mut self) -> Option<&mut Enterprise> {
        self.enterprise.as_mut()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn with_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key, value);
        self
    }

    // ---- deployment topology ---------------------------------------------

    /// Create a deployment node that is not attached anywhere yet
    ///
    /// Attach it with [`Model::add_child`]. Detached nodes are not rendered.
    pub fn create_deployment_node(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
        environment: Environment,
    ) -> DeploymentNodeId {
        let id = DeploymentNodeId(self.deployment_nodes.len());
        self.deployment_nodes.push(DeploymentNode::new(
            name.into(),
            given(description),
            given(technology),
            environment,
        ));
        id
    }

    /// Add a top-level deployment node
    pub fn add_deployment_node(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
        environment: Environment,
    ) -> DeploymentNodeId {
        let id = self.create_deployment_node(name, description, technology, environment);
        self.top_level_nodes.push(id);
        id
    }

    pub fn add_dev_node(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
    ) -> DeploymentNodeId {
        self.add_deployment_node(name, description, technology, Environment::Development)
    }

    pub fn add_test_node(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
    ) -> DeploymentNodeId {
        self.add_deployment_node(name, description, technology, Environment::Test)
    }

    pub fn add_staging_node(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
    ) -> DeploymentNodeId {
        self.add_deployment_node(name, description, technology, Environment::Staging)
    }

    pub fn add_prod_node(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
    ) -> DeploymentNodeId {
        self.add_deployment_node(name, description, technology, Environment::Production)
    }

    /// Resolve an environment name, mapping well-known names onto their variants
    pub fn add_deployment_environment(&self, name: &str) -> Environment {
        Environment::from_name(name)
    }

    /// Add a child node with an explicit environment
    pub fn add_child_deployment_node(
        &mut self,
        parent: DeploymentNodeId,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
        environment: Environment,
    ) -> DeploymentNodeId {
        let id = self.create_deployment_node(name, description, technology, environment);
        self.attach(parent, id);
        id
    }

    /// Add a child node that takes its parent's environment
    pub fn add_child_node(
        &mut self,
        parent: DeploymentNodeId,
        name: impl Into<String>,
        description: impl Into<String>,
        technology: impl Into<String>,
    ) -> DeploymentNodeId {
        let environment = self.deployment_nodes[parent.0].environment.clone();
        self.add_child_deployment_node(parent, name, description, technology, environment)
    }

    /// Attach an existing node (and its subtree) under `parent`
    ///
    /// A node that already has a place in the tree is moved. If the parent's
    /// environment was pinned with [`Model::set_environment`], the whole
    /// attached subtree takes that environment.
    pub fn add_child(
        &mut self,
        parent: DeploymentNodeId,
        child: DeploymentNodeId,
    ) -> Result<(), ModelError> {
        if self.is_self_or_ancestor(child, parent) {
            return Err(ModelError::DeploymentCycle {
                parent: self.deployment_nodes[parent.0].name.clone(),
                child: self.deployment_nodes[child.0].name.clone(),
            });
        }

        self.detach(child);
        self.attach(parent, child);

        let parent_node = &self.deployment_nodes[parent.0];
        if parent_node.environment_pinned {
            let environment = parent_node.environment.clone();
            self.propagate_environment(child, &environment);
        }
        Ok(())
    }

    /// Pin a node's environment and push it down to every descendant
    pub fn set_environment(&mut self, node: DeploymentNodeId, environment: Environment) {
        self.propagate_environment(node, &environment);
    }

    pub fn add_infrastructure_node(
        &mut self,
        parent: DeploymentNodeId,
        name: impl Into<String>,
    ) -> InfrastructureNodeId {
        let id = InfrastructureNodeId(self.infrastructure_nodes.len());
        let node = InfrastructureNode::new(name.into(), parent);
        self.infrastructure_nodes.push(node);
        self.deployment_nodes[parent.0].infrastructure_nodes.push(id);
        id
    }

    /// Deploy `container` on `node`
    pub fn add_container_instance(
        &mut self,
        node: DeploymentNodeId,
        container: ContainerId,
    ) -> ContainerInstanceId {
        let id = ContainerInstanceId(self.container_instances.len());
        let instance = ContainerInstance::new(container, node);
        self.container_instances.push(instance);
        self.deployment_nodes[node.0].container_instances.push(id);
        id
    }

    /// Top-level deployment nodes of one environment, in insertion order
    pub fn deployment_nodes_in(&self, environment: &Environment) -> Vec<DeploymentNodeId> {
        self.top_level_nodes
            .iter()
            .copied()
            .filter(|id| &self.deployment_nodes[id.0].environment == environment)
            .collect()
    }

    /// Top-level deployment nodes in insertion order
    pub fn top_level_deployment_nodes(&self) -> &[DeploymentNodeId] {
        &self.top_level_nodes
    }

    fn attach(&mut self, parent: DeploymentNodeId, child: DeploymentNodeId) {
        self.deployment_nodes[child.0].parent = Some(parent);
        self.deployment_nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, node: DeploymentNodeId) {
        match self.deployment_nodes[node.0].parent.take() {
            Some(old) => self.deployment_nodes[old.0].children.retain(|c| *c != node),
            None => self.top_level_nodes.retain(|c| *c != node),
        }
    }

    /// Whether `candidate` is `node` or one of its ancestors
    fn is_self_or_ancestor(&self, candidate: DeploymentNodeId, node: DeploymentNodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.deployment_nodes[id.0].parent;
        }
        false
    }

    fn propagate_environment(&mut self, root: DeploymentNodeId, environment: &Environment) {
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let node = &mut self.deployment_nodes[id.0];
            node.environment = environment.clone();
            node.environment_pinned = true;
            pending.extend(node.children.iter().copied());
        }
    }

    // ---- lookups ---------------------------------------------------------

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(id.0)
    }

    pub fn software_system(&self, id: SoftwareSystemId) -> Option<&SoftwareSystem> {
        self.software_systems.get(id.0)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.0)
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    pub fn deployment_node(&self, id: DeploymentNodeId) -> Option<&DeploymentNode> {
        self.deployment_nodes.get(id.0)
    }

    pub fn infrastructure_node(&self, id: InfrastructureNodeId) -> Option<&InfrastructureNode> {
        self.infrastructure_nodes.get(id.0)
    }

    pub fn container_instance(&self, id: ContainerInstanceId) -> Option<&ContainerInstance> {
        self.container_instances.get(id.0)
    }

    pub fn relationship(&self, id: RelationshipId) -> Option<&Relationship> {
        self.relationships.get(id.0)
    }

    /// Display name of any element
    ///
    /// A container instance is named after the container it deploys.
    pub fn name_of(&self, id: ElementId) -> Option<&str> {
        match id {
            ElementId::Person(id) => self.person(id).map(Named::name),
            ElementId::SoftwareSystem(id) => self.software_system(id).map(Named::name),
            ElementId::Container(id) => self.container(id).map(Named::name),
            ElementId::Component(id) => self.component(id).map(Named::name),
            ElementId::DeploymentNode(id) => self.deployment_node(id).map(Named::name),
            ElementId::InfrastructureNode(id) => self.infrastructure_node(id).map(Named::name),
            ElementId::ContainerInstance(id) => self
                .container_instance(id)
                .and_then(|instance| self.container(instance.container))
                .map(Named::name),
        }
    }

    pub fn persons(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.persons.iter().enumerate().map(|(i, p)| (PersonId(i), p))
    }

    pub fn software_systems(&self) -> impl Iterator<Item = (SoftwareSystemId, &SoftwareSystem)> {
        self.software_systems
            .iter()
            .enumerate()
            .map(|(i, s)| (SoftwareSystemId(i), s))
    }

    pub fn relationships(&self) -> impl Iterator<Item = (RelationshipId, &Relationship)> {
        self.relationships
            .iter()
            .enumerate()
            .map(|(i, r)| (RelationshipId(i), r))
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Every element of the model, kind by kind in insertion order
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        let persons = (0..self.persons.len()).map(PersonId).map(ElementId::Person);
        let systems = (0..self.software_systems.len())
            .map(SoftwareSystemId)
            .map(ElementId::SoftwareSystem);
        let containers = (0..self.containers.len())
            .map(ContainerId)
            .map(ElementId::Container);
        let components = (0..self.components.len())
            .map(ComponentId)
            .map(ElementId::Component);
        let nodes = (0..self.deployment_nodes.len())
            .map(DeploymentNodeId)
            .map(ElementId::DeploymentNode);
        let infrastructure = (0..self.infrastructure_nodes.len())
            .map(InfrastructureNodeId)
            .map(ElementId::InfrastructureNode);
        let instances = (0..self.container_instances.len())
            .map(ContainerInstanceId)
            .map(ElementId::ContainerInstance);

        persons
            .chain(systems)
            .chain(containers)
            .chain(components)
            .chain(nodes)
            .chain(infrastructure)
            .chain(instances)
    }
}

/// Factory argument to optional attribute: empty means not provided
fn given(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

macro_rules! arena_index {
    ($($id:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            impl Index<$id> for Model {
                type Output = $ty;

                fn index(&self, id: $id) -> &$ty {
                    &self.$field[id.0]
                }
            }

            impl IndexMut<$id> for Model {
                fn index_mut(&mut self, id: $id) -> &mut $ty {
                    &mut self.$field[id.0]
                }
            }
        )*
    };
}

arena_index!(
    PersonId => persons: Person,
    SoftwareSystemId => software_systems: SoftwareSystem,
    ContainerId => containers: Container,
    ComponentId => components: Component,
    DeploymentNodeId => deployment_nodes: DeploymentNode,
    InfrastructureNodeId => infrastructure_nodes: InfrastructureNode,
    ContainerInstanceId => container_instances: ContainerInstance,
    RelationshipId => relationships: Relationship,
);
