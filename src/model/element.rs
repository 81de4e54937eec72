//! The four C4 abstraction levels plus the enterprise boundary

use super::attributes::{Properties, Tags};
use super::id::{ComponentId, ContainerId, ElementId, SoftwareSystemId};

/// Capability shared by everything that can be referenced by name
pub trait Named {
    fn name(&self) -> &str;
}

/// A human actor
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) tags: Tags,
}

impl Person {
    pub(crate) fn new(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description,
            tags: Tags::new(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.add(tag);
        self
    }
}

/// A top-level software system
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareSystem {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) tags: Tags,
    pub(crate) containers: Vec<ContainerId>,
}

impl SoftwareSystem {
    pub(crate) fn new(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description,
            tags: Tags::new(),
            containers: Vec::new(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Containers in the order they were added
    pub fn containers(&self) -> &[ContainerId] {
        &self.containers
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.add(tag);
        self
    }
}

/// A deployable unit inside a software system
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) technology: Option<String>,
    pub(crate) tags: Tags,
    pub(crate) software_system: SoftwareSystemId,
    pub(crate) components: Vec<ComponentId>,
}

impl Container {
    pub(crate) fn new(name: String, software_system: SoftwareSystemId) -> Self {
        Self {
            name,
            description: None,
            technology: None,
            tags: Tags::new(),
            software_system,
            components: Vec::new(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The owning software system
    pub fn software_system(&self) -> SoftwareSystemId {
        self.software_system
    }

    pub fn components(&self) -> &[ComponentId] {
        &self.components
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_technology(&mut self, technology: impl Into<String>) -> &mut Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.add(tag);
        self
    }
}

/// A code-level unit inside a container
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) technology: Option<String>,
    pub(crate) tags: Tags,
    pub(crate) container: ContainerId,
}

impl Component {
    pub(crate) fn new(name: String, container: ContainerId) -> Self {
        Self {
            name,
            description: None,
            technology: None,
            tags: Tags::new(),
            container,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The owning container
    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_technology(&mut self, technology: impl Into<String>) -> &mut Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.add(tag);
        self
    }
}

/// The organisational boundary grouping the people and systems it owns
#[derive(Debug, Clone, PartialEq)]
pub struct Enterprise {
    pub(crate) name: String,
    pub(crate) properties: Properties,
    pub(crate) members: Vec<ElementId>,
}

impl Enterprise {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            properties: Properties::new(),
            members: Vec::new(),
        }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn members(&self) -> &[ElementId] {
        &self.members
    }

    pub fn is_member(&self, element: ElementId) -> bool {
        self.members.contains(&element)
    }

    pub fn with_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key, value);
        self
    }
}

macro_rules! impl_named {
    ($($ty:ty),*) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_named!(Person, SoftwareSystem, Container, Component, Enterprise);
