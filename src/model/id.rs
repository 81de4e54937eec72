//! Typed handles into the model arena
//!
//! Every entity lives in a `Vec` owned by [`Model`](super::Model) and is
//! addressed by a small `Copy` index. Parents hold lists of child ids and
//! children hold the id of their parent, so no entity ever owns another
//! through a pointer.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Human-readable entity kind, used in diagnostics
            pub const KIND: &'static str = $kind;

            /// Position of the entity in its arena
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}#{}", $kind, self.0)
            }
        }
    };
}

pub(crate) use arena_id;

arena_id!(
    /// Handle to a [`Person`](super::Person)
    PersonId,
    "person"
);
arena_id!(
    /// Handle to a [`SoftwareSystem`](super::SoftwareSystem)
    SoftwareSystemId,
    "software system"
);
arena_id!(
    /// Handle to a [`Container`](super::Container)
    ContainerId,
    "container"
);
arena_id!(
    /// Handle to a [`Component`](super::Component)
    ComponentId,
    "component"
);
arena_id!(
    /// Handle to a [`DeploymentNode`](super::DeploymentNode)
    DeploymentNodeId,
    "deployment node"
);
arena_id!(
    /// Handle to an [`InfrastructureNode`](super::InfrastructureNode)
    InfrastructureNodeId,
    "infrastructure node"
);
arena_id!(
    /// Handle to a [`ContainerInstance`](super::ContainerInstance)
    ContainerInstanceId,
    "container instance"
);
arena_id!(
    /// Handle to a [`Relationship`](super::Relationship)
    RelationshipId,
    "relationship"
);

/// Any element that can be the endpoint of a relationship or be included in a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Person(PersonId),
    SoftwareSystem(SoftwareSystemId),
    Container(ContainerId),
    Component(ComponentId),
    DeploymentNode(DeploymentNodeId),
    InfrastructureNode(InfrastructureNodeId),
    ContainerInstance(ContainerInstanceId),
}

impl ElementId {
    /// Entity kind of the referenced element
    pub fn kind(self) -> &'static str {
        match self {
            ElementId::Person(_) => PersonId::KIND,
            ElementId::SoftwareSystem(_) => SoftwareSystemId::KIND,
            ElementId::Container(_) => ContainerId::KIND,
            ElementId::Component(_) => ComponentId::KIND,
            ElementId::DeploymentNode(_) => DeploymentNodeId::KIND,
            ElementId::InfrastructureNode(_) => InfrastructureNodeId::KIND,
            ElementId::ContainerInstance(_) => ContainerInstanceId::KIND,
        }
    }

    /// Arena index of the referenced element
    pub fn index(self) -> usize {
        match self {
            ElementId::Person(id) => id.index(),
            ElementId::SoftwareSystem(id) => id.index(),
            ElementId::Container(id) => id.index(),
            ElementId::Component(id) => id.index(),
            ElementId::DeploymentNode(id) => id.index(),
            ElementId::InfrastructureNode(id) => id.index(),
            ElementId::ContainerInstance(id) => id.index(),
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind(), self.index())
    }
}

macro_rules! element_from {
    ($($id:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$id> for ElementId {
                fn from(id: $id) -> Self {
                    ElementId::$variant(id)
                }
            }
        )*
    };
}

element_from!(
    PersonId => Person,
    SoftwareSystemId => SoftwareSystem,
    ContainerId => Container,
    ComponentId => Component,
    DeploymentNodeId => DeploymentNode,
    InfrastructureNodeId => InfrastructureNode,
    ContainerInstanceId => ContainerInstance,
);
