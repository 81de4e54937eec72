//! Well-known tag names
//!
//! These are the tags the visualization tool assigns implicitly to each
//! element kind, plus a few conventional ones used for styling. They are
//! typically used as keys for [`ElementStyle`](crate::style::ElementStyle) and
//! [`RelationshipStyle`](crate::style::RelationshipStyle).

pub const ELEMENT: &str = "Element";
pub const PERSON: &str = "Person";
pub const SOFTWARE_SYSTEM: &str = "Software System";
pub const CONTAINER: &str = "Container";
pub const COMPONENT: &str = "Component";
pub const DEPLOYMENT_NODE: &str = "Deployment Node";
pub const INFRASTRUCTURE_NODE: &str = "Infrastructure Node";
pub const CONTAINER_INSTANCE: &str = "Container Instance";
pub const ENTERPRISE: &str = "Enterprise";
pub const HEALTH_CHECK: &str = "Health Check";
pub const GROUP: &str = "Group";
pub const DYNAMIC: &str = "Dynamic";

pub const RELATIONSHIP: &str = "Relationship";
pub const SYNCHRONOUS: &str = "synchronous";
pub const ASYNCHRONOUS: &str = "asynchronous";

pub const INTERNAL: &str = "Internal";
pub const EXTERNAL: &str = "External";

pub const DATABASE: &str = "Database";
pub const QUEUE: &str = "Queue";
