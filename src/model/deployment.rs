//! Deployment topology: where containers run

use std::fmt;

use super::attributes::{Properties, Tags};
use super::element::Named;
use super::id::{ContainerId, ContainerInstanceId, DeploymentNodeId, InfrastructureNodeId};

/// Deployment environment a node belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
    /// Any other environment name
    Custom(String),
}

impl Environment {
    /// Map an environment name onto a well-known variant, case-insensitively
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "development" => Environment::Development,
            "test" => Environment::Test,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            _ => Environment::Custom(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Environment::Development => "Development",
            Environment::Test => "Test",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
            Environment::Custom(name) => name,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a node sits inside or outside the organisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Internal,
    External,
}

/// A piece of infrastructure that hosts other nodes or container instances
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentNode {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) technology: Option<String>,
    pub(crate) environment: Environment,
    /// Set once the environment was pinned with `Model::set_environment`
    pub(crate) environment_pinned: bool,
    pub(crate) location: Location,
    pub(crate) tags: Tags,
    pub(crate) properties: Properties,
    pub(crate) parent: Option<DeploymentNodeId>,
    pub(crate) children: Vec<DeploymentNodeId>,
    pub(crate) infrastructure_nodes: Vec<InfrastructureNodeId>,
    pub(crate) container_instances: Vec<ContainerInstanceId>,
}

impl DeploymentNode {
    pub(crate) fn new(
        name: String,
        description: Option<String>,
        technology: Option<String>,
        environment: Environment,
    ) -> Self {
        Self {
            name,
            description,
            technology,
            environment,
            environment_pinned: false,
            location: Location::default(),
            tags: Tags::new(),
            properties: Properties::new(),
            parent: None,
            children: Vec::new(),
            infrastructure_nodes: Vec::new(),
            container_instances: Vec::new(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The enclosing node, `None` for top-level and detached nodes
    pub fn parent(&self) -> Option<DeploymentNodeId> {
        self.parent
    }

    pub fn children(&self) -> &[DeploymentNodeId] {
        &self.children
    }

    pub fn infrastructure_nodes(&self) -> &[InfrastructureNodeId] {
        &self.infrastructure_nodes
    }

    pub fn container_instances(&self) -> &[ContainerInstanceId] {
        &self.container_instances
    }

    pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_technology(&mut self, technology: impl Into<String>) -> &mut Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_location(&mut self, location: Location) -> &mut Self {
        self.location = location;
        self
    }

    pub fn with_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.add(tag);
        self
    }

    pub fn with_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key, value);
        self
    }

    pub(crate) fn has_body(&self) -> bool {
        !self.tags.is_empty()
            || !self.properties.is_empty()
            || !self.children.is_empty()
            || !self.infrastructure_nodes.is_empty()
            || !self.container_instances.is_empty()
    }
}

/// Infrastructure that is not a container: load balancers, DNS, firewalls
#[derive(Debug, Clone, PartialEq)]
pub struct InfrastructureNode {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) technology: Option<String>,
    pub(crate) tags: Tags,
    pub(crate) properties: Properties,
    pub(crate) parent: DeploymentNodeId,
}

impl InfrastructureNode {
    pub(crate) fn new(name: String, parent: DeploymentNodeId) -> Self {
        Self {
            name,
            description: None,
            technology: None,
            tags: Tags::new(),
            properties: Properties::new(),
            parent,
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

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn parent(&self) -> DeploymentNodeId {
        self.parent
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

    pub fn with_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key, value);
        self
    }
}

/// A container deployed on a particular node
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerInstance {
    pub(crate) container: ContainerId,
    pub(crate) instance_id: Option<u32>,
    pub(crate) tags: Tags,
    pub(crate) properties: Properties,
    pub(crate) health_checks: Vec<HealthCheck>,
    pub(crate) parent: DeploymentNodeId,
}

impl ContainerInstance {
    pub const DEFAULT_INSTANCE_ID: u32 = 1;

    pub(crate) fn new(container: ContainerId, parent: DeploymentNodeId) -> Self {
        Self {
            container,
            instance_id: None,
            tags: Tags::new(),
            properties: Properties::new(),
            health_checks: Vec::new(),
            parent,
        }
    }

    /// The container this instance deploys
    pub fn container(&self) -> ContainerId {
        self.container
    }

    pub fn instance_id(&self) -> u32 {
        self.instance_id.unwrap_or(Self::DEFAULT_INSTANCE_ID)
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn health_checks(&self) -> &[HealthCheck] {
        &self.health_checks
    }

    /// The node this instance is deployed on
    pub fn parent(&self) -> DeploymentNodeId {
        self.parent
    }

    pub fn with_instance_id(&mut self, instance_id: u32) -> &mut Self {
        self.instance_id = Some(instance_id);
        self
    }

    pub fn with_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.add(tag);
        self
    }

    pub fn with_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key, value);
        self
    }

    /// Attach a health check and return it for further configuration
    pub fn add_health_check(
        &mut self,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut HealthCheck {
        let index = self.health_checks.len();
        self.health_checks.push(HealthCheck::new(name.into(), url.into()));
        &mut self.health_checks[index]
    }

    pub(crate) fn has_body(&self) -> bool {
        !self.tags.is_empty()
            || !self.properties.is_empty()
            || self.instance_id.is_some()
            || !self.health_checks.is_empty()
    }
}

/// Liveness probe of a container instance
#[derive(Debug, Clone, PartialEq)]
pub struct HealthCheck {
    pub(crate) name: String,
    pub(crate) url: String,
    pub(crate) interval: Option<u32>,
    pub(crate) timeout: Option<u32>,
    pub(crate) properties: Properties,
}

impl HealthCheck {
    /// Seconds between probes
    pub const DEFAULT_INTERVAL: u32 = 60;
    /// Milliseconds before a probe is considered failed
    pub const DEFAULT_TIMEOUT: u32 = 1000;

    pub(crate) fn new(name: String, url: String) -> Self {
        Self {
            name,
            url,
            interval: None,
            timeout: None,
            properties: Properties::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn interval(&self) -> u32 {
        self.interval.unwrap_or(Self::DEFAULT_INTERVAL)
    }

    pub fn timeout(&self) -> u32 {
        self.timeout.unwrap_or(Self::DEFAULT_TIMEOUT)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn with_interval(&mut self, seconds: u32) -> &mut Self {
        self.interval = Some(seconds);
        self
    }

    pub fn with_timeout(&mut self, millis: u32) -> &mut Self {
        self.timeout = Some(millis);
        self
    }

    pub fn with_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.insert(key, value);
        self
    }

    pub(crate) fn has_body(&self) -> bool {
        self.interval.is_some() || self.timeout.is_some() || !self.properties.is_empty()
    }
}

impl Named for DeploymentNode {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for InfrastructureNode {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for HealthCheck {
    fn name(&self) -> &str {
        &self.name
    }
}
