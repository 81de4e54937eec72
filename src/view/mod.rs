//! Diagram definitions over the model
//!
//! Each view kind lives in its own arena inside [`Views`] and is addressed by
//! a typed id. [`ViewId`] is the sum over all of them and is what a
//! [`FilteredView`] uses to reference its base view.

mod deployment;
mod dynamic;
mod filtered;
mod scoped;

use std::ops::{Index, IndexMut};

pub use deployment::DeploymentView;
pub use dynamic::{DynamicStep, DynamicView};
pub use filtered::{FilterCriterion, FilterMode, FilterType, FilteredView};
pub use scoped::{ComponentView, ContainerView, IncludeExpression, Inclusions, SystemContextView};

use crate::model::id::arena_id;
use crate::model::{ContainerId, ElementId, Environment, SoftwareSystemId};
use crate::style::Styles;

arena_id!(
    /// Handle to a [`SystemContextView`]
    SystemContextViewId,
    "system context"
);
arena_id!(
    /// Handle to a [`ContainerView`]
    ContainerViewId,
    "container"
);
arena_id!(
    /// Handle to a [`ComponentView`]
    ComponentViewId,
    "component"
);
arena_id!(
    /// Handle to a [`DynamicView`]
    DynamicViewId,
    "dynamic"
);
arena_id!(
    /// Handle to a [`DeploymentView`]
    DeploymentViewId,
    "deployment"
);
arena_id!(
    /// Handle to a [`FilteredView`]
    FilteredViewId,
    "filtered"
);

/// Any view in a [`Views`] set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    SystemContext(SystemContextViewId),
    Container(ContainerViewId),
    Component(ComponentViewId),
    Dynamic(DynamicViewId),
    Deployment(DeploymentViewId),
    Filtered(FilteredViewId),
}

impl ViewId {
    pub fn kind(self) -> &'static str {
        match self {
            ViewId::SystemContext(_) => SystemContextViewId::KIND,
            ViewId::Container(_) => ContainerViewId::KIND,
            ViewId::Component(_) => ComponentViewId::KIND,
            ViewId::Dynamic(_) => DynamicViewId::KIND,
            ViewId::Deployment(_) => DeploymentViewId::KIND,
            ViewId::Filtered(_) => FilteredViewId::KIND,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ViewId::SystemContext(id) => id.index(),
            ViewId::Container(id) => id.index(),
            ViewId::Component(id) => id.index(),
            ViewId::Dynamic(id) => id.index(),
            ViewId::Deployment(id) => id.index(),
            ViewId::Filtered(id) => id.index(),
        }
    }
}

macro_rules! view_from {
    ($($id:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$id> for ViewId {
                fn from(id: $id) -> Self {
                    ViewId::$variant(id)
                }
            }
        )*
    };
}

view_from!(
    SystemContextViewId => SystemContext,
    ContainerViewId => Container,
    ComponentViewId => Component,
    DynamicViewId => Dynamic,
    DeploymentViewId => Deployment,
    FilteredViewId => Filtered,
);

/// Key, description and layout flag shared by every view kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewHeader {
    pub(crate) key: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) auto_layout: bool,
}

impl ViewHeader {
    pub(crate) fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        let key = key.into();
        let description = description.into();
        Self {
            key: (!key.is_empty()).then_some(key),
            description: (!description.is_empty()).then_some(description),
            auto_layout: false,
        }
    }
}

/// Accessors and setters for the fields in a view's [`ViewHeader`]
macro_rules! view_header_methods {
    () => {
        pub fn key(&self) -> Option<&str> {
            self.header.key.as_deref()
        }

        pub fn description(&self) -> Option<&str> {
            self.header.description.as_deref()
        }

        pub fn auto_layout(&self) -> bool {
            self.header.auto_layout
        }

        pub fn with_key(&mut self, key: impl Into<String>) -> &mut Self {
            self.header.key = Some(key.into());
            self
        }

        pub fn with_description(&mut self, description: impl Into<String>) -> &mut Self {
            self.header.description = Some(description.into());
            self
        }

        /// Delegate layout to the consuming tool
        pub fn with_auto_layout(&mut self, enabled: bool) -> &mut Self {
            self.header.auto_layout = enabled;
            self
        }
    };
}

pub(crate) use view_header_methods;

/// All views of a workspace plus their styles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Views {
    system_context: Vec<SystemContextView>,
    container: Vec<ContainerView>,
    component: Vec<ComponentView>,
    dynamic: Vec<DynamicView>,
    deployment: Vec<DeploymentView>,
    filtered: Vec<FilteredView>,
    styles: Styles,
}

impl Views {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a view of `system` and the people and systems around it
    pub fn add_system_context_view(
        &mut self,
        system: SoftwareSystemId,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> SystemContextViewId {
        let id = SystemContextViewId(self.system_context.len());
        let view = SystemContextView::new(system, ViewHeader::new(key, description));
        self.system_context.push(view);
        id
    }

    /// Add a view of the containers inside `system`
    pub fn add_container_view(
        &mut self,
        system: SoftwareSystemId,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> ContainerViewId {
        let id = ContainerViewId(self.container.len());
        let view = ContainerView::new(system, ViewHeader::new(key, description));
        self.container.push(view);
        id
    }

    /// Add a view of the components inside `container`
    pub fn add_component_view(
        &mut self,
        container: ContainerId,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> ComponentViewId {
        let id = ComponentViewId(self.component.len());
        let view = ComponentView::new(container, ViewHeader::new(key, description));
        self.component.push(view);
        id
    }

    /// Add an ordered interaction view, scoped to an element or the whole model
    pub fn add_dynamic_view(
        &mut self,
        scope: Option<ElementId>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> DynamicViewId {
        let id = DynamicViewId(self.dynamic.len());
        let view = DynamicView::new(scope, ViewHeader::new(key, description));
        self.dynamic.push(view);
        id
    }

    /// Add a view of one deployment environment
    pub fn add_deployment_view(
        &mut self,
        system: Option<SoftwareSystemId>,
        environment: Environment,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> DeploymentViewId {
        let id = DeploymentViewId(self.deployment.len());
        self.deployment.push(DeploymentView::new(
            system,
            environment,
            ViewHeader::new(key, description),
        ));
        id
    }

    pub fn add_dev_view(
        &mut self,
        system: Option<SoftwareSystemId>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> DeploymentViewId {
        self.add_deployment_view(system, Environment::Development, key, description)
    }

    pub fn add_test_view(
        &mut self,
        system: Option<SoftwareSystemId>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> DeploymentViewId {
        self.add_deployment_view(system, Environment::Test, key, description)
    }

    pub fn add_staging_view(
        &mut self,
        system: Option<SoftwareSystemId>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> DeploymentViewId {
        self.add_deployment_view(system, Environment::Staging, key, description)
    }

    pub fn add_prod_view(
        &mut self,
        system: Option<SoftwareSystemId>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> DeploymentViewId {
        self.add_deployment_view(system, Environment::Production, key, description)
    }

    /// Add a view derived from `base` by tag, name or type rules
    pub fn add_filtered_view(
        &mut self,
        base: impl Into<ViewId>,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> FilteredViewId {
        let id = FilteredViewId(self.filtered.len());
        let view = FilteredView::new(base.into(), ViewHeader::new(key, description));
        self.filtered.push(view);
        id
    }

    /// Key of any view, `None` when the view has no key or does not exist
    pub fn key_of(&self, id: ViewId) -> Option<&str> {
        match id {
            ViewId::SystemContext(id) => self.system_context.get(id.0)?.key(),
            ViewId::Container(id) => self.container.get(id.0)?.key(),
            ViewId::Component(id) => self.component.get(id.0)?.key(),
            ViewId::Dynamic(id) => self.dynamic.get(id.0)?.key(),
            ViewId::Deployment(id) => self.deployment.get(id.0)?.key(),
            ViewId::Filtered(id) => self.filtered.get(id.0)?.key(),
        }
    }

    pub fn contains(&self, id: ViewId) -> bool {
        let len = match id {
            ViewId::SystemContext(_) => self.system_context.len(),
            ViewId::Container(_) => self.container.len(),
            ViewId::Component(_) => self.component.len(),
            ViewId::Dynamic(_) => self.dynamic.len(),
            ViewId::Deployment(_) => self.deployment.len(),
            ViewId::Filtered(_) => self.filtered.len(),
        };
        id.index() < len
    }

    pub fn system_context_views(&self) -> &[SystemContextView] {
        &self.system_context
    }

    pub fn container_views(&self) -> &[ContainerView] {
        &self.container
    }

    pub fn component_views(&self) -> &[ComponentView] {
        &self.component
    }

    pub fn dynamic_views(&self) -> &[DynamicView] {
        &self.dynamic
    }

    pub fn deployment_views(&self) -> &[DeploymentView] {
        &self.deployment
    }

    pub fn filtered_views(&self) -> &[FilteredView] {
        &self.filtered
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut Styles {
        &mut self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.system_context.is_empty()
            && self.container.is_empty()
            && self.component.is_empty()
            && self.dynamic.is_empty()
            && self.deployment.is_empty()
            && self.filtered.is_empty()
            && self.styles.is_empty()
    }
}

macro_rules! view_index {
    ($($id:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            impl Index<$id> for Views {
                type Output = $ty;

                fn index(&self, id: $id) -> &$ty {
                    &self.$field[id.0]
                }
            }

            impl IndexMut<$id> for Views {
                fn index_mut(&mut self, id: $id) -> &mut $ty {
                    &mut self.$field[id.0]
                }
            }
        )*
    };
}

view_index!(
    SystemContextViewId => system_context: SystemContextView,
    ContainerViewId => container: ContainerView,
    ComponentViewId => component: ComponentView,
    DynamicViewId => dynamic: DynamicView,
    DeploymentViewId => deployment: DeploymentView,
    FilteredViewId => filtered: FilteredView,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_key_lookup_across_kinds() {
        let mut model = Model::new();
        let system = model.add_software_system("Shop", "");
        let mut views = Views::new();
        let containers = views.add_container_view(system, "Containers", "");
        let unkeyed = views.add_system_context_view(system, "", "");
        let filtered = views.add_filtered_view(containers, "Api", "");

        assert_eq!(views.key_of(containers.into()), Some("Containers"));
        assert_eq!(views.key_of(unkeyed.into()), None);
        assert_eq!(views[filtered].base(), ViewId::Container(containers));
    }

    #[test]
    fn test_environment_view_shortcuts() {
        let mut model = Model::new();
        let system = model.add_software_system("Shop", "");
        let mut views = Views::new();
        let dev = views.add_dev_view(Some(system), "Dev", "");
        let test = views.add_test_view(None, "Test", "");
        let staging = views.add_staging_view(None, "Staging", "");
        let prod = views.add_prod_view(Some(system), "Live", "Production");

        assert_eq!(views[dev].environment(), &Environment::Development);
        assert_eq!(views[dev].software_system(), Some(system));
        assert_eq!(views[test].environment(), &Environment::Test);
        assert_eq!(views[staging].environment(), &Environment::Staging);
        assert_eq!(views[prod].environment(), &Environment::Production);
        assert_eq!(views.key_of(prod.into()), Some("Live"));
    }

    #[test]
    fn test_contains_rejects_foreign_ids() {
        let views = Views::new();
        assert!(!views.contains(ViewId::Dynamic(DynamicViewId(0))));
        assert_eq!(views.key_of(ViewId::Filtered(FilteredViewId(4))), None);
    }
}
