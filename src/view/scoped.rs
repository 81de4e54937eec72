//! Static views scoped to one software system or container

use super::{view_header_methods, ViewHeader};
use crate::model::{ContainerId, ElementId, SoftwareSystemId};

/// Relationship-aware include rule for container views
///
/// `on` with the afferent/efferent flags selects an element together with
/// its incoming and/or outgoing relationships. `from`/`to` select the
/// relationships between two elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeExpression {
    pub on: Option<ElementId>,
    pub from: Option<ElementId>,
    pub to: Option<ElementId>,
    pub afferent: bool,
    pub efferent: bool,
}

impl IncludeExpression {
    pub fn element(on: impl Into<ElementId>) -> Self {
        Self {
            on: Some(on.into()),
            ..Self::default()
        }
    }

    /// The element and everything that points at it
    pub fn afferent(on: impl Into<ElementId>) -> Self {
        Self {
            afferent: true,
            ..Self::element(on)
        }
    }

    /// The element and everything it points at
    pub fn efferent(on: impl Into<ElementId>) -> Self {
        Self {
            efferent: true,
            ..Self::element(on)
        }
    }

    /// The element and both directions of relationships
    pub fn neighbours(on: impl Into<ElementId>) -> Self {
        Self {
            afferent: true,
            efferent: true,
            ..Self::element(on)
        }
    }

    pub fn relationship(from: impl Into<ElementId>, to: impl Into<ElementId>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
            ..Self::default()
        }
    }
}

/// What a static view includes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inclusions {
    pub(crate) all: bool,
    pub(crate) people: bool,
    pub(crate) software_systems: bool,
    pub(crate) elements: Vec<ElementId>,
    pub(crate) expressions: Vec<IncludeExpression>,
}

impl Inclusions {
    /// Whether the rules amount to `include *`
    pub fn includes_everything(&self) -> bool {
        self.all || (self.people && self.software_systems)
    }

    pub fn people(&self) -> bool {
        self.people
    }

    pub fn software_systems(&self) -> bool {
        self.software_systems
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub fn expressions(&self) -> &[IncludeExpression] {
        &self.expressions
    }
}

macro_rules! inclusion_methods {
    () => {
        pub fn inclusions(&self) -> &Inclusions {
            &self.inclusions
        }

        /// Include every element in scope
        pub fn add_all_elements(&mut self) -> &mut Self {
            self.inclusions.all = true;
            self
        }

        pub fn add_all_people(&mut self) -> &mut Self {
            self.inclusions.people = true;
            self
        }

        pub fn add_all_software_systems(&mut self) -> &mut Self {
            self.inclusions.software_systems = true;
            self
        }

        pub fn add_element(&mut self, element: impl Into<ElementId>) -> &mut Self {
            self.inclusions.elements.push(element.into());
            self
        }

        pub fn include_expression(&mut self, expression: IncludeExpression) -> &mut Self {
            self.inclusions.expressions.push(expression);
            self
        }
    };
}

/// A software system and the people and systems that surround it
#[derive(Debug, Clone, PartialEq)]
pub struct SystemContextView {
    pub(crate) software_system: SoftwareSystemId,
    pub(crate) header: ViewHeader,
    pub(crate) inclusions: Inclusions,
}

impl SystemContextView {
    pub(crate) fn new(software_system: SoftwareSystemId, header: ViewHeader) -> Self {
        Self {
            software_system,
            header,
            inclusions: Inclusions::default(),
        }
    }

    pub fn software_system(&self) -> SoftwareSystemId {
        self.software_system
    }

    view_header_methods!();
    inclusion_methods!();
}

/// The containers inside one software system
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerView {
    pub(crate) software_system: SoftwareSystemId,
    pub(crate) header: ViewHeader,
    pub(crate) inclusions: Inclusions,
}

impl ContainerView {
    pub(crate) fn new(software_system: SoftwareSystemId, header: ViewHeader) -> Self {
        Self {
            software_system,
            header,
            inclusions: Inclusions::default(),
        }
    }

    pub fn software_system(&self) -> SoftwareSystemId {
        self.software_system
    }

    view_header_methods!();
    inclusion_methods!();
}

/// The components inside one container
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    pub(crate) container: ContainerId,
    pub(crate) header: ViewHeader,
    pub(crate) inclusions: Inclusions,
}

impl ComponentView {
    pub(crate) fn new(container: ContainerId, header: ViewHeader) -> Self {
        Self {
            container,
            header,
            inclusions: Inclusions::default(),
        }
    }

    pub fn container(&self) -> ContainerId {
        self.container
    }

    view_header_methods!();
    inclusion_methods!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PersonId, SoftwareSystemId};

    #[test]
    fn test_people_and_systems_flags_include_everything() {
        let mut view = SystemContextView::new(SoftwareSystemId(0), ViewHeader::default());
        view.add_all_people();
        assert!(!view.inclusions().includes_everything());
        view.add_all_software_systems();
        assert!(view.inclusions().includes_everything());
    }

    #[test]
    fn test_expression_constructors() {
        let user = PersonId(0);
        let both = IncludeExpression::neighbours(user);
        assert!(both.afferent && both.efferent);
        assert_eq!(both.on, Some(ElementId::Person(user)));

        let rel = IncludeExpression::relationship(user, SoftwareSystemId(1));
        assert_eq!(rel.on, None);
        assert_eq!(rel.to, Some(ElementId::SoftwareSystem(SoftwareSystemId(1))));
    }
}
