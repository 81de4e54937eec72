//! People, software systems, containers, components and relationships

use super::attributes::{write_properties, write_tags};
use super::emitter::Emitter;
use super::identifier::unknown;
use super::writer::{element_header, push_positional, quote};
use crate::error::{RenderError, WriteContext};
use crate::model::{
    ComponentId, ContainerId, ElementId, InteractionStyle, Named, PersonId, RelationshipId,
    SoftwareSystemId,
};

const ENTERPRISE: &str = "enterprise";

impl Emitter<'_, '_> {
    pub(crate) fn person(&mut self, id: PersonId) -> Result<(), RenderError> {
        let person = self
            .model()
            .person(id)
            .ok_or_else(|| unknown(id.into()))?;
        let token = self.resolver.token(id.into())?;
        let header = element_header(&token, "person", person.name(), &[person.description()]);
        log::trace!(token = token.as_str(); "Emitting person");

        let name = person.name();
        self.entity_block(PersonId::KIND, name, &header, !person.tags().is_empty(), |e| {
            write_tags(&mut e.w, person.tags()).entity(PersonId::KIND, name)
        })
    }

    pub(crate) fn software_system(&mut self, id: SoftwareSystemId) -> Result<(), RenderError> {
        let system = self
            .model()
            .software_system(id)
            .ok_or_else(|| unknown(id.into()))?;
        let token = self.resolver.token(id.into())?;
        let header = element_header(
            &token,
            "softwareSystem",
            system.name(),
            &[system.description()],
        );
        log::trace!(token = token.as_str(), containers = system.containers().len(); "Emitting software system");

        let name = system.name();
        let has_body = !system.tags().is_empty() || !system.containers().is_empty();
        self.entity_block(SoftwareSystemId::KIND, name, &header, has_body, |e| {
            write_tags(&mut e.w, system.tags()).entity(SoftwareSystemId::KIND, name)?;
            for &container in system.containers() {
                e.container(container)?;
            }
            Ok(())
        })
    }

    pub(crate) fn container(&mut self, id: ContainerId) -> Result<(), RenderError> {
        let container = self
            .model()
            .container(id)
            .ok_or_else(|| unknown(id.into()))?;
        let token = self.resolver.token(id.into())?;
        let header = element_header(
            &token,
            "container",
            container.name(),
            &[container.description(), container.technology()],
        );

        let name = container.name();
        let has_body = !container.tags().is_empty() || !container.components().is_empty();
        self.entity_block(ContainerId::KIND, name, &header, has_body, |e| {
            write_tags(&mut e.w, container.tags()).entity(ContainerId::KIND, name)?;
            for &component in container.components() {
                e.component(component)?;
            }
            Ok(())
        })
    }

    pub(crate) fn component(&mut self, id: ComponentId) -> Result<(), RenderError> {
        let component = self
            .model()
            .component(id)
            .ok_or_else(|| unknown(id.into()))?;
        let token = self.resolver.token(id.into())?;
        let header = element_header(
            &token,
            "component",
            component.name(),
            &[component.description(), component.technology()],
        );

        let name = component.name();
        self.entity_block(ComponentId::KIND, name, &header, !component.tags().is_empty(), |e| {
            write_tags(&mut e.w, component.tags()).entity(ComponentId::KIND, name)
        })
    }

    /// The enterprise boundary with its member people and systems
    pub(crate) fn enterprise(&mut self) -> Result<(), RenderError> {
        let model = self.model();
        let Some(enterprise) = model.enterprise() else {
            return Ok(());
        };
        let name = enterprise.name();
        let header = format!("enterprise {}", quote(name));

        self.block(ENTERPRISE, name, &header, |e| {
            write_properties(&mut e.w, enterprise.properties()).entity(ENTERPRISE, name)?;
            for &member in enterprise.members() {
                if let ElementId::Person(id) = member {
                    e.person(id)?;
                }
            }
            for &member in enterprise.members() {
                if let ElementId::SoftwareSystem(id) = member {
                    e.software_system(id)?;
                }
            }
            Ok(())
        })
    }

    pub(crate) fn relationship(&mut self, id: RelationshipId) -> Result<(), RenderError> {
        let relationship =
            self.model()
                .relationship(id)
                .ok_or(RenderError::UnknownElement {
                    kind: RelationshipId::KIND,
                    index: id.index(),
                })?;
        let line = self.arrow(
            relationship.from(),
            relationship.to(),
            &[
                relationship.description(),
                relationship.technology(),
                relationship.interaction_style().map(InteractionStyle::as_str),
            ],
        )?;
        self.w.line(&line).entity(RelationshipId::KIND, &line)
    }

    /// `<from> -> <to>` followed by optional quoted arguments
    pub(crate) fn arrow(
        &self,
        from: ElementId,
        to: ElementId,
        args: &[Option<&str>],
    ) -> Result<String, RenderError> {
        let mut line = format!(
            "{} -> {}",
            self.resolver.token(from)?,
            self.resolver.token(to)?
        );
        push_positional(&mut line, args);
        Ok(line)
    }
}
