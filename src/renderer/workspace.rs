//! The top-level render pass

use std::fmt;

use log::debug;

use super::attributes::write_properties;
use super::emitter::Emitter;
use super::writer::{push_positional, quote};
use crate::error::{RenderError, WriteContext};
use crate::model::ElementId;
use crate::view::{
    ComponentViewId, ContainerViewId, DeploymentViewId, DynamicViewId, FilteredViewId,
    SystemContextViewId, ViewId,
};

const WORKSPACE: &str = "workspace";
const MODEL: &str = "model";
const VIEWS: &str = "views";

/// Stages of a full render, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Header,
    Model,
    Views,
    Close,
}

impl Phase {
    pub(crate) const SEQUENCE: [Phase; 4] =
        [Phase::Header, Phase::Model, Phase::Views, Phase::Close];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Emitter<'_, '_> {
    /// Render the whole workspace
    pub(crate) fn workspace(&mut self) -> Result<(), RenderError> {
        self.resolver.report_collisions();
        for phase in Phase::SEQUENCE {
            debug!(phase:%; "Render phase");
            match phase {
                Phase::Header => self.workspace_header()?,
                Phase::Model => self.model_block()?,
                Phase::Views => self.views_block()?,
                Phase::Close => self.w.close().entity(WORKSPACE, self.workspace_name())?,
            }
        }
        Ok(())
    }

    fn workspace_name(&self) -> &str {
        self.workspace.name().unwrap_or(WORKSPACE)
    }

    fn workspace_header(&mut self) -> Result<(), RenderError> {
        let header = match self.workspace.extends() {
            Some(path) => format!("{WORKSPACE} extends {}", quote(path)),
            None => {
                let mut header = WORKSPACE.to_string();
                push_positional(
                    &mut header,
                    &[self.workspace.name(), self.workspace.description()],
                );
                header
            }
        };
        let name = self.workspace_name().to_string();
        self.w.open(&header).entity(WORKSPACE, &name)
    }

    /// Blank separator line when section spacing is on
    fn section_break(&mut self, kind: &'static str, first: &mut bool) -> Result<(), RenderError> {
        if !*first && self.config.section_spacing {
            self.w.blank().entity(kind, kind)?;
        }
        *first = false;
        Ok(())
    }

    fn model_block(&mut self) -> Result<(), RenderError> {
        let model = self.model();
        let enterprise = model.enterprise();
        let outside = |id: ElementId| enterprise.map_or(true, |e| !e.is_member(id));

        self.block(MODEL, MODEL, MODEL, |e| {
            let mut first = true;
            if !model.properties().is_empty() {
                e.section_break(MODEL, &mut first)?;
                write_properties(&mut e.w, model.properties())
                    .entity(MODEL, MODEL)?;
            }

            let persons: Vec<_> = model
                .persons()
                .map(|(id, _)| id)
                .filter(|&id| outside(id.into()))
                .collect();
            if !persons.is_empty() {
                e.section_break(MODEL, &mut first)?;
                for id in persons {
                    e.person(id)?;
                }
            }

            let systems: Vec<_> = model
                .software_systems()
                .map(|(id, _)| id)
                .filter(|&id| outside(id.into()))
                .collect();
            if !systems.is_empty() {
                e.section_break(MODEL, &mut first)?;
                for id in systems {
                    e.software_system(id)?;
                }
            }

            if enterprise.is_some() {
                e.section_break(MODEL, &mut first)?;
                e.enterprise()?;
            }

            if !model.top_level_deployment_nodes().is_empty() {
                e.section_break(MODEL, &mut first)?;
                e.deployment_environments()?;
            }

            if model.relationship_count() > 0 {
                e.section_break(MODEL, &mut first)?;
                for (id, _) in model.relationships() {
                    e.relationship(id)?;
                }
            }
            Ok(())
        })
    }

    fn views_block(&mut self) -> Result<(), RenderError> {
        let views = self.views();
        let ids: Vec<ViewId> = (0..views.system_context_views().len())
            .map(|i| SystemContextViewId(i).into())
            .chain((0..views.container_views().len()).map(|i| ContainerViewId(i).into()))
            .chain((0..views.component_views().len()).map(|i| ComponentViewId(i).into()))
            .chain((0..views.dynamic_views().len()).map(|i| DynamicViewId(i).into()))
            .chain((0..views.deployment_views().len()).map(|i| DeploymentViewId(i).into()))
            .chain((0..views.filtered_views().len()).map(|i| FilteredViewId(i).into()))
            .collect();
        debug!(views = ids.len(); "Emitting views");

        self.block(VIEWS, VIEWS, VIEWS, |e| {
            let mut first = true;
            for id in ids {
                e.section_break(VIEWS, &mut first)?;
                e.view(id)?;
            }
            if !views.styles().is_empty() {
                e.section_break(VIEWS, &mut first)?;
                e.styles()?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Phase;
    use crate::model::Environment;
    use crate::renderer::{render_dsl, RenderConfig};
    use crate::workspace::Workspace;

    #[test]
    fn test_phase_sequence() {
        assert_eq!(
            Phase::SEQUENCE,
            [Phase::Header, Phase::Model, Phase::Views, Phase::Close]
        );
    }

    #[test]
    fn test_empty_workspace_keeps_both_blocks() {
        let workspace = Workspace::new("", "");
        assert_eq!(
            render_dsl(&workspace, &RenderConfig::default()).unwrap(),
            "workspace {\n    model {\n    }\n    views {\n    }\n}\n"
        );
    }

    #[test]
    fn test_workspace_extends() {
        let workspace = Workspace::extending("../base.dsl");
        assert_eq!(
            render_dsl(&workspace, &RenderConfig::default()).unwrap(),
            "workspace extends \"../base.dsl\" {\n    model {\n    }\n    views {\n    }\n}\n"
        );
    }

    #[test]
    fn test_model_section_order() {
        let mut workspace = Workspace::new("Bank", "");
        let model = workspace.model_mut();
        model.with_property("owner", "arch");
        let staff = model.add_person("Staff", "");
        let customer = model.add_person("Customer", "");
        let core = model.add_software_system("Core", "");
        let mail = model.add_software_system("Mail", "");
        model.set_enterprise("Big Bank");
        model.add_to_enterprise(staff);
        model.add_to_enterprise(core);
        model.add_prod_node("Server", "", "");
        model.uses(customer, core, "Uses");
        model.uses(core, mail, "Sends mail");

        assert_eq!(
            render_dsl(&workspace, &RenderConfig::default()).unwrap(),
            concat!(
                "workspace \"Bank\" {\n",
                "    model {\n",
                "        properties {\n",
                "            owner \"arch\"\n",
                "        }\n",
                "        customer = person \"Customer\"\n",
                "        mail = softwareSystem \"Mail\"\n",
                "        enterprise \"Big Bank\" {\n",
                "            staff = person \"Staff\"\n",
                "            core = softwareSystem \"Core\"\n",
                "        }\n",
                "        deploymentEnvironment \"Production\" {\n",
                "            server = deploymentNode \"Server\"\n",
                "        }\n",
                "        customer -> core \"Uses\"\n",
                "        core -> mail \"Sends mail\"\n",
                "    }\n",
                "    views {\n",
                "    }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_section_spacing() {
        let mut workspace = Workspace::new("", "");
        let (model, views) = workspace.parts_mut();
        let user = model.add_person("User", "");
        let system = model.add_software_system("App", "");
        model.uses(user, system, "");
        let context = views.add_system_context_view(system, "", "");
        views[context].add_all_elements();
        views.add_deployment_view(None, Environment::Development, "", "");

        let config = RenderConfig::default().with_section_spacing(true);
        assert_eq!(
            render_dsl(&workspace, &config).unwrap(),
            concat!(
                "workspace {\n",
                "    model {\n",
                "        user = person \"User\"\n",
                "\n",
                "        app = softwareSystem \"App\"\n",
                "\n",
                "        user -> app\n",
                "    }\n",
                "    views {\n",
                "        systemContext app {\n",
                "            include *\n",
                "        }\n",
                "\n",
                "        deploymentView {\n",
                "            environment \"Development\"\n",
                "        }\n",
                "    }\n",
                "}\n",
            )
        );
    }
}
