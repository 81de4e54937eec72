//! View definitions

use super::emitter::Emitter;
use super::writer::{push_positional, quote};
use crate::error::{RenderError, WriteContext};
use crate::model::ElementId;
use crate::view::{
    ComponentView, ContainerView, DeploymentView, DynamicView, FilteredView, IncludeExpression,
    Inclusions, SystemContextView, ViewHeader, ViewId,
};

/// `<keyword> <scope> ["key"] ["description"]`
fn view_header(keyword: &str, scope: &str, header: &ViewHeader) -> String {
    let mut line = format!("{keyword} {scope}");
    push_positional(
        &mut line,
        &[header.key.as_deref(), header.description.as_deref()],
    );
    line
}

/// Name used in diagnostics: the key when there is one
fn view_name<'v>(keyword: &'v str, header: &'v ViewHeader) -> &'v str {
    header.key.as_deref().unwrap_or(keyword)
}

impl Emitter<'_, '_> {
    /// Render one view by id
    pub(crate) fn view(&mut self, id: ViewId) -> Result<(), RenderError> {
        let views = self.views();
        let missing = || RenderError::UnknownView {
            kind: id.kind(),
            index: id.index(),
        };
        let index = id.index();
        match id {
            ViewId::SystemContext(_) => {
                let view = views.system_context_views().get(index).ok_or_else(missing)?;
                self.system_context_view(view)
            }
            ViewId::Container(_) => {
                let view = views.container_views().get(index).ok_or_else(missing)?;
                self.container_view(view)
            }
            ViewId::Component(_) => {
                let view = views.component_views().get(index).ok_or_else(missing)?;
                self.component_view(view)
            }
            ViewId::Dynamic(_) => {
                let view = views.dynamic_views().get(index).ok_or_else(missing)?;
                self.dynamic_view(view)
            }
            ViewId::Deployment(_) => {
                let view = views.deployment_views().get(index).ok_or_else(missing)?;
                self.deployment_view(view)
            }
            ViewId::Filtered(_) => {
                let view = views.filtered_views().get(index).ok_or_else(missing)?;
                self.filtered_view(view)
            }
        }
    }

    pub(crate) fn system_context_view(
        &mut self,
        view: &SystemContextView,
    ) -> Result<(), RenderError> {
        const KIND: &str = "systemContext";
        let scope = self.resolver.token(view.software_system().into())?;
        let header = view_header(KIND, &scope, &view.header);
        let name = view_name(KIND, &view.header);

        self.block(KIND, name, &header, |e| {
            e.inclusions(&view.inclusions, KIND, name)?;
            e.auto_layout(view.header.auto_layout, KIND, name)
        })
    }

    pub(crate) fn container_view(&mut self, view: &ContainerView) -> Result<(), RenderError> {
        const KIND: &str = "container";
        let scope = self.resolver.token(view.software_system().into())?;
        let header = view_header(KIND, &scope, &view.header);
        let name = view_name(KIND, &view.header);

        self.block(KIND, name, &header, |e| {
            e.inclusions(&view.inclusions, KIND, name)?;
            e.auto_layout(view.header.auto_layout, KIND, name)
        })
    }

    pub(crate) fn component_view(&mut self, view: &ComponentView) -> Result<(), RenderError> {
        const KIND: &str = "component";
        let scope = self.resolver.token(view.container().into())?;
        let header = view_header(KIND, &scope, &view.header);
        let name = view_name(KIND, &view.header);

        self.block(KIND, name, &header, |e| {
            e.inclusions(&view.inclusions, KIND, name)?;
            e.auto_layout(view.header.auto_layout, KIND, name)
        })
    }

    pub(crate) fn dynamic_view(&mut self, view: &DynamicView) -> Result<(), RenderError> {
        const KIND: &str = "dynamic";
        let scope = match view.scope() {
            Some(scope) => self.resolver.token(scope)?,
            None => "*".to_string(),
        };
        let header = view_header(KIND, &scope, &view.header);
        let name = view_name(KIND, &view.header);
        let parallel = view.parallel_sequences();

        self.block(KIND, name, &header, |e| {
            let mut index = 0;
            while index < view.steps().len() {
                match parallel.iter().find(|range| range.start == index) {
                    Some(range) => {
                        e.w.open("").entity(KIND, name)?;
                        for step in &view.steps()[range.clone()] {
                            e.w.open("").entity(KIND, name)?;
                            let labels = [step.description(), step.technology()];
                            let line = e.arrow(step.from(), step.to(), &labels)?;
                            e.w.line(&line).entity(KIND, name)?;
                            e.w.close().entity(KIND, name)?;
                        }
                        e.w.close().entity(KIND, name)?;
                        index = range.end;
                    }
                    None => {
                        let step = &view.steps()[index];
                        let labels = [step.description(), step.technology()];
                        let line = e.arrow(step.from(), step.to(), &labels)?;
                        e.w.line(&line).entity(KIND, name)?;
                        index += 1;
                    }
                }
            }
            e.auto_layout(view.header.auto_layout, KIND, name)
        })
    }

    pub(crate) fn deployment_view(&mut self, view: &DeploymentView) -> Result<(), RenderError> {
        const KIND: &str = "deploymentView";
        let model = self.model();
        let name = view_name(KIND, &view.header);

        let mut elements: Vec<ElementId> = view.elements().to_vec();
        if view.includes_all_deployment_nodes() {
            for id in model.deployment_nodes_in(view.environment()) {
                let id = ElementId::from(id);
                if !elements.contains(&id) {
                    elements.push(id);
                }
            }
        }
        let mut relationships = view.relationships().to_vec();
        if view.includes_all_relationships() {
            for (id, _) in model.relationships() {
                if !relationships.contains(&id) {
                    relationships.push(id);
                }
            }
        }

        self.block(KIND, name, KIND, |e| {
            if let Some(system) = view.software_system() {
                let token = e.resolver.token(system.into())?;
                e.w.line(&format!("softwareSystem {token}")).entity(KIND, name)?;
            }
            e.w.line(&format!("environment {}", quote(view.environment().as_str())))
                .entity(KIND, name)?;
            e.key_and_description(&view.header, KIND, name)?;
            e.auto_layout(view.header.auto_layout, KIND, name)?;
            for element in elements {
                let token = e.resolver.token(element)?;
                e.w.line(&format!("include {token}")).entity(KIND, name)?;
            }
            for id in relationships {
                let relationship = model.relationship(id).ok_or(RenderError::UnknownElement {
                    kind: "relationship",
                    index: id.index(),
                })?;
                let arrow = e.arrow(relationship.from(), relationship.to(), &[])?;
                e.w.line(&format!("include {arrow}")).entity(KIND, name)?;
            }
            Ok(())
        })
    }

    pub(crate) fn filtered_view(&mut self, view: &FilteredView) -> Result<(), RenderError> {
        const KIND: &str = "filteredView";
        let name = view_name(KIND, &view.header);
        let base_key = self.views().key_of(view.base());
        if base_key.is_none() {
            log::debug!(view = name; "Base view has no key, omitting baseView");
        }

        self.block(KIND, name, KIND, |e| {
            if let Some(key) = base_key {
                e.w.line(&format!("baseView {}", quote(key))).entity(KIND, name)?;
            }
            if let Some(title) = view.title() {
                e.w.line(&format!("title {}", quote(title))).entity(KIND, name)?;
            }
            e.key_and_description(&view.header, KIND, name)?;
            for filter in view.filters() {
                e.w.line(&format!(
                    "{} {} {}",
                    filter.mode,
                    filter.filter_type,
                    quote(&filter.value)
                ))
                .entity(KIND, name)?;
            }
            e.auto_layout(view.header.auto_layout, KIND, name)
        })
    }

    fn inclusions(
        &mut self,
        inclusions: &Inclusions,
        kind: &'static str,
        name: &str,
    ) -> Result<(), RenderError> {
        if inclusions.includes_everything() {
            self.w.line("include *").entity(kind, name)?;
        } else {
            if inclusions.people() {
                self.w.line("include element.type==Person").entity(kind, name)?;
            }
            if inclusions.software_systems() {
                self.w
                    .line("include element.type==SoftwareSystem")
                    .entity(kind, name)?;
            }
        }
        for &element in inclusions.elements() {
            let token = self.resolver.token(element)?;
            self.w.line(&format!("include {token}")).entity(kind, name)?;
        }
        for expression in inclusions.expressions() {
            let expression = self.expression(expression)?;
            self.w.line(&format!("include {expression}")).entity(kind, name)?;
        }
        Ok(())
    }

    fn expression(&self, expression: &IncludeExpression) -> Result<String, RenderError> {
        let token = |id: Option<ElementId>| id.map(|id| self.resolver.token(id)).transpose();
        let rendered = match (
            token(expression.on)?,
            token(expression.from)?,
            token(expression.to)?,
        ) {
            (Some(on), _, _) => format!(
                "{}{on}{}",
                if expression.afferent { "->" } else { "" },
                if expression.efferent { "->" } else { "" },
            ),
            (None, Some(from), Some(to)) => format!("{from} -> {to}"),
            (None, Some(from), None) => format!("{from}->"),
            (None, None, Some(to)) => format!("->{to}"),
            (None, None, None) => "*".to_string(),
        };
        Ok(rendered)
    }

    fn key_and_description(
        &mut self,
        header: &ViewHeader,
        kind: &'static str,
        name: &str,
    ) -> Result<(), RenderError> {
        if let Some(key) = header.key.as_deref() {
            self.w.line(&format!("key {}", quote(key))).entity(kind, name)?;
        }
        if let Some(description) = header.description.as_deref() {
            self.w
                .line(&format!("description {}", quote(description)))
                .entity(kind, name)?;
        }
        Ok(())
    }

    fn auto_layout(
        &mut self,
        enabled: bool,
        kind: &'static str,
        name: &str,
    ) -> Result<(), RenderError> {
        if enabled {
            self.w.line("autoLayout").entity(kind, name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::model::Environment;
    use crate::renderer::{render_fragment, Fragment, RenderConfig};
    use crate::view::{FilterMode, IncludeExpression};
    use crate::workspace::Workspace;

    fn fragment(workspace: &Workspace, fragment: Fragment) -> String {
        render_fragment(workspace, fragment, &RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_system_context_single_flags() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let system = model.add_software_system("Shop", "");
        let people = views.add_system_context_view(system, "People", "");
        views[people].add_all_people().with_auto_layout(true);

        assert_eq!(
            fragment(&workspace, Fragment::View(people.into())),
            concat!(
                "systemContext shop \"People\" {\n",
                "    include element.type==Person\n",
                "    autoLayout\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_description_without_key_uses_placeholder() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let system = model.add_software_system("Shop", "");
        let view = views.add_container_view(system, "", "All containers");
        views[view].add_all_elements();

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            "container shop \"\" \"All containers\" {\n    include *\n}\n"
        );
    }

    #[test]
    fn test_container_view_expressions() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let user = model.add_person("User", "");
        let system = model.add_software_system("Shop", "");
        let api = model.add_container(system, "API");
        let db = model.add_container(system, "DB");
        let view = views.add_container_view(system, "Containers", "");
        views[view]
            .add_element(user)
            .include_expression(IncludeExpression::neighbours(api))
            .include_expression(IncludeExpression::afferent(db))
            .include_expression(IncludeExpression::relationship(user, api));

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            concat!(
                "container shop \"Containers\" {\n",
                "    include user\n",
                "    include ->api->\n",
                "    include ->db\n",
                "    include user -> api\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_component_view_keyword() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let system = model.add_software_system("Shop", "");
        let api = model.add_container(system, "API");
        let view = views.add_component_view(api, "Components", "");
        views[view].add_all_elements().with_auto_layout(true);

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            "component api \"Components\" {\n    include *\n    autoLayout\n}\n"
        );
    }

    #[test]
    fn test_dynamic_view_parallel_steps() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let user = model.add_person("User", "");
        let system = model.add_software_system("Shop", "");
        let api = model.add_container(system, "API");
        let db = model.add_container(system, "DB");
        let view = views.add_dynamic_view(Some(system.into()), "Checkout", "");
        let dynamic = &mut views[view];
        dynamic.add_step(user, api, "Submits order").with_technology("HTTPS");
        dynamic.start_parallel();
        dynamic.add_step(api, db, "Stores order");
        dynamic.add_step(api, user, "Confirms");
        dynamic.end_parallel();
        dynamic.with_auto_layout(true);

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            concat!(
                "dynamic shop \"Checkout\" {\n",
                "    user -> api \"Submits order\" \"HTTPS\"\n",
                "    {\n",
                "        {\n",
                "            api -> db \"Stores order\"\n",
                "        }\n",
                "        {\n",
                "            api -> user \"Confirms\"\n",
                "        }\n",
                "    }\n",
                "    autoLayout\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_unscoped_dynamic_view() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let a = model.add_person("A", "");
        let b = model.add_person("B", "");
        let view = views.add_dynamic_view(None, "", "");
        views[view].add_step(a, b, "");

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            "dynamic * {\n    a -> b\n}\n"
        );
    }

    #[test]
    fn test_deployment_view_lines() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let system = model.add_software_system("Shop", "");
        let web = model.add_container(system, "Web");
        let db = model.add_container(system, "Database");
        let rel = model.uses(web, db, "Reads");
        model.add_prod_node("Server", "", "");
        model.add_dev_node("Laptop", "", "");
        let view = views.add_deployment_view(
            Some(system),
            Environment::Production,
            "Live",
            "Production deployment",
        );
        views[view]
            .add_relationship(rel)
            .add_all_deployment_nodes()
            .add_all_relationships()
            .with_auto_layout(true);

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            concat!(
                "deploymentView {\n",
                "    softwareSystem shop\n",
                "    environment \"Production\"\n",
                "    key \"Live\"\n",
                "    description \"Production deployment\"\n",
                "    autoLayout\n",
                "    include server\n",
                "    include web -> database\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_deployment_view_leaves_relationships_out_by_default() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let a = model.add_person("A", "");
        let b = model.add_person("B", "");
        model.uses(a, b, "x");
        let view = views.add_deployment_view(None, Environment::Staging, "", "");
        views[view].add_element(a);

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            "deploymentView {\n    environment \"Staging\"\n    include a\n}\n"
        );
    }

    #[test]
    fn test_filtered_view_lines() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let system = model.add_software_system("Shop", "");
        let base = views.add_container_view(system, "Containers", "");
        let view = views.add_filtered_view(base, "ApiOnly", "Just the API");
        views[view]
            .with_title("API")
            .include("API")
            .exclude("Database")
            .with_type_filter(FilterMode::Include, "Container")
            .with_auto_layout(true);

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            concat!(
                "filteredView {\n",
                "    baseView \"Containers\"\n",
                "    title \"API\"\n",
                "    key \"ApiOnly\"\n",
                "    description \"Just the API\"\n",
                "    Include Tag \"API\"\n",
                "    Exclude Tag \"Database\"\n",
                "    Include Type \"Container\"\n",
                "    autoLayout\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_filtered_view_without_base_key_omits_line() {
        let mut workspace = Workspace::new("w", "");
        let (model, views) = workspace.parts_mut();
        let system = model.add_software_system("Shop", "");
        let base = views.add_system_context_view(system, "", "");
        let view = views.add_filtered_view(base, "", "");
        views[view].exclude("External");

        assert_eq!(
            fragment(&workspace, Fragment::View(view.into())),
            "filteredView {\n    Exclude Tag \"External\"\n}\n"
        );
    }
}
