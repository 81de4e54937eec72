//! Integration tests for the views block

use pretty_assertions::assert_eq;
use rustructurizr::view::IncludeExpression;
use rustructurizr::{demos, render, Environment, RenderConfig, Workspace};

/// The block starting at `header`, up to and including its closing brace
fn block<'a>(dsl: &'a str, header: &str) -> &'a str {
    let start = dsl.find(header).expect("header present");
    let indent = dsl[..start].rsplit('\n').next().unwrap_or_default();
    let close = format!("\n{indent}}}\n");
    let end = dsl[start..].find(&close).expect("block closed") + start + close.len();
    &dsl[start..end]
}

#[test]
fn test_filtered_view_lines_keep_call_order() {
    let mut workspace = Workspace::new("", "");
    let (model, views) = workspace.parts_mut();
    let system = model.add_software_system("Shop", "");
    let api = model.add_container(system, "API");
    let db = model.add_container(system, "Database");
    model.uses(api, db, "Reads");
    let containers = views.add_container_view(system, "Containers", "");
    views[containers].add_all_elements();
    let filtered = views.add_filtered_view(containers, "", "");
    views[filtered].include("API").exclude("Database");

    let dsl = render(&workspace).expect("Should render");
    assert_eq!(
        block(&dsl, "filteredView {"),
        concat!(
            "filteredView {\n",
            "            baseView \"Containers\"\n",
            "            Include Tag \"API\"\n",
            "            Exclude Tag \"Database\"\n",
            "        }\n",
        )
    );
}

#[test]
fn test_view_kinds_render_in_fixed_order() {
    let mut workspace = Workspace::new("", "");
    let (model, views) = workspace.parts_mut();
    let system = model.add_software_system("Shop", "");
    let api = model.add_container(system, "API");

    // created in reverse of output order
    views.add_deployment_view(None, Environment::Production, "D", "");
    views.add_dynamic_view(None, "Dyn", "");
    views.add_component_view(api, "Comp", "");
    views.add_container_view(system, "Cont", "");
    let context = views.add_system_context_view(system, "Ctx", "");
    views.add_filtered_view(context, "F", "");

    let dsl = render(&workspace).expect("Should render");
    let keys: Vec<usize> = [
        "systemContext shop",
        "container shop",
        "component api",
        "dynamic *",
        "deploymentView",
        "filteredView",
    ]
    .iter()
    .map(|header| dsl.find(header).expect("view present"))
    .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn test_system_context_type_filters() {
    let mut workspace = Workspace::new("", "");
    let (model, views) = workspace.parts_mut();
    let user = model.add_person("User", "");
    let system = model.add_software_system("Shop", "");
    let other = model.add_software_system("Warehouse", "");
    model.uses(user, system, "Uses");
    let people = views.add_system_context_view(system, "People", "");
    views[people].add_all_people().add_element(other);
    let systems = views.add_system_context_view(system, "Systems", "");
    views[systems]
        .add_all_software_systems()
        .include_expression(IncludeExpression::efferent(user));

    let dsl = render(&workspace).expect("Should render");
    assert_eq!(
        block(&dsl, "systemContext shop \"People\""),
        concat!(
            "systemContext shop \"People\" {\n",
            "            include element.type==Person\n",
            "            include warehouse\n",
            "        }\n",
        )
    );
    assert_eq!(
        block(&dsl, "systemContext shop \"Systems\""),
        concat!(
            "systemContext shop \"Systems\" {\n",
            "            include element.type==SoftwareSystem\n",
            "            include user->\n",
            "        }\n",
        )
    );
}

#[test]
fn test_filtered_views_demo() {
    let dsl = render(&demos::filtered_views()).expect("Should render");
    assert_eq!(dsl.matches("filteredView {").count(), 4);
    assert_eq!(dsl.matches("baseView \"SystemContext\"").count(), 4);
    assert_eq!(
        block(&dsl, "filteredView {"),
        concat!(
            "filteredView {\n",
            "            baseView \"SystemContext\"\n",
            "            key \"CustomerView\"\n",
            "            description \"Shows customer interaction\"\n",
            "            Include Tag \"Customer\"\n",
            "            Include Tag \"WebApp\"\n",
            "            Include Tag \"Payment\"\n",
            "            Exclude Tag \"Admin\"\n",
            "            Exclude Tag \"Monitoring\"\n",
            "            Exclude Tag \"Reporting\"\n",
            "            autoLayout\n",
            "        }\n",
        )
    );
    assert!(dsl.contains("            Exclude Type \"Person\"\n"));
}

#[test]
fn test_microservices_dynamic_view() {
    let workspace = demos::microservices().expect("Should build");
    let dsl = render(&workspace).expect("Should render");
    assert_eq!(
        block(&dsl, "dynamic customerInformationSystem"),
        concat!(
            "dynamic customerInformationSystem \"CustomerUpdateEvent\" \"This diagram shows what happens when a customer updates their details.\" {\n",
            "            customer -> customerApplication \"Updates their details using\"\n",
            "            customerApplication -> customerService \"Updates customer information using\" \"JSON/HTTPS\"\n",
            "            customerService -> customerDatabase \"Stores data in\"\n",
            "            customerService -> messageBus \"Sends customer update events to\"\n",
            "            {\n",
            "                {\n",
            "                    messageBus -> reportingService \"Sends customer update events to\"\n",
            "                }\n",
            "                {\n",
            "                    messageBus -> auditService \"Sends customer update events to\"\n",
            "                }\n",
            "            }\n",
            "            customerService -> customerApplication \"Confirms update to\"\n",
            "            autoLayout\n",
            "        }\n",
        )
    );
}

#[test]
fn test_section_spacing_separates_views() {
    let workspace = demos::getting_started();
    let spaced = rustructurizr::render_with_config(
        &workspace,
        &RenderConfig::default().with_section_spacing(true),
    )
    .expect("Should render");
    assert!(spaced.contains("            autoLayout\n        }\n\n        styles {\n"));
}
