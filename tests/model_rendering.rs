//! Integration tests for rendering the model block

use pretty_assertions::assert_eq;
use rustructurizr::model::tags;
use rustructurizr::{demos, render, render_fragment, Fragment, RenderConfig, RenderError, Workspace};

#[test]
fn test_getting_started_document() {
    let dsl = render(&demos::getting_started()).expect("Should render");
    insta::assert_snapshot!(dsl, @r###"
    workspace "Getting Started" "This is a model of my software system." {
        model {
            user = person "User" "A user of my software system."
            softwareSystem = softwareSystem "Software System" "My software system."
            user -> softwareSystem "Uses"
        }
        views {
            systemContext softwareSystem "SystemContext" "An example of a System Context diagram." {
                include *
                autoLayout
            }
            styles {
                element "Software System" {
                    background "#1168bd"
                    color "#ffffff"
                }
                element "Person" {
                    shape Person
                    background "#08427b"
                    color "#ffffff"
                }
            }
        }
    }
    "###);
}

#[test]
fn test_containers_keep_insertion_order() {
    let mut workspace = Workspace::new("Shop", "");
    let model = workspace.model_mut();
    let system = model.add_software_system("Shop", "Sells things");
    let web = model.add_container(system, "Web");
    model[web].with_technology("Rust");
    let db = model.add_container(system, "Database");
    model[db].with_tag(tags::DATABASE);

    let dsl = render_fragment(
        &workspace,
        Fragment::Element(system.into()),
        &RenderConfig::default(),
    )
    .expect("Should render");
    assert_eq!(
        dsl,
        concat!(
            "shop = softwareSystem \"Shop\" \"Sells things\" {\n",
            "    web = container \"Web\" \"\" \"Rust\"\n",
            "    database = container \"Database\" {\n",
            "        tags \"Database\"\n",
            "    }\n",
            "}\n",
        )
    );
}

#[test]
fn test_relationship_lines_follow_model_order() {
    let mut workspace = Workspace::new("", "");
    let model = workspace.model_mut();
    let customer = model.add_person("Customer", "");
    let shop = model.add_software_system("Shop", "");
    let mail = model.add_software_system("E-mail System", "");
    let order = model.uses(customer, shop, "Places orders");
    model[order].with_technology("HTTPS").synchronous();
    let notify = model.uses(shop, mail, "Sends e-mail using");
    model[notify].asynchronous();

    let dsl = render(&workspace).expect("Should render");
    let lines: Vec<&str> = dsl.lines().filter(|l| l.contains("->")).map(str::trim).collect();
    assert_eq!(
        lines,
        vec![
            "customer -> shop \"Places orders\" \"HTTPS\" \"synchronous\"",
            "shop -> eMailSystem \"Sends e-mail using\" \"\" \"asynchronous\"",
        ]
    );
}

#[test]
fn test_colliding_names_render_unchanged() {
    let mut workspace = Workspace::new("", "");
    let model = workspace.model_mut();
    let a = model.add_software_system("Web App", "");
    let b = model.add_software_system("WebApp", "");
    model.uses(a, b, "");

    let dsl = render(&workspace).expect("Should render");
    assert!(dsl.contains("webApp = softwareSystem \"Web App\"\n"));
    assert!(dsl.contains("webApp = softwareSystem \"WebApp\"\n"));
    assert!(dsl.contains("webApp -> webApp\n"));
}

#[test]
fn test_enterprise_groups_members() {
    let dsl = render(&demos::big_bank_deployment()).expect("Should render");
    let enterprise = dsl
        .split("enterprise \"ACME Financial\" {\n")
        .nth(1)
        .expect("enterprise block");
    let members: Vec<&str> = enterprise
        .lines()
        .take_while(|l| *l != "        }")
        .filter(|l| l.starts_with("            ") && !l.starts_with("             "))
        .filter(|l| l.contains(" = "))
        .filter_map(|l| l.trim().split(" = ").next())
        .collect();
    assert_eq!(
        members,
        vec!["customerSupport", "onlineBankingSystem", "mainframeBankingSystem"]
    );
    // non-members stay outside the enterprise, before it
    let customer = dsl.find("customer = person").expect("customer");
    let block = dsl.find("enterprise \"ACME Financial\"").expect("enterprise");
    assert!(customer < block);
}

#[test]
fn test_enterprise_member_added_twice_renders_once() {
    let mut workspace = Workspace::new("", "");
    let model = workspace.model_mut();
    let user = model.add_person("User", "");
    model.set_enterprise("Acme");
    assert!(model.add_to_enterprise(user));
    assert!(model.add_to_enterprise(user));
    assert_eq!(workspace.model().enterprise().expect("enterprise").members().len(), 1);

    let dsl = render(&workspace).expect("Should render");
    assert_eq!(dsl.matches("user = person \"User\"").count(), 1);
}

#[test]
fn test_model_properties_come_first() {
    let mut workspace = Workspace::new("", "");
    let model = workspace.model_mut();
    model.with_property("owner", "Platform Team");
    model.add_person("User", "");

    assert_eq!(
        render(&workspace).expect("Should render"),
        concat!(
            "workspace {\n",
            "    model {\n",
            "        properties {\n",
            "            owner \"Platform Team\"\n",
            "        }\n",
            "        user = person \"User\"\n",
            "    }\n",
            "    views {\n",
            "    }\n",
            "}\n",
        )
    );
}

#[test]
fn test_unknown_relationship_fragment() {
    let mut other = Workspace::new("", "");
    let a = other.model_mut().add_person("A", "");
    let rel = other.model_mut().add_relationship(a, a);

    let err = render_fragment(
        &Workspace::new("", ""),
        Fragment::Relationship(rel),
        &RenderConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, RenderError::UnknownElement { kind: "relationship", index: 0 }));
}
