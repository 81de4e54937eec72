//! Ready-made sample workspaces
//!
//! Each function builds a complete workspace; the CLI renders them by name.

use crate::error::ModelError;
use crate::model::{tags, ElementId, Environment, Location};
use crate::style::{BorderStyle, LineStyle, Shape, Terminator};
use crate::view::FilterMode;
use crate::workspace::Workspace;

/// Names accepted by [`by_name`], in listing order
pub const NAMES: [&str; 5] = [
    "getting-started",
    "big-bank-deployment",
    "filtered-views",
    "advanced-styling",
    "microservices",
];

/// Build the demo registered under `name`
pub fn by_name(name: &str) -> Option<Result<Workspace, ModelError>> {
    match name {
        "getting-started" => Some(Ok(getting_started())),
        "big-bank-deployment" => Some(Ok(big_bank_deployment())),
        "filtered-views" => Some(Ok(filtered_views())),
        "advanced-styling" => Some(Ok(advanced_styling())),
        "microservices" => Some(microservices()),
        _ => None,
    }
}

/// One person using one software system, with a system context view
pub fn getting_started() -> Workspace {
    let mut workspace = Workspace::new(
        "Getting Started",
        "This is a model of my software system.",
    );
    let (model, views) = workspace.parts_mut();

    let user = model.add_person("User", "A user of my software system.");
    let system = model.add_software_system("Software System", "My software system.");
    model.uses(user, system, "Uses");

    let context = views.add_system_context_view(
        system,
        "SystemContext",
        "An example of a System Context diagram.",
    );
    views[context]
        .add_all_software_systems()
        .add_all_people()
        .with_auto_layout(true);

    let styles = views.styles_mut();
    styles
        .add_element_style(tags::SOFTWARE_SYSTEM)
        .with_background("#1168bd")
        .with_color("#ffffff");
    styles
        .add_element_style(tags::PERSON)
        .with_background("#08427b")
        .with_color("#ffffff")
        .with_shape(Shape::Person);

    workspace
}

/// Online banking system deployed across a cloud region and a data centre
pub fn big_bank_deployment() -> Workspace {
    let mut workspace = Workspace::new(
        "Deployment Example",
        "Example showing deployment nodes and infrastructure",
    );
    let (model, views) = workspace.parts_mut();

    model.set_enterprise("ACME Financial");
    let customer = model.add_person("Customer", "A customer of ACME Financial");
    let support = model.add_person("Customer Support", "Customer support staff");
    let banking = model.add_software_system(
        "Online Banking System",
        "Allows customers to view accounts and make transactions",
    );
    let mainframe_system =
        model.add_software_system("Mainframe Banking System", "Stores core banking information");
    model.add_to_enterprise(support);
    model.add_to_enterprise(banking);
    model.add_to_enterprise(mainframe_system);

    model.uses(customer, banking, "Uses");
    model.uses(support, banking, "Uses to support customers");
    model.uses(banking, mainframe_system, "Gets account information from");

    let web_app = model.add_container(banking, "Web Application");
    model[web_app]
        .with_description("Provides online banking functionality to customers")
        .with_technology("Java and Spring MVC");
    let api_app = model.add_container(banking, "API Application");
    model[api_app]
        .with_description("Provides API for mobile and web applications")
        .with_technology("Java and Spring Boot");
    let database = model.add_container(banking, "Database");
    model[database]
        .with_description("Stores user data, sessions, etc.")
        .with_technology("Oracle")
        .with_tag(tags::DATABASE);

    let rel = model.uses(web_app, api_app, "Makes API calls to");
    model[rel].with_technology("HTTPS");
    let rel = model.uses(api_app, database, "Reads from and writes to");
    model[rel].with_technology("JDBC");
    let rel = model.uses(api_app, mainframe_system, "Makes API calls to");
    model[rel].with_technology("WebSphere MQ");

    let aws = model.add_prod_node("AWS", "Amazon Web Services", "Cloud Infrastructure");
    model[aws].with_location(Location::External);
    let web_tier = model.add_child_node(
        aws,
        "Web Tier",
        "Web application tier",
        "Amazon EC2 Auto Scaling Group",
    );
    let web_server_1 = model.add_child_node(
        web_tier,
        "Web Server 1",
        "Web server instance",
        "Amazon EC2",
    );
    let web_server_2 = model.add_child_node(
        web_tier,
        "Web Server 2",
        "Web server instance",
        "Amazon EC2",
    );
    let app_tier = model.add_child_node(
        aws,
        "App Tier",
        "Application tier",
        "Amazon EC2 Auto Scaling Group",
    );
    let app_server_1 =
        model.add_child_node(app_tier, "App Server 1", "Application server instance", "Amazon EC2");
    let app_server_2 =
        model.add_child_node(app_tier, "App Server 2", "Application server instance", "Amazon EC2");
    let db_tier = model.add_child_node(aws, "Database Tier", "Database tier", "Amazon RDS");
    let primary_db = model.add_child_node(db_tier, "Primary DB", "Primary database", "Oracle RDS");
    let standby_db = model.add_child_node(db_tier, "Standby DB", "Standby database", "Oracle RDS");

    let load_balancer = model.add_infrastructure_node(aws, "Load Balancer");
    model[load_balancer]
        .with_description("Elastic Load Balancer")
        .with_technology("AWS ELB");
    let internal_lb = model.add_infrastructure_node(app_tier, "Internal Load Balancer");
    model[internal_lb]
        .with_description("Internal load balancer")
        .with_technology("AWS ELB");

    let web_1 = model.add_container_instance(web_server_1, web_app);
    let web_2 = model.add_container_instance(web_server_2, web_app);
    let api_1 = model.add_container_instance(app_server_1, api_app);
    let api_2 = model.add_container_instance(app_server_2, api_app);
    let db = model.add_container_instance(primary_db, database);
    model[web_1].add_health_check("Web Status", "https://web1.example.com/health");
    model[web_2].add_health_check("Web Status", "https://web2.example.com/health");
    model[api_1].add_health_check("API Status", "https://api1.example.com/health");
    model[api_2].add_health_check("API Status", "https://api2.example.com/health");
    model[db]
        .add_health_check("DB Status", "https://db.example.com/health")
        .with_interval(30)
        .with_timeout(500);

    let on_premises = model.add_prod_node(
        "On-Premises",
        "On-premises infrastructure",
        "Data Center",
    );
    let mainframe = model.add_child_node(on_premises, "Mainframe", "Mainframe system", "IBM z/OS");

    let routes: [(ElementId, ElementId, &str, &str); 11] = [
        (load_balancer.into(), web_server_1.into(), "Routes requests to", "HTTPS"),
        (load_balancer.into(), web_server_2.into(), "Routes requests to", "HTTPS"),
        (web_1.into(), internal_lb.into(), "Makes API calls to", "HTTPS"),
        (web_2.into(), internal_lb.into(), "Makes API calls to", "HTTPS"),
        (internal_lb.into(), app_server_1.into(), "Routes requests to", "HTTPS"),
        (internal_lb.into(), app_server_2.into(), "Routes requests to", "HTTPS"),
        (api_1.into(), db.into(), "Reads from and writes to", "JDBC"),
        (api_2.into(), db.into(), "Reads from and writes to", "JDBC"),
        (primary_db.into(), standby_db.into(), "Replicates data to", "Oracle Data Guard"),
        (api_1.into(), mainframe.into(), "Makes API calls to", "WebSphere MQ"),
        (api_2.into(), mainframe.into(), "Makes API calls to", "WebSphere MQ"),
    ];
    for (from, to, description, technology) in routes {
        let rel = model.uses(from, to, description);
        model[rel].with_technology(technology);
    }

    let context = views.add_system_context_view(
        banking,
        "SystemContext",
        "System Context diagram for the Online Banking System",
    );
    views[context].add_all_elements().with_auto_layout(true);

    let containers = views.add_container_view(
        banking,
        "Containers",
        "Container diagram for the Online Banking System",
    );
    views[containers]
        .add_all_people()
        .add_element(web_app)
        .add_element(api_app)
        .add_element(database)
        .add_element(mainframe_system)
        .with_auto_layout(true);

    let deployment = views.add_deployment_view(
        Some(banking),
        Environment::Production,
        "ProductionDeployment",
        "Production deployment diagram for the Online Banking System",
    );
    views[deployment]
        .add_element(aws)
        .add_element(on_premises)
        .add_all_relationships()
        .with_auto_layout(true);

    let styles = views.styles_mut();
    for (tag, background, color) in [
        (tags::PERSON, "#08427b", "#ffffff"),
        (tags::SOFTWARE_SYSTEM, "#1168bd", "#ffffff"),
        (tags::CONTAINER, "#438dd5", "#ffffff"),
        (tags::DEPLOYMENT_NODE, "#999999", "#ffffff"),
        (tags::INFRASTRUCTURE_NODE, "#85bbf0", "#000000"),
    ] {
        styles
            .add_element_style(tag)
            .with_background(background)
            .with_color(color);
    }
    styles.add_element_style(tags::DATABASE).with_shape(Shape::DATABASE);

    workspace
}

/// One system context view sliced four ways by tag
pub fn filtered_views() -> Workspace {
    let mut workspace = Workspace::new(
        "Filtered Views Example",
        "This is an example of filtered views in Structurizr",
    );
    let (model, views) = workspace.parts_mut();

    model.set_enterprise("Example Corp");

    let mut person = |name: &str, description: &str, person_tags: [&str; 2]| {
        let id = model.add_person(name, description);
        for tag in person_tags {
            model[id].with_tag(tag);
        }
        id
    };
    let customer_a = person("Customer A", "A premium customer", ["Customer", "Premium"]);
    let customer_b = person("Customer B", "A regular customer", ["Customer", "Regular"]);
    let administrator = person("Administrator", "System administrator", ["Staff", "Admin"]);
    let support = person("Support Staff", "Customer support", ["Staff", "Support"]);

    let mut system = |name: &str, description: &str, system_tags: &[&str]| {
        let id = model.add_software_system(name, description);
        for &tag in system_tags {
            model[id].with_tag(tag);
        }
        id
    };
    let web_app = system(
        "Web Application",
        "The main web application",
        &[tags::INTERNAL, "WebApp"],
    );
    let customer_db = system(
        "Customer Database",
        "Stores customer information",
        &[tags::INTERNAL, tags::DATABASE, "Critical"],
    );
    let reporting = system(
        "Reporting System",
        "Generates business reports",
        &[tags::INTERNAL, "Reporting"],
    );
    let admin_portal = system(
        "Admin Portal",
        "Admin management interface",
        &[tags::INTERNAL, "AdminTool"],
    );
    let payments = system("Payment Provider", "Processes payments", &[tags::EXTERNAL, "Payment"]);
    let email = system(
        "Email System",
        "Sends emails to customers",
        &[tags::EXTERNAL, "Communication"],
    );
    let monitoring = system(
        "Monitoring System",
        "Monitors system health",
        &[tags::EXTERNAL, "Monitoring"],
    );

    for id in [administrator, support] {
        model.add_to_enterprise(id);
    }
    for id in [web_app, customer_db, reporting, admin_portal] {
        model.add_to_enterprise(id);
    }

    model.uses(customer_a, web_app, "Uses");
    model.uses(customer_b, web_app, "Uses");
    model.uses(administrator, admin_portal, "Manages system using");
    model.uses(support, admin_portal, "Views customer info using");
    model.uses(web_app, customer_db, "Reads from and writes to");
    model.uses(web_app, payments, "Makes payments using");
    model.uses(web_app, email, "Sends emails using");
    model.uses(admin_portal, customer_db, "Reads from");
    model.uses(admin_portal, reporting, "Generates reports using");
    model.uses(reporting, customer_db, "Reads from");
    model.uses(monitoring, web_app, "Monitors");
    model.uses(monitoring, customer_db, "Monitors");

    let context = views.add_system_context_view(
        web_app,
        "SystemContext",
        "The system context diagram",
    );
    views[context].add_all_elements().with_auto_layout(true);

    let customer_view = views.add_filtered_view(
        context,
        "CustomerView",
        "Shows customer interaction",
    );
    views[customer_view]
        .include("Customer")
        .include("WebApp")
        .include("Payment")
        .exclude("Admin")
        .exclude("Monitoring")
        .exclude("Reporting")
        .with_auto_layout(true);

    let admin_view = views.add_filtered_view(context, "AdminView", "Shows admin capabilities");
    views[admin_view]
        .include("Admin")
        .include("Staff")
        .include("AdminTool")
        .include("Reporting")
        .exclude("Customer")
        .exclude("Payment")
        .with_auto_layout(true);

    let critical_view = views.add_filtered_view(
        context,
        "CriticalView",
        "Shows critical systems only",
    );
    views[critical_view]
        .include("Critical")
        .include("WebApp")
        .with_auto_layout(true);

    let external_view = views.add_filtered_view(
        context,
        "ExternalView",
        "Shows only external integrations",
    );
    views[external_view]
        .include(tags::EXTERNAL)
        .include("WebApp")
        .with_type_filter(FilterMode::Exclude, "Person")
        .with_auto_layout(true);

    let styles = views.styles_mut();
    styles
        .add_element_style(tags::PERSON)
        .with_shape(Shape::Person)
        .with_background("#08427B")
        .with_color("#ffffff");
    styles
        .add_element_style(tags::SOFTWARE_SYSTEM)
        .with_shape(Shape::RoundedBox)
        .with_background("#1168BD")
        .with_color("#ffffff");
    styles.add_element_style("Customer").with_background("#3498DB");
    styles
        .add_element_style("Premium")
        .with_background("#2E86C1")
        .with_font_style("bold");
    styles.add_element_style("Regular").with_background("#5DADE2");
    styles.add_element_style("Staff").with_background("#16A085");
    styles
        .add_element_style(tags::DATABASE)
        .with_shape(Shape::Cylinder)
        .with_background("#9B59B6");
    styles.add_element_style("AdminTool").with_background("#2C3E50");
    styles
        .add_element_style("Critical")
        .with_border(4)
        .with_border_style(BorderStyle::Solid)
        .with_background("#E74C3C");
    styles
        .add_element_style(tags::EXTERNAL)
        .with_background("#95A5A6")
        .with_font_style("italic");

    workspace
}

/// Every element and relationship style attribute in use
pub fn advanced_styling() -> Workspace {
    let mut workspace = Workspace::new(
        "Advanced Styling Example",
        "This is an example of advanced element and relationship styling in Structurizr",
    );
    let (model, views) = workspace.parts_mut();

    let user = model.add_person("User", "A user of the system");
    model[user].with_tag(tags::EXTERNAL);
    let web_app = model.add_software_system("Web Application", "The main web application");
    model[web_app].with_tag("WebApp");
    let database = model.add_software_system("Database", "The primary database");
    model[database].with_tag(tags::DATABASE);
    let cache = model.add_software_system("Cache", "Redis cache");
    model[cache].with_tag("Cache");
    let messaging = model.add_software_system("Messaging", "Kafka messaging platform");
    model[messaging].with_tag(tags::QUEUE);
    let api = model.add_software_system("API", "External REST API");
    model[api].with_tag("API");

    model.uses(user, web_app, "Uses");
    let rel = model.uses(web_app, database, "Reads from and writes to");
    model[rel].synchronous();
    model.uses(web_app, cache, "Reads from and writes to");
    let rel = model.uses(web_app, messaging, "Publishes events to");
    model[rel].asynchronous();
    let rel = model.uses(web_app, api, "Makes API calls to");
    model[rel].synchronous();

    let context = views.add_system_context_view(web_app, "SystemContext", "System Context diagram");
    views[context].add_all_elements().with_auto_layout(true);

    let styles = views.styles_mut();
    styles
        .add_element_style(tags::PERSON)
        .with_shape(Shape::Person)
        .with_background("#08427B")
        .with_color("#ffffff")
        .with_font_family("Arial")
        .with_font_size(24)
        .with_border(20)
        .with_shadow(true);
    styles
        .add_element_style(tags::SOFTWARE_SYSTEM)
        .with_shape(Shape::RoundedBox)
        .with_background("#1168BD")
        .with_color("#ffffff");
    styles
        .add_element_style(tags::DATABASE)
        .with_shape(Shape::Cylinder)
        .with_background("#1168BD")
        .with_color("#ffffff");
    styles
        .add_element_style("WebApp")
        .with_background("#62A420")
        .with_stroke_width(2)
        .with_border_style(BorderStyle::Dashed);
    styles
        .add_element_style("API")
        .with_background("#85BBF0")
        .with_border(4)
        .with_shape(Shape::Hexagon);
    styles
        .add_element_style("Cache")
        .with_background("#D4A017")
        .with_rotation(15);
    styles
        .add_element_style(tags::QUEUE)
        .with_background("#E62D2D")
        .with_shape(Shape::QUEUE);
    styles
        .add_element_style(tags::EXTERNAL)
        .with_background("#999999")
        .with_font_style("italic");

    styles
        .add_relationship_style(tags::SYNCHRONOUS)
        .with_color("#289CE1")
        .with_font_color("#289CE1")
        .with_font_size(12)
        .with_thickness(2)
        .with_line_style(LineStyle::Solid)
        .with_direct_routing();
    styles
        .add_relationship_style(tags::ASYNCHRONOUS)
        .with_color("#E62D2D")
        .with_font_color("#E62D2D")
        .with_font_size(12)
        .with_thickness(2)
        .with_dashed()
        .with_curved_routing();
    styles
        .add_relationship_style("Cache")
        .with_color("#D4A017")
        .with_font_color("#D4A017")
        .with_thickness(2)
        .with_dotted()
        .with_end_terminator(Terminator::Arrow);
    styles
        .add_relationship_style(tags::DATABASE)
        .with_color("#1168BD")
        .with_thickness(2)
        .with_orthogonal_routing();

    workspace
}

/// Services talking over a message bus, with a dynamic view of one update
///
/// Built partly from detached deployment nodes, so assembling it can fail
/// like any other use of [`crate::model::Model::add_child`].
pub fn microservices() -> Result<Workspace, ModelError> {
    const MICROSERVICE: &str = "Microservice";
    const MESSAGE_BUS: &str = "Message Bus";

    let mut workspace = Workspace::new(
        "Microservices example",
        "An example of a microservices architecture, which includes asynchronous and parallel behaviour.",
    );
    let (model, views) = workspace.parts_mut();

    let customer = model.add_person("Customer", "A customer");
    let system = model.add_software_system("Customer Information System", "Stores information");

    let mut container = |name: &str, description: &str, technology: &str, tag: &str| {
        let id = model.add_container(system, name);
        model[id]
            .with_description(description)
            .with_technology(technology)
            .with_tag(tag);
        id
    };
    let application = container(
        "Customer Application",
        "Allows customers to manage their profile.",
        "Angular",
        tags::CONTAINER,
    );
    let customer_service = container(
        "Customer Service",
        "The point of access for customer information.",
        "Java and Spring Boot",
        MICROSERVICE,
    );
    let customer_db = container(
        "Customer Database",
        "Stores customer information.",
        "Oracle 12c",
        tags::DATABASE,
    );
    let reporting_service = container(
        "Reporting Service",
        "Creates normalised data for reporting purposes.",
        "Ruby",
        MICROSERVICE,
    );
    let reporting_db = container(
        "Reporting Database",
        "Stores a normalised version of all business data for ad hoc reporting purposes.",
        "MySQL",
        tags::DATABASE,
    );
    let audit_service = container(
        "Audit Service",
        "Provides organisation-wide auditing facilities.",
        "C# .NET",
        MICROSERVICE,
    );
    let audit_store = container(
        "Audit Store",
        "Stores information about events that have happened.",
        "Event Store",
        tags::DATABASE,
    );
    let bus = container(
        "Message Bus",
        "Transport for business events.",
        "RabbitMQ",
        MESSAGE_BUS,
    );

    model.uses(customer, application, "Uses");
    let rel = model.uses(application, customer_service, "Updates customer information using");
    model[rel].with_technology("JSON/HTTPS").synchronous();
    let rel = model.uses(customer_service, bus, "Sends customer update events to");
    model[rel].asynchronous();
    let rel = model.uses(customer_service, customer_db, "Stores data in");
    model[rel].with_technology("JDBC").synchronous();
    let rel = model.uses(customer_service, application, "Sends events to");
    model[rel].with_technology("WebSocket").asynchronous();
    let rel = model.uses(bus, reporting_service, "Sends customer update events to");
    model[rel].asynchronous();
    let rel = model.uses(bus, audit_service, "Sends customer update events to");
    model[rel].asynchronous();
    let rel = model.uses(reporting_service, reporting_db, "Stores data in");
    model[rel].synchronous();
    let rel = model.uses(audit_service, audit_store, "Stores events in");
    model[rel].synchronous();

    let production = model.add_deployment_environment("Production");
    let region = model.create_deployment_node(
        "EU West",
        "",
        "AWS region",
        Environment::Development,
    );
    let kubernetes = model.create_deployment_node(
        "Cluster",
        "",
        "Kubernetes",
        Environment::Development,
    );
    let database_host = model.create_deployment_node(
        "Database Host",
        "",
        "Amazon RDS",
        Environment::Development,
    );
    model.set_environment(region, production);
    model.add_child(region, kubernetes)?;
    model.add_child(region, database_host)?;
    let root = model.add_deployment_node("AWS", "", "", Environment::Production);
    model.add_child(root, region)?;
    for service in [customer_service, reporting_service, audit_service] {
        let instance = model.add_container_instance(kubernetes, service);
        model[instance].with_instance_id(1);
    }
    for store in [customer_db, reporting_db, audit_store] {
        model.add_container_instance(database_host, store);
    }

    let containers = views.add_container_view(system, "Containers", "");
    views[containers].add_all_elements().with_auto_layout(true);

    let dynamic = views.add_dynamic_view(
        Some(system.into()),
        "CustomerUpdateEvent",
        "This diagram shows what happens when a customer updates their details.",
    );
    let steps = &mut views[dynamic];
    steps.add_step(customer, application, "Updates their details using");
    steps
        .add_step(application, customer_service, "Updates customer information using")
        .with_technology("JSON/HTTPS");
    steps.add_step(customer_service, customer_db, "Stores data in");
    steps.add_step(customer_service, bus, "Sends customer update events to");
    steps.start_parallel();
    steps.add_step(bus, reporting_service, "Sends customer update events to");
    steps.add_step(bus, audit_service, "Sends customer update events to");
    steps.end_parallel();
    steps.add_step(customer_service, application, "Confirms update to");
    steps.with_auto_layout(true);

    let deployment = views.add_deployment_view(Some(system), Environment::Production, "Live", "");
    views[deployment]
        .add_all_deployment_nodes()
        .add_all_relationships()
        .with_auto_layout(true);

    let styles = views.styles_mut();
    styles
        .add_element_style(tags::ELEMENT)
        .with_color("#000000");
    styles
        .add_element_style(tags::PERSON)
        .with_background("#ffcc33")
        .with_shape(Shape::Person);
    styles
        .add_element_style(tags::DATABASE)
        .with_shape(Shape::DATABASE);
    styles
        .add_element_style(MICROSERVICE)
        .with_shape(Shape::Hexagon);
    styles
        .add_element_style(MESSAGE_BUS)
        .with_width(1600)
        .with_shape(Shape::QUEUE);
    styles
        .add_relationship_style(tags::ASYNCHRONOUS)
        .with_dashed();
    styles
        .add_relationship_style(tags::SYNCHRONOUS)
        .with_arrow();

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_builds() {
        for name in NAMES {
            let workspace = by_name(name).expect("registered").expect("builds");
            assert!(workspace.name().is_some(), "{name} has a name");
        }
        assert!(by_name("nope").is_none());
    }

    #[test]
    fn test_microservices_deployment_is_production() {
        let workspace = microservices().unwrap();
        let model = workspace.model();
        let nodes = model.deployment_nodes_in(&Environment::Production);
        assert_eq!(nodes.len(), 1);
        let aws = model.deployment_node(nodes[0]).unwrap();
        let region = model.deployment_node(aws.children()[0]).unwrap();
        for &child in region.children() {
            assert_eq!(
                model.deployment_node(child).unwrap().environment(),
                &Environment::Production
            );
        }
    }
}
