//! Deployment environments, nodes, infrastructure and container instances

use super::attributes::{write_properties, write_tags};
use super::emitter::Emitter;
use super::identifier::unknown;
use super::writer::{element_header, quote};
use crate::error::{RenderError, WriteContext};
use crate::model::{
    ContainerInstanceId, DeploymentNodeId, Environment, HealthCheck, InfrastructureNodeId, Named,
};

const DEPLOYMENT_ENVIRONMENT: &str = "deployment environment";
const HEALTH_CHECK: &str = "health check";

impl Emitter<'_, '_> {
    /// Top-level nodes grouped by environment, in order of first appearance
    pub(crate) fn deployment_environments(&mut self) -> Result<(), RenderError> {
        let model = self.model();
        let mut groups: Vec<(&Environment, Vec<DeploymentNodeId>)> = Vec::new();
        for &id in model.top_level_deployment_nodes() {
            let node = model.deployment_node(id).ok_or_else(|| unknown(id.into()))?;
            match groups.iter_mut().find(|(env, _)| *env == node.environment()) {
                Some((_, ids)) => ids.push(id),
                None => groups.push((node.environment(), vec![id])),
            }
        }

        for (environment, ids) in groups {
            log::debug!(environment = environment.as_str(), nodes = ids.len(); "Emitting deployment environment");
            let header = format!("deploymentEnvironment {}", quote(environment.as_str()));
            self.block(DEPLOYMENT_ENVIRONMENT, environment.as_str(), &header, |e| {
                for id in ids {
                    e.deployment_node(id)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }

    pub(crate) fn deployment_node(&mut self, id: DeploymentNodeId) -> Result<(), RenderError> {
        let node = self
            .model()
            .deployment_node(id)
            .ok_or_else(|| unknown(id.into()))?;
        let token = self.resolver.token(id.into())?;
        let header = element_header(
            &token,
            "deploymentNode",
            node.name(),
            &[node.description(), node.technology()],
        );
        log::trace!(token = token.as_str(), children = node.children().len(); "Emitting deployment node");

        let name = node.name();
        self.entity_block(DeploymentNodeId::KIND, name, &header, node.has_body(), |e| {
            write_tags(&mut e.w, node.tags()).entity(DeploymentNodeId::KIND, name)?;
            write_properties(&mut e.w, node.properties()).entity(DeploymentNodeId::KIND, name)?;
            for &child in node.children() {
                e.deployment_node(child)?;
            }
            for &infrastructure in node.infrastructure_nodes() {
                e.infrastructure_node(infrastructure)?;
            }
            for &instance in node.container_instances() {
                e.container_instance(instance)?;
            }
            Ok(())
        })
    }

    pub(crate) fn infrastructure_node(
        &mut self,
        id: InfrastructureNodeId,
    ) -> Result<(), RenderError> {
        let node = self
            .model()
            .infrastructure_node(id)
            .ok_or_else(|| unknown(id.into()))?;
        let token = self.resolver.token(id.into())?;
        let header = element_header(
            &token,
            "infrastructureNode",
            node.name(),
            &[node.description(), node.technology()],
        );

        let name = node.name();
        let has_body = !node.tags().is_empty() || !node.properties().is_empty();
        self.entity_block(InfrastructureNodeId::KIND, name, &header, has_body, |e| {
            write_tags(&mut e.w, node.tags()).entity(InfrastructureNodeId::KIND, name)?;
            write_properties(&mut e.w, node.properties()).entity(InfrastructureNodeId::KIND, name)
        })
    }

    pub(crate) fn container_instance(
        &mut self,
        id: ContainerInstanceId,
    ) -> Result<(), RenderError> {
        let model = self.model();
        let instance = model
            .container_instance(id)
            .ok_or_else(|| unknown(id.into()))?;
        let token = self.resolver.token(id.into())?;
        let container_token = self.resolver.token(instance.container().into())?;
        let header = format!("{token} = containerInstance {container_token}");

        let name = model.name_of(id.into()).unwrap_or_default();
        self.entity_block(ContainerInstanceId::KIND, name, &header, instance.has_body(), |e| {
            write_tags(&mut e.w, instance.tags()).entity(ContainerInstanceId::KIND, name)?;
            write_properties(&mut e.w, instance.properties())
                .entity(ContainerInstanceId::KIND, name)?;
            if let Some(instance_id) = instance.instance_id {
                e.w.line(&format!("instanceId {instance_id}"))
                    .entity(ContainerInstanceId::KIND, name)?;
            }
            for check in instance.health_checks() {
                e.health_check(check)?;
            }
            Ok(())
        })
    }

    /// `healthCheck "name" "url"`, with `interval` and `timeout` lines when set
    fn health_check(&mut self, check: &HealthCheck) -> Result<(), RenderError> {
        let header = format!("healthCheck {} {}", quote(check.name()), quote(check.url()));

        let name = check.name();
        self.entity_block(HEALTH_CHECK, name, &header, check.has_body(), |e| {
            if let Some(interval) = check.interval {
                e.w.line(&format!("interval {interval}")).entity(HEALTH_CHECK, name)?;
            }
            if let Some(timeout) = check.timeout {
                e.w.line(&format!("timeout {timeout}")).entity(HEALTH_CHECK, name)?;
            }
            write_properties(&mut e.w, check.properties()).entity(HEALTH_CHECK, name)
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::model::{Environment, Location};
    use crate::renderer::{render_fragment, Fragment, RenderConfig};
    use crate::workspace::Workspace;

    fn fragment(workspace: &Workspace, fragment: Fragment) -> String {
        render_fragment(workspace, fragment, &RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_bare_node_is_one_line() {
        let mut workspace = Workspace::new("w", "");
        let node = workspace
            .model_mut()
            .add_prod_node("Web Server", "", "Ubuntu 22.04");
        workspace.model_mut()[node].with_location(Location::External);
        assert_eq!(
            fragment(&workspace, Fragment::Element(node.into())),
            "webServer = deploymentNode \"Web Server\" \"\" \"Ubuntu 22.04\"\n"
        );
    }

    #[test]
    fn test_node_children_order() {
        let mut workspace = Workspace::new("w", "");
        let model = workspace.model_mut();
        let system = model.add_software_system("Shop", "");
        let web = model.add_container(system, "Web");
        let region = model.add_prod_node("Region", "", "AWS");
        model[region].with_tag("Cloud").with_property("zone", "eu-west-1");
        let instance = model.add_container_instance(region, web);
        let lb = model.add_infrastructure_node(region, "Load Balancer");
        model[lb].with_technology("ELB");
        model.add_child_node(region, "Host", "", "EC2");
        model[instance].with_instance_id(2);

        assert_eq!(
            fragment(&workspace, Fragment::Element(region.into())),
            concat!(
                "region = deploymentNode \"Region\" \"\" \"AWS\" {\n",
                "    tags \"Cloud\"\n",
                "    properties {\n",
                "        zone \"eu-west-1\"\n",
                "    }\n",
                "    host = deploymentNode \"Host\" \"\" \"EC2\"\n",
                "    loadBalancer = infrastructureNode \"Load Balancer\" \"\" \"ELB\"\n",
                "    regionWeb2 = containerInstance web {\n",
                "        instanceId 2\n",
                "    }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_health_checks() {
        let mut workspace = Workspace::new("w", "");
        let model = workspace.model_mut();
        let system = model.add_software_system("Shop", "");
        let api = model.add_container(system, "API");
        let node = model.add_deployment_node("Pod", "", "", Environment::Staging);
        let instance = model.add_container_instance(node, api);
        model[instance].add_health_check("Ping", "https://api/ping");
        model[instance]
            .add_health_check("Deep", "https://api/health")
            .with_timeout(250)
            .with_property("owner", "sre");

        assert_eq!(
            fragment(&workspace, Fragment::Element(instance.into())),
            concat!(
                "podApi1 = containerInstance api {\n",
                "    healthCheck \"Ping\" \"https://api/ping\"\n",
                "    healthCheck \"Deep\" \"https://api/health\" {\n",
                "        timeout 250\n",
                "        properties {\n",
                "            owner \"sre\"\n",
                "        }\n",
                "    }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn test_health_check_interval_without_timeout() {
        let mut workspace = Workspace::new("w", "");
        let model = workspace.model_mut();
        let system = model.add_software_system("Shop", "");
        let api = model.add_container(system, "API");
        let node = model.add_prod_node("Pod", "", "");
        let instance = model.add_container_instance(node, api);
        model[instance]
            .add_health_check("Ping", "https://api/ping")
            .with_interval(15);

        assert_eq!(
            fragment(&workspace, Fragment::Element(instance.into())),
            concat!(
                "podApi1 = containerInstance api {\n",
                "    healthCheck \"Ping\" \"https://api/ping\" {\n",
                "        interval 15\n",
                "    }\n",
                "}\n",
            )
        );
    }
}
