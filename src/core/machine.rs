use crate::config::machine_config::MachineConfig;
use crate::core::registry::Registry;
use crate::domain::model::{Command, Dependencies};
use crate::domain::ports::Resource;
use crate::utils::error::{ModuleError, Result};
use std::sync::Arc;

/// Resources built from a machine config, in construction order.
pub struct Machine {
    resources: Vec<Arc<dyn Resource>>,
}

impl Machine {
    pub fn from_resources(resources: Vec<Arc<dyn Resource>>) -> Self {
        Self { resources }
    }

    /// Validate `config`, then construct each component in file order. Every
    /// constructor sees the resources built before it as dependencies. On a
    /// failed construction the already-built resources are closed.
    pub async fn build(config: &MachineConfig, registry: &Registry) -> Result<Self> {
        config.validate_with(registry)?;

        let mut deps = Dependencies::new();
        let mut resources = Vec::with_capacity(config.components.len());
        for component in &config.components {
            let resource = match registry.construct(&deps, component) {
                Ok(resource) => resource,
                Err(e) => {
                    tracing::error!("failed to construct {}: {}", component.name, e);
                    if let Err(close_err) = Self::from_resources(resources).close().await {
                        tracing::warn!("cleanup after failed build: {}", close_err);
                    }
                    return Err(e);
                }
            };
            deps.insert(component.resource_name(), Arc::clone(&resource));
            resources.push(resource);
        }

        tracing::info!("built {} resource(s)", resources.len());
        Ok(Self { resources })
    }

    pub fn resources(&self) -> &[Arc<dyn Resource>] {
        &self.resources
    }

    /// Look up by short name (`foo`) or full name (`rdk:component:generic/foo`).
    pub fn resource(&self, name: &str) -> Result<&Arc<dyn Resource>> {
        self.resources
            .iter()
            .find(|r| r.name().name == name || r.name().to_string() == name)
            .ok_or_else(|| ModuleError::ResourceNotFound {
                name: name.to_string(),
            })
    }

    pub async fn do_command(&self, name: &str, cmd: Command) -> Result<Command> {
        self.resource(name)?.do_command(cmd).await
    }

    /// Close in reverse construction order. Every resource is closed even if
    /// one fails; the first error is returned.
    pub async fn close(self) -> Result<()> {
        let mut first_error = None;
        for resource in self.resources.iter().rev() {
            if let Err(e) = resource.close().await {
                tracing::warn!(resource = %resource.name(), "close failed: {}", e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
