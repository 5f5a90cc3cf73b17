#[cfg(feature = "cli")]
pub mod cli;
pub mod machine_config;

use crate::domain::model::{Api, Model, ResourceName};
use crate::utils::error::{ModuleError, Result};
use crate::utils::validation::{ImplicitDeps, ValidateAttributes};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Raw component config as the host hands it to a constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub name: String,
    #[serde(default = "Api::generic_component")]
    pub api: Api,
    pub model: Model,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl ComponentConfig {
    pub fn new(name: &str, api: Api, model: Model) -> Self {
        Self {
            name: name.to_string(),
            api,
            model,
            attributes: serde_json::Map::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn resource_name(&self) -> ResourceName {
        ResourceName::new(self.api.clone(), self.name.clone())
    }

    /// Decode `attributes` into the model's typed config.
    pub fn native_config<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(serde_json::Value::Object(self.attributes.clone())).map_err(|e| {
            ModuleError::config(format!(
                "invalid attributes for component {}: {}",
                self.name, e
            ))
        })
    }
}

/// Attributes of the echo model. It takes none; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EchoConfig {}

impl ValidateAttributes for EchoConfig {
    fn validate(&self, path: &str) -> Result<ImplicitDeps> {
        tracing::debug!(path, "validated echo config");
        Ok(ImplicitDeps::default())
    }
}
