use crate::domain::ports::Resource;
use crate::utils::error::{ModuleError, Result};
use crate::utils::validation::validate_triplet_part;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Request and response body of `do_command`.
pub type Command = serde_json::Map<String, serde_json::Value>;

/// Already-built resources a constructor may depend on.
pub type Dependencies = HashMap<ResourceName, Arc<dyn Resource>>;

fn split_triplet(value: &str) -> Result<[String; 3]> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return Err(ModuleError::InvalidModel {
            value: value.to_string(),
            reason: format!("expected 3 colon-separated parts, got {}", parts.len()),
        });
    }
    if let Some(bad) = parts.iter().find(|p| !validate_triplet_part(p)) {
        return Err(ModuleError::InvalidModel {
            value: value.to_string(),
            reason: format!("invalid part '{}'", bad),
        });
    }
    Ok([
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
    ])
}

/// API a resource implements, e.g. `rdk:component:generic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Api {
    pub namespace: String,
    pub kind: String,
    pub subtype: String,
}

impl Api {
    pub fn new(namespace: &str, kind: &str, subtype: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            kind: kind.to_string(),
            subtype: subtype.to_string(),
        }
    }

    /// The generic component API.
    pub fn generic_component() -> Self {
        Self::new("rdk", "component", "generic")
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.kind, self.subtype)
    }
}

impl FromStr for Api {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self> {
        let [namespace, kind, subtype] = split_triplet(s)?;
        Ok(Self {
            namespace,
            kind,
            subtype,
        })
    }
}

impl TryFrom<String> for Api {
    type Error = ModuleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Api> for String {
    fn from(api: Api) -> Self {
        api.to_string()
    }
}

/// Model triplet `namespace:family:name` the host uses to pick a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Model {
    pub namespace: String,
    pub family: String,
    pub name: String,
}

impl Model {
    pub fn new(namespace: &str, family: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            family: family.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.family, self.name)
    }
}

impl FromStr for Model {
    type Err = ModuleError;

    fn from_str(s: &str) -> Result<Self> {
        let [namespace, family, name] = split_triplet(s)?;
        Ok(Self {
            namespace,
            family,
            name,
        })
    }
}

impl TryFrom<String> for Model {
    type Error = ModuleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName {
    pub api: Api,
    pub name: String,
}

impl ResourceName {
    pub fn new(api: Api, name: impl Into<String>) -> Self {
        Self {
            api,
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.api, self.name)
    }
}

pub mod generic {
    use super::{Api, ResourceName};

    /// Name of a generic component.
    pub fn named(name: &str) -> ResourceName {
        ResourceName::new(Api::generic_component(), name)
    }
}
