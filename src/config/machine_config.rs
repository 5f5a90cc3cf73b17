use crate::config::ComponentConfig;
use crate::core::registry::Registry;
use crate::utils::error::{ModuleError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Machine config file read by the CLI: a list of `[[components]]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl MachineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| ModuleError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replace `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn component(&self, name: &str) -> Option<&ComponentConfig> {
        self.components.iter().find(|c| c.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    /// Structural checks plus each registered model's attribute validator.
    /// Components are built in file order, so every required dependency must
    /// be listed before the component that needs it.
    pub fn validate_with(&self, registry: &Registry) -> Result<()> {
        self.validate()?;
        for (index, component) in self.components.iter().enumerate() {
            let path = format!("components.{}", index);
            let deps = registry.validate(component, &path)?;
            for required in &deps.required {
                let reason = match self.position(required) {
                    Some(dep_index) if dep_index < index => continue,
                    Some(dep_index) if dep_index == index => "Component cannot depend on itself",
                    Some(_) => "Dependency must be listed before the component that needs it",
                    None => "Dependency is not configured",
                };
                return Err(ModuleError::InvalidConfigValue {
                    field: format!("{}.depends_on", path),
                    value: required.clone(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for MachineConfig {
    fn validate(&self) -> Result<()> {
        for (index, component) in self.components.iter().enumerate() {
            validate_non_empty_string(&format!("components.{}.name", index), &component.name)?;
        }
        validate_unique(
            "components.name",
            self.components.iter().map(|c| c.name.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Api;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ECHO_CONFIG: &str = r#"
[[components]]
name = "foo"
api = "rdk:component:generic"
model = "bashar-prod:echo-module:echo-model"

[components.attributes]
"#;

    #[test]
    fn test_parse_basic_machine_config() {
        let config = MachineConfig::from_toml_str(ECHO_CONFIG).unwrap();

        assert_eq!(config.components.len(), 1);
        let foo = config.component("foo").unwrap();
        assert_eq!(foo.api, Api::generic_component());
        assert_eq!(foo.model.to_string(), "bashar-prod:echo-module:echo-model");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ECHO_MODULE_TEST_NAME", "from-env");

        let toml_content = r#"
[[components]]
name = "${ECHO_MODULE_TEST_NAME}"
model = "bashar-prod:echo-module:echo-model"

[[components]]
name = "${ECHO_MODULE_TEST_UNSET_VAR}"
model = "bashar-prod:echo-module:echo-model"
"#;

        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.components[0].name, "from-env");
        assert_eq!(config.components[1].name, "${ECHO_MODULE_TEST_UNSET_VAR}");

        std::env::remove_var("ECHO_MODULE_TEST_NAME");
    }

    #[test]
    fn test_rejects_bad_model_string() {
        let toml_content = r#"
[[components]]
name = "foo"
model = "echo-model"
"#;
        assert!(MachineConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let toml_content = r#"
[[components]]
name = "foo"
model = "bashar-prod:echo-module:echo-model"

[[components]]
name = "foo"
model = "bashar-prod:echo-module:echo-model"
"#;
        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_name() {
        let toml_content = r#"
[[components]]
name = " "
model = "bashar-prod:echo-module:echo-model"
"#;
        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    fn depends_on_error(toml_content: &str) -> String {
        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        config
            .validate_with(crate::core::registry::registry())
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_dependency_listed_earlier_is_accepted() {
        let toml_content = r#"
[[components]]
name = "left"
model = "bashar-prod:echo-module:echo-model"

[[components]]
name = "right"
model = "bashar-prod:echo-module:echo-model"
depends_on = ["left"]
"#;
        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate_with(crate::core::registry::registry()).is_ok());
    }

    #[test]
    fn test_rejects_forward_dependency() {
        let err = depends_on_error(
            r#"
[[components]]
name = "right"
model = "bashar-prod:echo-module:echo-model"
depends_on = ["left"]

[[components]]
name = "left"
model = "bashar-prod:echo-module:echo-model"
"#,
        );
        assert!(err.contains("components.0.depends_on"));
        assert!(err.contains("listed before"));
    }

    #[test]
    fn test_rejects_self_dependency() {
        let err = depends_on_error(
            r#"
[[components]]
name = "a"
model = "bashar-prod:echo-module:echo-model"
depends_on = ["a"]
"#,
        );
        assert!(err.contains("depend on itself"));
    }

    #[test]
    fn test_rejects_unconfigured_dependency() {
        let err = depends_on_error(
            r#"
[[components]]
name = "a"
model = "bashar-prod:echo-module:echo-model"
depends_on = ["ghost"]
"#,
        );
        assert!(err.contains("not configured"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(ECHO_CONFIG.as_bytes()).unwrap();

        let config = MachineConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.components[0].name, "foo");
    }
}
