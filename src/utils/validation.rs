use crate::utils::error::{ModuleError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Dependencies a config implies, as reported by a model's validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImplicitDeps {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

/// Validation of a model's typed attributes. `path` is the location of the
/// component inside the machine config, e.g. `components.0`.
pub trait ValidateAttributes {
    fn validate(&self, path: &str) -> Result<ImplicitDeps>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModuleError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(ModuleError::InvalidConfigValue {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate value".to_string(),
            });
        }
    }
    Ok(())
}

/// Triplet part: non-empty, ASCII letters, digits, `-` and `_` only.
pub fn validate_triplet_part(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
