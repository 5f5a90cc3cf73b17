use crate::config::ComponentConfig;
use crate::core::echo;
use crate::domain::model::{Api, Dependencies, Model};
use crate::domain::ports::Resource;
use crate::utils::error::{ModuleError, Result};
use crate::utils::validation::{ImplicitDeps, ValidateAttributes};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

pub type Constructor = fn(&Dependencies, &ComponentConfig) -> Result<Arc<dyn Resource>>;

type AttributeValidator = fn(&ComponentConfig, &str) -> Result<ImplicitDeps>;

fn validate_native<C>(config: &ComponentConfig, path: &str) -> Result<ImplicitDeps>
where
    C: DeserializeOwned + ValidateAttributes,
{
    let native: C = config.native_config()?;
    native.validate(path)
}

/// How to validate and build one model.
#[derive(Clone, Copy)]
pub struct Registration {
    constructor: Constructor,
    validator: AttributeValidator,
}

impl Registration {
    /// `C` is the model's typed attribute config.
    pub fn new<C>(constructor: Constructor) -> Self
    where
        C: DeserializeOwned + ValidateAttributes,
    {
        Self {
            constructor,
            validator: validate_native::<C>,
        }
    }
}

#[derive(Default)]
pub struct Registry {
    registrations: BTreeMap<(Api, Model), Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_component(
        &mut self,
        api: Api,
        model: Model,
        registration: Registration,
    ) -> Result<()> {
        if self.lookup(&api, &model).is_some() {
            return Err(ModuleError::DuplicateRegistration {
                api: api.to_string(),
                model: model.to_string(),
            });
        }
        tracing::debug!(api = %api, model = %model, "registered component model");
        self.registrations.insert((api, model), registration);
        Ok(())
    }

    pub fn lookup(&self, api: &Api, model: &Model) -> Option<&Registration> {
        self.registrations.get(&(api.clone(), model.clone()))
    }

    pub fn models(&self) -> impl Iterator<Item = (&Api, &Model)> {
        self.registrations.keys().map(|(api, model)| (api, model))
    }

    fn registration_for(&self, config: &ComponentConfig) -> Result<&Registration> {
        self.lookup(&config.api, &config.model)
            .ok_or_else(|| ModuleError::UnknownModel {
                api: config.api.to_string(),
                model: config.model.to_string(),
            })
    }

    /// Run the model's validator; explicit `depends_on` entries are added to
    /// the required dependencies.
    pub fn validate(&self, config: &ComponentConfig, path: &str) -> Result<ImplicitDeps> {
        let registration = self.registration_for(config)?;
        let mut deps = (registration.validator)(config, path)?;
        for dep in &config.depends_on {
            if !deps.required.contains(dep) {
                deps.required.push(dep.clone());
            }
        }
        Ok(deps)
    }

    pub fn construct(&self, deps: &Dependencies, config: &ComponentConfig) -> Result<Arc<dyn Resource>> {
        let registration = self.registration_for(config)?;
        tracing::info!(
            resource = %config.resource_name(),
            model = %config.model,
            "constructing resource"
        );
        (registration.constructor)(deps, config)
    }
}

/// Process-wide registry with this module's models registered.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        echo::register(&mut registry).expect("echo model registered twice in the process registry");
        registry
    })
}
