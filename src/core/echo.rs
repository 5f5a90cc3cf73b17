//! The echo model: a generic component whose only behavior is echoing a
//! number back through `do_command`.

use crate::config::{ComponentConfig, EchoConfig};
use crate::core::registry::{Registration, Registry};
use crate::domain::model::{Api, Command, Dependencies, Model, ResourceName};
use crate::domain::ports::Resource;
use crate::utils::error::{ModuleError, Result};
use crate::utils::logger::resource_span;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub fn echo_model() -> Model {
    Model::new("bashar-prod", "echo-module", "echo-model")
}

pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register_component(
        Api::generic_component(),
        echo_model(),
        Registration::new::<EchoConfig>(new_echo_model),
    )
}

/// Registered constructor: decodes the typed config, then builds the model.
pub fn new_echo_model(deps: &Dependencies, raw_config: &ComponentConfig) -> Result<Arc<dyn Resource>> {
    let config: EchoConfig = raw_config.native_config()?;
    Ok(Arc::new(EchoModel::new(deps, raw_config.resource_name(), config)))
}

/// Handle a `do_command` request.
///
/// `{"name": "number", "number": n}` answers `{"number": n}`; `n` must be a
/// JSON number and comes back as a float.
pub fn dispatch(cmd: &Command) -> Result<Command> {
    let name = cmd.get("name").ok_or(ModuleError::NameNotSpecified)?;

    match name.as_str() {
        Some("number") => {
            let raw_number = cmd.get("number").ok_or(ModuleError::NumberNotSpecified)?;
            let number = raw_number.as_f64().ok_or(ModuleError::NumberNotFloat)?;

            let mut response = Command::new();
            response.insert("number".to_string(), serde_json::Value::from(number));
            Ok(response)
        }
        _ => Err(ModuleError::NameNotDefined),
    }
}

#[derive(Debug)]
pub struct EchoModel {
    name: ResourceName,
    config: EchoConfig,
    cancel: CancellationToken,
    span: tracing::Span,
}

impl EchoModel {
    pub fn new(_deps: &Dependencies, name: ResourceName, config: EchoConfig) -> Self {
        let span = resource_span(&name);
        span.in_scope(|| tracing::debug!("echo model created"));
        Self {
            name,
            config,
            cancel: CancellationToken::new(),
            span,
        }
    }

    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Token cancelled when the resource closes.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Building a client for a remote echo model is not supported.
    pub fn new_client_from_conn(
        &self,
        remote_name: &str,
        name: ResourceName,
    ) -> Result<Arc<dyn Resource>> {
        tracing::warn!(resource = %name, remote = remote_name, "remote echo client requested");
        Err(ModuleError::Unimplemented)
    }
}

#[async_trait]
impl Resource for EchoModel {
    fn name(&self) -> &ResourceName {
        &self.name
    }

    async fn do_command(&self, cmd: Command) -> Result<Command> {
        self.span.in_scope(|| {
            tracing::debug!(?cmd, "do_command");
            let result = dispatch(&cmd);
            if let Err(e) = &result {
                tracing::debug!("do_command rejected: {}", e);
            }
            result
        })
    }

    async fn reconfigure(&self, _deps: &Dependencies, _config: &ComponentConfig) -> Result<()> {
        Err(ModuleError::MustRebuild {
            name: self.name.to_string(),
        })
    }

    async fn close(&self) -> Result<()> {
        if !self.cancel.is_cancelled() {
            self.span.in_scope(|| tracing::info!("closing echo model"));
        }
        self.cancel.cancel();
        Ok(())
    }
}
