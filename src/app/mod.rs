use crate::config::cli::CliConfig;
use crate::config::machine_config::MachineConfig;
use crate::config::EchoConfig;
use crate::core::echo::EchoModel;
use crate::core::machine::Machine;
use crate::core::registry::registry;
use crate::domain::model::{generic, Command, Dependencies};
use crate::domain::ports::Resource;
use crate::utils::error::{ModuleError, Result};
use std::io::Write;
use std::sync::Arc;

/// Run one CLI invocation. Command responses and model listings go to `out`.
pub async fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let registry = registry();

    if config.list_models {
        for (api, model) in registry.models() {
            writeln!(out, "{} {}", api, model)?;
        }
        return Ok(());
    }

    let machine = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading machine config from: {}", path);
            let machine_config = MachineConfig::from_file(path)?;
            Machine::build(&machine_config, registry).await?
        }
        None => {
            let echo: Arc<dyn Resource> = Arc::new(EchoModel::new(
                &Dependencies::new(),
                generic::named("foo"),
                EchoConfig::default(),
            ));
            Machine::from_resources(vec![echo])
        }
    };

    // 不論指令是否成功都要關閉所有元件
    let outcome = send_command(&machine, config, out).await;
    let closed = machine.close().await;
    outcome?;
    closed
}

async fn send_command<W: Write>(machine: &Machine, config: &CliConfig, out: &mut W) -> Result<()> {
    let Some(raw) = &config.command else {
        for resource in machine.resources() {
            tracing::info!("✅ {} is up", resource.name());
        }
        return Ok(());
    };

    let cmd: Command = serde_json::from_str(raw)
        .map_err(|e| ModuleError::config(format!("--command is not a JSON object: {}", e)))?;

    let target = match &config.resource {
        Some(name) => name.clone(),
        None => machine
            .resources()
            .first()
            .map(|r| r.name().name.clone())
            .ok_or_else(|| ModuleError::config("no components configured"))?,
    };

    let response = machine.do_command(&target, cmd).await?;
    writeln!(out, "{}", serde_json::to_string(&response)?)?;
    Ok(())
}
