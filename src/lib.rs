#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{machine_config::MachineConfig, ComponentConfig, EchoConfig};
pub use crate::core::{
    echo::{echo_model, EchoModel},
    machine::Machine,
    registry::{registry, Registration, Registry},
};
pub use crate::domain::model::{generic, Api, Command, Dependencies, Model, ResourceName};
pub use crate::domain::ports::Resource;
pub use crate::utils::error::{ModuleError, Result};
