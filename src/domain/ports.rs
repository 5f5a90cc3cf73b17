use crate::config::ComponentConfig;
use crate::domain::model::{Command, Dependencies, ResourceName};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A configured component instance, as seen by the host.
#[async_trait]
pub trait Resource: Send + Sync {
    fn name(&self) -> &ResourceName;

    /// Model-specific commands outside any fixed API.
    async fn do_command(&self, cmd: Command) -> Result<Command>;

    /// Apply a new config in place, or ask the host to rebuild.
    async fn reconfigure(&self, deps: &Dependencies, config: &ComponentConfig) -> Result<()>;

    async fn close(&self) -> Result<()>;
}
