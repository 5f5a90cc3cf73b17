use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "echo-module")]
#[command(about = "Echo component module: build configured components and send them commands")]
pub struct CliConfig {
    /// Machine config (TOML) listing the components to build
    #[arg(short, long)]
    pub config: Option<String>,

    /// Resource that receives --command (defaults to the first component)
    #[arg(short, long)]
    pub resource: Option<String>,

    /// JSON object passed to do_command, e.g. '{"name":"number","number":4}'
    #[arg(long)]
    pub command: Option<String>,

    /// Print registered API/model pairs and exit
    #[arg(long)]
    pub list_models: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
