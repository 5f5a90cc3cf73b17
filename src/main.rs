use clap::Parser;
use echo_module::utils::logger;
use echo_module::CliConfig;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting echo-module");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 依錯誤類別決定退出碼
    let mut stdout = std::io::stdout();
    if let Err(e) = echo_module::app::run(&config, &mut stdout).await {
        tracing::error!("❌ echo-module failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}
