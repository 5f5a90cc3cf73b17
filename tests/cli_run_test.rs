use anyhow::Result;
use clap::Parser;
use echo_module::{app, CliConfig, ModuleError};
use tempfile::TempDir;

fn cli(args: &[&str]) -> CliConfig {
    let mut argv = vec!["echo-module"];
    argv.extend_from_slice(args);
    CliConfig::parse_from(argv)
}

async fn run_to_string(config: &CliConfig) -> echo_module::Result<String> {
    let mut out = Vec::new();
    app::run(config, &mut out).await?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// 沒有任何參數時建立並關閉預設的 foo 元件
#[tokio::test]
async fn test_default_foo_component_prints_nothing() -> Result<()> {
    let output = run_to_string(&cli(&[])).await?;
    assert!(output.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_command_against_default_foo() -> Result<()> {
    let output = run_to_string(&cli(&["--command", r#"{"name":"number","number":4}"#])).await?;
    assert_eq!(output.trim(), r#"{"number":4.0}"#);

    let output = run_to_string(&cli(&[
        "-r",
        "foo",
        "--command",
        r#"{"name":"number","number":-0.5}"#,
    ]))
    .await?;
    assert_eq!(output.trim(), r#"{"number":-0.5}"#);
    Ok(())
}

#[tokio::test]
async fn test_command_errors_map_to_exit_codes() {
    let err = run_to_string(&cli(&["--command", r#"{"name":"square"}"#]))
        .await
        .unwrap_err();
    assert!(matches!(err, ModuleError::NameNotDefined));
    assert_eq!(err.exit_code(), 2);

    let err = run_to_string(&cli(&["--command", "not json"]))
        .await
        .unwrap_err();
    assert_eq!(err.exit_code(), 1);

    let err = run_to_string(&cli(&["-r", "bar", "--command", r#"{"name":"number","number":1}"#]))
        .await
        .unwrap_err();
    assert!(matches!(err, ModuleError::ResourceNotFound { .. }));
}

#[tokio::test]
async fn test_list_models() -> Result<()> {
    let output = run_to_string(&cli(&["--list-models"])).await?;
    assert_eq!(
        output.trim(),
        "rdk:component:generic bashar-prod:echo-module:echo-model"
    );
    Ok(())
}

#[tokio::test]
async fn test_command_against_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("machine.toml");
    tokio::fs::write(
        &config_path,
        r#"
[[components]]
name = "left"
model = "bashar-prod:echo-module:echo-model"

[[components]]
name = "right"
model = "bashar-prod:echo-module:echo-model"
depends_on = ["left"]
"#,
    )
    .await?;
    let path = config_path.to_string_lossy().into_owned();

    let output = run_to_string(&cli(&[
        "--config",
        &path,
        "-r",
        "right",
        "--command",
        r#"{"name":"number","number":2.25}"#,
    ]))
    .await?;
    assert_eq!(output.trim(), r#"{"number":2.25}"#);
    Ok(())
}
