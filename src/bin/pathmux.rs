use pathmux::{cli, otel};

fn main() -> anyhow::Result<()> {
    otel::init_logging_with_config(&otel::LogConfig::from_env())?;
    cli::run_cli()
}
