use anyhow::Context;
use dotenvy::dotenv;
use std::io::{self, Write};
use tracing::info;

use example_consumer::{render, ConsumerConfig};

// =========================================================================
// 主入口
// =========================================================================
fn main() -> anyhow::Result<()> {
    dotenv().ok(); // 读取 .env 文件
    example_telemetry::init_logging();

    let config = ConsumerConfig::from_env().context("failed to load consumer config")?;
    info!(lhs = config.lhs, rhs = config.rhs, "Starting example consumer");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&config, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
