use anyhow::Context;
use dotenvy::dotenv;
use std::io::{self, Write};
use tracing::info;

// =========================================================================
// 主入口
// =========================================================================
fn main() -> anyhow::Result<()> {
    dotenv().ok();
    example_telemetry::init_logging();

    info!("Starting FetchContent example");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    fetchcontent_demo::render(&mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
