use anyhow::{Context, Result};
use example_lib::{checked_add, get_version};
use std::io::Write;

use crate::config::ConsumerConfig;

/// 输出版本号和加法结果
///
/// 输出格式:
/// ```text
/// ExampleLib version: 1.0.0
/// 5 + 7 = 12
/// ```
///
/// 先算结果再写输出，溢出时不会留下半份报告
pub fn render<W: Write>(config: &ConsumerConfig, out: &mut W) -> Result<()> {
    let result = checked_add(config.lhs, config.rhs).context("failed to add operands")?;

    writeln!(out, "ExampleLib version: {}", get_version())?;
    writeln!(out, "{} + {} = {}", config.lhs, config.rhs, result)?;

    Ok(())
}
