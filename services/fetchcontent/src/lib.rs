pub mod format;
pub mod manifest;

pub use format::*;
pub use manifest::Manifest;

use anyhow::Result;
use std::io::Write;

#[allow(clippy::approx_constant)]
const DEMO_NUMBER: f64 = 3.14159;

/// 完整的演示输出：格式化 + JSON
pub fn render<W: Write>(out: &mut W) -> Result<()> {
    // 1. 格式化
    writeln!(out, "Hello from fmt library!")?;
    writeln!(out, "Formatted number: {}", format_number(DEMO_NUMBER, 2))?;

    // 2. JSON 序列化
    let json = Manifest::example().to_pretty_json()?;
    writeln!(out, "\nJSON output:")?;
    writeln!(out, "{json}")?;

    Ok(())
}
