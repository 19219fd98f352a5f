use crate::error::ExampleError;
use tracing::warn;

// =========================================================================
// 加法
// =========================================================================

/// 简单加法
///
/// i32 溢出时按补码回绕，保证 debug / release 下行为一致
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// 带溢出检查的加法
pub fn checked_add(a: i32, b: i32) -> Result<i32, ExampleError> {
    a.checked_add(b).ok_or_else(|| {
        warn!(a, b, "i32 addition overflowed");
        ExampleError::Overflow { a, b }
    })
}

// =========================================================================
// 输入解析
// =========================================================================

/// 解析十进制 i32 操作数 (允许首尾空白)
pub fn parse_operand(raw: &str) -> Result<i32, ExampleError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|e| ExampleError::InvalidOperand {
            raw: raw.to_string(),
            reason: e.to_string(),
        })
}
