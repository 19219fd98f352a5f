use thiserror::Error;

/// example-lib 的统一错误定义
/// 原始的 `get_version` / `add` 都是全函数，错误只来自 checked 版本和输入解析
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExampleError {
    #[error("Integer overflow: {a} + {b} does not fit in i32")]
    Overflow { a: i32, b: i32 },

    #[error("Invalid operand {raw:?}: {reason}")]
    InvalidOperand { raw: String, reason: String },
}
