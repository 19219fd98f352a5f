/// 库版本号
pub const VERSION: &str = "1.0.0";

/// 获取库版本
#[inline]
pub fn get_version() -> &'static str {
    VERSION
}
