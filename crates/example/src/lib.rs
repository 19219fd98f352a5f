pub mod error;
pub mod math;
pub mod version;

// 导出让外部使用
pub use error::*;
pub use math::*;
pub use version::*;
