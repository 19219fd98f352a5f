use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 演示用的依赖清单
///
/// 字段按字典序声明，序列化出来的 key 顺序与有序 map 一致:
/// `dependencies`, `name`, `version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub dependencies: Vec<String>,
    pub name: String,
    pub version: String,
}

impl Manifest {
    pub fn example() -> Self {
        Self {
            dependencies: vec!["fmt".to_string(), "nlohmann_json".to_string()],
            name: "FetchContent Example".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    /// 两空格缩进的 JSON
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize manifest")
    }
}
