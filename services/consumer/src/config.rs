use anyhow::{Context, Result};
use example_lib::parse_operand;
use tracing::debug;

pub const LHS_VAR: &str = "EXAMPLE_LHS";
pub const RHS_VAR: &str = "EXAMPLE_RHS";

/// --- Consumer 配置 ---
/// 默认值就是原始示例里写死的 5 和 7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumerConfig {
    pub lhs: i32,
    pub rhs: i32,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self { lhs: 5, rhs: 7 }
    }
}

impl ConsumerConfig {
    /// 从环境变量加载 (需要调用方先 `dotenv()`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意 key -> value 查找函数构建配置，缺失的 key 保留默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LHS_VAR) {
            config.lhs = parse_operand(&raw).with_context(|| format!("{LHS_VAR} is invalid"))?;
        }
        if let Some(raw) = lookup(RHS_VAR) {
            config.rhs = parse_operand(&raw).with_context(|| format!("{RHS_VAR} is invalid"))?;
        }

        debug!(lhs = config.lhs, rhs = config.rhs, "consumer config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_vars_keep_defaults() {
        let config = ConsumerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConsumerConfig { lhs: 5, rhs: 7 });
    }

    #[test]
    fn vars_override_defaults() {
        let config =
            ConsumerConfig::from_lookup(lookup_from(&[(LHS_VAR, "10"), (RHS_VAR, " 20 ")]))
                .unwrap();
        assert_eq!(config, ConsumerConfig { lhs: 10, rhs: 20 });
    }

    #[test]
    fn partial_override() {
        let config = ConsumerConfig::from_lookup(lookup_from(&[(RHS_VAR, "-1")])).unwrap();
        assert_eq!(config, ConsumerConfig { lhs: 5, rhs: -1 });
    }

    #[test]
    fn invalid_var_names_the_variable() {
        let err = ConsumerConfig::from_lookup(lookup_from(&[(LHS_VAR, "five")])).unwrap_err();
        assert!(err.to_string().contains(LHS_VAR));
    }
}
