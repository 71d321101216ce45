use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    pub evaluation: EvaluationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// ミニマックス探索の読みの深さ (手数)
    pub max_depth: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// 中央寄り評価の基準重み。飽和スコアを超えない範囲で調整する
    pub center_weight: i32,
}

impl AIConfig {
    /// キャッシュ済み設定への参照 (初回アクセス時に一度だけ読み込む)
    pub fn get() -> &'static AIConfig {
        &CONFIG
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = "ai_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig { max_depth: 4 },
            evaluation: EvaluationConfig { center_weight: 240 },
        }
    }
}
