//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub effective: EffectiveConfig,
}

/// 기본값까지 해석된 최종 설정.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub prompt: String,
    pub banner: bool,
    pub line_editor: bool,
    pub precision: Option<usize>,
}

impl From<&Config> for EffectiveConfig {
    fn from(config: &Config) -> Self {
        Self {
            prompt: config.prompt().to_string(),
            banner: config.banner_enabled(),
            line_editor: config.line_editor_enabled(),
            precision: config.precision(),
        }
    }
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveConfig::from(&loaded.config),
        }
    }
}
