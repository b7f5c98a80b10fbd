//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::application::config::Config;

/// 최우선 설정 파일 경로를 지정하는 환경변수.
pub const CONFIG_ENV: &str = "CALCDEMO_CONFIG";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !Path::new(&path).exists()
    {
        warn!(path = %path, env = CONFIG_ENV, "config path points to a missing file");
    }

    load_from_paths(config_paths())
}

/// 주어진 경로를 앞에서부터(낮은 우선순위 → 높은 우선순위) 병합한다.
/// 없는 파일은 건너뛰고, 읽기/파싱 실패는 경로를 포함한 오류로 돌려준다.
pub fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/calcdemo/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("calcdemo").join("config.json"));
    }

    paths.push(PathBuf::from(".calcdemo/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(path));
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
