//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "CMDLOOP_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 주어진 경로를 순서대로 순회해 JSON 설정을 병합한다.
/// 없는 파일은 건너뛰고, 읽기/파싱 실패는 경로와 함께 오류로 보고한다.
pub(crate) fn load_merged_config(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
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
        merged.merge_from(parsed);
        debug!(path = %path.display(), "loaded config");
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 환경변수 + CLI 경로 순으로 병합 경로를 구성한다.
pub fn config_paths(extra_path: Option<&Path>) -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/cmdloop/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("cmdloop").join("config.json"));
    }

    paths.push(PathBuf::from(".cmdloop/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        paths.push(PathBuf::from(path));
    }

    if let Some(path) = extra_path {
        paths.push(path.to_path_buf());
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

#[cfg(test)]
mod tests {
    use super::*;

    use serial_test::serial;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn merges_in_priority_order_and_skips_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let low = write(dir.path(), "low.json", r#"{"prompt":"low> ","log_filter":"info"}"#);
        let missing = dir.path().join("missing.json");
        let high = write(dir.path(), "high.json", r#"{"prompt":"high> "}"#);

        let loaded = load_merged_config(vec![low.clone(), missing, high.clone()]).unwrap();

        assert_eq!(loaded.config.prompt(), "high> ");
        assert_eq!(loaded.config.log_filter(), "info");
        assert_eq!(loaded.searched_paths.len(), 3);
        assert_eq!(loaded.loaded_paths, vec![low, high]);
    }

    #[test]
    fn no_files_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let loaded = load_merged_config(vec![dir.path().join("none.json")]).unwrap();

        assert!(loaded.loaded_paths.is_empty());
        assert_eq!(loaded.config.prompt(), "> ");
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.json", "{ prompt: ");

        let err = load_merged_config(vec![bad.clone()]).unwrap_err();

        assert!(format!("{err:#}").contains(&bad.display().to_string()));
    }

    #[test]
    #[serial]
    fn env_and_cli_paths_come_last() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join("env.json");
        let cli_path = dir.path().join("cli.json");

        // SAFETY: serial 테스트에서만 환경변수를 수정한다.
        unsafe { env::set_var(CONFIG_ENV, &env_path) };
        let paths = config_paths(Some(&cli_path));
        unsafe { env::remove_var(CONFIG_ENV) };

        let n = paths.len();
        assert_eq!(paths[0], PathBuf::from("/etc/cmdloop/config.json"));
        assert_eq!(paths[n - 2], env_path);
        assert_eq!(paths[n - 1], cli_path);
    }

    #[test]
    #[serial]
    fn duplicate_paths_are_searched_once() {
        // SAFETY: serial 테스트에서만 환경변수를 수정한다.
        unsafe { env::remove_var(CONFIG_ENV) };
        let local = PathBuf::from(".cmdloop/config.json");

        let paths = config_paths(Some(&local));

        assert_eq!(paths.iter().filter(|p| **p == local).count(), 1);
    }
}
