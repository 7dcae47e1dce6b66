//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// JSON 기반 설정 저장소 어댑터.
/// `extra_path`는 CLI `--config`로 받은 최우선 경로, `overrides`는 파일보다 우선하는 CLI 값이다.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigRepository {
    extra_path: Option<PathBuf>,
    overrides: Config,
}

impl JsonConfigRepository {
    pub fn new(extra_path: Option<PathBuf>, overrides: Config) -> Self {
        Self {
            extra_path,
            overrides,
        }
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Config> {
        config::load(self.extra_path.as_deref(), &self.overrides)
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        config::inspect_pretty_json(self.extra_path.as_deref(), &self.overrides)
    }
}
