//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod utils;

use std::path::Path;

use anyhow::Result;

use crate::application::config::Config;

pub use inspection::{ConfigInspection, EffectiveConfig};
pub use loader::config_paths;
pub use utils::find_program;

/// 병합된 최종 설정을 로딩한다. `overrides`(CLI 값)가 가장 마지막에 적용된다.
pub fn load(extra_path: Option<&Path>, overrides: &Config) -> Result<Config> {
    let mut loaded = loader::load_merged_config(config_paths(extra_path))?;
    loaded.config.merge_from(overrides.clone());
    Ok(loaded.config)
}

/// 디버깅/진단용 설정 정보를 구성한다.
pub fn inspect(extra_path: Option<&Path>, overrides: &Config) -> Result<ConfigInspection> {
    let mut loaded = loader::load_merged_config(config_paths(extra_path))?;
    loaded.config.merge_from(overrides.clone());
    Ok(ConfigInspection::from_loaded(loaded))
}

/// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json(extra_path: Option<&Path>, overrides: &Config) -> Result<String> {
    Ok(serde_json::to_string_pretty(&inspect(extra_path, overrides)?)?)
}
