//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::find_program;
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub raw: Config,
    pub effective: EffectiveConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub prompt: String,
    pub log_filter: String,
    pub command_prefix: Vec<String>,
    /// prefix가 비어 있으면 첫 토큰이 곧 프로그램이므로 `None`
    pub prefix_program_available: Option<bool>,
    pub channel_capacity: usize,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        let command_prefix = config.command_prefix();
        let prefix_program_available = command_prefix
            .first()
            .map(|program| find_program(program).is_some());

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
            effective: EffectiveConfig {
                prompt: config.prompt(),
                log_filter: config.log_filter(),
                command_prefix,
                prefix_program_available,
                channel_capacity: config.channel_capacity(),
            },
            raw: loaded.config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_effective_values_and_prefix_availability() {
        let config: Config =
            serde_json::from_str(r#"{"executor":{"command_prefix":["definitely-not-a-cmdloop-program","-q"]}}"#)
                .unwrap();
        let loaded = LoadedConfig {
            config,
            searched_paths: vec!["a.json".into(), "b.json".into()],
            loaded_paths: vec!["b.json".into()],
        };

        let inspection = ConfigInspection::from_loaded(loaded);
        let json = serde_json::to_value(&inspection).unwrap();

        assert_eq!(json["loaded_paths"][0], "b.json");
        assert_eq!(json["effective"]["prompt"], "> ");
        assert_eq!(json["effective"]["prefix_program_available"], false);
        assert_eq!(json["raw"]["prompt"], serde_json::Value::Null);
    }

    #[test]
    fn empty_prefix_has_no_availability() {
        let loaded = LoadedConfig {
            config: Config::default(),
            searched_paths: Vec::new(),
            loaded_paths: Vec::new(),
        };

        let inspection = ConfigInspection::from_loaded(loaded);

        assert_eq!(inspection.effective.prefix_program_available, None);
    }
}
