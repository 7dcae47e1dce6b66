//! tracing 구독자 초기화.
//!
//! 설정 로딩 중의 로그도 남도록 `RUST_LOG`(없으면 기본 필터)로 먼저 초기화하고,
//! 설정을 읽은 뒤 `RUST_LOG`가 없을 때만 설정의 `log_filter`로 교체한다.
//! 출력은 stderr로 보내 stdout의 프롬프트와 섞이지 않게 한다.

use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

use crate::application::config::DEFAULT_LOG_FILTER;

/// 초기화 이후 필터를 바꾸기 위한 핸들.
pub struct LogFilterHandle {
    handle: Option<reload::Handle<EnvFilter, Registry>>,
    from_env: bool,
}

pub fn init() -> LogFilterHandle {
    let env_filter = EnvFilter::try_from_default_env();
    let from_env = env_filter.is_ok();
    let filter = env_filter.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (filter_layer, handle) = reload::Layer::new(filter);

    // 이미 전역 구독자가 있으면(라이브러리 재호출 등) 교체 대상이 없다.
    let installed = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();

    LogFilterHandle {
        handle: installed.then_some(handle),
        from_env,
    }
}

impl LogFilterHandle {
    /// `RUST_LOG`가 지정되지 않았을 때만 설정 필터를 적용한다.
    pub fn apply_config_filter(&self, filter: &str) {
        if self.from_env {
            return;
        }
        let Some(handle) = &self.handle else {
            return;
        };
        if let Err(err) = handle.reload(EnvFilter::new(filter)) {
            warn!("failed to apply log filter {filter}: {err}");
        }
    }
}
