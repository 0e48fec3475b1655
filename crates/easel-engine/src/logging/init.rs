use std::sync::Once;

use env_logger::WriteStyle;

/// GPU crates that flood `info` with per-pipeline chatter.
const GPU_MODULES: &[&str] = &["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration, carried by `AppConfig`.
///
/// `filter` uses `env_logger` syntax ("debug", "easel_engine=trace,warn").
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: WriteStyle,
}

impl LoggingConfig {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn write_style(mut self, style: WriteStyle) -> Self {
        self.write_style = style;
        self
    }
}

/// Filter string actually applied: explicit config, then `RUST_LOG`, then
/// `info` with the GPU crates capped at `warn`.
fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> String {
    if let Some(filter) = config.filter.clone().or(env) {
        return filter;
    }
    GPU_MODULES
        .iter()
        .fold(String::from("info"), |acc, m| format!("{acc},{m}=warn"))
}

static INIT: Once = Once::new();

/// Installs `env_logger` the first time it is called; later calls are no-ops.
///
/// If some other logger is already registered (a test harness, or an
/// application that set up its own), that one stays.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init()
            .is_ok();

        if installed {
            log::debug!("logger installed ({filter})");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_env() {
        let config = LoggingConfig::default().filter("debug");
        assert_eq!(resolve_filter(&config, Some("trace".into())), "debug");
        assert_eq!(resolve_filter(&LoggingConfig::default(), Some("trace".into())), "trace");
    }

    #[test]
    fn default_filter_quiets_gpu_crates() {
        let f = resolve_filter(&LoggingConfig::default(), None);
        assert!(f.starts_with("info,"));
        assert!(f.contains("wgpu_core=warn") && f.contains("naga=warn"));
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::default().filter("warn"));
        init_logging(LoggingConfig::default());
        log::warn!("still logging");
    }
}
