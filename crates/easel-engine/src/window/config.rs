use std::path::PathBuf;

use crate::coords::ResizePolicy;
use crate::logging::LoggingConfig;

/// Window and frame-loop configuration.
///
/// ```rust,ignore
/// let config = AppConfig::new("shapes")
///     .size(480, 360)
///     .resize(ResizePolicy::Scale)
///     .fps(30);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Initial drawable size in physical pixels.
    pub width: u32,
    pub height: u32,
    pub resize: ResizePolicy,
    /// Tick rate cap. 0 is treated as 1.
    pub fps: u32,
    /// Font used for [`FontSpec::Default`](crate::text::FontSpec::Default)
    /// instead of probing the usual system locations.
    pub default_font: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Zero dimensions are raised to 1.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn resize(mut self, policy: ResizePolicy) -> Self {
        self.resize = policy;
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn default_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_font = Some(path.into());
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            width: 800,
            height: 600,
            resize: ResizePolicy::None,
            fps: 60,
            default_font: None,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = AppConfig::default();
        assert_eq!((c.width, c.height), (800, 600));
        assert_eq!(c.fps, 60);
        assert_eq!(c.resize, ResizePolicy::None);
        assert!(c.default_font.is_none());
    }

    #[test]
    fn builder_overrides() {
        let c = AppConfig::new("demo")
            .size(0, 360)
            .resize(ResizePolicy::Aspect)
            .fps(30)
            .default_font("/tmp/face.ttf");
        assert_eq!(c.title, "demo");
        assert_eq!((c.width, c.height), (1, 360));
        assert_eq!(c.resize, ResizePolicy::Aspect);
        assert_eq!(c.fps, 30);
        assert_eq!(c.default_font, Some(PathBuf::from("/tmp/face.ttf")));
    }
}
