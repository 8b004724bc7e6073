use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub links: LinkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to the scroll animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the target on the first animation frame
    Instant,
    Linear,
    /// 1 - (1-t)^3
    #[default]
    Cubic,
    /// 1 - (1-t)^5
    Quintic,
}

/// How the scroll engine decides that layout has settled after expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleMode {
    /// Wait exactly `settle_frames` frames, force a layout pass, then measure
    #[default]
    FixedFrames,
    /// After `settle_frames`, keep forcing layout each frame until two
    /// consecutive content heights agree (bounded by `max_settle_frames`)
    UntilStable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate towards the target instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of the eased scroll in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Gap kept between the viewport top and the target's top edge
    #[serde(default = "default_top_margin")]
    pub top_margin: f64,
    #[serde(default)]
    pub settle: SettleMode,
    /// Frames yielded to the host layout pass before measuring
    #[serde(default = "default_settle_frames")]
    pub settle_frames: u32,
    /// Upper bound on settle frames in `until_stable` mode
    #[serde(default = "default_max_settle_frames")]
    pub max_settle_frames: u32,
    /// Frame rate hint for hosts driving the engine on a timer
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            top_margin: default_top_margin(),
            settle: SettleMode::default(),
            settle_frames: default_settle_frames(),
            max_settle_frames: default_max_settle_frames(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Reserved link identifiers recognised by the link resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Prefix marking a link as a jump to a section on the current page
    #[serde(default = "default_section_prefix")]
    pub section_prefix: String,
    /// Link id owned by the copy-to-clipboard collaborator
    #[serde(default = "default_clipboard_sentinel")]
    pub clipboard_sentinel: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            section_prefix: default_section_prefix(),
            clipboard_sentinel: default_clipboard_sentinel(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    300
}

fn default_top_margin() -> f64 {
    10.0
}

/// Layout yields the scroll engine always grants before measuring
pub const MIN_SETTLE_FRAMES: u32 = 3;

fn default_settle_frames() -> u32 {
    MIN_SETTLE_FRAMES
}

fn default_max_settle_frames() -> u32 {
    30
}

fn default_animation_fps() -> u32 {
    60
}

fn default_section_prefix() -> String {
    "toc_".to_string()
}

fn default_clipboard_sentinel() -> String {
    "Clipboard".to_string()
}

impl NavigatorConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break link classification or read layout
    /// before it had a chance to settle
    pub fn validate(&self) -> crate::Result<()> {
        if self.links.section_prefix.is_empty() {
            return Err(crate::Error::Config("links.section_prefix must not be empty".to_string()));
        }
        if self.links.clipboard_sentinel.is_empty() {
            return Err(crate::Error::Config("links.clipboard_sentinel must not be empty".to_string()));
        }
        if self.links.clipboard_sentinel.starts_with(self.links.section_prefix.as_str()) {
            return Err(crate::Error::Config(format!(
                "links.clipboard_sentinel '{}' is shadowed by section_prefix '{}'",
                self.links.clipboard_sentinel, self.links.section_prefix
            )));
        }
        if self.scroll.settle_frames < MIN_SETTLE_FRAMES {
            return Err(crate::Error::Config(format!(
                "scroll.settle_frames must be at least {}, got {}",
                MIN_SETTLE_FRAMES, self.scroll.settle_frames
            )));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/tocnav/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tocnav")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NavigatorConfig::default();
        assert!(config.scroll.smooth_enabled);
        assert_eq!(config.scroll.animation_duration_ms, 300);
        assert_eq!(config.scroll.easing, EasingType::Cubic);
        assert_eq!(config.scroll.settle, SettleMode::FixedFrames);
        assert_eq!(config.scroll.settle_frames, 3);
        assert!((config.scroll.top_margin - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.links.section_prefix, "toc_");
        assert_eq!(config.links.clipboard_sentinel, "Clipboard");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = NavigatorConfig::from_toml(
            r#"
            [scroll]
            easing = "quintic"
            settle = "until_stable"

            [links]
            section_prefix = "sec:"
            "#,
        )
        .unwrap();

        assert_eq!(config.scroll.easing, EasingType::Quintic);
        assert_eq!(config.scroll.settle, SettleMode::UntilStable);
        assert_eq!(config.scroll.animation_duration_ms, 300);
        assert_eq!(config.links.section_prefix, "sec:");
        assert_eq!(config.links.clipboard_sentinel, "Clipboard");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = NavigatorConfig::from_toml("[scroll]\neasing = \"bouncy\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_empty_reserved_link_ids_are_rejected() {
        let err = NavigatorConfig::from_toml("[links]\nsection_prefix = \"\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));

        let err = NavigatorConfig::from_toml("[links]\nclipboard_sentinel = \"\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_sentinel_shadowed_by_prefix_is_rejected() {
        let err = NavigatorConfig::from_toml("[links]\nclipboard_sentinel = \"toc_copy\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_settle_frames_below_minimum_are_rejected() {
        let err = NavigatorConfig::from_toml("[scroll]\nsettle_frames = 0").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));

        let config = NavigatorConfig::from_toml("[scroll]\nsettle_frames = 5").unwrap();
        assert_eq!(config.scroll.settle_frames, 5);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("tocnav-does-not-exist/config.toml");
        let config = NavigatorConfig::load_from(&path).unwrap();
        assert_eq!(config.scroll.settle_frames, 3);
    }

    #[test]
    fn test_toml_output_parses_back() {
        let mut config = NavigatorConfig::default();
        config.scroll.top_margin = 24.0;
        let text = config.to_toml().unwrap();
        let parsed = NavigatorConfig::from_toml(&text).unwrap();
        assert!((parsed.scroll.top_margin - 24.0).abs() < f64::EPSILON);
    }
}
