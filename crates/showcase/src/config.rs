//! Showcase configuration: embedded TOML defaults plus URL query overrides.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../showcase.toml");

/// Longest accepted stagger step.
const MAX_STAGGER_MS: u32 = 2_000;

#[derive(Debug, Error)]
/// Errors raised while loading a [`ShowcaseConfig`].
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("showcase config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// A motion setting is out of range.
    #[error("invalid motion setting `{field}`: {reason}")]
    InvalidMotion {
        /// Offending key under `[motion]`.
        field: &'static str,
        /// Human readable constraint.
        reason: &'static str,
    },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Colour scheme applied to the page root.
pub enum ThemeMode {
    /// Follow `prefers-color-scheme`.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemeMode {
    /// Stable token used by the `data-ui-theme` hook.
    pub const fn token(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Entrance animation timings.
pub struct MotionConfig {
    /// Master switch; when off every element mounts in its final frame.
    pub enabled: bool,
    /// Delay between consecutive sections.
    pub stagger_ms: u32,
    /// Fade of the section container.
    pub container_fade_ms: u32,
    /// Fade/slide length of each section.
    pub section_duration_ms: u32,
    /// Starting vertical offset of each section.
    pub section_offset_px: i32,
    /// Fade/slide length of the page header.
    pub header_duration_ms: u32,
    /// Starting vertical offset of the page header. Negative drops in from above.
    pub header_offset_px: i32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger_ms: 100,
            container_fade_ms: 300,
            section_duration_ms: 500,
            section_offset_px: 20,
            header_duration_ms: 600,
            header_offset_px: -20,
        }
    }
}

impl MotionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        let durations = [
            ("container_fade_ms", self.container_fade_ms),
            ("section_duration_ms", self.section_duration_ms),
            ("header_duration_ms", self.header_duration_ms),
        ];
        for (field, value) in durations {
            if value == 0 {
                return Err(ConfigError::InvalidMotion {
                    field,
                    reason: "must be positive while motion is enabled",
                });
            }
        }
        if self.stagger_ms > MAX_STAGGER_MS {
            return Err(ConfigError::InvalidMotion {
                field: "stagger_ms",
                reason: "must not exceed 2000",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Top-level showcase configuration.
pub struct ShowcaseConfig {
    /// Entrance animation timings.
    pub motion: MotionConfig,
    /// Colour scheme.
    pub theme: ThemeMode,
}

impl ShowcaseConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.motion.validate()?;
        Ok(config)
    }

    /// Configuration shipped with the crate, or the built-in defaults if the
    /// embedded document is rejected.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("showcase config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Applies URL overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: QueryOverrides) -> Self {
        if let Some(reduced_motion) = overrides.reduced_motion {
            self.motion.enabled = !reduced_motion;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Settings requested through the page URL.
pub struct QueryOverrides {
    /// `reduced-motion=true|false`.
    pub reduced_motion: Option<bool>,
    /// `theme=system|light|dark`.
    pub theme: Option<ThemeMode>,
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parses overrides from a query string such as `?reduced-motion=true&theme=dark`.
///
/// Unknown keys and unparseable values are ignored.
pub fn parse_overrides_from_query(query: &str) -> QueryOverrides {
    let mut overrides = QueryOverrides::default();

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "reduced-motion" => {
                if let Some(parsed) = parse_bool(value) {
                    overrides.reduced_motion = Some(parsed);
                }
            }
            "theme" => {
                if let Some(parsed) = ThemeMode::parse(value) {
                    overrides.theme = Some(parsed);
                }
            }
            _ => {}
        }
    }

    overrides
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let parsed = ShowcaseConfig::from_toml_str(EMBEDDED_CONFIG).expect("embedded config");
        assert_eq!(parsed, ShowcaseConfig::default());
        assert_eq!(ShowcaseConfig::embedded(), ShowcaseConfig::default());
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let parsed = ShowcaseConfig::from_toml_str(
            r#"
            theme = "dark"

            [motion]
            stagger_ms = 250
            "#,
        )
        .expect("config");
        assert_eq!(parsed.theme, ThemeMode::Dark);
        assert_eq!(parsed.motion.stagger_ms, 250);
        assert_eq!(parsed.motion.section_duration_ms, 500);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ShowcaseConfig::from_toml_str("[motion]\nspring = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_zero_duration_while_enabled() {
        let err =
            ShowcaseConfig::from_toml_str("[motion]\nsection_duration_ms = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidMotion {
                field: "section_duration_ms",
                ..
            }
        ));
    }

    #[test]
    fn zero_durations_are_fine_when_motion_is_off() {
        let parsed =
            ShowcaseConfig::from_toml_str("[motion]\nenabled = false\nheader_duration_ms = 0\n")
                .expect("config");
        assert!(!parsed.motion.enabled);
    }

    #[test]
    fn rejects_excessive_stagger() {
        let err = ShowcaseConfig::from_toml_str("[motion]\nstagger_ms = 5000\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid motion setting `stagger_ms`: must not exceed 2000"
        );
    }

    #[test]
    fn parses_query_overrides() {
        let overrides = parse_overrides_from_query("?reduced-motion=true&theme=dark&utm=x");
        assert_eq!(
            overrides,
            QueryOverrides {
                reduced_motion: Some(true),
                theme: Some(ThemeMode::Dark),
            }
        );

        let config = ShowcaseConfig::default().with_overrides(overrides);
        assert!(!config.motion.enabled);
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn ignores_invalid_override_values() {
        let overrides = parse_overrides_from_query("?reduced-motion=maybe&theme=sepia");
        assert_eq!(overrides, QueryOverrides::default());
        assert_eq!(
            ShowcaseConfig::default().with_overrides(overrides),
            ShowcaseConfig::default()
        );
    }
}
