use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_THINKING_DELAY_MS: u64 = 1000;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ChatSettings {
    /// Pause between a user message and the assistant's reply. Zero disables it.
    pub thinking_delay_ms: u64,
    /// Open the chat panel as soon as the host starts.
    pub open_on_start: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
            open_on_start: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ProfileSettings {
    /// JSON profile to answer from instead of the built-in one.
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub chat: ChatSettings,
    pub profile: ProfileSettings,
}

impl Settings {
    /// Reads `Config.toml` (optional) from the working directory, then
    /// `PORTFOLIO__SECTION__KEY` environment overrides.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("Config").required(false))
                .add_source(
                    config::Environment::with_prefix("PORTFOLIO")
                        .prefix_separator("__")
                        .separator("__"),
                ),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.chat.thinking_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_sources() {
        let settings = Settings::from_builder(config::Config::builder()).unwrap();
        assert_eq!(settings.thinking_delay(), Duration::from_millis(1000));
        assert!(settings.chat.open_on_start);
        assert!(settings.profile.path.is_none());
    }

    #[test]
    fn toml_overrides_delay_and_profile() {
        let toml = r#"
            [chat]
            thinking_delay_ms = 0

            [profile]
            path = "profiles/maan.json"
        "#;
        let settings = Settings::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
        )
        .unwrap();
        assert_eq!(settings.thinking_delay(), Duration::ZERO);
        assert!(settings.chat.open_on_start);
        assert_eq!(
            settings.profile.path.as_deref(),
            Some(std::path::Path::new("profiles/maan.json"))
        );
    }
}
