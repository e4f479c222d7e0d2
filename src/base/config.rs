//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default name the bot goes by in the user directory.
fn default_bot_name() -> String {
    "benedictbot".to_string()
}

/// Default proper-name mention triggers.
fn default_mention_triggers() -> Vec<String> {
    vec!["benedict".to_string(), "cumberbatch".to_string()]
}

/// Default channel that escalation prompts are posted to.
fn default_operations_channel() -> String {
    "operations".to_string()
}

/// Default number of reactions that triggers an escalation prompt.
fn default_reaction_threshold() -> u32 {
    5
}

/// Configuration for the benedict-bot application.
///
/// Deserialization targets [`ConfigInner`]; this wrapper only shares it.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Slack app token (`SLACK_APP_TOKEN`).
    pub slack_app_token: String,
    /// Slack bot token (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// Name of the bot user in the directory (`BOT_NAME`).
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Proper-name substrings that count as mentioning the bot (`MENTION_TRIGGERS`).
    /// The bot name and `@` + bot name are always added.
    #[serde(default = "default_mention_triggers")]
    pub mention_triggers: Vec<String>,
    /// Channel name that escalation prompts are posted to (`OPERATIONS_CHANNEL`).
    #[serde(default = "default_operations_channel")]
    pub operations_channel: String,
    /// Exact reaction count on a single message that posts an escalation prompt (`REACTION_THRESHOLD`).
    #[serde(default = "default_reaction_threshold")]
    pub reaction_threshold: u32,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            slack_app_token: String::new(),
            slack_bot_token: String::new(),
            bot_name: default_bot_name(),
            mention_triggers: default_mention_triggers(),
            operations_channel: default_operations_channel(),
            reaction_threshold: default_reaction_threshold(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(
            config::Environment::default()
                .prefix("BENEDICT_BOT")
                .prefix_separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("mention_triggers"),
        );

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config::from(cfg.build()?.try_deserialize::<ConfigInner>()?);

        result.validate()?;

        Ok(result)
    }

    /// Checks the loaded values for things the bot cannot run without.
    pub fn validate(&self) -> Res<()> {
        if self.slack_app_token.trim().is_empty() {
            return Err(anyhow::anyhow!("Slack app token must be set."));
        }

        if self.slack_bot_token.trim().is_empty() {
            return Err(anyhow::anyhow!("Slack bot token must be set."));
        }

        if self.bot_name.trim().is_empty() {
            return Err(anyhow::anyhow!("Bot name must not be empty."));
        }

        if self.reaction_threshold < 1 {
            return Err(anyhow::anyhow!("Reaction threshold must be at least 1."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ConfigInner {
        ConfigInner {
            slack_app_token: "xapp-test".to_string(),
            slack_bot_token: "xoxb-test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_match_the_classic_bot() {
        let config = ConfigInner::default();

        assert_eq!(config.bot_name, "benedictbot");
        assert_eq!(config.mention_triggers, vec!["benedict", "cumberbatch"]);
        assert_eq!(config.reaction_threshold, 5);
    }

    #[test]
    fn validate_accepts_a_complete_config() {
        assert!(Config::from(valid()).validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_tokens() {
        let config = Config::from(ConfigInner { slack_bot_token: " ".to_string(), ..valid() });

        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_an_explicit_toml_file() {
        let path = std::env::temp_dir().join(format!("benedict-bot-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
slack_app_token = "xapp-file"
slack_bot_token = "xoxb-file"
operations_channel = "ops-escalations"
reaction_threshold = 3
"#,
        )
        .unwrap();

        let loaded = Config::load(Some(&path));
        std::fs::remove_file(&path).unwrap();
        let config = loaded.unwrap();

        assert_eq!(config.slack_app_token, "xapp-file");
        assert_eq!(config.operations_channel, "ops-escalations");
        assert_eq!(config.reaction_threshold, 3);
        assert_eq!(config.bot_name, "benedictbot");
        assert_eq!(config.mention_triggers, vec!["benedict", "cumberbatch"]);
    }

    #[test]
    fn load_rejects_a_file_without_tokens() {
        let path = std::env::temp_dir().join(format!("benedict-bot-empty-{}.toml", std::process::id()));
        std::fs::write(&path, "bot_name = \"sherlock\"\n").unwrap();

        let loaded = Config::load(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(loaded.is_err());
    }

    #[test]
    fn validate_rejects_a_zero_threshold() {
        let config = Config::from(ConfigInner { reaction_threshold: 0, ..valid() });

        assert!(config.validate().is_err());
    }
}
