//! Runtime configuration for the assistant bot.
//!
//! Everything has a sensible default; the environment only toggles color.
//! `ASSISTANT_BOT_COLOR` wins over `NO_COLOR` when both are set.

use log::warn;
use std::env;

pub const COLOR_ENV_VAR: &str = "ASSISTANT_BOT_COLOR";
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub prompt: String,
    pub greeting: String,
    pub farewell: String,
    pub use_color: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter a command: ".to_string(),
            greeting: "Welcome to the assistant bot!".to_string(),
            farewell: "Good bye!".to_string(),
            use_color: true,
        }
    }
}

impl BotConfig {
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // https://no-color.org: any non-empty value disables color
        if lookup(NO_COLOR_ENV_VAR).is_some_and(|value| !value.is_empty()) {
            config.use_color = false;
        }

        if let Some(value) = lookup(COLOR_ENV_VAR) {
            match parse_flag(&value) {
                Some(flag) => config.use_color = flag,
                None => warn!("Ignoring {}={:?}: expected on/off", COLOR_ENV_VAR, value),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
