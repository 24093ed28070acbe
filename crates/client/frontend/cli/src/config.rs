//! Terminal settings read from the environment.
//!
//! Gameplay tunables live in [`runtime::RuntimeConfig`]; banner timing lives in
//! [`client_frontend_core::FrontendConfig`]. Only layout knobs belong here.
use std::env;

/// Settings for the ratatui table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - rows of the round log, borders included (3..=30, default 8)
    /// - `CLI_SHOW_RULES` - open on the "HOW TO PLAY" overlay (`1`/`true`, default off)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut ui = UiConfig::default();

        if let Some(height) = lookup("CLI_MESSAGE_PANEL_HEIGHT").and_then(|raw| raw.parse().ok()) {
            ui = ui.with_message_panel_height(height);
        }
        if let Some(flag) = lookup("CLI_SHOW_RULES") {
            ui.show_rules_on_start = matches!(flag.trim(), "1" | "true" | "yes");
        }

        Self { ui }
    }
}

/// Layout of the table screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Rows of the round log panel, borders included.
    pub message_panel_height: u16,
    pub show_rules_on_start: bool,
}

impl UiConfig {
    /// Border plus one line of log.
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
    pub const MAX_MESSAGE_PANEL_HEIGHT: u16 = 30;

    pub fn with_message_panel_height(mut self, height: u16) -> Self {
        self.message_panel_height =
            height.clamp(Self::MIN_MESSAGE_PANEL_HEIGHT, Self::MAX_MESSAGE_PANEL_HEIGHT);
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            show_rules_on_start: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn unset_environment_keeps_defaults() {
        assert_eq!(parse(&[]), CliConfig::default());
    }

    #[test]
    fn panel_height_is_clamped() {
        assert_eq!(parse(&[("CLI_MESSAGE_PANEL_HEIGHT", "1")]).ui.message_panel_height, 3);
        assert_eq!(parse(&[("CLI_MESSAGE_PANEL_HEIGHT", "500")]).ui.message_panel_height, 30);
        assert_eq!(parse(&[("CLI_MESSAGE_PANEL_HEIGHT", "12")]).ui.message_panel_height, 12);
        assert_eq!(parse(&[("CLI_MESSAGE_PANEL_HEIGHT", "tall")]).ui.message_panel_height, 8);
    }

    #[test]
    fn rules_overlay_flag() {
        assert!(parse(&[("CLI_SHOW_RULES", "true")]).ui.show_rules_on_start);
        assert!(!parse(&[("CLI_SHOW_RULES", "0")]).ui.show_rules_on_start);
    }
}
