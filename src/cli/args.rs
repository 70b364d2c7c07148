//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::Language;

/// VoicePad - interactive voice-note editor
#[derive(Parser, Debug)]
#[command(name = "voicepad")]
#[command(version = "1.0.0")]
#[command(about = "Voice-note editor with undo, clipboard, and AI enhance/translate")]
#[command(long_about = None)]
pub struct Cli {
    /// Note backend base URL
    #[arg(short = 's', long, value_name = "URL")]
    pub server: Option<String>,

    /// Editing language; translate always targets the other one
    #[arg(short = 'l', long, value_name = "LANG", value_enum)]
    pub lang: Option<Language>,

    /// Bearer token for the note backend
    #[arg(long, value_name = "TOKEN", env = "VOICEPAD_TOKEN")]
    pub token: Option<String>,

    /// Print a status line after every command
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed editor options
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub server_url: String,
    pub auth_token: Option<String>,
    pub language: Language,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["server_url", "auth_token", "language", "notify"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["voicepad"]);
        assert!(cli.server.is_none());
        assert!(cli.lang.is_none());
        assert!(cli.token.is_none());
        assert!(!cli.notify);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_options() {
        let cli = Cli::parse_from(["voicepad", "-s", "http://example.test", "-l", "hi", "-n"]);
        assert_eq!(cli.server.as_deref(), Some("http://example.test"));
        assert_eq!(cli.lang, Some(Language::Hi));
        assert!(cli.notify);
    }

    #[test]
    fn cli_parses_config_subcommand() {
        let cli = Cli::parse_from(["voicepad", "config", "set", "language", "hi"]);
        match cli.command {
            Some(Commands::Config {
                action: ConfigAction::Set { key, value },
            }) => {
                assert_eq!(key, "language");
                assert_eq!(value, "hi");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn rejects_invalid_language() {
        let result = Cli::try_parse_from(["voicepad", "--lang", "fr"]);
        assert!(result.is_err());
    }

    #[test]
    fn valid_config_keys_are_recognized() {
        for key in VALID_CONFIG_KEYS {
            assert!(is_valid_config_key(key));
        }
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn cli_command_is_well_formed() {
        Cli::command().debug_assert();
    }
}
