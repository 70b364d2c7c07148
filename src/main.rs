//! VoicePad CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voicepad::cli::{
    app::{load_merged_config, run_editor, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    EditorOptions,
};
use voicepad::domain::config::AppConfig;
use voicepad::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        server_url: cli.server,
        auth_token: cli.token,
        language: cli.lang.map(|l| l.code().to_string()),
        notify: if cli.notify { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = EditorOptions {
        server_url: config.server_url_or_default().to_string(),
        auth_token: config.auth_token.clone(),
        language: config.language_or_default(),
        notify: config.notify_or_default(),
    };

    run_editor(options).await
}
