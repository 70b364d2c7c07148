//! Interactive editor app runner

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::ConfigStore;
use crate::application::{EditorSession, SessionError};
use crate::domain::config::AppConfig;
use crate::domain::{Language, RewriteKind, SpeechEvent};
use crate::infrastructure::{ArboardClipboard, HttpRewriter, XdgConfigStore};

use super::args::EditorOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

type Session = EditorSession<HttpRewriter, ArboardClipboard>;

/// Load config file and merge CLI options over it
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    file_config.merge(cli_config)
}

/// Run the interactive editing session until EOF or `:quit`
pub async fn run_editor(options: EditorOptions) -> ExitCode {
    let presenter = Presenter::new();

    let rewriter = match options.auth_token.as_deref() {
        Some(token) => HttpRewriter::with_token(&options.server_url, token),
        None => HttpRewriter::new(&options.server_url),
    };
    let session = EditorSession::new(rewriter, ArboardClipboard::new(), options.language);

    presenter.info(&format!(
        "Editing ({}) against {}",
        options.language, options.server_url
    ));
    presenter.info("Type to replace the note; :help lists commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                presenter.error(&format!("Failed to read input: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        };

        if !handle_line(&session, &presenter, &options, line.trim_end()).await {
            break;
        }
    }

    // The session is ephemeral: leaving the editor discards all state
    presenter.output(&session.content());
    ExitCode::from(EXIT_SUCCESS)
}

/// Dispatch one input line. Returns false when the session should end.
async fn handle_line(
    session: &Session,
    presenter: &Presenter,
    options: &EditorOptions,
    line: &str,
) -> bool {
    let Some(command) = line.strip_prefix(':') else {
        // Plain input is a whole-note replacement, like typing in the app
        if !line.is_empty() {
            session.apply_replacement(line);
            render(session, presenter);
        }
        return true;
    };

    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("undo") => match session.undo() {
            Some(_) => {
                if options.notify {
                    presenter.success("Undo successful");
                }
                render(session, presenter);
            }
            None => presenter.warn("Nothing to undo"),
        },
        Some("copy") => match session.copy().await {
            Ok(Some(_)) => {
                if options.notify {
                    presenter.success("Selected text copied to clipboard");
                }
            }
            Ok(None) => presenter.warn("Nothing selected"),
            Err(e) => presenter.error(&e.to_string()),
        },
        Some("cut") => match session.cut().await {
            Ok(Some(_)) => {
                if options.notify {
                    presenter.success("Selected text cut to clipboard");
                }
                render(session, presenter);
            }
            Ok(None) => presenter.warn("Nothing selected"),
            Err(e) => presenter.error(&e.to_string()),
        },
        Some("paste") => match session.paste().await {
            Ok(Some(_)) => render(session, presenter),
            Ok(None) => presenter.warn("Clipboard is empty"),
            Err(e) => presenter.error(&e.to_string()),
        },
        Some("select") => {
            let bounds = (parts.next(), parts.next());
            let parsed = match bounds {
                (Some(start), Some(end)) => start
                    .parse::<usize>()
                    .ok()
                    .zip(end.parse::<usize>().ok()),
                _ => None,
            };
            match parsed {
                Some((start, end)) => match session.set_selection(start, end) {
                    Ok(()) => render(session, presenter),
                    Err(e) => presenter.error(&e.to_string()),
                },
                None => presenter.error("Usage: :select <start> <end>"),
            }
        }
        Some("selectall") => {
            session.select_all();
            render(session, presenter);
        }
        Some("say") => {
            // Simulates one finalized recognition result
            let transcript = command.strip_prefix("say").unwrap_or("").trim_start();
            if session.on_speech_event(&SpeechEvent::finalized(transcript)) {
                render(session, presenter);
            } else if options.notify {
                presenter.warn("Transcript skipped (empty or repeated)");
            }
        }
        Some("enhance") => run_rewrite(session, presenter, RewriteKind::Enhance).await,
        Some("translate") => run_rewrite(session, presenter, RewriteKind::Translate).await,
        Some("lang") => match parts.next() {
            Some(code) => match code.parse::<Language>() {
                Ok(language) => {
                    session.set_language(language);
                    presenter.info(&format!("Editing language: {}", language));
                }
                Err(e) => presenter.error(&e.to_string()),
            },
            None => presenter.output(session.language().code()),
        },
        Some("status") => {
            for kind in [RewriteKind::Enhance, RewriteKind::Translate] {
                presenter.rewrite_status(kind.as_str(), session.rewrite_status(kind).as_str());
            }
        }
        Some("show") => render(session, presenter),
        Some("help") => print_help(presenter),
        Some("quit") | Some("q") => return false,
        _ => presenter.error(&format!("Unknown command: :{}", command)),
    }
    true
}

async fn run_rewrite(session: &Session, presenter: &Presenter, kind: RewriteKind) {
    match session.rewrite(kind).await {
        Ok(status) => {
            presenter.rewrite_status(kind.as_str(), status.as_str());
            render(session, presenter);
        }
        Err(SessionError::Busy(e)) => presenter.warn(&e.to_string()),
        Err(e) => presenter.error(&e.to_string()),
    }
}

/// Print the note with the selection marked
fn render(session: &Session, presenter: &Presenter) {
    let content = session.content();
    let selection = session.selection();

    let byte_at = |char_offset: usize| {
        content
            .char_indices()
            .nth(char_offset)
            .map_or(content.len(), |(byte, _)| byte)
    };
    let start = byte_at(selection.start);
    let end = byte_at(selection.end);

    presenter.note(&content[..start], &content[start..end], &content[end..]);
}

fn print_help(presenter: &Presenter) {
    presenter.output("Plain text replaces the note. Commands:");
    presenter.output("  :say <text>          merge a finalized transcript fragment");
    presenter.output("  :undo                step back one edit");
    presenter.output("  :select <start> <end> / :selectall");
    presenter.output("  :copy / :cut / :paste");
    presenter.output("  :enhance / :translate / :status");
    presenter.output("  :lang [en|hi]        show or switch the editing language");
    presenter.output("  :show / :help / :quit");
}
