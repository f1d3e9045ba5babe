use std::path::Path;

use embedgen::config::ConfigWarning;
use embedgen::infrastructure::events::STATUS_TAG;
use embedgen::EmbedError;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

fn format_error_with(err: &anyhow::Error, supports_color: bool) -> String {
    tagged("ERROR", RED, &err.to_string(), supports_color)
}

fn format_warning(warning: &ConfigWarning, supports_color: bool) -> String {
    tagged("WARNING", YELLOW, &warning.to_string(), supports_color)
}

fn tagged(level: &str, color: &str, message: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{color}{STATUS_TAG} {level}:{RESET} {message}\n")
    } else {
        format!("{STATUS_TAG} {level}: {message}\n")
    }
}

/// Stable machine-readable code for `err`.
fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<EmbedError>()
        .map(EmbedError::code)
        .unwrap_or("error")
}

/// The file or directory an error is about, if any.
fn error_path(err: &EmbedError) -> Option<&Path> {
    match err {
        EmbedError::InputDirNotFound { path }
        | EmbedError::NonUtf8Path { path }
        | EmbedError::EmptyAsset { path }
        | EmbedError::PathIo { path, .. } => Some(path.as_path()),
        EmbedError::InvalidConfig { file, .. } => Some(file.as_path()),
        EmbedError::NoMatches { dir, .. } => Some(dir.as_path()),
        _ => None,
    }
}

fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let mut event = serde_json::json!({
        "event": "error",
        "command": "generate",
        "code": error_code(err),
        "message": err.to_string(),
    });
    if let Some(path) = err.downcast_ref::<EmbedError>().and_then(error_path) {
        event["path"] = serde_json::Value::String(path.display().to_string());
    }
    event
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        println!("{}", error_event(err));
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && caps.is_github_actions {
        let file = err
            .downcast_ref::<EmbedError>()
            .and_then(error_path)
            .map(|p| p.display().to_string());
        eprintln!(
            "{}",
            crate::ui::ci::github_error_annotation(&err.to_string(), file.as_deref())
        );
    }

    eprint!("{}", format_error_with(err, caps.supports_color));
}

pub fn print_warning(warning: &ConfigWarning, json: bool) {
    if json {
        let event = serde_json::json!({
            "event": "warning",
            "command": "generate",
            "message": warning.to_string(),
            "key": warning.key,
            "file": warning.file.display().to_string(),
            "line": warning.line,
        });
        println!("{}", event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!("{}", format_warning(warning, caps.supports_color));
}
