// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored cli formatting helpers

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so answers on stdout stay machine readable.
/// `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_answer(msg: &str) -> String {
    format!("{} {}", "🌿".green().bold(), msg)
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

pub fn format_confidence(score: f32, accepted: bool) -> String {
    let text = format!("{:.2}", score);
    if accepted {
        text.green().to_string()
    } else {
        text.yellow().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_helpers_keep_message() {
        colored::control::set_override(false);
        assert!(format_answer("Tulsi boosts immunity.").contains("Tulsi boosts immunity."));
        assert!(format_error("boom").contains("boom"));
        assert!(format_warning("careful").contains("careful"));
        assert!(format_info("note").contains("note"));
        assert_eq!(format_confidence(0.456, true), "0.46");
    }
}
