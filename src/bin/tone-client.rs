use std::io::Read;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tone_converter::client::ConvertClient;
use tone_converter::clipboard::default_clipboard;
use tone_converter::page::{ButtonState, ConverterPage, View, DEFAULT_TARGET};

/// Convert text for a target audience using a running tone-converter server
#[derive(Parser, Debug)]
#[command(name = "tone-client", version)]
struct Cli {
    /// Server origin
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    origin: String,

    /// Target audience (upward, lateral, external)
    #[arg(long, short, default_value = DEFAULT_TARGET)]
    target: String,

    /// Copy the converted text to the clipboard
    #[arg(long)]
    copy: bool,

    /// Text to convert; read from stdin when omitted
    text: Option<String>,
}

/// Alerts and progress go to stderr, the converted text to stdout
struct TerminalView;

impl View for TerminalView {
    fn alert(&mut self, message: &str) {
        eprintln!("[!] {}", message);
    }

    fn render_output(&mut self, _text: &str) {}

    fn render_button(&mut self, button: &ButtonState) {
        if !button.enabled {
            eprintln!("{}", button.label);
        }
    }

    fn render_char_count(&mut self, count: usize) {
        eprintln!("{}자", count);
    }
}

/// Drop the single line ending a pipe or heredoc adds; a text field has none
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            strip_trailing_newline(buffer)
        }
    };

    let mut page = ConverterPage::new(
        ConvertClient::new(&cli.origin),
        TerminalView,
        default_clipboard(),
    );
    page.set_input(&text);
    page.select_target(&cli.target);
    if !page.convert().await {
        if !page.output().is_empty() {
            eprintln!("{}", page.output());
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", page.output());

    if cli.copy {
        page.copy();
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_one_line_ending() {
        assert_eq!(strip_trailing_newline("보고\n".to_string()), "보고");
        assert_eq!(strip_trailing_newline("보고\r\n".to_string()), "보고");
        assert_eq!(strip_trailing_newline("a\n\n".to_string()), "a\n");
    }

    #[test]
    fn test_keeps_text_without_line_ending() {
        assert_eq!(strip_trailing_newline("  a  ".to_string()), "  a  ");
    }
}
