//! Terminal-oriented rendering.

use jsv_model::ErrorRecord;
use nu_ansi_term::{Color, Style};

use super::{Window, display_value, omission_notice};
use crate::options::HumanOptions;

/// Wraps text in ANSI styles only when color is enabled, so the plain and
/// colored renderings share one layout.
struct Painter {
    enabled: bool,
}

impl Painter {
    fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn render(window: &Window<'_>, options: &HumanOptions) -> String {
    let painter = Painter {
        enabled: options.color,
    };
    let header = Color::Red.bold();
    let mut lines = Vec::new();

    if let [only] = window.shown {
        lines.push(painter.paint(header, "Validation Error"));
        lines.push(String::new());
        push_error(&mut lines, only, "", &painter);
    } else {
        let count = window.shown.len();
        lines.push(painter.paint(header, &format!("{count} Validation Errors Found")));
        for (index, error) in window.shown.iter().enumerate() {
            lines.push(String::new());
            lines.push(painter.paint(Style::new().bold(), &format!("Error {}:", index + 1)));
            push_error(&mut lines, error, "  ", &painter);
        }
    }

    if window.is_truncated() {
        lines.push(String::new());
        lines.push(painter.paint(
            Color::Yellow.italic(),
            &omission_notice(window.omitted()),
        ));
    }
    lines.join("\n")
}

fn push_error(lines: &mut Vec<String>, error: &ErrorRecord, indent: &str, painter: &Painter) {
    lines.push(format!(
        "{indent}Location: {}",
        painter.paint(Color::Cyan.normal(), error.location())
    ));

    let mut message = format!(
        "{indent}Message: {}",
        painter.paint(Color::White.normal(), &error.message)
    );
    if let Some(keyword) = error.keyword_name() {
        message.push_str(&format!(
            " ({})",
            painter.paint(Color::Magenta.normal(), keyword)
        ));
    }
    lines.push(message);

    if error.has_context() {
        lines.push(format!(
            "{indent}{}",
            painter.paint(Color::Blue.normal(), "Context:")
        ));
        for (key, value) in error.context_entries() {
            lines.push(format!("{indent}  {key}: {}", display_value(value)));
        }
    }

    let suggestions = error.suggestion_list();
    if !suggestions.is_empty() {
        lines.push(format!(
            "{indent}{}",
            painter.paint(Color::Green.normal(), "Suggestions:")
        ));
        for suggestion in suggestions {
            lines.push(format!(
                "{indent}  {} {suggestion}",
                painter.paint(Color::Green.normal(), "•")
            ));
        }
    }
}
