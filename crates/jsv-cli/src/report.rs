//! Table rendering for the `analyze` command.

use std::collections::BTreeMap;
use std::fmt::Display;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use jsv_analyze::{AnalysisResult, ErrorPattern, Severity};
use jsv_model::ROOT_LOCATION;

pub fn render_analysis(result: &AnalysisResult) -> String {
    let mut sections = vec![format!("Total errors: {}", result.total_errors)];

    if !result.categories.is_empty() {
        let mut table = count_table("Category", &result.categories, |_| None);
        apply_table_style(&mut table);
        sections.push(table.to_string());
    }
    if !result.severities.is_empty() {
        let mut table = count_table("Severity", &result.severities, |severity| {
            Some(severity_color(*severity))
        });
        apply_table_style(&mut table);
        sections.push(table.to_string());
    }
    if !result.patterns.is_empty() {
        let names: Vec<&str> = result.patterns.iter().map(ErrorPattern::as_str).collect();
        sections.push(format!("Patterns: {}", names.join(", ")));
    }
    if !result.most_common_paths.is_empty() {
        let lines: Vec<String> = result
            .most_common_paths
            .iter()
            .map(|path| format!("  {}", display_path(path)))
            .collect();
        sections.push(format!("Most common paths:\n{}", lines.join("\n")));
    }

    let lines: Vec<String> = result
        .recommendations
        .iter()
        .enumerate()
        .map(|(index, line)| format!("  {}. {line}", index + 1))
        .collect();
    sections.push(format!("Recommendations:\n{}", lines.join("\n")));

    sections.join("\n\n")
}

fn count_table<K: Display>(
    label: &str,
    counts: &BTreeMap<K, usize>,
    color: impl Fn(&K) -> Option<Color>,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Count")]);
    for (key, count) in counts {
        let name = match color(key) {
            Some(color) => Cell::new(key).fg(color).add_attribute(Attribute::Bold),
            None => Cell::new(key),
        };
        table.add_row(vec![name, Cell::new(count)]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::Magenta,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::DarkGrey,
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { ROOT_LOCATION } else { path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsv_analyze::{DEFAULT_RECOMMENDATION, analyze};
    use jsv_model::ErrorRecord;

    #[test]
    fn empty_analysis_shows_total_and_fallback() {
        let text = render_analysis(&analyze(&[]));
        assert!(text.starts_with("Total errors: 0"));
        assert!(!text.contains("Category"));
        assert!(text.ends_with(&format!("Recommendations:\n  1. {DEFAULT_RECOMMENDATION}")));
    }

    #[test]
    fn analysis_lists_counts_and_paths() {
        let errors = vec![
            ErrorRecord::new("", "/required", "missing").with_keyword("required"),
            ErrorRecord::new("/age", "/properties/age/minimum", "too small")
                .with_keyword("minimum"),
            ErrorRecord::new("/age", "/properties/age/maximum", "too big")
                .with_keyword("maximum"),
        ];
        let text = render_analysis(&analyze(&errors));
        assert!(text.starts_with("Total errors: 3"));
        assert!(text.contains("constraint_violation"));
        assert!(text.contains("structural"));
        assert!(text.contains("critical"));
        assert!(text.contains("Patterns: missing_properties, range_violations"));
        assert!(text.contains("Most common paths:\n  /age\n  (root)"));
    }
}
