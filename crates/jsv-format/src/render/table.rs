//! Three-column table rendering (Path, Error, Keyword).

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ColumnConstraint, ContentArrangement, Table, TableComponent, Width};

use super::{Window, omission_notice};
use crate::options::TableOptions;

const HEADERS: [&str; 3] = ["Path", "Error", "Keyword"];
const MIN_COLUMN_WIDTH: usize = 8;
const MAX_COLUMN_WIDTH: usize = 80;
const COMPACT_CELL_LIMIT: usize = 50;
const CELL_LIMIT: usize = 80;
const ELLIPSIS: &str = "...";
const MISSING_KEYWORD: &str = "-";

const OUTER_BORDERS: [TableComponent; 8] = [
    TableComponent::TopLeftCorner,
    TableComponent::TopBorder,
    TableComponent::TopBorderIntersections,
    TableComponent::TopRightCorner,
    TableComponent::BottomLeftCorner,
    TableComponent::BottomBorder,
    TableComponent::BottomBorderIntersections,
    TableComponent::BottomRightCorner,
];

pub fn render(window: &Window<'_>, options: &TableOptions) -> String {
    let limit = if options.compact {
        COMPACT_CELL_LIMIT
    } else {
        CELL_LIMIT
    };
    let rows: Vec<[String; 3]> = window
        .shown
        .iter()
        .map(|error| {
            [
                clip(error.location(), limit),
                clip(&error.message, limit),
                clip(error.keyword_name().unwrap_or(MISSING_KEYWORD), limit),
            ]
        })
        .collect();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADERS.to_vec());
    if options.compact {
        for component in OUTER_BORDERS {
            table.remove_style(component);
        }
    }
    let widths = column_widths(&rows);
    table.set_constraints(widths.iter().map(|&width| {
        ColumnConstraint::LowerBoundary(Width::Fixed(u16::try_from(width).unwrap_or(u16::MAX)))
    }));
    for row in rows {
        table.add_row(row.to_vec());
    }

    let mut output = table.to_string();
    if window.is_truncated() {
        output.push_str("\n\n");
        output.push_str(&omission_notice(window.omitted()));
    }
    output
}

/// Widest cell per column across header and rows, clamped to [8, 80].
pub(crate) fn column_widths(rows: &[[String; 3]]) -> [usize; 3] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|width| width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
}

/// Collapse line breaks and cut cells longer than `limit` to end in `...`.
pub(crate) fn clip(text: &str, limit: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    if flat.chars().count() <= limit {
        return flat;
    }
    let kept: String = flat
        .chars()
        .take(limit.saturating_sub(ELLIPSIS.len()))
        .collect();
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsv_model::ErrorRecord;

    fn options(compact: bool) -> TableOptions {
        TableOptions {
            compact,
            max_errors: 50,
        }
    }

    #[test]
    fn header_and_rows_are_rendered() {
        let errors = vec![
            ErrorRecord::new("/age", "", "15 is less than the minimum of 18").with_keyword("minimum"),
            ErrorRecord::new("", "", "something custom"),
        ];
        let output = render(&Window::new(&errors, Some(50)), &options(false));
        let header = output.lines().nth(1).unwrap();
        assert!(header.contains("Path"));
        assert!(header.contains("Error"));
        assert!(header.contains("Keyword"));
        assert!(output.contains("15 is less than the minimum of 18"));
        assert!(output.contains("(root)"));
        assert!(output.lines().any(|line| line.contains("something custom") && line.contains(" - ")));
    }

    #[test]
    fn compact_mode_drops_outer_borders() {
        let errors = vec![ErrorRecord::new("/a", "", "bad").with_keyword("type")];
        let full = render(&Window::new(&errors, Some(50)), &options(false));
        let compact = render(&Window::new(&errors, Some(50)), &options(true));
        assert!(full.lines().next().unwrap().starts_with('╭'));
        assert!(compact.lines().next().unwrap().contains("Path"));
        assert_eq!(compact.lines().count() + 2, full.lines().count());
    }

    #[test]
    fn long_cells_are_clipped_with_ellipsis() {
        let message = "x".repeat(120);
        assert_eq!(clip(&message, 80).chars().count(), 80);
        assert!(clip(&message, 80).ends_with("..."));
        assert_eq!(clip(&message, 50).chars().count(), 50);
        assert_eq!(clip("short", 50), "short");
        assert_eq!(clip("two\nlines", 50), "two lines");
    }

    #[test]
    fn widths_are_clamped() {
        let rows = vec![[
            "/a".to_string(),
            "y".repeat(200),
            "minimum".to_string(),
        ]];
        assert_eq!(column_widths(&rows), [8, 80, 8]);
    }

    #[test]
    fn truncation_notice_follows_table() {
        let errors: Vec<ErrorRecord> = (0..4)
            .map(|i| ErrorRecord::new(format!("/{i}"), "", "bad"))
            .collect();
        let table_options = TableOptions {
            compact: true,
            max_errors: 3,
        };
        let output = render(&Window::new(&errors, Some(3)), &table_options);
        assert!(output.ends_with("\n\n... and 1 more error"));
    }
}
