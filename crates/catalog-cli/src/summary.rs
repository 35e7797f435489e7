use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::{IssueSeverity, ValidationIssue};
use catalog_validate::ValidationReport;

/// Issue table followed by a one-line total, or a confirmation when clean.
pub fn render_report(report: &ValidationReport) -> String {
    if report.is_clean() {
        return "No issues found.".to_string();
    }
    let mut issues: Vec<&ValidationIssue> = report.issues.iter().collect();
    issues.sort_by_key(|issue| std::cmp::Reverse(severity_rank(issue.severity)));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Center);
    }
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.field),
            Cell::new(&issue.message),
        ]);
    }
    format!(
        "{table}\n{} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    )
}

pub fn print_report(report: &ValidationReport) {
    println!("{}", render_report(report));
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: IssueSeverity) -> u8 {
    match severity {
        IssueSeverity::Error => 2,
        IssueSeverity::Warning => 1,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_report_has_no_table() {
        assert_eq!(render_report(&ValidationReport::new()), "No issues found.");
    }

    #[test]
    fn errors_are_listed_before_warnings() {
        let mut report = ValidationReport::new();
        report.add(ValidationIssue::warning("images", "gallery entry 0 is broken"));
        report.add(ValidationIssue::error("name", "name is required"));
        let rendered = render_report(&report);
        let error_at = rendered.find("name is required").unwrap();
        let warning_at = rendered.find("gallery entry 0").unwrap();
        assert!(error_at < warning_at);
        assert!(rendered.ends_with("1 error(s), 1 warning(s)"));
    }
}
