use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hlakit_core::{MatchKind, Reconciliation};
use hlakit_model::CanonicalRoot;

use crate::types::{CollectResult, CoverageResult, FilterResult, PruneResult, ReconcileResult};

const EXAMPLE_COUNT: usize = 3;

pub fn collect_summary_lines(result: &CollectResult) -> Vec<String> {
    let mut lines: Vec<String> = result
        .unparsed
        .iter()
        .map(|path| format!("[WARN] could not parse 6 alleles from {}", path.display()))
        .collect();
    lines.push(format!(
        "[OK] wrote {} with {} samples",
        result.out.display(),
        result.samples
    ));
    lines
}

pub fn filter_summary_lines(result: &FilterResult) -> Vec<String> {
    let filter = &result.filter;
    let mut lines = vec![format!(
        "kept {} / {} rows -> {}",
        filter.kept.len(),
        filter.total,
        result.out.display()
    )];
    let mut examples: Vec<&str> = filter
        .kept
        .iter()
        .take(EXAMPLE_COUNT)
        .map(|record| record.sample.as_str())
        .collect();
    examples.sort_unstable();
    examples.dedup();
    lines.push(format!("examples: {}", examples.join(", ")));
    if !filter.unmatched.is_empty() {
        let roots: Vec<&str> = filter.unmatched.iter().map(CanonicalRoot::as_str).collect();
        lines.push(format!(
            "[WARN] no HLA rows for {} keep-list roots: {}",
            roots.len(),
            roots.join(", ")
        ));
    }
    lines
}

pub fn reconcile_summary_lines(result: &ReconcileResult) -> Vec<String> {
    let reconciliation = &result.reconciliation;
    let mut lines = vec![format!(
        "requested {} samples; wrote {} rows -> {}",
        reconciliation.requested,
        reconciliation.resolved.len(),
        result.out.display()
    )];
    if reconciliation.has_missing() {
        lines.push(format!(
            "[WARN] no HLA found for patient of: {}",
            reconciliation.missing.join(", ")
        ));
    }
    if let Some(path) = &result.report {
        lines.push(format!("report -> {}", path.display()));
    }
    lines
}

pub fn prune_summary_lines(result: &PruneResult) -> Vec<String> {
    let (in_rows, in_cols) = result.input_shape;
    let (out_rows, out_cols) = result.output_shape;
    let mut lines = vec![format!(
        "[INFO] loaded: {in_rows} junctions x {in_cols} columns"
    )];
    if result.merged > 0 {
        lines.push(format!(
            "[INFO] merged {} rows sharing a trimmed id",
            result.merged
        ));
    }
    if result.strict_dropped > 0 {
        lines.push(format!(
            "[INFO] strict-uid: drop {} rows with non-standard IDs",
            result.strict_dropped
        ));
    }
    lines.push(format!(
        "[OK] wrote {}  ({out_rows} x {out_cols})",
        result.out.display()
    ));
    lines
}

pub fn print_collect_summary(result: &CollectResult) {
    for line in collect_summary_lines(result) {
        println!("{line}");
    }
}

pub fn print_filter_summary(result: &FilterResult) {
    for line in filter_summary_lines(result) {
        println!("{line}");
    }
}

pub fn print_reconcile_summary(result: &ReconcileResult, details: bool) {
    for line in reconcile_summary_lines(result) {
        println!("{line}");
    }
    if details {
        println!("{}", resolution_table(&result.reconciliation));
    }
}

pub fn print_prune_summary(result: &PruneResult) {
    for line in prune_summary_lines(result) {
        println!("{line}");
    }
}

pub fn print_coverage_summary(result: &CoverageResult) {
    let report = &result.report;
    println!(
        "{}: {} samples with HLA, {} missing, {} unparsable",
        result.counts.display(),
        report.covered.len(),
        report.missing.len(),
        report.invalid.len()
    );
    if report.is_complete() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sample"),
        header_cell("Problem"),
        header_cell("HLA"),
    ]);
    apply_table_style(&mut table);
    for sample in &report.missing {
        table.add_row(vec![
            Cell::new(sample),
            Cell::new("no HLA row").fg(Color::Red),
            dim_cell("-"),
        ]);
    }
    for invalid in &report.invalid {
        table.add_row(vec![
            Cell::new(&invalid.sample),
            Cell::new(&invalid.reason).fg(Color::Yellow),
            Cell::new(&invalid.hla),
        ]);
    }
    println!("{table}");
}

fn resolution_table(reconciliation: &Reconciliation) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Request"),
        header_cell("Sample"),
        header_cell("Matched"),
        header_cell("Via"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for resolution in &reconciliation.resolved {
        table.add_row(vec![
            Cell::new(&resolution.request),
            Cell::new(&resolution.row.sample)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&resolution.matched_sample),
            kind_cell(resolution.kind),
        ]);
    }
    for request in &reconciliation.missing {
        table.add_row(vec![
            Cell::new(request),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new("missing").fg(Color::Red),
        ]);
    }
    table
}

fn kind_cell(kind: MatchKind) -> Cell {
    match kind {
        MatchKind::Root => Cell::new(kind.as_str()).fg(Color::Green),
        MatchKind::Patient => Cell::new(kind.as_str()).fg(Color::Yellow),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
