use std::collections::BTreeSet;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use tracing::{debug, info, info_span, warn};

use hlakit_core::{
    PruneOptions, check_coverage, filter_by_membership, parse_optitype_result, prune_counts,
    reconcile,
};
use hlakit_ingest::{
    read_count_matrix, read_hla_table, read_keep_list, read_matrix_samples, read_optitype_result,
};
use hlakit_model::TypedSample;
use hlakit_output::{OutputBatch, write_count_matrix, write_hla_table, write_optitype_summary};

use crate::cli::{CollectArgs, CoverageArgs, PruneArgs, ReconcileArgs, SelectionArgs};
use crate::types::{CollectResult, CoverageResult, FilterResult, PruneResult, ReconcileResult};

pub fn run_collect(args: &CollectArgs) -> Result<CollectResult> {
    let span = info_span!("collect", results = args.results.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for result in &args.results {
        ensure!(
            seen.insert(result.sample.as_str()),
            "sample '{}' given more than once",
            result.sample
        );
    }

    let mut rows: Vec<TypedSample> = Vec::with_capacity(args.results.len());
    let mut unparsed = Vec::new();
    for result in &args.results {
        let contents = read_optitype_result(&result.path)
            .with_context(|| format!("read {}", result.path.display()))?;
        match parse_optitype_result(&contents) {
            Some(typing) => rows.push(TypedSample::new(result.sample.clone(), typing)),
            None => {
                warn!(
                    sample = %result.sample,
                    path = %result.path.display(),
                    "could not parse 6 alleles"
                );
                unparsed.push(result.path.clone());
            }
        }
    }
    ensure!(!rows.is_empty(), "no parsable OptiType results found");
    rows.sort_by(|a, b| a.sample.cmp(&b.sample));
    write_optitype_summary(&args.out, &rows)?;

    info!(
        out = %args.out.display(),
        samples = rows.len(),
        unparsed = unparsed.len(),
        duration_ms = start.elapsed().as_millis(),
        "collect complete"
    );
    Ok(CollectResult {
        out: args.out.clone(),
        samples: rows.len(),
        unparsed,
    })
}

pub fn run_filter(args: &SelectionArgs) -> Result<FilterResult> {
    let span = info_span!("filter", hla = %args.hla.display(), keep = %args.keep.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_hla_table(&args.hla).with_context(|| format!("read {}", args.hla.display()))?;
    let keep =
        read_keep_list(&args.keep).with_context(|| format!("read {}", args.keep.display()))?;
    let filter = filter_by_membership(&table, &keep);
    write_hla_table(&args.out, &filter.kept)?;

    info!(
        out = %args.out.display(),
        rows = filter.kept.len(),
        duration_ms = start.elapsed().as_millis(),
        "filter complete"
    );
    Ok(FilterResult {
        out: args.out.clone(),
        filter,
    })
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileResult> {
    let selection = &args.selection;
    let span = info_span!(
        "reconcile",
        hla = %selection.hla.display(),
        keep = %selection.keep.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_hla_table(&selection.hla)
        .with_context(|| format!("read {}", selection.hla.display()))?;
    let requests = read_keep_list(&selection.keep)
        .with_context(|| format!("read {}", selection.keep.display()))?;
    debug!(
        table_rows = table.len(),
        requests = requests.len(),
        "inputs loaded"
    );

    let reconciliation = reconcile(&table, &requests).context("reconcile requested samples")?;
    let mut outputs = OutputBatch::new();
    outputs.hla_table(&selection.out, &reconciliation.rows())?;
    if let Some(path) = &args.report {
        outputs.json_report(path, &reconciliation)?;
    }
    outputs.commit()?;

    info!(
        out = %selection.out.display(),
        rows = reconciliation.resolved.len(),
        duration_ms = start.elapsed().as_millis(),
        "reconcile complete"
    );
    Ok(ReconcileResult {
        out: selection.out.clone(),
        report: args.report.clone(),
        reconciliation,
    })
}

pub fn run_prune(args: &PruneArgs) -> Result<PruneResult> {
    let span = info_span!("prune", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let matrix = read_count_matrix(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let options = PruneOptions {
        min_sum: args.min_sum,
        min_samples: args.min_samples,
        min_per_sample: args.min_per_sample,
        strict_uid: args.strict_uid,
    };
    let outcome = prune_counts(matrix, &options);
    write_count_matrix(&args.out, &outcome.matrix)?;

    info!(
        out = %args.out.display(),
        duration_ms = start.elapsed().as_millis(),
        "prune complete"
    );
    Ok(PruneResult {
        out: args.out.clone(),
        input_shape: outcome.input_shape,
        output_shape: outcome.matrix.shape(),
        merged: outcome.merged,
        strict_dropped: outcome.strict_dropped,
    })
}

pub fn run_coverage(args: &CoverageArgs) -> Result<CoverageResult> {
    let span = info_span!("coverage", counts = %args.counts.display());
    let _guard = span.enter();

    let columns = read_matrix_samples(&args.counts)
        .with_context(|| format!("read {}", args.counts.display()))?;
    let table = read_hla_table(&args.hla).with_context(|| format!("read {}", args.hla.display()))?;
    let report = check_coverage(&columns, &table);
    info!(
        covered = report.covered.len(),
        missing = report.missing.len(),
        invalid = report.invalid.len(),
        "coverage checked"
    );
    Ok(CoverageResult {
        counts: args.counts.clone(),
        report,
    })
}
