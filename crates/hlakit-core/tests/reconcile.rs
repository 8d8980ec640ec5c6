//! Reconciliation of requested samples against an HLA table.

use hlakit_core::{MatchKind, filter_by_membership, normalize_root, reconcile};
use hlakit_model::SampleRecord;

const PRE_TYPING: &str = "HLA-A*01:01,HLA-A*02:01,HLA-B*07:02,HLA-B*08:01,HLA-C*07:01,HLA-C*07:02";
const CLND_TYPING: &str = "HLA-A*03:01,HLA-A*11:01,HLA-B*35:01,HLA-B*44:02,HLA-C*04:01,HLA-C*05:01";

fn render(rows: &[SampleRecord]) -> String {
    rows.iter()
        .map(|row| format!("{}={}", row.sample, row.hla))
        .collect::<Vec<_>>()
        .join(" ; ")
}

#[test]
fn backfills_other_timepoint_from_patient() {
    let table = vec![SampleRecord::new("53823PRE.bed", PRE_TYPING)];
    let outcome = reconcile(&table, &["53823CLND"]).expect("reconcile");

    assert!(outcome.missing.is_empty());
    assert_eq!(outcome.resolved.len(), 1);
    assert_eq!(outcome.resolved[0].kind, MatchKind::Patient);
    assert_eq!(outcome.resolved[0].matched_sample, "53823PRE.bed");
    insta::assert_snapshot!(
        render(&outcome.rows()),
        @"53823CLND.bed=HLA-A*01:01,HLA-A*02:01,HLA-B*07:02,HLA-B*08:01,HLA-C*07:01,HLA-C*07:02"
    );
}

#[test]
fn patient_fallback_prefers_pre() {
    let table = vec![
        SampleRecord::new("53823CLND.bed", CLND_TYPING),
        SampleRecord::new("53823PRE.bed", PRE_TYPING),
    ];
    let outcome = reconcile(&table, &["53823POST"]).expect("reconcile");
    assert_eq!(outcome.rows(), vec![SampleRecord::new("53823POST.bed", PRE_TYPING)]);
}

#[test]
fn exact_root_beats_patient_fallback() {
    let table = vec![
        SampleRecord::new("53823PRE.bed", PRE_TYPING),
        SampleRecord::new("53823CLND.bed", CLND_TYPING),
    ];
    let outcome = reconcile(&table, &["53823CLND"]).expect("reconcile");
    assert_eq!(outcome.resolved[0].kind, MatchKind::Root);
    assert_eq!(outcome.rows()[0].hla, CLND_TYPING);
}

#[test]
fn every_table_root_round_trips() {
    let table = vec![
        SampleRecord::new("100PRE.bed", "h1"),
        SampleRecord::new("100CLND.bed", "h2"),
        SampleRecord::new("200PRE-200-2_g_normal", "h3"),
    ];
    let requests: Vec<String> = table
        .iter()
        .map(|record| normalize_root(&record.sample).to_string())
        .collect();
    let outcome = reconcile(&table, &requests).expect("reconcile");
    insta::assert_snapshot!(
        render(&outcome.rows()),
        @"100PRE.bed=h1 ; 100CLND.bed=h2 ; 200PRE.bed=h3"
    );
    assert!(outcome.resolved.iter().all(|r| r.kind == MatchKind::Root));
}

#[test]
fn unresolved_patient_is_reported() {
    let table = vec![SampleRecord::new("53823PRE.bed", PRE_TYPING)];
    let outcome = reconcile(&table, &["99999PRE", "53823PRE"]).expect("reconcile");
    assert_eq!(outcome.requested, 2);
    assert_eq!(outcome.rows().len(), 1);
    assert_eq!(outcome.missing, vec!["99999PRE"]);
    assert!(outcome.has_missing());
}

#[test]
fn output_follows_first_satisfied_order() {
    let table = vec![
        SampleRecord::new("1PRE.bed", "a"),
        SampleRecord::new("2PRE.bed", "b"),
    ];
    let outcome = reconcile(&table, &["2PRE", "3PRE", "1CLND", "2PRE.bed"]).expect("reconcile");
    insta::assert_snapshot!(render(&outcome.rows()), @"2PRE.bed=b ; 1CLND.bed=a");
    assert_eq!(outcome.missing, vec!["3PRE"]);
}

#[test]
fn strict_and_backfill_modes_differ_on_partial_coverage() {
    let table = vec![SampleRecord::new("53823PRE.bed", PRE_TYPING)];
    let keep = ["53823CLND"];
    assert!(filter_by_membership(&table, &keep).kept.is_empty());
    assert_eq!(reconcile(&table, &keep).expect("reconcile").rows().len(), 1);
}
