//! End-to-end runs of the CLI commands against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use hlakit_cli::cli::{
    Cli, Command, DEFAULT_FILTERED_OUT, DEFAULT_SUMMARY_OUT, ReconcileArgs, SelectionArgs,
    parse_result_arg,
};
use hlakit_cli::commands::{run_collect, run_coverage, run_filter, run_prune, run_reconcile};
use hlakit_cli::summary::{
    collect_summary_lines, filter_summary_lines, prune_summary_lines, reconcile_summary_lines,
};

const PRE: &str = "HLA-A*01:01,HLA-A*02:01,HLA-B*07:02,HLA-B*08:01,HLA-C*07:01,HLA-C*07:02";
const CLND: &str = "HLA-A*03:01,HLA-A*11:01,HLA-B*35:01,HLA-B*44:02,HLA-C*04:01,HLA-C*05:01";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn hla_table(dir: &Path) -> PathBuf {
    write(
        dir,
        "optitype_summary.tsv",
        &format!(
            "sample\thla\n53823PRE.bed\t{PRE}\n53823CLND.bed\t{CLND}\n16518PRE-16518-2_g_normal\t{PRE}\n"
        ),
    )
}

fn selection(dir: &Path, keep: &str) -> SelectionArgs {
    SelectionArgs {
        hla: hla_table(dir),
        keep: write(dir, "keep.txt", keep),
        out: dir.join("out.tsv"),
    }
}

#[test]
fn reconcile_writes_one_row_per_resolved_request() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = ReconcileArgs {
        selection: selection(dir.path(), "53823CLND\n16518CLND.bed\n77777PRE\n"),
        report: Some(dir.path().join("report.json")),
        details: false,
    };
    let result = run_reconcile(&args).expect("run reconcile");

    let written = fs::read_to_string(&args.selection.out).expect("read output");
    assert_eq!(
        written,
        format!("sample\thla\n53823CLND.bed\t{CLND}\n16518CLND.bed\t{PRE}\n")
    );
    assert_eq!(result.reconciliation.missing, vec!["77777PRE"]);

    let lines = reconcile_summary_lines(&result);
    assert!(lines[0].starts_with("requested 3 samples; wrote 2 rows -> "));
    insta::assert_snapshot!(lines[1].as_str(), @"[WARN] no HLA found for patient of: 77777PRE");

    let report = fs::read_to_string(dir.path().join("report.json")).expect("read report");
    assert!(report.contains("\"kind\": \"patient\""));
    assert!(report.contains("\"missing\": ["));
}

#[test]
fn failed_report_leaves_no_output_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report_dir = dir.path().join("reportdir");
    fs::create_dir(&report_dir).expect("create report dir");
    let args = ReconcileArgs {
        selection: selection(dir.path(), "53823CLND\n"),
        report: Some(report_dir),
        details: false,
    };
    let err = run_reconcile(&args).unwrap_err();
    assert!(format!("{err:#}").contains("is a directory"));
    assert!(!args.selection.out.exists());
}

#[test]
fn filter_keeps_original_rows_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = selection(dir.path(), "16518PRE.bed 53823CLND 99999PRE");
    let result = run_filter(&args).expect("run filter");

    let written = fs::read_to_string(&args.out).expect("read output");
    assert_eq!(
        written,
        format!("sample\thla\n53823CLND.bed\t{CLND}\n16518PRE-16518-2_g_normal\t{PRE}\n")
    );
    let lines = filter_summary_lines(&result);
    assert!(lines[0].starts_with("kept 2 / 3 rows -> "));
    insta::assert_snapshot!(lines[1].as_str(), @"examples: 16518PRE-16518-2_g_normal, 53823CLND.bed");
    insta::assert_snapshot!(lines[2].as_str(), @"[WARN] no HLA rows for 1 keep-list roots: 99999PRE");
}

#[test]
fn missing_column_aborts_before_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = SelectionArgs {
        hla: write(dir.path(), "bad.tsv", "sample\tA1\n53823PRE.bed\tHLA-A*01:01\n"),
        keep: write(dir.path(), "keep.txt", "53823PRE\n"),
        out: dir.path().join("out.tsv"),
    };
    let err = run_filter(&args).unwrap_err();
    assert!(format!("{err:#}").contains("required column 'hla'"));
    assert!(!args.out.exists());
}

#[test]
fn missing_keep_list_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = ReconcileArgs {
        selection: SelectionArgs {
            hla: hla_table(dir.path()),
            keep: dir.path().join("absent.txt"),
            out: dir.path().join("out.tsv"),
        },
        report: None,
        details: false,
    };
    let err = run_reconcile(&args).unwrap_err();
    assert!(format!("{err:#}").contains("input file not found"));
    assert!(!args.selection.out.exists());
}

#[test]
fn prune_then_coverage() {
    let dir = tempfile::tempdir().expect("temp dir");
    let counts = write(
        dir.path(),
        "counts.original.txt",
        "AltAnalyze_ID\t53823PRE.bed\t99999PRE.bed\n\
         chr1:10:20:+=chr1:1:2:+\t6\t0\n\
         chr1:10:20:+=chr1:3:4:+\t6\t1\n\
         chr2:5:9:-\t1\t1\n",
    );
    let pruned = dir.path().join("out/counts.original.pruned.txt");
    let cli = Cli::try_parse_from([
        "hlakit",
        "prune",
        "--in",
        counts.to_str().unwrap(),
        "--out",
        pruned.to_str().unwrap(),
    ])
    .expect("parse args");
    let Command::Prune(args) = cli.command else {
        panic!("expected prune command");
    };
    let result = run_prune(&args).expect("run prune");
    assert_eq!(
        fs::read_to_string(&pruned).unwrap(),
        "AltAnalyze_ID\t53823PRE\t99999PRE\nchr1:10:20:+\t12\t1\n"
    );
    let lines = prune_summary_lines(&result);
    insta::assert_snapshot!(lines[0].as_str(), @"[INFO] loaded: 3 junctions x 2 columns");

    let coverage = hlakit_cli::cli::CoverageArgs {
        counts: pruned,
        hla: hla_table(dir.path()),
    };
    let result = run_coverage(&coverage).expect("run coverage");
    assert_eq!(result.report.covered, vec!["53823PRE"]);
    assert_eq!(result.report.missing, vec!["99999PRE"]);
    assert!(!result.report.is_complete());
}

#[test]
fn selection_defaults_output_path() {
    let cli = Cli::try_parse_from(["hlakit", "filter", "--hla", "h.tsv", "--keep", "k.txt"])
        .expect("parse args");
    let Command::Filter(args) = cli.command else {
        panic!("expected filter command");
    };
    assert_eq!(args.out, PathBuf::from(DEFAULT_FILTERED_OUT));
}

#[test]
fn selection_requires_hla_and_keep() {
    assert!(Cli::try_parse_from(["hlakit", "reconcile", "--hla", "h.tsv"]).is_err());
    assert!(Cli::try_parse_from(["hlakit", "reconcile", "--keep", "k.txt"]).is_err());
}

#[test]
fn collect_writes_sorted_summary() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = write(
        dir.path(),
        "b_result.tsv",
        "\tA1\tA2\tB1\tB2\tC1\tC2\tReads\tObjective\n\
         0\tA*01:01\tA*02:01\tB*07:02\tB*08:01\tC*07:01\tC*07:02\t900.0\t870.1\n",
    );
    let second = write(dir.path(), "a_result.tsv", &format!("{CLND}\n"));
    let broken = write(dir.path(), "c_result.tsv", "no calls here\n");
    let out = dir.path().join("summary.tsv");
    let cli = Cli::try_parse_from([
        "hlakit".to_string(),
        "collect".to_string(),
        format!("--result=53823PRE={}", first.display()),
        format!("--result=53823CLND={}", second.display()),
        format!("--result=99999PRE={}", broken.display()),
        format!("--out={}", out.display()),
    ])
    .expect("parse args");
    let Command::Collect(args) = cli.command else {
        panic!("expected collect command");
    };
    let result = run_collect(&args).expect("run collect");

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        format!(
            "sample\tA1\tA2\tB1\tB2\tC1\tC2\thla\n\
             53823CLND\tHLA-A*03:01\tHLA-A*11:01\tHLA-B*35:01\tHLA-B*44:02\tHLA-C*04:01\tHLA-C*05:01\t{CLND}\n\
             53823PRE\tHLA-A*01:01\tHLA-A*02:01\tHLA-B*07:02\tHLA-B*08:01\tHLA-C*07:01\tHLA-C*07:02\t{PRE}\n"
        )
    );
    assert_eq!(result.unparsed, vec![broken]);
    let lines = collect_summary_lines(&result);
    assert!(lines[0].starts_with("[WARN] could not parse 6 alleles from "));
    assert!(lines[1].ends_with("with 2 samples"));
}

#[test]
fn collect_without_parsable_results_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let broken = write(dir.path(), "x_result.tsv", "A1\tA2\nA*01:01\tA*02:01\n");
    let out = dir.path().join(DEFAULT_SUMMARY_OUT);
    let args = hlakit_cli::cli::CollectArgs {
        results: vec![parse_result_arg(&format!("1PRE={}", broken.display())).unwrap()],
        out: out.clone(),
    };
    let err = run_collect(&args).unwrap_err();
    assert!(err.to_string().contains("no parsable OptiType results"));
    assert!(!out.exists());
}

#[test]
fn collect_rejects_repeated_samples() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(dir.path(), "x_result.tsv", &format!("{PRE}\n"));
    let arg = parse_result_arg(&format!("1PRE={}", path.display())).unwrap();
    let args = hlakit_cli::cli::CollectArgs {
        results: vec![arg.clone(), arg],
        out: dir.path().join("out.tsv"),
    };
    assert!(run_collect(&args).is_err());
}

#[test]
fn result_args_split_at_first_equals() {
    let arg = parse_result_arg("53823PRE=runs/a=b_result.tsv").unwrap();
    assert_eq!(arg.sample, "53823PRE");
    assert_eq!(arg.path, PathBuf::from("runs/a=b_result.tsv"));
    assert!(parse_result_arg("no-separator").is_err());
    assert!(parse_result_arg("=path").is_err());
    assert!(parse_result_arg("sample=").is_err());
    assert!(Cli::try_parse_from(["hlakit", "collect"]).is_err());
}
