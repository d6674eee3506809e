use clap::Parser as _;
use pairmatch::{BaseArgs, CliError};
use std::{fs, path::PathBuf};

// Each test works in its own directory so they may run concurrently
fn workspace(name: &str, items: &str, requesters: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pairmatch-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("items.tsv"), items).unwrap();
    fs::write(dir.join("requesters.tsv"), requesters).unwrap();
    dir
}

fn run(dir: &PathBuf, args: &[&str]) -> anyhow::Result<()> {
    let items = dir.join("items.tsv");
    let requesters = dir.join("requesters.tsv");
    let mut argv = vec!["pairmatch"];
    argv.extend_from_slice(&args[..1]);
    argv.extend([
        "--items",
        items.to_str().unwrap(),
        "--requesters",
        requesters.to_str().unwrap(),
    ]);
    argv.extend_from_slice(&args[1..]);
    BaseArgs::try_parse_from(argv)?.evaluate()
}

#[test]
fn solve_writes_tsv_report() {
    let dir = workspace(
        "tsv",
        "weight\n5\n2\n",
        "name\ttarget_weight\tnotes\nA\t4\tno giblets\nB\t12\t\nC\t1\t\n",
    );
    let report = dir.join("report.tsv");
    run(&dir, &["solve", "-o", report.to_str().unwrap()]).unwrap();

    let report = fs::read_to_string(report).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "name\ttarget_weight\tnotes\titem_weight\tagreed_price",
            "A\t4\tno giblets\t2\t2",
            "B\t12\t\t5\t5",
            "C\t1\t\tunassigned\t",
        ]
    );
}

#[test]
fn solve_infers_json_from_extension() {
    let dir = workspace(
        "json",
        "weight\n4\n10\n",
        "name\ttarget_weight\nA\t4\nB\t10\n",
    );
    let report = dir.join("report.json");
    run(&dir, &["solve", "-m", "exhaustive", "-o", report.to_str().unwrap()]).unwrap();

    let outcome: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    approx::assert_relative_eq!(outcome["value"].as_f64().unwrap(), 14.0);
    assert_eq!(outcome["requesters"][1]["item"], 1);
}

#[test]
fn exhaustive_limit_is_enforced() {
    let dir = workspace("limit", &format!("weight\n{}", "1\n".repeat(9)), "name\ttarget_weight\n");
    let report = dir.join("report.tsv");
    let err = run(&dir, &["solve", "-m", "exhaustive", "-o", report.to_str().unwrap()]).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CliError>(),
        Some(CliError::TooLarge { size: 9, limit: 8 })
    ));
    assert!(!report.exists());
}

#[test]
fn malformed_table_leaves_no_output() {
    let dir = workspace("malformed", "weight\n-3\n", "name\ttarget_weight\nA\t1\n");
    let report = dir.join("report.tsv");
    assert!(run(&dir, &["solve", "-o", report.to_str().unwrap()]).is_err());
    assert!(!report.exists());
}

#[test]
fn unknown_policy_is_rejected() {
    let dir = workspace("policy", "weight\n1\n", "name\ttarget_weight\nA\t1\n");
    assert!(run(&dir, &["solve", "--policy", "haggle"]).is_err());
}
