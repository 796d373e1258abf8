//! End-to-end splitting pipeline tests
//!
//! Drives the full manifest -> table -> engine -> artifact pipeline through
//! the same command layer the binary uses, against real files in a temp dir.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use partir::artifact::ArtifactStore;
use partir::cli::{run_command, Cli};

/// 100-row table: every 10th source starts with "b x", the rest with "a".
fn write_table(dir: &Path) -> PathBuf {
    let path = dir.join("corpus.tsv");
    let mut content = String::from("source\ttarget\n");
    for i in 0..100 {
        if i % 10 == 0 {
            content.push_str(&format!("b x {i}\tB X {i}\n"));
        } else {
            content.push_str(&format!("a {i}\tA {i}\n"));
        }
    }
    fs::write(&path, &content).unwrap();
    path
}

fn write_manifest(dir: &Path, name: &str, input: &Path, extra: &str) -> PathBuf {
    let path = dir.join(format!("{name}.yaml"));
    let yaml = format!(
        "name: {name}\ninput: {}\nseed: 42\nsplits:\n  train: 80\n  test: 10\n  val: 10\n{extra}",
        input.display()
    );
    fs::write(&path, yaml).unwrap();
    path
}

fn run(args: &[&str]) -> Result<(), String> {
    let cli = Cli::try_parse_from(args).unwrap();
    run_command(cli)
}

fn row_count(path: &Path) -> usize {
    // minus the header line
    fs::read_to_string(path).unwrap().lines().count() - 1
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_split_produces_expected_artifacts() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let config = write_manifest(
        tmp.path(),
        "corpus",
        &input,
        "withholding:\n  - \"^b x\"\ntracking:\n  withheld_bx: \"^b x\"\n",
    );
    let out = tmp.path().join("out");

    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out.to_str().unwrap()])
        .unwrap();

    let dir = out.join("corpus");
    // 10 of 100 rows are withheld; 90 eligible rows split 80/10/10
    assert_eq!(row_count(&dir.join("train.tsv")), 72);
    assert_eq!(row_count(&dir.join("test.tsv")), 9);
    assert_eq!(row_count(&dir.join("val.tsv")), 9);
    assert_eq!(row_count(&dir.join("withheld_bx.tsv")), 10);

    let summary = ArtifactStore::new(&out).load_summary("corpus").unwrap();
    assert_eq!(summary.seed, 42);
    assert_eq!(summary.total_rows, 100);
    assert_eq!(summary.withheld_rows, 10);
    assert_eq!(summary.unassigned_rows, 0);
}

#[test]
fn test_withheld_rows_appear_in_no_split() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let config = write_manifest(tmp.path(), "corpus", &input, "withholding:\n  - \"^b x\"\n");
    let out = tmp.path().join("out");

    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out.to_str().unwrap()])
        .unwrap();

    for split in ["train", "test", "val"] {
        let content = fs::read_to_string(out.join("corpus").join(format!("{split}.tsv"))).unwrap();
        for line in content.lines().skip(1) {
            assert!(!line.starts_with("b x"), "withheld row leaked into {split}: {line}");
        }
    }
}

// ---------------------------------------------------------------------------
// Cache and overwrite policy
// ---------------------------------------------------------------------------

#[test]
fn test_second_run_reuses_cached_artifacts() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let config = write_manifest(tmp.path(), "corpus", &input, "");
    let out = tmp.path().join("out");
    let out_str = out.to_str().unwrap();

    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_str]).unwrap();
    let first = fs::read(out.join("corpus").join("summary.json")).unwrap();

    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_str]).unwrap();
    let second = fs::read(out.join("corpus").join("summary.json")).unwrap();

    // byte-identical: nothing was recomputed or rewritten
    assert_eq!(first, second);
}

#[test]
fn test_overwrite_recomputes_with_new_seed() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let config = write_manifest(tmp.path(), "corpus", &input, "");
    let out = tmp.path().join("out");
    let out_str = out.to_str().unwrap();

    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_str]).unwrap();

    run(&[
        "partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_str,
        "--overwrite", "--seed", "7",
    ])
    .unwrap();

    let summary = ArtifactStore::new(&out).load_summary("corpus").unwrap();
    assert_eq!(summary.seed, 7);
}

#[test]
fn test_seed_override_without_overwrite_keeps_cache() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let config = write_manifest(tmp.path(), "corpus", &input, "");
    let out = tmp.path().join("out");
    let out_str = out.to_str().unwrap();

    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_str]).unwrap();
    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_str, "--seed", "7"])
        .unwrap();

    // cached artifacts win; the summary still records the original seed
    let summary = ArtifactStore::new(&out).load_summary("corpus").unwrap();
    assert_eq!(summary.seed, 42);
}

#[test]
fn test_dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let config = write_manifest(tmp.path(), "corpus", &input, "");
    let out = tmp.path().join("out");

    run(&[
        "partir", "--quiet", "split", config.to_str().unwrap(),
        "--out-dir", out.to_str().unwrap(), "--dry-run",
    ])
    .unwrap();

    assert!(!out.exists());
}

// ---------------------------------------------------------------------------
// Failure isolation
// ---------------------------------------------------------------------------

#[test]
fn test_failing_dataset_does_not_abort_the_rest() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let good = write_manifest(tmp.path(), "corpus", &input, "");
    let bad = write_manifest(tmp.path(), "broken", Path::new("missing.tsv"), "");
    let out = tmp.path().join("out");

    let err = run(&[
        "partir", "--quiet", "split",
        bad.to_str().unwrap(), good.to_str().unwrap(),
        "--out-dir", out.to_str().unwrap(),
    ])
    .unwrap_err();

    assert_eq!(err, "1 of 2 datasets failed");
    assert!(ArtifactStore::new(&out).is_cached("corpus"));
    assert!(!ArtifactStore::new(&out).is_cached("broken"));
}

#[test]
fn test_determinism_across_processes() {
    let tmp = TempDir::new().unwrap();
    let input = write_table(tmp.path());
    let config = write_manifest(tmp.path(), "corpus", &input, "");

    let out_a = tmp.path().join("a");
    let out_b = tmp.path().join("b");
    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_a.to_str().unwrap()])
        .unwrap();
    run(&["partir", "--quiet", "split", config.to_str().unwrap(), "--out-dir", out_b.to_str().unwrap()])
        .unwrap();

    for split in ["train", "test", "val"] {
        let a = fs::read(out_a.join("corpus").join(format!("{split}.tsv"))).unwrap();
        let b = fs::read(out_b.join("corpus").join(format!("{split}.tsv"))).unwrap();
        assert_eq!(a, b, "{split} artifacts differ between runs");
    }
}
