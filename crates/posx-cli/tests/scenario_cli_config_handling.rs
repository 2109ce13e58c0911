use predicates::prelude::*;
use std::io::Write;

#[allow(deprecated)]
fn posx() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("posx").expect("posx binary")
}

const SAMPLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/sample.yaml");

fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("tempfile");
    f.write_all(contents.as_bytes()).expect("write yaml");
    f
}

#[test]
fn empty_fills_exit_non_zero_with_no_fills() {
    let empty = yaml_file("fills: []\n");

    posx()
        .args(["report", "--config", SAMPLE_PATH, "--config"])
        .arg(empty.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no fills"));
}

#[test]
fn config_hash_prints_hash_and_canonical_json() {
    let out = posx()
        .args(["config-hash", SAMPLE_PATH])
        .output()
        .expect("run posx");
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).expect("utf8");
    let mut lines = stdout.lines();
    let hash_line = lines.next().expect("hash line");
    let hash = hash_line.strip_prefix("config_hash=").expect("config_hash= prefix");
    assert_eq!(hash.len(), 64);

    let canonical: serde_json::Value =
        serde_json::from_str(lines.next().expect("json line")).expect("canonical json");
    assert_eq!(canonical["instrument"], "BTC");
}

#[test]
fn unknown_keys_warn_by_default_and_fail_when_strict() {
    let typo = yaml_file("stop_los: 85000\n");

    posx()
        .args(["analyze", "--config", SAMPLE_PATH, "--config"])
        .arg(typo.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("/stop_los"));

    posx()
        .args(["analyze", "--strict-config", "--config", SAMPLE_PATH, "--config"])
        .arg(typo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_UNUSED_KEYS"));
}

#[test]
fn configured_language_and_instrument_are_used() {
    let overlay = yaml_file("instrument: ETH\nreport:\n  language: zh\n");

    posx()
        .args(["adjust", "--config", SAMPLE_PATH, "--config"])
        .arg(overlay.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("本金收益调节建议"))
        .stdout(predicate::str::contains(" ETH （金额"));
}

#[test]
fn missing_required_field_fails_with_context() {
    let partial = yaml_file("fills:\n  - { price: 100, amount: 1000 }\ntake_profit: 110\n");

    posx()
        .args(["analyze", "--config"])
        .arg(partial.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid analysis config"));
}

#[test]
fn sell_side_fill_is_never_counted_as_a_buy() {
    let sell = yaml_file("fills:\n  - { price: 100000, amount: 1000, side: sell }\n");

    posx()
        .args(["analyze", "--strict-config", "--config", SAMPLE_PATH, "--config"])
        .arg(sell.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("/fills/0/side"));

    posx()
        .args(["analyze", "--config", SAMPLE_PATH, "--config"])
        .arg(sell.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("/fills/0/side"))
        .stderr(predicate::str::contains("unknown field `side`"));
}
