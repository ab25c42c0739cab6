use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

fn test_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("failed to create test directory");
    dir
}

fn write_feed(dir: &Path) -> PathBuf {
    let path = dir.join("feed.csv");
    let contents = String::new()
        + "date,region,cases\n"
        + "2020-03-01,Bremen,100\n"
        + "2020-03-01,Hamburg,7\n"
        + "2020-03-02,Bremen,150\n"
        + "2020-03-03,Bremen,200\n"
        + "2020-03-04,Bremen,250\n"
        + "2020-03-05,Bremen,300\n"
        + "2020-03-06,Bremen,350\n"
        + "2020-03-07,Bremen,400\n"
        + "2020-03-08,Bremen,500\n"
        + "2020-03-09,Bremen,560\n";
    fs::write(&path, contents).expect("failed to write feed file");
    path
}

fn run_bin(args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_incidence"));
    Command::new(bin)
        .args(args)
        .env_remove("CASES_FEED_URL")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .output()
        .expect("failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("failed to convert stdout to string")
}

#[test]
fn table_prints_summary_and_rows() {
    let dir = test_dir("table_prints_summary_and_rows");
    let feed = write_feed(&dir);

    let output = run_bin(&[
        "-r",
        "Bremen",
        "--population",
        "1000000",
        "-m",
        "100",
        "-s",
        feed.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let text = stdout(&output);
    assert!(text.contains("Region: Bremen (population 1,000,000, override)"), "{text}");
    assert!(text.contains("Peak 7d: 50.00 on 2020-03-08"), "{text}");

    let row9 = text
        .lines()
        .find(|l| l.starts_with("2020-03-09"))
        .expect("missing row for 2020-03-09");
    assert!(row9.contains("41.00"), "{row9}");
    assert!(row9.contains("50.00"), "{row9}");
}

#[test]
fn export_json_contains_every_row() {
    let dir = test_dir("export_json_contains_every_row");
    let feed = write_feed(&dir);
    let out = dir.join("rows.json");

    let output = run_bin(&[
        "export",
        "-r",
        "Bremen",
        "-m",
        "100",
        "-s",
        feed.to_str().unwrap(),
        "--format",
        "json",
        "-o",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("missing export")).expect("invalid json");
    assert_eq!(json["region"], "Bremen");
    assert_eq!(json["population"], 681_202);
    assert_eq!(json["population_origin"], "registry");
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(9));
}

#[test]
fn unknown_region_exits_with_not_found() {
    let dir = test_dir("unknown_region_exits_with_not_found");
    let feed = write_feed(&dir);

    let output = run_bin(&["table", "-r", "bremen", "-m", "100", "-s", feed.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Did you mean 'Bremen'?"), "{err}");
}

#[test]
fn non_positive_max_exits_with_invalid_parameter() {
    let dir = test_dir("non_positive_max_exits_with_invalid_parameter");
    let feed = write_feed(&dir);

    let output = run_bin(&["plot", "-r", "Bremen", "-m", "0", "-s", feed.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn regions_filter_lists_matches() {
    let output = run_bin(&["regions", "--filter", "köln"]);
    assert!(output.status.success(), "{output:?}");

    let text = stdout(&output);
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["SK Köln\t1087863"]);
}
