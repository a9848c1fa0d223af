use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Fresh working directory with its own config and data homes
fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("takelys_cli_{}", name));
    if dir.exists() {
        let _ = fs::remove_dir_all(&dir);
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn takelys(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_takelys"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut input = child.stdin.take().unwrap();
    if !stdin.is_empty() {
        input.write_all(stdin.as_bytes()).unwrap();
    }
    drop(input);

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_no_command_prints_usage() {
    let dir = workdir("no_command");
    let output = takelys(&dir, &[], "");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no command given"));
    assert!(stderr.contains("Usage:"));
    assert!(output.stdout.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_arguments_exit_with_usage() {
    let dir = workdir("missing_args");

    for args in [&["range"][..], &["sort"][..], &["frobnicate"][..]] {
        let output = takelys(&dir, args, "");
        assert_eq!(output.status.code(), Some(2), "{:?}", args);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"), "{:?}", args);
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_calendar_without_date_prints_zero() {
    let dir = workdir("calendar_zero");
    let output = takelys(&dir, &["calendar"], "");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0");

    let output = takelys(&dir, &["calendar", "2024-03-01"], "");
    assert_eq!(stdout(&output), "2024-03-01");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_range_and_short() {
    let dir = workdir("range");

    let output = takelys(&dir, &["range", "2024-03-15", "2024-03-01"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1-15 Mrt 2024");

    let output = takelys(&dir, &["short", "2024-12-25"], "");
    assert_eq!(stdout(&output), "25 Des");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_sort_reads_json_from_stdin() {
    let dir = workdir("sort_stdin");
    let output = takelys(&dir, &["sort", "v", "desc"], r#"[{"v": 3}, {"v": 1}, {"v": 2}]"#);

    assert!(output.status.success());
    let sorted: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(sorted, json!([{"v": 3}, {"v": 2}, {"v": 1}]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_sort_uses_configured_default_order() {
    let dir = workdir("sort_config");
    fs::write(dir.join("takelys.toml"), "[sort]\ndefault_order = \"desc\"\n").unwrap();

    let output = takelys(&dir, &["sort", "name"], r#"[{"name": "appel"}, {"name": "peer"}]"#);

    assert!(output.status.success());
    let sorted: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(sorted, json!([{"name": "peer"}, {"name": "appel"}]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_sort_mixed_column_succeeds() {
    let dir = workdir("sort_mixed");
    let records: Vec<Value> = (0..200)
        .map(|i| {
            let n = (i * 37) % 101;
            if i % 3 == 0 {
                json!({ "v": format!("{}a", n) })
            } else {
                json!({ "v": n })
            }
        })
        .collect();
    let input = serde_json::to_string(&records).unwrap();

    let output = takelys(&dir, &["sort", "v"], &input);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let sorted: Vec<Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(sorted.len(), records.len());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_sort_rejects_invalid_json() {
    let dir = workdir("sort_invalid");
    let output = takelys(&dir, &["sort", "v"], "not json");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Expected a JSON array"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_new_task_prints_blank_task() {
    let dir = workdir("new_task");
    let output = takelys(&dir, &["new-task"], "");

    assert!(output.status.success());
    let page: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(page["task"]["name"], json!(""));
    assert_eq!(page["task"]["repeat_interval_number"], json!(1));
    assert!(page["task"].get("category_id").is_none());

    let _ = fs::remove_dir_all(&dir);
}
