use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use u_routing_gen::format::{load_instance, parse_instance};
use u_routing_gen::models::Instance;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "u-routing-gen-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_u-routing-gen"))
        .args(args)
        .output()
        .expect("run u-routing-gen")
}

#[test]
fn stdout_instance_parses() {
    let output = run(&["--nodes", "5", "--seed", "42"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let instance = parse_instance(&stdout).expect("valid instance");
    assert_eq!(instance.num_nodes(), 5);
    assert_eq!(instance.demand().len(), 5);
    assert_eq!(instance.graph().depot_edge_count(), 10);
    assert!(instance.graph().customer_edge_count() <= 10);
}

#[test]
fn same_seed_same_output() {
    let a = run(&["--nodes", "20", "--seed", "7"]);
    let b = run(&["--nodes", "20", "--seed", "7"]);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn writes_output_file() {
    let dir = unique_temp_dir("single");
    let path = dir.join("grafo_51.txt");
    let output = run(&[
        "--nodes",
        "8",
        "--max-weight",
        "10",
        "--probability",
        "1",
        "--seed",
        "3",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let instance = load_instance(&path).expect("valid instance file");
    assert_eq!(instance.graph().len(), 16 + 28);
    assert!(instance.graph().iter().all(|e| (1..=10).contains(&e.weight)));
}

#[test]
fn batch_writes_numbered_files() {
    let dir = unique_temp_dir("batch");
    let output = run(&[
        "--nodes",
        "4",
        "--seed",
        "100",
        "--count",
        "3",
        "--out-dir",
        dir.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    for k in 1..=3 {
        let instance = load_instance(dir.join(format!("grafo_{k}.txt"))).expect("batch file");
        assert_eq!(instance.num_nodes(), 4);
    }
    assert!(!dir.join("grafo_4.txt").exists());

    // instance k uses seed + k - 1
    let second = run(&["--nodes", "4", "--seed", "101"]);
    let expected = fs::read(dir.join("grafo_2.txt")).expect("read grafo_2");
    assert_eq!(second.stdout, expected);
}

#[test]
fn json_output() {
    let output = run(&["--nodes", "3", "--seed", "9", "--json"]);
    assert!(output.status.success());
    let instance = Instance::from_json(&String::from_utf8_lossy(&output.stdout)).expect("json");
    assert_eq!(instance.num_nodes(), 3);

    let text = run(&["--nodes", "3", "--seed", "9"]);
    let parsed = parse_instance(&String::from_utf8_lossy(&text.stdout)).expect("text");
    assert_eq!(parsed, instance);
}

#[test]
fn config_file_with_overrides() {
    let dir = unique_temp_dir("config");
    let config = dir.join("config.json");
    fs::write(
        &config,
        r#"{ "num_nodes": 6, "demand": { "min": 5, "max": 5 }, "graph": { "max_weight": 1, "probability": 0.0 } }"#,
    )
    .expect("write config");

    let output = run(&["--config", config.to_str().unwrap(), "--seed", "1", "--probability", "1"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let instance = parse_instance(&String::from_utf8_lossy(&output.stdout)).expect("valid");
    assert_eq!(instance.num_nodes(), 6);
    assert_eq!(instance.total_demand(), 30);
    assert_eq!(instance.graph().customer_edge_count(), 15);
    assert!(instance.graph().iter().all(|e| e.weight == 1));
}

#[test]
fn flags_repair_invalid_config_file() {
    let dir = unique_temp_dir("config-repair");
    let config = dir.join("config.json");
    fs::write(&config, r#"{ "num_nodes": 3, "graph": { "max_weight": 0 } }"#).expect("write config");

    let broken = run(&["--config", config.to_str().unwrap(), "--seed", "1"]);
    assert!(!broken.status.success());

    let output = run(&["--config", config.to_str().unwrap(), "--seed", "1", "--max-weight", "5"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let instance = parse_instance(&String::from_utf8_lossy(&output.stdout)).expect("valid");
    assert_eq!(instance.num_nodes(), 3);
    assert!(instance.graph().iter().all(|e| (1..=5).contains(&e.weight)));
}

#[test]
fn rejects_invalid_parameters() {
    assert!(!run(&["--max-weight", "0"]).status.success());
    assert!(!run(&["--min-demand", "0"]).status.success());
    assert!(!run(&["--min-demand", "8", "--max-demand", "3"]).status.success());
    assert!(!run(&["--probability", "NaN"]).status.success());
}

#[test]
fn count_requires_out_dir() {
    let output = run(&["--count", "2"]);
    assert!(!output.status.success());
}
