use std::fs;

use solsort_bench::config::BenchConfig;
use solsort_bench::trials::TrialRunner;
use tempfile::tempdir;

fn load_config(output_dir: &std::path::Path) -> BenchConfig {
    let yaml = format!(
        r#"
run_id: "test_smoke"
seed: 4242
rules:
  max_turns: 2000
trials:
  count: 12
  deck_size: 8
outputs:
  jsonl: "{jsonl}"
  summary_md: "{summary}"
logging:
  enable_structured: false
"#,
        jsonl = output_dir.join("trials.jsonl").display(),
        summary = output_dir.join("summary.md").display(),
    );

    let mut cfg: BenchConfig = serde_yaml::from_str(&yaml).expect("valid yaml");
    cfg.validate().expect("config validates");
    cfg
}

#[test]
fn trial_smoke_test_is_reproducible() {
    let first_dir = tempdir().expect("temp dir");
    let second_dir = tempdir().expect("temp dir");

    let mut contents = Vec::new();
    for dir in [first_dir.path(), second_dir.path()] {
        let config = load_config(dir);
        let outputs = config.resolved_outputs();
        let summary = TrialRunner::new(config, outputs).run().expect("trials complete");
        assert_eq!(summary.trials, 12);
        assert!(summary.summary_path.exists());
        contents.push(fs::read_to_string(&summary.jsonl_path).expect("read jsonl"));
    }

    assert_eq!(contents[0], contents[1]);
    assert_eq!(contents[0].lines().count(), 12);
}

#[test]
fn lost_rows_echo_the_input() {
    let dir = tempdir().expect("temp dir");
    let config = load_config(dir.path());
    let outputs = config.resolved_outputs();
    TrialRunner::new(config, outputs.clone())
        .run()
        .expect("trials complete");

    let rows = fs::read_to_string(&outputs.jsonl).expect("read jsonl");
    for line in rows.lines() {
        let row: serde_json::Value = serde_json::from_str(line).expect("row");
        let input = row["input"].as_array().expect("input array");
        let output = row["output"].as_array().expect("output array");
        assert_eq!(input.len(), output.len());
        if row["won"] == serde_json::Value::Bool(false) {
            assert_eq!(input, output);
        }
    }
}
