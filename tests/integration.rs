//! Integration tests for treesum


use harness::{SAMPLE, TestTranscript, run_treesum, run_treesum_stdin};

#[test]
fn test_transcript_written_to_temp_dir() {
    let transcript = TestTranscript::new(SAMPLE);
    assert!(transcript.path().starts_with(transcript.dir()));
    assert_eq!(std::fs::read_to_string(transcript.path()).unwrap(), SAMPLE);
}

#[test]
fn test_basic_report() {
    let transcript = TestTranscript::new(SAMPLE);

    let (stdout, stderr, success) = run_treesum(transcript.path(), &[]);
    assert!(success, "treesum should succeed: {}", stderr);
    assert!(stdout.contains("Used:          48,381,165"), "{}", stdout);
    assert!(stdout.contains("Small dirs:    95,437"), "{}", stdout);
    assert!(stdout.contains("To free:       8,381,165"), "{}", stdout);
    assert!(stdout.contains("Delete:        d  [24,933,642]"), "{}", stdout);
}

#[test]
fn test_reads_stdin() {
    let (stdout, _stderr, success) = run_treesum_stdin(SAMPLE, &[]);
    assert!(success);
    assert!(stdout.contains("Small dirs:    95,437"), "{}", stdout);

    let (stdout, _stderr, success) = run_treesum_stdin(SAMPLE, &["-"]);
    assert!(success);
    assert!(stdout.contains("Delete:        d"), "{}", stdout);
}

#[test]
fn test_custom_threshold() {
    let transcript = TestTranscript::new(SAMPLE);

    // Only e (584) qualifies
    let (stdout, _stderr, success) = run_treesum(transcript.path(), &["--threshold", "1000"]);
    assert!(success);
    assert!(stdout.contains("Small dirs:    584 (each <= 1,000)"), "{}", stdout);
}

#[test]
fn test_custom_capacity_and_required() {
    let transcript = TestTranscript::new(SAMPLE);

    // Free = 48,381,165 + 100 - 48,381,165 = 100, so 500 must be freed:
    // e (584) is the smallest directory that big
    let (stdout, _stderr, success) = run_treesum(
        transcript.path(),
        &["--capacity", "48381265", "--required", "600"],
    );
    assert!(success);
    assert!(stdout.contains("To free:       500"), "{}", stdout);
    assert!(stdout.contains("Delete:        e  [584]"), "{}", stdout);
}

#[test]
fn test_nothing_to_delete() {
    let transcript = TestTranscript::new(SAMPLE);

    let (stdout, _stderr, success) = run_treesum(transcript.path(), &["--required", "0"]);
    assert!(success);
    assert!(stdout.contains("nothing, enough space is free"), "{}", stdout);
}

#[test]
fn test_tree_output() {
    let transcript = TestTranscript::new(SAMPLE);

    let (stdout, _stderr, success) = run_treesum(transcript.path(), &["--tree"]);
    assert!(success);
    assert!(stdout.starts_with("/  [48381165]\n"), "{}", stdout);
    assert!(stdout.contains("├── a  [94853]"), "{}", stdout);
    assert!(stdout.contains("│   ├── e  [584]"), "{}", stdout);
    assert!(stdout.contains("│   │   └── i  [584]"), "{}", stdout);
    assert!(stdout.contains("└── k  [7214296]"), "{}", stdout);
    assert!(stdout.contains("3 directories, 10 files"), "{}", stdout);
    assert!(stdout.contains("Disk Usage"), "report follows the tree");
}

#[test]
fn test_tree_human_sizes() {
    let transcript = TestTranscript::new(SAMPLE);

    let (stdout, _stderr, success) = run_treesum(transcript.path(), &["--tree", "-s"]);
    assert!(success);
    assert!(stdout.starts_with("/  [46.1M]\n"), "{}", stdout);
    assert!(stdout.contains("Used:          46.1M"), "{}", stdout);
}

#[test]
fn test_json_output() {
    let transcript = TestTranscript::new(SAMPLE);

    let (stdout, _stderr, success) = run_treesum(transcript.path(), &["--json"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["root_size"], 48381165);
    assert_eq!(json["small_directories_total"], 95437);
    assert_eq!(json["space_to_free"], 8381165);
    assert_eq!(json["deletion_candidate"]["name"], "d");
    assert_eq!(json["deletion_candidate"]["size"], 24933642);
    assert!(json.get("tree").is_none());
}

#[test]
fn test_json_with_tree() {
    let transcript = TestTranscript::new(SAMPLE);

    let (stdout, _stderr, success) = run_treesum(transcript.path(), &["--json", "--tree"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let tree = &json["tree"];
    assert_eq!(tree["type"], "dir");
    assert_eq!(tree["name"], "/");
    assert_eq!(tree["children"][0]["name"], "a");
    assert_eq!(tree["children"][0]["size_bytes"], 94853);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let transcript = TestTranscript::new(SAMPLE);

    let (stdout, stderr, success) = run_treesum(transcript.path(), &["--json", "-v"]);
    assert!(success);
    assert!(stderr.contains("new directory"), "{}", stderr);
    // Logging never pollutes stdout
    serde_json::from_str::<serde_json::Value>(&stdout).expect("stdout stays valid JSON");
}
