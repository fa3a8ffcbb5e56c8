//! # Builtin Scenario Verification
//!
//! Runs the demo's builtin script end to end and checks every output line.
//!
//! Run with: cargo test --package dynbuf --test builtin_scenario

use dynbuf::{run_script, Script};

#[test]
fn builtin_scenario_output() {
    let mut out = Vec::new();
    let report = run_script(&Script::builtin(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    let expected = [
        // get 0..2, len
        "1",
        "2",
        "3",
        "3",
        // append 4, print, pop
        "ok",
        "[1, 2, 3, 4]",
        "4",
        // insert(1, 9), print, index_of 9
        "ok",
        "[1, 9, 2, 3]",
        "1",
        // remove 9, append 2, count 2
        "ok",
        "ok",
        "2",
        // reverse, print, sort, print
        "ok",
        "[2, 3, 2, 1]",
        "ok",
        "[1, 2, 2, 3]",
        // pop_at 0, set(2, 7), print
        "1",
        "ok",
        "[2, 2, 7]",
        // documented failures
        "error(-1): index out of range: index 5, length 3",
        "error(-3): value not found: 9",
        // drain
        "7",
        "2",
        "2",
        "error(-2): pop from empty array",
        "[]",
    ];

    assert_eq!(lines, expected);
    assert_eq!(report.executed, expected.len());
    assert_eq!(report.failed, 3);
    assert!(report.final_contents.is_empty());
}

#[test]
fn script_file_round_trip() {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("dynbuf_script_{id}.toml"));
    std::fs::write(
        &path,
        "initial = [5, 3, 8]\n\n[[ops]]\nop = \"sort\"\n\n[[ops]]\nop = \"print\"\n",
    )
    .unwrap();

    let script = Script::load(&path).unwrap();
    let mut out = Vec::new();
    let report = run_script(&script, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "ok\n[3, 5, 8]\n");
    assert_eq!(report.final_contents, vec![3, 5, 8]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn shipped_insert_script() {
    let script = Script::load(concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/insert.toml")).unwrap();
    let mut out = Vec::new();
    let report = run_script(&script, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "ok\n[1, 9, 2, 3, 4]\n5\nerror(-1): index out of range: index 9, length 5\n"
    );
    assert_eq!(report.failed, 1);
}
