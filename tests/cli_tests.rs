//! Integration tests for the adhocnet CLI
//!
//! These run the binary against the demo network and check its output.

mod common;

use common::adhocnet;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const DEMO_TRACE: &str = "\
Start: PC-A
Visit: Channel-1: (PC-B, PC-A)
Visit: PC-B
Visited: Channel-1: (PC-B, PC-A)
Visit: Channel-2: (PC-B, PC-C)
Visit: PC-C
Visit: Channel-3: (PC-B, Mobile-A)
Visit: Mobile-A
Visited: Channel-2: (PC-B, PC-C)
Visited: Channel-3: (PC-B, Mobile-A)
";

const DEMO_DUMP: &str = "\
[0] PC-A
[1] PC-B
[2] PC-C
[3] Mobile-A
Channel-1: (PC-B, PC-A)
Channel-2: (PC-B, PC-C)
Channel-3: (PC-B, Mobile-A)
";

// ============================================================================
// Help and defaults
// ============================================================================

#[test]
fn test_help_flag() {
    adhocnet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: adhocnet"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("cycle"));
}

#[test]
fn test_no_subcommand_prints_trace() {
    adhocnet().assert().success().stdout(DEMO_TRACE);
}

#[test]
fn test_print_trace() {
    adhocnet().arg("print").assert().success().stdout(DEMO_TRACE);
}

#[test]
fn test_print_without_revisits() {
    adhocnet()
        .args(["print", "--no-revisits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start: PC-A"))
        .stdout(predicate::str::contains("Visited:").not());
}

#[test]
fn test_print_cross_edges_after_added_link() {
    adhocnet()
        .args(["--add-link", "Channel-4:PC-A:PC-C", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cross Edge: Channel-2: (PC-B, PC-C)",
        ));
}

#[test]
fn test_print_second_component() {
    adhocnet()
        .args(["--add-node", "Mobile-Z", "print"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Start: Mobile-Z\n"));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_dump() {
    adhocnet().arg("dump").assert().success().stdout(DEMO_DUMP);
}

#[test]
fn test_dump_with_additions() {
    adhocnet()
        .args([
            "--add-node",
            "PC-D",
            "--add-link",
            "Channel-4:PC-D:Mobile-A",
            "dump",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[4] PC-D\n"))
        .stdout(predicate::str::ends_with("Channel-4: (PC-D, Mobile-A)\n"));
}

#[test]
fn test_cycle() {
    adhocnet()
        .arg("cycle")
        .assert()
        .success()
        .stdout("cycle: no\n");

    adhocnet()
        .args(["--add-link", "Channel-4:PC-A:PC-C", "cycle", "--links"])
        .assert()
        .success()
        .stdout("cycle: yes\nChannel-2: (PC-B, PC-C)\n");
}

#[test]
fn test_components() {
    adhocnet().arg("components").assert().success().stdout("1\n");

    adhocnet()
        .args(["--add-node", "PC-D", "--add-node", "PC-E", "components"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_adjacent() {
    adhocnet()
        .args(["adjacent", "PC-A", "PC-B"])
        .assert()
        .success()
        .stdout("yes\n");

    adhocnet()
        .args(["adjacent", "PC-A", "Mobile-A"])
        .assert()
        .success()
        .stdout("no\n");
}

#[test]
fn test_incident() {
    adhocnet()
        .args(["incident", "PC-B"])
        .assert()
        .success()
        .stdout(
            "Channel-1: (PC-B, PC-A)\nChannel-2: (PC-B, PC-C)\nChannel-3: (PC-B, Mobile-A)\n",
        );

    adhocnet()
        .args(["incident", "Mobile-A"])
        .assert()
        .success()
        .stdout("Channel-3: (PC-B, Mobile-A)\n");
}

#[test]
fn test_tree() {
    adhocnet()
        .args(["tree", "PC-C"])
        .assert()
        .success()
        .stdout(DEMO_DUMP);

    adhocnet()
        .args(["--add-link", "Channel-4:PC-A:PC-C", "tree", "PC-A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Channel-4: (PC-A, PC-C)"))
        .stdout(predicate::str::contains("Channel-2").not());
}

#[test]
fn test_path() {
    adhocnet()
        .args(["path", "PC-A", "Mobile-A"])
        .assert()
        .success()
        .stdout(
            "[0] PC-A\n[1] PC-B\n[2] Mobile-A\nChannel-1: (PC-B, PC-A)\nChannel-3: (PC-B, Mobile-A)\n",
        );

    adhocnet()
        .args(["path", "PC-A", "Mobile-A", "--hops"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_path_to_unreachable_node() {
    adhocnet()
        .args(["--add-node", "PC-D", "path", "PC-A", "PC-D"])
        .assert()
        .success()
        .stdout("no path\n");
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_node_is_data_error() {
    adhocnet()
        .args(["tree", "PC-Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: PC-Z could not be found"));
}

#[test]
fn test_unknown_kind_is_usage_error() {
    adhocnet()
        .args(["incident", "Router-A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("node type 'Router' not recognised"));

    adhocnet()
        .args(["--add-link", "Cable-9:PC-A:PC-C", "dump"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("link type 'Cable' not recognised"));
}

#[test]
fn test_malformed_node_argument() {
    adhocnet().args(["tree", "PCA"]).assert().code(2);
}

#[test]
fn test_duplicate_link_is_rejected() {
    adhocnet()
        .args(["--add-link", "Channel-5:PC-A:PC-B", "dump"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("remove link 1 before trying again"));
}

#[test]
fn test_quiet_suppresses_errors() {
    adhocnet()
        .args(["--quiet", "tree", "PC-Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:").not());
}

// ============================================================================
// Configuration and logging
// ============================================================================

#[test]
fn test_config_hides_trace_events() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[trace]\nshow_revisits = false\nshow_cross_edges = false\n",
    )
    .unwrap();

    adhocnet()
        .arg("--config")
        .arg(&path)
        .args(["--add-link", "Channel-4:PC-A:PC-C", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visit: PC-B"))
        .stdout(predicate::str::contains("Visited:").not())
        .stdout(predicate::str::contains("Cross Edge:").not());
}

#[test]
fn test_config_from_config_dir() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[trace]\nshow_revisits = false\n",
    )
    .unwrap();

    adhocnet()
        .env("ADHOCNET_CONFIG_DIR", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Visited:").not());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[trace\n").unwrap();

    adhocnet()
        .arg("--config")
        .arg(&path)
        .arg("dump")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_log_level_debug_shows_debug_messages() {
    adhocnet()
        .args(["--log-level", "debug", "dump"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_default_log_level_hides_debug_messages() {
    adhocnet()
        .arg("dump")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_flag_beats_config_level() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[log]\nlevel = \"warn\"\n").unwrap();

    adhocnet()
        .arg("--config")
        .arg(&path)
        .args(["--verbose", "dump"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_config_level_applies_without_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

    adhocnet()
        .arg("--config")
        .arg(&path)
        .arg("dump")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));

    adhocnet()
        .arg("--config")
        .arg(&path)
        .args(["--log-level", "warn", "dump"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json() {
    adhocnet()
        .args(["--log-level", "debug", "--log-json", "dump"])
        .assert()
        .success()
        .stdout(DEMO_DUMP)
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_self_link_is_usage_error() {
    adhocnet()
        .args(["--add-link", "Channel-4:PC-A:PC-A", "dump"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("joins PC-A to itself"));
}
