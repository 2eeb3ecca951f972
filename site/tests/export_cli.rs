//! End-to-end tests for the `portfolio-export` binary.

#![cfg(feature = "ssr")]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn export() -> Command {
    cargo_bin_cmd!("portfolio-export")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        export()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--out"))
            .stdout(predicate::str::contains("--animated"));
    }

    #[test]
    fn shows_version() {
        export()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("portfolio-export"));
    }

    #[test]
    fn rejects_unknown_flag() {
        export().arg("--no-such-flag").assert().failure();
    }
}

mod writing {
    use super::*;

    #[test]
    fn writes_document_and_prints_path() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("site").join("index.html");

        export()
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("LeetCode Knight"));
        assert!(html.contains("Team Player"));
        assert!(!html.contains("opacity: 0.000"));
    }

    #[test]
    fn same_seed_gives_same_page() {
        let tmp = TempDir::new().unwrap();
        let first = tmp.path().join("a.html");
        let second = tmp.path().join("b.html");

        for out in [&first, &second] {
            export()
                .args(["--seed", "42", "--out"])
                .arg(out)
                .assert()
                .success();
        }

        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn animated_keeps_hidden_poses() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("animated.html");

        export()
            .arg("--animated")
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("scale(0.300)"));
        assert!(html.contains("opacity: 0.000"));
    }

    #[test]
    fn config_sizes_stars_but_not_achievement_particles() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("motion.toml");
        fs::write(&config, "[particles]\ncount = 24\nstar_count = 5\n").unwrap();
        let out = tmp.path().join("index.html");

        export()
            .arg("--config")
            .arg(&config)
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(&out).unwrap();
        assert_eq!(html.matches("class=\"particle\"").count(), 12);
        assert_eq!(html.matches("class=\"star\"").count(), 5);
    }
}

mod failures {
    use super::*;

    #[test]
    fn invalid_config_fails() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("bad.toml");
        fs::write(&config, "[observer]\nthreshold = 2.5\n").unwrap();

        export()
            .arg("--config")
            .arg(&config)
            .arg("--out")
            .arg(tmp.path().join("index.html"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }

    #[test]
    fn missing_config_fails() {
        let tmp = TempDir::new().unwrap();

        export()
            .arg("--config")
            .arg(tmp.path().join("nope.toml"))
            .arg("--out")
            .arg(tmp.path().join("index.html"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config"));
    }
}
