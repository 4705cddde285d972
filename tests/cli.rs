mod common;

use assert_cmd::Command;
use common::Trees;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("kodegen_bundler_universal").unwrap()
}

#[test]
fn no_arguments_prints_usage() {
    cmd()
        .assert()
        .code(2)
        .stdout(contains("Not enough args"))
        .stdout(contains("<PRIMARY> <SECONDARY> <DESTINATION>"));
}

#[test]
fn two_arguments_are_not_enough() {
    cmd()
        .args(["arm64", "x86_64"])
        .assert()
        .code(2)
        .stdout(contains("Not enough args"));
}

#[test]
fn help_exits_successfully() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--include-secondary-only"));
}

#[test]
fn unrunnable_merge_tool_is_reported_per_file() {
    let trees = Trees::new();
    common::write(&trees.primary, "liba.a", b"arm64-a");
    common::write(&trees.primary, "README.md", b"readme");
    common::write(&trees.secondary, "liba.a", b"x86_64-a");
    let missing_tool = trees.scratch().join("no-such-lipo");

    cmd()
        .arg("--lipo")
        .arg(&missing_tool)
        .arg(&trees.primary)
        .arg(&trees.secondary)
        .arg(&trees.destination)
        .assert()
        .code(1)
        .stdout(contains("not found, universal binaries will not be created"))
        .stderr(contains(format!("failed to run {}", missing_tool.display())))
        .stderr(contains("exit status: none"))
        .stderr(contains("1 of 1 merges failed"));

    assert!(!trees.destination.join("liba.a").exists());
    assert!(trees.destination.join("README.md").exists());
}

#[cfg(unix)]
mod with_fake_lipo {
    use super::*;
    use common::{fake_lipo, write};
    use std::fs;

    #[test]
    fn end_to_end_merge() {
        let trees = Trees::new();
        write(&trees.primary, "lib/x.a", b"arm64-x");
        write(&trees.primary, "lib/y.txt", b"plain");
        write(&trees.secondary, "lib/x.a", b"x86_64-x");
        let lipo = fake_lipo(trees.scratch(), false);

        cmd()
            .arg("--lipo")
            .arg(&lipo)
            .arg(&trees.primary)
            .arg(&trees.secondary)
            .arg(&trees.destination)
            .assert()
            .success();

        assert_eq!(
            fs::read(trees.destination.join("lib/x.a")).unwrap(),
            b"arm64-xx86_64-x"
        );
        assert_eq!(fs::read(trees.destination.join("lib/y.txt")).unwrap(), b"plain");
    }

    #[test]
    fn extra_positional_arguments_are_ignored() {
        let trees = Trees::new();
        write(&trees.primary, "lib/x.a", b"arm64-x");
        write(&trees.secondary, "lib/x.a", b"x86_64-x");
        let lipo = fake_lipo(trees.scratch(), false);

        cmd()
            .arg("--lipo")
            .arg(&lipo)
            .arg(&trees.primary)
            .arg(&trees.secondary)
            .arg(&trees.destination)
            .arg("extra")
            .assert()
            .success();

        assert_eq!(
            fs::read(trees.destination.join("lib/x.a")).unwrap(),
            b"arm64-xx86_64-x"
        );
        assert!(!trees.destination.join("extra").exists());
    }

    #[test]
    fn missing_counterpart_is_diagnosed_on_stdout() {
        let trees = Trees::new();
        write(&trees.primary, "a.a", b"arm64-a");
        write(&trees.primary, "README.md", b"readme");
        let lipo = fake_lipo(trees.scratch(), false);
        let expected = trees.secondary.join("a.a");

        cmd()
            .arg("--lipo")
            .arg(&lipo)
            .arg(&trees.primary)
            .arg(&trees.secondary)
            .arg(&trees.destination)
            .assert()
            .success()
            .stdout(contains(format!(
                "Lib not found in secondary source: {}",
                expected.display()
            )));

        assert!(!trees.destination.join("a.a").exists());
        assert!(trees.destination.join("README.md").exists());
    }

    #[test]
    fn failing_merge_tool_sets_exit_code() {
        let trees = Trees::new();
        write(&trees.primary, "liba.a", b"arm64-a");
        write(&trees.primary, "notes.txt", b"n");
        write(&trees.secondary, "liba.a", b"x86_64-a");
        let lipo = fake_lipo(trees.scratch(), true);

        cmd()
            .env("LIPO", &lipo)
            .arg(&trees.primary)
            .arg(&trees.secondary)
            .arg(&trees.destination)
            .assert()
            .code(1)
            .stderr(contains("lipo: boom"))
            .stderr(contains("1 of 1 merges failed"));

        assert!(trees.destination.join("notes.txt").exists());
    }

    #[test]
    fn secondary_only_flag_copies_extra_files() {
        let trees = Trees::new();
        write(&trees.primary, "a.txt", b"a");
        write(&trees.secondary, "extra/b.txt", b"b");
        let lipo = fake_lipo(trees.scratch(), false);

        cmd()
            .arg("--lipo")
            .arg(&lipo)
            .arg("--include-secondary-only")
            .arg("--verbose")
            .arg(&trees.primary)
            .arg(&trees.secondary)
            .arg(&trees.destination)
            .assert()
            .success()
            .stdout(contains("extra  extra/b.txt"))
            .stdout(contains("✓ 0 merged, 1 copied"))
            .stdout(contains("1 secondary-only"));

        assert_eq!(fs::read(trees.destination.join("extra/b.txt")).unwrap(), b"b");
    }
}
