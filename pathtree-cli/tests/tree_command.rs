//! Integration tests for the `tree` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_tree_text_outline() {
    let env = TestEnv::new();
    let paths = env.site_file();

    let stdout = env.stdout_of(&["tree", "--input", paths.to_str().unwrap()]);
    let expected = [
        "home",
        "├── module1",
        "│   └── component1",
        "└── module2",
        "    └── component1",
        "        └── service1",
        "root2",
    ];
    assert_eq!(stdout, format!("{}\n", expected.join("\n")));
}

#[test]
fn test_tree_from_stdin() {
    let env = TestEnv::new();

    env.command()
        .arg("tree")
        .write_stdin("docs/intro\ndocs/guide\n")
        .assert()
        .success()
        .stdout("docs\n├── intro\n└── guide\n");
}

#[test]
fn test_tree_without_paths_prints_nothing() {
    let env = TestEnv::new();

    env.command()
        .arg("tree")
        .write_stdin("# nothing here\n\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_tree_json_nests_children() {
    let env = TestEnv::new();
    let paths = env.site_file();

    let stdout = env.stdout_of(&[
        "tree",
        "--format",
        "json",
        "--input",
        paths.to_str().unwrap(),
    ]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json[0]["unit"], "home");
    assert_eq!(json[0]["terminal"], "home");
    assert_eq!(json[0]["intermediary"], "Home");
    assert_eq!(json[0]["children"][1]["path"], "home/module2");
    assert_eq!(json[1]["unit"], "root2");
    assert!(json[1].get("children").is_none());
}

#[test]
fn test_tree_max_depth() {
    let env = TestEnv::new();
    let paths = env.site_file();

    env.command()
        .arg("tree")
        .arg("--max-depth")
        .arg("0")
        .arg("--input")
        .arg(&paths)
        .assert()
        .success()
        .stdout("home\nroot2\n");
}

#[test]
fn test_tree_format_from_user_config() {
    let env = TestEnv::new();
    env.write_user_config("output_format: yaml\n");

    env.command()
        .arg("tree")
        .write_stdin("a/b\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unit: a"))
        .stdout(predicate::str::contains("path: a/b"));
}

#[test]
fn test_tree_from_walked_directory() {
    let env = TestEnv::new();
    env.write_file("site/docs/intro.md", "");
    env.write_file("site/docs/.draft.md", "");
    env.write_file("site/index.md", "");

    env.command()
        .arg("tree")
        .arg("--walk")
        .arg(env.path().join("site"))
        .assert()
        .success()
        .stdout("docs\n└── intro.md\nindex.md\n");
}

#[test]
fn test_input_and_walk_conflict() {
    let env = TestEnv::new();

    env.command()
        .args(["tree", "--input", "a.txt", "--walk", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
