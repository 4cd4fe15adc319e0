#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_ROOT");
    cmd.env_remove("DIARY_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// `diary` running inside an initialized journal at `root`
pub fn diary_in(root: &Path) -> Command {
    let mut cmd = diary_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_journal(root: &Path) {
    diary_cmd().arg("init").arg(root).assert().success();
}

pub fn add_entry(root: &Path, title: &str, content: &str) {
    diary_in(root)
        .args(["add", "--title", title, "--content", content])
        .assert()
        .success();
}
