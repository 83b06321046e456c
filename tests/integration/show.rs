use crate::common::{expected_document, mcpcfg};
use mcpcfg_cli::test_utils::ScratchTarget;
use predicates::prelude::*;

#[test]
fn test_show_masks_token_and_writes_nothing() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg(&scratch)
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "ghp_abcdefghijklmnop")
        .arg("--target")
        .arg(scratch.target())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"GITHUB_PERSONAL_ACCESS_TOKEN\": \"ghp_****\""))
        .stdout(predicate::str::contains("abcdefghijklmnop").not());

    assert!(!scratch.target().exists());
}

#[test]
fn test_show_reveal_prints_exact_document() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg(&scratch)
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "tok")
        .arg("--target")
        .arg(scratch.target())
        .args(["show", "--reveal"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected_document("tok")));
}

#[test]
fn test_show_without_token_uses_placeholder() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg(&scratch)
        .arg("--target")
        .arg(scratch.target())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("<unset>"));
}

#[test]
fn test_show_reveal_without_token_fails() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg(&scratch)
        .arg("--target")
        .arg(scratch.target())
        .args(["show", "--reveal"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_path_prints_resolved_target() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg(&scratch)
        .arg("--target")
        .arg(scratch.target())
        .arg("path")
        .assert()
        .success()
        .stdout(format!("{}\n", scratch.target().display()));
}
