use crate::common::{expected_document, mcpcfg};
use mcpcfg_cli::test_utils::ScratchTarget;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_target_from_environment() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg(&scratch)
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "tok")
        .env("MCPCFG_TARGET", scratch.target())
        .assert()
        .success();

    assert_eq!(scratch.read().unwrap(), expected_document("tok"));
}

#[test]
fn test_token_env_flag_selects_variable() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg(&scratch)
        .env("GH_TOKEN", "from-gh-token")
        .args(["--token-env", "GH_TOKEN", "--target"])
        .arg(scratch.target())
        .assert()
        .success();

    // The key in the document is fixed regardless of the source variable
    assert_eq!(scratch.read().unwrap(), expected_document("from-gh-token"));
}

#[test]
fn test_global_config_sets_target_and_token_env() {
    let scratch = ScratchTarget::new().unwrap();
    let config_path = scratch.dir().join("config.toml");
    let target = scratch.dir().join("from-config.json");
    fs::write(
        &config_path,
        format!("target_path = {:?}\ntoken_env = \"GH_TOKEN\"\n", target.to_string_lossy()),
    )
    .unwrap();

    mcpcfg(&scratch)
        .env("GH_TOKEN", "cfg-token")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout("Successfully updated from-config.json\n");

    assert_eq!(fs::read_to_string(&target).unwrap(), expected_document("cfg-token"));
}

#[test]
fn test_flag_overrides_global_config() {
    let scratch = ScratchTarget::new().unwrap();
    let config_path = scratch.dir().join("config.toml");
    let config_target = scratch.dir().join("from-config.json");
    fs::write(&config_path, format!("target_path = {:?}\n", config_target.to_string_lossy()))
        .unwrap();

    mcpcfg(&scratch)
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "tok")
        .arg("--config")
        .arg(&config_path)
        .arg("--target")
        .arg(scratch.target())
        .assert()
        .success();

    assert!(scratch.target().exists());
    assert!(!config_target.exists());
}

#[test]
fn test_malformed_global_config_fails() {
    let scratch = ScratchTarget::new().unwrap();
    let config_path = scratch.dir().join("config.toml");
    fs::write(&config_path, "target_path = [").unwrap();

    mcpcfg(&scratch)
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "tok")
        .arg("--config")
        .arg(&config_path)
        .arg("--target")
        .arg(scratch.target())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file syntax"));

    assert!(!scratch.target().exists());
}

#[test]
fn test_target_with_dollar_sign_is_literal() {
    let scratch = ScratchTarget::new().unwrap();
    let target = scratch.dir().join("a$b.json");

    mcpcfg(&scratch)
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "tok")
        .arg("--target")
        .arg(&target)
        .assert()
        .success()
        .stdout("Successfully updated a$b.json\n");

    assert_eq!(fs::read_to_string(&target).unwrap(), expected_document("tok"));
}
