use crate::common::{expected_document, mcpcfg, mcpcfg_with_token};
use mcpcfg_cli::test_utils::ScratchTarget;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;

#[test]
fn test_write_creates_expected_file() {
    let scratch = ScratchTarget::with_file_name("test_mcp_config.json").unwrap();

    mcpcfg_with_token(&scratch, "<token>")
        .assert()
        .success()
        .stdout("Successfully updated test_mcp_config.json\n");

    assert_eq!(scratch.read().unwrap(), expected_document("<token>"));

    let parsed: Value = serde_json::from_str(&scratch.read().unwrap()).unwrap();
    assert_eq!(
        parsed,
        json!({"mcpServers": {
            "shadcn": {"command": "npx", "args": ["shadcn@latest", "mcp"]},
            "next-devtools": {"command": "npx", "args": ["-y", "next-devtools-mcp@latest"]},
            "github": {
                "command": "npx",
                "args": ["-y", "@modelcontextprotocol/server-github"],
                "env": {"GITHUB_PERSONAL_ACCESS_TOKEN": "<token>"}
            }
        }})
    );
}

#[test]
fn test_explicit_write_subcommand() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg_with_token(&scratch, "tok")
        .arg("write")
        .assert()
        .success()
        .stdout("Successfully updated mcp_config.json\n");

    assert_eq!(scratch.read().unwrap(), expected_document("tok"));
}

#[test]
fn test_write_twice_is_idempotent() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg_with_token(&scratch, "tok").assert().success();
    let first = scratch.read().unwrap();
    mcpcfg_with_token(&scratch, "tok").assert().success();
    let second = scratch.read().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_write_replaces_unrelated_content() {
    let scratch = ScratchTarget::new().unwrap();
    fs::write(scratch.target(), "# not even json\nkeep-me: true\n").unwrap();

    mcpcfg_with_token(&scratch, "tok").assert().success();

    let content = scratch.read().unwrap();
    assert!(!content.contains("keep-me"));
    assert_eq!(content, expected_document("tok"));
}

#[test]
fn test_missing_directory_fails_without_creating_file() {
    let scratch = ScratchTarget::new().unwrap();
    let target = scratch.missing_dir_target();

    mcpcfg(&scratch)
        .env("GITHUB_PERSONAL_ACCESS_TOKEN", "tok")
        .arg("--target")
        .arg(&target)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parent directory does not exist"));

    assert!(!target.exists());
    assert!(!target.parent().unwrap().exists());
}

#[test]
fn test_missing_token_fails_and_leaves_file_alone() {
    let scratch = ScratchTarget::new().unwrap();
    fs::write(scratch.target(), "previous").unwrap();

    mcpcfg(&scratch)
        .arg("--target")
        .arg(scratch.target())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GITHUB_PERSONAL_ACCESS_TOKEN"));

    assert_eq!(scratch.read().unwrap(), "previous");
}

#[test]
fn test_quiet_suppresses_confirmation() {
    let scratch = ScratchTarget::new().unwrap();

    mcpcfg_with_token(&scratch, "tok")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(scratch.target().exists());
}

#[cfg(unix)]
#[test]
fn test_written_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let scratch = ScratchTarget::new().unwrap();
    mcpcfg_with_token(&scratch, "tok").assert().success();

    let mode = fs::metadata(scratch.target()).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0);
}

#[cfg(unix)]
#[test]
fn test_symlinked_target_is_written_through() {
    use std::os::unix::fs::symlink;

    let scratch = ScratchTarget::new().unwrap();
    let real = scratch.dir().join("dotfiles_mcp_config.json");
    fs::write(&real, "old").unwrap();
    symlink(&real, scratch.target()).unwrap();

    mcpcfg_with_token(&scratch, "tok")
        .assert()
        .success()
        .stdout("Successfully updated mcp_config.json\n");

    let meta = fs::symlink_metadata(scratch.target()).unwrap();
    assert!(meta.file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), expected_document("tok"));
}
