//! Common test utilities for mcpcfg integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use mcpcfg_cli::test_utils::ScratchTarget;

/// Variables that would let the developer's environment leak into a test run.
const ISOLATED_VARS: &[&str] =
    &["GITHUB_PERSONAL_ACCESS_TOKEN", "GH_TOKEN", "MCPCFG_TARGET", "RUST_LOG"];

/// Build an `mcpcfg` command isolated from the caller's environment.
///
/// The global settings file points at a non-existent file inside the scratch
/// directory, and token/target variables are removed.
pub fn mcpcfg(scratch: &ScratchTarget) -> Command {
    let mut cmd = Command::cargo_bin("mcpcfg").unwrap();
    for var in ISOLATED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("MCPCFG_CONFIG_PATH", scratch.dir().join("no-config.toml"));
    cmd
}

/// Like [`mcpcfg`], with `--target` and the token already set.
pub fn mcpcfg_with_token(scratch: &ScratchTarget, token: &str) -> Command {
    let mut cmd = mcpcfg(scratch);
    cmd.env("GITHUB_PERSONAL_ACCESS_TOKEN", token).arg("--target").arg(scratch.target());
    cmd
}

/// The exact file content written for `token`.
pub fn expected_document(token: &str) -> String {
    format!(
        r#"{{
  "mcpServers": {{
    "shadcn": {{
      "command": "npx",
      "args": [
        "shadcn@latest",
        "mcp"
      ]
    }},
    "next-devtools": {{
      "command": "npx",
      "args": [
        "-y",
        "next-devtools-mcp@latest"
      ]
    }},
    "github": {{
      "command": "npx",
      "args": [
        "-y",
        "@modelcontextprotocol/server-github"
      ],
      "env": {{
        "GITHUB_PERSONAL_ACCESS_TOKEN": "{token}"
      }}
    }}
  }}
}}"#
    )
}
