use std::process::Command;

use fs_err as fs;
use miette::Context;
use miette::IntoDiagnostic;

use crate::GitPlus;

/// Install a `pre-push` hook in `repo` which rejects the first `count` pushes to `branch`.
///
/// If `racer` is given, it's a clone of the same remote which pulls, commits, and pushes to
/// `branch` before each rejection, as though somebody else had pushed first.
pub fn reject_pushes(
    plus: &GitPlus,
    repo: &str,
    branch: &str,
    count: usize,
    racer: Option<&str>,
) -> miette::Result<()> {
    let counter = plus.path(&format!("{}-rejected-pushes", repo.replace('/', "-")));
    let counter_quoted = shell_words::quote(counter.as_str()).into_owned();

    let race = match racer {
        Some(racer) => {
            let racer_quoted = shell_words::quote(plus.path(racer).as_str()).into_owned();
            format!(
                r#"(
                    unset GIT_DIR GIT_WORK_TREE GIT_INDEX_FILE
                    cd {racer_quoted} || exit
                    git pull --ff-only
                    echo "racing commit $rejected" >> RACER.md
                    git add RACER.md
                    git commit -m "Racing commit $rejected"
                    git push
                ) >&2 || exit 2"#
            )
        }
        None => String::new(),
    };

    let hook = format!(
        r#"#!/usr/bin/env bash
        rejected="$(cat {counter_quoted} 2>/dev/null || echo 0)"
        while read -r local_ref local_sha remote_ref remote_sha; do
            if [[ "$remote_ref" == "refs/heads/{branch}" ]] && (( rejected < {count} )); then
                echo "$((rejected + 1))" > {counter_quoted}
                {race}
                echo "Somebody else pushed to {branch} first" >&2
                exit 1
            fi
        done
        exit 0
        "#
    );

    let hooks = plus.path(repo).join(".git/hooks");
    fs::create_dir_all(&hooks).into_diagnostic()?;
    let hook_path = hooks.join("pre-push");
    fs::write(&hook_path, hook.trim_start())
        .into_diagnostic()
        .wrap_err("Failed to write `pre-push` hook")?;
    plus.sh(&format!(
        "chmod +x {}",
        shell_words::quote(hook_path.as_str())
    ))?;

    Ok(())
}

/// How many pushes a hook installed with [`reject_pushes`] has rejected.
pub fn rejected_pushes(plus: &GitPlus, repo: &str) -> miette::Result<usize> {
    let counter = plus.path(&format!("{}-rejected-pushes", repo.replace('/', "-")));
    if !counter.exists() {
        return Ok(0);
    }
    fs::read_to_string(&counter)
        .into_diagnostic()?
        .trim()
        .parse()
        .into_diagnostic()
}

/// Run a command which should exit with the given status, and get its stderr.
///
/// # Panics
///
/// If the command exits with any other status.
#[track_caller]
pub fn run_expecting_status(mut command: Command, code: i32) -> miette::Result<String> {
    let output = command.output().into_diagnostic()?;
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if output.status.code() != Some(code) {
        panic!(
            "Expected exit status {code}, found {}:\n{stderr}",
            output.status
        );
    }
    Ok(stderr)
}
