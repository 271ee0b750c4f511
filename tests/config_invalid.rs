use test_harness::run_expecting_status;
use test_harness::GitPlus;

#[test]
fn config_invalid() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_remote("remote.git", "my-repo")?;
    plus.setup_pushed_branch("my-repo", "puppy")?;

    plus.write_config(
        r#"
        [repush]
        max_attempts = "lots"
        "#,
    )?;

    let stderr = run_expecting_status(
        {
            let mut command = plus.cd_cmd("my-repo");
            command.args(["repush", "main"]);
            command
        },
        1,
    )?;
    assert!(
        stderr.contains("Failed to deserialize configuration file"),
        "Unexpected error: {stderr}"
    );

    Ok(())
}
