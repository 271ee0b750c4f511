use command_error::CommandExt;
use test_harness::GitPlus;

#[test]
fn verbose_logs_to_stderr() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo("my-repo")?;

    plus.sh("
        cd my-repo
        git switch -c puppy
        ")?;

    let output = plus
        .cd_cmd_default_log("my-repo")
        .args(["-v", "rename-branch", "doggy"])
        .output_checked_utf8()?;

    assert!(
        output.stdout.is_empty(),
        "Logs should not go to stdout: {}",
        output.stdout
    );
    assert!(
        output.stderr.contains("git symbolic-ref --short HEAD"),
        "Expected commands in stderr: {}",
        output.stderr
    );
    assert!(
        output.stderr.contains("branch -m puppy doggy"),
        "Expected commands in stderr: {}",
        output.stderr
    );
    assert!(output.stderr.contains("Renaming"));

    Ok(())
}

#[test]
fn quiet_without_verbose() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo("my-repo")?;

    plus.sh("
        cd my-repo
        git switch -c puppy
        ")?;

    let output = plus
        .cd_cmd_default_log("my-repo")
        .args(["rename-branch", "doggy"])
        .output_checked_utf8()?;

    assert!(output.stdout.is_empty());
    assert!(
        !output.stderr.contains("symbolic-ref"),
        "Commands should only be logged with `--verbose`: {}",
        output.stderr
    );
    assert!(output.stderr.contains("Renaming"));

    Ok(())
}

#[test]
fn commands_logged_once() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo("my-repo")?;

    plus.sh("
        cd my-repo
        git switch -c puppy
        ")?;

    let output = plus
        .cd_cmd("my-repo")
        .args(["rename-branch", "doggy"])
        .output_checked_utf8()?;

    assert_eq!(
        output.stderr.matches("git symbolic-ref --short HEAD").count(),
        1,
        "Each command should be logged once: {}",
        output.stderr
    );
    assert!(!output.stderr.contains("Executing command"));

    Ok(())
}
