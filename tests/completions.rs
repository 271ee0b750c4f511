use command_error::CommandExt;
use test_harness::GitPlus;

#[test]
fn completions() -> miette::Result<()> {
    let plus = GitPlus::new()?;

    let output = plus
        .cmd()
        .args(["completions", "bash"])
        .output_checked_utf8()?;
    assert!(output.stdout.contains("gitplus"));
    assert!(output.stdout.contains("rename-branch"));

    Ok(())
}
