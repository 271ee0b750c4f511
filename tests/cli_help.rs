use command_error::CommandExt;
use test_harness::GitPlus;

#[test]
fn cli_help() -> miette::Result<()> {
    let plus = GitPlus::new()?;

    let output = plus.cmd().arg("--help").output_checked_utf8()?;
    assert!(output.stdout.contains("rename-branch"));
    assert!(output.stdout.contains("repush"));

    let output = plus
        .cmd()
        .args(["repush", "--help"])
        .output_checked_utf8()?;
    assert!(output.stdout.contains("--keep-branch"));

    Ok(())
}
