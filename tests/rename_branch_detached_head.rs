use test_harness::run_expecting_status;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn rename_branch_detached_head() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo("my-repo")?;

    plus.sh("
        cd my-repo
        git switch --detach
        ")?;

    let stderr = run_expecting_status(
        {
            let mut command = plus.cd_cmd("my-repo");
            command.args(["rename-branch", "doggy"]);
            command
        },
        1,
    )?;
    assert!(stderr.contains("detached HEAD"), "Unexpected error: {stderr}");

    plus.repo_state("my-repo")
        .detached()
        .branches([BranchState::new("main")])
        .assert();

    Ok(())
}
