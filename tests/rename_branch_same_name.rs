use test_harness::run_expecting_status;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn rename_branch_same_name() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_remote("remote.git", "my-repo")?;
    plus.setup_pushed_branch("my-repo", "puppy")?;

    let stderr = run_expecting_status(
        {
            let mut command = plus.cd_cmd("my-repo");
            command.args(["rename-branch", "puppy"]);
            command
        },
        1,
    )?;
    assert!(
        stderr.contains("branch names are the same"),
        "Unexpected error: {stderr}"
    );

    plus.repo_state("my-repo")
        .current_branch("puppy")
        .branches([
            BranchState::new("main").upstream("origin/main"),
            BranchState::new("puppy").upstream("origin/puppy"),
        ])
        .assert();

    plus.repo_state("remote.git")
        .branches([BranchState::new("main"), BranchState::new("puppy")])
        .assert();

    Ok(())
}
