use command_error::CommandExt;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn rename_branch_explicit() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_remote("remote.git", "my-repo")?;
    plus.setup_pushed_branch("my-repo", "puppy")?;

    plus.sh("
        cd my-repo
        git switch main
        ")?;

    plus.cd_cmd("my-repo")
        .args(["rename-branch", "puppy", "doggy"])
        .status_checked()?;

    plus.repo_state("my-repo")
        .current_branch("main")
        .branches([
            BranchState::new("main").upstream("origin/main"),
            BranchState::new("doggy").upstream("origin/doggy"),
        ])
        .assert();

    plus.repo_state("remote.git")
        .branches([BranchState::new("main"), BranchState::new("doggy")])
        .assert();

    Ok(())
}
