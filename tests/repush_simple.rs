use command_error::CommandExt;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn repush_simple() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_remote("remote.git", "my-repo")?;
    plus.setup_pushed_branch("my-repo", "puppy")?;

    plus.cd_cmd("my-repo")
        .args(["repush", "main"])
        .status_checked()?;

    plus.repo_state("my-repo")
        .current_branch("main")
        .branches([BranchState::new("main")
            .upstream("origin/main")
            .subject("Work on puppy")])
        .assert();

    plus.repo_state("remote.git")
        .branches([BranchState::new("main").subject("Work on puppy")])
        .assert();

    Ok(())
}
