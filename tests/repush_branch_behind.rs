use test_harness::run_expecting_status;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn repush_branch_behind() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_remote("remote.git", "my-repo")?;
    plus.setup_pushed_branch("my-repo", "puppy")?;

    plus.sh("
        git clone --branch puppy remote.git other
        cd other
        echo doggy > doggy.txt
        git add .
        git commit -m 'Add doggy'
        git push
        cd ../my-repo
        git fetch
        ")?;

    let stderr = run_expecting_status(
        {
            let mut command = plus.cd_cmd("my-repo");
            command.args(["repush", "main"]);
            command
        },
        1,
    )?;
    assert!(
        stderr.contains("is behind its upstream by 1 commits"),
        "Unexpected error: {stderr}"
    );

    plus.repo_state("my-repo")
        .current_branch("puppy")
        .branches([
            BranchState::new("main").subject("Initial commit"),
            BranchState::new("puppy").subject("Work on puppy"),
        ])
        .assert();

    plus.repo_state("remote.git")
        .branches([
            BranchState::new("main").subject("Initial commit"),
            BranchState::new("puppy").subject("Add doggy"),
        ])
        .assert();

    Ok(())
}
