use test_harness::run_expecting_status;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn repush_no_upstream() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_remote("remote.git", "my-repo")?;

    plus.sh("
        cd my-repo
        git switch --create puppy
        echo puppy > puppy.txt
        git add .
        git commit -m 'Add puppy'
        ")?;

    let stderr = run_expecting_status(
        {
            let mut command = plus.cd_cmd("my-repo");
            command.args(["repush", "main"]);
            command
        },
        1,
    )?;
    assert!(stderr.contains("puppy@{upstream}"), "Unexpected error: {stderr}");

    plus.repo_state("my-repo")
        .current_branch("puppy")
        .branches([
            BranchState::new("main").subject("Initial commit"),
            BranchState::new("puppy").no_upstream().subject("Add puppy"),
        ])
        .assert();

    plus.repo_state("remote.git")
        .branches([BranchState::new("main").subject("Initial commit")])
        .assert();

    Ok(())
}
