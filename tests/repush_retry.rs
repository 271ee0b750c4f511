use command_error::CommandExt;
use pretty_assertions::assert_eq;
use test_harness::reject_pushes;
use test_harness::rejected_pushes;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn repush_retry() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_remote("remote.git", "my-repo")?;
    plus.setup_pushed_branch("my-repo", "puppy")?;
    plus.sh("git clone remote.git racer")?;

    // The first push to `main` loses a race with `racer`.
    reject_pushes(&plus, "my-repo", "main", 1, Some("racer"))?;

    plus.cd_cmd("my-repo")
        .args(["repush", "main"])
        .status_checked()?;

    assert_eq!(rejected_pushes(&plus, "my-repo")?, 1);

    assert_eq!(
        plus.git("remote.git")
            .run(["log", "--format=%s", "main"])?,
        "Work on puppy\n\
        Racing commit 0\n\
        Initial commit"
    );

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
