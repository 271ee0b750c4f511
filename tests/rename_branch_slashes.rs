use command_error::CommandExt;
use test_harness::BranchState;
use test_harness::GitPlus;

#[test]
fn rename_branch_slashes() -> miette::Result<()> {
    let plus = GitPlus::new()?;
    plus.setup_repo_with_named_remote("remote.git", "my-repo", "pets/dogs")?;

    plus.sh("
        cd my-repo
        git switch -c feature/puppy
        echo puppy > puppy.txt
        git add .
        git commit -m 'Add puppy'
        git push --set-upstream pets/dogs feature/puppy
        ")?;

    plus.cd_cmd("my-repo")
        .args(["rename-branch", "feature/doggy"])
        .status_checked()?;

    plus.repo_state("my-repo")
        .current_branch("feature/doggy")
        .branches([
            BranchState::new("main").upstream("pets/dogs/main"),
            BranchState::new("feature/doggy")
                .upstream("pets/dogs/feature/doggy")
                .subject("Add puppy"),
        ])
        .assert();

    plus.repo_state("remote.git")
        .branches([
            BranchState::new("main"),
            BranchState::new("feature/doggy").subject("Add puppy"),
        ])
        .assert();

    Ok(())
}
