use std::fmt::Display;

use gitplus::format_bulleted_list;
use gitplus::Git;
use gitplus::GitLike;
use itertools::Itertools;
use pretty_assertions::Comparison;

/// A repository state, which can be checked against a real repository.
#[derive(Debug)]
pub struct RepoState {
    git: Git,
    head: Option<HeadState>,
    branches: Option<Vec<BranchState>>,
}

impl RepoState {
    /// Construct a new repository state with the given [`Git`] object.
    pub fn new(git: Git) -> Self {
        Self {
            git,
            head: Default::default(),
            branches: Default::default(),
        }
    }

    /// Expect the given branch to be checked out.
    pub fn current_branch(mut self, branch: &str) -> Self {
        self.head = Some(HeadState::Branch(branch.to_owned()));
        self
    }

    /// Expect `HEAD` to be detached.
    pub fn detached(mut self) -> Self {
        self.head = Some(HeadState::Detached);
        self
    }

    /// Expect the repository to have exactly the given local branches.
    pub fn branches(mut self, branches: impl IntoIterator<Item = BranchState>) -> Self {
        self.branches = Some(branches.into_iter().collect());
        self
    }

    /// Assert that the repository state matches the actual repository.
    ///
    /// # Panics
    ///
    /// If the repository state doesn't match the actual repository.
    #[track_caller]
    pub fn assert(&self) {
        let mut problems = Vec::new();

        if let Some(head) = &self.head {
            self.check_head(&mut problems, head);
        }

        if let Some(branches) = &self.branches {
            self.check_branches(&mut problems, branches);
        }

        if !problems.is_empty() {
            panic!("{}", format_bulleted_list(problems));
        }
    }

    fn check_head(&self, problems: &mut Vec<String>, expected: &HeadState) {
        let actual = self.git.branch().current();
        match (expected, actual) {
            (HeadState::Branch(expected), Ok(actual)) => {
                if actual.branch_name() != expected.as_str() {
                    problems.push(format!("Expected {expected} checked out, found {actual}"));
                }
            }
            (HeadState::Branch(expected), Err(err)) => {
                problems.push(format!("Expected {expected} checked out: {err}"));
            }
            (HeadState::Detached, Ok(actual)) => {
                problems.push(format!("Expected detached HEAD, found {actual} checked out"));
            }
            (HeadState::Detached, Err(_)) => {}
        }
    }

    fn check_branches(&self, problems: &mut Vec<String>, expected: &[BranchState]) {
        let actual = match self.git.branch().list_local() {
            Ok(actual) => actual
                .iter()
                .map(|branch| branch.branch_name().to_owned())
                .sorted()
                .collect::<Vec<_>>(),
            Err(err) => {
                problems.push(format!("Failed to list branches: {err}"));
                return;
            }
        };
        let expected_names = expected
            .iter()
            .map(|branch| branch.name.clone())
            .sorted()
            .collect::<Vec<_>>();

        if actual != expected_names {
            problems.push(format!(
                "Branches differ:\n{}",
                Comparison::new(&actual, &expected_names)
            ));
        }

        for branch in expected {
            if !actual.contains(&branch.name) {
                continue;
            }
            let branch_problems = branch.check(&self.git);
            if !branch_problems.is_empty() {
                problems.push(format!(
                    "Branch {branch}:\n{}",
                    format_bulleted_list(branch_problems)
                ));
            }
        }
    }
}

#[derive(Debug)]
enum HeadState {
    Branch(String),
    Detached,
}

/// A local branch's state.
///
/// Used with [`RepoState`] to validate a branch against an actual branch.
#[derive(Debug)]
pub struct BranchState {
    name: String,
    upstream: Option<Option<String>>,
    subject: Option<String>,
}

impl BranchState {
    /// Expect a local branch with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            upstream: Default::default(),
            subject: Default::default(),
        }
    }

    /// Expect the branch to track the given upstream, like `origin/puppy`.
    pub fn upstream(mut self, upstream: &str) -> Self {
        self.upstream = Some(Some(upstream.to_owned()));
        self
    }

    /// Expect the branch to have no upstream.
    pub fn no_upstream(mut self) -> Self {
        self.upstream = Some(None);
        self
    }

    /// Expect the branch's latest commit to have the given subject line.
    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_owned());
        self
    }

    fn check(&self, git: &Git) -> Vec<String> {
        let mut problems = Vec::new();

        if let Some(expected) = &self.upstream {
            match git.branch().upstream(&self.name) {
                Ok(actual) => {
                    let actual = actual.map(|upstream| upstream.to_string());
                    if &actual != expected {
                        problems.push(format!(
                            "Expected upstream {}, found {}",
                            display_upstream(expected.as_deref()),
                            display_upstream(actual.as_deref()),
                        ));
                    }
                }
                Err(err) => {
                    problems.push(format!("Failed to get upstream: {err}"));
                }
            }
        }

        if let Some(expected) = &self.subject {
            let rev = format!("refs/heads/{}", self.name);
            match git.run(["log", "-1", "--format=%s", rev.as_str()]) {
                Ok(actual) => {
                    if &actual != expected {
                        problems.push(format!(
                            "Expected latest commit {expected:?}, found {actual:?}"
                        ));
                    }
                }
                Err(err) => {
                    problems.push(format!("Failed to get latest commit: {err}"));
                }
            }
        }

        problems
    }
}

fn display_upstream(upstream: Option<&str>) -> &str {
    upstream.unwrap_or("(none)")
}

impl Display for BranchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
