//! `gitplus` runs multi-step Git workflows: renaming a branch along with its remote tracking
//! branch, and rebase-merging a branch into a base branch.
//!
//! The `gitplus` Rust library is a convenience for the binary and its tests, and shouldn't be
//! depended on. It isn't a stable API.

mod app;
mod cli;
mod config;
mod current_dir;
mod format_bulleted_list;
pub mod fs;
mod git;
mod install_tracing;
mod rename_branch;
mod repush;
mod utf8tempdir;

pub use app::App;
pub use cli::USAGE_EXIT_CODE;
pub use config::Config;
pub use config::ConfigFile;
pub use config::RepushConfig;
pub use format_bulleted_list::format_bulleted_list;
pub use git::AheadBehind;
pub use git::Git;
pub use git::GitBranch;
pub use git::GitConfig;
pub use git::GitLike;
pub use git::GitRefs;
pub use git::GitRemote;
pub use git::LocalBranchRef;
pub use git::Ref;
pub use git::RemoteBranchRef;
pub use git::SymbolicRefFailure;
pub use git::UpstreamName;
pub use git::UpstreamSplit;
pub use rename_branch::RenameBranch;
pub use rename_branch::RenameBranchOpts;
pub use repush::Repush;
pub use repush::RepushOpts;
pub use utf8tempdir::Utf8TempDir;
