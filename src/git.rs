use std::collections::HashSet;
use std::process::Command;

/// A secondary working tree of a git repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Worktree {
    pub path: String,
    pub branch: String,
}

pub const DETACHED: &str = "(detached)";

/// Parses `git branch -a --format=%(refname:short)` output into a
/// deduplicated list. When `X` and `origin/X` are both present only `X`
/// survives; remote-only branches keep their `origin/` prefix. `origin/HEAD`
/// lines are dropped. Input order is preserved.
pub fn parse_branch_list(output: &str) -> Vec<String> {
    let mut local: HashSet<&str> = HashSet::new();
    let mut remote_only: Vec<&str> = Vec::new();

    for line in output.lines() {
        let branch = line.trim();
        if branch.is_empty() {
            continue;
        }
        if branch == "origin/HEAD" || branch.starts_with("origin/HEAD ") {
            continue;
        }
        if let Some(name) = branch.strip_prefix("origin/") {
            if !local.contains(name) {
                remote_only.push(branch);
            }
        } else {
            local.insert(branch);
        }
    }

    // Second pass restores input order for locals; removal from the set
    // collapses duplicate lines.
    let mut result: Vec<String> = Vec::new();
    for line in output.lines() {
        let branch = line.trim();
        if local.remove(branch) {
            result.push(branch.to_string());
        }
    }
    for remote in remote_only {
        let name = remote.trim_start_matches("origin/");
        if !result.iter().any(|r| r == name) {
            result.push(remote.to_string());
        }
    }
    result
}

/// Parses `git worktree list --porcelain` output. The first block is the main
/// worktree and is dropped; the rest come back in order.
pub fn parse_worktree_list(output: &str) -> Vec<Worktree> {
    let all = parse_worktree_blocks(output);
    if all.len() <= 1 {
        return Vec::new();
    }
    all.into_iter().skip(1).collect()
}

/// Returns the branch of the main worktree (the first porcelain block), or an
/// empty string when the output has no branch line.
pub fn parse_main_branch(output: &str) -> String {
    parse_worktree_blocks(output)
        .into_iter()
        .next()
        .map(|wt| wt.branch)
        .unwrap_or_default()
}

fn parse_worktree_blocks(output: &str) -> Vec<Worktree> {
    let trimmed = output.trim_end_matches('\n');
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut all = Vec::new();
    for block in trimmed.split("\n\n") {
        if block.is_empty() {
            continue;
        }
        let mut wt = Worktree {
            path: String::new(),
            branch: String::new(),
        };
        for line in block.lines() {
            if let Some(path) = line.strip_prefix("worktree ") {
                wt.path = path.to_string();
            } else if let Some(branch) = line.strip_prefix("branch ") {
                wt.branch = branch.trim_start_matches("refs/heads/").to_string();
            } else if line == "detached" {
                wt.branch = DETACHED.to_string();
            }
        }
        all.push(wt);
    }
    all
}

/// Removes the main branch and every branch already checked out in a
/// worktree. Order is preserved.
pub fn filter_available_branches(
    branches: &[String],
    worktrees: &[Worktree],
    main_branch: &str,
) -> Vec<String> {
    branches
        .iter()
        .filter(|b| b.as_str() != main_branch)
        .filter(|b| !worktrees.iter().any(|wt| wt.branch == **b))
        .cloned()
        .collect()
}

/// External git operations the TUI depends on. Trait so tests can substitute
/// canned results.
pub trait GitProbe {
    fn list_branches(&self, project_path: &str) -> Vec<String>;
    fn list_worktrees(&self, project_path: &str) -> Vec<Worktree>;
    fn main_branch(&self, project_path: &str) -> String;
    fn delete_branch(&self, project_path: &str, branch: &str) -> Result<(), String>;
}

/// GitProbe backed by the `git` binary.
pub struct SystemGit;

impl SystemGit {
    fn run(&self, project_path: &str, args: &[&str]) -> Option<String> {
        let out = Command::new("git")
            .arg("-C")
            .arg(project_path)
            .args(args)
            .output()
            .ok()?;
        if !out.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

impl GitProbe for SystemGit {
    fn list_branches(&self, project_path: &str) -> Vec<String> {
        self.run(project_path, &["branch", "-a", "--format=%(refname:short)"])
            .map(|out| parse_branch_list(&out))
            .unwrap_or_default()
    }

    fn list_worktrees(&self, project_path: &str) -> Vec<Worktree> {
        self.run(project_path, &["worktree", "list", "--porcelain"])
            .map(|out| parse_worktree_list(&out))
            .unwrap_or_default()
    }

    fn main_branch(&self, project_path: &str) -> String {
        self.run(project_path, &["worktree", "list", "--porcelain"])
            .map(|out| parse_main_branch(&out))
            .unwrap_or_default()
    }

    fn delete_branch(&self, project_path: &str, branch: &str) -> Result<(), String> {
        let out = Command::new("git")
            .arg("-C")
            .arg(project_path)
            .args(["branch", "-D", branch])
            .output()
            .map_err(|err| err.to_string())?;
        if out.status.success() {
            Ok(())
        } else {
            Err(String::from_utf8_lossy(&out.stderr).trim().to_string())
        }
    }
}

#[cfg(test)]
#[path = "tests/git_tests.rs"]
mod tests;
