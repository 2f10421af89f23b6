use anyhow::Result;
use git2::Repository;

/// Wrapper around git2 Repository for the small set of git operations
/// gfl needs: listing tags, reading the current branch and creating tags.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Creates a new GitRepo for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent
    /// directories.
    pub fn new() -> Result<Self> {
        let repo = match Repository::discover(".") {
            Ok(repo) => repo,
            Err(e) => return Err(anyhow::anyhow!("Not in a git repository: {}", e)),
        };
        Ok(GitRepo { repo })
    }

    /// Lists all tag names in the repository.
    ///
    /// Returns raw tag strings; filtering for valid semantic versions is
    /// the version resolver's job.
    pub fn list_tags(&self) -> Result<Vec<String>> {
        let tag_names = self.repo.tag_names(None)?;
        Ok(tag_names
            .iter()
            .flatten()
            .map(|name| name.to_string())
            .collect())
    }

    /// Returns the short name of the currently checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        head.shorthand()
            .map(|name| name.to_string())
            .ok_or_else(|| anyhow::anyhow!("HEAD is detached or invalid"))
    }

    /// Creates a lightweight tag on the current HEAD commit.
    pub fn create_tag(&self, tag_name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(tag_name, head.as_object(), false)?;
        Ok(())
    }
}
