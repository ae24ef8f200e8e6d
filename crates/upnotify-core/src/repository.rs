#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHubRepository {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for GitHubRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Extract `owner/repo` from a repository reference as found in package
/// manifests.
///
/// Returns `None` for references that do not point at GitHub or whose owner or
/// repository name is malformed.
#[must_use]
pub fn parse_github_repository(input: &str) -> Option<GitHubRepository> {
    let reference = input.trim();
    let reference = reference.strip_prefix("git+").unwrap_or(reference);

    let path = if let Some(shorthand) = reference.strip_prefix("github:") {
        shorthand
    } else if let Some(scp) = reference.strip_prefix("git@") {
        let (host, path) = scp.split_once(':')?;
        if !is_github_host(host) {
            return None;
        }
        path
    } else if let Some((scheme, rest)) = reference.split_once("://") {
        if !matches!(scheme, "https" | "http" | "git" | "ssh") {
            return None;
        }
        let (authority, path) = rest.split_once('/')?;
        let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
        let host = host.split_once(':').map_or(host, |(host, _)| host);
        if !is_github_host(host) {
            return None;
        }
        path
    } else if let Some((host, path)) = reference.split_once('/')
        && host.contains('.')
    {
        if !is_github_host(host) {
            return None;
        }
        path
    } else if reference.contains(':') {
        return None;
    } else {
        reference
    };

    let path = path.split(['#', '?']).next().unwrap_or_default();
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if !is_valid_name(owner) || !is_valid_name(repo) {
        return None;
    }

    Some(GitHubRepository {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

fn is_github_host(host: &str) -> bool {
    GITHUB_HOSTS
        .iter()
        .any(|known| host.eq_ignore_ascii_case(known))
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
}
