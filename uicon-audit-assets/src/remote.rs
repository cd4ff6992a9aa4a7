//! Reference-asset listing from the upstream asset repository.
//!
//! Two GitHub API calls at startup: the branch head for its commit sha,
//! then the recursive git tree for that sha. Both calls carry an explicit
//! timeout and are retried once, so one flaky response doesn't kill an
//! otherwise offline-friendly audit.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::error::AssetError;

const API_BASE: &str = "https://api.github.com/repos";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("uicon-audit/", env!("CARGO_PKG_VERSION"));

/// Path prefix of Pokémon images inside the asset repository tree.
const ICON_PREFIX: &str = "Images/Pokemon/";

/// Env vars consulted for a GitHub bearer token, most specific first.
/// Anonymous API access is limited to 60 requests per hour; a token lifts
/// that.
const TOKEN_ENV_VARS: &[&str] = &["UICON_AUDIT_GITHUB_TOKEN", "GITHUB_TOKEN"];

/// Which repository and branch to list.
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// `owner/name`, e.g. `PokeMiners/pogo_assets`.
    pub repo: String,
    pub branch: String,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            repo: "PokeMiners/pogo_assets".to_string(),
            branch: "master".to_string(),
        }
    }
}

/// The set of reference-asset names the upstream repository actually ships.
/// Shiny variants appear as distinct `*_shiny` names.
#[derive(Debug, Clone, Default)]
pub struct ReferenceAssets {
    names: HashSet<String>,
}

impl ReferenceAssets {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for ReferenceAssets {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BranchResponse {
    commit: BranchCommit,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
}

/// Fetch the recursive asset listing for the configured repository.
pub fn fetch_reference_assets(opts: &ListingOptions) -> Result<ReferenceAssets, AssetError> {
    let client = build_client()?;

    let branch_url = format!("{API_BASE}/{}/branches/{}", opts.repo, opts.branch);
    let branch: BranchResponse = get_json(&client, &branch_url)?;

    let tree_url = format!(
        "{API_BASE}/{}/git/trees/{}?recursive=1",
        opts.repo, branch.commit.sha
    );
    let listing: TreeResponse = get_json(&client, &tree_url)?;

    if listing.truncated {
        log::warn!(
            "asset tree for {} was truncated; some reference assets may be reported missing",
            opts.repo
        );
    }
    log::info!(
        "listed {} paths from {}@{}",
        listing.tree.len(),
        opts.repo,
        opts.branch
    );

    Ok(listing
        .tree
        .into_iter()
        .map(|entry| normalize_asset_path(&entry.path))
        .collect())
}

fn build_client() -> Result<reqwest::blocking::Client, AssetError> {
    let mut headers = reqwest::header::HeaderMap::new();
    if let Some(token) = github_token() {
        let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| AssetError::api("invalid characters in GitHub token"))?;
        headers.insert(reqwest::header::AUTHORIZATION, value);
        log::debug!("using GitHub token from environment");
    }

    Ok(reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?)
}

fn github_token() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|token| !token.is_empty())
}

/// GET a JSON document, retrying once on transport errors and 5xx
/// responses. Client errors (4xx) are not retried.
fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<T, AssetError> {
    let mut last_err = None;
    for attempt in 0..2 {
        if attempt > 0 {
            log::warn!("retrying {url}");
        }
        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();
                if status.is_server_error() {
                    last_err = Some(AssetError::api(format!("HTTP {status} for {url}")));
                    continue;
                }
                if !status.is_success() {
                    return Err(AssetError::api(format!("HTTP {status} for {url}")));
                }
                let text = response.text()?;
                return serde_json::from_str(&text).map_err(AssetError::from);
            }
            Err(e) => last_err = Some(AssetError::from(e)),
        }
    }
    Err(last_err.unwrap_or_else(|| AssetError::api(format!("request failed: {url}"))))
}

/// Strip the image directory prefix and `.png` suffix, mirroring how
/// reference assets are named in the catalog.
fn normalize_asset_path(path: &str) -> String {
    let path = path.strip_prefix(ICON_PREFIX).unwrap_or(path);
    path.strip_suffix(".png").unwrap_or(path).to_string()
}
