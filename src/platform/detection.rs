//! Repository detection from `owner/repo` slugs and remote URLs

use crate::error::{Error, Result};
use crate::types::RepoConfig;
use regex::Regex;
use std::env;

/// Parse repository info from `owner/repo`, an HTTPS URL, or an SSH remote
///
/// Hosts other than github.com are kept as GitHub Enterprise hosts. For a
/// bare slug the host comes from `GH_HOST` when it is set.
pub fn parse_repo_spec(spec: &str) -> Result<RepoConfig> {
    let spec = spec.trim();

    // Bare slug: owner/repo
    let re_slug = Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?$")
        .map_err(|e| Error::Internal(e.to_string()))?;
    if let Some(caps) = re_slug.captures(spec) {
        return Ok(RepoConfig {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
            host: env::var("GH_HOST").ok().as_deref().and_then(enterprise_host),
        });
    }

    // SSH format: git@host:owner/repo.git
    // HTTPS format: https://host/owner/repo.git
    let re_ssh = Regex::new(r"^git@[^:]+:(.+?)(?:\.git)?/?$")
        .map_err(|e| Error::Internal(e.to_string()))?;
    let re_https = Regex::new(r"^https?://[^/]+/(.+?)(?:\.git)?/?$")
        .map_err(|e| Error::Internal(e.to_string()))?;

    let path = re_ssh
        .captures(spec)
        .or_else(|| re_https.captures(spec))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse repository: {spec}")))?;

    let parts: Vec<&str> = path.split('/').collect();
    let [owner, repo] = parts.as_slice() else {
        return Err(Error::Parse(format!("invalid repo path: {path}")));
    };

    let host = extract_hostname(spec).as_deref().and_then(enterprise_host);

    Ok(RepoConfig {
        owner: (*owner).to_string(),
        repo: (*repo).to_string(),
        host,
    })
}

/// The host as a GitHub Enterprise hostname, or `None` for public GitHub
pub fn enterprise_host(host: &str) -> Option<String> {
    let host = host.trim();
    if host.is_empty() || host.eq_ignore_ascii_case("github.com") {
        None
    } else {
        Some(host.to_string())
    }
}

/// REST API root for `host`; `None` means the public github.com API
pub fn api_base_uri(host: Option<&str>) -> Option<String> {
    host.and_then(enterprise_host)
        .map(|h| format!("https://{h}/api/v3"))
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if url.starts_with("git@") {
        return url
            .strip_prefix("git@")
            .and_then(|s| s.split(':').next())
            .map(ToString::to_string);
    }

    // HTTPS format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
