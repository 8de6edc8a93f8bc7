//! Branch names and generated text

/// Prefix of every update branch
pub const UPDATE_BRANCH_PREFIX: &str = "gradlew-update-";

/// Where users report problems with generated PRs
pub const ISSUES_URL: &str = "https://github.com/gradle-update/update-gradle-wrapper-action/issues";

/// Update branch name for a version (`gradlew-update-<version>`)
pub fn branch_name(version: &str) -> String {
    format!("{UPDATE_BRANCH_PREFIX}{version}")
}

/// Pattern used for the matching-refs lookup (`heads/gradlew-update-<version>`)
pub fn ref_pattern(version: &str) -> String {
    format!("heads/{}", branch_name(version))
}

/// Fully qualified ref for a version (`refs/heads/gradlew-update-<version>`)
pub fn branch_ref(version: &str) -> String {
    format!("refs/heads/{}", branch_name(version))
}

/// Gradle release notes for a version
pub fn release_notes_url(version: &str) -> String {
    format!("https://docs.gradle.org/{version}/release-notes.html")
}

fn describe(verb: &str, target: &str, source: Option<&str>) -> String {
    match source {
        Some(source) => format!("{verb} Gradle Wrapper from {source} to {target}."),
        None => format!("{verb} Gradle Wrapper to {target}."),
    }
}

/// Commit message: headline, blank line, headline again plus release notes link
pub fn commit_message(target: &str, source: Option<&str>) -> String {
    let headline = describe("Update", target, source);
    format!(
        "{headline}\n\n{headline}\n- [Release notes]({})",
        release_notes_url(target)
    )
}

/// Pull request title
pub fn pr_title(target: &str, source: Option<&str>) -> String {
    describe("Updates", target, source)
}

/// Pull request body with release notes and a help footer
pub fn pr_body(target: &str, source: Option<&str>) -> String {
    format!(
        "{}

See release notes: {}

---

<details>
<summary>Need help?</summary>
<br />

If something doesn't look right with this PR please file a bug [here]({ISSUES_URL}) 🙏
</details>",
        pr_title(target, source),
        release_notes_url(target)
    )
}
