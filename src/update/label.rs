//! Tracking label lookup, creation and attachment

use crate::error::Result;
use crate::platform::HostingService;
use crate::types::Label;
use tracing::debug;

/// Name of the label attached to every update PR
pub const LABEL_NAME: &str = "gradle-wrapper";

const LABEL_COLOR: &str = "02303A";
const LABEL_DESCRIPTION: &str = "Pull requests that update Gradle wrapper";

/// The label definition created when the repository lacks it
pub fn wrapper_label() -> Label {
    Label {
        name: LABEL_NAME.to_string(),
        color: LABEL_COLOR.to_string(),
        description: Some(LABEL_DESCRIPTION.to_string()),
    }
}

/// How the label was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelResolution {
    /// Label already existed in the repository
    Found(Label),
    /// Label was missing and has been created
    Created(Label),
}

impl LabelResolution {
    /// The resolved label
    pub const fn label(&self) -> &Label {
        match self {
            Self::Found(label) | Self::Created(label) => label,
        }
    }
}

/// Look the label up by name, creating it when absent
pub async fn ensure_label(hosting: &dyn HostingService) -> Result<LabelResolution> {
    if let Some(label) = hosting.get_label(LABEL_NAME).await? {
        debug!(description = ?label.description, "label found");
        return Ok(LabelResolution::Found(label));
    }

    debug!("label not found");
    let created = hosting.create_label(&wrapper_label()).await?;
    Ok(LabelResolution::Created(created))
}

/// Attach a resolved label to a pull request
pub async fn attach_label(
    hosting: &dyn HostingService,
    pr_number: u64,
    resolution: &LabelResolution,
) -> Result<()> {
    hosting
        .add_labels(pr_number, &[resolution.label().name.clone()])
        .await
}
