use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a campaign.
///
/// Opaque and assigned by the remote campaign service; never derived or
/// mutated locally, only replaced when a new campaign is started.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Creates a new `CampaignId` from the service-supplied string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CampaignId({})", self.0)
    }
}

impl From<&str> for CampaignId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
