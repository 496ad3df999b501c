use super::types::LabelValueDefinition;
use skylabel_common::Did;
use smol_str::SmolStr;

/// Anything that identifies the labeler account behind a label
///
/// Used to join a label with the profile of the labeler that issued it.
pub trait LabelerProfile {
    /// The labeler's account DID
    fn did(&self) -> &Did;
}

/// Minimal view of a labeler service, as returned by `app.bsky.labeler.getServices`
///
/// Both the basic and the detailed view deserialize into this; only the detailed
/// one carries `policies`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelerView {
    /// AT URI of the labeler service record
    pub uri: SmolStr,
    /// CID of the service record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<SmolStr>,
    /// Account running the labeler
    pub creator: LabelerCreator,
    /// Published label values, detailed views only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<LabelerPolicies>,
    /// Number of likes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<i64>,
    /// When the AppView indexed the service record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<SmolStr>,
}

/// The account that runs a labeler
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelerCreator {
    /// Account DID
    pub did: Did,
    /// Account handle
    pub handle: SmolStr,
    /// Profile display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<SmolStr>,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<SmolStr>,
}

/// Which label values a labeler emits and what they mean
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelerPolicies {
    /// The label values which this labeler publishes. May include global or custom labels.
    pub label_values: Vec<SmolStr>,
    /// Label values created by this labeler and scoped exclusively to it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_value_definitions: Option<Vec<LabelValueDefinition>>,
}

impl LabelerProfile for LabelerView {
    fn did(&self) -> &Did {
        &self.creator.did
    }
}

impl LabelerProfile for Did {
    fn did(&self) -> &Did {
        self
    }
}

impl<T: LabelerProfile + ?Sized> LabelerProfile for &T {
    fn did(&self) -> &Did {
        (**self).did()
    }
}

/// Body of an `app.bsky.labeler.getServices` response
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicesResponse {
    /// One view per requested labeler
    pub views: Vec<LabelerView>,
}

/// First labeler in `labelers` whose account DID equals `source`
pub fn find_labeler<'a, L: LabelerProfile>(labelers: &'a [L], source: &Did) -> Option<&'a L> {
    labelers.iter().find(|labeler| labeler.did() == source)
}
