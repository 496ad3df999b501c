use super::interpret::interpret_label_value_definition;
use super::labeler::ServicesResponse;
use super::types::{InterpretedLabelValueDefinition, LabelValueDefinition};
use skylabel_common::Did;
use std::collections::HashMap;

/// Errors loading labeler definitions
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DefsError {
    /// The input wasn't the expected JSON shape
    #[error("failed to parse labeler definitions: {0}")]
    #[diagnostic(
        code(skylabel::moderation::defs::json),
        help("expected an object mapping labeler DIDs to arrays of label value definitions, or a getServices response")
    )]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

/// Custom label value definitions, keyed by the DID of the labeler that published them
///
/// Built once whenever labeler configuration is fetched and then only read from.
/// Definitions added through [`LabelerDefs::insert`] are interpreted with the
/// labeler's DID as their `defined_by`.
#[derive(Debug, Clone, Default)]
pub struct LabelerDefs {
    defs: HashMap<Did, Vec<InterpretedLabelValueDefinition>>,
}

impl LabelerDefs {
    /// Create an empty set of labeler definitions
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the published definitions of a labeler, replacing any it had before
    pub fn insert(&mut self, did: Did, definitions: Vec<LabelValueDefinition>) {
        let interpreted = definitions
            .into_iter()
            .map(|def| interpret_label_value_definition(def, Some(did.clone())))
            .collect();
        self.defs.insert(did, interpreted);
    }

    /// Add already interpreted definitions for a labeler, as-is
    pub fn insert_interpreted(&mut self, did: Did, definitions: Vec<InterpretedLabelValueDefinition>) {
        self.defs.insert(did, definitions);
    }

    /// Get definitions for a specific labeler
    pub fn get(&self, did: &str) -> Option<&[InterpretedLabelValueDefinition]> {
        self.defs.get(did).map(Vec::as_slice)
    }

    /// Find a label definition by labeler and identifier
    pub fn find_def(&self, labeler: &str, identifier: &str) -> Option<&InterpretedLabelValueDefinition> {
        self.get(labeler)?
            .iter()
            .find(|def| def.identifier == identifier)
    }

    /// Labelers with definitions
    pub fn labelers(&self) -> impl Iterator<Item = &Did> {
        self.defs.keys()
    }

    /// Number of labelers with definitions
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether no labeler has definitions
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Collect definitions from the detailed views of a getServices response
    ///
    /// Views without published definitions are skipped.
    pub fn from_services(response: &ServicesResponse) -> Self {
        let mut defs = Self::new();
        for view in &response.views {
            let Some(definitions) = view
                .policies
                .as_ref()
                .and_then(|p| p.label_value_definitions.as_ref())
            else {
                #[cfg(feature = "tracing")]
                tracing::trace!(labeler = %view.creator.did, "no label value definitions");
                continue;
            };
            defs.insert(view.creator.did.clone(), definitions.clone());
        }
        defs
    }

    /// Parse definitions from JSON
    ///
    /// Accepts either a getServices response body or a plain object mapping each
    /// labeler DID to its array of label value definitions.
    pub fn from_json(json: &str) -> Result<Self, DefsError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("labeler_defs_from_json", bytes = json.len()).entered();

        let value: serde_json::Value = serde_json::from_str(json)?;
        let defs = if value.get("views").is_some_and(serde_json::Value::is_array) {
            let response: ServicesResponse = serde_json::from_value(value)?;
            Self::from_services(&response)
        } else {
            let by_labeler: HashMap<Did, Vec<LabelValueDefinition>> = serde_json::from_value(value)?;
            let mut defs = Self::new();
            for (did, definitions) in by_labeler {
                defs.insert(did, definitions);
            }
            defs
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(labelers = defs.len(), "loaded labeler definitions");
        Ok(defs)
    }
}

impl FromIterator<(Did, Vec<LabelValueDefinition>)> for LabelerDefs {
    fn from_iter<T: IntoIterator<Item = (Did, Vec<LabelValueDefinition>)>>(iter: T) -> Self {
        let mut defs = Self::new();
        for (did, definitions) in iter {
            defs.insert(did, definitions);
        }
        defs
    }
}
