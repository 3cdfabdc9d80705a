//! Content catalog
//!
//! The full set of authored records for every collection. The embedded
//! catalog is compiled into the binary from `content/`; a catalog can also be
//! read from a directory with [`ContentLoader`](super::ContentLoader).

use serde::de::DeserializeOwned;

use crate::entity::{JobOpening, LaneEntity, PartnerEntity, StateEntity, TruckTypeEntity};
use crate::error::{ContentError, Result};

/// States in the order they appear on the site
const EMBEDDED_STATES: &[(&str, &str)] = &[
    ("states/california.json", include_str!("../../content/states/california.json")),
    ("states/texas.json", include_str!("../../content/states/texas.json")),
    ("states/illinois.json", include_str!("../../content/states/illinois.json")),
    ("states/florida.json", include_str!("../../content/states/florida.json")),
    ("states/georgia.json", include_str!("../../content/states/georgia.json")),
];

const EMBEDDED_PARTNERS: &str = include_str!("../../content/partners.json");
const EMBEDDED_JOBS: &str = include_str!("../../content/jobs.json");
const EMBEDDED_TRUCK_TYPES: &str = include_str!("../../content/truck-types.json");

/// Authored records for every collection, in store order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub states: Vec<StateEntity>,
    pub partners: Vec<PartnerEntity>,
    pub jobs: Vec<JobOpening>,
    pub truck_types: Vec<TruckTypeEntity>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the content compiled into the binary
    pub fn embedded() -> Result<Self> {
        let states = EMBEDDED_STATES
            .iter()
            .map(|(name, json)| parse_state(name, json))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            states,
            partners: parse_collection("partners.json", EMBEDDED_PARTNERS)?,
            jobs: parse_collection("jobs.json", EMBEDDED_JOBS)?,
            truck_types: parse_collection("truck-types.json", EMBEDDED_TRUCK_TYPES)?,
        })
    }

    /// Add a state (lanes are re-pointed at it)
    pub fn with_state(mut self, state: StateEntity) -> Self {
        self.states.push(state.with_lane_back_references());
        self
    }

    pub fn with_partner(mut self, partner: PartnerEntity) -> Self {
        self.partners.push(partner);
        self
    }

    pub fn with_job(mut self, job: JobOpening) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_truck_type(mut self, truck_type: TruckTypeEntity) -> Self {
        self.truck_types.push(truck_type);
        self
    }

    /// All lanes, state order then lane order
    pub fn lanes(&self) -> Vec<LaneEntity> {
        self.states
            .iter()
            .flat_map(|state| state.lanes.iter().cloned())
            .collect()
    }

    /// Total number of entities across all collections
    pub fn entity_count(&self) -> usize {
        self.states.len()
            + self.states.iter().map(|s| s.lanes.len()).sum::<usize>()
            + self.partners.len()
            + self.jobs.len()
            + self.truck_types.len()
    }
}

/// Parse one state document and fix up its lanes' back-references
pub(crate) fn parse_state(source_name: &str, json: &str) -> Result<StateEntity> {
    let state: StateEntity =
        serde_json::from_str(json).map_err(|e| ContentError::InvalidContent {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;
    Ok(state.with_lane_back_references())
}

/// Parse a JSON array of records
pub(crate) fn parse_collection<T: DeserializeOwned>(source_name: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json).map_err(|e| ContentError::InvalidContent {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}
