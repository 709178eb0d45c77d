//! Wire types exchanged with the issuance service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::asset::DataAssetType;

/// Reference to an uploaded supporting document
///
/// The document content lives with the upload service; the client only
/// carries the handle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    pub uri: String,
}

/// Access requirements attached to a listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub researcher_verification: bool,
    pub institution_only: bool,
    pub usage_restrictions: String,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            researcher_verification: true,
            institution_only: false,
            usage_restrictions: String::new(),
        }
    }
}

/// Launch scheduling for a listing, all fields optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSchedule {
    pub release_date: Option<NaiveDate>,
    /// Funding goal in USD
    pub funding_goal: Option<u64>,
    pub availability_deadline: Option<NaiveDate>,
}

impl ListingSchedule {
    /// The deadline may not precede the release date when both are set
    pub fn is_ordered(&self) -> bool {
        match (self.release_date, self.availability_deadline) {
            (Some(release), Some(deadline)) => deadline >= release,
            _ => true,
        }
    }
}

/// Fully validated listing payload handed to the issuance service
///
/// Frozen at publish time; every required field is present and typed, so the
/// service never sees a partially filled draft.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingSubmission {
    // classification
    pub data_type: DataAssetType,
    pub data_name: String,
    pub observatory: String,
    pub description: String,
    /// Declared total value in USD
    pub total_value: u64,

    // documentation
    pub observation_rights: DocumentRef,
    pub quality_certification: DocumentRef,
    pub calibration_data: Option<DocumentRef>,
    pub additional_documents: Vec<DocumentRef>,

    // license terms
    pub license_symbol: String,
    pub total_supply: u64,
    /// Minimum access amount in USD
    pub min_access: u64,

    pub access_policy: AccessPolicy,
    pub schedule: ListingSchedule,
}

/// Issuance service response for a published listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub listing_id: String,
    pub contract_reference: String,
}
