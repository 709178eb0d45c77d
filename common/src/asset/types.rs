//! Data Asset Types
//!
//! The astronomical data-asset taxonomy and the catalog entry consumed by the
//! marketplace views.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{
    config::{
        MIN_VALUE_CATALOG, MIN_VALUE_EDUCATIONAL_SET, MIN_VALUE_IMAGE, MIN_VALUE_SPECTRUM,
    },
    time::TimestampMillis,
};

/// Category of an astronomical dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum DataAssetType {
    /// High-resolution telescope imagery and deep field observations
    Image,
    /// Spectral data and analysis from celestial objects
    Spectrum,
    /// Comprehensive astronomical catalogs and databases
    Catalog,
    /// Interactive educational datasets
    EducationalSet,
}

impl DataAssetType {
    /// Wire/display identifier, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DataAssetType::Image => "image",
            DataAssetType::Spectrum => "spectrum",
            DataAssetType::Catalog => "catalog",
            DataAssetType::EducationalSet => "educational_set",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "image" => Some(DataAssetType::Image),
            "spectrum" => Some(DataAssetType::Spectrum),
            "catalog" => Some(DataAssetType::Catalog),
            "educational_set" => Some(DataAssetType::EducationalSet),
            _ => None,
        }
    }

    /// Human readable category name
    pub fn display_name(&self) -> &'static str {
        match self {
            DataAssetType::Image => "Astronomical Images",
            DataAssetType::Spectrum => "Spectrum Analysis",
            DataAssetType::Catalog => "Data Catalogs",
            DataAssetType::EducationalSet => "Educational Datasets",
        }
    }

    /// Suggested minimum declared value (USD) for this category
    pub fn min_declared_value(&self) -> u64 {
        match self {
            DataAssetType::Image => MIN_VALUE_IMAGE,
            DataAssetType::Spectrum => MIN_VALUE_SPECTRUM,
            DataAssetType::Catalog => MIN_VALUE_CATALOG,
            DataAssetType::EducationalSet => MIN_VALUE_EDUCATIONAL_SET,
        }
    }
}

impl std::fmt::Display for DataAssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Licensing availability of a catalog entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Live,
    Upcoming,
    SoldOut,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Live => "live",
            ListingStatus::Upcoming => "upcoming",
            ListingStatus::SoldOut => "sold_out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Quality certification attached to a listing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Certification {
    NasaApproved,
    PeerReviewed,
    AiProcessed,
    CalibrationVerified,
}

/// Immutable catalog entry as served by the catalog source
///
/// Read-only on the client side; the filter engine and the dashboard only
/// ever copy these around.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub id: String,
    pub name: String,
    pub location: String,
    pub asset_type: DataAssetType,
    pub description: String,
    /// Declared total value in USD
    pub total_value: u64,
    /// License units still available
    pub available_units: u64,
    /// USD price of a single unit
    pub price_per_unit: f64,
    /// Projected annual yield in percent
    pub projected_yield: f64,
    pub risk: RiskLevel,
    pub status: ListingStatus,
    /// Launch date, unix millis
    pub launched_at: TimestampMillis,
    pub investor_count: u32,
    /// Present once the listing has been issued on-chain
    pub contract_reference: Option<String>,
    pub observatory: String,
    pub certification: Certification,
}

impl MarketplaceListing {
    /// A listing can be licensed only once live and backed by a contract
    pub fn is_open_for_licensing(&self) -> bool {
        self.status == ListingStatus::Live && self.contract_reference.is_some()
    }

    /// Case-insensitive substring match against name or location
    /// An empty term matches everything
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.location.to_lowercase().contains(&term)
    }
}

/// Asset-global contract metadata, fetchable without a connected address
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub asset_type: DataAssetType,
    /// Valuation in base units (format with `utils::format_token_amount`)
    pub valuation: u64,
}
