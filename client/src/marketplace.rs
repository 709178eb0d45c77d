//! Marketplace filter/query engine.
//!
//! Pure functions over the immutable catalog; recomputed on every filter
//! input change, no caching and no network access.

use serde::{Deserialize, Serialize};

use skydata_common::asset::{DataAssetType, ListingStatus, MarketplaceListing};

/// One categorical facet: either wide open or locked to a single value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet<T> {
    All,
    Only(T),
}

// manual impl: `All` is the default for any T
impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    #[inline]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(only) => only == value,
        }
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

/// Free-text search plus the two categorical facets.
///
/// The default value is the unfiltered state; an empty result set from a
/// non-default filter means "nothing matched", which the UI renders
/// differently from "no filters applied yet".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilter {
    pub search_term: String,
    pub asset_type: Facet<DataAssetType>,
    pub status: Facet<ListingStatus>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.asset_type.is_all() && self.status.is_all()
    }

    /// The "Clear Filters" action
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn matches(&self, listing: &MarketplaceListing) -> bool {
        listing.matches_search(&self.search_term)
            && self.asset_type.matches(&listing.asset_type)
            && self.status.matches(&listing.status)
    }

    /// Apply the filter to the catalog.
    /// Deterministic and idempotent; an empty result is a normal value.
    pub fn filter(&self, listings: &[MarketplaceListing]) -> Vec<MarketplaceListing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .cloned()
            .collect()
    }
}

/// Aggregate stats shown above the catalog grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub dataset_count: usize,
    /// Sum of declared values in USD
    pub total_value: u64,
    /// Mean projected yield in percent, 0 for an empty catalog
    pub average_yield: f64,
    pub total_investors: u64,
}

impl MarketSummary {
    pub fn compute(listings: &[MarketplaceListing]) -> Self {
        if listings.is_empty() {
            return Self::default();
        }

        let total_yield: f64 = listings.iter().map(|l| l.projected_yield).sum();
        Self {
            dataset_count: listings.len(),
            total_value: listings.iter().map(|l| l.total_value).sum(),
            average_yield: total_yield / listings.len() as f64,
            total_investors: listings.iter().map(|l| l.investor_count as u64).sum(),
        }
    }
}
