// External collaborators of the client core, injected at construction time
// so every consumer (and every test) can substitute its own implementation.
// Signing, ledger submission and document storage live behind these seams.

use async_trait::async_trait;
use thiserror::Error;

use skydata_common::{
    account::{AccountState, Address},
    api::{ListingSubmission, PublishReceipt},
    asset::{AssetMetadata, MarketplaceListing},
    compliance::UserAssetState,
};

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source answered but holds no record for the request
    #[error("no record found")]
    NotFound,

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Wallet session provider.
///
/// `check_connection` may read persisted session state; it is idempotent and
/// safe to call on every mount.
#[async_trait]
pub trait WalletConnection: Send + Sync {
    async fn check_connection(&self) -> Result<AccountState, ProviderError>;
}

/// Read access to the on-chain asset contract.
#[async_trait]
pub trait ContractDataSource: Send + Sync {
    /// Asset-global metadata, no address required
    async fn fetch_asset_metadata(&self) -> Result<AssetMetadata, ProviderError>;

    /// Address-scoped balance and compliance bundle.
    /// Fails with [`ProviderError::NotFound`] when the address has no
    /// on-chain record, never with a generic error.
    async fn fetch_user_data(&self, address: &Address) -> Result<UserAssetState, ProviderError>;
}

/// Listing issuance service.
///
/// Callers must guarantee at most one outstanding call per user-initiated
/// publish; the wizard enforces this with its publish state.
#[async_trait]
pub trait IssuanceService: Send + Sync {
    async fn publish_listing(
        &self,
        listing: &ListingSubmission,
    ) -> Result<PublishReceipt, ProviderError>;
}

/// Read-only provider of the marketplace catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<Vec<MarketplaceListing>, ProviderError>;
}

/// In-memory catalog, seeded from a JSON document or a prebuilt list.
/// Backs demos and tests; production swaps in a real source.
pub struct StaticCatalog {
    listings: Vec<MarketplaceListing>,
}

impl StaticCatalog {
    pub fn new(listings: Vec<MarketplaceListing>) -> Self {
        Self { listings }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            listings: serde_json::from_str(json)?,
        })
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_listings(&self) -> Result<Vec<MarketplaceListing>, ProviderError> {
        Ok(self.listings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalog_from_json() {
        let json = r#"[{
            "id": "kepler-exoplanets",
            "name": "Kepler Exoplanet Archive",
            "location": "Kepler Space Telescope",
            "asset_type": "catalog",
            "description": "Confirmed exoplanet catalog",
            "total_value": 1800000,
            "available_units": 720000,
            "price_per_unit": 2.5,
            "projected_yield": 7.2,
            "risk": "medium",
            "status": "live",
            "launched_at": 1700000000000,
            "investor_count": 121,
            "contract_reference": "CKPLR...X901",
            "observatory": "NASA Ames",
            "certification": "peer_reviewed"
        }]"#;

        let catalog = StaticCatalog::from_json(json).unwrap();
        let listings = catalog.fetch_listings().await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "kepler-exoplanets");
        assert!(listings[0].is_open_for_licensing());
    }
}
