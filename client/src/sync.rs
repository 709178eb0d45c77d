//! Account/asset synchronization.
//!
//! Reconciles wallet-connection state with the two remote fetches feeding the
//! dashboard: asset-global metadata and the address-scoped balance/compliance
//! bundle. Driven by explicit events instead of render cycles, so ordering is
//! deterministic and the address-switch race is handled in one place.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use skydata_common::{
    account::{AccountState, Address},
    asset::AssetMetadata,
    compliance::UserAssetState,
};

use crate::providers::{ContractDataSource, ProviderError, WalletConnection};

/// The reconciler's input events, fired by the embedding UI layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEvent {
    /// Component mount; re-validates any cached session and loads metadata
    Mounted,
    Connected(Address),
    AddressChanged(Address),
    Disconnected,
}

/// Fetch state of one slice of remote data.
///
/// `Unknown` and `Failed` are explicit, renderable states; the dashboard
/// never goes silently blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteData<T> {
    /// Not fetched yet, or cleared after a disconnect
    Unknown,
    Ready(T),
    /// The source answered but holds no record (address not registered)
    NotFound,
    /// Fetch failed; retryable, the message is shown to the user
    Failed(String),
}

// manual impl: `Unknown` is the default for any T
impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        RemoteData::Unknown
    }
}

impl<T> RemoteData<T> {
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, RemoteData::Ready(_))
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            RemoteData::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// The single shared read model for the dashboard.
/// Only the synchronizer writes it; consumers read cloned snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetSnapshot {
    pub account: AccountState,
    /// Asset-global metadata, present even for disconnected visitors
    pub metadata: RemoteData<AssetMetadata>,
    /// Address-scoped bundle for the connected wallet
    pub user: RemoteData<UserAssetState>,
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("wallet connection check failed: {0}")]
    Connection(#[source] ProviderError),

    #[error("asset metadata fetch failed: {0}")]
    MetadataFetch(#[source] ProviderError),

    #[error("user data fetch failed for {address}: {source}")]
    UserFetch {
        address: Address,
        source: ProviderError,
    },

    /// Manual refresh without a connected address
    #[error("no connected address to refresh")]
    NoAddress,
}

struct Inner {
    snapshot: AssetSnapshot,
    /// Address the current or last user fetch was initiated for; a repeat
    /// event for the same address is a no-op
    fetch_address: Option<Address>,
}

/// Event-driven reconciler between the wallet session and the contract data
/// source.
///
/// Both collaborators are injected so tests can substitute fakes. Address
/// fetches are stamped with a generation at initiation; a response whose
/// generation has been superseded is dropped on arrival, which gives
/// last-address-wins semantics without true network cancellation.
pub struct AccountSynchronizer<W, D> {
    wallet: W,
    source: D,
    inner: RwLock<Inner>,
    generation: AtomicU64,
}

impl<W: WalletConnection, D: ContractDataSource> AccountSynchronizer<W, D> {
    pub fn new(wallet: W, source: D) -> Self {
        Self {
            wallet,
            source,
            inner: RwLock::new(Inner {
                snapshot: AssetSnapshot::default(),
                fetch_address: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// Current read model, cloned for the caller
    pub async fn snapshot(&self) -> AssetSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    pub async fn handle_event(&self, event: SyncEvent) -> Result<(), SyncError> {
        debug!("sync event: {:?}", event);
        match event {
            SyncEvent::Mounted => self.handle_mount().await,
            SyncEvent::Connected(address) | SyncEvent::AddressChanged(address) => {
                self.sync_user(address, false).await
            }
            SyncEvent::Disconnected => {
                self.handle_disconnect().await;
                Ok(())
            }
        }
    }

    /// Retry the address-scoped fetch for the connected wallet, bypassing
    /// the fetch-once guard. The retry path after a failed fetch.
    pub async fn refresh_user_data(&self) -> Result<(), SyncError> {
        let address = {
            let inner = self.inner.read().await;
            inner.snapshot.account.address.clone()
        };
        match address {
            Some(address) => self.sync_user(address, true).await,
            None => Err(SyncError::NoAddress),
        }
    }

    async fn handle_mount(&self) -> Result<(), SyncError> {
        // re-validate any cached session; the provider call is idempotent
        let account = match self.wallet.check_connection().await {
            Ok(account) => account,
            Err(e) => {
                warn!("connection check failed on mount: {}", e);
                return Err(SyncError::Connection(e));
            }
        };

        {
            let mut inner = self.inner.write().await;
            inner.snapshot.account = account.clone();

            // an expired or addressless session gets the same reset as a
            // disconnect: the prior wallet's data must not survive
            // revalidation, and an in-flight fetch for it is dropped on
            // arrival
            if account.address.is_none() {
                self.generation.fetch_add(1, Ordering::SeqCst);
                inner.snapshot.user = RemoteData::Unknown;
                inner.fetch_address = None;
            }
        }

        // public marketplace data, fetched regardless of connection state
        let metadata_result = self.refresh_metadata().await;

        // the two fetches are independent; a metadata failure never blocks
        // the address-scoped flow
        let user_result = match account.address {
            Some(address) => self.sync_user(address, false).await,
            None => Ok(()),
        };

        metadata_result.and(user_result)
    }

    async fn refresh_metadata(&self) -> Result<(), SyncError> {
        match self.source.fetch_asset_metadata().await {
            Ok(metadata) => {
                self.inner.write().await.snapshot.metadata = RemoteData::Ready(metadata);
                Ok(())
            }
            Err(e) => {
                error!("asset metadata fetch failed: {}", e);
                self.inner.write().await.snapshot.metadata = RemoteData::Failed(e.to_string());
                Err(SyncError::MetadataFetch(e))
            }
        }
    }

    // The address-scoped flow. Exactly one fetch per address unless forced;
    // each initiation takes a fresh generation and the response is applied
    // only while that generation is still current.
    async fn sync_user(&self, address: Address, force: bool) -> Result<(), SyncError> {
        let generation = {
            let mut inner = self.inner.write().await;
            if !force && inner.fetch_address.as_ref() == Some(&address) {
                debug!("user data for {} already synced or in flight", address);
                return Ok(());
            }

            inner.snapshot.account = AccountState::connected(address.clone());
            inner.snapshot.user = RemoteData::Unknown;
            inner.fetch_address = Some(address.clone());

            // supersedes any in-flight fetch for a previous address
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let result = self.source.fetch_user_data(&address).await;

        let mut inner = self.inner.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("dropping stale user data response for {}", address);
            return Ok(());
        }

        match result {
            Ok(user) => {
                debug!("user data ready for {}", address);
                inner.snapshot.user = RemoteData::Ready(user);
                Ok(())
            }
            Err(ProviderError::NotFound) => {
                // connected but not registered on-chain; an explicit state,
                // not an error
                inner.snapshot.user = RemoteData::NotFound;
                Ok(())
            }
            Err(e) => {
                // the connection stays intact; only the slice is degraded
                error!("user data fetch failed for {}: {}", address, e);
                inner.snapshot.user = RemoteData::Failed(e.to_string());
                Err(SyncError::UserFetch { address, source: e })
            }
        }
    }

    async fn handle_disconnect(&self) {
        // bump the generation so an in-flight fetch is dropped on arrival
        self.generation.fetch_add(1, Ordering::SeqCst);

        let mut inner = self.inner.write().await;
        inner.snapshot.account = AccountState::disconnected();
        // no prior wallet's balance may stay visible to the next one
        inner.snapshot.user = RemoteData::Unknown;
        inner.fetch_address = None;
        debug!("disconnected, user slice cleared");
    }
}
