// Compliance status for an address
// Represents the eligibility flags gating license transfer and access

use serde::{Deserialize, Serialize};

/// Address-scoped verification flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    /// Identity verification completed
    pub kyc_verified: bool,
    /// Verified as a research institution
    pub institution_verified: bool,
}

impl ComplianceStatus {
    /// Whether the address can hold and transfer license units
    #[inline]
    pub fn is_license_complete(&self) -> bool {
        self.kyc_verified
    }

    /// Dashboard label for the compliance card
    pub fn summary(&self) -> &'static str {
        if self.is_license_complete() {
            "License Complete"
        } else {
            "License Required"
        }
    }
}

/// Address-scoped bundle fetched from the contract data source
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAssetState {
    /// License unit balance in base units
    pub balance: u64,
    /// Whether the address is on the transfer whitelist
    pub is_whitelisted: bool,
    pub compliance: ComplianceStatus,
}
