use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use skydata_common::{
    api::{AccessPolicy, DocumentRef, ListingSchedule, ListingSubmission},
    asset::DataAssetType,
    config::SYMBOL_MAX_LEN,
    economics::LicenseEconomics,
};

use super::step::WizardStep;

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[A-Z]{3,5}$").unwrap();
}

/// A required field the current draft is missing or holds an invalid value
/// for. One variant per reportable field so the UI can highlight the exact
/// control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    DataType,
    DataName,
    Observatory,
    TotalValue,
    ObservationRights,
    QualityCertification,
    LicenseSymbol,
    TotalSupply,
    MinAccess,
    ScheduleOrdering,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            MissingField::DataType => "data type",
            MissingField::DataName => "dataset name",
            MissingField::Observatory => "observatory",
            MissingField::TotalValue => "total value",
            MissingField::ObservationRights => "observation rights document",
            MissingField::QualityCertification => "quality certification document",
            MissingField::LicenseSymbol => "license symbol",
            MissingField::TotalSupply => "total supply",
            MissingField::MinAccess => "minimum access amount",
            MissingField::ScheduleOrdering => "availability deadline before release date",
        }
    }
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-step validation failures, in step order
pub type ValidationReport = IndexMap<WizardStep, Vec<MissingField>>;

/// In-progress listing submission, exclusively owned by the active wizard.
///
/// Created empty at wizard mount, mutated field by field, frozen into a
/// [`ListingSubmission`] at publish. Never persisted across sessions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    // classification
    pub data_type: Option<DataAssetType>,
    pub data_name: String,
    pub observatory: String,
    pub description: String,
    /// Declared total value in USD
    pub total_value: Option<u64>,

    // documentation
    pub observation_rights: Option<DocumentRef>,
    pub quality_certification: Option<DocumentRef>,
    pub calibration_data: Option<DocumentRef>,
    pub additional_documents: Vec<DocumentRef>,

    // license terms
    license_symbol: String,
    pub total_supply: Option<u64>,
    /// Minimum access amount in USD
    pub min_access: Option<u64>,

    // access policy
    pub access_policy: AccessPolicy,

    // scheduling
    pub schedule: ListingSchedule,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbol as it will be submitted, already upper-cased
    pub fn license_symbol(&self) -> &str {
        &self.license_symbol
    }

    // Symbols are upper-cased and clamped to the maximum length on every
    // write; the minimum length is checked at step validation instead so a
    // half-typed symbol is not rejected while editing. The clamp counts
    // characters, not bytes, so multibyte input never splits a char.
    pub fn set_license_symbol(&mut self, symbol: &str) {
        let symbol = symbol.trim().to_uppercase();
        self.license_symbol = symbol.chars().take(SYMBOL_MAX_LEN).collect();
    }

    /// Derived pricing figures over the current inputs.
    /// Recomputed on every call; `None` until a positive supply is entered.
    pub fn economics(&self) -> Option<LicenseEconomics> {
        LicenseEconomics::derive(
            self.total_value?,
            self.total_supply?,
            self.min_access.unwrap_or(0),
        )
    }

    /// Required-field check for a single step
    pub fn validate_step(&self, step: WizardStep) -> Result<(), Vec<MissingField>> {
        let mut missing = Vec::new();

        match step {
            WizardStep::Classification => {
                if self.data_type.is_none() {
                    missing.push(MissingField::DataType);
                }
                if self.data_name.trim().is_empty() {
                    missing.push(MissingField::DataName);
                }
                if self.observatory.trim().is_empty() {
                    missing.push(MissingField::Observatory);
                }
                if !matches!(self.total_value, Some(value) if value > 0) {
                    missing.push(MissingField::TotalValue);
                }
            }
            WizardStep::Documentation => {
                // documents may still be pending async verification, but the
                // references must exist before advancing
                if self.observation_rights.is_none() {
                    missing.push(MissingField::ObservationRights);
                }
                if self.quality_certification.is_none() {
                    missing.push(MissingField::QualityCertification);
                }
            }
            WizardStep::LicenseTerms => {
                if !SYMBOL_PATTERN.is_match(&self.license_symbol) {
                    missing.push(MissingField::LicenseSymbol);
                }
                if !matches!(self.total_supply, Some(supply) if supply > 0) {
                    missing.push(MissingField::TotalSupply);
                }
                if self.min_access.is_none() {
                    missing.push(MissingField::MinAccess);
                }
            }
            WizardStep::AccessPolicy => {
                // boolean gates are total and the free text may be empty
            }
            WizardStep::Review => {
                for prior in WizardStep::iter().filter(|s| *s < WizardStep::Review) {
                    if let Err(mut fields) = self.validate_step(prior) {
                        missing.append(&mut fields);
                    }
                }
                if !self.schedule.is_ordered() {
                    missing.push(MissingField::ScheduleOrdering);
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    /// All failing steps with their missing fields, in step order.
    /// Empty when the draft is ready to publish.
    pub fn validation_report(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        for step in WizardStep::iter().filter(|s| *s < WizardStep::Review) {
            if let Err(missing) = self.validate_step(step) {
                report.insert(step, missing);
            }
        }
        if !self.schedule.is_ordered() {
            report
                .entry(WizardStep::Review)
                .or_default()
                .push(MissingField::ScheduleOrdering);
        }
        report
    }

    /// Freeze the draft into the submission payload.
    /// Fails with the full validation report when any required field is
    /// missing; the draft is left untouched either way.
    pub fn finalize(&self) -> Result<ListingSubmission, ValidationReport> {
        let report = self.validation_report();
        if !report.is_empty() {
            return Err(report);
        }

        // the report was empty, so every unwrapped field is present
        Ok(ListingSubmission {
            data_type: self.data_type.unwrap(),
            data_name: self.data_name.trim().to_string(),
            observatory: self.observatory.trim().to_string(),
            description: self.description.trim().to_string(),
            total_value: self.total_value.unwrap(),
            observation_rights: self.observation_rights.clone().unwrap(),
            quality_certification: self.quality_certification.clone().unwrap(),
            calibration_data: self.calibration_data.clone(),
            additional_documents: self.additional_documents.clone(),
            license_symbol: self.license_symbol.clone(),
            total_supply: self.total_supply.unwrap(),
            min_access: self.min_access.unwrap(),
            access_policy: self.access_policy.clone(),
            schedule: self.schedule.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(name: &str) -> DocumentRef {
        DocumentRef {
            name: name.to_string(),
            uri: format!("ipfs://{}", name),
        }
    }

    fn complete_draft() -> ListingDraft {
        let mut draft = ListingDraft::new();
        draft.data_type = Some(DataAssetType::Image);
        draft.data_name = "Hubble Deep Field Collection".to_string();
        draft.observatory = "STScI".to_string();
        draft.description = "Deep field imagery".to_string();
        draft.total_value = Some(2_500_000);
        draft.observation_rights = Some(document("rights.pdf"));
        draft.quality_certification = Some(document("cert.pdf"));
        draft.set_license_symbol("SKYDT");
        draft.total_supply = Some(1_000_000);
        draft.min_access = Some(250);
        draft
    }

    #[test]
    fn test_symbol_upper_cased_and_clamped() {
        let mut draft = ListingDraft::new();
        draft.set_license_symbol("skydata");
        assert_eq!(draft.license_symbol(), "SKYDA");

        draft.set_license_symbol("ab");
        assert_eq!(draft.license_symbol(), "AB");
        // too short until it reaches three characters
        assert!(draft
            .validate_step(WizardStep::LicenseTerms)
            .unwrap_err()
            .contains(&MissingField::LicenseSymbol));
    }

    #[test]
    fn test_symbol_multibyte_input_is_clamped_not_split() {
        let mut draft = ListingDraft::new();
        draft.set_license_symbol("ääääää");
        assert_eq!(draft.license_symbol(), "ÄÄÄÄÄ");

        // non-latin symbols are reported by step validation, never a crash
        assert!(draft
            .validate_step(WizardStep::LicenseTerms)
            .unwrap_err()
            .contains(&MissingField::LicenseSymbol));
    }

    #[test]
    fn test_classification_requirements() {
        let mut draft = complete_draft();
        assert!(draft.validate_step(WizardStep::Classification).is_ok());

        draft.data_name.clear();
        let missing = draft.validate_step(WizardStep::Classification).unwrap_err();
        assert_eq!(missing, vec![MissingField::DataName]);

        draft.total_value = Some(0);
        let missing = draft.validate_step(WizardStep::Classification).unwrap_err();
        assert!(missing.contains(&MissingField::TotalValue));
    }

    #[test]
    fn test_license_terms_require_positive_supply() {
        let mut draft = complete_draft();
        draft.total_supply = None;
        assert!(draft
            .validate_step(WizardStep::LicenseTerms)
            .unwrap_err()
            .contains(&MissingField::TotalSupply));

        draft.total_supply = Some(0);
        assert!(draft
            .validate_step(WizardStep::LicenseTerms)
            .unwrap_err()
            .contains(&MissingField::TotalSupply));
    }

    #[test]
    fn test_review_revalidates_prior_steps() {
        let mut draft = complete_draft();
        assert!(draft.validate_step(WizardStep::Review).is_ok());

        draft.observation_rights = None;
        let missing = draft.validate_step(WizardStep::Review).unwrap_err();
        assert!(missing.contains(&MissingField::ObservationRights));
    }

    #[test]
    fn test_economics_never_cached() {
        let mut draft = complete_draft();
        let before = draft.economics().unwrap();
        assert_eq!(before.price_per_unit, 2.5);
        assert_eq!(before.min_access_units, 100);

        draft.total_supply = Some(500_000);
        let after = draft.economics().unwrap();
        assert_eq!(after.price_per_unit, 5.0);
        assert_eq!(after.min_access_units, 50);

        draft.total_supply = Some(0);
        assert!(draft.economics().is_none());
    }

    #[test]
    fn test_finalize_requires_complete_draft() {
        let mut draft = complete_draft();
        let submission = draft.finalize().unwrap();
        assert_eq!(submission.license_symbol, "SKYDT");
        assert_eq!(submission.total_value, 2_500_000);

        draft.quality_certification = None;
        let report = draft.finalize().unwrap_err();
        assert_eq!(
            report.get(&WizardStep::Documentation),
            Some(&vec![MissingField::QualityCertification])
        );
    }
}
