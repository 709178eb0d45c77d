use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Ordered position in the tokenization wizard
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum WizardStep {
    /// Dataset category, name, origin and declared value
    Classification = 1,
    /// Observation rights and quality certification documents
    Documentation = 2,
    /// Symbol, supply and minimum access amount
    LicenseTerms = 3,
    /// Researcher requirements and usage restrictions
    AccessPolicy = 4,
    /// Full re-validation and publish
    Review = 5,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Classification;
    pub const LAST: WizardStep = WizardStep::Review;

    /// 1-based position as rendered by the progress indicator
    #[inline]
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(WizardStep::Classification),
            2 => Some(WizardStep::Documentation),
            3 => Some(WizardStep::LicenseTerms),
            4 => Some(WizardStep::AccessPolicy),
            5 => Some(WizardStep::Review),
            _ => None,
        }
    }

    /// Next step, saturating at Review
    pub fn succ(&self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    /// Previous step, saturating at Classification
    pub fn pred(&self) -> Self {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Classification => "Data Information",
            WizardStep::Documentation => "Copyright & Documentation",
            WizardStep::LicenseTerms => "License Structure",
            WizardStep::AccessPolicy => "Access Requirements",
            WizardStep::Review => "Review & Publish",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydata_common::config::WIZARD_STEP_COUNT;

    #[test]
    fn test_index_round_trip() {
        for index in 1..=WIZARD_STEP_COUNT {
            let step = WizardStep::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert_eq!(WizardStep::from_index(0), None);
        assert_eq!(WizardStep::from_index(6), None);
    }

    #[test]
    fn test_saturating_bounds() {
        assert_eq!(WizardStep::Review.succ(), WizardStep::Review);
        assert_eq!(WizardStep::Classification.pred(), WizardStep::Classification);
        assert_eq!(WizardStep::Classification.succ(), WizardStep::Documentation);
        assert_eq!(WizardStep::Review.pred(), WizardStep::AccessPolicy);
    }

    #[test]
    fn test_ordering() {
        assert!(WizardStep::Classification < WizardStep::Review);
        assert!(WizardStep::LicenseTerms > WizardStep::Documentation);
    }
}
