// End-to-end walk of the tokenization wizard: filling each step, publish
// gating and the at-most-once publish lifecycle against a mock issuer.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;

use skydata_client::{
    providers::{IssuanceService, ProviderError},
    wizard::{PublishState, TokenizationWizard, WizardError, WizardStep},
};
use skydata_common::api::{DocumentRef, ListingSubmission, PublishReceipt};

#[derive(Default)]
struct MockIssuer {
    calls: AtomicU32,
    fail_next: AtomicBool,
}

impl MockIssuer {
    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssuanceService for MockIssuer {
    async fn publish_listing(
        &self,
        listing: &ListingSubmission,
    ) -> Result<PublishReceipt, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ProviderError::Unavailable("issuance offline".to_string()));
        }
        Ok(PublishReceipt {
            listing_id: format!("listing-{}", listing.license_symbol.to_lowercase()),
            contract_reference: "CSKY...DT01".to_string(),
        })
    }
}

fn document(name: &str) -> DocumentRef {
    DocumentRef {
        name: name.to_string(),
        uri: format!("ipfs://{}", name),
    }
}

// Walk a fresh wizard to the review step with a complete draft
fn wizard_at_review() -> TokenizationWizard {
    let mut wizard = TokenizationWizard::new();

    let draft = wizard.draft_mut();
    draft.data_type = Some(skydata_common::asset::DataAssetType::Image);
    draft.data_name = "Hubble Deep Field Collection".to_string();
    draft.observatory = "STScI".to_string();
    draft.description = "Deep field imagery from three decades".to_string();
    draft.total_value = Some(2_500_000);
    wizard.next().unwrap();

    let draft = wizard.draft_mut();
    draft.observation_rights = Some(document("rights.pdf"));
    draft.quality_certification = Some(document("cert.pdf"));
    wizard.next().unwrap();

    let draft = wizard.draft_mut();
    draft.set_license_symbol("skydt");
    draft.total_supply = Some(1_000_000);
    draft.min_access = Some(250);
    wizard.next().unwrap();

    // access policy defaults are valid as-is
    wizard.next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Review);
    wizard
}

#[test]
fn full_walk_reaches_review_with_derived_economics() {
    let wizard = wizard_at_review();

    let economics = wizard.draft().economics().unwrap();
    assert_eq!(economics.price_per_unit, 2.50);
    assert_eq!(economics.market_cap, 2_500_000);
    assert_eq!(economics.min_access_units, 100);

    // symbol was upper-cased on write
    assert_eq!(wizard.draft().license_symbol(), "SKYDT");
    assert!(wizard.can_publish());
}

#[test]
fn next_at_review_is_a_no_op() {
    let mut wizard = wizard_at_review();
    assert_eq!(wizard.next().unwrap(), WizardStep::Review);
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn review_entry_revalidates_earlier_steps() {
    let mut wizard = wizard_at_review();
    wizard.goto(WizardStep::Documentation).unwrap();

    // invalidate an earlier step, then try to jump back to review
    wizard.draft_mut().quality_certification = None;
    let err = wizard.goto(WizardStep::Review).unwrap_err();
    assert!(matches!(err, WizardError::DraftIncomplete(_)));
    assert_eq!(wizard.step(), WizardStep::Documentation);

    wizard.draft_mut().quality_certification = Some(document("cert.pdf"));
    assert_eq!(wizard.goto(WizardStep::Review).unwrap(), WizardStep::Review);
}

#[tokio::test]
async fn publish_succeeds_once() {
    let issuer = MockIssuer::default();
    let mut wizard = wizard_at_review();

    let receipt = wizard.publish(&issuer).await.unwrap();
    assert_eq!(receipt.listing_id, "listing-skydt");
    assert_eq!(issuer.calls(), 1);
    assert!(matches!(wizard.publish_state(), PublishState::Published(_)));

    // a second click publishes nothing
    let err = wizard.publish(&issuer).await.unwrap_err();
    assert!(matches!(err, WizardError::AlreadyPublished));
    assert_eq!(issuer.calls(), 1);
}

#[test]
fn publish_is_disabled_while_outstanding() {
    let mut wizard = wizard_at_review();

    let _submission = wizard.begin_publish().unwrap();
    assert!(wizard.is_publishing());
    assert!(!wizard.can_publish());

    // the control is disabled until the outstanding call resolves
    let err = wizard.begin_publish().unwrap_err();
    assert!(matches!(err, WizardError::PublishInFlight));
}

#[tokio::test]
async fn failed_publish_keeps_draft_for_retry() {
    let issuer = MockIssuer::default();
    issuer.fail_next.store(true, Ordering::SeqCst);
    let mut wizard = wizard_at_review();

    let err = wizard.publish(&issuer).await.unwrap_err();
    assert!(matches!(err, WizardError::Publish(_)));
    assert_eq!(issuer.calls(), 1);

    // still at review, draft intact, ready for resubmission
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(wizard.publish_state(), &PublishState::Idle);
    assert_eq!(wizard.draft().data_name, "Hubble Deep Field Collection");
    assert!(wizard.can_publish());

    let receipt = wizard.publish(&issuer).await.unwrap();
    assert_eq!(receipt.contract_reference, "CSKY...DT01");
    assert_eq!(issuer.calls(), 2);
}

#[tokio::test]
async fn publish_refused_when_draft_regresses() {
    let issuer = MockIssuer::default();
    let mut wizard = wizard_at_review();

    // a field edited to an invalid value after reaching review
    wizard.draft_mut().total_supply = Some(0);
    assert!(!wizard.can_publish());

    let err = wizard.publish(&issuer).await.unwrap_err();
    assert!(matches!(err, WizardError::DraftIncomplete(_)));
    assert_eq!(issuer.calls(), 0);
}
