//! Tokenization wizard engine.
//!
//! Owns the current step, the in-progress [`ListingDraft`] and the publish
//! lifecycle. Step transitions are gated by per-step validation; the publish
//! call is at-most-once per user click.

mod draft;
mod step;

pub use draft::{ListingDraft, MissingField, ValidationReport};
pub use step::WizardStep;

use log::{debug, warn};
use thiserror::Error;

use skydata_common::api::{ListingSubmission, PublishReceipt};

use crate::providers::{IssuanceService, ProviderError};

#[derive(Debug, Error)]
pub enum WizardError {
    /// The current step's required fields are unmet; the step is unchanged
    #[error("step '{step}' is incomplete: {} field(s) missing", missing.len())]
    StepIncomplete {
        step: WizardStep,
        missing: Vec<MissingField>,
    },

    /// Forward jumps past the highest step already reached are refused
    #[error("step '{requested}' has not been reached yet (highest: '{highest}')")]
    StepNotReached {
        requested: WizardStep,
        highest: WizardStep,
    },

    /// Publishing is only available on the review step
    #[error("publish is only available on the review step")]
    NotAtReview,

    #[error("draft is incomplete: {} step(s) have missing fields", .0.len())]
    DraftIncomplete(ValidationReport),

    /// A publish call is already outstanding
    #[error("a publish call is already in flight")]
    PublishInFlight,

    #[error("listing has already been published")]
    AlreadyPublished,

    /// `complete_publish` without a matching `begin_publish`
    #[error("no publish call is in flight")]
    NotPublishing,

    #[error("publish failed: {0}")]
    Publish(#[source] ProviderError),
}

/// Lifecycle of the external issuance call
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PublishState {
    #[default]
    Idle,
    /// A call is outstanding; re-submission is disabled
    InFlight,
    Published(PublishReceipt),
}

/// Multi-step listing workflow for an issuer.
///
/// One instance per wizard mount; the draft is dropped with it when the user
/// navigates away without publishing.
#[derive(Debug, Default)]
pub struct TokenizationWizard {
    step_state: StepState,
    draft: ListingDraft,
    publish: PublishState,
}

#[derive(Debug)]
struct StepState {
    current: WizardStep,
    /// Highest step the user has ever advanced to; `goto` may not pass it
    highest_reached: WizardStep,
}

impl Default for StepState {
    fn default() -> Self {
        Self {
            current: WizardStep::FIRST,
            highest_reached: WizardStep::FIRST,
        }
    }
}

impl TokenizationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn step(&self) -> WizardStep {
        self.step_state.current
    }

    #[inline]
    pub fn highest_reached(&self) -> WizardStep {
        self.step_state.highest_reached
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    /// Mutable access to the draft for field-by-field edits.
    /// Backward navigation never clears entered data, so edits survive any
    /// amount of stepping around.
    pub fn draft_mut(&mut self) -> &mut ListingDraft {
        &mut self.draft
    }

    pub fn publish_state(&self) -> &PublishState {
        &self.publish
    }

    #[inline]
    pub fn is_publishing(&self) -> bool {
        self.publish == PublishState::InFlight
    }

    /// Whether the publish control should be enabled: on the review step,
    /// with no call outstanding, not yet published, and the whole draft
    /// re-validated clean
    pub fn can_publish(&self) -> bool {
        self.step() == WizardStep::Review
            && self.publish == PublishState::Idle
            && self.draft.validation_report().is_empty()
    }

    /// Advance one step after validating the current one.
    /// A no-op at Review; refused (state unchanged) when required fields of
    /// the current step are unmet.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let current = self.step();
        if current == WizardStep::Review {
            return Ok(current);
        }

        if let Err(missing) = self.draft.validate_step(current) {
            warn!(
                "refusing to advance from '{}': {} field(s) missing",
                current,
                missing.len()
            );
            return Err(WizardError::StepIncomplete {
                step: current,
                missing,
            });
        }

        let next = current.succ();
        self.step_state.current = next;
        if next > self.step_state.highest_reached {
            self.step_state.highest_reached = next;
        }
        debug!("wizard advanced to step '{}'", next);
        Ok(next)
    }

    /// Go back one step, saturating at Classification. Entered data is
    /// preserved.
    pub fn prev(&mut self) -> WizardStep {
        let prev = self.step().pred();
        self.step_state.current = prev;
        prev
    }

    /// Jump via the progress indicator.
    /// Only steps already reached are allowed, and entering Review re-runs
    /// the full validation instead of trusting history.
    pub fn goto(&mut self, step: WizardStep) -> Result<WizardStep, WizardError> {
        if step > self.step_state.highest_reached {
            return Err(WizardError::StepNotReached {
                requested: step,
                highest: self.step_state.highest_reached,
            });
        }

        if step == WizardStep::Review {
            let report = self.draft.validation_report();
            if !report.is_empty() {
                return Err(WizardError::DraftIncomplete(report));
            }
        }

        self.step_state.current = step;
        debug!("wizard jumped to step '{}'", step);
        Ok(step)
    }

    /// Start the publish call: re-validate everything, freeze the draft and
    /// mark the call in flight. Refused off the review step, while a call is
    /// outstanding, or after a successful publish.
    pub fn begin_publish(&mut self) -> Result<ListingSubmission, WizardError> {
        if self.step() != WizardStep::Review {
            return Err(WizardError::NotAtReview);
        }
        match self.publish {
            PublishState::InFlight => return Err(WizardError::PublishInFlight),
            PublishState::Published(_) => return Err(WizardError::AlreadyPublished),
            PublishState::Idle => {}
        }

        let submission = self
            .draft
            .finalize()
            .map_err(WizardError::DraftIncomplete)?;

        self.publish = PublishState::InFlight;
        debug!(
            "publishing listing '{}' ({})",
            submission.data_name, submission.license_symbol
        );
        Ok(submission)
    }

    /// Record the outcome of the outstanding publish call.
    /// On failure the wizard stays on Review with the draft intact, ready
    /// for a retry.
    pub fn complete_publish(
        &mut self,
        result: Result<PublishReceipt, ProviderError>,
    ) -> Result<PublishReceipt, WizardError> {
        if self.publish != PublishState::InFlight {
            return Err(WizardError::NotPublishing);
        }

        match result {
            Ok(receipt) => {
                debug!("listing published: {}", receipt.listing_id);
                self.publish = PublishState::Published(receipt.clone());
                Ok(receipt)
            }
            Err(e) => {
                warn!("publish failed, draft preserved for retry: {}", e);
                self.publish = PublishState::Idle;
                Err(WizardError::Publish(e))
            }
        }
    }

    /// Drive a full publish against the issuance service
    pub async fn publish<I: IssuanceService + ?Sized>(
        &mut self,
        issuer: &I,
    ) -> Result<PublishReceipt, WizardError> {
        let submission = self.begin_publish()?;
        let result = issuer.publish_listing(&submission).await;
        self.complete_publish(result)
    }
}
