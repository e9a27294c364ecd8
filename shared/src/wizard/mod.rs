//! Multi-step submission workflow.
//!
//! A form is split into numbered steps. Advancing validates only the current
//! step; steps flagged as submitting hand a payload to the caller, which makes
//! exactly one network call and reports the outcome back with
//! [`WizardState::finish_submit`].

pub mod club_registration;
pub mod match_submission;
pub mod rules;

use crate::error::Result;
use log::{debug, warn};
use std::fmt;
use validator::ValidationErrors;

pub use club_registration::{ClubContactStep, ClubIdentityStep, ClubRegistrationForm};
pub use match_submission::{
    LineupStep, MatchDetailsStep, MatchSubmissionForm, PlayerEntry, SubstitutesStep,
};

/// Validation messages for one step, in display order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepErrors {
    messages: Vec<String>,
}

impl StepErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, messages: I) {
        self.messages.extend(messages);
    }

    /// Appends the field errors reported by a `validator` derive.
    pub fn absorb(&mut self, result: std::result::Result<(), ValidationErrors>) {
        if let Err(errors) = result {
            self.messages
                .extend(crate::error::validation_messages(&errors));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_result(self) -> std::result::Result<(), StepErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for StepErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("\n"))
    }
}

/// A typed multi-step form.
pub trait Workflow {
    /// Request body sent by the submitting step
    type Payload;

    fn step_count(&self) -> usize;

    fn step_title(&self, step: usize) -> &'static str;

    /// Validates only the fields owned by `step` (1-based).
    fn validate_step(&self, step: usize) -> std::result::Result<(), StepErrors>;

    /// Whether advancing past `step` performs the remote create call.
    fn submits_on(&self, step: usize) -> bool;

    /// Builds the request body from the current field values.
    fn payload(&self) -> Result<Self::Payload>;
}

/// Result of an advance attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Advance<P> {
    /// Moved to the given step without touching the network.
    Moved(usize),
    /// Validation passed on a submitting step; the caller must send this
    /// payload once and report back with `finish_submit`.
    Submit(P),
    /// The last step passed and had no side effect.
    Completed,
    /// Validation failed; the step is unchanged.
    Invalid(String),
    /// A submission is in flight or the wizard already finished.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState<W> {
    current_step: usize,
    fields: W,
    last_error: Option<String>,
    submitting: bool,
    submitted: bool,
    pending_step: Option<usize>,
}

impl<W: Workflow> WizardState<W> {
    pub fn new(fields: W) -> Self {
        Self {
            current_step: 1,
            fields,
            last_error: None,
            submitting: false,
            submitted: false,
            pending_step: None,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.fields.step_count()
    }

    pub fn step_title(&self) -> &'static str {
        self.fields.step_title(self.current_step)
    }

    pub fn fields(&self) -> &W {
        &self.fields
    }

    /// Field edits never reset progress or errors.
    pub fn fields_mut(&mut self) -> &mut W {
        &mut self.fields
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step >= self.fields.step_count()
    }

    /// Attempts to move past the current step.
    pub fn begin_advance(&mut self) -> Advance<W::Payload> {
        if self.submitting || self.submitted {
            return Advance::Ignored;
        }
        self.last_error = None;

        let step = self.current_step;
        if let Err(errors) = self.fields.validate_step(step) {
            let message = errors.to_string();
            debug!("Step {} failed validation: {}", step, message);
            self.last_error = Some(message.clone());
            return Advance::Invalid(message);
        }

        if !self.fields.submits_on(step) {
            return self.move_past(step);
        }

        match self.fields.payload() {
            Ok(payload) => {
                debug!("Step {} validated, submitting", step);
                self.submitting = true;
                self.pending_step = Some(step);
                Advance::Submit(payload)
            }
            Err(e) => {
                let message = e.user_message();
                self.last_error = Some(message.clone());
                Advance::Invalid(message)
            }
        }
    }

    /// Records the outcome of the call requested by `Advance::Submit`.
    ///
    /// Always clears the submitting flag. Returns true when the wizard moved on.
    pub fn finish_submit<T>(&mut self, outcome: &Result<T>) -> bool {
        let Some(step) = self.pending_step.take() else {
            warn!("Submission result arrived with no submission in flight");
            return false;
        };
        self.submitting = false;

        match outcome {
            Ok(_) => {
                self.last_error = None;
                self.move_past(step);
                true
            }
            Err(e) => {
                debug!("Submission on step {} failed: {}", step, e);
                self.last_error = Some(e.user_message());
                false
            }
        }
    }

    /// Goes back one step without validating and without touching field values.
    pub fn back(&mut self) -> bool {
        if self.submitted || self.current_step <= 1 {
            return false;
        }
        self.current_step -= 1;
        true
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.last_error = message;
    }

    fn move_past(&mut self, step: usize) -> Advance<W::Payload> {
        if step >= self.fields.step_count() {
            self.current_step = self.fields.step_count();
            self.submitted = true;
            Advance::Completed
        } else {
            self.current_step = step + 1;
            Advance::Moved(self.current_step)
        }
    }
}

impl<W: Workflow + Default> Default for WizardState<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}
