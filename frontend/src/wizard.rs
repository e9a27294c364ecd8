//! Drives a `WizardState` through its remote submission.

use crate::api::ScoutApi;
use crate::state::{WizardAction, WizardModel};
use crate::toast::ToastQueue;
use async_trait::async_trait;
use log::{debug, error, warn};
use shared::{
    Advance, Club, ClubRegistrationForm, CreateClubRequest, CreateMatchRequest, FootballMatch,
    MatchSubmissionForm, Result, Workflow,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::Reducible;

/// Performs the create call for a submitting step.
#[async_trait(?Send)]
pub trait Submitter<P> {
    type Created;

    async fn submit(&self, payload: P) -> Result<Self::Created>;

    fn success_message(&self, _created: &Self::Created) -> String {
        "Saved successfully".to_string()
    }
}

#[async_trait(?Send)]
impl Submitter<CreateMatchRequest> for Rc<dyn ScoutApi> {
    type Created = FootballMatch;

    async fn submit(&self, payload: CreateMatchRequest) -> Result<FootballMatch> {
        self.create_match(&payload).await
    }

    fn success_message(&self, created: &FootballMatch) -> String {
        format!("Match {} submitted", created.title())
    }
}

#[async_trait(?Send)]
impl Submitter<CreateClubRequest> for Rc<dyn ScoutApi> {
    type Created = Club;

    async fn submit(&self, payload: CreateClubRequest) -> Result<Club> {
        self.create_club(&payload).await
    }

    fn success_message(&self, created: &Club) -> String {
        format!("Club {} created", created.name)
    }
}

/// What an `advance` call ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Moved(usize),
    Completed,
    Invalid(String),
    /// The create call succeeded and the wizard moved on.
    Submitted,
    /// The create call failed; the step is unchanged.
    Rejected(String),
    /// Busy, finished, or the page was torn down mid-call.
    Ignored,
}

pub struct WizardController<W: Workflow, S: Submitter<W::Payload>> {
    model: RefCell<Rc<WizardModel<W>>>,
    submitter: S,
    toasts: ToastQueue,
    created: RefCell<Option<S::Created>>,
    disposed: Cell<bool>,
}

impl<W, S> WizardController<W, S>
where
    W: Workflow + Clone,
    W::Payload: Clone,
    S: Submitter<W::Payload>,
{
    pub fn new(fields: W, submitter: S, toasts: ToastQueue) -> Self {
        Self {
            model: RefCell::new(Rc::new(WizardModel::new(fields))),
            submitter,
            toasts,
            created: RefCell::new(None),
            disposed: Cell::new(false),
        }
    }

    pub fn model(&self) -> Rc<WizardModel<W>> {
        Rc::clone(&self.model.borrow())
    }

    fn dispatch(&self, action: WizardAction<W>) {
        let next = self.model().reduce(action);
        *self.model.borrow_mut() = next;
    }

    /// Applies an edit to a copy of the current fields.
    pub fn edit(&self, change: impl FnOnce(&mut W)) {
        let mut fields = self.model().state.fields().clone();
        change(&mut fields);
        self.dispatch(WizardAction::Edit(fields));
    }

    pub fn back(&self) {
        self.dispatch(WizardAction::Back);
    }

    pub fn dismiss_error(&self) {
        self.dispatch(WizardAction::DismissError);
    }

    pub fn dispose(&self) {
        self.disposed.set(true);
    }

    /// Takes the entity returned by the last successful submission.
    pub fn take_created(&self) -> Option<S::Created> {
        self.created.borrow_mut().take()
    }

    /// Validates the current step and, on a submitting step, performs exactly
    /// one create call.
    pub async fn advance(&self) -> StepOutcome {
        if self.disposed.get() {
            return StepOutcome::Ignored;
        }
        self.dispatch(WizardAction::Advance);
        let advance = self.model().last_advance.clone();

        let payload = match advance {
            Some(Advance::Submit(payload)) => payload,
            Some(Advance::Moved(step)) => return StepOutcome::Moved(step),
            Some(Advance::Completed) => return StepOutcome::Completed,
            Some(Advance::Invalid(message)) => return StepOutcome::Invalid(message),
            Some(Advance::Ignored) | None => return StepOutcome::Ignored,
        };

        let step = self.model().state.current_step();
        debug!("Submitting wizard step {}", step);
        let result = self.submitter.submit(payload).await;

        if self.disposed.get() {
            warn!("Submission for step {} resolved after teardown", step);
            return StepOutcome::Ignored;
        }

        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        self.dispatch(WizardAction::SubmitFinished(outcome));

        match result {
            Ok(created) => {
                self.toasts.success(self.submitter.success_message(&created));
                *self.created.borrow_mut() = Some(created);
                StepOutcome::Submitted
            }
            Err(e) => {
                error!("Submission for step {} failed: {}", step, e);
                let message = e.user_message();
                self.toasts.error(message.clone());
                StepOutcome::Rejected(message)
            }
        }
    }
}

pub type MatchWizard = WizardController<MatchSubmissionForm, Rc<dyn ScoutApi>>;
pub type ClubWizard = WizardController<ClubRegistrationForm, Rc<dyn ScoutApi>>;
