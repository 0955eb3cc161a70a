//! Login controller actor: an isolated Tokio task that owns the
//! [`FlowState`] of one login screen.
//!
//! The screen sends intents through an mpsc channel and reads state from
//! a watch channel. One-shot signals (navigation, toasts) come back on a
//! separate event channel. No state is shared; only messages move.
//!
//! # Sign-in requests
//!
//! A valid submit spawns a task that calls the gateway and reports back
//! with the attempt number it was started for. The actor only applies a
//! result whose attempt number matches the current `Submitting` state,
//! and aborts the task when it stops. A late answer therefore can't touch
//! a screen that is gone.

use std::sync::Arc;

use nadeem_auth::{AuthError, AuthGateway, Identity};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::{
    Destination, ExitLink, Field, FieldErrors, FlowState, LoginConfig,
    LoginError, LoginEvent, Notice, SocialProvider, validate_credentials,
};

/// Receiving end for a controller's [`LoginEvent`]s.
pub type LoginEvents = mpsc::UnboundedReceiver<LoginEvent>;

/// Intents sent to the controller through its channel.
///
/// `Snapshot` and `Dispose` carry a reply channel so the caller can wait
/// until every earlier intent has been applied.
enum LoginIntent {
    Edit { field: Field, value: String },
    Submit,
    ToggleSecretVisibility,
    NavigateAway(ExitLink),
    SocialSignIn(SocialProvider),
    Snapshot { reply: oneshot::Sender<FlowState> },
    Dispose { reply: oneshot::Sender<()> },
}

/// A finished sign-in request, tagged with the attempt that started it.
struct SignInOutcome {
    attempt: u64,
    result: Result<Identity, AuthError>,
}

// ---------------------------------------------------------------------------
// Handle
// ---------------------------------------------------------------------------

/// Handle to a running login controller.
///
/// Cheap to clone. The controller stops when [`dispose`](Self::dispose)
/// is called or when the last handle is dropped.
#[derive(Clone)]
pub struct LoginHandle {
    intents: mpsc::Sender<LoginIntent>,
    state: watch::Receiver<FlowState>,
}

impl LoginHandle {
    /// Replaces the value of `field`.
    pub async fn edit(
        &self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), LoginError> {
        self.send(LoginIntent::Edit {
            field,
            value: value.into(),
        })
        .await
    }

    /// Validates the form and, if both fields pass, signs in.
    pub async fn submit(&self) -> Result<(), LoginError> {
        self.send(LoginIntent::Submit).await
    }

    /// Shows or hides the password.
    pub async fn toggle_secret_visibility(&self) -> Result<(), LoginError> {
        self.send(LoginIntent::ToggleSecretVisibility).await
    }

    /// Leaves the flow for the registration or password-reset screen.
    pub async fn navigate_away(&self, link: ExitLink) -> Result<(), LoginError> {
        self.send(LoginIntent::NavigateAway(link)).await
    }

    /// Reacts to a social sign-in button.
    pub async fn social_sign_in(
        &self,
        provider: SocialProvider,
    ) -> Result<(), LoginError> {
        self.send(LoginIntent::SocialSignIn(provider)).await
    }

    /// Returns the state after every previously sent intent has been
    /// applied.
    pub async fn snapshot(&self) -> Result<FlowState, LoginError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(LoginIntent::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| LoginError::Unavailable)
    }

    /// The most recently published state. Doesn't wait for pending intents.
    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.clone()
    }

    /// Stops the controller and abandons any in-flight sign-in.
    ///
    /// Returns once the controller has stopped. Calling it on a stopped
    /// controller is a no-op.
    pub async fn dispose(&self) {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self
            .intents
            .send(LoginIntent::Dispose { reply: reply_tx })
            .await
            .is_ok()
        {
            let _ = reply_rx.await;
        }
    }

    /// Returns `true` while the controller task is running.
    pub fn is_running(&self) -> bool {
        !self.intents.is_closed()
    }

    async fn send(&self, intent: LoginIntent) -> Result<(), LoginError> {
        self.intents
            .send(intent)
            .await
            .map_err(|_| LoginError::Unavailable)
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// The internal controller state. Runs inside a Tokio task.
struct LoginActor<G: AuthGateway> {
    gateway: Arc<G>,
    config: LoginConfig,
    state: FlowState,
    published: watch::Sender<FlowState>,
    events: mpsc::UnboundedSender<LoginEvent>,
    outcomes: mpsc::UnboundedSender<SignInOutcome>,
    /// Number of the most recent sign-in attempt (0 = none yet).
    attempt: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl<G: AuthGateway> LoginActor<G> {
    /// Runs the actor loop until disposed or every handle is dropped.
    async fn run(
        mut self,
        mut intents: mpsc::Receiver<LoginIntent>,
        mut outcomes: mpsc::UnboundedReceiver<SignInOutcome>,
    ) {
        tracing::debug!("login flow started");

        let disposed = loop {
            tokio::select! {
                intent = intents.recv() => match intent {
                    Some(LoginIntent::Dispose { reply }) => break Some(reply),
                    Some(intent) => self.handle_intent(intent),
                    None => break None,
                },
                Some(outcome) = outcomes.recv() => self.handle_outcome(outcome),
            }
        };

        if let Some(task) = self.in_flight.take() {
            task.abort();
            tracing::debug!(
                attempt = self.attempt,
                "in-flight sign-in abandoned"
            );
        }
        tracing::debug!(state = %self.state, "login flow stopped");

        if let Some(reply) = disposed {
            let _ = reply.send(());
        }
    }

    fn handle_intent(&mut self, intent: LoginIntent) {
        match intent {
            LoginIntent::Edit { field, value } => self.handle_edit(field, value),
            LoginIntent::Submit => self.handle_submit(),
            LoginIntent::ToggleSecretVisibility => self.handle_toggle(),
            LoginIntent::NavigateAway(link) => self.handle_navigate_away(link),
            LoginIntent::SocialSignIn(provider) => {
                tracing::debug!(%provider, "social sign-in not available");
                self.emit(LoginEvent::Notice(Notice::ProviderUnavailable {
                    provider,
                }));
            }
            LoginIntent::Snapshot { reply } => {
                let _ = reply.send(self.state.clone());
            }
            // Handled by the run loop.
            LoginIntent::Dispose { .. } => {}
        }
    }

    fn handle_edit(&mut self, field: Field, value: String) {
        let next = match std::mem::take(&mut self.state) {
            FlowState::Editing { mut form }
            | FlowState::Failed { mut form, .. } => {
                form.set(field, value);
                FlowState::Editing { form }
            }
            other => {
                tracing::debug!(%field, state = %other, "edit ignored");
                self.state = other;
                return;
            }
        };
        self.publish(next);
    }

    fn handle_submit(&mut self) {
        let mut form = match std::mem::take(&mut self.state) {
            FlowState::Editing { form } | FlowState::Failed { form, .. } => form,
            other => {
                tracing::debug!(state = %other, "submit ignored");
                self.state = other;
                return;
            }
        };

        let check = validate_credentials(&form.credentials);
        form.errors = FieldErrors::from(&check);
        if !check.is_valid() {
            tracing::debug!(
                email_error = ?form.errors.email,
                password_error = ?form.errors.password,
                "submit rejected by validation"
            );
            self.publish(FlowState::Editing { form });
            return;
        }

        self.attempt += 1;
        let attempt = self.attempt;
        let credentials = form.credentials.clone();
        tracing::info!(attempt, email = %credentials.email(), "signing in");
        self.publish(FlowState::Submitting { form });

        let gateway = Arc::clone(&self.gateway);
        let outcomes = self.outcomes.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = gateway.sign_in(&credentials).await;
            drop(credentials);
            let _ = outcomes.send(SignInOutcome { attempt, result });
        }));
    }

    fn handle_outcome(&mut self, outcome: SignInOutcome) {
        let mut form = match std::mem::take(&mut self.state) {
            FlowState::Submitting { form } if outcome.attempt == self.attempt => {
                form
            }
            other => {
                tracing::debug!(
                    attempt = outcome.attempt,
                    state = %other,
                    "stale sign-in response ignored"
                );
                self.state = other;
                return;
            }
        };
        self.in_flight = None;

        match outcome.result {
            Ok(identity) => {
                tracing::info!(attempt = outcome.attempt, %identity, "signed in");
                let email = form.credentials.email().to_owned();
                form.credentials.clear_password();
                drop(form);
                self.publish(FlowState::Succeeded { email, identity });
                self.emit(LoginEvent::Navigate(Destination::Home));
            }
            Err(error) => {
                tracing::warn!(
                    attempt = outcome.attempt,
                    error = %error,
                    "sign-in failed"
                );
                if self.config.clear_password_on_failure {
                    form.credentials.clear_password();
                }
                let message = error.message().to_owned();
                self.publish(FlowState::Failed {
                    form,
                    message: message.clone(),
                });
                self.emit(LoginEvent::Notice(Notice::SignInFailed { message }));
            }
        }
    }

    fn handle_toggle(&mut self) {
        let mut next = self.state.clone();
        match &mut next {
            FlowState::Editing { form }
            | FlowState::Submitting { form }
            | FlowState::Failed { form, .. } => {
                form.secret_visible = !form.secret_visible;
            }
            FlowState::Succeeded { .. } => return,
        }
        self.publish(next);
    }

    fn handle_navigate_away(&mut self, link: ExitLink) {
        if !self.state.can_submit() {
            tracing::debug!(state = %self.state, "navigation ignored");
            return;
        }
        self.emit(LoginEvent::Navigate(link.into()));
    }

    /// Replaces the state and notifies watchers if it actually changed.
    fn publish(&mut self, next: FlowState) {
        self.published.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next.clone();
                true
            }
        });
        self.state = next;
    }

    /// Sends an event. Silently drops it if nobody is listening.
    fn emit(&self, event: LoginEvent) {
        let _ = self.events.send(event);
    }
}

/// Spawns a login controller and returns a handle plus its event stream.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_login<G: AuthGateway>(
    gateway: Arc<G>,
    config: LoginConfig,
) -> (LoginHandle, LoginEvents) {
    let (intent_tx, intent_rx) = mpsc::channel(config.intent_buffer.max(1));
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(FlowState::default());

    let actor = LoginActor {
        gateway,
        config,
        state: FlowState::default(),
        published: state_tx,
        events: event_tx,
        outcomes: outcome_tx,
        attempt: 0,
        in_flight: None,
    };

    tokio::spawn(actor.run(intent_rx, outcome_rx));

    let handle = LoginHandle {
        intents: intent_tx,
        state: state_rx,
    };
    (handle, event_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Form;
    use nadeem_auth::{Credentials, Session, SessionQueryError};

    struct NeverCalled;

    impl AuthGateway for NeverCalled {
        async fn current_session(&self) -> Result<Session, SessionQueryError> {
            unreachable!("controller never queries the session")
        }

        async fn sign_in(&self, _: &Credentials) -> Result<Identity, AuthError> {
            unreachable!("outcomes are fed by hand")
        }
    }

    fn submitting_actor(
        attempt: u64,
    ) -> (LoginActor<NeverCalled>, mpsc::UnboundedReceiver<LoginEvent>) {
        let form = Form {
            credentials: Credentials::new("a@b.com", "abcdef"),
            ..Form::default()
        };
        let state = FlowState::Submitting { form };
        let (published, _) = watch::channel(state.clone());
        let (events, event_rx) = mpsc::unbounded_channel();
        let (outcomes, _) = mpsc::unbounded_channel();
        let actor = LoginActor {
            gateway: Arc::new(NeverCalled),
            config: LoginConfig::default(),
            state,
            published,
            events,
            outcomes,
            attempt,
            in_flight: None,
        };
        (actor, event_rx)
    }

    #[test]
    fn test_handle_outcome_older_attempt_ignored() {
        let (mut actor, mut events) = submitting_actor(2);

        actor.handle_outcome(SignInOutcome {
            attempt: 1,
            result: Ok(Identity::new("stale")),
        });

        assert!(actor.state.is_submitting());
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_handle_outcome_current_attempt_applied() {
        let (mut actor, mut events) = submitting_actor(2);

        actor.handle_outcome(SignInOutcome {
            attempt: 1,
            result: Err(AuthError::new("stale")),
        });
        actor.handle_outcome(SignInOutcome {
            attempt: 2,
            result: Ok(Identity::new("u2")),
        });

        let FlowState::Succeeded { identity, .. } = &actor.state else {
            panic!("expected Succeeded, got {}", actor.state);
        };
        assert_eq!(identity.uid, "u2");
        assert_eq!(
            events.try_recv().unwrap(),
            LoginEvent::Navigate(Destination::Home)
        );
        assert!(events.try_recv().is_err());
    }
}
