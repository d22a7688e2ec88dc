use std::rc::Rc;

use log::{error, info};

use super::store::{LeadStore, StoreError};
use super::validate::{LeadInput, LeadRecord};
use crate::components::toast::ToastKind;

pub const MSG_UNCONFIGURED: &str = "Lead capture is not configured. Please contact support.";
pub const MSG_DUPLICATE: &str = "You're already on the list! We'll be in touch soon.";
pub const MSG_REMOTE: &str = "Something went wrong. Please try again later.";
pub const MSG_NETWORK: &str = "Network error. Please check your connection.";
pub const MSG_CAPTURED: &str = "Thanks! We'll be in touch soon. 🚀";

/// A message to surface as a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Result of one finished insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub notice: Notice,
    /// Set when the lead was stored; the form should be cleared.
    pub captured: Option<LeadRecord>,
}

pub fn classify(result: Result<(), StoreError>, lead: LeadRecord) -> Outcome {
    match result {
        Ok(()) => Outcome {
            notice: Notice::new(ToastKind::Success, MSG_CAPTURED),
            captured: Some(lead),
        },
        Err(e) if e.is_duplicate() => {
            info!("Lead already registered");
            Outcome {
                notice: Notice::new(ToastKind::Warning, MSG_DUPLICATE),
                captured: None,
            }
        }
        Err(e @ StoreError::Remote { .. }) => {
            error!("Supabase error: {}", e);
            Outcome {
                notice: Notice::new(ToastKind::Error, MSG_REMOTE),
                captured: None,
            }
        }
        Err(e @ StoreError::Transport(_)) => {
            error!("Error submitting form: {}", e);
            Outcome {
                notice: Notice::new(ToastKind::Error, MSG_NETWORK),
                captured: None,
            }
        }
    }
}

/// Owns the submit lifecycle: one request in flight at most, submit control
/// disabled while it runs.
pub struct LeadController<S> {
    store: Option<Rc<S>>,
    in_flight: Option<LeadRecord>,
}

impl<S: LeadStore> LeadController<S> {
    pub fn new(store: Option<S>) -> Self {
        Self {
            store: store.map(Rc::new),
            in_flight: None,
        }
    }

    /// The submit control is disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validates the form and reserves the single in-flight slot. On success
    /// the caller performs exactly one `insert` and hands its result to
    /// [`LeadController::finish`].
    pub fn begin(&mut self, input: &LeadInput) -> Result<(Rc<S>, LeadRecord), Notice> {
        if self.is_submitting() {
            return Err(Notice::new(ToastKind::Warning, "Submission already in progress."));
        }

        let lead = input
            .validate()
            .map_err(|e| Notice::new(ToastKind::Error, e.to_string()))?;

        let Some(store) = self.store.clone() else {
            error!("Supabase not initialized");
            return Err(Notice::new(ToastKind::Warning, MSG_UNCONFIGURED));
        };

        self.in_flight = Some(lead.clone());
        Ok((store, lead))
    }

    /// Releases the in-flight slot and classifies the response.
    pub fn finish(&mut self, result: Result<(), StoreError>) -> Option<Outcome> {
        let lead = self.in_flight.take()?;
        Some(classify(result, lead))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;

    #[derive(Debug)]
    struct ScriptedStore {
        calls: Cell<usize>,
        reply: RefCell<Result<(), StoreError>>,
    }

    impl ScriptedStore {
        fn replying(reply: Result<(), StoreError>) -> Self {
            Self {
                calls: Cell::new(0),
                reply: RefCell::new(reply),
            }
        }
    }

    #[async_trait(?Send)]
    impl LeadStore for ScriptedStore {
        async fn insert(&self, _lead: &LeadRecord) -> Result<(), StoreError> {
            self.calls.set(self.calls.get() + 1);
            self.reply.borrow().clone()
        }
    }

    fn valid_input() -> LeadInput {
        LeadInput {
            email: "a@b.co".into(),
            role: "student".into(),
            org: String::new(),
        }
    }

    fn run(controller: &mut LeadController<ScriptedStore>) -> (Outcome, Rc<ScriptedStore>) {
        let (store, lead) = controller.begin(&valid_input()).unwrap();
        assert!(controller.is_submitting());
        let result = tokio_test::block_on(store.insert(&lead));
        let outcome = controller.finish(result).unwrap();
        (outcome, store)
    }

    #[test]
    fn duplicate_is_a_warning_and_reenables_submit() {
        let duplicate = StoreError::Remote {
            status: 409,
            code: Some("23505".into()),
            message: "duplicate key".into(),
        };
        let mut controller = LeadController::new(Some(ScriptedStore::replying(Err(duplicate))));

        let (outcome, store) = run(&mut controller);
        assert_eq!(outcome.notice, Notice::new(ToastKind::Warning, MSG_DUPLICATE));
        assert_eq!(outcome.captured, None);
        assert!(!controller.is_submitting());
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn success_captures_lead() {
        let mut controller = LeadController::new(Some(ScriptedStore::replying(Ok(()))));
        let (outcome, store) = run(&mut controller);
        assert_eq!(outcome.notice.kind, ToastKind::Success);
        assert_eq!(outcome.captured.map(|l| l.role), Some("student".to_string()));
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn remote_and_transport_errors_are_generic() {
        let remote = StoreError::Remote {
            status: 500,
            code: Some("XX000".into()),
            message: "internal".into(),
        };
        let mut controller = LeadController::new(Some(ScriptedStore::replying(Err(remote))));
        let (outcome, _) = run(&mut controller);
        assert_eq!(outcome.notice, Notice::new(ToastKind::Error, MSG_REMOTE));
        assert!(!controller.is_submitting());

        let mut controller = LeadController::new(Some(ScriptedStore::replying(Err(
            StoreError::Transport("offline".into()),
        ))));
        let (outcome, _) = run(&mut controller);
        assert_eq!(outcome.notice, Notice::new(ToastKind::Error, MSG_NETWORK));
        assert!(!controller.is_submitting());
    }

    #[test]
    fn unconfigured_store_never_sends() {
        let mut controller: LeadController<ScriptedStore> = LeadController::new(None);

        let notice = controller.begin(&valid_input()).unwrap_err();
        assert_eq!(notice, Notice::new(ToastKind::Warning, MSG_UNCONFIGURED));
        assert!(!controller.is_submitting());
        assert_eq!(controller.finish(Ok(())), None);
    }

    #[test]
    fn invalid_input_is_rejected_before_store() {
        let mut controller = LeadController::new(Some(ScriptedStore::replying(Ok(()))));
        let input = LeadInput {
            email: "a@b".into(),
            ..valid_input()
        };
        let notice = controller.begin(&input).unwrap_err();
        assert_eq!(notice.kind, ToastKind::Error);
        assert_eq!(notice.message, "Please enter a valid email address.");
        assert!(!controller.is_submitting());
    }

    #[test]
    fn second_submit_blocked_while_in_flight() {
        let mut controller = LeadController::new(Some(ScriptedStore::replying(Ok(()))));
        let _pending = controller.begin(&valid_input()).unwrap();
        assert!(controller.begin(&valid_input()).is_err());
        controller.finish(Ok(()));
        assert!(controller.begin(&valid_input()).is_ok());
    }
}
