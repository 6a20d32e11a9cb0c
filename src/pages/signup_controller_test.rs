use super::*;
use crate::net::error::FALLBACK_MESSAGE;
use crate::net::types::SignupResponse;
use crate::state::signup::Field;
use crate::util::token_store::{MemoryTokenStore, StorageError};
use futures::channel::oneshot;
use futures::executor::block_on;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone)]
struct StubApi {
    calls: Rc<RefCell<Vec<SignupRequest>>>,
    reply: Result<SignupResponse, SignupError>,
}

impl StubApi {
    fn replying(reply: Result<SignupResponse, SignupError>) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            reply,
        }
    }

    fn token(token: &str) -> Self {
        Self::replying(Ok(SignupResponse {
            access_token: token.to_owned(),
        }))
    }
}

impl SignupApi for StubApi {
    async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, SignupError> {
        self.calls.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}

/// Holds the request in flight until the test sends a reply.
struct GatedApi {
    calls: Rc<Cell<usize>>,
    gate: RefCell<Option<oneshot::Receiver<Result<SignupResponse, SignupError>>>>,
}

impl SignupApi for GatedApi {
    async fn signup(&self, _request: &SignupRequest) -> Result<SignupResponse, SignupError> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SignupError::Network("reply dropped".to_owned()))),
            None => Err(SignupError::Network("gate already used".to_owned())),
        }
    }
}

struct BrokenStore;

impl TokenStore for BrokenStore {
    fn save_token(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn load_token(&self) -> Option<String> {
        None
    }
}

fn form(password: &str, confirm: &str) -> RefCell<FormState> {
    let mut state = FormState::default();
    state.set_field(Field::Email, "new@user.com".to_owned());
    state.set_field(Field::Password, password.to_owned());
    state.set_field(Field::ConfirmPassword, confirm.to_owned());
    RefCell::new(state)
}

#[test]
fn mismatch_sends_nothing_and_sets_error() {
    let api = StubApi::token("abc123");
    let store = MemoryTokenStore::new();
    let controller = SignupController::new(api.clone(), store.clone());
    let form = form("one", "two");
    let navigated = RefCell::new(None::<String>);

    let outcome = block_on(controller.handle_submit(&form, |path| {
        *navigated.borrow_mut() = Some(path.to_owned());
    }));

    assert_eq!(outcome, None);
    assert!(api.calls.borrow().is_empty());
    assert_eq!(form.borrow().error, "Passwords do not match");
    assert!(!form.borrow().submitting);
    assert_eq!(store.load_token(), None);
    assert_eq!(*navigated.borrow(), None);
}

#[test]
fn success_stores_token_and_navigates_to_dashboard() {
    let api = StubApi::token("abc123");
    let store = MemoryTokenStore::new();
    let controller = SignupController::new(api.clone(), store.clone());
    let form = form("same", "same");
    let navigated = RefCell::new(None::<String>);

    let outcome = block_on(controller.handle_submit(&form, |path| {
        *navigated.borrow_mut() = Some(path.to_owned());
    }));

    assert_eq!(
        outcome,
        Some(SignupOutcome::Authenticated {
            redirect: "/dashboard"
        })
    );
    assert_eq!(store.get("token"), Some("abc123".to_owned()));
    assert_eq!(navigated.borrow().as_deref(), Some("/dashboard"));
    assert_eq!(
        *api.calls.borrow(),
        vec![SignupRequest {
            email: "new@user.com".to_owned(),
            password: "same".to_owned(),
        }]
    );
    assert!(!form.borrow().submitting);
    assert!(form.borrow().error.is_empty());
}

#[test]
fn rejection_with_detail_shows_exact_detail() {
    let api = StubApi::replying(Err(SignupError::Rejected {
        status: 400,
        detail: Some("Email already exists".to_owned()),
    }));
    let store = MemoryTokenStore::new();
    let controller = SignupController::new(api, store.clone());
    let form = form("same", "same");

    let outcome = block_on(controller.handle_submit(&form, |_| {
        unreachable!("failed signup must not navigate")
    }));

    assert_eq!(
        outcome,
        Some(SignupOutcome::Failed {
            message: "Email already exists".to_owned()
        })
    );
    assert_eq!(form.borrow().error, "Email already exists");
    assert!(!form.borrow().submitting);
    assert_eq!(store.load_token(), None);
}

#[test]
fn rejection_without_detail_shows_fallback() {
    let api = StubApi::replying(Err(SignupError::Rejected {
        status: 500,
        detail: None,
    }));
    let controller = SignupController::new(api, MemoryTokenStore::new());
    let form = form("same", "same");

    block_on(controller.handle_submit(&form, |_| {}));

    assert_eq!(form.borrow().error, FALLBACK_MESSAGE);
    assert!(!form.borrow().submitting);
}

#[test]
fn network_failure_shows_fallback() {
    let api = StubApi::replying(Err(SignupError::Network("offline".to_owned())));
    let controller = SignupController::new(api, MemoryTokenStore::new());
    let form = form("same", "same");

    block_on(controller.handle_submit(&form, |_| {}));

    assert_eq!(form.borrow().error, "Signup failed. Email might already exist.");
}

#[test]
fn storage_failure_is_reported_and_does_not_navigate() {
    let controller = SignupController::new(StubApi::token("abc123"), BrokenStore);
    let form = form("same", "same");
    let navigated = Cell::new(false);

    let outcome = block_on(controller.handle_submit(&form, |_| navigated.set(true)));

    assert!(matches!(outcome, Some(SignupOutcome::Failed { .. })));
    assert_eq!(form.borrow().error, FALLBACK_MESSAGE);
    assert!(!navigated.get());
}

#[test]
fn submitting_is_held_only_while_request_is_in_flight() {
    let (tx, rx) = oneshot::channel();
    let calls = Rc::new(Cell::new(0));
    let api = GatedApi {
        calls: calls.clone(),
        gate: RefCell::new(Some(rx)),
    };
    let store = MemoryTokenStore::new();
    let controller = SignupController::new(api, store.clone());
    let form = form("same", "same");
    let navigated = RefCell::new(Vec::<String>::new());

    assert!(!form.borrow().submitting);

    let (first, second) = block_on(async {
        futures::join!(
            controller.handle_submit(&form, |path| navigated.borrow_mut().push(path.to_owned())),
            async {
                assert!(form.borrow().submitting);
                assert_eq!(form.borrow().render().submit_label, "Creating Account...");
                let second = controller
                    .handle_submit(&form, |_| unreachable!("ignored submit must not navigate"))
                    .await;
                assert!(form.borrow().submitting);
                let _ = tx.send(Ok(SignupResponse {
                    access_token: "abc123".to_owned(),
                }));
                second
            }
        )
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(second, None);
    assert_eq!(
        first,
        Some(SignupOutcome::Authenticated {
            redirect: "/dashboard"
        })
    );
    assert!(!form.borrow().submitting);
    assert_eq!(store.load_token(), Some("abc123".to_owned()));
    assert_eq!(*navigated.borrow(), vec!["/dashboard".to_owned()]);
}

#[test]
fn submit_returns_failed_outcome_with_user_message() {
    let api = StubApi::replying(Err(SignupError::Decode("missing field".to_owned())));
    let controller = SignupController::new(api, MemoryTokenStore::new());
    let outcome = block_on(controller.submit(SignupRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
    }));
    assert_eq!(
        outcome,
        SignupOutcome::Failed {
            message: FALLBACK_MESSAGE.to_owned()
        }
    );
}
