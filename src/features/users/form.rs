//! The user form controller. It owns the two operations the page exposes —
//! submitting a new user and refreshing the list — and mediates between form
//! input, the remote API, and the notification surface. The API and notifier
//! are injected at construction so tests can substitute both.

use crate::{
    app_lib::AppError,
    features::users::{client::UserDirectory, types::UserRecord, validate::validate_new_user},
};
use std::cell::Cell;

/// Notification category shown on the transient message surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing feedback channel.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Tells the caller what to do with the rendered list after an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListUpdate {
    /// Replace the rendered list with this fetch result.
    Replace(Vec<UserRecord>),
    /// Leave the prior rendering in place.
    Keep,
}

/// Form controller over an injected directory and notifier.
///
/// Every failure path ends in a notification; the returned `Result` exists so
/// the caller can tell a saved submit (clear the inputs, apply the update)
/// from a rejected one (leave the inputs for correction).
pub struct UserForm<D, N> {
    directory: D,
    notifier: N,
    refresh_seq: Cell<u64>,
}

impl<D: UserDirectory, N: Notifier> UserForm<D, N> {
    pub fn new(directory: D, notifier: N) -> Self {
        Self {
            directory,
            notifier,
            refresh_seq: Cell::new(0),
        }
    }

    /// Validates the inputs, creates the user, and chains into one refresh.
    ///
    /// Validation failures short-circuit before any network call. A rejected
    /// create leaves the list untouched so the user can correct and resubmit.
    pub async fn submit(&self, name: &str, email: &str) -> Result<ListUpdate, AppError> {
        let record = match validate_new_user(name, email) {
            Ok(record) => record,
            Err(err) => {
                if let AppError::Validation(message) = &err {
                    self.notifier.notify(NoticeKind::Error, message);
                }
                return Err(err);
            }
        };

        match self.directory.create(&record).await {
            Ok(()) => {
                self.notifier
                    .notify(NoticeKind::Success, "User saved successfully");
                Ok(self.refresh().await.unwrap_or(ListUpdate::Keep))
            }
            Err(err) => {
                if !matches!(err, AppError::Http { .. }) {
                    leptos::logging::error!("saving user failed: {err}");
                }
                self.notifier
                    .notify(NoticeKind::Error, &save_error_message(&err));
                Err(err)
            }
        }
    }

    /// Fetches the list. Only the latest in-flight refresh is applied: a
    /// response that was overtaken by a newer call returns `Keep` so stale
    /// data never overwrites a fresher rendering.
    pub async fn refresh(&self) -> Result<ListUpdate, AppError> {
        let seq = self.refresh_seq.get().wrapping_add(1);
        self.refresh_seq.set(seq);

        match self.directory.list().await {
            Ok(users) => {
                if self.refresh_seq.get() == seq {
                    Ok(ListUpdate::Replace(users))
                } else {
                    Ok(ListUpdate::Keep)
                }
            }
            Err(err) => {
                leptos::logging::error!("fetching users failed: {err}");
                self.notifier.notify(NoticeKind::Error, "Error fetching users");
                Err(err)
            }
        }
    }
}

/// Maps a failed create to its user-facing message: the API's own message
/// when it sent one, a generic save error for other non-2xx responses, and a
/// connectivity message for everything that never produced a response.
fn save_error_message(err: &AppError) -> String {
    match err {
        AppError::Http {
            message: Some(message),
            ..
        } => message.clone(),
        AppError::Http { message: None, .. } => "Error saving user".to_string(),
        _ => "Error connecting to server".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<(NoticeKind, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices.borrow_mut().push((kind, message.to_string()));
        }
    }

    enum ListReply {
        Ready(Result<Vec<UserRecord>, AppError>),
        Pending(oneshot::Receiver<Result<Vec<UserRecord>, AppError>>),
    }

    #[derive(Default)]
    struct ScriptedDirectory {
        create_calls: Cell<usize>,
        list_calls: Cell<usize>,
        create_results: RefCell<VecDeque<Result<(), AppError>>>,
        list_results: RefCell<VecDeque<ListReply>>,
    }

    #[async_trait(?Send)]
    impl UserDirectory for ScriptedDirectory {
        async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
            self.list_calls.set(self.list_calls.get() + 1);
            let reply = self
                .list_results
                .borrow_mut()
                .pop_front()
                .expect("unexpected list call");
            match reply {
                ListReply::Ready(result) => result,
                ListReply::Pending(receiver) => receiver.await.expect("list reply dropped"),
            }
        }

        async fn create(&self, _user: &UserRecord) -> Result<(), AppError> {
            self.create_calls.set(self.create_calls.get() + 1);
            self.create_results
                .borrow_mut()
                .pop_front()
                .expect("unexpected create call")
        }
    }

    fn user(name: &str, email: &str) -> UserRecord {
        UserRecord {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn form() -> UserForm<ScriptedDirectory, RecordingNotifier> {
        UserForm::new(ScriptedDirectory::default(), RecordingNotifier::default())
    }

    #[test]
    fn submit_rejects_invalid_email_without_network_calls() {
        let form = form();

        let result = block_on(form.submit("Ada", "not-an-email"));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(form.directory.create_calls.get(), 0);
        assert_eq!(form.directory.list_calls.get(), 0);
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![(
                NoticeKind::Error,
                "Please enter a valid email address".to_string()
            )]
        );
    }

    #[test]
    fn submit_rejects_blank_fields_without_network_calls() {
        let form = form();

        assert!(block_on(form.submit("   ", "ada@example.com")).is_err());
        assert!(block_on(form.submit("Ada", "   ")).is_err());

        assert_eq!(form.directory.create_calls.get(), 0);
        assert_eq!(form.directory.list_calls.get(), 0);
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![
                (NoticeKind::Error, "Please fill in all fields".to_string()),
                (NoticeKind::Error, "Please fill in all fields".to_string()),
            ]
        );
    }

    #[test]
    fn submit_success_notifies_and_refreshes_once() {
        let form = form();
        form.directory.create_results.borrow_mut().push_back(Ok(()));
        form.directory
            .list_results
            .borrow_mut()
            .push_back(ListReply::Ready(Ok(vec![user("Ada", "ada@example.com")])));

        let result = block_on(form.submit("Ada", "ada@example.com"));

        assert_eq!(
            result.expect("submit should succeed"),
            ListUpdate::Replace(vec![user("Ada", "ada@example.com")])
        );
        assert_eq!(form.directory.create_calls.get(), 1);
        assert_eq!(form.directory.list_calls.get(), 1);
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![(NoticeKind::Success, "User saved successfully".to_string())]
        );
    }

    #[test]
    fn submit_surfaces_api_error_message() {
        let form = form();
        form.directory
            .create_results
            .borrow_mut()
            .push_back(Err(AppError::Http {
                status: 400,
                message: Some("Email already exists".to_string()),
            }));

        let result = block_on(form.submit("Ada", "ada@example.com"));

        assert!(matches!(result, Err(AppError::Http { status: 400, .. })));
        assert_eq!(form.directory.list_calls.get(), 0);
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![(NoticeKind::Error, "Email already exists".to_string())]
        );
    }

    #[test]
    fn submit_falls_back_to_generic_save_error() {
        let form = form();
        form.directory
            .create_results
            .borrow_mut()
            .push_back(Err(AppError::Http {
                status: 500,
                message: None,
            }));

        assert!(block_on(form.submit("Ada", "ada@example.com")).is_err());
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![(NoticeKind::Error, "Error saving user".to_string())]
        );
    }

    #[test]
    fn submit_reports_transport_failure() {
        let form = form();
        form.directory
            .create_results
            .borrow_mut()
            .push_back(Err(AppError::Network("connection refused".to_string())));

        assert!(block_on(form.submit("Ada", "ada@example.com")).is_err());
        assert_eq!(form.directory.list_calls.get(), 0);
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![(NoticeKind::Error, "Error connecting to server".to_string())]
        );
    }

    #[test]
    fn submit_still_saves_when_chained_refresh_fails() {
        let form = form();
        form.directory.create_results.borrow_mut().push_back(Ok(()));
        form.directory
            .list_results
            .borrow_mut()
            .push_back(ListReply::Ready(Err(AppError::Network(
                "connection reset".to_string(),
            ))));

        let result = block_on(form.submit("Ada", "ada@example.com"));

        assert_eq!(result.expect("save itself succeeded"), ListUpdate::Keep);
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![
                (NoticeKind::Success, "User saved successfully".to_string()),
                (NoticeKind::Error, "Error fetching users".to_string()),
            ]
        );
    }

    #[test]
    fn refresh_replaces_list_in_response_order() {
        let form = form();
        form.directory
            .list_results
            .borrow_mut()
            .push_back(ListReply::Ready(Ok(vec![
                user("Ada", "ada@example.com"),
                user("Grace", "grace@example.com"),
            ])));

        let result = block_on(form.refresh());

        assert_eq!(
            result.expect("refresh should succeed"),
            ListUpdate::Replace(vec![
                user("Ada", "ada@example.com"),
                user("Grace", "grace@example.com"),
            ])
        );
    }

    #[test]
    fn refresh_failure_notifies_and_keeps_prior_rendering() {
        let form = form();
        form.directory
            .list_results
            .borrow_mut()
            .push_back(ListReply::Ready(Err(AppError::Http {
                status: 503,
                message: None,
            })));

        assert!(block_on(form.refresh()).is_err());
        assert_eq!(
            *form.notifier.notices.borrow(),
            vec![(NoticeKind::Error, "Error fetching users".to_string())]
        );
    }

    #[test]
    fn overtaken_refresh_is_discarded() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();

        let directory = ScriptedDirectory::default();
        directory
            .list_results
            .borrow_mut()
            .push_back(ListReply::Pending(first_rx));
        directory
            .list_results
            .borrow_mut()
            .push_back(ListReply::Pending(second_rx));

        let form = Rc::new(UserForm::new(directory, RecordingNotifier::default()));
        let first_outcome = Rc::new(RefCell::new(None));
        let second_outcome = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        spawner
            .spawn_local({
                let form = Rc::clone(&form);
                let outcome = Rc::clone(&first_outcome);
                async move {
                    *outcome.borrow_mut() = Some(form.refresh().await);
                }
            })
            .expect("spawn first refresh");
        pool.run_until_stalled();

        spawner
            .spawn_local({
                let form = Rc::clone(&form);
                let outcome = Rc::clone(&second_outcome);
                async move {
                    *outcome.borrow_mut() = Some(form.refresh().await);
                }
            })
            .expect("spawn second refresh");
        pool.run_until_stalled();

        // The newer request answers first, then the stale one arrives late.
        second_tx
            .send(Ok(vec![user("Grace", "grace@example.com")]))
            .expect("deliver second reply");
        pool.run_until_stalled();
        first_tx
            .send(Ok(vec![user("Ada", "ada@example.com")]))
            .expect("deliver first reply");
        pool.run_until_stalled();

        assert_eq!(
            second_outcome
                .borrow_mut()
                .take()
                .expect("second refresh finished")
                .expect("second refresh ok"),
            ListUpdate::Replace(vec![user("Grace", "grace@example.com")])
        );
        assert_eq!(
            first_outcome
                .borrow_mut()
                .take()
                .expect("first refresh finished")
                .expect("first refresh ok"),
            ListUpdate::Keep
        );
    }
}
