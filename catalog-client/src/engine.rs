//! Synchronization engine
//!
//! The four network operations and the state transitions around them:
//! create, list, update, delete against the catalog API, reconciling the
//! local [`Session`] with the remote collection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use shared::AiModel;

use crate::api::CatalogApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpTransport, NetworkTransport};
use crate::state::{EditDraft, FormField, ModelForm, Session, ViewMode};

/// How long the create-success banner stays up.
const SUCCESS_BANNER: Duration = Duration::from_secs(3);

/// Synchronization engine.
///
/// Owns the session state and a [`CatalogApi`] over some transport.
/// Operations take `&mut self`, so two operations on one engine cannot
/// interleave; the indicator flags are shared atomics a UI can observe
/// while a request is in flight.
pub struct SyncEngine<T> {
    api: CatalogApi<T>,
    session: Session,
    in_flight: Arc<AtomicBool>,
    success: Arc<AtomicBool>,
}

impl SyncEngine<NetworkTransport> {
    /// Engine over a network transport built from `config`.
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(config.build_transport()?))
    }
}

impl<T: HttpTransport> SyncEngine<T> {
    pub fn new(transport: T) -> Self {
        Self {
            api: CatalogApi::new(transport),
            session: Session::default(),
            in_flight: Arc::new(AtomicBool::new(false)),
            success: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle to the shared in-flight indicator (loading overlay).
    pub fn in_flight(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.in_flight)
    }

    /// Handle to the transient create-success flag.
    pub fn success(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.success)
    }

    // ========== Form and modal reducers ==========

    /// Overwrite one field of the composition form.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.session.form = self.session.form.set(field, value);
    }

    /// Overwrite one field of the open edit draft. No-op when no draft
    /// is open.
    pub fn set_edit_field(&mut self, field: FormField, value: impl Into<String>) {
        if let Some(draft) = self.session.edit.take() {
            self.session.edit = Some(draft.set(field, value));
        }
    }

    /// Open the edit modal over the collection entry at `index`.
    pub fn open_edit(&mut self, index: usize) {
        if let Some(model) = self.session.collection.get(index) {
            self.session.edit = Some(EditDraft::from_model(model));
        }
    }

    /// Close the edit modal, discarding the draft.
    pub fn close_edit(&mut self) {
        self.session.edit = None;
    }

    /// Return from the listing to the submission form.
    pub fn show_form(&mut self) {
        self.session.view = ViewMode::Compose;
    }

    /// Clear the pending alert once the user has dismissed it.
    pub fn dismiss_alert(&mut self) {
        self.session.alert = None;
    }

    // ========== Sync operations ==========

    /// Submit the composed draft as a new catalog entry.
    ///
    /// On success the form resets to empty and the success flag is raised
    /// for three seconds. On failure the form is left exactly as typed,
    /// so resubmission is possible, and the error text becomes the
    /// pending alert.
    pub async fn submit_create(&mut self) -> ClientResult<AiModel> {
        let payload = self.session.form.to_payload();

        self.in_flight.store(true, Ordering::SeqCst);
        let result = self.api.create_model(&payload).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(model) => {
                self.session.form = ModelForm::default();
                self.raise_success_banner();
                Ok(model)
            }
            Err(err) => {
                tracing::error!("Post failed: {err}");
                self.session.alert = Some(format!("Submission failed: {err}"));
                Err(err)
            }
        }
    }

    /// Refresh the collection snapshot from the server and switch to the
    /// listing view.
    ///
    /// Failures are logged and leave the current snapshot untouched; no
    /// user-facing alert is raised.
    pub async fn fetch_all(&mut self) -> ClientResult<()> {
        self.in_flight.store(true, Ordering::SeqCst);
        let result = self.api.list_models().await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(models) => {
                self.session.collection = models;
                self.session.view = ViewMode::List;
                Ok(())
            }
            Err(err) => {
                tracing::error!("Fetch failed: {err}");
                Err(err)
            }
        }
    }

    /// Save the open edit draft back to the server.
    ///
    /// The draft must carry a server id; the request is not issued
    /// without one. Success closes the modal and resynchronizes the
    /// listing; failure keeps the modal open and raises an alert.
    pub async fn submit_update(&mut self) -> ClientResult<AiModel> {
        let Some(draft) = self.session.edit.clone() else {
            return Err(ClientError::MissingId);
        };
        let id = draft.id.clone().ok_or(ClientError::MissingId)?;
        let payload = draft.to_payload();

        self.in_flight.store(true, Ordering::SeqCst);
        let result = self.api.update_model(&id, &payload).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(model) => {
                self.session.edit = None;
                // Refetch has its own error handling; an update that
                // reached the server stays a success
                let _ = self.fetch_all().await;
                Ok(model)
            }
            Err(err) => {
                tracing::error!("Update failed: {err}");
                self.session.alert = Some(format!("Update failed: {err}"));
                Err(err)
            }
        }
    }

    /// Delete a record, then resynchronize the listing.
    ///
    /// Exactly one refetch follows the delete whatever its HTTP status;
    /// only a transport-level failure skips it.
    pub async fn delete_by_id(&mut self, id: &str) -> ClientResult<()> {
        self.in_flight.store(true, Ordering::SeqCst);
        let result = self.api.delete_model(id).await;

        let outcome = match result {
            Ok(()) => {
                let _ = self.fetch_all().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!("Delete failed: {err}");
                Err(err)
            }
        };
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    /// Raise the transient success flag and spawn its auto-clear timer.
    fn raise_success_banner(&self) {
        self.success.store(true, Ordering::SeqCst);
        let success = Arc::clone(&self.success);
        tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_BANNER).await;
            success.store(false, Ordering::SeqCst);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use shared::TagList;

    /// Transport for reducer tests; any network use is a test bug.
    struct UnreachableTransport;

    #[async_trait]
    impl HttpTransport for UnreachableTransport {
        async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            panic!("unexpected GET {path}");
        }

        async fn post<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            panic!("unexpected POST {path}");
        }

        async fn put<T: DeserializeOwned, B: Serialize + Sync>(
            &self,
            path: &str,
            _body: &B,
        ) -> ClientResult<T> {
            panic!("unexpected PUT {path}");
        }

        async fn delete(&self, path: &str) -> ClientResult<()> {
            panic!("unexpected DELETE {path}");
        }
    }

    fn engine_with_one_record() -> SyncEngine<UnreachableTransport> {
        let mut engine = SyncEngine::new(UnreachableTransport);
        engine.session.collection = vec![AiModel {
            id: Some("65f0".to_string()),
            name: "Foo".to_string(),
            image: String::new(),
            developer: String::new(),
            description: String::new(),
            category: String::new(),
            tags: TagList::Parsed(vec!["a".to_string()]),
            website_link: String::new(),
            rating: 4.0,
            number_of_reviews: String::new(),
            user_clicks: String::new(),
            installs: String::new(),
        }];
        engine
    }

    #[test]
    fn test_open_edit_copies_record() {
        let mut engine = engine_with_one_record();
        engine.open_edit(0);

        let draft = engine.session().edit.as_ref().unwrap();
        assert_eq!(draft.name, "Foo");
        assert_eq!(draft.id.as_deref(), Some("65f0"));

        // Editing the draft leaves the collection untouched
        engine.set_edit_field(FormField::Name, "Bar");
        assert_eq!(engine.session().collection[0].name, "Foo");
        assert_eq!(engine.session().edit.as_ref().unwrap().name, "Bar");
    }

    #[test]
    fn test_open_edit_out_of_range_is_noop() {
        let mut engine = engine_with_one_record();
        engine.open_edit(5);
        assert!(engine.session().edit.is_none());
    }

    #[test]
    fn test_close_edit_discards_draft() {
        let mut engine = engine_with_one_record();
        engine.open_edit(0);
        engine.close_edit();
        assert!(engine.session().edit.is_none());
    }

    #[test]
    fn test_show_form_switches_view() {
        let mut engine = engine_with_one_record();
        engine.session.view = ViewMode::List;
        engine.show_form();
        assert_eq!(engine.session().view, ViewMode::Compose);
    }

    #[tokio::test]
    async fn test_update_without_draft_fails_before_any_request() {
        let mut engine = SyncEngine::new(UnreachableTransport);
        let err = engine.submit_update().await.unwrap_err();
        assert!(matches!(err, ClientError::MissingId));
    }
}
