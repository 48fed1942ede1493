//! What the attraction list does around the review dialog, kept free of any
//! view code: load the visible attractions, hand a confirmed review to the
//! API, tell the visitor how it went, and reload the list on success.
use leptos::logging::{error, log};
use crate::client::{AttractionService, HttpTransport};
use crate::error::ApiError;
use crate::models::attraction::Attraction;
use crate::review_workflow::{DialogOutcome, ReviewDialog};

pub const REVIEW_THANKS: &str = "Merci pour votre avis !";
pub const REVIEW_FAILED: &str = "Erreur lors de l'envoi de votre avis.";

/// Message shown to the visitor after a review was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(message) | Notification::Error(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

/// The attractions currently displayed. Replaced as a whole on each load.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplaySource {
    #[default]
    Pending,
    Loaded(Vec<Attraction>),
    Failed(ApiError),
}

impl DisplaySource {
    pub fn attractions(&self) -> Option<&[Attraction]> {
        match self {
            DisplaySource::Loaded(attractions) => Some(attractions),
            _ => None,
        }
    }
}

impl From<Result<Vec<Attraction>, ApiError>> for DisplaySource {
    fn from(result: Result<Vec<Attraction>, ApiError>) -> Self {
        match result {
            Ok(attractions) => DisplaySource::Loaded(attractions),
            Err(err) => DisplaySource::Failed(err),
        }
    }
}

/// Sends the review carried by `outcome`, if any.
///
/// Returns `None` when the dialog was cancelled: nothing is sent and the
/// visitor is not notified.
pub async fn deliver_review<T: HttpTransport>(
    service: &AttractionService<T>,
    outcome: DialogOutcome,
) -> Option<Notification> {
    let submission = outcome.into_submission()?;
    match service.post_critique(&submission).await {
        Ok(message) => {
            log!(
                "[BOARD] Review stored for attraction {}: {}",
                submission.attraction_id,
                message.message
            );
            Some(Notification::Success(REVIEW_THANKS.to_string()))
        }
        Err(err) => {
            error!("[BOARD] Error sending review: {}", err);
            Some(Notification::Error(REVIEW_FAILED.to_string()))
        }
    }
}

/// The attraction list and its review flow, minus rendering.
pub struct AttractionBoard<T> {
    service: AttractionService<T>,
    source: DisplaySource,
    notification: Option<Notification>,
}

impl<T: HttpTransport> AttractionBoard<T> {
    pub fn new(service: AttractionService<T>) -> Self {
        Self {
            service,
            source: DisplaySource::Pending,
            notification: None,
        }
    }

    /// Creates the board and performs the initial load.
    pub async fn init(service: AttractionService<T>) -> Self {
        let mut board = Self::new(service);
        board.reload().await;
        board
    }

    pub async fn reload(&mut self) {
        self.source = DisplaySource::Pending;
        let result = self.service.get_visible_attractions_with_critiques().await;
        if let Ok(attractions) = &result {
            log!("[BOARD] Loaded {} visible attractions", attractions.len());
        }
        self.source = result.into();
    }

    pub fn source(&self) -> &DisplaySource {
        &self.source
    }

    /// The outcome of the last delivered review. A newer one replaces it.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn open_review(&self, attraction: &Attraction) -> ReviewDialog {
        ReviewDialog::open(attraction.attraction_id)
    }

    /// Handles a closed dialog. The list is reloaded only after the API
    /// accepted the review; on failure the current list stays as it is.
    pub async fn close_review(&mut self, outcome: DialogOutcome) -> Option<&Notification> {
        let notification = deliver_review(&self.service, outcome).await?;
        let refresh = notification.is_success();
        self.notification = Some(notification);
        if refresh {
            self.reload().await;
        }
        self.notification.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::scripted::ScriptedTransport;
    use crate::config::ApiConfig;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    fn attractions_json(review_count: usize) -> Value {
        let critiques: Vec<Value> = (0..review_count)
            .map(|i| {
                json!({
                    "critique_id": i + 1,
                    "attraction_id": 7,
                    "nom": "Dupont",
                    "prenom": "Jean",
                    "note": 4,
                    "commentaire": "Great ride",
                    "est_anonyme": 0
                })
            })
            .collect();
        json!([{
            "attraction_id": 7,
            "nom": "Space Mountain",
            "description": "Voyage dans les étoiles",
            "difficulte": 4,
            "visible": 1,
            "critiques": critiques
        }])
    }

    fn board(transport: &ScriptedTransport) -> AttractionBoard<ScriptedTransport> {
        let service = AttractionService::new(transport.clone(), ApiConfig::default());
        block_on(AttractionBoard::init(service))
    }

    fn confirmed_dialog(board: &AttractionBoard<ScriptedTransport>) -> DialogOutcome {
        let attraction = board.source().attractions().unwrap()[0].clone();
        let mut dialog = board.open_review(&attraction);
        let draft = dialog.draft_mut();
        draft.set_last_name("Dupont");
        draft.set_first_name("Jean");
        draft.set_rating(4);
        draft.set_comment("Great ride");
        dialog.confirm().unwrap()
    }

    #[test]
    fn test_init_loads_visible_attractions() {
        let transport = ScriptedTransport::default();
        transport.respond(Ok(attractions_json(0)));

        let board = board(&transport);

        assert_eq!(board.source().attractions().unwrap().len(), 1);
        assert_eq!(transport.calls()[0].url, "/api/attraction/visible/critiques");
    }

    #[test]
    fn test_cancel_sends_nothing() {
        let transport = ScriptedTransport::default();
        transport.respond(Ok(attractions_json(0)));
        let mut board = board(&transport);

        assert_eq!(block_on(board.close_review(DialogOutcome::Cancelled)), None);
        assert_eq!(transport.calls().len(), 1);
        assert_eq!(board.notification(), None);
    }

    #[test]
    fn test_success_replaces_source_with_refetched_list() {
        let transport = ScriptedTransport::default();
        transport
            .respond(Ok(attractions_json(0)))
            .respond(Ok(json!({"message": "Critique ajoutée", "critique_id": 1})))
            .respond(Ok(attractions_json(2)));
        let mut board = board(&transport);
        let outcome = confirmed_dialog(&board);

        let notification = block_on(board.close_review(outcome)).cloned();

        assert_eq!(notification, Some(Notification::Success(REVIEW_THANKS.into())));
        // The server's list holds two reviews; a local merge would show one.
        assert_eq!(board.source().attractions().unwrap()[0].reviews().len(), 2);
        let calls = transport.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1].method, "POST");
        assert_eq!(calls[2].url, "/api/attraction/visible/critiques");
    }

    #[test]
    fn test_failure_keeps_previous_source() {
        let transport = ScriptedTransport::default();
        transport
            .respond(Ok(attractions_json(1)))
            .respond(Err(ApiError::Transport("network down".into())));
        let mut board = board(&transport);
        let before = board.source().clone();
        let outcome = confirmed_dialog(&board);

        let notification = block_on(board.close_review(outcome)).cloned();

        assert_eq!(notification, Some(Notification::Error(REVIEW_FAILED.into())));
        assert_eq!(board.source(), &before);
        assert_eq!(transport.calls().len(), 2);
    }

    #[test]
    fn test_latest_notification_replaces_previous() {
        let transport = ScriptedTransport::default();
        transport
            .respond(Ok(attractions_json(0)))
            .respond(Err(ApiError::Transport("network down".into())))
            .respond(Ok(json!({"message": "Critique ajoutée", "critique_id": 1})))
            .respond(Ok(attractions_json(1)));
        let mut board = board(&transport);

        let outcome = confirmed_dialog(&board);
        block_on(board.close_review(outcome));
        assert_eq!(board.notification(), Some(&Notification::Error(REVIEW_FAILED.into())));

        let outcome = confirmed_dialog(&board);
        block_on(board.close_review(outcome));
        assert_eq!(board.notification(), Some(&Notification::Success(REVIEW_THANKS.into())));
    }

    #[test]
    fn test_failed_load_is_kept_as_source() {
        let transport = ScriptedTransport::default();
        transport.respond(Err(ApiError::Status {
            status: 502,
            body: String::new(),
        }));

        let board = board(&transport);

        assert!(matches!(board.source(), DisplaySource::Failed(_)));
        assert_eq!(board.source().attractions(), None);
    }
}
