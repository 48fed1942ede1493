//! The review form without any UI: draft fields, their validity, the
//! anonymity rule that locks the name fields, and the open/confirm/cancel
//! lifecycle of the dialog holding the draft.
use leptos::logging::log;
use crate::models::review::{is_valid_rating, ReviewSubmission, ANONYMOUS_LAST_NAME};

/// Whether the name fields are editable or held by the anonymity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityMode {
    #[default]
    Interactive,
    Anonymized,
}

/// Name fields of a draft together with the mode that governs them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub mode: IdentityMode,
    pub last_name: String,
    pub first_name: String,
}

impl Identity {
    /// Applies a write of the anonymity flag.
    ///
    /// Entering anonymous mode overwrites both names. Leaving it clears the
    /// last name only if it still holds the sentinel. Writing the flag the
    /// identity already reflects returns it untouched.
    pub fn transition(self, anonymous: bool) -> Identity {
        match (self.mode, anonymous) {
            (IdentityMode::Interactive, true) => Identity {
                mode: IdentityMode::Anonymized,
                last_name: ANONYMOUS_LAST_NAME.to_string(),
                first_name: String::new(),
            },
            (IdentityMode::Anonymized, false) => {
                let last_name = if self.last_name == ANONYMOUS_LAST_NAME {
                    String::new()
                } else {
                    self.last_name
                };
                Identity {
                    mode: IdentityMode::Interactive,
                    last_name,
                    first_name: self.first_name,
                }
            }
            _ => self,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.mode == IdentityMode::Anonymized
    }

    /// Disabled fields take no edits and are skipped by validation, but
    /// their values still go into the submission.
    pub fn is_locked(&self) -> bool {
        self.is_anonymous()
    }
}

/// Per-field validity of a draft. Disabled fields always count as valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftValidity {
    pub last_name: bool,
    pub first_name: bool,
    pub rating: bool,
    pub comment: bool,
}

impl DraftValidity {
    pub fn is_valid(&self) -> bool {
        self.last_name && self.first_name && self.rating && self.comment
    }
}

/// The fields of a review being written. Which attraction it is about is
/// held by the [`ReviewDialog`] it lives in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewDraft {
    identity: Identity,
    rating: Option<u8>,
    comment: String,
}

impl ReviewDraft {
    pub fn last_name(&self) -> &str {
        &self.identity.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.identity.first_name
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_anonymous(&self) -> bool {
        self.identity.is_anonymous()
    }

    pub fn names_locked(&self) -> bool {
        self.identity.is_locked()
    }

    /// Returns `false` when the field is disabled and the edit was dropped.
    pub fn set_last_name(&mut self, value: impl Into<String>) -> bool {
        if self.names_locked() {
            return false;
        }
        self.identity.last_name = value.into();
        true
    }

    /// Returns `false` when the field is disabled and the edit was dropped.
    pub fn set_first_name(&mut self, value: impl Into<String>) -> bool {
        if self.names_locked() {
            return false;
        }
        self.identity.first_name = value.into();
        true
    }

    pub fn set_comment(&mut self, value: impl Into<String>) {
        self.comment = value.into();
    }

    /// Sets the rating as picked on the 1-5 star control. Range is checked
    /// by [`ReviewDraft::validity`], not here.
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = Some(rating);
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.identity = std::mem::take(&mut self.identity).transition(anonymous);
    }

    pub fn validity(&self) -> DraftValidity {
        let locked = self.names_locked();
        DraftValidity {
            last_name: locked || !self.identity.last_name.is_empty(),
            first_name: locked || !self.identity.first_name.is_empty(),
            rating: self.rating.is_some_and(is_valid_rating),
            comment: !self.comment.is_empty(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity().is_valid()
    }

    /// Raw values of every field, disabled ones included, or `None` while
    /// the draft is invalid.
    pub fn to_submission(&self, attraction_id: i64) -> Option<ReviewSubmission> {
        let rating = self.rating.filter(|_| self.is_valid())?;
        Some(ReviewSubmission {
            attraction_id,
            last_name: self.identity.last_name.clone(),
            first_name: self.identity.first_name.clone(),
            rating,
            comment: self.comment.clone(),
            is_anonymous: self.is_anonymous(),
        })
    }
}

/// How a review dialog was closed.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Cancelled,
    Submitted(ReviewSubmission),
}

impl DialogOutcome {
    pub fn into_submission(self) -> Option<ReviewSubmission> {
        match self {
            DialogOutcome::Cancelled => None,
            DialogOutcome::Submitted(submission) => Some(submission),
        }
    }
}

/// The modal holding a draft, opened for one attraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDialog {
    attraction_id: i64,
    draft: ReviewDraft,
    open: bool,
}

impl ReviewDialog {
    pub fn open(attraction_id: i64) -> Self {
        log!("[DIALOG] Opening review dialog for attraction {}", attraction_id);
        Self {
            attraction_id,
            draft: ReviewDraft::default(),
            open: true,
        }
    }

    pub fn attraction_id(&self) -> i64 {
        self.attraction_id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ReviewDraft {
        &mut self.draft
    }

    /// Closes with the submission if the draft is valid. An invalid draft
    /// leaves the dialog open and yields nothing.
    pub fn confirm(&mut self) -> Option<DialogOutcome> {
        if !self.open {
            return None;
        }
        match self.draft.to_submission(self.attraction_id) {
            Some(submission) => {
                self.open = false;
                log!(
                    "[DIALOG] Review confirmed for attraction {}",
                    submission.attraction_id
                );
                Some(DialogOutcome::Submitted(submission))
            }
            None => {
                log!("[DIALOG] Confirm ignored, draft invalid: {:?}", self.draft.validity());
                None
            }
        }
    }

    pub fn cancel(&mut self) -> Option<DialogOutcome> {
        if !self.open {
            return None;
        }
        self.open = false;
        log!("[DIALOG] Review cancelled for attraction {}", self.attraction_id);
        Some(DialogOutcome::Cancelled)
    }
}
