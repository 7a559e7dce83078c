use super::aggregate::{InventoryItemDto, InventoryItemForm, MessageResponse};
use super::gateway::ApiError;
use super::table::WriteOutcome;
use crate::shared::notification::Notification;

pub const MSG_CREATED: &str = "Form submitted successfully!";
pub const MSG_CREATE_FAILED: &str = "Something went wrong!";
pub const MSG_CREATE_UNREACHABLE: &str = "Failed to submit form. Please try again.";
pub const MSG_CREATE_CANCELLED: &str = "You have cancelled the submission";

/// State of the "new stock item" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateFormState {
    pub form: InventoryItemForm,
    submitting: bool,
}

impl CreateFormState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validation before the confirmation prompt
    pub fn check(&self) -> Result<InventoryItemDto, Notification> {
        self.form
            .validate()
            .map_err(|e| Notification::error(e.to_string()))
    }

    /// Confirmed submit. `Ok(None)` when a submit is already outstanding.
    pub fn begin_submit(&mut self) -> Result<Option<InventoryItemDto>, Notification> {
        if self.submitting {
            return Ok(None);
        }
        let dto = self.check()?;
        self.submitting = true;
        Ok(Some(dto))
    }

    /// Success clears the form and asks the table to refetch
    pub fn complete_submit(&mut self, result: Result<MessageResponse, ApiError>) -> WriteOutcome {
        self.submitting = false;

        match result {
            Ok(response) => {
                self.form = InventoryItemForm::default();
                let detail = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MSG_CREATED.to_string());
                log::info!("stock item created");
                WriteOutcome {
                    notification: Notification::success(detail),
                    refresh: true,
                }
            }
            Err(e) => {
                log::warn!("Error creating stock item: {}", e);
                let fallback = if e.is_network() {
                    MSG_CREATE_UNREACHABLE
                } else {
                    MSG_CREATE_FAILED
                };
                WriteOutcome {
                    notification: Notification::error(e.user_message(fallback)),
                    refresh: false,
                }
            }
        }
    }

    pub fn submit_cancelled() -> Notification {
        Notification::warning("Cancelled", MSG_CREATE_CANCELLED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::NotificationKind;

    fn filled() -> CreateFormState {
        CreateFormState {
            form: InventoryItemForm {
                item_code: "P-7".into(),
                item_name: "Pencil".into(),
                category: "Stationaries".into(),
                quantity: "12".into(),
                rate: "4".into(),
                location: "Malappuram".into(),
            },
            submitting: false,
        }
    }

    #[test]
    fn test_success_resets_form() {
        let mut state = filled();
        let dto = state.begin_submit().unwrap().unwrap();
        assert_eq!(dto.item_name, "Pencil");
        assert!(state.is_submitting());

        let outcome = state.complete_submit(Ok(MessageResponse {
            message: Some("Invoice created".into()),
        }));
        assert!(outcome.refresh);
        assert_eq!(outcome.notification.detail, "Invoice created");
        assert_eq!(state.form, InventoryItemForm::default());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_success_without_message() {
        let mut state = filled();
        state.begin_submit().unwrap();
        let outcome = state.complete_submit(Ok(MessageResponse::default()));
        assert_eq!(outcome.notification.detail, MSG_CREATED);
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut state = filled();
        assert!(state.begin_submit().unwrap().is_some());
        assert_eq!(state.begin_submit(), Ok(None));
    }

    #[test]
    fn test_failures_keep_form() {
        let mut state = filled();
        state.begin_submit().unwrap();
        let outcome = state.complete_submit(Err(ApiError::Status {
            status: 409,
            message: Some("Duplicate item code".into()),
        }));
        assert_eq!(outcome.notification.kind, NotificationKind::Error);
        assert_eq!(outcome.notification.detail, "Duplicate item code");
        assert_eq!(state.form.item_code, "P-7");

        state.begin_submit().unwrap();
        let outcome = state.complete_submit(Err(ApiError::Status {
            status: 500,
            message: None,
        }));
        assert_eq!(outcome.notification.detail, MSG_CREATE_FAILED);

        state.begin_submit().unwrap();
        let outcome = state.complete_submit(Err(ApiError::Network("refused".into())));
        assert_eq!(outcome.notification.detail, MSG_CREATE_UNREACHABLE);
        assert!(!outcome.refresh);
    }

    #[test]
    fn test_invalid_form_is_not_submitted() {
        let mut state = filled();
        state.form.location.clear();
        let err = state.begin_submit().unwrap_err();
        assert_eq!(err.detail, "Location is required");
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_cancelled_is_warning() {
        assert_eq!(
            CreateFormState::submit_cancelled().kind,
            NotificationKind::Warning
        );
    }
}
