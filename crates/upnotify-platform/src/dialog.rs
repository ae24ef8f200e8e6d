use async_trait::async_trait;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    None,
    #[default]
    Info,
    Error,
    Question,
    Warning,
}

/// A native modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    pub title: String,
    pub kind: DialogKind,
    pub message: String,
    pub detail: String,
    pub buttons: Vec<String>,
    pub default_id: usize,
    pub cancel_id: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("message box needs between one and two buttons, got {count}")]
    UnsupportedButtons { count: usize },
    #[error("dialog failed: {0}")]
    Failed(String),
}

/// Presents modal message boxes and reports the chosen button index.
#[async_trait]
pub trait DialogPresenter: Send + Sync {
    async fn show_message_box(&self, message_box: MessageBox) -> Result<usize, DialogError>;
}

/// Native dialogs backed by `rfd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

#[async_trait]
impl DialogPresenter for NativeDialogs {
    async fn show_message_box(&self, message_box: MessageBox) -> Result<usize, DialogError> {
        let buttons = match message_box.buttons.as_slice() {
            [ok] => MessageButtons::OkCustom(ok.clone()),
            [ok, cancel] => MessageButtons::OkCancelCustom(ok.clone(), cancel.clone()),
            other => {
                return Err(DialogError::UnsupportedButtons { count: other.len() });
            }
        };

        let description = if message_box.detail.is_empty() {
            message_box.message.clone()
        } else {
            format!("{}\n\n{}", message_box.message, message_box.detail)
        };

        let result = AsyncMessageDialog::new()
            .set_title(message_box.title.as_str())
            .set_description(description)
            .set_level(message_level(message_box.kind))
            .set_buttons(buttons)
            .show()
            .await;

        Ok(response_index(&message_box, &result))
    }
}

fn message_level(kind: DialogKind) -> MessageLevel {
    match kind {
        DialogKind::Error => MessageLevel::Error,
        DialogKind::Warning => MessageLevel::Warning,
        DialogKind::None | DialogKind::Info | DialogKind::Question => MessageLevel::Info,
    }
}

fn response_index(message_box: &MessageBox, result: &MessageDialogResult) -> usize {
    match result {
        MessageDialogResult::Ok | MessageDialogResult::Yes => 0,
        MessageDialogResult::Custom(label) => message_box
            .buttons
            .iter()
            .position(|button| button == label)
            .unwrap_or(message_box.cancel_id),
        MessageDialogResult::Cancel | MessageDialogResult::No => message_box.cancel_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_box() -> MessageBox {
        MessageBox {
            title: "Demo".to_string(),
            kind: DialogKind::Info,
            message: "A new version is available".to_string(),
            detail: String::new(),
            buttons: vec!["Download".to_string(), "Later".to_string()],
            default_id: 0,
            cancel_id: 1,
        }
    }

    #[test]
    fn custom_results_map_to_button_positions() {
        let message_box = update_box();
        assert_eq!(
            response_index(&message_box, &MessageDialogResult::Custom("Download".into())),
            0
        );
        assert_eq!(
            response_index(&message_box, &MessageDialogResult::Custom("Later".into())),
            1
        );
        assert_eq!(
            response_index(&message_box, &MessageDialogResult::Custom("Other".into())),
            1
        );
    }

    #[test]
    fn builtin_results_map_to_default_and_cancel() {
        let message_box = update_box();
        assert_eq!(response_index(&message_box, &MessageDialogResult::Ok), 0);
        assert_eq!(response_index(&message_box, &MessageDialogResult::Cancel), 1);
    }

    #[test]
    fn dialog_kinds_map_to_levels() {
        assert!(matches!(message_level(DialogKind::Error), MessageLevel::Error));
        assert!(matches!(
            message_level(DialogKind::Warning),
            MessageLevel::Warning
        ));
        assert!(matches!(message_level(DialogKind::Question), MessageLevel::Info));
    }

    #[tokio::test]
    async fn native_dialogs_reject_unsupported_button_counts() {
        let mut message_box = update_box();
        message_box.buttons.clear();

        let result = NativeDialogs.show_message_box(message_box).await;

        assert_eq!(result, Err(DialogError::UnsupportedButtons { count: 0 }));
    }
}
