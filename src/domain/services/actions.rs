#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Assistant;
use crate::domain::models::AssistantBox;
use crate::domain::models::Event;
use crate::domain::models::UploadRequest;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /attach (/a) [PATH] - Stages an image to upload with your next message. Replaces any image already staged.
- /detach (/d) - Removes the staged image.
- /quit /exit (/q) - Exit OpsInsight.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Enter - Send your message, or dismiss an alert.
- Esc - Dismiss an alert.
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit OpsInsight. A message that is still sending is dropped.
        "#;

    return text.trim().to_string();
}

async fn send_request(
    assistant: Arc<dyn Assistant + Send + Sync>,
    request: UploadRequest,
    tx: mpsc::UnboundedSender<Event>,
) {
    tracing::debug!(
        prompt = request.prompt.as_str(),
        attachment = request.attachment.is_some(),
        "Sending message"
    );

    let res = assistant.send(request).await;
    tracing::debug!(ok = res.is_ok(), "Assistant request finished");

    if tx.send(Event::AssistantResponse(res)).is_err() {
        tracing::warn!("UI stopped listening before the assistant replied");
    }
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        assistant: AssistantBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let assistant: Arc<dyn Assistant + Send + Sync> = Arc::from(assistant);

        while let Some(action) = rx.recv().await {
            match action {
                Action::SendRequest(request) => {
                    tokio::spawn(send_request(assistant.clone(), request, tx.clone()));
                }
            }
        }

        return Ok(());
    }
}
