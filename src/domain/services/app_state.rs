#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;

use super::actions::help_text;
use super::BubbleList;
use super::Scroll;
use crate::domain::models::Attachment;
use crate::domain::models::Message;
use crate::domain::models::Sender;
use crate::domain::models::SlashCommand;
use crate::domain::models::UploadRequest;

pub const SEND_FAILED_ALERT: &str = "Failed to send message. Please try again.";

/// Everything the chat screen shows. The UI loop owns the only instance and
/// every mutation goes through it, so no locking is involved.
#[derive(Default)]
pub struct AppState {
    pub alert: Option<String>,
    pub bubble_list: BubbleList,
    pub in_flight: bool,
    in_flight_request: Option<UploadRequest>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub messages: Vec<Message>,
    pub pending_attachment: Option<Attachment>,
    pub pending_text: String,
    pub scroll: Scroll,
}

impl AppState {
    pub fn set_pending_text(&mut self, text: &str) {
        self.pending_text = text.to_string();
    }

    pub fn set_pending_attachment(&mut self, attachment: Attachment) {
        self.pending_attachment = Some(attachment);
    }

    pub fn clear_pending_attachment(&mut self) {
        self.pending_attachment = None;
    }

    /// Loads an image into the pending slot, replacing any previous one.
    /// Failures are reported through an alert and leave the slot untouched.
    pub async fn attach(&mut self, path: &str) {
        if path.trim().is_empty() {
            self.show_alert("Provide a path to an image, for example `/attach ./dashboard.png`.");
            return;
        }

        match Attachment::from_path(path).await {
            Ok(attachment) => self.set_pending_attachment(attachment),
            Err(err) => {
                tracing::warn!(error = ?err, path, "Failed to attach image");
                self.show_alert(&format!("Unable to attach image. {err}"));
            }
        }
    }

    /// Whether the send trigger is enabled.
    pub fn can_send(&self) -> bool {
        return !self.pending_text.trim().is_empty() && !self.in_flight;
    }

    /// Whether typing reaches the input row.
    pub fn accepts_input(&self) -> bool {
        return !self.in_flight && self.alert.is_none();
    }

    /// Starts a send. Blank input is a no-op. The in-flight flag is not
    /// checked here: callers gate on `can_send`.
    pub fn begin_send(&mut self) -> Option<UploadRequest> {
        if self.pending_text.trim().is_empty() {
            return None;
        }

        self.in_flight = true;

        let request = UploadRequest::new(&self.pending_text, self.pending_attachment.clone());
        self.in_flight_request = Some(request.clone());

        return Some(request);
    }

    /// Reduces the outcome of a send into the transcript. The user entries
    /// come from the request captured by `begin_send`. The in-flight flag is
    /// released regardless of the outcome.
    pub fn complete_send(&mut self, res: Result<String>) {
        self.in_flight = false;
        let request = self.in_flight_request.take().unwrap_or_else(|| {
            return UploadRequest::new(&self.pending_text, self.pending_attachment.clone());
        });

        match res {
            Ok(reply) => {
                self.messages
                    .push(Message::text(Sender::User, &request.prompt));
                if let Some(attachment) = request.attachment {
                    self.messages.push(Message::image(Sender::User, attachment));
                }
                self.messages.push(Message::text(Sender::Bot, &reply));

                self.pending_text = "".to_string();
                self.pending_attachment = None;
                self.sync_dependants();
                self.scroll.last();
            }
            Err(err) => {
                tracing::error!(error = ?err, "Error sending message");
                self.show_alert(SEND_FAILED_ALERT);
            }
        }
    }

    pub fn show_alert(&mut self, text: &str) {
        self.alert = Some(text.to_string());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Runs local commands typed into the input row. Returns
    /// `(should_break, handled)`; handled input is never sent.
    pub async fn handle_slash_commands(&mut self, input_str: &str) -> (bool, bool) {
        if let Some(command) = SlashCommand::parse(input_str) {
            if command.is_quit() {
                return (true, true);
            }

            if command.is_attach() {
                self.attach(&command.argument()).await;
                return (false, true);
            }

            if command.is_detach() {
                self.clear_pending_attachment();
                return (false, true);
            }

            if command.is_help() {
                self.show_alert(&help_text());
                return (false, true);
            }
        }

        return (false, false);
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width.into());

        self.scroll.set_state(
            u16::try_from(self.bubble_list.len()).unwrap_or(u16::MAX),
            self.last_known_height,
        );
    }
}
