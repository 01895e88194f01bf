#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use super::Attachment;
use super::Sender;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    Image(Attachment),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub content: MessageContent,
}

fn wrap_line(full_line: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut char_count = 0;
    let mut current_lines: Vec<&str> = vec![];

    for word in full_line.split(' ') {
        let word_len = word.chars().count();
        if !current_lines.is_empty() && word_len + char_count > line_max_width {
            lines.push(current_lines.join(" ").trim_end().to_string());
            current_lines = vec![word];
            char_count = word_len + 1;
        } else {
            current_lines.push(word);
            char_count += word_len + 1;
        }
    }
    if !current_lines.is_empty() {
        lines.push(current_lines.join(" ").trim_end().to_string());
    }

    return lines;
}

impl Message {
    pub fn text(sender: Sender, text: &str) -> Message {
        return Message {
            sender,
            content: MessageContent::Text(text.to_string()),
        };
    }

    pub fn image(sender: Sender, attachment: Attachment) -> Message {
        return Message {
            sender,
            content: MessageContent::Image(attachment),
        };
    }

    pub fn is_image(&self) -> bool {
        return matches!(self.content, MessageContent::Image(_));
    }

    /// Text of a message as it appears in a transcript. Images render as a
    /// card describing the attached file.
    pub fn display_text(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => return text.to_string(),
            MessageContent::Image(attachment) => {
                return format!(
                    "[image] {}\n{} · {}",
                    attachment.file_name,
                    attachment.mime,
                    attachment.human_size()
                );
            }
        }
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        let text = self.display_text().replace('\t', "  ");
        for full_line in text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            lines.extend(wrap_line(full_line, line_max_width));
        }

        return lines;
    }
}
