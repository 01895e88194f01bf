use ratatui::prelude::Alignment;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::block::Title;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn default() -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(TextArea::block(false));

        return textarea;
    }

    /// The input row's frame. The right hand title doubles as the send
    /// trigger and is dimmed whenever sending isn't possible.
    pub fn block(can_send: bool) -> Block<'a> {
        let mut trigger_style = Style::default().fg(Color::DarkGray);
        if can_send {
            trigger_style = Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD);
        }

        return Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title("Type your message here...")
            .title(
                Title::from(Span::styled(" Send (Enter) ", trigger_style))
                    .alignment(Alignment::Right),
            )
            .padding(Padding::new(1, 1, 0, 0));
    }
}
