#[cfg(test)]
#[path = "alert_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

const DISMISS_HINT: &str = "Press Enter or Esc to dismiss.";

/// Modal notice drawn over the whole UI. While one is showing, the input
/// row ignores everything but dismiss and quit.
pub struct Alert<'a> {
    text: &'a str,
}

impl<'a> Alert<'a> {
    pub fn new(text: &'a str) -> Alert<'a> {
        return Alert { text };
    }

    fn body(&self) -> String {
        return format!("{}\n\n{DISMISS_HINT}", self.text);
    }

    /// Popup size for the given screen, wrapping lines at the popup's inner
    /// width (borders and padding take four columns).
    pub fn area(&self, screen: Rect) -> Rect {
        let width = screen.width.saturating_sub(4).min(72);
        let inner_width = usize::from(width.saturating_sub(4)).max(1);

        let text_height: usize = self
            .body()
            .split('\n')
            .map(|line| {
                let len = line.chars().count();
                return len.div_ceil(inner_width).max(1);
            })
            .sum();

        let height = u16::try_from(text_height + 2)
            .unwrap_or(u16::MAX)
            .min(screen.height);

        return Rect {
            x: screen.x + (screen.width.saturating_sub(width)) / 2,
            y: screen.y + (screen.height.saturating_sub(height)) / 2,
            width,
            height,
        };
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, screen: Rect) {
        let area = self.area(screen);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(self.body())
                .wrap(Wrap { trim: false })
                .alignment(Alignment::Left)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Red))
                        .title("OpsInsight")
                        .padding(Padding::new(1, 1, 0, 0)),
                ),
            area,
        );
    }
}
