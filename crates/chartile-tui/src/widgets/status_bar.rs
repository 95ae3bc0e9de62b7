use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub struct StatusBarWidget<'a> {
    pub mode: &'a str,
    pub hints: &'a [(String, String)],
    pub layout_name: &'a str,
    pub active_frame: usize,
    pub visible_frames: usize,
    pub theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let bar_bg = t.status_bar.bg.unwrap_or(Color::Reset);
        let mut spans = Vec::new();

        spans.push(Span::styled(
            format!(" {} ", self.mode.to_uppercase()),
            Style::default().fg(bar_bg).bg(t.accent).add_modifier(Modifier::BOLD),
        ));

        for (key, desc) in self.hints {
            spans.push(Span::styled(" │ ", t.border.bg(bar_bg)));
            spans.push(Span::styled(format!("<{key}>"), Style::default().fg(t.accent).bg(bar_bg)));
            spans.push(Span::styled(format!(" {desc}"), t.status_bar));
        }

        let right_text = if self.visible_frames > 1 {
            format!("{} · frame {}/{} ", self.layout_name, self.active_frame + 1, self.visible_frames)
        } else {
            format!("{} ", self.layout_name)
        };
        let right_width = right_text.chars().count() as u16;
        let left_used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        let fill = area.width.saturating_sub(left_used + right_width);

        if fill > 0 {
            spans.push(Span::styled(" ".repeat(fill as usize), Style::default().bg(bar_bg)));
        }

        spans.push(Span::styled(right_text, t.status_bar.add_modifier(Modifier::DIM)));

        let line = Line::from(spans);
        let bar = Paragraph::new(line).style(Style::default().bg(bar_bg));
        frame.render_widget(bar, area);
    }
}
