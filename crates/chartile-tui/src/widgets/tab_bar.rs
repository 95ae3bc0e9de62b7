use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub struct TabBarWidget<'a> {
    pub tabs: &'a [String],
    pub active: usize,
    pub theme: &'a Theme,
}

impl<'a> TabBarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let header_bg = t.header.bg.unwrap_or(Color::Reset);
        let labels = self.labels();
        let widths: Vec<usize> = labels.iter().map(|l| l.len()).collect();
        let scroll = self.compute_scroll(&widths, sep_width(), area.width as usize);

        let mut spans = Vec::new();
        let mut first = true;
        for (i, label) in labels.iter().enumerate() {
            if i < scroll {
                continue;
            }
            if !first {
                spans.push(Span::styled(SEP, t.border.bg(header_bg)));
            }
            first = false;

            let style = if i == self.active {
                Style::default().fg(t.accent).bg(header_bg).add_modifier(Modifier::BOLD)
            } else {
                t.text_dim.bg(header_bg)
            };
            spans.push(Span::styled(label.clone(), style));
        }

        let line = Line::from(spans);
        let bar = Paragraph::new(line).style(Style::default().bg(header_bg));
        frame.render_widget(bar, area);
    }

    /// Horizontal cell span each visible label occupies, for mouse hit
    /// testing. Mirrors the scroll state `render` uses at the same width.
    pub fn hit_spans(&self, width: u16) -> Vec<(usize, Range<u16>)> {
        let labels = self.labels();
        let widths: Vec<usize> = labels.iter().map(|l| l.len()).collect();
        let scroll = self.compute_scroll(&widths, sep_width(), width as usize);

        let mut spans = Vec::new();
        let mut x = 0u16;
        for (i, &w) in widths.iter().enumerate().skip(scroll) {
            if i > scroll {
                x += sep_width() as u16;
            }
            if x >= width {
                break;
            }
            let end = (x + w as u16).min(width);
            spans.push((i, x..end));
            x = end;
        }
        spans
    }

    fn labels(&self) -> Vec<String> {
        self.tabs.iter().enumerate().map(|(i, name)| format!("[{}] {}", i + 1, name)).collect()
    }

    fn compute_scroll(&self, widths: &[usize], sep_w: usize, max_w: usize) -> usize {
        if widths.is_empty() {
            return 0;
        }

        let total: usize = widths.iter().sum::<usize>() + sep_w * widths.len().saturating_sub(1);
        if total <= max_w {
            return 0;
        }

        let mut scroll = 0;
        loop {
            let visible: usize =
                widths[scroll..].iter().sum::<usize>() + sep_w * widths[scroll..].len().saturating_sub(1);
            if visible <= max_w {
                break;
            }
            if scroll >= self.active {
                break;
            }
            scroll += 1;
        }
        scroll
    }
}

const SEP: &str = " │ ";

// Display width, not byte length: the box-drawing bar is multi-byte.
fn sep_width() -> usize {
    SEP.chars().count()
}
