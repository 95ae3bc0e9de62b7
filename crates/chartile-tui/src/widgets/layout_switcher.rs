use chartile_layout::{frame_count, Layout};
use ratatui::layout::Layout as UiLayout;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::theme::Theme;

/// Centered overlay listing layouts by name, filtered by the typed input.
pub struct LayoutSwitcherWidget<'a> {
    pub input: &'a str,
    pub items: &'a [Layout],
    pub selected: usize,
    pub theme: &'a Theme,
}

/// The catalog entries whose name contains `input`, in catalog order.
pub fn filter_layouts(input: &str) -> Vec<Layout> {
    let needle = input.trim().to_ascii_lowercase();
    Layout::ALL.into_iter().filter(|l| l.name().contains(&needle)).collect()
}

impl<'a> LayoutSwitcherWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let overlay_bg = t.overlay.bg.unwrap_or(Color::Reset);
        let width: u16 = 40.min(area.width.saturating_sub(4));
        let height: u16 = ((self.items.len() + 3) as u16).min(22).min(area.height.saturating_sub(2));
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent))
            .title(" Switch Layout ")
            .title_style(Style::default().fg(t.accent).bold())
            .style(t.overlay);

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = UiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        let input_display = format!(":{}_", self.input);
        let input_line = Paragraph::new(input_display).style(Style::default().fg(t.fg).bg(overlay_bg));
        frame.render_widget(input_line, chunks[0]);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, layout)| {
                let marker = if i == self.selected { "> " } else { "  " };
                let frames = frame_count(*layout);
                let plural = if frames == 1 { "frame" } else { "frames" };
                let text = format!("{marker}{:<20} {frames} {plural}", layout.name());
                let style =
                    if i == self.selected { Style::default().fg(t.accent).bold() } else { Style::default().fg(t.fg) };
                ListItem::new(text).style(style)
            })
            .collect();

        let list = List::new(items).highlight_style(t.selection.add_modifier(Modifier::BOLD));

        let mut list_state =
            ListState::default().with_selected(Some(self.selected.min(self.items.len().saturating_sub(1))));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_lists_the_whole_catalog() {
        assert_eq!(filter_layouts("").len(), Layout::ALL.len());
    }

    #[test]
    fn filter_narrows_by_substring() {
        let quads = filter_layouts("quad");
        assert_eq!(quads.len(), 8);
        assert!(quads.contains(&Layout::QuadLeft));

        assert_eq!(filter_layouts("triple-vert"), vec![
            Layout::TripleVert,
            Layout::TripleVertLeft,
            Layout::TripleVertRight,
        ]);
    }

    #[test]
    fn filter_is_case_insensitive_and_trims() {
        assert_eq!(filter_layouts("  SINGLE "), vec![Layout::Single]);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_layouts("grid-9000").is_empty());
    }
}
