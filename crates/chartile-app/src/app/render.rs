use ratatui::layout::{Constraint, Direction, Layout as UiLayout, Rect as CellRect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use chartile_layout::{Orientation, Rect as PxRect, HALF_HANDLE_PX};
use chartile_tui::widgets::{LayoutSwitcherWidget, StatusBarWidget, TabBarWidget};

use crate::command::InputMode;

use super::App;

impl App {
    pub(super) fn render(&mut self, frame: &mut Frame) {
        let [tab_area, body_area, status_area] = self.sync_geometry(frame.area());

        self.render_tab_bar(frame, tab_area);
        self.render_body(frame, body_area);
        self.render_status_bar(frame, status_area);

        if let Some(sw) = &self.switcher {
            let items = sw.items();
            let widget =
                LayoutSwitcherWidget { input: &sw.input, items: &items, selected: sw.selected, theme: &self.theme };
            widget.render(frame, frame.area());
        }
    }

    /// Split the screen into the three chrome zones, remember where they
    /// landed for mouse hit testing, and re-resolve the active container at
    /// the body's pixel bounds when they changed.
    pub(super) fn sync_geometry(&mut self, area: CellRect) -> [CellRect; 3] {
        let chunks = UiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        self.tab_bar_row = chunks[0].y;
        self.status_bar_row = chunks[2].y;
        self.body_area = chunks[1];

        let body = chunks[1];
        let bounds = PxRect::new(
            body.y as i32 * self.pixels_per_row as i32,
            body.x as i32 * self.pixels_per_col as i32,
            body.width as i32 * self.pixels_per_col as i32,
            body.height as i32 * self.pixels_per_row as i32,
        );
        if self.workspace.active().container.bounds() != bounds {
            self.workspace.active_mut().container.set_bounds(bounds);
        }

        [chunks[0], chunks[1], chunks[2]]
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: CellRect) {
        let names: Vec<String> = self.workspace.tabs().iter().map(|t| t.name.clone()).collect();
        let bar = TabBarWidget { tabs: &names, active: self.workspace.active_index(), theme: &self.theme };
        bar.render(frame, area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: CellRect) {
        let (frame_rects, separator_rects, active_frame) = {
            let container = &self.workspace.active().container;
            (container.frame_rects(), container.separator_rects(), container.active_frame())
        };

        for (index, px_rect) in frame_rects {
            let cell_rect = self.frame_cells(px_rect).intersection(area);
            if cell_rect.width == 0 || cell_rect.height == 0 {
                continue;
            }

            let focused = index == active_frame;
            let border_style = if focused { self.theme.border_active } else { self.theme.border };
            let tab = self.workspace.active_mut();
            let title = match tab.container.frame(index).and_then(|f| f.label()) {
                Some(label) => format!(" {label} "),
                None => format!(" frame {} ", index + 1),
            };
            let block = Block::default().borders(Borders::ALL).border_style(border_style).title(title);
            let inner = block.inner(cell_rect);
            frame.render_widget(block, cell_rect);

            match tab.container.frame_mut(index).and_then(|f| f.surface_mut()) {
                Some(surface) => surface.render(frame, inner, focused, &self.theme),
                None => frame.render_widget(Paragraph::new("no surface mounted").style(self.theme.text_dim), inner),
            }
        }

        for (id, orientation, px_rect) in separator_rects {
            let style = if self.dragging == Some(id) { self.theme.separator_active } else { self.theme.separator };
            let cell_rect = self.separator_cells(orientation, px_rect).intersection(area);
            if cell_rect.width == 0 || cell_rect.height == 0 {
                continue;
            }
            let glyph = match orientation {
                Orientation::Vertical => vec!["│"; cell_rect.height as usize].join("\n"),
                Orientation::Horizontal => "─".repeat(cell_rect.width as usize),
            };
            frame.render_widget(Paragraph::new(glyph).style(style), cell_rect);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: CellRect) {
        let mut hints = self.dispatcher.global_shortcuts();
        hints.extend(self.dispatcher.tab_shortcuts());
        hints.extend(self.dispatcher.frame_shortcuts());

        let container = &self.workspace.active().container;
        let bar = StatusBarWidget {
            mode: self.mode_name(),
            hints: &hints,
            layout_name: container.layout().name(),
            active_frame: container.active_frame(),
            visible_frames: container.visible_frames(),
            theme: &self.theme,
        };
        bar.render(frame, area);
    }

    fn mode_name(&self) -> &'static str {
        match self.dispatcher.mode() {
            InputMode::Normal => "Normal",
            InputMode::LayoutSwitcher => "Layouts",
        }
    }

    /// Cells fully covered by a frame's pixel rect. The edges shrink inward
    /// so a frame never paints over the separator cell next to it.
    pub(super) fn frame_cells(&self, rect: PxRect) -> CellRect {
        let ppc = self.pixels_per_col as i32;
        let ppr = self.pixels_per_row as i32;
        let x0 = ceil_div(rect.left, ppc);
        let y0 = ceil_div(rect.top, ppr);
        let x1 = rect.right() / ppc;
        let y1 = rect.bottom() / ppr;
        CellRect {
            x: x0.max(0) as u16,
            y: y0.max(0) as u16,
            width: (x1 - x0).max(0) as u16,
            height: (y1 - y0).max(0) as u16,
        }
    }

    /// The one-cell-thick line a separator paints on. The handle is thinner
    /// than a cell, so its center picks the column (or row).
    pub(super) fn separator_cells(&self, orientation: Orientation, rect: PxRect) -> CellRect {
        let ppc = self.pixels_per_col as i32;
        let ppr = self.pixels_per_row as i32;
        match orientation {
            Orientation::Vertical => {
                let col = (rect.left + HALF_HANDLE_PX) / ppc;
                let y0 = ceil_div(rect.top, ppr);
                let y1 = rect.bottom() / ppr;
                CellRect { x: col.max(0) as u16, y: y0.max(0) as u16, width: 1, height: (y1 - y0).max(0) as u16 }
            }
            Orientation::Horizontal => {
                let row = (rect.top + HALF_HANDLE_PX) / ppr;
                let x0 = ceil_div(rect.left, ppc);
                let x1 = rect.right() / ppc;
                CellRect { x: x0.max(0) as u16, y: row.max(0) as u16, width: (x1 - x0).max(0) as u16, height: 1 }
            }
        }
    }
}

// Ceiling division for pixel-to-cell snapping; divisors are the positive
// cell scale factors.
fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1).div_euclid(b)
}
