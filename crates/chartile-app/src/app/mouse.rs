use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use chartile_layout::Point;
use chartile_tui::widgets::TabBarWidget;

use crate::command::InputMode;

use super::App;

impl App {
    pub(super) fn handle_mouse(&mut self, event: MouseEvent) {
        // The switcher overlay captures all input; don't let the mouse
        // change focus behind it.
        if self.dispatcher.mode() != InputMode::Normal {
            return;
        }

        let col = event.column;
        let row = event.row;

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if row == self.tab_bar_row {
                    if let Some(index) = self.tab_at(col) {
                        self.workspace.switch_tab(index);
                    }
                } else if row != self.status_bar_row {
                    let pointer = self.pointer_px(col, row);
                    let container = &self.workspace.active().container;
                    if let Some(separator) = container.separator_at(pointer, self.grab_slop()) {
                        self.dragging = Some(separator);
                    } else if let Some(frame) = container.frame_at(pointer) {
                        self.workspace.focus_frame(frame);
                    }
                }
            }

            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(separator) = self.dragging {
                    let pointer = self.pointer_px(col, row);
                    self.workspace.active_mut().container.drag_separator(separator, pointer);
                }
            }

            MouseEventKind::Up(MouseButton::Left) => {
                self.dragging = None;
            }

            // Middle-click a tab label to close that tab.
            MouseEventKind::Down(MouseButton::Middle) => {
                if row == self.tab_bar_row {
                    if let Some(index) = self.tab_at(col) {
                        self.workspace.switch_tab(index);
                        self.close_tab();
                    }
                }
            }

            _ => {}
        }
    }

    /// Tab index whose rendered label covers the given column, mirroring the
    /// tab bar's scroll state at the current width.
    fn tab_at(&self, col: u16) -> Option<usize> {
        let names: Vec<String> = self.workspace.tabs().iter().map(|t| t.name.clone()).collect();
        let bar = TabBarWidget { tabs: &names, active: self.workspace.active_index(), theme: &self.theme };
        let col = col.checked_sub(self.body_area.x)?;
        bar.hit_spans(self.body_area.width).into_iter().find(|(_, span)| span.contains(&col)).map(|(i, _)| i)
    }

    /// Center of a terminal cell in the engine's pixel space.
    fn pointer_px(&self, col: u16, row: u16) -> Point {
        Point::new(
            (col as f64 + 0.5) * self.pixels_per_col as f64,
            (row as f64 + 0.5) * self.pixels_per_row as f64,
        )
    }

    /// Extra grab area around a separator. The painted handle is thinner
    /// than one cell, so clicks on the whole boundary cell must land.
    fn grab_slop(&self) -> i32 {
        self.pixels_per_col.max(self.pixels_per_row) as i32 / 2
    }
}
