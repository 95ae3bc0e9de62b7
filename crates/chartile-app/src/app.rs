use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect as CellRect;
use ratatui::Terminal;

use chartile_layout::{Layout, NodeId};
use chartile_tui::theme::Theme;
use chartile_tui::widgets::filter_layouts;
use chartile_tui::Workspace;

use crate::event::{AppEvent, EventHandler};
use crate::keybindings::KeybindingDispatcher;

mod input;
mod mouse;
mod render;
mod tabs;

/// State of the layout switcher overlay while it is open.
pub struct LayoutSwitcherState {
    input: String,
    selected: usize,
}

impl LayoutSwitcherState {
    fn new() -> Self {
        Self { input: String::new(), selected: 0 }
    }

    fn items(&self) -> Vec<Layout> {
        filter_layouts(&self.input)
    }

    fn clamp_selected(&mut self) {
        let len = self.items().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

pub struct App {
    running: bool,
    tick_rate: Duration,
    dispatcher: KeybindingDispatcher,
    workspace: Workspace,
    theme: Theme,
    default_layout: Layout,
    pixels_per_col: u16,
    pixels_per_row: u16,
    switcher: Option<LayoutSwitcherState>,
    dragging: Option<NodeId>,
    next_surface: usize,
    // Screen geometry captured on every draw, used for mouse hit testing.
    tab_bar_row: u16,
    status_bar_row: u16,
    body_area: CellRect,
}

impl App {
    pub fn new(
        tick_rate_ms: u64,
        dispatcher: KeybindingDispatcher,
        theme: Theme,
        default_layout: Layout,
        pixels_per_col: u16,
        pixels_per_row: u16,
    ) -> Self {
        let workspace = Workspace::new(default_layout);
        let mut app = Self {
            running: true,
            tick_rate: Duration::from_millis(tick_rate_ms),
            dispatcher,
            workspace,
            theme,
            default_layout,
            pixels_per_col,
            pixels_per_row,
            switcher: None,
            dragging: None,
            next_surface: 0,
            tab_bar_row: 0,
            status_bar_row: 0,
            body_area: CellRect::default(),
        };
        app.mount_demo_surfaces();
        app
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.tick_rate);

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            let first = events.next().await?;
            self.handle_event(first);

            for event in events.drain_pending() {
                if !self.running {
                    break;
                }
                self.handle_event(event);
            }
        }

        Ok(())
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
            // Bounds are re-synced from the terminal size on the next draw.
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }
    }
}
