use crossterm::event::{KeyEvent, KeyEventKind};

use chartile_layout::Layout;

use crate::command::{Command, InputMode};

use super::{App, LayoutSwitcherState};

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if let Some(cmd) = self.dispatcher.dispatch(key) {
            self.handle_command(cmd);
        }
    }

    pub(super) fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => {
                self.running = false;
            }

            Command::NewTab => self.new_tab(),
            Command::CloseTab => self.close_tab(),
            Command::NextTab => self.workspace.next_tab(),
            Command::PrevTab => self.workspace.prev_tab(),

            Command::FocusNextFrame => self.workspace.focus_next_frame(),
            Command::FocusPrevFrame => self.workspace.focus_prev_frame(),

            Command::OpenLayoutSwitcher => {
                self.switcher = Some(LayoutSwitcherState::new());
                self.dispatcher.set_mode(InputMode::LayoutSwitcher);
            }
            Command::SetLayout(layout) => self.apply_layout(layout),

            Command::SwitcherInput(c) => {
                if let Some(sw) = self.switcher.as_mut() {
                    sw.input.push(c);
                    sw.selected = 0;
                }
            }
            Command::SwitcherBackspace => {
                if let Some(sw) = self.switcher.as_mut() {
                    sw.input.pop();
                    sw.clamp_selected();
                }
            }
            Command::SwitcherNext => {
                if let Some(sw) = self.switcher.as_mut() {
                    let len = sw.items().len();
                    if len > 0 {
                        sw.selected = (sw.selected + 1) % len;
                    }
                }
            }
            Command::SwitcherPrev => {
                if let Some(sw) = self.switcher.as_mut() {
                    let len = sw.items().len();
                    if len > 0 {
                        sw.selected = (sw.selected + len - 1) % len;
                    }
                }
            }
            Command::SwitcherConfirm => {
                let chosen = self.switcher.as_ref().and_then(|sw| sw.items().get(sw.selected).copied());
                self.close_switcher();
                if let Some(layout) = chosen {
                    self.apply_layout(layout);
                }
            }
            Command::SwitcherCancel => self.close_switcher(),
        }
    }

    pub(super) fn apply_layout(&mut self, layout: Layout) {
        let tab = self.workspace.active_mut();
        tab.container.set_layout(layout);
        let frame = tab.container.active_frame();
        self.workspace.focus_frame(frame);
        self.mount_demo_surfaces();
        tracing::debug!("layout set to {}", layout.name());
    }

    fn close_switcher(&mut self) {
        self.switcher = None;
        self.dispatcher.set_mode(InputMode::Normal);
    }
}
