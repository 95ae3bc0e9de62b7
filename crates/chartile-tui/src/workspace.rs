use chartile_layout::Layout;

use crate::container::Container;
use crate::selection::Selection;

pub struct Tab {
    pub id: u32,
    pub name: String,
    pub container: Container,
}

/// The tab layer. Owns one container per tab plus the workspace-wide
/// selection, which it keeps synchronized on every tab switch and frame
/// focus change.
pub struct Workspace {
    tabs: Vec<Tab>,
    active_tab: usize,
    next_tab_id: u32,
    selection: Selection,
}

impl Workspace {
    pub fn new(initial_layout: Layout) -> Self {
        let tab = Tab { id: 1, name: "Main".to_string(), container: Container::new(initial_layout) };
        Self { tabs: vec![tab], active_tab: 0, next_tab_id: 2, selection: Selection::default() }
    }

    pub fn new_tab(&mut self, name: &str, layout: Layout) -> u32 {
        let tab_id = self.next_tab_id;
        self.next_tab_id += 1;
        self.tabs.push(Tab { id: tab_id, name: name.to_string(), container: Container::new(layout) });
        self.active_tab = self.tabs.len() - 1;
        self.sync_selection();
        tab_id
    }

    /// Closing the last remaining tab is refused.
    pub fn close_tab(&mut self, id: u32) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        if let Some(pos) = self.tabs.iter().position(|t| t.id == id) {
            self.tabs.remove(pos);
            if self.active_tab >= self.tabs.len() {
                self.active_tab = self.tabs.len() - 1;
            }
            self.sync_selection();
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> &Tab {
        &self.tabs[self.active_tab]
    }

    pub fn active_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active_tab]
    }

    pub fn switch_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active_tab = index;
            self.sync_selection();
        }
    }

    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
        self.sync_selection();
    }

    pub fn prev_tab(&mut self) {
        if self.active_tab == 0 {
            self.active_tab = self.tabs.len() - 1;
        } else {
            self.active_tab -= 1;
        }
        self.sync_selection();
    }

    pub fn rename_tab(&mut self, id: u32, name: &str) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.name = name.to_string();
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn focus_frame(&mut self, index: usize) -> bool {
        let focused = self.tabs[self.active_tab].container.focus_frame(index);
        if focused {
            self.sync_selection();
        }
        focused
    }

    pub fn focus_next_frame(&mut self) {
        self.tabs[self.active_tab].container.focus_next_frame();
        self.sync_selection();
    }

    pub fn focus_prev_frame(&mut self) {
        self.tabs[self.active_tab].container.focus_prev_frame();
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        let frame = self.tabs[self.active_tab].container.active_frame();
        self.selection.select(self.active_tab, frame);
    }
}
