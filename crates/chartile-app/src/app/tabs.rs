use crate::surfaces::LineChartSurface;

use super::App;

impl App {
    pub(super) fn new_tab(&mut self) {
        let name = format!("Tab {}", self.workspace.tabs().len() + 1);
        self.workspace.new_tab(&name, self.default_layout);
        self.mount_demo_surfaces();
    }

    pub(super) fn close_tab(&mut self) {
        let id = self.workspace.active().id;
        if !self.workspace.close_tab(id) {
            tracing::debug!("refused to close the last remaining tab");
        }
    }

    /// Fill every visible frame of the active tab that has no content yet
    /// with a demo chart. Frames that already hold a surface keep it.
    pub(super) fn mount_demo_surfaces(&mut self) {
        let tab = self.workspace.active_mut();
        let visible = tab.container.visible_frames();
        for index in 0..visible {
            let n = self.next_surface;
            let Some(frame) = tab.container.frame_mut(index) else { continue };
            if frame.has_surface() {
                continue;
            }
            let surface = if n % 2 == 0 {
                LineChartSurface::sine(&format!("sine-{}", n + 1), n)
            } else {
                LineChartSurface::random_walk(&format!("walk-{}", n + 1), n as u64, n)
            };
            frame.mount(Box::new(surface));
            self.next_surface += 1;
        }
        tab.container.resize();
    }
}
