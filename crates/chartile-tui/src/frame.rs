use crate::theme::Theme;

/// A chart collaborator mounted into a frame. The layout engine never sees
/// the surface; the container forwards resolved pixel sizes to it and the
/// host hands it a screen region to paint into.
pub trait ChartSurface {
    fn label(&self) -> &str;

    /// Called after every re-resolve with the frame's pixel size. May be
    /// called repeatedly with the same size; implementations must treat it
    /// as cheap and idempotent.
    fn resize(&mut self, width: f64, height: f64);

    fn render(&mut self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, focused: bool, theme: &Theme);
}

/// A persistent content slot. Frames outlive layout switches: moving to a
/// smaller layout parks the surplus frames with their surfaces intact, and
/// moving back re-claims them in walk order.
#[derive(Default)]
pub struct Frame {
    pub id: Option<String>,
    surface: Option<Box<dyn ChartSurface>>,
}

impl Frame {
    pub fn new(id: Option<&str>) -> Self {
        Self { id: id.map(str::to_string), surface: None }
    }

    /// Mount a surface, returning whatever was mounted before.
    pub fn mount(&mut self, surface: Box<dyn ChartSurface>) -> Option<Box<dyn ChartSurface>> {
        self.surface.replace(surface)
    }

    pub fn unmount(&mut self) -> Option<Box<dyn ChartSurface>> {
        self.surface.take()
    }

    // The box owns its surface for 'static; an elided object lifetime here
    // would tie it to the &mut self borrow, which never unifies.
    pub fn surface_mut(&mut self) -> Option<&mut (dyn ChartSurface + 'static)> {
        self.surface.as_deref_mut()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn label(&self) -> Option<&str> {
        self.surface.as_deref().map(ChartSurface::label)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if let Some(surface) = self.surface.as_deref_mut() {
            surface.resize(width, height);
        }
    }
}
