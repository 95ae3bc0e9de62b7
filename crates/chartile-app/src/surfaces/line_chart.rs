use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};
use ratatui::Frame;

use chartile_tui::theme::Theme;
use chartile_tui::ChartSurface;

const POINT_COUNT: usize = 512;
const MIN_VISIBLE: usize = 16;
/// Horizontal pixels one data point gets before older points scroll out.
const PX_PER_POINT: f64 = 2.0;

/// A demo chart surface: a fixed series windowed by the pixel width the
/// layout engine last assigned to its frame.
pub struct LineChartSurface {
    label: String,
    series_index: usize,
    data: Vec<(f64, f64)>,
    width_px: f64,
    height_px: f64,
}

impl LineChartSurface {
    pub fn sine(label: &str, series_index: usize) -> Self {
        let data = (0..POINT_COUNT)
            .map(|i| {
                let x = i as f64;
                (x, (x * 0.045).sin() * 40.0 + (x * 0.011).sin() * 12.0)
            })
            .collect();
        Self::from_data(label, series_index, data)
    }

    pub fn random_walk(label: &str, seed: u64, series_index: usize) -> Self {
        let mut state = seed;
        let mut y = 0.0;
        let data = (0..POINT_COUNT)
            .map(|i| {
                y += lcg_step(&mut state);
                (i as f64, y)
            })
            .collect();
        Self::from_data(label, series_index, data)
    }

    fn from_data(label: &str, series_index: usize, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.to_string(), series_index, data, width_px: 0.0, height_px: 0.0 }
    }

    /// The trailing slice of the series that fits the last assigned width.
    pub fn visible(&self) -> &[(f64, f64)] {
        let capacity = (self.width_px / PX_PER_POINT) as usize;
        let n = capacity.max(MIN_VISIBLE).min(self.data.len());
        &self.data[self.data.len() - n..]
    }
}

impl ChartSurface for LineChartSurface {
    fn label(&self) -> &str {
        &self.label
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width_px = width;
        self.height_px = height;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let points = self.visible();
        if points.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let x_bounds = [points[0].0, points[points.len() - 1].0];
        let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
        for &(_, y) in points {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        let pad = ((y_max - y_min) * 0.1).max(1.0);

        let color = theme.series_color(self.series_index);
        let axis_style = if focused { Style::default().fg(theme.accent) } else { theme.text_dim };

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(color))
            .data(points);

        let chart = Chart::new(vec![dataset])
            .x_axis(Axis::default().style(axis_style).bounds(x_bounds))
            .y_axis(Axis::default().style(axis_style).bounds([y_min - pad, y_max + pad]));

        frame.render_widget(chart, area);
    }
}

fn lcg_step(state: &mut u64) -> f64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    ((*state >> 33) as f64 / (1u64 << 30) as f64) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic() {
        let a = LineChartSurface::random_walk("a", 7, 0);
        let b = LineChartSurface::random_walk("b", 7, 1);
        assert_eq!(a.data, b.data);

        let c = LineChartSurface::random_walk("c", 8, 0);
        assert_ne!(a.data, c.data);
    }

    #[test]
    fn window_follows_assigned_width() {
        let mut surface = LineChartSurface::sine("s", 0);
        assert_eq!(surface.visible().len(), MIN_VISIBLE);

        surface.resize(200.0, 100.0);
        assert_eq!(surface.visible().len(), 100);

        surface.resize(1e6, 100.0);
        assert_eq!(surface.visible().len(), POINT_COUNT);
    }

    #[test]
    fn window_keeps_the_trailing_points() {
        let mut surface = LineChartSurface::sine("s", 0);
        surface.resize(200.0, 100.0);
        let visible = surface.visible();
        assert_eq!(visible.last().unwrap().0, (POINT_COUNT - 1) as f64);
        assert_eq!(visible[0].0, (POINT_COUNT - 100) as f64);
    }

    #[test]
    fn walk_steps_stay_in_range() {
        let mut state = 42u64;
        for _ in 0..1000 {
            let step = lcg_step(&mut state);
            assert!((-1.0..=1.0).contains(&step), "step {step} out of range");
        }
    }
}
