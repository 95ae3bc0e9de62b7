use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(alias = "tick-rate-ms")]
    pub tick_rate_ms: u64,
    /// Layout applied to a freshly created tab, by kebab-case name.
    #[serde(alias = "default-layout")]
    pub default_layout: String,
    #[serde(alias = "mouse-enabled")]
    pub mouse_enabled: bool,
    /// Horizontal scale between terminal cells and the engine's pixel space.
    /// Must stay above the 6px separator handle so a handle never rounds to
    /// zero cells.
    #[serde(alias = "pixels-per-col")]
    pub pixels_per_col: u16,
    #[serde(alias = "pixels-per-row")]
    pub pixels_per_row: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            default_layout: "single".into(),
            mouse_enabled: true,
            pixels_per_col: 10,
            pixels_per_row: 20,
        }
    }
}
