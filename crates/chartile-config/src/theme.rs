use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub bg: String,
    pub fg: String,
    #[serde(alias = "header-bg")]
    pub header_bg: String,
    #[serde(alias = "header-fg")]
    pub header_fg: String,
    #[serde(alias = "selection-bg")]
    pub selection_bg: String,
    #[serde(alias = "selection-fg")]
    pub selection_fg: String,
    pub border: String,
    #[serde(alias = "border-active")]
    pub border_active: String,
    #[serde(alias = "text-dim")]
    pub text_dim: String,
    #[serde(alias = "overlay-bg")]
    pub overlay_bg: String,

    pub separator: String,
    #[serde(alias = "separator-active")]
    pub separator_active: String,

    /// Cycled through when assigning colors to chart series.
    pub series: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#89b4fa".into(),
            bg: "default".into(),
            fg: "#cdd6f4".into(),
            header_bg: "#1e1e2e".into(),
            header_fg: "#cdd6f4".into(),
            selection_bg: "#45475a".into(),
            selection_fg: "#cdd6f4".into(),
            border: "#585b70".into(),
            border_active: "#89b4fa".into(),
            text_dim: "#6c7086".into(),
            overlay_bg: "#1e1e2e".into(),
            separator: "#585b70".into(),
            separator_active: "#89b4fa".into(),
            series: vec!["#a6e3a1".into(), "#f9e2af".into(), "#f38ba8".into(), "#cba6f7".into()],
        }
    }
}
