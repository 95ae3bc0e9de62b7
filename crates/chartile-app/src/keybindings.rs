use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};

use chartile_config::KeybindingsConfig;

use crate::command::Command;

mod commands;
mod parsing;

pub use parsing::parse_key_string;

use commands::{
    frame_command_description, frame_command_from_name, global_command_description, global_command_from_name,
    layout_command_from_name, tab_command_description, tab_command_from_name,
};
use parsing::{format_key_display, normalize_key_event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    LayoutSwitcher,
}

pub struct KeybindingDispatcher {
    mode: InputMode,
    global_bindings: HashMap<KeyEvent, Command>,
    tab_bindings: HashMap<KeyEvent, Command>,
    frame_bindings: HashMap<KeyEvent, Command>,
    layout_bindings: HashMap<KeyEvent, Command>,
    reverse_global: Vec<(String, String, String)>,
    reverse_tabs: Vec<(String, String, String)>,
    reverse_frames: Vec<(String, String, String)>,
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut global_bindings = HashMap::new();
        let mut reverse_global = Vec::new();
        for (name, key_str) in &config.global {
            if let Some(cmd) = global_command_from_name(name) {
                if let Some(key) = parse_key_string(key_str) {
                    global_bindings.insert(key, cmd);
                    reverse_global.push((name.clone(), key_str.clone(), global_command_description(name)));
                }
            }
        }

        let mut tab_bindings = HashMap::new();
        let mut reverse_tabs = Vec::new();
        for (name, key_str) in &config.tabs {
            if let Some(cmd) = tab_command_from_name(name) {
                if let Some(key) = parse_key_string(key_str) {
                    tab_bindings.insert(key, cmd);
                    reverse_tabs.push((name.clone(), key_str.clone(), tab_command_description(name)));
                }
            }
        }

        let mut frame_bindings = HashMap::new();
        let mut reverse_frames = Vec::new();
        for (name, key_str) in &config.frames {
            if let Some(cmd) = frame_command_from_name(name) {
                if let Some(key) = parse_key_string(key_str) {
                    frame_bindings.insert(key, cmd);
                    reverse_frames.push((name.clone(), key_str.clone(), frame_command_description(name)));
                }
            }
        }

        let mut layout_bindings = HashMap::new();
        for (name, key_str) in &config.layouts {
            if let Some(cmd) = layout_command_from_name(name) {
                if let Some(key) = parse_key_string(key_str) {
                    layout_bindings.insert(key, cmd);
                }
            }
        }

        Self {
            mode: InputMode::Normal,
            global_bindings,
            tab_bindings,
            frame_bindings,
            layout_bindings,
            reverse_global,
            reverse_tabs,
            reverse_frames,
        }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        let key = normalize_key_event(key);

        match self.mode {
            InputMode::LayoutSwitcher => match key.code {
                KeyCode::Enter => Some(Command::SwitcherConfirm),
                KeyCode::Esc => Some(Command::SwitcherCancel),
                KeyCode::Up => Some(Command::SwitcherPrev),
                KeyCode::Down => Some(Command::SwitcherNext),
                KeyCode::Backspace => Some(Command::SwitcherBackspace),
                KeyCode::Char(c) => Some(Command::SwitcherInput(c)),
                _ => None,
            },
            InputMode::Normal => {
                if let Some(cmd) = self.global_bindings.get(&key) {
                    return Some(*cmd);
                }
                self.tab_bindings
                    .get(&key)
                    .or_else(|| self.frame_bindings.get(&key))
                    .or_else(|| self.layout_bindings.get(&key))
                    .copied()
            }
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn key_for(&self, name: &str) -> Option<String> {
        self.reverse_global
            .iter()
            .chain(&self.reverse_tabs)
            .chain(&self.reverse_frames)
            .find(|(n, _, _)| n == name)
            .map(|(_, key_str, _)| format_key_display(key_str))
    }

    pub fn global_shortcuts(&self) -> Vec<(String, String)> {
        self.reverse_global.iter().map(|(_, key_str, desc)| (format_key_display(key_str), desc.clone())).collect()
    }

    pub fn tab_shortcuts(&self) -> Vec<(String, String)> {
        self.reverse_tabs.iter().map(|(_, key_str, desc)| (format_key_display(key_str), desc.clone())).collect()
    }

    pub fn frame_shortcuts(&self) -> Vec<(String, String)> {
        self.reverse_frames.iter().map(|(_, key_str, desc)| (format_key_display(key_str), desc.clone())).collect()
    }
}
