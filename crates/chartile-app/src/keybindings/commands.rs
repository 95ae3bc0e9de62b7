use std::str::FromStr;

use chartile_layout::Layout;

use crate::command::Command;

pub(super) fn global_command_from_name(name: &str) -> Option<Command> {
    match name {
        "quit" => Some(Command::Quit),
        "layout_switcher" => Some(Command::OpenLayoutSwitcher),
        _ => None,
    }
}

pub(super) fn global_command_description(name: &str) -> String {
    match name {
        "quit" => "Quit",
        "layout_switcher" => "Layouts",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn tab_command_from_name(name: &str) -> Option<Command> {
    match name {
        "new_tab" => Some(Command::NewTab),
        "close_tab" => Some(Command::CloseTab),
        "next_tab" => Some(Command::NextTab),
        "prev_tab" => Some(Command::PrevTab),
        _ => None,
    }
}

pub(super) fn tab_command_description(name: &str) -> String {
    match name {
        "new_tab" => "New tab",
        "close_tab" => "Close tab",
        "next_tab" => "Next tab",
        "prev_tab" => "Prev tab",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn frame_command_from_name(name: &str) -> Option<Command> {
    match name {
        "next_frame" => Some(Command::FocusNextFrame),
        "prev_frame" => Some(Command::FocusPrevFrame),
        _ => None,
    }
}

pub(super) fn frame_command_description(name: &str) -> String {
    match name {
        "next_frame" => "Next frame",
        "prev_frame" => "Prev frame",
        _ => "Unknown",
    }
    .into()
}

/// In the layouts group the action name *is* a layout's kebab-case name.
pub(super) fn layout_command_from_name(name: &str) -> Option<Command> {
    Layout::from_str(name).ok().map(Command::SetLayout)
}
