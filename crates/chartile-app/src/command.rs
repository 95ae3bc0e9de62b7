use chartile_layout::Layout;

pub use crate::keybindings::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewTab,
    CloseTab,
    NextTab,
    PrevTab,
    FocusNextFrame,
    FocusPrevFrame,
    OpenLayoutSwitcher,
    SetLayout(Layout),

    // Layout switcher overlay
    SwitcherInput(char),
    SwitcherBackspace,
    SwitcherNext,
    SwitcherPrev,
    SwitcherConfirm,
    SwitcherCancel,
}
