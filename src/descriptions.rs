//! Human-readable labels for LeftWM command identifiers.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Command identifier -> display label
static DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Windows
    m.insert("Execute", "Execute");
    m.insert("CloseWindow", "Close Window");
    m.insert("CloseAllOtherWindows", "Close All Other Windows");
    m.insert("ToggleFullScreen", "Toggle Fullscreen");
    m.insert("ToggleMaximized", "Toggle Maximize");
    m.insert("ToggleSticky", "Toggle Sticky Window");
    m.insert("ToggleScratchPad", "Toggle Scratchpad");
    m.insert("FloatingToTile", "Floating To Tile");
    m.insert("TileToFloating", "Tile to Floating");
    m.insert("ToggleFloating", "Toggle Floating");
    m.insert("MoveWindowUp", "Move Window Up");
    m.insert("MoveWindowDown", "Move Window Down");
    m.insert("MoveWindowTop", "Move Window Top");
    m.insert("SwapWindowTop", "Swap Window Top");
    m.insert("MouseMoveWindow", "Mouse Move Window");
    m.insert("FocusWindowUp", "Focus Window Up");
    m.insert("FocusWindowDown", "Focus Window Down");
    m.insert("FocusWindowTop", "Focus Window Top");

    // Tags
    m.insert("GotoTag", "Go to tag");
    m.insert("SwapTags", "Swap Tags");
    m.insert("ReturnToLastTag", "Return To Last Tag");
    m.insert("FocusNextTag", "Focus Next Tag");
    m.insert("FocusPreviousTag", "Focus Previous Tag");
    m.insert("RotateTag", "Rotate Tag");
    m.insert("MoveWindowToNextTag", "Move Window To Next Tag");
    m.insert("MoveWindowToPreviousTag", "Move Window To Previous Tag");

    // Workspaces
    m.insert("MoveToLastWorkspace", "Move to Last Workspace");
    m.insert("FocusWorkspaceNext", "Focus Workspace Next");
    m.insert("FocusWorkspacePrevious", "Focus Workspace Previous");
    m.insert("MoveWindowToNextWorkspace", "Move Window To Next Workspace");
    m.insert("MoveWindowToPreviousWorkspace", "Move Window To Previous Workspace");

    // Layouts
    m.insert("NextLayout", "Next Layout");
    m.insert("PreviousLayout", "Previous Layout");
    m.insert("SetLayout", "Set Layout");
    m.insert("IncreaseMainSize", "Increase Main Size");
    m.insert("DecreaseMainSize", "Decrease Main Size");
    m.insert("IncreaseMainWidth", "Increase Main Width");
    m.insert("DecreaseMainWidth", "Decrease Main Width");
    m.insert("IncreaseMainCount", "Increase Main Count");
    m.insert("DecreaseMainCount", "Decrease Main Count");
    m.insert("SetMarginMultiplier", "Set Margin Multiplier");

    // Session and themes
    m.insert("SoftReload", "Soft Reload");
    m.insert("HardReload", "Hard Reload");
    m.insert("LoadTheme", "Load Theme");
    m.insert("UnloadTheme", "Unload Theme");

    m
});

/// Table label for `command`, if it has one
pub fn lookup(command: &str) -> Option<&'static str> {
    DESCRIPTIONS.get(command).copied()
}

/// Text shown in the first column for a keybind.
///
/// `MoveToTag`, `GotoTag` and `Execute` always carry their value, even when
/// it is empty. Anything else comes from the table, and unknown commands are
/// shown as-is.
pub fn describe(command: &str, value: &str) -> String {
    match command {
        "MoveToTag" => format!("Move to Tag {}", value),
        "GotoTag" => format!("Go to Tag {}", value),
        "Execute" => format!("Execute {}", value),
        _ => lookup(command)
            .map(str::to_string)
            .unwrap_or_else(|| command.to_string()),
    }
}
