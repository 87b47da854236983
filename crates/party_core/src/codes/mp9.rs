//! Mario Party 9 (Wii) code templates.

/// ID slots expect six hex digits; the trailing `00` completes the word.
pub fn minigame_replacement(hex_from: &str, hex_to: &str, name_from: &str, name_to: &str) -> String {
    format!(
        "
MP9 - Minigame Replacement: {name_from} -> {name_to}
4A000000 81000000
30758730 {hex_from}00
14758730 {hex_to}00
E0000000 80008000
"
    )
}
