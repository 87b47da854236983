//! Display-name tables used to turn user-facing labels into the IDs the
//! templates expect.

pub mod mp6;
pub mod mp9;

/// Case-insensitive, whitespace-trimmed position lookup.
pub fn position_of(names: &[&str], label: &str) -> Option<usize> {
    let label = label.trim();
    names
        .iter()
        .position(|name| name.eq_ignore_ascii_case(label))
}
