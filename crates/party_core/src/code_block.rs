use serde::{Deserialize, Serialize};

/// Structured view of a generated block: the comment line and the code
/// lines beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeBlock {
    pub title: String,
    pub lines: Vec<String>,
}

impl CodeBlock {
    /// Splits template output into title and code lines. Blank lines are
    /// dropped; everything else is kept byte-for-byte, trailing spaces
    /// included.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let title = lines.next().unwrap_or_default().to_string();
        let lines = lines.map(str::to_string).collect();

        Self { title, lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
