//! Diagnostic accumulator for one validation call

use serde::Serialize;
use std::fmt;

/// Ordered, append-only list of diagnostic lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Add a line and return `false`, for checks that fail on the spot
    pub fn fail(&mut self, line: impl Into<String>) -> bool {
        self.add(line);
        false
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line contains the fragment
    pub fn mentions(&self, fragment: &str) -> bool {
        self.lines.iter().any(|line| line.contains(fragment))
    }

    /// Newline-delimited report text
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut report = Report::new();
        report.add("first");
        assert!(!report.fail("second"));
        report.add(String::from("third"));
        assert_eq!(report.lines(), ["first", "second", "third"]);
        assert_eq!(report.to_text(), "first\nsecond\nthird");
        assert!(report.mentions("sec"));
    }
}
