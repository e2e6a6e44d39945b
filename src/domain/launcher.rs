//! Toolbar launcher ("macroScript") models.

use std::path::PathBuf;

use crate::domain::Dialect;

/// A script file to expose as a clickable launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherEntry {
    pub category: String,
    pub name: String,
    pub path: PathBuf,
}

impl LauncherEntry {
    pub fn new(category: impl Into<String>, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { category: category.into(), name: name.into(), path: path.into() }
    }

    /// Unique launcher identifier: the category and the title-cased display
    /// name, each with runs of non-word characters collapsed to `_`. An
    /// identifier that would start with a digit gets a leading `_`.
    pub fn uid(&self) -> String {
        let uid = format!("{}_{}", word_safe(&self.category), word_safe(&title_case(&self.name)));
        if uid.starts_with(|ch: char| ch.is_ascii_digit()) { format!("_{}", uid) } else { uid }
    }
}

/// Rendered launcher registration script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroScript {
    pub uid: String,
    pub dialect: Dialect,
    pub source: String,
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_cased = true;
        } else {
            out.push(ch);
            previous_cased = false;
        }
    }
    out
}

fn word_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            out.push(ch);
            in_gap = false;
        } else if !in_gap {
            out.push('_');
            in_gap = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_title_cases_and_collapses_separators() {
        let entry = LauncherEntry::new("Tools", "max gpt  - helper", "/tmp/a.py");
        assert_eq!(entry.uid(), "Tools_Max_Gpt_Helper");
    }

    #[test]
    fn uid_lowercases_inner_capitals_like_title_case() {
        let entry = LauncherEntry::new("Tools", "MaxGPT", "/tmp/a.ms");
        assert_eq!(entry.uid(), "Tools_Maxgpt");
    }

    #[test]
    fn uid_sanitizes_category() {
        let entry = LauncherEntry::new("My Tools!", "3d grid", "/tmp/a.ms");
        assert_eq!(entry.uid(), "My_Tools__3D_Grid");
    }

    #[test]
    fn uid_never_starts_with_a_digit() {
        let entry = LauncherEntry::new("3D Tools", "grid", "/tmp/a.ms");
        assert_eq!(entry.uid(), "_3D_Tools_Grid");

        let entry = LauncherEntry::new("", "2x scale", "/tmp/a.ms");
        assert_eq!(entry.uid(), "_2X_Scale");
    }
}
