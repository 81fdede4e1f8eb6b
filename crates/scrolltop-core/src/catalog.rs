//! Static listing shown on the home page.
//!
//! Entries carry a category; the page renders one section per category in
//! the order categories first appear.

use crate::icon::IconId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub icon: IconId,
}

impl CatalogEntry {
    pub const fn new(title: &'static str, category: &'static str, icon: IconId) -> Self {
        Self {
            title,
            summary: "",
            category,
            icon,
        }
    }

    pub const fn with_summary(mut self, summary: &'static str) -> Self {
        self.summary = summary;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a CatalogEntry>,
}

/// Group entries by category, keeping first-seen category order and the
/// original order within each category
pub fn group_by_category(entries: &[CatalogEntry]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.entries.push(entry),
            None => groups.push(CategoryGroup {
                category: entry.category,
                entries: vec![entry],
            }),
        }
    }
    groups
}

/// Tools offered on the home page
pub fn entries() -> &'static [CatalogEntry] {
    const ENTRIES: &[CatalogEntry] = &[
        CatalogEntry::new("Counter", "Math", IconId::Calculator)
            .with_summary("Count up and down with bounds"),
        CatalogEntry::new("Unit Converter", "Math", IconId::Calculator)
            .with_summary("Length, mass and temperature"),
        CatalogEntry::new("Percentage", "Math", IconId::Chart)
            .with_summary("Ratios, changes and discounts"),
        CatalogEntry::new("Stopwatch", "Time", IconId::Clock)
            .with_summary("Laps and split times"),
        CatalogEntry::new("Countdown", "Time", IconId::Clock)
            .with_summary("Timer with an alarm"),
        CatalogEntry::new("Time Zones", "Time", IconId::Globe)
            .with_summary("Compare clocks around the world"),
        CatalogEntry::new("Color Picker", "Design", IconId::Palette)
            .with_summary("Pick and convert colors"),
        CatalogEntry::new("Gradient", "Design", IconId::Palette)
            .with_summary("Build linear gradients"),
        CatalogEntry::new("Image Resize", "Design", IconId::Image)
            .with_summary("Scale images to a target size"),
        CatalogEntry::new("Word Count", "Text", IconId::Text)
            .with_summary("Words, lines and characters"),
        CatalogEntry::new("Case Converter", "Text", IconId::Text)
            .with_summary("Upper, lower and title case"),
        CatalogEntry::new("Lorem Ipsum", "Text", IconId::Text)
            .with_summary("Placeholder text generator"),
        CatalogEntry::new("JSON Formatter", "Developer", IconId::Code)
            .with_summary("Pretty-print and validate JSON"),
        CatalogEntry::new("Base64", "Developer", IconId::Code)
            .with_summary("Encode and decode Base64"),
        CatalogEntry::new("Regex Tester", "Developer", IconId::Code)
            .with_summary("Try patterns against sample text"),
        CatalogEntry::new("Hash Generator", "Developer", IconId::Code)
            .with_summary("SHA and MD5 digests"),
        CatalogEntry::new("URL Encoder", "Developer", IconId::Globe)
            .with_summary("Percent-encode query strings"),
        CatalogEntry::new("Chart Maker", "Data", IconId::Chart)
            .with_summary("Bar and line charts from numbers"),
        CatalogEntry::new("CSV Viewer", "Data", IconId::Chart)
            .with_summary("Browse comma-separated files"),
        CatalogEntry::new("Random Picker", "Data", IconId::Unknown)
            .with_summary("Pick an item from a list"),
    ];
    ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_preserves_first_seen_order() {
        let entries = [
            CatalogEntry::new("a", "Text", IconId::Text),
            CatalogEntry::new("b", "Math", IconId::Calculator),
            CatalogEntry::new("c", "Text", IconId::Text),
            CatalogEntry::new("d", "Time", IconId::Clock),
            CatalogEntry::new("e", "Math", IconId::Chart),
        ];
        let groups = group_by_category(&entries);

        let categories: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec!["Text", "Math", "Time"]);
        let text: Vec<&str> = groups[0].entries.iter().map(|e| e.title).collect();
        assert_eq!(text, vec!["a", "c"]);
        let math: Vec<&str> = groups[1].entries.iter().map(|e| e.title).collect();
        assert_eq!(math, vec!["b", "e"]);
    }

    #[test]
    fn test_group_empty() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_builtin_entries_cover_every_entry() {
        let groups = group_by_category(entries());
        let total: usize = groups.iter().map(|g| g.entries.len()).sum();
        assert_eq!(total, entries().len());
        assert_eq!(groups[0].category, "Math");
    }
}
