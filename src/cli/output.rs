//! Output formatting utilities

use crate::domain::{Entry, EntryId};

/// Format the newest-first entry list with 1-based positions
pub fn format_entry_list(entries: &[(&EntryId, &Entry)]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (index, (_, entry)) in entries.iter().enumerate() {
        output.push_str(&format!("{:>3}  {}\n", index + 1, entry.list_label()));
    }
    output
}

/// Format a single entry for `show`
pub fn format_entry(id: &EntryId, entry: &Entry) -> String {
    format!(
        "Title: {}\nDate: {}\nId: {}\n\n{}\n",
        entry.title,
        entry.display_date(),
        id,
        entry.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(title: &str, day: u32) -> Entry {
        Entry::new(
            title.to_string(),
            "text".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, day)
                .unwrap()
                .and_hms_opt(21, 5, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_entry_list(&[]);
        assert_eq!(output, "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let a_id = EntryId::new("entry_2");
        let b_id = EntryId::new("entry_1");
        let a = entry("Second day", 17);
        let b = entry("A title well beyond thirty characters long", 16);

        let output = format_entry_list(&[(&a_id, &a), (&b_id, &b)]);

        assert_eq!(
            output,
            "  1  2025-01-17 21:05 - Second day\n  2  2025-01-16 21:05 - A title well beyond thirty cha...\n"
        );
    }

    #[test]
    fn test_format_entry() {
        let id = EntryId::new("entry_1737061500");
        let output = format_entry(&id, &entry("Trip", 16));

        assert!(output.starts_with("Title: Trip\n"));
        assert!(output.contains("Date: 2025-01-16 21:05\n"));
        assert!(output.contains("Id: entry_1737061500\n"));
        assert!(output.ends_with("\n\ntext\n"));
    }
}
