//! Plain-text rendering of read models

use std::fmt::Write;

use application::PackingListDto;

/// Multi-line view of one list with its items
pub fn render_list(list: &PackingListDto) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, {}) - {} days, {:.1} °C, {}",
        list.name,
        list.localization.city,
        list.localization.country,
        list.days,
        list.temperature,
        list.gender
    );
    let _ = writeln!(out, "id: {}", list.id);
    for item in &list.items {
        let mark = if item.is_packed { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] {} x{}", item.name, item.quantity);
    }
    let _ = write!(out, "{}/{} packed", list.packed_count(), list.items.len());
    out
}

/// One line per list
pub fn render_summary(list: &PackingListDto) -> String {
    format!(
        "{}  {}  ({}, {})  {}/{} packed",
        list.id,
        list.name,
        list.localization.city,
        list.localization.country,
        list.packed_count(),
        list.items.len()
    )
}

#[cfg(test)]
mod tests {
    use application::{LocalizationDto, PackingItemDto};
    use domain::Gender;
    use uuid::Uuid;

    use super::*;

    fn sample() -> PackingListDto {
        PackingListDto {
            id: Uuid::nil(),
            name: "MyList".to_string(),
            days: 10,
            gender: Gender::Female,
            temperature: 12.0,
            localization: LocalizationDto {
                city: "Warsaw".to_string(),
                country: "Poland".to_string(),
            },
            items: vec![
                PackingItemDto {
                    name: "Hat".to_string(),
                    quantity: 1,
                    is_packed: true,
                },
                PackingItemDto {
                    name: "Socks".to_string(),
                    quantity: 7,
                    is_packed: false,
                },
            ],
            created_at: std::time::SystemTime::UNIX_EPOCH.into(),
        }
    }

    #[test]
    fn list_view_shows_items_and_progress() {
        let text = render_list(&sample());
        assert!(text.starts_with("MyList (Warsaw, Poland) - 10 days, 12.0 °C, Female"));
        assert!(text.contains("  [x] Hat x1"));
        assert!(text.contains("  [ ] Socks x7"));
        assert!(text.ends_with("1/2 packed"));
    }

    #[test]
    fn summary_is_single_line() {
        let line = render_summary(&sample());
        assert!(!line.contains('\n'));
        assert!(line.contains("MyList"));
        assert!(line.contains("1/2 packed"));
    }
}
