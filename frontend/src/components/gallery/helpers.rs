//! Pure helpers for the memory gallery: grouping, stats, and formatting.

use std::collections::HashSet;

use common::model::category::MemoryCategory;
use common::model::memory::Memory;

/// One rendered group: an active category and its memories in original order.
pub struct CategoryGroup<'a> {
    pub category: &'a MemoryCategory,
    pub memories: Vec<&'a Memory>,
}

/// Grouping result: active categories ordered by `(order, name)`, then one
/// bucket for memories whose category is absent or not among the active ones.
pub struct GroupedMemories<'a> {
    pub groups: Vec<CategoryGroup<'a>>,
    pub unassigned: Vec<&'a Memory>,
}

/// Groups memories under the active categories. Inactive categories are not
/// rendered; their memories land in the unassigned bucket rather than being
/// dropped.
pub fn group_by_category<'a>(
    categories: &'a [MemoryCategory],
    memories: &'a [Memory],
) -> GroupedMemories<'a> {
    let mut active: Vec<&MemoryCategory> = categories
        .iter()
        .filter(|category| category.is_active)
        .collect();
    active.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));

    let active_ids: HashSet<i64> = active.iter().map(|category| category.id).collect();

    let groups = active
        .iter()
        .map(|category| CategoryGroup {
            category,
            memories: memories
                .iter()
                .filter(|memory| memory.category == Some(category.id))
                .collect(),
        })
        .collect();

    let unassigned = memories
        .iter()
        .filter(|memory| match memory.category {
            Some(id) => !active_ids.contains(&id),
            None => true,
        })
        .collect();

    GroupedMemories { groups, unassigned }
}

/// Number of distinct non-blank contributor names.
pub fn distinct_contributors(memories: &[Memory]) -> usize {
    memories
        .iter()
        .filter_map(|memory| memory.author_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Number of distinct years the memories span, read from `created_at`.
pub fn distinct_years(memories: &[Memory]) -> usize {
    memories
        .iter()
        .filter_map(|memory| year_of(&memory.created_at))
        .collect::<HashSet<_>>()
        .len()
}

fn year_of(created_at: &str) -> Option<&str> {
    let year = created_at.get(..4)?;
    year.chars().all(|c| c.is_ascii_digit()).then_some(year)
}

/// Formats an ISO `YYYY-MM-DD...` timestamp as "Jun 1, 2025". Anything
/// unparseable is shown as-is.
pub fn format_date(created_at: &str) -> String {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let date = created_at.split('T').next().unwrap_or(created_at);
    let mut parts = date.split('-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => (year, month, day),
        _ => return created_at.to_string(),
    };
    let month_idx = match month.parse::<usize>() {
        Ok(idx) if (1..=12).contains(&idx) => idx - 1,
        _ => return created_at.to_string(),
    };
    let day: u32 = match day.parse() {
        Ok(day) => day,
        Err(_) => return created_at.to_string(),
    };
    format!("{} {}, {}", MONTHS[month_idx], day, year)
}

/// Translucent panel background for a category's `#RRGGBB` color (alpha
/// suffix appended). Malformed colors fall back to a neutral gray.
pub fn panel_background(color: &str) -> String {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        format!("{color}1a")
    } else {
        "#6B72801a".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str, order: i32, is_active: bool) -> MemoryCategory {
        MemoryCategory {
            id,
            name: name.to_string(),
            order,
            is_active,
            color: "#8B5CF6".to_string(),
            ..Default::default()
        }
    }

    fn memory(id: i64, title: &str, category: Option<i64>) -> Memory {
        Memory {
            id,
            title: title.to_string(),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn groups_follow_category_order_with_name_tiebreak() {
        let categories = vec![
            category(1, "Hackathons", 2, true),
            category(2, "Graduation", 1, true),
            category(3, "Field Trips", 2, true),
        ];
        let memories = vec![memory(10, "Ceremony", Some(2))];

        let grouped = group_by_category(&categories, &memories);
        let names: Vec<&str> = grouped
            .groups
            .iter()
            .map(|group| group.category.name.as_str())
            .collect();
        assert_eq!(names, vec!["Graduation", "Field Trips", "Hackathons"]);
    }

    #[test]
    fn memories_keep_their_relative_order_within_a_group() {
        let categories = vec![category(1, "Hackathons", 1, true)];
        let memories = vec![
            memory(3, "CTF finals", Some(1)),
            memory(1, "Kickoff", Some(1)),
            memory(2, "Awards night", Some(1)),
        ];

        let grouped = group_by_category(&categories, &memories);
        let ids: Vec<i64> = grouped.groups[0].memories.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn inactive_and_unknown_categories_land_in_the_unassigned_bucket() {
        let categories = vec![
            category(1, "Hackathons", 1, true),
            category(2, "Retired", 2, false),
        ];
        let memories = vec![
            memory(1, "CTF finals", Some(1)),
            memory(2, "Old times", Some(2)),
            memory(3, "Unfiled", None),
            memory(4, "Ghost category", Some(99)),
        ];

        let grouped = group_by_category(&categories, &memories);
        assert_eq!(grouped.groups.len(), 1);
        let unassigned: Vec<i64> = grouped.unassigned.iter().map(|m| m.id).collect();
        assert_eq!(unassigned, vec![2, 3, 4]);
    }

    #[test]
    fn contributor_and_year_stats_ignore_blanks_and_duplicates() {
        let mut memories = vec![
            memory(1, "A", None),
            memory(2, "B", None),
            memory(3, "C", None),
            memory(4, "D", None),
        ];
        memories[0].author_name = Some("Sara Teshome".to_string());
        memories[1].author_name = Some("Sara Teshome".to_string());
        memories[2].author_name = Some("  ".to_string());
        memories[3].author_name = Some("Dawit Assefa".to_string());
        memories[0].created_at = "2024-06-01T10:00:00Z".to_string();
        memories[1].created_at = "2025-01-15T10:00:00Z".to_string();
        memories[2].created_at = "2025-03-02".to_string();
        memories[3].created_at = "not a date".to_string();

        assert_eq!(distinct_contributors(&memories), 2);
        assert_eq!(distinct_years(&memories), 2);
    }

    #[test]
    fn dates_render_human_readable() {
        assert_eq!(format_date("2025-06-01T12:00:00Z"), "Jun 1, 2025");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2025-13-01"), "2025-13-01");
    }

    #[test]
    fn panel_backgrounds_validate_the_hex_color() {
        assert_eq!(panel_background("#8B5CF6"), "#8B5CF61a");
        assert_eq!(panel_background("rebeccapurple"), "#6B72801a");
        assert_eq!(panel_background(""), "#6B72801a");
    }
}
