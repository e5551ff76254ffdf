//! ISO-8601 week grouping of completed tasks
//!
//! Groups carry their `(iso_year, iso_week)` key alongside the display label,
//! so ordering never depends on the label text.

use crate::entries::entry::Entry;
use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// ISO week-numbering year and week (1-53)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

/// Display label of the ISO week containing `date`
///
/// Format: `Week 11 Mar 11–Mar 17, 2024`. The range runs Monday to Sunday.
pub fn week_label(date: NaiveDate) -> String {
    let key = WeekKey::of(date);
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let sunday = monday + Duration::days(6);
    format!(
        "Week {} {}–{}, {}",
        key.week,
        monday.format("%b %-d"),
        sunday.format("%b %-d"),
        key.year
    )
}

/// Completed tasks of one ISO week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGroup<'a> {
    pub key: WeekKey,
    pub label: String,
    /// Ordered by completion time, most recent first
    pub entries: Vec<&'a Entry>,
}

/// Group completed tasks by the ISO week of their completion, as seen in `tz`
///
/// Groups come newest first (year desc, then week desc). Entries without a
/// completion timestamp are skipped.
pub fn group_by_completion_week<'a, Tz, I>(tasks: I, tz: &Tz) -> Vec<WeekGroup<'a>>
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a Entry>,
{
    let mut buckets: BTreeMap<Reverse<WeekKey>, (NaiveDate, Vec<&'a Entry>)> = BTreeMap::new();

    for task in tasks {
        let Some(completed_at) = task.completed_at() else {
            continue;
        };
        let local_date = completed_at.with_timezone(tz).date_naive();
        buckets
            .entry(Reverse(WeekKey::of(local_date)))
            .or_insert_with(|| (local_date, Vec::new()))
            .1
            .push(task);
    }

    buckets
        .into_iter()
        .map(|(Reverse(key), (any_date, mut entries))| {
            entries.sort_by(|a, b| b.completed_at().cmp(&a.completed_at()));
            WeekGroup {
                key,
                label: week_label(any_date),
                entries,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::entry::EntryDraft;
    use chrono::{DateTime, FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn completed(id: &str, at: DateTime<Utc>) -> Entry {
        Entry::new(id.to_string(), EntryDraft::task(id), at - Duration::days(30))
            .toggled_completion(None, at)
            .unwrap()
    }

    #[test]
    fn test_week_key_year_boundaries() {
        // 2021-01-03 is a Sunday belonging to the last ISO week of 2020
        assert_eq!(WeekKey::of(date(2021, 1, 3)), WeekKey { year: 2020, week: 53 });
        // 2024-12-30 is the Monday of week 1 of 2025
        assert_eq!(WeekKey::of(date(2024, 12, 30)), WeekKey { year: 2025, week: 1 });
        assert_eq!(WeekKey::of(date(2024, 3, 14)), WeekKey { year: 2024, week: 11 });
    }

    #[test]
    fn test_week_label() {
        assert_eq!(week_label(date(2024, 3, 14)), "Week 11 Mar 11–Mar 17, 2024");
        assert_eq!(week_label(date(2021, 1, 3)), "Week 53 Dec 28–Jan 3, 2020");
    }

    #[test]
    fn test_same_week_shares_a_group() {
        let monday = completed("a", Utc.with_ymd_and_hms(2024, 3, 11, 8, 0, 0).unwrap());
        let friday = completed("b", Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap());
        let tasks = vec![monday, friday];

        let groups = group_by_completion_week(&tasks, &Utc);
        assert_eq!(groups.len(), 1);
        let ids: Vec<_> = groups[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_later_week_sorts_first() {
        let earlier = completed("a", Utc.with_ymd_and_hms(2024, 3, 13, 8, 0, 0).unwrap());
        let later = completed("b", Utc.with_ymd_and_hms(2024, 3, 20, 8, 0, 0).unwrap());
        let tasks = vec![earlier, later];

        let groups = group_by_completion_week(&tasks, &Utc);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, WeekKey { year: 2024, week: 12 });
        assert_eq!(groups[1].key, WeekKey { year: 2024, week: 11 });
    }

    #[test]
    fn test_year_sorts_before_week() {
        let old = completed("old", Utc.with_ymd_and_hms(2023, 12, 20, 8, 0, 0).unwrap());
        let new = completed("new", Utc.with_ymd_and_hms(2024, 1, 3, 8, 0, 0).unwrap());
        let tasks = vec![old, new];

        let groups = group_by_completion_week(&tasks, &Utc);
        assert_eq!(groups[0].key.year, 2024);
        assert_eq!(groups[1].key, WeekKey { year: 2023, week: 51 });
    }

    #[test]
    fn test_grouping_uses_the_given_time_zone() {
        // Sunday 23:30 UTC is already Monday in UTC+2
        let task = completed("a", Utc.with_ymd_and_hms(2024, 3, 17, 23, 30, 0).unwrap());
        let tasks = vec![task];

        let utc_groups = group_by_completion_week(&tasks, &Utc);
        assert_eq!(utc_groups[0].key.week, 11);

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let shifted = group_by_completion_week(&tasks, &plus_two);
        assert_eq!(shifted[0].key.week, 12);
    }

    #[test]
    fn test_open_tasks_are_skipped() {
        let open = Entry::new(
            "open".to_string(),
            EntryDraft::task("open"),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        );
        let groups = group_by_completion_week([&open], &Utc);
        assert!(groups.is_empty());
    }
}
