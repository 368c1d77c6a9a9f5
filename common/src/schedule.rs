//! Presentation ordering for the reservation list.
//!
//! The list view shows reservations sorted chronologically and grouped
//! into one run per calendar date, with a human date label ("今日",
//! "明日", …) computed against the viewer's local calendar day. Everything
//! here is pure: the caller supplies "today" so the logic is independent
//! of wall clock and timezone.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::model::reservation::Reservation;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the reservations sorted by ascending `(date, time)`.
///
/// The sort is stable: records sharing a date and time keep their
/// insertion order. Dates and times are ISO-style strings, so the
/// lexicographic composite compare is the chronological one.
pub fn sort_chronologically(reservations: &[Reservation]) -> Vec<Reservation> {
    let mut sorted = reservations.to_vec();
    sorted.sort_by(|a, b| {
        (a.date.as_str(), a.time.as_str()).cmp(&(b.date.as_str(), b.time.as_str()))
    });
    sorted
}

/// Partitions an already-sorted sequence into per-date groups, preserving
/// the order in which distinct dates first appear.
pub fn group_by_date(sorted: &[Reservation]) -> Vec<(String, Vec<Reservation>)> {
    let mut groups: Vec<(String, Vec<Reservation>)> = Vec::new();
    for reservation in sorted {
        match groups.last_mut() {
            Some((date, members)) if *date == reservation.date => {
                members.push(reservation.clone());
            }
            _ => groups.push((reservation.date.clone(), vec![reservation.clone()])),
        }
    }
    groups
}

/// Header label for a date group, relative to the viewer's local day.
///
/// Offsets 0, 1 and 2 get the relative words; anything else (including
/// past dates) falls back to month/day plus the weekday name. A date that
/// fails to parse is shown as-is.
pub fn date_label(date: &str, today: NaiveDate) -> String {
    let Ok(target) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
        return format!("📅 {date}");
    };
    let date_text = format!("{}月{}日", target.month(), target.day());
    match target.signed_duration_since(today).num_days() {
        0 => format!("📅 今日 ({date_text})"),
        1 => format!("📅 明日 ({date_text})"),
        2 => format!("📅 后天 ({date_text})"),
        _ => format!("📅 {date_text} {}", weekday_name(target.weekday())),
    }
}

/// Compact `M/D` form of an ISO date, used on cards when no group header
/// carries the date.
pub fn short_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => format!("{}/{}", parsed.month(), parsed.day()),
        Err(_) => date.to_string(),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "周日",
        Weekday::Mon => "周一",
        Weekday::Tue => "周二",
        Weekday::Wed => "周三",
        Weekday::Thu => "周四",
        Weekday::Fri => "周五",
        Weekday::Sat => "周六",
    }
}

#[cfg(test)]
mod tests {
    use super::{date_label, group_by_date, short_date, sort_chronologically};
    use crate::model::period::Period;
    use crate::model::reservation::Reservation;
    use chrono::NaiveDate;

    fn reservation(id: i64, date: &str, time: &str) -> Reservation {
        Reservation {
            id,
            date: date.to_string(),
            time: time.to_string(),
            period: Period::from_time(time).unwrap_or(Period::Lunch),
            room_id: "1".to_string(),
            room_name: "最幸福".to_string(),
            guests: "8".to_string(),
            name: format!("guest-{id}"),
            contact: String::new(),
        }
    }

    #[test]
    fn sorts_by_date_then_time() {
        let input = vec![
            reservation(1, "2024-06-02", "09:00"),
            reservation(2, "2024-06-01", "18:00"),
            reservation(3, "2024-06-01", "09:00"),
        ];
        let sorted = sort_chronologically(&input);
        let keys: Vec<(&str, &str)> = sorted
            .iter()
            .map(|r| (r.date.as_str(), r.time.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2024-06-01", "09:00"),
                ("2024-06-01", "18:00"),
                ("2024-06-02", "09:00"),
            ]
        );
    }

    #[test]
    fn equal_date_and_time_keep_insertion_order() {
        let input = vec![
            reservation(10, "2024-06-01", "12:00"),
            reservation(11, "2024-06-01", "12:00"),
            reservation(12, "2024-06-01", "12:00"),
        ];
        let sorted = sort_chronologically(&input);
        let ids: Vec<i64> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn grouping_partitions_without_loss_or_duplication() {
        let sorted = sort_chronologically(&[
            reservation(1, "2024-06-02", "09:00"),
            reservation(2, "2024-06-01", "18:00"),
            reservation(3, "2024-06-01", "09:00"),
            reservation(4, "2024-06-03", "12:00"),
        ]);
        let groups = group_by_date(&sorted);
        let dates: Vec<&str> = groups.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-01", "2024-06-02", "2024-06-03"]);

        let flattened: Vec<Reservation> = groups
            .into_iter()
            .flat_map(|(_, members)| members)
            .collect();
        assert_eq!(flattened, sorted);
    }

    #[test]
    fn labels_relative_days_in_order() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(date_label("2024-06-01", today), "📅 今日 (6月1日)");
        assert_eq!(date_label("2024-06-02", today), "📅 明日 (6月2日)");
        assert_eq!(date_label("2024-06-03", today), "📅 后天 (6月3日)");
    }

    #[test]
    fn distant_and_past_dates_get_month_day_and_weekday() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        // 2024-06-08 is a Saturday.
        assert_eq!(date_label("2024-06-08", today), "📅 6月8日 周六");
        // Yesterday is not a relative label.
        assert_eq!(date_label("2024-05-31", today), "📅 5月31日 周五");
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(date_label("someday", today), "📅 someday");
    }

    #[test]
    fn short_date_drops_the_year() {
        assert_eq!(short_date("2023-10-25"), "10/25");
        assert_eq!(short_date("bad-date"), "bad-date");
    }
}
