use std::fmt;

use serde::{Deserialize, Serialize};

/// Meal period of a reservation, derived from its time-of-day.
///
/// The serialized form uses the Chinese labels that are also shown in the
/// UI, so persisted records remain readable as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "中餐")]
    Lunch,
    #[serde(rename = "晚餐")]
    Dinner,
}

impl Period {
    /// Derives the period from an `HH:MM` time string. The boundary is
    /// fixed at 16:00: anything earlier counts as lunch, 16:00 and later
    /// as dinner. Returns `None` for an empty or unparseable time, which
    /// callers treat as "no period selected yet".
    pub fn from_time(time: &str) -> Option<Self> {
        let hour: u32 = time.split(':').next()?.parse().ok()?;
        if hour < 16 {
            Some(Period::Lunch)
        } else {
            Some(Period::Dinner)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Lunch => "中餐",
            Period::Dinner => "晚餐",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Period;

    #[test]
    fn morning_and_midday_times_are_lunch() {
        assert_eq!(Period::from_time("09:00"), Some(Period::Lunch));
        assert_eq!(Period::from_time("11:30"), Some(Period::Lunch));
        assert_eq!(Period::from_time("15:59"), Some(Period::Lunch));
    }

    #[test]
    fn sixteen_hundred_and_later_is_dinner() {
        assert_eq!(Period::from_time("16:00"), Some(Period::Dinner));
        assert_eq!(Period::from_time("18:45"), Some(Period::Dinner));
        assert_eq!(Period::from_time("23:59"), Some(Period::Dinner));
    }

    #[test]
    fn empty_or_garbled_time_yields_no_period() {
        assert_eq!(Period::from_time(""), None);
        assert_eq!(Period::from_time("noon"), None);
    }

    #[test]
    fn serializes_as_chinese_labels() {
        assert_eq!(serde_json::to_string(&Period::Lunch).unwrap(), "\"中餐\"");
        assert_eq!(
            serde_json::from_str::<Period>("\"晚餐\"").unwrap(),
            Period::Dinner
        );
    }
}
