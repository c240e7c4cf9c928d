use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fmt;

/// A date as the feature service encodes it.
///
/// Feature payloads carry dates as epoch-milliseconds integers, while filter
/// literals (and some echoed attributes) use date-like strings. Both
/// representations normalize to the same `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    EpochMillis(i64),
    Text(String),
}

impl DateValue {
    /// Normalizes to `YYYY-MM-DD`.
    ///
    /// Epoch values are truncated to whole seconds and interpreted in UTC,
    /// never local time. Date-like strings are reformatted through the same
    /// calendar type; strings that do not parse are passed through unchanged
    /// so the raw value stays visible in the report.
    pub fn to_short_date(&self) -> String {
        match self {
            DateValue::EpochMillis(ms) => {
                let secs = ms.div_euclid(1000);
                DateTime::<Utc>::from_timestamp(secs, 0)
                    .map(|dt| dt.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| ms.to_string())
            }
            DateValue::Text(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|_| text.clone()),
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_short_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_millis_normalize_via_utc() {
        let date = DateValue::EpochMillis(1586908800000);
        assert_eq!(date.to_short_date(), "2020-04-15");
    }

    #[test]
    fn epoch_millis_truncate_sub_second_remainder() {
        let date = DateValue::EpochMillis(1586908800999);
        assert_eq!(date.to_short_date(), "2020-04-15");
    }

    #[test]
    fn text_dates_agree_with_epoch_form() {
        let epoch = DateValue::EpochMillis(1586908800000);
        let text = DateValue::Text("2020-04-15".to_string());
        assert_eq!(epoch.to_short_date(), text.to_short_date());
    }

    #[test]
    fn normalization_is_idempotent() {
        let date = DateValue::EpochMillis(1586908800000);
        let once = date.to_short_date();
        let twice = DateValue::Text(once.clone()).to_short_date();
        assert_eq!(once, twice);
    }

    #[test]
    fn unparseable_text_passes_through() {
        let date = DateValue::Text("not-a-date".to_string());
        assert_eq!(date.to_short_date(), "not-a-date");
    }

    #[test]
    fn deserializes_both_representations() {
        let epoch: DateValue = serde_json::from_str("1586908800000").unwrap();
        assert_eq!(epoch, DateValue::EpochMillis(1586908800000));

        let text: DateValue = serde_json::from_str("\"2020-04-15\"").unwrap();
        assert_eq!(text, DateValue::Text("2020-04-15".to_string()));
    }
}
