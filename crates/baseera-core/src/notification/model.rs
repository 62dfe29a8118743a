//! Notification record model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What a notification is about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationCategory {
    Analysis,
    Case,
    Report,
    System,
}

impl NotificationCategory {
    /// Display label shown next to the notification.
    pub fn label(self) -> &'static str {
        match self {
            Self::Analysis => "تحليل",
            Self::Case => "حالة دراسية",
            Self::Report => "تقرير",
            Self::System => "النظام",
        }
    }
}

/// A unit of user-facing alert content with a read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub occurred_at: NaiveDateTime,
    pub read: bool,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in NotificationCategory::iter() {
            let parsed = NotificationCategory::from_str(&category.to_string()).unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_serde_is_snake_case() {
        let json = serde_json::to_string(&NotificationCategory::Analysis).unwrap();
        assert_eq!(json, "\"analysis\"");
    }
}
