//! Notifications seeded at startup, newest first.

use chrono::{NaiveDate, NaiveDateTime};

use super::model::{Notification, NotificationCategory};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn notification(
    id: &str,
    title: &str,
    message: &str,
    category: NotificationCategory,
    occurred_at: NaiveDateTime,
    read: bool,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        category,
        occurred_at,
        read,
    }
}

/// Returns the fixture notifications: six records, the first three unread.
pub fn default_notifications() -> Vec<Notification> {
    vec![
        notification(
            "notif_001",
            "اكتمل التحليل",
            "تم الانتهاء من تحليل 'قرار تعديل سياسة العمل عن بُعد' بنجاح",
            NotificationCategory::Analysis,
            at(2024, 1, 15, 10, 30),
            false,
        ),
        notification(
            "notif_002",
            "حالة دراسية جديدة",
            "تمت إضافة حالة دراسية جديدة: 'تطبيق نظام المشتريات الإلكتروني'",
            NotificationCategory::Case,
            at(2024, 1, 14, 15, 45),
            false,
        ),
        notification(
            "notif_003",
            "التقرير جاهز",
            "تقرير الربع الأول 2024 جاهز للتحميل",
            NotificationCategory::Report,
            at(2024, 1, 14, 9, 0),
            false,
        ),
        notification(
            "notif_004",
            "تحديث النظام",
            "تم تحديث خوارزميات التحليل لتحسين دقة النتائج",
            NotificationCategory::System,
            at(2024, 1, 13, 11, 20),
            true,
        ),
        notification(
            "notif_005",
            "تحليل يحتاج مراجعة",
            "التحليل 'اتفاقية الشراكة الاستراتيجية' يحتاج لمراجعتك",
            NotificationCategory::Analysis,
            at(2024, 1, 12, 14, 0),
            true,
        ),
        notification(
            "notif_006",
            "تذكير أمني",
            "يرجى تحديث كلمة المرور الخاصة بك خلال الأسبوع القادم",
            NotificationCategory::System,
            at(2024, 1, 11, 8, 30),
            true,
        ),
    ]
}
