//! Sample historical cases.

use super::model::{CaseOutcome, HistoricalCase, Sector};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_cases() -> Vec<HistoricalCase> {
    vec![
        HistoricalCase {
            id: "case_001".to_string(),
            title: "تطبيق نظام العمل المرن".to_string(),
            entity: "وزارة الموارد البشرية".to_string(),
            year: 2021,
            similarity: 87,
            outcome: CaseOutcome::Success,
            key_lesson: "التطبيق التدريجي مع فترة تجريبية قلل المقاومة الداخلية".to_string(),
            category: "سياسات".to_string(),
            sector: Sector::Government,
            description: "تحويل جزء من الوظائف إلى نظام العمل المرن بعد دراسة أثر شاملة"
                .to_string(),
            challenges: strings(&["مقاومة بعض الإدارات", "قياس الإنتاجية عن بعد"]),
            lessons_learned: strings(&[
                "إشراك الموظفين في التصميم",
                "وضع مؤشرات أداء واضحة قبل الإطلاق",
            ]),
            tags: strings(&["عمل عن بعد", "موارد بشرية"]),
        },
        HistoricalCase {
            id: "case_002".to_string(),
            title: "إلغاء بدل السكن المفاجئ".to_string(),
            entity: "هيئة حكومية".to_string(),
            year: 2019,
            similarity: 72,
            outcome: CaseOutcome::Failed,
            key_lesson: "غياب التواصل المسبق أدى إلى ردة فعل إعلامية سلبية".to_string(),
            category: "موارد بشرية".to_string(),
            sector: Sector::Government,
            description: "قرار بإلغاء بدل السكن دون فترة انتقالية تم التراجع عنه لاحقاً"
                .to_string(),
            challenges: strings(&["تسرب الخبر للإعلام", "اعتراضات قانونية"]),
            lessons_learned: strings(&["فترة انتقالية إلزامية", "خطة تواصل قبل الإعلان"]),
            tags: strings(&["بدلات", "سمعة"]),
        },
        HistoricalCase {
            id: "case_003".to_string(),
            title: "تطبيق نظام المشتريات الإلكتروني".to_string(),
            entity: "شركة المياه الوطنية".to_string(),
            year: 2022,
            similarity: 64,
            outcome: CaseOutcome::Mixed,
            key_lesson: "نجح النظام تقنياً لكن التدريب غير الكافي أبطأ التبني".to_string(),
            category: "إداري".to_string(),
            sector: Sector::SemiGov,
            description: "أتمتة دورة المشتريات بالكامل واستبدال النماذج الورقية".to_string(),
            challenges: strings(&["تكامل مع الأنظمة القديمة", "تدريب الموردين"]),
            lessons_learned: strings(&["التدريب جزء من المشروع لا ملحق به"]),
            tags: strings(&["تحول رقمي", "مشتريات"]),
        },
        HistoricalCase {
            id: "case_004".to_string(),
            title: "سياسة الإفصاح عن تعارض المصالح".to_string(),
            entity: "بنك تجاري".to_string(),
            year: 2020,
            similarity: 58,
            outcome: CaseOutcome::Success,
            key_lesson: "وضوح الصياغة القانونية منع التفسيرات المتضاربة".to_string(),
            category: "سياسات".to_string(),
            sector: Sector::Private,
            description: "إلزام الموظفين بإفصاح سنوي عن المصالح المالية".to_string(),
            challenges: strings(&["حساسية البيانات الشخصية"]),
            lessons_learned: strings(&["مراجعة قانونية مبكرة", "نماذج إفصاح مبسطة"]),
            tags: strings(&["حوكمة", "امتثال"]),
        },
        HistoricalCase {
            id: "case_005".to_string(),
            title: "دمج إدارتي الخدمات المساندة".to_string(),
            entity: "أمانة منطقة".to_string(),
            year: 2018,
            similarity: 41,
            outcome: CaseOutcome::Failed,
            key_lesson: "الدمج دون إعادة توصيف الوظائف خلق ازدواجية في المهام".to_string(),
            category: "إداري".to_string(),
            sector: Sector::Government,
            description: "دمج إدارتين لتقليل التكاليف التشغيلية".to_string(),
            challenges: strings(&["ازدواجية الصلاحيات", "انخفاض الرضا الوظيفي"]),
            lessons_learned: strings(&["إعادة توصيف الوظائف قبل الدمج"]),
            tags: strings(&["هيكلة", "تكاليف"]),
        },
    ]
}
