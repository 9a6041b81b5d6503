//! UI Labels
//!
//! Fixed display strings per locale.

use serde::Deserialize;

/// Display language of a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

/// Strings shown by the table and the status line
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub no_data: &'static str,
    /// Column headers, same order as `RECORD_FIELDS`
    pub headers: [&'static str; 7],
    pub saved: &'static str,
    pub failed: &'static str,
}

static ARABIC: Labels = Labels {
    no_data: "🚫 لا توجد بيانات",
    headers: [
        "لوحة",
        "اللون",
        "تاريخ تغيير الزيت",
        "عداد",
        "ممشى الزيت",
        "الشركة",
        "الموديل",
    ],
    saved: "تم الحفظ ✅",
    failed: "حدث خطأ",
};

static ENGLISH: Labels = Labels {
    no_data: "🚫 No data",
    headers: [
        "Plate",
        "Color",
        "Oil change date",
        "Odometer",
        "Oil mileage",
        "Make",
        "Model",
    ],
    saved: "Saved ✅",
    failed: "Something went wrong",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ar => &ARABIC,
            Locale::En => &ENGLISH,
        }
    }
}
