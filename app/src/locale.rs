//! Display languages.
//!
//! The locale only changes presentation: message text, date rendering and
//! text direction. Stored records are never localised.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Fixed user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    VerifiedTitle,
    FailedTitle,
    FailedSubtitle,
    ErrorRequired,
    LookupBusy,
    QrScanError,
    LoginFailed,
    LoginRequired,
    StudentName,
    IssuingUniversity,
    Degree,
    Major,
    GraduationDate,
    CertificateId,
    TotalCerts,
    TotalUnis,
    TotalVerifications,
    StatusSuccess,
    StatusFailed,
    UnknownUniversity,
    Cancelled,
}

impl Locale {
    /// BCP 47 language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Ar => TextDirection::Rtl,
        }
    }

    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    pub fn text(self, text: Text) -> &'static str {
        match self {
            Self::En => english(text),
            Self::Ar => arabic(text),
        }
    }

    pub fn welcome(self, username: &str) -> String {
        match self {
            Self::En => format!("Welcome, {username}!"),
            Self::Ar => format!("مرحباً، {username}!"),
        }
    }

    pub fn verified_subtitle(self, university: &str) -> String {
        match self {
            Self::En => format!("This certificate was issued by {university}."),
            Self::Ar => format!("صدرت هذه الشهادة عن {university}."),
        }
    }

    /// Statement printed under a verified certificate.
    pub fn disclaimer(self, verified_at: DateTime<Utc>, university: &str) -> String {
        let when = verified_at.format("%Y-%m-%d %H:%M:%S UTC");
        match self {
            Self::En => format!(
                "Verified on {when} against the records of {university}. \
                 This page reflects the registry at the time of verification."
            ),
            Self::Ar => format!(
                "تم التحقق في {when} من سجلات {university}. \
                 تعكس هذه الصفحة السجل في وقت التحقق."
            ),
        }
    }

    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            Self::En => date.format("%B %-d, %Y").to_string(),
            Self::Ar => date.format("%d/%m/%Y").to_string(),
        }
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::VerifiedTitle => "Certificate Verified",
        Text::FailedTitle => "Verification Failed",
        Text::FailedSubtitle => "No certificate with this ID was found in our records.",
        Text::ErrorRequired => "Please enter a certificate ID.",
        Text::LookupBusy => "A verification is already in progress.",
        Text::QrScanError => "Could not read a QR code.",
        Text::LoginFailed => "Invalid username or password.",
        Text::LoginRequired => "Please log in as an administrator first.",
        Text::StudentName => "Student Name",
        Text::IssuingUniversity => "Issuing University",
        Text::Degree => "Degree",
        Text::Major => "Major",
        Text::GraduationDate => "Graduation Date",
        Text::CertificateId => "Certificate ID",
        Text::TotalCerts => "Total Certificates",
        Text::TotalUnis => "Total Universities",
        Text::TotalVerifications => "Total Verifications",
        Text::StatusSuccess => "Success",
        Text::StatusFailed => "Failed",
        Text::UnknownUniversity => "Unknown",
        Text::Cancelled => "Cancelled.",
    }
}

fn arabic(text: Text) -> &'static str {
    match text {
        Text::VerifiedTitle => "تم التحقق من الشهادة",
        Text::FailedTitle => "فشل التحقق",
        Text::FailedSubtitle => "لم يتم العثور على شهادة بهذا الرقم في سجلاتنا.",
        Text::ErrorRequired => "يرجى إدخال رقم الشهادة.",
        Text::LookupBusy => "عملية تحقق قيد التنفيذ بالفعل.",
        Text::QrScanError => "تعذرت قراءة رمز الاستجابة السريعة.",
        Text::LoginFailed => "اسم المستخدم أو كلمة المرور غير صحيحة.",
        Text::LoginRequired => "يرجى تسجيل الدخول كمسؤول أولاً.",
        Text::StudentName => "اسم الطالب",
        Text::IssuingUniversity => "الجامعة المانحة",
        Text::Degree => "الدرجة",
        Text::Major => "التخصص",
        Text::GraduationDate => "تاريخ التخرج",
        Text::CertificateId => "رقم الشهادة",
        Text::TotalCerts => "إجمالي الشهادات",
        Text::TotalUnis => "إجمالي الجامعات",
        Text::TotalVerifications => "إجمالي عمليات التحقق",
        Text::StatusSuccess => "نجاح",
        Text::StatusFailed => "فشل",
        Text::UnknownUniversity => "غير معروف",
        Text::Cancelled => "تم الإلغاء.",
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ar" => Ok(Self::Ar),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}
