//! Plain-text rendering of application output.

use std::io::{self, Write};

use certify_admin::AdminError;
use certify_app::{AppError, CertificateView, Dashboard, Locale, Text};
use certify_types::{Certificate, University, VerificationStatus};
use certify_verification::VerificationError;

/// User-facing description of an error in the current locale.
pub fn describe(err: &AppError, locale: Locale) -> String {
    match err {
        AppError::Verification(VerificationError::Required) => {
            locale.text(Text::ErrorRequired).to_string()
        }
        AppError::Verification(VerificationError::NotFound { .. }) => format!(
            "{} {}",
            locale.text(Text::FailedTitle),
            locale.text(Text::FailedSubtitle)
        ),
        AppError::Verification(VerificationError::LookupInFlight) => {
            locale.text(Text::LookupBusy).to_string()
        }
        AppError::Verification(VerificationError::Scan(e)) => {
            format!("{} ({e})", locale.text(Text::QrScanError))
        }
        AppError::Admin(AdminError::InvalidCredentials) => {
            locale.text(Text::LoginFailed).to_string()
        }
        AppError::Admin(AdminError::NotLoggedIn) => locale.text(Text::LoginRequired).to_string(),
        other => other.to_string(),
    }
}

pub fn view(out: &mut impl Write, view: &CertificateView, locale: Locale) -> io::Result<()> {
    writeln!(out, "{}", locale.text(Text::VerifiedTitle))?;
    writeln!(out, "{}", locale.verified_subtitle(&view.university.name))?;
    for (label, value) in view.fields(locale) {
        writeln!(out, "  {label}: {value}")?;
    }
    writeln!(out, "{}", view.disclaimer(locale))
}

pub fn universities(out: &mut impl Write, universities: &[University]) -> io::Result<()> {
    for u in universities {
        writeln!(out, "{:<16} {:<40} {}", u.id, u.name, u.country)?;
    }
    Ok(())
}

pub fn certificates(out: &mut impl Write, certificates: &[Certificate]) -> io::Result<()> {
    for c in certificates {
        writeln!(
            out,
            "{:<28} {:<24} {:<16} {}",
            c.id, c.student_name, c.university_id, c.graduation_date
        )?;
    }
    Ok(())
}

pub fn stats(out: &mut impl Write, dash: &Dashboard, locale: Locale) -> io::Result<()> {
    writeln!(out, "{}", locale.welcome(&dash.username))?;
    writeln!(
        out,
        "  {}: {}",
        locale.text(Text::TotalCerts),
        dash.stats.total_certificates
    )?;
    writeln!(
        out,
        "  {}: {}",
        locale.text(Text::TotalUnis),
        dash.stats.total_universities
    )?;
    writeln!(
        out,
        "  {}: {}",
        locale.text(Text::TotalVerifications),
        dash.stats.total_verifications
    )?;
    for row in &dash.certificates {
        writeln!(
            out,
            "  {:<28} {:<24} {}",
            row.id,
            row.student_name,
            row.university_label(locale)
        )?;
    }
    Ok(())
}

pub fn logs(out: &mut impl Write, dash: &Dashboard, locale: Locale) -> io::Result<()> {
    for row in &dash.logs {
        let status = match row.status {
            VerificationStatus::Success => locale.text(Text::StatusSuccess),
            VerificationStatus::Failed => locale.text(Text::StatusFailed),
        };
        writeln!(
            out,
            "{:<12} {:<28} {} {:<8} {}",
            row.short_id, row.certificate_id, row.timestamp, status, row.ip_address
        )?;
    }
    Ok(())
}
