//! Verification report formatting

use tabled::Tabled;

use super::{money, render};
use crate::config::settings::Settings;
use crate::services::{CheckSource, VerificationReport};

#[derive(Tabled)]
struct DiscrepancyRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Checked against")]
    source: &'static str,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Difference")]
    difference: String,
}

pub fn format_verification_report(report: &VerificationReport, settings: &Settings) -> String {
    let header = format!(
        "Verification for {} (partner {}): {} checks, balance {}",
        settings.partner_name(report.partner),
        report.partner,
        report.checks_run,
        money(settings, report.breakdown.balance)
    );

    if report.is_consistent() {
        return format!("{}\nOK: all figures match.", header);
    }

    let rows: Vec<_> = report
        .discrepancies
        .iter()
        .map(|d| DiscrepancyRow {
            field: d.field,
            source: match d.source {
                CheckSource::Recount => "recount",
                CheckSource::Reference => "reference",
            },
            expected: money(settings, d.expected),
            actual: money(settings, d.actual),
            difference: money(settings, d.difference()),
        })
        .collect();

    format!(
        "{}\nFound {} discrepancies:\n{}",
        header,
        report.discrepancies.len(),
        render(rows, &[2, 3, 4])
    )
}
