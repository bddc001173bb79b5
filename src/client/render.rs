//! Terminal rendering of a report.
//!
//! Every section renders in a fixed order; list-valued fields degrade to
//! fixed placeholder sentences when empty, never to broken or missing
//! sections.

use colored::Colorize;

use crate::domain::report::Report;

use super::progress::STEPS;

/// Placeholder shown when no addresses were found.
pub const NO_ADDRESS: &str = "No address found";
/// Placeholder shown when no emails were found.
pub const NO_EMAIL: &str = "No email found";
/// Placeholder shown when no phone numbers were found.
pub const NO_PHONE: &str = "No phone found";
/// Placeholder shown when no social links were found.
pub const NO_SOCIAL_LINKS: &str = "No social links found";
/// Placeholder shown when no tech stack info was found.
pub const NO_TECH_STACK: &str = "No tech stack info found";

/// Formats one progress step for display, e.g. `[2/4] Business Analysis...`.
pub fn step_line(step: usize) -> String {
    let label = STEPS.get(step).copied().unwrap_or("");
    format!("[{}/{}] {}", step + 1, STEPS.len(), label.cyan())
}

/// Renders the full report as terminal text.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    section(&mut out, "Company Overview");
    paragraph(&mut out, &report.company_overview);

    section(&mut out, "Products & Services");
    for ps in &report.products_services {
        out.push_str(&format!("  {} - {}\n", ps.name.bold(), ps.description));
    }

    section(&mut out, "Differentiators");
    bullets(&mut out, &report.uniqueness);

    section(&mut out, "Target Audience");
    paragraph(&mut out, &report.target_audience);

    section(&mut out, "Technology Stack");
    chips(&mut out, &report.tech_stack, NO_TECH_STACK);

    section(&mut out, "SWOT Analysis");
    swot_quadrant(&mut out, "Strengths", &report.swot_analysis.strengths);
    swot_quadrant(&mut out, "Weaknesses", &report.swot_analysis.weaknesses);
    swot_quadrant(&mut out, "Opportunities", &report.swot_analysis.opportunities);
    swot_quadrant(&mut out, "Threats", &report.swot_analysis.threats);

    section(&mut out, "SEO Insights");
    out.push_str(&format!("  {} {}\n", "Meta Title:".dimmed(), report.seo_metadata.title));
    out.push_str(&format!(
        "  {} {}\n",
        "Meta Description:".dimmed(),
        report.seo_metadata.description
    ));
    out.push_str(&format!("  {}\n", "Primary Keywords:".dimmed()));
    bullets(&mut out, &report.seo_metadata.primary_keywords);

    section(&mut out, "Brand Voice");
    paragraph(&mut out, &format!("\"{}\"", report.brand_voice));

    section(&mut out, "Social Presence");
    chips(&mut out, &report.social_links, NO_SOCIAL_LINKS);

    section(&mut out, "Policies & Compliance");
    paragraph(&mut out, &report.policies);

    section(&mut out, "Contact Details");
    labeled_list(&mut out, "Locations", &report.contact_info.addresses, NO_ADDRESS);
    labeled_list(&mut out, "Emails", &report.contact_info.emails, NO_EMAIL);
    labeled_list(&mut out, "Phone Numbers", &report.contact_info.phones, NO_PHONE);

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", title.bold().underline()));
}

fn paragraph(out: &mut String, text: &str) {
    out.push_str(&format!("  {}\n", text));
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("  {} {}\n", "•".green(), item));
    }
}

/// A single line of comma-separated values, or the placeholder in italics.
fn chips(out: &mut String, items: &[String], placeholder: &str) {
    if items.is_empty() {
        out.push_str(&format!("  {}\n", placeholder.italic().dimmed()));
    } else {
        out.push_str(&format!("  {}\n", items.join(", ")));
    }
}

fn swot_quadrant(out: &mut String, label: &str, items: &[String]) {
    out.push_str(&format!("  {}\n", label.bold()));
    for item in items {
        out.push_str(&format!("    {} {}\n", "•".green(), item));
    }
}

fn labeled_list(out: &mut String, label: &str, items: &[String], placeholder: &str) {
    out.push_str(&format!("  {}\n", label.dimmed()));
    if items.is_empty() {
        out.push_str(&format!("    {}\n", placeholder.italic().dimmed()));
    } else {
        for item in items {
            out.push_str(&format!("    {}\n", item));
        }
    }
}
