//! Report value object.
//!
//! The structured document the LLM produces for one analyzed website. Every
//! field defaults to empty on deserialization so a sparse model response
//! still yields a usable report; display layers degrade empty fields to
//! placeholder text.

use serde::{Deserialize, Serialize};

/// A product or service offered by the analyzed company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductService {
    /// Name of the product or service.
    #[serde(default)]
    pub name: String,
    /// Detailed description.
    #[serde(default)]
    pub description: String,
}

/// Contact information extracted from the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Physical addresses (head office, branches).
    #[serde(default)]
    pub addresses: Vec<String>,
    /// Contact email addresses.
    #[serde(default)]
    pub emails: Vec<String>,
    /// Contact phone numbers.
    #[serde(default)]
    pub phones: Vec<String>,
}

/// Strengths/Weaknesses/Opportunities/Threats, four parallel text lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub threats: Vec<String>,
}

/// SEO insights identified from the content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    /// The primary SEO page title.
    #[serde(default)]
    pub title: String,
    /// The primary meta description.
    #[serde(default)]
    pub description: String,
    /// Top SEO keywords identified from the content.
    #[serde(default)]
    pub primary_keywords: Vec<String>,
}

/// The structured business intelligence report for one website.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// 1-2 paragraphs summarizing the company.
    #[serde(default)]
    pub company_overview: String,
    /// Products and services offered, with descriptions.
    #[serde(default)]
    pub products_services: Vec<ProductService>,
    /// Key brand differentiators.
    #[serde(default)]
    pub uniqueness: Vec<String>,
    /// Primary and secondary target customers.
    #[serde(default)]
    pub target_audience: String,
    /// Technologies, tools, or platforms identified.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// SWOT analysis of the business.
    #[serde(default)]
    pub swot_analysis: SwotAnalysis,
    /// SEO title, description and keywords.
    #[serde(default)]
    pub seo_metadata: SeoMetadata,
    /// Brand voice and tone assessment.
    #[serde(default)]
    pub brand_voice: String,
    /// Social media profile URLs found.
    #[serde(default)]
    pub social_links: Vec<String>,
    /// Summary of privacy, terms, and compliance policies.
    #[serde(default)]
    pub policies: String,
    /// Addresses, emails, and phone numbers found.
    #[serde(default)]
    pub contact_info: ContactInfo,
}
