//! Shared fixtures for integration tests.

use serde_json::{json, Value};

/// A fully populated report document, as the backend would return it.
pub fn full_report_json() -> Value {
    json!({
        "company_overview": "Acme builds rockets.",
        "products_services": [
            {"name": "Rocket", "description": "Goes up."},
            {"name": "Launch Services", "description": "Puts payloads in orbit."}
        ],
        "uniqueness": ["Reusable boosters", "Rapid turnaround"],
        "target_audience": "Space agencies and satellite operators",
        "tech_stack": ["AWS", "React", "Salesforce"],
        "swot_analysis": {
            "strengths": ["Engineering depth"],
            "weaknesses": ["Capital intensive"],
            "opportunities": ["Satellite market"],
            "threats": ["Regulation"]
        },
        "seo_metadata": {
            "title": "Acme Rockets",
            "description": "Rockets for everyone",
            "primary_keywords": ["rockets", "launch", "orbit"]
        },
        "brand_voice": "Bold and technical",
        "social_links": ["https://twitter.com/acme", "https://linkedin.com/company/acme"],
        "policies": "Standard privacy policy.",
        "contact_info": {
            "addresses": ["1 Launch Pad Rd"],
            "emails": ["hello@acme.test"],
            "phones": ["+1 555 0100"]
        }
    })
}

/// A report where every list-valued field is empty.
pub fn sparse_report_json() -> Value {
    json!({
        "company_overview": "A quiet company.",
        "products_services": [],
        "uniqueness": [],
        "target_audience": "",
        "tech_stack": [],
        "swot_analysis": {
            "strengths": [], "weaknesses": [], "opportunities": [], "threats": []
        },
        "seo_metadata": {"title": "", "description": "", "primary_keywords": []},
        "brand_voice": "",
        "social_links": [],
        "policies": "",
        "contact_info": {"addresses": [], "emails": [], "phones": []}
    })
}
