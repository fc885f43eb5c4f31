//! Prompts for the generative-text calls.
//!
//! Callers can override either template through
//! [`crate::config::CopywriterConfig`]; the constants here are used only when
//! no override is provided. Templates use `{title}` and `{features}`
//! placeholders.

/// Listing description prompt.
pub const DESCRIPTION_PROMPT: &str = r#"Write a persuasive and professional product description for an eBay listing.

Product Name: {title}
Key Features/Keywords: {features}

Keep it concise (approx 2-3 sentences). Focus on benefits and ease of use. Do not use markdown formatting like **bold**."#;

/// Title optimization prompt.
pub const TITLE_PROMPT: &str = r#"Optimize this eBay product title for SEO and click-through rate. Keep it under 80 characters if possible, but prioritize keywords.

Current Title: {title}

Return ONLY the optimized title text."#;

/// System message shared by both calls.
pub const SYSTEM_PROMPT: &str =
    "You are an experienced e-commerce copywriter. Output plain text only, with no commentary.";

/// Fill the description template.
pub fn description_prompt(template: Option<&str>, title: &str, features: &str) -> String {
    template
        .unwrap_or(DESCRIPTION_PROMPT)
        .replace("{title}", title)
        .replace("{features}", features)
}

/// Fill the title template.
pub fn title_prompt(template: Option<&str>, title: &str) -> String {
    template.unwrap_or(TITLE_PROMPT).replace("{title}", title)
}
