use super::RuleSet;

/// Service page source rewritten when no target is given
pub const SERVICE_PAGE_PATH: &str = "app/(layout)/service/page.tsx";

/// Printed after a successful write
pub const COMPLETION_MESSAGE: &str = "Done updating services!";

const OLD_MARKETING_COPY: &str = "Precision campaigns across paid media, social channels, and email automation. Our approach is data-driven, focusing only on verifiable ROI and audience segmentation for hyper-targeted engagement.";
const NEW_MARKETING_COPY: &str = "We don't burn your ad budget on 'brand awareness'. Every rupee comes back with friends. Google Ads, Meta Ads, LinkedIn, YouTube - we speak their language fluently. Our data-driven campaigns focus on verifiable ROI, not vanity metrics.";

const OLD_GMB_COPY: &str = "Dominate local search. We optimize your GMB profile for maximum local visibility, managing reviews, posts, and accurate data to ensure your business is the immediate, trusted choice in your service area.";
const NEW_GMB_COPY: &str = "When someone searches 'best [your service] near me', you should be the first name they see. We optimize your GMB profile for maximum local visibility, manage reviews, and ensure your business is THE trusted choice in your area. From Ranchi to Mumbai, we make you the local legend.";

/// Copy updates for the marketing and Google My Business sections
pub fn service_page_rules() -> RuleSet {
    RuleSet::new("service-page")
        // Marketing section
        .with_rule(
            r#"title: "Digital Marketing Strategy""#,
            r#"title: "Digital Marketing & Ads""#,
        )
        .with_rule(
            r#"subtitle: "Growth Arrows, Spark Trails, and Dynamic Analytics Bars.""#,
            r#"subtitle: "Every Rupee Invested Should Come Back With Friends.""#,
        )
        .with_rule(OLD_MARKETING_COPY, NEW_MARKETING_COPY)
        .with_rule(r#""Full Media Buying Strategy""#, r#""Google Ads Management""#)
        .with_rule(r#""A/B Test Funnel Setup""#, r#""Facebook/Instagram Ads""#)
        .with_rule(
            r#""Proprietary Analytics Dashboard""#,
            r#""LinkedIn & YouTube Ads""#,
        )
        .with_rule(
            r#""Monthly Performance Forecasts""#,
            r#""Retargeting Campaigns""#,
        )
        .with_rule(
            "Managed $50M+ in ad spend with an average 4x ROAS.",
            "Managed Rs50Cr+ in ad spend with average 4x ROAS.",
        )
        // Google My Business section
        .with_rule(
            r#"title: "Google My Business Mastery""#,
            r#"title: "Google My Business & Local SEO""#,
        )
        .with_rule(
            r#"subtitle: "Glowing Map, Local Highlight Pulses, and Trust Badges.""#,
            r#"subtitle: "Dominate Your Neighborhood - Then the City.""#,
        )
        .with_rule(OLD_GMB_COPY, NEW_GMB_COPY)
        .with_rule(r#""Geo-Targeted Content""#, r#""GMB Profile Optimization""#)
        .with_rule(
            r#""Review Generation Strategy""#,
            r#""Review Generation & Management""#,
        )
        .with_rule(r#""Local Citation Cleanup""#, r#""Local Citation Building""#)
        .with_rule(r#""GMB Posting Schedule""#, r#""Reputation Management""#)
}
