//! Social sharing payloads
//!
//! Builds the "Share My Impact" text and the social-network intent links
//! from an impact summary. The summary is the conceptual share payload:
//! carbon reduction, trees equivalent, and the rank string.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ShareError;
use crate::models::ImpactSummary;

/// Fully-resolved share content for one impact summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareContent {
    pub text: String,
    pub page_url: String,
    pub twitter_url: String,
    pub facebook_url: String,
    pub linkedin_url: String,
}

/// The share message shown in the share card and passed to social intents
pub fn build_share_text(summary: &ImpactSummary) -> String {
    format!(
        "I've reduced my carbon footprint by {} kg CO₂e (equivalent to planting {} trees) with Climate Pledge! Join me in taking climate action.",
        summary.carbon_reduction_kg_per_year, summary.trees_equivalent
    )
}

/// Build share text plus Twitter/Facebook/LinkedIn intent links.
///
/// `base_url` is the public site origin the share links point back to.
pub fn build_share_content(
    summary: &ImpactSummary,
    base_url: &str,
) -> Result<ShareContent, ShareError> {
    let page_url = Url::parse(base_url).map_err(|e| ShareError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    let text = build_share_text(summary);
    let link = page_url.as_str();

    let twitter_url = Url::parse_with_params(
        "https://twitter.com/intent/tweet",
        &[("text", text.as_str()), ("url", link)],
    )
    .map_err(|e| ShareError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    let facebook_url = Url::parse_with_params(
        "https://www.facebook.com/sharer/sharer.php",
        &[("u", link), ("quote", text.as_str())],
    )
    .map_err(|e| ShareError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    let linkedin_url = Url::parse_with_params(
        "https://www.linkedin.com/sharing/share-offsite/",
        &[("url", link), ("summary", text.as_str())],
    )
    .map_err(|e| ShareError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    Ok(ShareContent {
        text,
        page_url: page_url.into(),
        twitter_url: twitter_url.into(),
        facebook_url: facebook_url.into(),
        linkedin_url: linkedin_url.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::impact::build_impact_summary;
    use crate::models::PledgeSelection;

    fn summary() -> ImpactSummary {
        let catalog = builtin_catalog();
        let selection: PledgeSelection = ["energy-1", "energy-2"].into_iter().collect();
        build_impact_summary(&catalog, &selection)
    }

    #[test]
    fn test_share_text() {
        let text = build_share_text(&summary());
        assert!(text.contains("1600 kg CO₂e"));
        assert!(text.contains("80 trees"));
    }

    #[test]
    fn test_share_links() {
        let content = build_share_content(&summary(), "http://localhost:3000").unwrap();

        assert!(content.twitter_url.starts_with("https://twitter.com/intent/tweet?"));
        assert!(content.twitter_url.contains("localhost"));
        assert!(content.facebook_url.contains("sharer.php"));
        assert!(content.linkedin_url.contains("share-offsite"));
        // Message must survive URL encoding in each intent link
        assert!(content.twitter_url.contains("carbon+footprint")
            || content.twitter_url.contains("carbon%20footprint"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = build_share_content(&summary(), "not a url").unwrap_err();
        assert!(matches!(err, ShareError::InvalidBaseUrl { .. }));
    }
}
