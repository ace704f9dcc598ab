//! Human-readable descriptions of the features the prediction service
//! reports in `reasons`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static DESCRIPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("reply_to_differs", "Reply-To domain is different from From domain"),
        ("return_path_differs", "Return-Path domain is different from From domain"),
        ("x_mailer_missing", "Missing X-Mailer header"),
        ("received_count", "Unusual number of Received headers"),
        (
            "spoofed_display_name",
            "Display name contains brand but domain doesn't match official",
        ),
        ("url_count", "Email contains multiple URLs"),
        ("has_ip_url", "URL uses a raw IP address"),
        ("has_shortener", "URL uses a known link shortener"),
        ("url_length_avg", "Average URL length is unusually long"),
        ("has_https", "Contains HTTPS links"),
        ("https_token", "URL contains misleading 'https' token"),
        ("has_at_in_url", "URL contains '@' symbol"),
        ("suspicious_keywords", "Email contains phishing-related keywords"),
        ("mouse_over", "Mouse-over JavaScript event detected"),
        ("popup_window", "Popup window JavaScript detected"),
        ("right_click_disabled", "Right-click is disabled in email"),
        ("iframe", "Email contains iframe"),
        ("submit_to_email", "Form submission sends data to email address"),
    ])
});

/// Описание признака, если он известен
pub fn describe(feature: &str) -> Option<&'static str> {
    DESCRIPTIONS.get(feature).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_features() {
        assert_eq!(describe("url_count"), Some("Email contains multiple URLs"));
        assert_eq!(describe("has_at_in_url"), Some("URL contains '@' symbol"));
        assert_eq!(DESCRIPTIONS.len(), 18);
    }

    #[test]
    fn test_unknown_feature() {
        assert_eq!(describe("body_entropy"), None);
        assert_eq!(describe(""), None);
    }
}
