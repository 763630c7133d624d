//! Embed surface derivation.
//!
//! Both outputs are pure functions of `(public base URL, badge id)`; no
//! other state affects their shape.

/// The externally-facing script reference a publisher pastes into a page.
pub fn embed_code(public_base_url: &str, badge_id: i64) -> String {
    format!(
        "<script src=\"{}/trust-badges/{}.js\" async></script>",
        public_base_url.trim_end_matches('/'),
        badge_id
    )
}

/// Direct link to the rendered preview document.
pub fn preview_url(public_base_url: &str, badge_id: i64) -> String {
    format!(
        "{}/trust-badges/{}/preview",
        public_base_url.trim_end_matches('/'),
        badge_id
    )
}
