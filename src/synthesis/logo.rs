//! Logo resolution for outlet tiles.
//!
//! Two independent algorithms live here and must stay independent:
//!
//! - [`resolve`]: exact-match lookup used by the document synthesizer.
//! - [`infer_from_domain`]: best-effort inference used only by the generic
//!   catalog listing, never by the synthesizer.

/// Static outlet name → logo asset table.
///
/// Keys are exact display names as they appear in report rows. No fuzzy
/// matching.
const LOGO_ASSETS: &[(&str, &str)] = &[
    ("AP News", "https://assets.prbadge.io/logos/ap-news.svg"),
    ("Associated Press", "https://assets.prbadge.io/logos/ap-news.svg"),
    ("Benzinga", "https://assets.prbadge.io/logos/benzinga.svg"),
    ("Bloomberg", "https://assets.prbadge.io/logos/bloomberg.svg"),
    ("Business Insider", "https://assets.prbadge.io/logos/business-insider.svg"),
    ("CBS News", "https://assets.prbadge.io/logos/cbs-news.svg"),
    ("Digital Journal", "https://assets.prbadge.io/logos/digital-journal.svg"),
    ("Forbes", "https://assets.prbadge.io/logos/forbes.svg"),
    ("Fox News", "https://assets.prbadge.io/logos/fox-news.svg"),
    ("Globe and Mail", "https://assets.prbadge.io/logos/globe-and-mail.svg"),
    ("International Business Times", "https://assets.prbadge.io/logos/ibtimes.svg"),
    ("MarketWatch", "https://assets.prbadge.io/logos/marketwatch.svg"),
    ("Marketwired", "https://assets.prbadge.io/logos/marketwired.svg"),
    ("NBC News", "https://assets.prbadge.io/logos/nbc-news.svg"),
    ("Reuters", "https://assets.prbadge.io/logos/reuters.svg"),
    ("Seeking Alpha", "https://assets.prbadge.io/logos/seeking-alpha.svg"),
    ("StreetInsider", "https://assets.prbadge.io/logos/streetinsider.svg"),
    ("TechCrunch", "https://assets.prbadge.io/logos/techcrunch.svg"),
    ("The Street", "https://assets.prbadge.io/logos/thestreet.svg"),
    ("USA Today", "https://assets.prbadge.io/logos/usa-today.svg"),
    ("Yahoo Finance", "https://assets.prbadge.io/logos/yahoo-finance.svg"),
    ("Yahoo News", "https://assets.prbadge.io/logos/yahoo-news.svg"),
];

/// Fixed fallback palette, applied by tile index modulo its length.
pub const FALLBACK_PALETTE: &[&str] = &[
    "#4f46e5", "#0891b2", "#059669", "#d97706", "#dc2626", "#7c3aed",
];

/// Exact-match logo lookup for the synthesizer.
///
/// Returns `None` for unknown outlets; callers render the deterministic
/// fallback from [`fallback_for`].
pub fn resolve(website_name: &str) -> Option<&'static str> {
    LOGO_ASSETS
        .iter()
        .find(|(name, _)| *name == website_name)
        .map(|(_, asset)| *asset)
}

/// Deterministic fallback tile for an unresolved outlet.
///
/// A pure function of `(name, index)`: the first character of the name,
/// uppercased, on the palette color at `index % palette length`. Never
/// randomized, so generated documents are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoFallback {
    pub initial: String,
    pub color: &'static str,
}

pub fn fallback_for(website_name: &str, index: usize) -> LogoFallback {
    let initial = website_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    LogoFallback {
        initial,
        color: FALLBACK_PALETTE[index % FALLBACK_PALETTE.len()],
    }
}

/// Best-effort logo inference from a derived domain.
///
/// Used only by the generic outlet display in the catalog listing. Matches
/// the asset table by comparing the domain's registrable label against a
/// slugified asset name; misses simply yield `None`.
pub fn infer_from_domain(domain: &str) -> Option<&'static str> {
    let label = domain.split('.').next()?;
    if label.is_empty() {
        return None;
    }

    LOGO_ASSETS
        .iter()
        .find(|(name, _)| slug(name) == label)
        .map(|(_, asset)| *asset)
}

fn slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}
