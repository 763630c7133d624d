//! View model construction: the business-rule half of document synthesis.
//!
//! Everything derived from `(selection, config, metadata)` is computed here
//! once; the HTML assembly in [`crate::synthesis::document`] only walks the
//! result. Swapping the string assembly for a templating engine would not
//! touch this module.

use crate::domain::entities::{BadgeConfig, MAX_SELECTION, MIN_SELECTION, Outlet};
use crate::synthesis::logo::{self, LogoFallback};

/// Size of the fixed primary row; everything after overflows.
pub const PRIMARY_ROW_LEN: usize = 3;

/// Precondition violation of the synthesizer.
///
/// Unreachable when the selection validator is honored upstream; the check
/// exists so a missed guard fails loudly instead of producing a document
/// that breaks the showcase invariant.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("selection size {0} outside supported range {MIN_SELECTION}..={MAX_SELECTION}")]
    SelectionOutOfRange(usize),
}

/// Resolved visual for one outlet tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileLogo {
    /// Exact-match hit in the asset table.
    Asset(&'static str),
    /// Deterministic first-letter fallback.
    Fallback(LogoFallback),
}

/// One outlet, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutletTile {
    pub display_name: String,
    pub href: Option<String>,
    pub logo: TileLogo,
}

/// Everything the document renderer needs, computed once.
#[derive(Debug, Clone)]
pub struct BadgeViewModel {
    pub name: String,
    /// Displayed "as seen on N+ sites" figure.
    pub showcase_count: usize,
    /// First three tiles, rendered as the prominent row.
    pub primary: Vec<OutletTile>,
    /// Remaining zero to three tiles, rendered as the secondary row.
    pub overflow: Vec<OutletTile>,
    pub config: BadgeConfig,
}

/// Displayed site count: `max(300, count * 50)`.
///
/// A deliberately exaggerated marketing figure, monotonically increasing
/// with selection size. At the current [3, 6] bounds the floor always wins.
pub fn showcase_count(selection_len: usize) -> usize {
    (selection_len * 50).max(300)
}

impl BadgeViewModel {
    /// Builds the view model from a valid selection.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError::SelectionOutOfRange`] when the selection is
    /// outside `3..=6`; avoiding that is the caller's responsibility.
    pub fn build(
        selection: &[Outlet],
        config: &BadgeConfig,
        name: &str,
    ) -> Result<Self, SynthesisError> {
        if !(MIN_SELECTION..=MAX_SELECTION).contains(&selection.len()) {
            return Err(SynthesisError::SelectionOutOfRange(selection.len()));
        }

        let tiles: Vec<OutletTile> = selection
            .iter()
            .enumerate()
            .map(|(index, outlet)| OutletTile {
                display_name: outlet.website_name.clone(),
                href: outlet.published_url.clone(),
                logo: match logo::resolve(&outlet.website_name) {
                    Some(asset) => TileLogo::Asset(asset),
                    None => TileLogo::Fallback(logo::fallback_for(&outlet.website_name, index)),
                },
            })
            .collect();

        let overflow = tiles[PRIMARY_ROW_LEN.min(tiles.len())..].to_vec();
        let primary = tiles[..PRIMARY_ROW_LEN.min(tiles.len())].to_vec();

        Ok(Self {
            name: name.to_string(),
            showcase_count: showcase_count(selection.len()),
            primary,
            overflow,
            config: config.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlets(count: usize) -> Vec<Outlet> {
        (0..count as i64)
            .map(|id| {
                Outlet::new(
                    id,
                    format!("Outlet {id}"),
                    Some(format!("https://outlet{id}.example/story")),
                )
            })
            .collect()
    }

    #[test]
    fn test_build_rejects_out_of_range_selections() {
        let config = BadgeConfig::default();
        for count in [0, 1, 2, 7, 12] {
            let err = BadgeViewModel::build(&outlets(count), &config, "x").unwrap_err();
            assert!(matches!(err, SynthesisError::SelectionOutOfRange(n) if n == count));
        }
    }

    #[test]
    fn test_row_split_is_fixed_at_three() {
        let config = BadgeConfig::default();
        for count in 3..=6 {
            let vm = BadgeViewModel::build(&outlets(count), &config, "x").unwrap();
            assert_eq!(vm.primary.len(), count.min(3));
            assert_eq!(vm.overflow.len(), count.saturating_sub(3));
        }
    }

    #[test]
    fn test_showcase_count_floor_always_wins_at_current_bounds() {
        // 50 * 6 == 300, so every valid selection size hits the floor. If
        // the selection bounds ever change, re-derive from the formula.
        for count in 3..=6 {
            assert_eq!(showcase_count(count), 300);
        }
        assert_eq!(showcase_count(6), 300);

        // Above the floor the linear term takes over.
        assert_eq!(showcase_count(7), 350);
    }

    #[test]
    fn test_known_outlet_gets_asset_unknown_gets_fallback() {
        let config = BadgeConfig::default();
        let selection = vec![
            Outlet::new(1, "Business Insider".to_string(), None),
            Outlet::new(2, "Tiny Blog".to_string(), None),
            Outlet::new(3, "Yahoo Finance".to_string(), None),
        ];

        let vm = BadgeViewModel::build(&selection, &config, "x").unwrap();
        assert!(matches!(vm.primary[0].logo, TileLogo::Asset(_)));
        assert!(matches!(
            vm.primary[1].logo,
            TileLogo::Fallback(ref f) if f.initial == "T"
        ));
        assert!(matches!(vm.primary[2].logo, TileLogo::Asset(_)));
    }

    #[test]
    fn test_fallback_color_tracks_selection_index() {
        let config = BadgeConfig::default();
        let selection: Vec<Outlet> = (0..6)
            .map(|id| Outlet::new(id, format!("Unknown {id}"), None))
            .collect();

        let vm = BadgeViewModel::build(&selection, &config, "x").unwrap();
        let colors: Vec<&str> = vm
            .primary
            .iter()
            .chain(vm.overflow.iter())
            .map(|tile| match &tile.logo {
                TileLogo::Fallback(f) => f.color,
                TileLogo::Asset(_) => panic!("expected fallback"),
            })
            .collect();

        assert_eq!(colors, crate::synthesis::logo::FALLBACK_PALETTE);
    }
}
