//! HTML assembly for the badge document.
//!
//! Pure string building over a [`BadgeViewModel`]: no network, no storage,
//! no clocks, no randomness. Identical inputs produce byte-identical
//! documents, which golden-output tests rely on.

use std::fmt::Write as _;

use crate::domain::entities::{BadgeConfig, Layout, Outlet};
use crate::synthesis::view_model::{BadgeViewModel, OutletTile, SynthesisError, TileLogo};

/// Synthesizes the complete, self-contained badge document.
///
/// Inlined styles, inlined behavior; the only external references are the
/// resolved logo assets. Fails only on a selection outside `3..=6`.
pub fn synthesize(
    selection: &[Outlet],
    config: &BadgeConfig,
    name: &str,
) -> Result<String, SynthesisError> {
    let vm = BadgeViewModel::build(selection, config, name)?;
    Ok(render(&vm))
}

fn render(vm: &BadgeViewModel) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = write!(out, "<title>{}</title>\n", esc(&vm.name));
    out.push_str("<style>\n");
    out.push_str(&render_styles(&vm.config));
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&render_markup(vm));
    out.push_str("<script>\n");
    out.push_str(BEHAVIOR_SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");

    out
}

fn render_styles(config: &BadgeConfig) -> String {
    let mut css = String::with_capacity(2 * 1024);

    let _ = write!(
        css,
        ".tb-badge{{background:{secondary};color:{primary};border:1px solid {accent};\
border-radius:12px;padding:20px 24px;max-width:560px;margin:0 auto;\
font-family:Georgia,'Times New Roman',serif;text-align:center}}\n",
        secondary = config.secondary_color,
        primary = config.primary_color,
        accent = config.accent_color,
    );
    let _ = write!(
        css,
        ".tb-heading{{font-size:13px;letter-spacing:2px;text-transform:uppercase;\
color:{accent};margin:0 0 4px}}\n",
        accent = config.accent_color,
    );
    css.push_str(".tb-name{font-size:18px;font-weight:700;margin:0 0 12px}\n");
    let _ = write!(
        css,
        ".tb-caption{{font-size:12px;color:{primary};opacity:.7;margin:12px 0 0}}\n",
        primary = config.primary_color,
    );

    let row_display = match config.layout {
        Layout::Stacked => "flex",
        Layout::Inline => "inline-flex",
    };
    let _ = write!(
        css,
        ".tb-row{{display:{row_display};justify-content:center;align-items:center;\
flex-wrap:wrap;gap:{gap}px;margin-top:{gap}px}}\n",
        gap = config.spacing.gap(),
    );
    css.push_str(".tb-row--overflow{opacity:.85}\n");

    let tile = config.logo_size.tile_height();
    let _ = write!(
        css,
        ".tb-tile{{display:inline-flex;align-items:center;gap:8px;height:{tile}px;\
text-decoration:none;color:inherit;transition:transform .15s ease,opacity .15s ease}}\n",
    );
    css.push_str(".tb-tile--hover{transform:translateY(-2px);opacity:1}\n");
    let _ = write!(css, ".tb-logo{{height:{tile}px;width:auto;display:block}}\n");
    let _ = write!(
        css,
        ".tb-initial{{display:inline-flex;align-items:center;justify-content:center;\
width:{tile}px;height:{tile}px;border-radius:50%;color:#ffffff;font-weight:700;\
font-size:{font}px}}\n",
        font = tile / 2,
    );
    css.push_str(".tb-tile-name{font-size:13px;font-weight:600}\n");

    let _ = write!(
        css,
        ".tb-ornament{{height:1px;background:linear-gradient(90deg,transparent,{accent},transparent);\
margin:10px auto 0;width:70%}}\n",
        accent = config.accent_color,
    );
    let _ = write!(
        css,
        ".tb-verified{{display:inline-flex;align-items:center;gap:4px;font-size:11px;\
color:{accent};margin-top:8px}}\n",
        accent = config.accent_color,
    );

    css
}

fn render_markup(vm: &BadgeViewModel) -> String {
    let mut html = String::with_capacity(4 * 1024);

    html.push_str("<div class=\"tb-badge\">\n");
    html.push_str("<p class=\"tb-heading\">As Featured In</p>\n");
    let _ = write!(html, "<p class=\"tb-name\">{}</p>\n", esc(&vm.name));

    if vm.config.show_ornaments {
        html.push_str("<div class=\"tb-ornament\"></div>\n");
    }

    html.push_str(&render_row(&vm.primary, &vm.config, "tb-row"));
    if !vm.overflow.is_empty() {
        html.push_str(&render_row(
            &vm.overflow,
            &vm.config,
            "tb-row tb-row--overflow",
        ));
    }

    if vm.config.show_ornaments {
        html.push_str("<div class=\"tb-ornament\"></div>\n");
    }

    let _ = write!(
        html,
        "<p class=\"tb-caption\">as seen on {}+ sites</p>\n",
        vm.showcase_count
    );

    if vm.config.show_verified_mark {
        html.push_str(
            "<p class=\"tb-verified\"><svg width=\"12\" height=\"12\" viewBox=\"0 0 24 24\" \
fill=\"currentColor\" aria-hidden=\"true\"><path d=\"M12 0l3 4.6 5.4.9-2.5 4.9 2.5 4.9-5.4.9\
-3 4.6-3-4.6-5.4-.9 2.5-4.9-2.5-4.9 5.4-.9z\"/><path fill=\"#ffffff\" d=\"M10.6 15.5l-3-3 \
1.4-1.4 1.6 1.6 4.4-4.4 1.4 1.4z\"/></svg>Verified coverage</p>\n",
        );
    }

    html.push_str("</div>\n");
    html
}

fn render_row(tiles: &[OutletTile], config: &BadgeConfig, class: &str) -> String {
    let mut html = String::with_capacity(1024);

    let _ = write!(html, "<div class=\"{class}\">\n");
    for tile in tiles {
        html.push_str(&render_tile(tile, config));
    }
    html.push_str("</div>\n");

    html
}

fn render_tile(tile: &OutletTile, config: &BadgeConfig) -> String {
    let mut html = String::with_capacity(256);

    match &tile.href {
        Some(href) => {
            let _ = write!(
                html,
                "<a class=\"tb-tile\" href=\"{}\" target=\"_blank\" rel=\"noopener nofollow\">",
                esc(href)
            );
        }
        None => html.push_str("<span class=\"tb-tile\">"),
    }

    match &tile.logo {
        TileLogo::Asset(asset) if config.show_logos => {
            let _ = write!(
                html,
                "<img class=\"tb-logo\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                esc(asset),
                esc(&tile.display_name)
            );
        }
        TileLogo::Fallback(fallback) if config.show_logos => {
            let _ = write!(
                html,
                "<span class=\"tb-initial\" style=\"background:{}\">{}</span>\
<span class=\"tb-tile-name\">{}</span>",
                fallback.color,
                esc(&fallback.initial),
                esc(&tile.display_name)
            );
        }
        // Logos disabled: name only.
        _ => {
            let _ = write!(
                html,
                "<span class=\"tb-tile-name\">{}</span>",
                esc(&tile.display_name)
            );
        }
    }

    match &tile.href {
        Some(_) => html.push_str("</a>\n"),
        None => html.push_str("</span>\n"),
    }

    html
}

/// Pointer feedback wired without external script dependencies.
const BEHAVIOR_SCRIPT: &str = "\
(function(){\
var tiles=document.querySelectorAll('.tb-tile');\
for(var i=0;i<tiles.length;i++){\
tiles[i].addEventListener('mouseenter',function(){this.classList.add('tb-tile--hover');});\
tiles[i].addEventListener('mouseleave',function(){this.classList.remove('tb-tile--hover');});\
}\
})();\n";

/// Minimal deterministic HTML escaping.
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LogoSize;

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
    fn test_synthesize_is_total_over_valid_counts() {
        let config = BadgeConfig::default();
        for count in 3..=6 {
            let doc = synthesize(&outlets(count), &config, "Acme Corp").unwrap();
            assert!(!doc.is_empty());
            assert_eq!(doc.matches("class=\"tb-tile\"").count(), count);
        }
    }

    #[test]
    fn test_synthesize_rejects_invalid_counts() {
        let config = BadgeConfig::default();
        for count in [0, 2, 7] {
            assert!(synthesize(&outlets(count), &config, "Acme Corp").is_err());
        }
    }

    #[test]
    fn test_row_distribution() {
        let config = BadgeConfig::default();

        // Three outlets: single row, no overflow markup (the stylesheet
        // always carries the rule; only the markup is conditional).
        let doc = synthesize(&outlets(3), &config, "Acme Corp").unwrap();
        assert!(!doc.contains("class=\"tb-row tb-row--overflow\""));

        // Five outlets: 3 + 2 split.
        let doc = synthesize(&outlets(5), &config, "Acme Corp").unwrap();
        let overflow_start = doc.find("class=\"tb-row tb-row--overflow\"").unwrap();
        assert_eq!(doc[..overflow_start].matches("class=\"tb-tile\"").count(), 3);
        assert_eq!(doc[overflow_start..].matches("class=\"tb-tile\"").count(), 2);
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let config = BadgeConfig::default();
        let selection = outlets(4);

        let first = synthesize(&selection, &config, "Acme Corp").unwrap();
        let second = synthesize(&selection, &config, "Acme Corp").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_caption_uses_the_floor_at_six() {
        let config = BadgeConfig::default();
        // 6 * 50 == 300: the floor wins exactly at the upper bound.
        let doc = synthesize(&outlets(6), &config, "Acme Corp").unwrap();
        assert!(doc.contains("as seen on 300+ sites"));
    }

    #[test]
    fn test_document_is_self_contained() {
        let config = BadgeConfig::default();
        let doc = synthesize(&outlets(3), &config, "Acme Corp").unwrap();

        assert!(doc.contains("<style>"));
        assert!(doc.contains("<script>"));
        // No external stylesheet or script references.
        assert!(!doc.contains("<link"));
        assert!(!doc.contains("<script src"));
    }

    #[test]
    fn test_badge_name_is_escaped() {
        let config = BadgeConfig::default();
        let doc = synthesize(&outlets(3), &config, "<Acme> & \"Co\"").unwrap();

        assert!(doc.contains("&lt;Acme&gt; &amp; &quot;Co&quot;"));
        assert!(!doc.contains("<Acme>"));
    }

    #[test]
    fn test_config_disables_sections() {
        let config = BadgeConfig {
            show_ornaments: false,
            show_verified_mark: false,
            show_logos: false,
            ..BadgeConfig::default()
        };
        let doc = synthesize(&outlets(3), &config, "Acme Corp").unwrap();

        assert!(!doc.contains("class=\"tb-ornament\""));
        assert!(!doc.contains("class=\"tb-verified\""));
        assert!(!doc.contains("<img"));
        assert!(doc.contains("class=\"tb-tile-name\""));
    }

    #[test]
    fn test_config_colors_and_size_flow_into_styles() {
        let config = BadgeConfig {
            accent_color: "#123abc".to_string(),
            logo_size: LogoSize::Large,
            ..BadgeConfig::default()
        };
        let doc = synthesize(&outlets(3), &config, "Acme Corp").unwrap();

        assert!(doc.contains("#123abc"));
        assert!(doc.contains("height:56px"));
    }

    #[test]
    fn test_outlet_without_url_renders_span_not_anchor() {
        let config = BadgeConfig::default();
        let selection = vec![
            Outlet::new(1, "Linked".to_string(), Some("https://a.example/x".to_string())),
            Outlet::new(2, "Unlinked".to_string(), None),
            Outlet::new(3, "Also Linked".to_string(), Some("https://b.example/y".to_string())),
        ];

        let doc = synthesize(&selection, &config, "Acme Corp").unwrap();
        assert_eq!(doc.matches("<a class=\"tb-tile\"").count(), 2);
        assert_eq!(doc.matches("<span class=\"tb-tile\"").count(), 1);
    }
}
