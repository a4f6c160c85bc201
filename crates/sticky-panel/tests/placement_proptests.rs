//! Property-based tests for sticky placement
//!
//! Scroll sequences are generated at random and replayed against a
//! `MockDom`, checking the invariants that must hold after every event.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use proptest::prelude::*;
use sticky_panel::prelude::*;

// ===== Strategy definitions =====

/// Window scroll offsets across the whole sidebar page
fn scroll_strategy() -> impl Strategy<Value = f64> {
    (0u32..3200u32).prop_map(f64::from)
}

/// A sequence of scroll positions
fn scroll_sequence_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(scroll_strategy(), 1..60)
}

/// Panels that fit in a 768px viewport
fn short_height_strategy() -> impl Strategy<Value = f64> {
    (20u32..600u32).prop_map(f64::from)
}

/// Panels taller than a 768px viewport
fn tall_height_strategy() -> impl Strategy<Value = f64> {
    (800u32..2000u32).prop_map(f64::from)
}

fn spacing_strategy() -> impl Strategy<Value = f64> {
    (0u32..60u32).prop_map(f64::from)
}

fn mounted(config: StickyConfig, height: f64) -> StickyPanel<MockDom> {
    let mut panel = StickyPanel::new(config, MockDom::sidebar_page(height)).unwrap();
    panel.mount().unwrap();
    panel
}

fn scroll(panel: &mut StickyPanel<MockDom>, y: f64) {
    panel.host_mut().scroll_to(y);
    panel.on_scroll().unwrap();
}

// ===== Engine properties =====

proptest! {
    /// Nothing sticks before the page scrolls past the panel's top
    #[test]
    fn prop_released_before_threshold(
        scroll_top in 0u32..100u32,
        top_space in spacing_strategy(),
        height in short_height_strategy(),
    ) {
        let mut engine = StickyEngine::new(Spacing::new(top_space, 0.0));
        let metrics = StickyMetrics::measure(Rect::new(0.0, 200.0, 100.0, height), 0.0, 0.0);
        let scroll_top = f64::from(scroll_top);
        let frame = Frame {
            scroll_top,
            viewport_height: 768.0,
            media_matches: true,
            sticky: Rect::new(0.0, 200.0 - scroll_top, 100.0, height),
            container: Rect::new(0.0, 200.0 - scroll_top, 100.0, 3000.0),
            ..Frame::default()
        };
        // threshold is at least 140 here
        let update = engine.update(&metrics, &frame).unwrap();
        prop_assert_eq!(update.placement, Placement::Released);
        prop_assert!(update.style.is_released());
    }

    /// A non-matching media query always releases
    #[test]
    fn prop_media_mismatch_releases(scroll_top in scroll_strategy(), height in tall_height_strategy()) {
        let mut engine = StickyEngine::new(Spacing::default());
        let metrics = StickyMetrics::measure(Rect::new(0.0, 120.0, 100.0, height), 0.0, 0.0);
        let frame = Frame {
            scroll_top,
            viewport_height: 768.0,
            media_matches: false,
            sticky: Rect::new(0.0, 120.0 - scroll_top, 100.0, height),
            container: Rect::new(0.0, 120.0 - scroll_top, 100.0, 2400.0),
            ..Frame::default()
        };
        let update = engine.update(&metrics, &frame).unwrap();
        prop_assert_eq!(update.placement, Placement::Released);
    }
}

// ===== Lifecycle properties over MockDom =====

proptest! {
    /// A short panel never sits lower than `top_space` below the viewport top
    #[test]
    fn prop_short_panel_top_bounded(
        height in short_height_strategy(),
        top_space in spacing_strategy(),
        scrolls in scroll_sequence_strategy(),
    ) {
        let mut panel = mounted(StickyConfig::new(".sticky-panel").with_top_space(top_space), height);
        for y in scrolls {
            scroll(&mut panel, y);
            if let Placement::FixedTop { top } = panel.placement() {
                prop_assert!(top <= top_space);
            }
        }
    }

    /// A fixed short panel never overhangs its container's bottom edge
    #[test]
    fn prop_short_panel_stays_in_container(
        height in short_height_strategy(),
        scrolls in scroll_sequence_strategy(),
    ) {
        let mut panel = mounted(StickyConfig::new(".sticky-panel"), height);
        for y in scrolls {
            scroll(&mut panel, y);
            if panel.placement().is_fixed() {
                let host = panel.host();
                let element = host.query_selector(".sticky-panel").unwrap();
                let sticky = host.bounding_rect(&element);
                let container = host.container_rect();
                prop_assert!(sticky.bottom() <= container.bottom() + 1e-6);
            }
        }
    }

    /// Tall panels are never fixed to both edges at once
    #[test]
    fn prop_tall_panel_flags_exclusive(
        height in tall_height_strategy(),
        bottom_space in spacing_strategy(),
        scrolls in scroll_sequence_strategy(),
    ) {
        let config = StickyConfig::new(".sticky-panel").with_bottom_space(bottom_space);
        let mut panel = mounted(config, height);
        for y in scrolls {
            scroll(&mut panel, y);
            let state = panel.scroll_state();
            prop_assert!(!(state.top_fixed && state.bottom_fixed));
            let style = panel.host().style_of("sticky").unwrap();
            prop_assert!(!(style.top.is_some() && style.bottom.is_some()));
        }
    }

    /// Scrolling back to the top always returns the panel to normal flow
    #[test]
    fn prop_scroll_home_releases(
        height in prop_oneof![short_height_strategy(), tall_height_strategy()],
        scrolls in scroll_sequence_strategy(),
    ) {
        let mut panel = mounted(StickyConfig::new(".sticky-panel"), height);
        for y in scrolls {
            scroll(&mut panel, y);
        }
        scroll(&mut panel, 0.0);
        prop_assert_eq!(panel.placement(), Placement::Released);
        prop_assert!(panel.host().style_of("sticky").unwrap().is_released());
    }

    /// Deactivating always clears the inline style, whatever came before
    #[test]
    fn prop_deactivate_releases(
        height in prop_oneof![short_height_strategy(), tall_height_strategy()],
        scrolls in scroll_sequence_strategy(),
    ) {
        let mut panel = mounted(StickyConfig::new(".sticky-panel"), height);
        for y in scrolls {
            scroll(&mut panel, y);
        }
        panel.set_active(false).unwrap();
        prop_assert!(!panel.is_stuck());
        prop_assert!(panel.host().style_of("sticky").unwrap().is_released());
    }
}

// ===== Style properties =====

proptest! {
    /// Declarations always cover the five managed properties in order
    #[test]
    fn prop_declarations_complete(top in -500.0f64..500.0, left in 0.0f64..2000.0, width in 1.0f64..800.0) {
        for style in [
            StickyStyle::fixed_top(top, left, width),
            StickyStyle::fixed_bottom(top.abs(), left, width),
            StickyStyle::parked(top),
            StickyStyle::released(),
        ] {
            let names: Vec<_> = style.declarations().iter().map(|(name, _)| *name).collect();
            prop_assert_eq!(names, vec!["top", "left", "bottom", "width", "position"]);
        }
    }
}
