//! Scroll Simulation Demo
//!
//! Drives a sticky panel over the mock sidebar page and prints where the
//! panel ends up after each window event.
//!
//! Run with: RUST_LOG=sticky_panel=trace cargo run --example scroll_simulation

use sticky_panel::prelude::*;
use tracing_subscriber::EnvFilter;

const MEDIA: &str = "screen and (min-width: 600px)";

fn report(panel: &StickyPanel<MockDom>, event: &str) {
    let style = panel.host().style_of("sticky").unwrap_or_default();
    let style = if style.is_released() {
        "(in flow)".to_string()
    } else {
        style.to_string()
    };
    println!("   {event:<22} {:<34} {style}", format!("{:?}", panel.placement()));
}

fn run(title: &str, panel_height: f64, steps: &[f64]) -> StickyResult<()> {
    println!("\n{title}");
    println!("{}", "─".repeat(title.chars().count()));

    let config = StickyConfig::new(".sticky-panel")
        .with_media_query(MEDIA)
        .with_container_class("side-1")
        .with_top_space(10.0);
    let mut panel = StickyPanel::new(config, MockDom::sidebar_page(panel_height))?;
    panel.mount()?;
    report(&panel, "mount");

    for &y in steps {
        panel.host_mut().scroll_to(y);
        panel.on_scroll()?;
        report(&panel, &format!("scroll to {y}"));
    }

    panel.host_mut().resize(480.0, 768.0);
    let matches = panel.host().match_media(MEDIA);
    panel.on_media_query_change(matches);
    panel.on_resize()?;
    report(&panel, "resize to 480px");

    panel.host_mut().resize(1024.0, 768.0);
    let matches = panel.host().match_media(MEDIA);
    panel.on_media_query_change(matches);
    panel.on_resize()?;
    report(&panel, "resize to 1024px");

    panel.set_active(false)?;
    report(&panel, "deactivate");

    panel.unmount();
    println!("   {} style writes", panel.host().style_history().len());
    Ok(())
}

fn main() -> StickyResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sticky_panel=info")),
        )
        .with_target(false)
        .init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Sticky Panel Demo - Mock DOM Scroll Replay          ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  Sidebar container spans 120..2520px, viewport is 768px      ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    run(
        "Short panel (200px)",
        200.0,
        &[50.0, 300.0, 1200.0, 2400.0, 600.0, 0.0, 700.0],
    )?;
    run(
        "Tall panel (1000px)",
        1000.0,
        &[200.0, 400.0, 900.0, 700.0, 400.0, 300.0, 320.0, 1200.0],
    )?;
    Ok(())
}
