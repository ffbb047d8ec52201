//! Expandable Layout Basic Sample
//!
//! Headless walkthrough of an expandable panel:
//! - collapsing and expanding with lifecycle callbacks
//! - reversing a collapse half way through
//! - measuring the panel as it shrinks
//!
//! Run with: RUST_LOG=expandable_layout=debug cargo run -p expandable-layout --example basic_sample

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use expandable_layout::prelude::*;
use tracing_subscriber::EnvFilter;

/// Prints every callback it receives.
struct PrintingListener;

impl ExpandableListener for PrintingListener {
    fn on_animation_start(&self, status: ExpansionStatus) {
        println!("  animation start (was {status:?})");
    }

    fn on_animation_end(&self, status: ExpansionStatus) {
        println!("  animation end ({status:?})");
    }

    fn on_pre_open(&self) {
        println!("  pre open");
    }

    fn on_pre_close(&self) {
        println!("  pre close");
    }

    fn on_opened(&self) {
        println!("  opened");
    }

    fn on_closed(&self) {
        println!("  closed");
    }
}

/// Drive the panel with real frame time until the animation settles.
fn run_frames(panel: &mut ExpandableContainer, clock: &mut FrameClock, limit: Option<usize>) {
    let available = Size::new(320.0, 480.0);
    let mut frames = 0;
    clock.reset();
    clock.tick_now();

    while panel.is_animating() && limit.is_none_or(|limit| frames < limit) {
        thread::sleep(Duration::from_millis(16));
        panel.advance(clock.tick_now());
        let size = panel.measure(available);
        println!(
            "    frame {:>2}: expansion {:.3}, height {:>5.1}",
            clock.frame_count(),
            panel.expansion(),
            size.height
        );
        frames += 1;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = ExpandableConfig::from_toml_str(
        r#"
        animation_duration_ms = 160
        displacement = 1.0
        "#,
    )?;

    let mut panel = ExpandableContainer::from_config(
        &config,
        BoxLayout::vertical()
            .with_spacing(8.0)
            .with_content_margins(ContentMargins::uniform(12.0)),
    )?
    .with_name("details");
    panel.add_child(Spacer::new(200.0, 24.0).with_name("title"));
    panel.add_child(Spacer::new(200.0, 120.0).with_name("body"));

    let listener = Arc::new(PrintingListener);
    panel.set_animation_listener(&listener);

    let mut clock = FrameClock::new().with_max_delta(Duration::from_millis(50));

    println!("collapse:");
    panel.collapse();
    run_frames(&mut panel, &mut clock, None);

    println!("expand, then reverse after three frames:");
    panel.expand();
    run_frames(&mut panel, &mut clock, Some(3));
    panel.toggle();
    run_frames(&mut panel, &mut clock, None);

    println!("expand without animation:");
    panel.set_expanded(true, false);
    println!("  expanded: {}", panel.is_expanded());

    Ok(())
}
