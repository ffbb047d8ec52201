//! Tests for the expandable container's animation lifecycle and measurement.

use std::sync::Arc;
use std::time::Duration;

use expandable_layout::prelude::*;
use parking_lot::Mutex;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Start(ExpansionStatus),
    End(ExpansionStatus),
    PreOpen,
    PreClose,
    Opened,
    Closed,
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock())
    }
}

impl ExpandableListener for Recorder {
    fn on_animation_start(&self, status: ExpansionStatus) {
        self.calls.lock().push(Call::Start(status));
    }

    fn on_animation_end(&self, status: ExpansionStatus) {
        self.calls.lock().push(Call::End(status));
    }

    fn on_pre_open(&self) {
        self.calls.lock().push(Call::PreOpen);
    }

    fn on_pre_close(&self) {
        self.calls.lock().push(Call::PreClose);
    }

    fn on_opened(&self) {
        self.calls.lock().push(Call::Opened);
    }

    fn on_closed(&self) {
        self.calls.lock().push(Call::Closed);
    }
}

fn panel() -> (ExpandableContainer, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let mut panel = ExpandableContainer::new(BoxLayout::vertical()).with_name("panel");
    panel.add_child(Spacer::new(120.0, 100.0));
    panel.set_animation_listener(&recorder);
    (panel, recorder)
}

fn settle(panel: &mut ExpandableContainer) -> usize {
    let mut frames = 0;
    while panel.is_animating() {
        panel.advance(FRAME);
        frames += 1;
        assert!(frames < 1000, "animation never finished");
    }
    frames
}

#[test]
fn test_collapse_callback_order() {
    let (mut panel, recorder) = panel();
    panel.set_interpolator(Easing::Linear);

    panel.collapse();
    assert_eq!(panel.current_status(), ExpansionStatus::Collapsing);
    assert_eq!(
        recorder.take(),
        vec![Call::Start(ExpansionStatus::Idle), Call::PreClose]
    );

    for _ in 0..3 {
        panel.advance(Duration::from_millis(50));
    }
    assert_eq!(panel.expansion(), 0.25);
    assert!(recorder.take().is_empty());

    panel.advance(Duration::from_millis(50));
    assert_eq!(
        recorder.take(),
        vec![Call::End(ExpansionStatus::Collapsing), Call::Closed]
    );
    assert_eq!(panel.expansion(), 0.0);
    assert_eq!(panel.current_status(), ExpansionStatus::Idle);
    assert_eq!(panel.visibility(), Visibility::Invisible);
    assert!(!panel.is_animating());
}

#[test]
fn test_expand_callback_order() {
    let (mut panel, recorder) = panel();
    panel.set_expanded(false, false);
    assert!(recorder.take().is_empty());

    panel.expand();
    assert_eq!(panel.current_status(), ExpansionStatus::Expanding);
    // Visibility follows the first tick, not the request.
    assert!(!panel.is_visible());
    panel.advance(FRAME);
    assert!(panel.is_visible());
    settle(&mut panel);

    assert_eq!(
        recorder.take(),
        vec![
            Call::Start(ExpansionStatus::Idle),
            Call::PreOpen,
            Call::End(ExpansionStatus::Expanding),
            Call::Opened,
        ]
    );
    assert!(panel.is_expanded());
    assert_eq!(panel.current_status(), ExpansionStatus::Idle);
}

#[test]
fn test_redundant_requests_are_silent() {
    let (mut panel, recorder) = panel();

    panel.expand();
    panel.set_expanded(true, true);
    panel.set_expanded(true, false);
    assert!(recorder.take().is_empty());
    assert!(!panel.is_animating());

    panel.set_expanded(false, false);
    panel.collapse();
    assert!(recorder.take().is_empty());
    assert_eq!(panel.current_status(), ExpansionStatus::Idle);
}

#[test]
fn test_interrupted_collapse_never_closes() {
    let (mut panel, recorder) = panel();

    panel.collapse();
    panel.advance(FRAME);
    assert!(panel.expansion() < 1.0);

    panel.expand();
    assert_eq!(panel.current_status(), ExpansionStatus::Expanding);
    settle(&mut panel);

    assert_eq!(
        recorder.take(),
        vec![
            Call::Start(ExpansionStatus::Idle),
            Call::PreClose,
            Call::Start(ExpansionStatus::Idle),
            Call::PreOpen,
            Call::End(ExpansionStatus::Expanding),
            Call::Opened,
        ]
    );
    assert!(panel.is_expanded());
}

#[test]
fn test_expand_before_first_frame_is_ignored() {
    let (mut panel, recorder) = panel();

    // No frame has run yet, so the container still reports fully expanded.
    panel.collapse();
    panel.expand();
    assert_eq!(panel.current_status(), ExpansionStatus::Collapsing);
    settle(&mut panel);

    assert_eq!(
        recorder.take(),
        vec![
            Call::Start(ExpansionStatus::Idle),
            Call::PreClose,
            Call::End(ExpansionStatus::Collapsing),
            Call::Closed,
        ]
    );
}

#[test]
fn test_toggle_round_trip() {
    let (mut panel, recorder) = panel();

    panel.toggle();
    settle(&mut panel);
    assert_eq!(panel.expansion(), 0.0);

    panel.toggle();
    settle(&mut panel);
    assert!(panel.is_expanded());

    let calls = recorder.take();
    assert_eq!(calls.len(), 8);
    assert_eq!(calls[3], Call::Closed);
    assert_eq!(calls[7], Call::Opened);
}

#[test]
fn test_toggle_mid_collapse_reverses() {
    let (mut panel, recorder) = panel();

    panel.toggle();
    panel.advance(Duration::from_millis(60));
    panel.toggle();
    assert_eq!(panel.current_status(), ExpansionStatus::Expanding);
    settle(&mut panel);

    assert!(panel.is_expanded());
    assert!(!recorder.take().contains(&Call::Closed));
}

#[test]
fn test_expansion_stays_in_range_and_monotonic() {
    let (mut panel, _recorder) = panel();

    panel.collapse();
    let mut previous = panel.expansion();
    while panel.is_animating() {
        panel.advance(FRAME);
        let current = panel.expansion();
        assert!((0.0..=1.0).contains(&current));
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn test_animation_duration_controls_frame_count() {
    let (mut panel, _recorder) = panel();
    panel.set_animation_duration(160);

    panel.collapse();
    assert_eq!(settle(&mut panel), 10);
}

#[test]
fn test_listener_sees_no_events_after_drop() {
    let (mut panel, recorder) = panel();
    let observer = Arc::downgrade(&recorder);
    drop(recorder);
    assert!(observer.upgrade().is_none());

    panel.collapse();
    settle(&mut panel);
    assert_eq!(panel.expansion(), 0.0);
    assert_eq!(panel.current_status(), ExpansionStatus::Idle);
}

#[test]
fn test_cleared_listener() {
    let (mut panel, recorder) = panel();
    panel.clear_animation_listener();

    panel.collapse();
    settle(&mut panel);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_measure_follows_expansion() {
    let (mut panel, _recorder) = panel();
    let available = Size::new(400.0, 400.0);

    assert_eq!(panel.measure(available), Size::new(120.0, 100.0));

    panel.set_expansion_immediate(0.3).unwrap();
    assert_eq!(panel.measure(available), Size::new(120.0, 30.0));
    assert_eq!(panel.child_at(0).unwrap().translation(), Point::new(0.0, -70.0));

    panel.set_expansion_immediate(0.0).unwrap();
    assert_eq!(panel.measure(available), Size::new(120.0, 0.0));
    assert_eq!(panel.child_at(0).unwrap().translation(), Point::new(0.0, -100.0));
}

#[test]
fn test_measure_rounds_visible_extent() {
    let (mut panel, _recorder) = panel();
    panel.set_expansion_immediate(0.333).unwrap();

    let measured = panel.measure(Size::new(400.0, 400.0));
    assert_eq!(measured.height, 33.0);
}

#[test]
fn test_horizontal_collapse() {
    let mut panel = ExpandableContainer::new(
        BoxLayout::horizontal().with_content_margins(ContentMargins::uniform(5.0)),
    );
    panel.set_orientation(Orientation::Horizontal);
    panel.add_child(Spacer::new(90.0, 40.0));

    panel.collapse();
    panel.advance(Duration::from_secs(1));
    assert_eq!(panel.expansion(), 0.0);

    let measured = panel.measure(Size::new(400.0, 400.0));
    assert_eq!(measured, Size::new(0.0, 50.0));
    assert_eq!(panel.child_at(0).unwrap().translation(), Point::new(-100.0, 0.0));
    assert!(panel.is_visible());
}

#[test]
fn test_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.toml");
    std::fs::write(
        &path,
        r#"
        animation_duration_ms = 32
        expanded = false
        interpolator = { easing = "linear" }
        "#,
    )
    .unwrap();

    let config = ExpandableConfig::load_toml(&path).unwrap();
    let mut panel = ExpandableContainer::from_config(&config, StackLayout::new()).unwrap();
    panel.add_child(Spacer::new(10.0, 10.0));
    assert_eq!(panel.expansion(), 0.0);

    panel.expand();
    assert_eq!(settle(&mut panel), 2);
    assert!(panel.is_expanded());
}

#[test]
fn test_tracing_output_does_not_disturb_callbacks() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let (mut panel, recorder) = panel();
        panel.collapse();
        settle(&mut panel);
        panel.measure(Size::new(100.0, 100.0));
        assert_eq!(recorder.take().len(), 4);
    });
}
