use std::cell::RefCell;
use std::rc::Rc;

use interact_rs::api::{InteractionEngine, InteractionEngineConfig};
use interact_rs::core::{AxisKind, LinearScale, SeriesSet, Surface};
use interact_rs::extensions::{InteractionEvent, InteractionObserver, ObserverContext};
use interact_rs::interaction::{InteractionMode, Modality};
use interact_rs::render::NullRenderer;

struct RecordingObserver {
    events: Rc<RefCell<Vec<InteractionEvent>>>,
}

impl InteractionObserver for RecordingObserver {
    fn id(&self) -> &str {
        "recording"
    }

    fn on_event(&mut self, event: InteractionEvent, _context: ObserverContext) {
        self.events.borrow_mut().push(event);
    }
}

type Events = Rc<RefCell<Vec<InteractionEvent>>>;

fn build_engine() -> (InteractionEngine<NullRenderer, LinearScale>, Events) {
    let x_scale = LinearScale::new(0.0, 4.0, 400.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 2000.0, 400.0).expect("y scale");
    let config =
        InteractionEngineConfig::new(Surface::new(400, 400)).with_axis(AxisKind::Categorical);
    let mut engine = InteractionEngine::new(NullRenderer::default(), x_scale, y_scale, config)
        .expect("engine init");
    engine
        .set_series(SeriesSet::from_rows(vec![
            vec![30.0, 200.0, 100.0, 400.0],
            vec![500.0, 800.0, 500.0, 2000.0],
        ]))
        .expect("set series");

    let events: Events = Rc::new(RefCell::new(Vec::new()));
    engine.register_observer(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));
    (engine, events)
}

#[test]
fn first_seen_modality_locks_hover_for_the_session() {
    let (mut engine, events) = build_engine();

    engine.pointer_move(200.0, 100.0);
    assert_eq!(engine.modality(), Some(Modality::Mouse));
    events.borrow_mut().clear();

    // Touch hover input is now ignored entirely.
    assert!(!engine.touch_start(100.0, 100.0));
    assert!(!engine.touch_move(100.0, 100.0));
    assert!(events.borrow().is_empty());

    // Mouse input keeps working.
    engine.pointer_move(100.0, 100.0);
    assert!(!events.borrow().is_empty());
}

#[test]
fn touch_first_sessions_ignore_later_mouse_hover() {
    let (mut engine, events) = build_engine();

    engine.touch_start(200.0, 100.0);
    assert_eq!(engine.modality(), Some(Modality::Touch));
    events.borrow_mut().clear();

    engine.pointer_move(100.0, 100.0);
    assert!(events.borrow().is_empty());

    engine.touch_move(100.0, 100.0);
    assert!(!events.borrow().is_empty());
}

#[test]
fn destroy_short_circuits_every_entry_point() {
    let (mut engine, events) = build_engine();

    engine.pointer_move(200.0, 100.0);
    engine.destroy();
    events.borrow_mut().clear();

    engine.pointer_move(100.0, 100.0);
    engine.pointer_out();
    engine.pointer_click(200.0, 100.0);
    let _ = engine.touch_start(200.0, 100.0);
    engine.drag_start(200.0, 100.0);
    engine.drag_end();
    engine
        .set_series(SeriesSet::from_rows(vec![vec![1.0]]))
        .expect("set series after destroy is silently ignored");

    assert!(engine.is_destroyed());
    assert!(engine.regions().is_empty());
    assert!(events.borrow().is_empty());
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn flowing_data_suppresses_hover_like_dragging() {
    let (mut engine, events) = build_engine();

    engine.set_flowing(true);
    engine.pointer_move(200.0, 100.0);
    assert!(events.borrow().is_empty());

    engine.set_flowing(false);
    engine.pointer_move(200.0, 100.0);
    assert!(!events.borrow().is_empty());
}

#[test]
fn replacing_series_rebuilds_regions_atomically() {
    let (mut engine, events) = build_engine();
    assert_eq!(engine.regions().len(), 4);

    engine
        .set_series(SeriesSet::from_rows(vec![vec![1.0, 2.0]]))
        .expect("set series");

    assert_eq!(engine.regions().len(), 2);
    assert_eq!(
        *events.borrow(),
        vec![InteractionEvent::RegionsRebuilt { count: 2 }]
    );
}

#[test]
fn a_hover_target_that_no_longer_resolves_degrades_silently() {
    let (mut engine, events) = build_engine();

    engine.pointer_move(300.0, 100.0); // hover index 3
    events.borrow_mut().clear();

    engine
        .set_series(SeriesSet::from_rows(vec![vec![1.0, 2.0]]))
        .expect("set series");

    assert_eq!(engine.hover_target(), None);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    // Only the rebuild notification fires, never an out callback.
    assert_eq!(
        *events.borrow(),
        vec![InteractionEvent::RegionsRebuilt { count: 2 }]
    );
}

#[test]
fn unknown_series_visibility_toggles_are_reported() {
    let (mut engine, _events) = build_engine();
    let changed = engine
        .set_series_visible("nope", false)
        .expect("toggle visibility");
    assert!(!changed);
}
