use std::cell::RefCell;
use std::rc::Rc;

use interact_rs::api::{InteractionEngine, InteractionEngineConfig};
use interact_rs::core::{
    DataPoint, LinearScale, RegionMode, Series, SeriesId, SeriesSet, Surface,
};
use interact_rs::extensions::{InteractionEvent, InteractionObserver, ObserverContext};
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

/// x scale maps 0..10 onto 1000px, y scale 0..2000 onto 400px.
fn build_multi_engine(series: SeriesSet) -> (InteractionEngine<NullRenderer, LinearScale>, Events) {
    let x_scale = LinearScale::new(0.0, 10.0, 1000.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 2000.0, 400.0).expect("y scale");
    let config = InteractionEngineConfig::new(Surface::new(1000, 400))
        .with_layout(RegionMode::MultiSeries);
    let mut engine = InteractionEngine::new(NullRenderer::default(), x_scale, y_scale, config)
        .expect("engine init");
    engine.set_series(series).expect("set series");

    let events: Events = Rc::new(RefCell::new(Vec::new()));
    engine.register_observer(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));
    (engine, events)
}

fn two_series() -> SeriesSet {
    let mut set = SeriesSet::new();
    set.insert(
        "alpha",
        Series::from_values(vec![100.0, 200.0]).with_x_values(vec![2.0, 8.0]),
    );
    set.insert(
        "beta",
        Series::from_values(vec![1000.0, 1900.0]).with_x_values(vec![2.0, 8.0]),
    );
    set
}

#[test]
fn pointer_on_a_point_resolves_it_and_fires_over() {
    let (mut engine, events) = build_multi_engine(two_series());

    // beta[1] projects to (800, 380).
    engine.pointer_move(801.0, 379.0);

    assert_eq!(
        engine.hovered_point(),
        Some(DataPoint::new(SeriesId(1), 1, 8.0, 1900.0))
    );
    let recorded = events.borrow().clone();
    assert_eq!(
        recorded,
        vec![
            InteractionEvent::Over(DataPoint::new(SeriesId(1), 1, 8.0, 1900.0)),
            InteractionEvent::TooltipShown {
                index: 1,
                series: None
            },
        ]
    );
}

#[test]
fn equidistant_points_resolve_to_the_first_declared_series() {
    let mut set = SeriesSet::new();
    set.insert(
        "alpha",
        Series::from_values(vec![500.0]).with_x_values(vec![5.0]),
    );
    set.insert(
        "beta",
        Series::from_values(vec![500.0]).with_x_values(vec![5.0]),
    );
    let (mut engine, _events) = build_multi_engine(set);

    engine.pointer_move(500.0, 100.0);

    assert_eq!(engine.hovered_point().map(|point| point.series), Some(SeriesId(0)));
}

#[test]
fn far_pointer_shows_tooltip_without_over() {
    let (mut engine, events) = build_multi_engine(two_series());

    // Closest is beta[1] at (800, 380), but the pointer is ~30px away,
    // beyond the 10px sensitivity radius.
    engine.pointer_move(800.0, 350.0);

    assert_eq!(engine.hovered_point(), None);
    let recorded = events.borrow().clone();
    assert_eq!(
        recorded,
        vec![InteractionEvent::TooltipShown {
            index: 1,
            series: None
        }]
    );
}

#[test]
fn moving_between_points_fires_out_before_over() {
    let (mut engine, events) = build_multi_engine(two_series());

    engine.pointer_move(801.0, 379.0);
    events.borrow_mut().clear();

    // alpha[0] projects to (200, 20).
    engine.pointer_move(201.0, 21.0);

    let recorded = events.borrow().clone();
    assert_eq!(
        recorded,
        vec![
            InteractionEvent::Out(DataPoint::new(SeriesId(1), 1, 8.0, 1900.0)),
            InteractionEvent::Over(DataPoint::new(SeriesId(0), 0, 2.0, 100.0)),
            InteractionEvent::TooltipShown {
                index: 0,
                series: None
            },
        ]
    );
}

#[test]
fn empty_dataset_resolves_to_nothing() {
    let (mut engine, events) = build_multi_engine(SeriesSet::new());

    engine.pointer_move(500.0, 200.0);

    assert_eq!(engine.hovered_point(), None);
    assert!(events.borrow().is_empty());
}

#[test]
fn hidden_series_are_skipped_by_resolution() {
    let (mut engine, events) = build_multi_engine(two_series());
    engine
        .set_series_visible("beta", false)
        .expect("toggle visibility");
    events.borrow_mut().clear();

    // On top of the hidden beta[1]; alpha[1] at (800, 40) wins instead.
    engine.pointer_move(800.0, 380.0);

    assert_eq!(
        engine.hovered_point().map(|point| point.series),
        None,
        "alpha[1] is 340px away, outside sensitivity"
    );
    let recorded = events.borrow().clone();
    assert_eq!(
        recorded,
        vec![InteractionEvent::TooltipShown {
            index: 1,
            series: None
        }]
    );
}

#[test]
fn ungrouped_tooltip_targets_the_closest_shape_only() {
    let set = two_series();
    let x_scale = LinearScale::new(0.0, 10.0, 1000.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 2000.0, 400.0).expect("y scale");
    let config = InteractionEngineConfig::new(Surface::new(1000, 400))
        .with_layout(RegionMode::MultiSeries)
        .with_tooltip(interact_rs::api::TooltipBehavior { grouped: false });
    let mut engine = InteractionEngine::new(NullRenderer::default(), x_scale, y_scale, config)
        .expect("engine init");
    engine.set_series(set).expect("set series");
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    engine.register_observer(Box::new(RecordingObserver {
        events: Rc::clone(&events),
    }));

    engine.pointer_move(801.0, 379.0);

    let recorded = events.borrow().clone();
    assert_eq!(
        recorded,
        vec![
            InteractionEvent::Over(DataPoint::new(SeriesId(1), 1, 8.0, 1900.0)),
            InteractionEvent::TooltipShown {
                index: 1,
                series: Some(SeriesId(1))
            },
        ]
    );
}
