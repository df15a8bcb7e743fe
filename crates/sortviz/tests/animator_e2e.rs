//! End-to-end driver scenarios: keyboard script in, sorted bars out.
//!
//! Drives [`AppModel`] through the simulator exactly as the live runtime
//! would: a resize first, then key presses and frame ticks.

use sortviz::app::{AppModel, Msg};
use sortviz::cli::Opts;
use sortviz::steppers::{Algorithm, SortOrder};
use sortviz_core::event::{Event, KeyCode, KeyEvent};
use sortviz_runtime::ProgramSimulator;

const WIDTH: u16 = 90;
const HEIGHT: u16 = 24;

fn simulator(bars: usize, seed: u64) -> ProgramSimulator<AppModel> {
    let opts = Opts {
        bars: Some(bars),
        seed: Some(seed),
        ..Opts::default()
    };
    let mut sim = ProgramSimulator::new(AppModel::new(&opts));
    sim.init();
    sim.inject_event(Event::Resize {
        width: WIDTH,
        height: HEIGHT,
    });
    sim
}

fn press(sim: &mut ProgramSimulator<AppModel>, code: KeyCode) {
    sim.inject_event(Event::Key(KeyEvent::new(code)));
}

/// Tick until the sort completes, with a generous bound.
fn run_sort(sim: &mut ProgramSimulator<AppModel>, max_ticks: usize) {
    for _ in 0..max_ticks {
        sim.inject_event(Event::Tick);
        if !sim.model().is_sorting() {
            return;
        }
    }
    panic!("sort did not finish within {max_ticks} ticks");
}

#[test]
fn each_deterministic_algorithm_sorts_to_completion() {
    for (digit, algorithm) in [
        ('1', Algorithm::Insertion),
        ('2', Algorithm::Bubble),
        ('3', Algorithm::Selection),
        ('4', Algorithm::Shell),
        ('5', Algorithm::Merge),
    ] {
        let mut sim = simulator(16, 0xFEED);
        press(&mut sim, KeyCode::Char(digit));
        assert_eq!(sim.model().algorithm(), algorithm);

        press(&mut sim, KeyCode::Char(' '));
        assert!(sim.model().is_sorting());
        run_sort(&mut sim, 5_000);

        let values = sim.model().array().values();
        assert!(
            SortOrder::Ascending.is_sorted(values),
            "{} left {:?}",
            algorithm.name(),
            values
        );
    }
}

#[test]
fn descending_order_is_honored_end_to_end() {
    let mut sim = simulator(12, 0xFACE);
    press(&mut sim, KeyCode::Char('d'));
    assert_eq!(sim.model().order(), SortOrder::Descending);

    press(&mut sim, KeyCode::Char('3'));
    press(&mut sim, KeyCode::Char(' '));
    run_sort(&mut sim, 5_000);

    let values = sim.model().array().values().to_vec();
    assert!(SortOrder::Descending.is_sorted(&values));
    assert_eq!(values.first(), Some(&12));
    assert_eq!(values.last(), Some(&1));
}

#[test]
fn bogo_terminates_on_tiny_arrays_with_fixed_seed() {
    let mut sim = simulator(3, 0xB060);
    press(&mut sim, KeyCode::Char('6'));
    press(&mut sim, KeyCode::Char(' '));
    run_sort(&mut sim, 50_000);
    assert!(SortOrder::Ascending.is_sorted(sim.model().array().values()));
}

#[test]
fn reset_regenerates_and_is_idempotent() {
    let mut sim = simulator(10, 0xAB);
    for _ in 0..5 {
        press(&mut sim, KeyCode::Char('r'));
        let mut values = sim.model().array().values().to_vec();
        values.sort_unstable();
        assert_eq!(values, (1..=10).collect::<Vec<u32>>());
        assert!(!sim.model().is_sorting());
    }
}

#[test]
fn controls_are_gated_while_sorting() {
    let mut sim = simulator(16, 0xFEED);
    press(&mut sim, KeyCode::Char('2'));
    press(&mut sim, KeyCode::Char(' '));
    assert!(sim.model().is_sorting());

    // Order, algorithm, and start are ignored while running.
    press(&mut sim, KeyCode::Char('d'));
    press(&mut sim, KeyCode::Char('5'));
    press(&mut sim, KeyCode::Char(' '));
    assert_eq!(sim.model().order(), SortOrder::Ascending);
    assert_eq!(sim.model().algorithm(), Algorithm::Bubble);
    assert!(sim.model().is_sorting());

    // Reset is not: it cancels the sort outright.
    press(&mut sim, KeyCode::Char('r'));
    assert!(!sim.model().is_sorting());
}

#[test]
fn quit_key_stops_the_program() {
    let mut sim = simulator(8, 1);
    press(&mut sim, KeyCode::Char('q'));
    assert!(!sim.is_running());
}

#[test]
fn escape_quits_mid_sort() {
    let mut sim = simulator(8, 1);
    press(&mut sim, KeyCode::Char('6'));
    press(&mut sim, KeyCode::Char(' '));
    sim.inject_event(Event::Tick);
    press(&mut sim, KeyCode::Escape);
    assert!(!sim.is_running());
}

#[test]
fn rendered_frame_shows_header_and_bars() {
    let mut sim = simulator(16, 0xFEED);
    let frame = sim.capture_frame(WIDTH, HEIGHT);

    let row0: String = (0..WIDTH)
        .map(|x| frame.get(x, 0).and_then(|c| c.ch).unwrap_or(' '))
        .collect();
    assert!(row0.contains("Bubble Sort - Ascending"), "{row0:?}");

    let blocks = frame.cells().filter(|c| c.ch == Some('█')).count();
    assert!(blocks > 0, "bars should be drawn");
}

#[test]
fn highlights_live_for_exactly_one_frame_of_steps() {
    let mut sim = simulator(16, 0xFEED);
    press(&mut sim, KeyCode::Char(' '));

    sim.inject_event(Event::Tick);
    if sim.model().is_sorting() {
        // While stepping, the last step's touched indices are highlighted.
        assert!(!sim.model().highlights().is_empty());
    }
    run_sort(&mut sim, 5_000);

    // After completion the highlight set is discarded.
    assert!(sim.model().highlights().is_empty());
}
