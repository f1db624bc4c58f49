// Host-side tests for the scene and the frame driver, using an in-memory
// surface and a scripted clock.

use glam::Vec3;
use tagsphere_core::*;

#[derive(Default)]
struct RecordingSurface {
    rebuilds: Vec<usize>,
    recolors: usize,
    placed: Vec<(usize, LabelVisual, Transition)>,
    depths: Vec<(usize, i32)>,
    paused: Vec<bool>,
}

impl Surface for RecordingSurface {
    fn rebuild(&mut self, labels: &[Label]) {
        self.rebuilds.push(labels.len());
    }

    fn recolor(&mut self, _labels: &[Label]) {
        self.recolors += 1;
    }

    fn place(&mut self, index: usize, visual: &LabelVisual, transition: Transition) {
        self.placed.push((index, *visual, transition));
    }

    fn set_depth(&mut self, index: usize, depth: i32) {
        self.depths.push((index, depth));
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused.push(paused);
    }
}

struct ScriptedClock(std::vec::IntoIter<f64>);

impl ScriptedClock {
    fn every_16ms(frames: usize) -> Self {
        Self((0..frames).map(|i| i as f64 * 16.0).collect::<Vec<_>>().into_iter())
    }
}

impl FrameClock for ScriptedClock {
    fn next_frame(&mut self) -> Option<f64> {
        self.0.next()
    }
}

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scene() -> Scene {
    init_logs();
    Scene::new(SphereConfig::default(), fallback_items(), 42).unwrap()
}

fn positions(scene: &Scene) -> Vec<Vec3> {
    scene.labels().iter().map(|l| l.position).collect()
}

#[test]
fn builds_one_label_per_item() {
    let scene = scene();
    assert_eq!(scene.labels().len(), 20);
    let first = &scene.labels()[0];
    assert_eq!(first.text, "JavaScript");
    assert_eq!(first.ratio, 1.0);
    assert_eq!(first.font_size, 30.0);
    assert_eq!(first.color, PaletteName::Default.colors()[6]);
    let last = &scene.labels()[19];
    assert_eq!(last.ratio, 0.0);
    assert_eq!(last.font_size, 12.0);
}

#[test]
fn invalid_config_is_rejected() {
    init_logs();
    let config = SphereConfig {
        radius: -1.0,
        ..Default::default()
    };
    assert!(Scene::new(config, fallback_items(), 42).is_err());
}

#[test]
fn empty_data_builds_an_empty_sphere() {
    init_logs();
    let mut scene = Scene::new(SphereConfig::default(), Vec::new(), 1).unwrap();
    assert!(scene.labels().is_empty());
    scene.tick(1.0);
    let mut surface = RecordingSurface::default();
    scene.emit(&mut surface);
    assert!(surface.placed.is_empty());
}

#[test]
fn single_label_uses_middle_style() {
    init_logs();
    let scene = Scene::new(SphereConfig::default(), vec![LabelItem::new("solo", 3.0)], 1).unwrap();
    assert_eq!(scene.labels()[0].ratio, 0.5);
}

#[test]
fn reset_is_idempotent() {
    let mut scene = scene();
    for input in [
        SceneInput::DragStart { x: 0.0, y: 0.0 },
        SceneInput::DragMove { x: 25.0, y: -9.0 },
        SceneInput::DragEnd,
        SceneInput::Wheel { delta_y: -300.0 },
    ] {
        scene.apply(input);
    }
    scene.tick(3.0);

    scene.reset();
    let state = scene.motion().clone();
    let placed = positions(&scene);
    scene.reset();
    assert_eq!(*scene.motion(), state);
    assert_eq!(positions(&scene), placed);
    assert_eq!(scene.motion().state, MotionState::default());
    for label in scene.labels() {
        assert_eq!(label.position, label.home);
    }
}

#[test]
fn reset_keeps_palette() {
    let mut scene = scene();
    scene.set_palette(PaletteName::Neon);
    assert_eq!(scene.apply(Command::Reset.into()), Some(SceneChange::Rebuilt));
    assert_eq!(scene.palette(), PaletteName::Neon);
    assert!(scene
        .labels()
        .iter()
        .all(|l| PaletteName::Neon.colors().contains(&l.color)));
}

#[test]
fn palette_selection_recolors_once() {
    let mut scene = scene();
    let homes: Vec<Vec3> = scene.labels().iter().map(|l| l.home).collect();
    assert_eq!(
        scene.apply(Command::SelectPalette(PaletteName::Warm).into()),
        Some(SceneChange::Recolored)
    );
    assert_eq!(scene.apply(Command::SelectPalette(PaletteName::Warm).into()), None);
    assert_eq!(scene.labels()[0].color, PaletteName::Warm.colors()[5]);
    let after: Vec<Vec3> = scene.labels().iter().map(|l| l.home).collect();
    assert_eq!(homes, after);
}

#[test]
fn pause_command_reports_the_new_state() {
    let mut scene = scene();
    assert_eq!(
        scene.apply(Command::TogglePause.into()),
        Some(SceneChange::PauseChanged(true))
    );
    let before = positions(&scene);
    scene.tick(4.0);
    assert_eq!(positions(&scene), before);
    assert_eq!(
        scene.apply(Command::TogglePause.into()),
        Some(SceneChange::PauseChanged(false))
    );
}

#[test]
fn emit_places_every_label_and_only_changed_depths() {
    let mut scene = scene();
    let mut surface = RecordingSurface::default();
    scene.emit(&mut surface);
    assert_eq!(surface.placed.len(), 20);
    assert_eq!(surface.depths.len(), 20);

    scene.emit(&mut surface);
    assert_eq!(surface.placed.len(), 40);
    assert_eq!(surface.depths.len(), 20);

    for (i, visual, transition) in &surface.placed[..20] {
        assert_eq!(*transition, Transition::Eased { duration_ms: 150 });
        let expected = scene.labels()[*i].project(scene.config(), scene.zoom());
        assert_eq!(*visual, expected);
    }
}

#[test]
fn dragging_switches_to_immediate_transitions() {
    let mut scene = scene();
    scene.apply(SceneInput::DragStart { x: 5.0, y: 5.0 });
    let mut surface = RecordingSurface::default();
    scene.emit(&mut surface);
    assert!(surface
        .placed
        .iter()
        .all(|(_, _, t)| *t == Transition::Immediate));
}

#[test]
fn frame_timer_measures_reference_frames() {
    let mut timer = FrameTimer::new();
    assert_eq!(timer.advance(1000.0), 1.0);
    assert_eq!(timer.advance(1032.0), 2.0);
    assert_eq!(timer.advance(1020.0), 0.0);
}

#[test]
fn loop_runs_until_the_clock_is_exhausted() {
    let mut anim = AnimationLoop::new(scene(), InputQueue::new());
    let mut surface = RecordingSurface::default();
    let frames = anim.run(&mut ScriptedClock::every_16ms(5), &mut surface);
    assert_eq!(frames, 5);
    assert_eq!(surface.rebuilds, vec![20]);
    assert_eq!(surface.placed.len(), 100);
    let s = anim.scene().motion().state;
    assert!(s.angle_a > 0.0 && s.angle_b > 0.0);
}

#[test]
fn queued_input_is_applied_on_the_next_frame() {
    let mut anim = AnimationLoop::new(scene(), InputQueue::new());
    let inputs = anim.inputs();
    let mut surface = RecordingSurface::default();
    anim.frame(0.0, &mut surface);

    inputs.push(Command::TogglePause);
    inputs.push(SceneInput::Wheel { delta_y: -200.0 });
    assert_eq!(inputs.len(), 2);
    anim.frame(16.0, &mut surface);
    assert!(inputs.is_empty());
    assert_eq!(surface.paused, vec![true]);
    assert!((anim.scene().zoom() - 1.1).abs() < 1e-5);

    inputs.push(Command::SpeedUp);
    anim.frame(32.0, &mut surface);
    assert_eq!(anim.scene().motion().tuning.speed_multiplier, 1.0);

    inputs.push(Command::Reset);
    anim.frame(48.0, &mut surface);
    assert_eq!(surface.rebuilds, vec![20, 20]);
    assert_eq!(surface.paused, vec![true, false]);
    assert!(!anim.scene().motion().state.paused);
}

#[test]
fn palette_change_is_mirrored_to_the_surface() {
    let mut anim = AnimationLoop::new(scene(), InputQueue::new());
    let mut surface = RecordingSurface::default();
    anim.inputs().push(Command::SelectPalette(PaletteName::Cool));
    anim.inputs().push(Command::SelectPalette(PaletteName::Cool));
    anim.frame(0.0, &mut surface);
    assert_eq!(surface.recolors, 1);
}

#[test]
fn stopped_loop_does_nothing() {
    let mut anim = AnimationLoop::new(scene(), InputQueue::new());
    let stop = anim.stop_handle();
    let mut surface = RecordingSurface::default();
    assert!(anim.frame(0.0, &mut surface));
    stop.stop();
    assert!(anim.is_stopped());
    assert!(!anim.frame(16.0, &mut surface));
    let frames = anim.run(&mut ScriptedClock::every_16ms(3), &mut surface);
    assert_eq!(frames, 0);
    assert_eq!(surface.placed.len(), 20);
}

#[test]
fn clicked_label_pulses_for_a_short_time() {
    let mut scene = scene();
    let resting = scene.labels()[3].project(scene.config(), scene.zoom()).scale;
    assert_eq!(scene.apply(SceneInput::LabelClick { index: 3 }), None);
    assert!(scene.labels()[3].is_pulsing());
    assert!(!scene.labels()[4].is_pulsing());

    let mut surface = RecordingSurface::default();
    scene.emit(&mut surface);
    let (_, visual, _) = surface.placed[3];
    assert!((visual.scale - resting * constants::CLICK_PULSE_SCALE).abs() < 1e-4);

    // 10 reference frames = 160 ms; still pulsing
    scene.apply(Command::TogglePause.into());
    scene.tick(10.0);
    assert!(scene.labels()[3].is_pulsing());
    // another 160 ms passes the 300 ms window, paused or not
    scene.tick(10.0);
    assert!(!scene.labels()[3].is_pulsing());
    let after = scene.labels()[3].project(scene.config(), scene.zoom()).scale;
    assert!((after - resting).abs() < 1e-5);
}

#[test]
fn click_outside_the_label_set_is_ignored() {
    let mut scene = scene();
    assert_eq!(scene.apply(SceneInput::LabelClick { index: 99 }), None);
    assert!(scene.labels().iter().all(|l| !l.is_pulsing()));
}

#[test]
fn clicks_arrive_through_the_queue() {
    let mut anim = AnimationLoop::new(scene(), InputQueue::new());
    let mut surface = RecordingSurface::default();
    anim.inputs().push(SceneInput::LabelClick { index: 0 });
    anim.frame(0.0, &mut surface);
    assert!(anim.scene().labels()[0].is_pulsing());
}
