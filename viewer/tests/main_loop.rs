use backend::frame::Frame;
use backend::system::IoEvent;
use resources::{Catalog, Image};
use std::collections::VecDeque;
use viewer::app::{run, Host};
use viewer::{Board, GameState, Settings, ViewerError};

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Poll,
    Wait,
    Present,
}

/// Plays back one batch of events per poll; once the script runs out every
/// poll reports a quit so a broken loop can't spin forever.
struct ScriptedHost {
    script: VecDeque<Vec<IoEvent>>,
    steps: Vec<Step>,
    presented: Vec<Frame>,
    fail_present: bool,
}

impl ScriptedHost {
    fn new(script: Vec<Vec<IoEvent>>) -> Self {
        Self {
            script: script.into(),
            steps: Vec::new(),
            presented: Vec::new(),
            fail_present: false,
        }
    }

    fn count(&self, step: Step) -> usize {
        self.steps.iter().filter(|s| **s == step).count()
    }
}

impl Host for ScriptedHost {
    fn poll_events(&mut self) -> Vec<IoEvent> {
        self.steps.push(Step::Poll);
        self.script.pop_front().unwrap_or_else(|| vec![IoEvent::Quit])
    }

    fn wait_frame(&mut self) {
        self.steps.push(Step::Wait);
    }

    fn present(&mut self, frame: &Frame) -> Result<(), ViewerError> {
        self.steps.push(Step::Present);
        if self.fail_present {
            return Err(ViewerError::Backend("swap failed".to_string()));
        }
        self.presented.push(frame.clone());
        Ok(())
    }
}

fn settings() -> Settings {
    Settings {
        window_size: 64,
        ..Settings::default()
    }
}

fn catalog() -> Catalog {
    Catalog::build(8, |_| Ok(Image::solid(4, 4, [20, 30, 40, 255]))).unwrap()
}

#[test]
fn quit_before_the_first_frame_draws_nothing() {
    let mut host = ScriptedHost::new(vec![vec![IoEvent::Quit]]);
    let frames = run(&mut host, &settings(), &catalog(), &GameState::new()).unwrap();

    assert_eq!(frames, 0);
    assert_eq!(host.steps, vec![Step::Poll]);
}

#[test]
fn each_iteration_polls_waits_then_presents() {
    let mut host = ScriptedHost::new(vec![vec![], vec![IoEvent::Other], vec![IoEvent::Quit]]);
    let frames = run(&mut host, &settings(), &catalog(), &GameState::new()).unwrap();

    assert_eq!(frames, 2);
    assert_eq!(
        host.steps,
        vec![
            Step::Poll,
            Step::Wait,
            Step::Present,
            Step::Poll,
            Step::Wait,
            Step::Present,
            Step::Poll,
        ]
    );
}

#[test]
fn quit_in_a_batch_stops_after_the_batch() {
    let mut host = ScriptedHost::new(vec![
        vec![IoEvent::Other],
        vec![IoEvent::Other, IoEvent::Quit, IoEvent::Other],
    ]);
    let frames = run(&mut host, &settings(), &catalog(), &GameState::new()).unwrap();

    assert_eq!(frames, 1);
    assert_eq!(host.count(Step::Wait), 1);
    assert_eq!(host.count(Step::Present), 1);
}

#[test]
fn unchanged_board_gives_identical_frames() {
    let mut host = ScriptedHost::new(vec![vec![], vec![], vec![]]);
    run(&mut host, &settings(), &catalog(), &GameState::new()).unwrap();

    assert_eq!(host.presented.len(), 3);
    assert!(host.presented.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn empty_board_shows_only_squares() {
    let mut host = ScriptedHost::new(vec![vec![]]);
    run(&mut host, &settings(), &catalog(), &Board::empty()).unwrap();

    let frame = &host.presented[0];
    let [light, dark] = settings().square_colors;
    for r in 0..8 {
        for c in 0..8 {
            let expected = if (r + c) % 2 == 0 { light } else { dark };
            assert_eq!(frame.pixel(c * 8 + 4, r * 8 + 4), expected, "square ({r}, {c})");
        }
    }
}

#[test]
fn present_failure_ends_the_loop() {
    let mut host = ScriptedHost::new(vec![vec![], vec![]]);
    host.fail_present = true;
    let err = run(&mut host, &settings(), &catalog(), &GameState::new()).unwrap_err();

    assert!(matches!(err, ViewerError::Backend(_)));
    assert_eq!(host.count(Step::Present), 1);
}
