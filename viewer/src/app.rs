use crate::board::BoardSource;
use crate::config::Settings;
use crate::error::ViewerError;
use crate::render::draw_game_state;
use backend::clock::FrameClock;
use backend::frame::Frame;
use backend::presenter::FramePresenter;
use backend::system::{IoEvent, System};
use log::{debug, info};
use resources::Catalog;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

impl LoopState {
    /// Only a quit request changes anything; `Stopped` is final.
    pub fn on_event(self, event: IoEvent) -> LoopState {
        match (self, event) {
            (LoopState::Running, IoEvent::Quit) => LoopState::Stopped,
            (state, _) => state,
        }
    }
}

/// The platform side of the loop.
pub trait Host {
    /// Everything queued since the last call, without blocking.
    fn poll_events(&mut self) -> Vec<IoEvent>;

    /// Blocks until the next frame is due.
    fn wait_frame(&mut self);

    fn present(&mut self, frame: &Frame) -> Result<(), ViewerError>;
}

/// SDL2 window with a GL presenter and a frame clock.
pub struct WindowHost {
    // dropped before the GL context it lives in
    presenter: FramePresenter,
    clock: FrameClock,
    system: System,
}

impl WindowHost {
    pub fn open(settings: &Settings) -> Result<WindowHost, ViewerError> {
        let size = settings.window_size;
        let system = System::new(&settings.title, size, size).map_err(ViewerError::Backend)?;
        let presenter = FramePresenter::new(size, size).map_err(ViewerError::Backend)?;
        Ok(WindowHost {
            presenter,
            clock: FrameClock::new(settings.max_fps),
            system,
        })
    }
}

impl Host for WindowHost {
    fn poll_events(&mut self) -> Vec<IoEvent> {
        self.system.poll_events()
    }

    fn wait_frame(&mut self) {
        let elapsed = self.clock.tick();
        debug!("frame time {elapsed:?}");
    }

    fn present(&mut self, frame: &Frame) -> Result<(), ViewerError> {
        self.presenter.draw(frame).map_err(ViewerError::Backend)?;
        self.system.swap_window();
        Ok(())
    }
}

/// Redraws `game` until the host reports a quit request. Returns the number
/// of frames presented.
pub fn run<H, B>(
    host: &mut H,
    settings: &Settings,
    catalog: &Catalog,
    game: &B,
) -> Result<u64, ViewerError>
where
    H: Host,
    B: BoardSource + ?Sized,
{
    let mut frame = Frame::new(settings.window_size, settings.window_size, settings.background);
    let mut state = LoopState::Running;
    let mut frames = 0;
    info!("entering main loop at {} fps", settings.max_fps);

    while state == LoopState::Running {
        for event in host.poll_events() {
            state = state.on_event(event);
        }
        if state == LoopState::Stopped {
            break;
        }

        draw_game_state(&mut frame, settings, catalog, game)?;
        host.wait_frame();
        host.present(&frame)?;
        frames += 1;
    }

    info!("window closed after {frames} frames");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_stops_a_running_loop() {
        assert_eq!(LoopState::Running.on_event(IoEvent::Quit), LoopState::Stopped);
    }

    #[test]
    fn other_input_is_ignored() {
        assert_eq!(LoopState::Running.on_event(IoEvent::Other), LoopState::Running);
    }

    #[test]
    fn stopped_is_final() {
        for event in [IoEvent::Quit, IoEvent::Other] {
            assert_eq!(LoopState::Stopped.on_event(event), LoopState::Stopped);
        }
    }
}
