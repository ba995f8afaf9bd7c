use crate::glutils::log_opengl_info;
use sdl2::event::{Event, WindowEvent};
use sdl2::video::{GLProfile, SwapInterval};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoEvent {
    /// Window close button or any other quit request.
    Quit,
    /// Any other input; the viewer doesn't react to it.
    Other,
}

impl From<&Event> for IoEvent {
    fn from(event: &Event) -> Self {
        match event {
            Event::Quit { .. }
            | Event::Window {
                win_event: WindowEvent::Close,
                ..
            } => IoEvent::Quit,
            _ => IoEvent::Other,
        }
    }
}

pub struct System {
    // only held to keep SDL and the GL context alive
    _sdl_context: sdl2::Sdl,
    _video_subsystem: sdl2::VideoSubsystem,
    _gl_ctx: sdl2::video::GLContext,
    window: sdl2::video::Window,
    event_pump: sdl2::EventPump,
}

impl System {
    pub fn new(title: &str, w: usize, h: usize) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .position_centered()
            .opengl()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building OpenGL window: {e}")),
        };

        let gl_ctx = window.gl_create_context()?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        // the frame clock paces the loop, not the display
        if let Err(e) = video_subsystem.gl_set_swap_interval(SwapInterval::Immediate) {
            log::warn!("can't disable vsync: {e}");
        }
        unsafe { gl::Viewport(0, 0, w as i32, h as i32) };
        log_opengl_info();

        let event_pump = sdl_context.event_pump()?;

        Ok(System {
            _sdl_context: sdl_context,
            _video_subsystem: video_subsystem,
            _gl_ctx: gl_ctx,
            window,
            event_pump,
        })
    }

    /// Drains every queued event without blocking.
    pub fn poll_events(&mut self) -> Vec<IoEvent> {
        self.event_pump
            .poll_iter()
            .map(|event| IoEvent::from(&event))
            .collect()
    }

    pub fn swap_window(&self) {
        self.window.gl_swap_window();
    }
}
