//! SDL2 host window.
//!
//! Owns the canvas and the streaming texture the software frame is copied
//! into, translates SDL events into [`WindowEvent`]s and samples the
//! keyboard and mouse into an [`InputState`] once per frame.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::Error;
use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    /// F5
    Reset,
    /// F6
    ToggleViewMode,
    /// F12
    Screenshot,
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_ms: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, fps: u32) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_ms: 1000 / u64::from(fps.max(1)),
        }
    }

    /// Sleeps off the rest of the frame budget and returns the time since
    /// the previous call in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < self.frame_target_ms {
            std::thread::sleep(std::time::Duration::from_millis(self.frame_target_ms - delta_time));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Frames-per-second over a one second window.
#[derive(Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed_ms: u64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame. Returns the frame count once a full second has
    /// accumulated, then starts over.
    pub fn tick(&mut self, delta_ms: u64) -> Option<u32> {
        self.frames += 1;
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms >= 1000 {
            let fps = self.frames;
            self.frames = 0;
            self.elapsed_ms = 0;
            Some(fps)
        } else {
            None
        }
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: texture must drop before its creator.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, Error> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;
        let texture = Self::create_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    fn create_texture(
        creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>, Error> {
        // SAFETY: the creator is boxed, so its address is stable, and it is
        // owned by the same Window as the texture. The texture field is
        // declared first and therefore dropped first.
        let creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(creator as *const _) };
        let texture = creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(texture)
    }

    /// Drains pending SDL events.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match key {
                    Keycode::Escape | Keycode::F4 => events.push(WindowEvent::Quit),
                    Keycode::F5 => events.push(WindowEvent::Reset),
                    Keycode::F6 => events.push(WindowEvent::ToggleViewMode),
                    Keycode::F12 => events.push(WindowEvent::Screenshot),
                    _ => {}
                },
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => events.push(WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32)),
                _ => {}
            }
        }
        events
    }

    /// Snapshot of the held keys and the right-button drag position.
    pub fn sample_input(&self) -> InputState {
        let keys = self.event_pump.keyboard_state();
        let held = |code| keys.is_scancode_pressed(code);
        let mouse = self.event_pump.mouse_state();

        InputState {
            rotate_y_pos: held(Scancode::W),
            rotate_y_neg: held(Scancode::S),
            rotate_x_pos: held(Scancode::A),
            rotate_x_neg: held(Scancode::D),
            rotate_z_pos: held(Scancode::Q),
            rotate_z_neg: held(Scancode::E),
            move_forward: held(Scancode::Up),
            move_back: held(Scancode::Down),
            move_left: held(Scancode::Left),
            move_right: held(Scancode::Right),
            mouse_drag: mouse.right().then(|| (mouse.x(), mouse.y())),
        }
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), Error> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), Error> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| Error::Sdl(e.to_string()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
