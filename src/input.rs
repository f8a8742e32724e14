//! Window input to engine interactions
//!
//! Maps `winit` window events onto [`Interaction`]s so a windowed host can
//! feed the engine directly:
//!
//! * left click, or the start of a touch, taps at that point
//! * `R` or `Space` rolls everything again
//! * `Delete` or `Backspace` removes everything

use log::trace;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::{engine::Interaction, tracking::ScreenPoint};

/// Interaction bound to a key, if any
pub fn map_key(key: KeyCode) -> Option<Interaction> {
    match key {
        KeyCode::KeyR | KeyCode::Space => Some(Interaction::Shake),
        KeyCode::Delete | KeyCode::Backspace => Some(Interaction::RemoveAll),
        _ => None,
    }
}

fn to_screen_point(position: PhysicalPosition<f64>) -> ScreenPoint {
    (position.x as f32, position.y as f32)
}

/// Tracks the cursor and turns raw window events into interactions
#[derive(Debug, Default, Clone)]
pub struct InputMapper {
    cursor: Option<ScreenPoint>,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position, in physical pixels
    pub fn cursor(&self) -> Option<ScreenPoint> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, point: ScreenPoint) {
        self.cursor = Some(point);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Tap at the cursor on a left press; nothing without a known cursor
    pub fn mouse_button(&self, state: ElementState, button: MouseButton) -> Option<Interaction> {
        match (state, button) {
            (ElementState::Pressed, MouseButton::Left) => self.cursor.map(Interaction::Tap),
            _ => None,
        }
    }

    /// Tap where a touch begins
    pub fn touch(&self, phase: TouchPhase, location: ScreenPoint) -> Option<Interaction> {
        (phase == TouchPhase::Started).then_some(Interaction::Tap(location))
    }

    /// Key presses only; releases and auto-repeat are ignored
    pub fn key(&self, state: ElementState, repeat: bool, key: PhysicalKey) -> Option<Interaction> {
        if state != ElementState::Pressed || repeat {
            return None;
        }
        match key {
            PhysicalKey::Code(code) => map_key(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<Interaction> {
        let interaction = match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(to_screen_point(*position));
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*state, *button),
            WindowEvent::Touch(touch) => self.touch(touch.phase, to_screen_point(touch.location)),
            WindowEvent::KeyboardInput { event, .. } => {
                self.key(event.state, event.repeat, event.physical_key)
            }
            _ => None,
        };
        if let Some(interaction) = &interaction {
            trace!("input mapped to {:?}", interaction);
        }
        interaction
    }
}
