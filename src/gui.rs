//! Platform adapter: window, event loop, and pointer-event plumbing.

use cgmath::Point2;
use glium::glutin::event::{
    ElementState, Event, MouseButton, StartCause, TouchPhase, WindowEvent,
};
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::glutin::window::WindowBuilder;
use glium::glutin::ContextBuilder;
use lazy_static::lazy_static;
use send_wrapper::SendWrapper;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::badge::{Badge, BadgeConfig, PointerEvent};
use crate::render;

lazy_static! {
    static ref EVENT_LOOP: SendWrapper<RefCell<Option<EventLoop<()>>>> =
        SendWrapper::new(RefCell::new(Some(EventLoop::new())));
    pub static ref DISPLAY: SendWrapper<glium::Display> = SendWrapper::new({
        let wb = WindowBuilder::new().with_title(crate::TITLE.to_owned());
        let cb = ContextBuilder::new().with_vsync(true);
        glium::Display::new(wb, cb, EVENT_LOOP.borrow().as_ref().unwrap())
            .expect("Failed to initialize display")
    });
}

/// Opens the window and runs the badge until the window is closed.
pub fn show_gui() -> ! {
    let display = &**DISPLAY;

    // Initialize runtime data.
    let mut badge = Badge::new(BadgeConfig::default());
    let mut cursor_pos: Option<Point2<f64>> = None;
    let mut events_buffer = VecDeque::new();

    // Main loop.
    let mut next_frame_time = Instant::now();
    let ev_loop = EVENT_LOOP.borrow_mut().take().unwrap();
    ev_loop.run(move |event, _ev_loop, control_flow| {
        // Handle events.
        let mut now = Instant::now();
        let mut do_frame = false;
        match event.to_static() {
            Some(Event::NewEvents(cause)) => match cause {
                StartCause::ResumeTimeReached {
                    start: _,
                    requested_resume,
                } => {
                    now = requested_resume;
                    do_frame = true;
                }
                StartCause::Init => {
                    next_frame_time = now;
                    do_frame = true;
                }
                _ => (),
            },

            // The program is about to exit.
            Some(Event::LoopDestroyed) => (),

            // Queue the event to be handled next time we render everything.
            Some(ev) => events_buffer.push_back(ev),

            // Ignore this event.
            None => (),
        }

        if do_frame && next_frame_time <= now {
            let frame_duration = Duration::from_secs_f64(1.0 / 60.0);

            next_frame_time = now + frame_duration;
            if next_frame_time < Instant::now() {
                // Skip a frame (or several).
                next_frame_time = Instant::now() + frame_duration;
            }
            *control_flow = ControlFlow::WaitUntil(next_frame_time);

            for ev in events_buffer.drain(..) {
                match ev {
                    Event::WindowEvent { event, .. } => match event {
                        // Handle window close event.
                        WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,

                        // Handle cursor events.
                        WindowEvent::CursorMoved { position, .. } => {
                            let pos = Point2::new(position.x, position.y);
                            cursor_pos = Some(pos);
                            badge.handle_pointer(PointerEvent::Move, pos);
                        }
                        WindowEvent::CursorLeft { .. } => cursor_pos = None,

                        // Handle mouse click.
                        WindowEvent::MouseInput {
                            state,
                            button: MouseButton::Left,
                            ..
                        } => {
                            if let Some(pos) = cursor_pos {
                                let pointer_event = match state {
                                    ElementState::Pressed => PointerEvent::Down,
                                    ElementState::Released => PointerEvent::Up,
                                };
                                badge.handle_pointer(pointer_event, pos);
                            }
                        }

                        // Handle touch input.
                        WindowEvent::Touch(touch) => {
                            let pos = Point2::new(touch.location.x, touch.location.y);
                            let pointer_event = match touch.phase {
                                TouchPhase::Started => PointerEvent::Down,
                                TouchPhase::Moved => PointerEvent::Move,
                                TouchPhase::Ended | TouchPhase::Cancelled => PointerEvent::Up,
                            };
                            badge.handle_pointer(pointer_event, pos);
                        }

                        _ => (),
                    },
                    _ => (),
                }
            }

            badge.advance_animation(frame_duration);

            // Draw everything.
            let mut target = display.draw();
            render::draw_badge(&mut target, &mut badge);
            target.finish().expect("Failed to swap buffers");
        }
    })
}
