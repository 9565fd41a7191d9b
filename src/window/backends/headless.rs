use std::collections::VecDeque;
use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

/// A window without any OS resources. Every call to `poll_events` delivers the next
/// scripted frame of events, if any.
pub struct HeadlessVisitor {
    dimensions: Vector2<u32>,
    device_pixel_ratio: f32,
    frames: VecDeque<Vec<Event>>,
}

impl HeadlessVisitor {
    pub fn new(dimensions: Vector2<u32>) -> Self {
        HeadlessVisitor {
            dimensions,
            device_pixel_ratio: 1.0,
            frames: VecDeque::new(),
        }
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Queues the events of one frame.
    pub fn with_frame<T: IntoIterator<Item = Event>>(mut self, events: T) -> Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.dimensions
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        if let Some(frame) = self.frames.pop_front() {
            for v in frame {
                if let Event::Window(WindowEvent::Resized(w, h)) = v {
                    let dpr = self.device_pixel_ratio;
                    self.dimensions = Vector2::new((w as f32 / dpr) as u32, (h as f32 / dpr) as u32);
                }

                events.push(v);
            }
        }
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn get_proc_address(&self, _: &str) -> *const c_void {
        ::std::ptr::null()
    }
}
