use std::fmt::Display;

use dioxus::logger::tracing::{error, info};

/// A live capture device that must be released explicitly.
pub trait CaptureHandle {
    fn stop_tracks(&self);
}

/// Holds at most one capture handle for the page that owns it.
#[derive(Debug)]
pub struct CameraSlot<H: CaptureHandle> {
    handle: Option<H>,
}

impl<H: CaptureHandle> Default for CameraSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: CaptureHandle> CameraSlot<H> {
    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    #[cfg(feature = "web")]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Stores a granted handle. A denied request leaves the slot
    /// disconnected and is only logged.
    pub fn connect<E: Display>(&mut self, request: Result<H, E>) -> bool {
        match request {
            Ok(handle) => {
                if let Some(prev) = self.handle.replace(handle) {
                    prev.stop_tracks();
                }
                info!("[camera] connected");
                true
            }
            Err(e) => {
                error!("[camera] error accessing camera: {e}");
                false
            }
        }
    }

    /// Stops every track of the held stream and drops the reference.
    pub fn disconnect(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop_tracks();
            info!("[camera] disconnected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone)]
    struct FakeStream {
        stops: Rc<Cell<u32>>,
    }

    impl CaptureHandle for FakeStream {
        fn stop_tracks(&self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    #[test]
    fn grant_connects_and_disconnect_releases_once() {
        let stops = Rc::new(Cell::new(0));
        let mut slot = CameraSlot::default();
        assert!(slot.connect::<String>(Ok(FakeStream { stops: stops.clone() })));
        assert!(slot.is_connected());

        slot.disconnect();
        assert!(!slot.is_connected());
        assert_eq!(stops.get(), 1);

        slot.disconnect();
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn denial_stays_disconnected() {
        let mut slot: CameraSlot<FakeStream> = CameraSlot::default();
        assert!(!slot.connect(Err("NotAllowedError")));
        assert!(!slot.is_connected());
    }

    #[test]
    fn reconnect_releases_previous_stream() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = CameraSlot::default();
        slot.connect::<String>(Ok(FakeStream { stops: first.clone() }));
        slot.connect::<String>(Ok(FakeStream { stops: second.clone() }));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }
}
