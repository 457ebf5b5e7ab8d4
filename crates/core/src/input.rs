//! Input event channel between host listeners and the frame loop.
//!
//! Host event listeners hold an [`InputSender`]; the frame loop owns the
//! single [`InputReceiver`] and drains it at the start of every tick, so
//! events are applied in arrival order regardless of how many fire
//! between frames.

use crate::pointer::PointerEvent;
use crate::surface::SurfaceSize;
use crossbeam_channel::{Receiver, Sender, TryRecvError};

/// Events a host forwards to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved over the surface.
    PointerMoved(PointerEvent),
    /// The surface was resized by the host.
    Resized(SurfaceSize),
}

/// Producer half, cloned into each host event listener.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

/// Consumer half, owned by the frame loop.
#[derive(Debug)]
pub struct InputReceiver {
    rx: Receiver<InputEvent>,
}

/// Creates a connected sender/receiver pair.
pub fn input_queue() -> (InputSender, InputReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (InputSender { tx }, InputReceiver { rx })
}

impl InputSender {
    /// Queues an event. Events sent after the receiver is gone are dropped.
    pub fn send(&self, event: InputEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("input receiver dropped, discarding {event:?}");
        }
    }

    pub fn pointer_moved(&self, x: f32, y: f32, surface: SurfaceSize) {
        self.send(InputEvent::PointerMoved(PointerEvent { x, y, surface }));
    }

    pub fn resized(&self, surface: SurfaceSize) {
        self.send(InputEvent::Resized(surface));
    }
}

impl InputReceiver {
    /// Returns every queued event in arrival order without blocking.
    pub fn drain(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800, 600).unwrap()
    }

    #[test]
    fn drain_on_empty_queue_returns_nothing() {
        let (_tx, rx) = input_queue();
        assert!(rx.drain().is_empty());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let (tx, rx) = input_queue();
        tx.pointer_moved(1.0, 1.0, surface());
        tx.resized(SurfaceSize::new(10, 10).unwrap());
        tx.pointer_moved(2.0, 2.0, surface());

        let events = rx.drain();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], InputEvent::PointerMoved(e) if e.x == 1.0));
        assert!(matches!(events[1], InputEvent::Resized(_)));
        assert!(matches!(events[2], InputEvent::PointerMoved(e) if e.x == 2.0));
    }

    #[test]
    fn drain_empties_the_queue() {
        let (tx, rx) = input_queue();
        tx.pointer_moved(1.0, 1.0, surface());
        assert_eq!(rx.drain().len(), 1);
        assert!(rx.drain().is_empty());
    }

    #[test]
    fn cloned_senders_feed_the_same_receiver() {
        let (tx, rx) = input_queue();
        let tx2 = tx.clone();
        tx.pointer_moved(1.0, 1.0, surface());
        tx2.pointer_moved(2.0, 2.0, surface());
        assert_eq!(rx.drain().len(), 2);
    }

    #[test]
    fn sending_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = input_queue();
        drop(rx);
        tx.pointer_moved(1.0, 1.0, surface());
    }

    #[test]
    fn drain_after_all_senders_dropped_still_returns_queued_events() {
        let (tx, rx) = input_queue();
        tx.pointer_moved(1.0, 1.0, surface());
        drop(tx);
        assert_eq!(rx.drain().len(), 1);
    }
}
