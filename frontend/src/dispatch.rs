//! Single entry point for UI events: queue, then drain through the page
//! transition function.

use chipin_core::models::PageEvent;
use chipin_core::{EventQueue, PageState};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct Dispatcher {
    page: Signal<PageState>,
    queue: Signal<EventQueue>,
}

impl Dispatcher {
    pub fn new(page: Signal<PageState>, queue: Signal<EventQueue>) -> Self {
        Self { page, queue }
    }

    pub fn send(&self, event: impl Into<PageEvent>) {
        let mut page = self.page;
        let mut queue = self.queue;
        let event = event.into();
        tracing::debug!(widget = event.widget(), "ui event");

        let seq = queue.write().push(event);
        let current = page.peek().clone();
        let next = {
            let mut queue = queue.write();
            let next = queue.process(&current);
            // The page never saves its log.
            queue.take_processed();
            next
        };
        tracing::trace!(seq, "page updated");
        page.set(next);
    }
}
