//! Mount lifecycle and scroll tracking for the content page.
//!
//! The host viewport owns the scroll signal. While mounted, the page holds
//! exactly one subscription and records the latest offset in component-local
//! state. Nothing reads the offset yet; it is the hook for a nav style change
//! past a scroll threshold.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::content::PageContent;
use crate::page::generator::PageGenerator;
use crate::page::node::Element;

pub type ScrollCallback = Box<dyn Fn(f64)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

/// Host-side scroll position signal.
pub trait Viewport {
    fn subscribe_scroll(&mut self, callback: ScrollCallback) -> SubscriptionId;

    /// Returns `false` when `id` was not subscribed.
    fn unsubscribe_scroll(&mut self, id: SubscriptionId) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

/// Live scroll subscription. Dropping it unsubscribes from the viewport.
struct Mount {
    viewport: Rc<RefCell<dyn Viewport>>,
    id: SubscriptionId,
}

impl Drop for Mount {
    fn drop(&mut self) {
        match self.viewport.try_borrow_mut() {
            Ok(mut viewport) => {
                if !viewport.unsubscribe_scroll(self.id) {
                    tracing::warn!(subscription = self.id.0, "viewport had no such scroll subscription");
                }
                tracing::debug!(subscription = self.id.0, "content page unmounted");
            }
            Err(_) => {
                tracing::warn!(subscription = self.id.0, "viewport busy, scroll subscription not removed");
            }
        }
    }
}

/// The landing page component.
///
/// While mounted the page holds its viewport handle, so unmounting (or
/// dropping the page) always unsubscribes from the viewport it mounted on.
pub struct ContentPage {
    content: PageContent,
    generator: PageGenerator,
    scroll_offset: Rc<Cell<f64>>,
    mount: Option<Mount>,
}

impl ContentPage {
    pub fn new(content: PageContent) -> Self {
        Self {
            content,
            generator: PageGenerator::new(),
            scroll_offset: Rc::new(Cell::new(0.0)),
            mount: None,
        }
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn render(&self) -> Element {
        self.generator.generate(&self.content)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.mount.is_some() {
            Lifecycle::Mounted
        } else {
            Lifecycle::Unmounted
        }
    }

    /// Latest offset reported by the viewport since the last mount.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    /// Subscribe to the viewport's scroll signal. A no-op while mounted.
    pub fn mount<V: Viewport + 'static>(&mut self, viewport: Rc<RefCell<V>>) {
        if self.mount.is_some() {
            return;
        }

        // New cell per mount; callbacks from an earlier mount keep the old one.
        let offset = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&offset);
        let id = viewport
            .borrow_mut()
            .subscribe_scroll(Box::new(move |y: f64| sink.set(y)));

        self.scroll_offset = offset;
        self.mount = Some(Mount { viewport, id });
        tracing::debug!(subscription = id.0, "content page mounted");
    }

    /// Remove the scroll subscription. A no-op while unmounted.
    pub fn unmount(&mut self) {
        self.mount = None;
    }
}

/// Single-threaded in-process viewport.
#[derive(Default)]
pub struct MemoryViewport {
    next_id: u64,
    scroll_y: f64,
    callbacks: BTreeMap<SubscriptionId, ScrollCallback>,
    subscribe_calls: usize,
    unsubscribe_calls: usize,
}

impl MemoryViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new viewport behind the shared handle `ContentPage::mount` takes.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Move the viewport and notify every subscriber.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
        for callback in self.callbacks.values() {
            callback(y);
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn active_subscriptions(&self) -> usize {
        self.callbacks.len()
    }

    pub fn subscribe_calls(&self) -> usize {
        self.subscribe_calls
    }

    pub fn unsubscribe_calls(&self) -> usize {
        self.unsubscribe_calls
    }
}

impl Viewport for MemoryViewport {
    fn subscribe_scroll(&mut self, callback: ScrollCallback) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.callbacks.insert(id, callback);
        self.subscribe_calls += 1;
        id
    }

    fn unsubscribe_scroll(&mut self, id: SubscriptionId) -> bool {
        self.unsubscribe_calls += 1;
        self.callbacks.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    #[test]
    fn test_mount_records_offset() {
        let viewport = MemoryViewport::shared();
        let mut page = ContentPage::new(sample());
        assert_eq!(page.lifecycle(), Lifecycle::Unmounted);

        page.mount(Rc::clone(&viewport));
        assert_eq!(page.lifecycle(), Lifecycle::Mounted);

        viewport.borrow_mut().scroll_to(120.0);
        viewport.borrow_mut().scroll_to(480.5);
        assert_eq!(page.scroll_offset(), 480.5);
    }

    #[test]
    fn test_unmount_stops_tracking() {
        let viewport = MemoryViewport::shared();
        let mut page = ContentPage::new(sample());

        page.mount(Rc::clone(&viewport));
        viewport.borrow_mut().scroll_to(50.0);
        page.unmount();

        viewport.borrow_mut().scroll_to(900.0);
        assert_eq!(page.lifecycle(), Lifecycle::Unmounted);
        assert_eq!(page.scroll_offset(), 50.0);
        assert_eq!(viewport.borrow().active_subscriptions(), 0);
    }

    #[test]
    fn test_double_mount_single_subscription() {
        let viewport = MemoryViewport::shared();
        let mut page = ContentPage::new(sample());

        page.mount(Rc::clone(&viewport));
        page.mount(Rc::clone(&viewport));
        assert_eq!(viewport.borrow().subscribe_calls(), 1);

        page.unmount();
        page.unmount();
        assert_eq!(viewport.borrow().unsubscribe_calls(), 1);
    }

    #[test]
    fn test_second_viewport_ignored_while_mounted() {
        let first = MemoryViewport::shared();
        let second = MemoryViewport::shared();
        let mut page = ContentPage::new(sample());

        page.mount(Rc::clone(&first));
        page.mount(Rc::clone(&second));
        assert_eq!(second.borrow().subscribe_calls(), 0);

        page.unmount();
        assert_eq!(first.borrow().active_subscriptions(), 0);
        assert_eq!(second.borrow().unsubscribe_calls(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let viewport = MemoryViewport::shared();

        for _ in 0..3 {
            let mut page = ContentPage::new(sample());
            page.mount(Rc::clone(&viewport));
            assert_eq!(viewport.borrow().active_subscriptions(), 1);
        }

        assert_eq!(viewport.borrow().active_subscriptions(), 0);
        assert_eq!(viewport.borrow().unsubscribe_calls(), 3);
    }

    #[test]
    fn test_remount_resets_offset() {
        let viewport = MemoryViewport::shared();
        let mut page = ContentPage::new(sample());

        page.mount(Rc::clone(&viewport));
        viewport.borrow_mut().scroll_to(300.0);
        page.unmount();
        page.mount(Rc::clone(&viewport));
        assert_eq!(page.scroll_offset(), 0.0);
    }
}
