//! Dismissing the modal on a pointer-down outside its content.
//!
//! The DOM specifics live in `web`; this module holds the two pieces of
//! logic that must hold on every platform: a press outside the content
//! closes exactly once, and the global listener never outlives the
//! visible modal.

/// The modal's content area.
pub trait ContentRegion {
    type Target: ?Sized;

    /// Whether `target` lies inside the content. `None` while the content is
    /// not mounted.
    fn contains(&self, target: &Self::Target) -> Option<bool>;
}

/// Closes the modal for pointer-down events outside its [`ContentRegion`].
pub struct OutsideClick<R, F> {
    region: R,
    on_close: F,
}

impl<R, F> OutsideClick<R, F>
where
    R: ContentRegion,
    F: Fn(),
{
    pub fn new(region: R, on_close: F) -> Self {
        Self { region, on_close }
    }

    /// Handle one pointer-down. Returns whether the close callback ran.
    pub fn handle(&self, target: &R::Target) -> bool {
        match self.region.contains(target) {
            Some(false) => {
                tracing::debug!("pointer-down outside modal content, closing");
                (self.on_close)();
                true
            }
            Some(true) | None => false,
        }
    }
}

/// A registered global event listener.
pub trait ListenerHandle {
    /// Unregister the listener.
    fn remove(self);
}

/// Holds at most one listener and removes it when the modal hides or the
/// slot is dropped.
pub struct ListenerSlot<H: ListenerHandle> {
    handle: Option<H>,
}

impl<H: ListenerHandle> Default for ListenerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: ListenerHandle> ListenerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Attach while `active`, detach otherwise. `attach` runs only when no
    /// listener is registered yet. Returns whether anything changed.
    pub fn sync(&mut self, active: bool, attach: impl FnOnce() -> H) -> bool {
        match (active, self.handle.is_some()) {
            (true, false) => {
                self.handle = Some(attach());
                true
            }
            (false, true) => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Remove the listener, if any.
    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
        }
    }
}

impl<H: ListenerHandle> Drop for ListenerSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Content occupying x in [10, 20); `None` mimics an unmounted node.
    struct Band(Option<(i32, i32)>);

    impl ContentRegion for Band {
        type Target = i32;

        fn contains(&self, target: &i32) -> Option<bool> {
            self.0.map(|(lo, hi)| (lo..hi).contains(target))
        }
    }

    struct CountingHandle(Rc<Cell<u32>>);

    impl ListenerHandle for CountingHandle {
        fn remove(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_outside_press_closes_once_per_event() {
        let closes = Cell::new(0);
        let dismiss = OutsideClick::new(Band(Some((10, 20))), || closes.set(closes.get() + 1));

        assert!(dismiss.handle(&5));
        assert_eq!(closes.get(), 1);
        assert!(dismiss.handle(&25));
        assert_eq!(closes.get(), 2);
    }

    #[test]
    fn test_inside_press_never_closes() {
        let closes = Cell::new(0);
        let dismiss = OutsideClick::new(Band(Some((10, 20))), || closes.set(closes.get() + 1));

        assert!(!dismiss.handle(&10));
        assert!(!dismiss.handle(&19));
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn test_unmounted_content_never_closes() {
        let closes = Cell::new(0);
        let dismiss = OutsideClick::new(Band(None), || closes.set(closes.get() + 1));

        assert!(!dismiss.handle(&0));
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn test_slot_attaches_once_and_detaches_on_hide() {
        let removed = Rc::new(Cell::new(0));
        let attached = Cell::new(0);
        let mut slot = ListenerSlot::new();

        let attach = || {
            attached.set(attached.get() + 1);
            CountingHandle(removed.clone())
        };
        assert!(slot.sync(true, attach));
        assert!(!slot.sync(true, || CountingHandle(removed.clone())));
        assert_eq!(attached.get(), 1);
        assert!(slot.is_attached());

        assert!(slot.sync(false, || CountingHandle(removed.clone())));
        assert_eq!(removed.get(), 1);
        assert!(!slot.is_attached());

        assert!(!slot.sync(false, || CountingHandle(removed.clone())));
        assert_eq!(removed.get(), 1);
    }

    #[test]
    fn test_slot_removes_on_drop() {
        let removed = Rc::new(Cell::new(0));
        {
            let mut slot = ListenerSlot::new();
            slot.sync(true, || CountingHandle(removed.clone()));
        }
        assert_eq!(removed.get(), 1);
    }
}
