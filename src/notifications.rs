use std::fmt;
use std::rc::Rc;

use crate::components::ui::ToastVariant;

/// Button rendered inside a toast next to its text.
#[derive(Clone)]
pub struct NotificationAction {
    pub label: String,
    pub handler: Rc<dyn Fn()>,
}

impl NotificationAction {
    #[allow(dead_code)]
    pub fn new(label: impl Into<String>, handler: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Rc::new(handler),
        }
    }

    pub fn invoke(&self) {
        (self.handler)()
    }
}

impl PartialEq for NotificationAction {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && Rc::ptr_eq(&self.handler, &other.handler)
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    /// Assigned by the queue on enqueue, used as the render key.
    pub id: u64,
    pub title: Option<String>,
    /// One rendered paragraph per line.
    pub description: Option<Vec<String>>,
    pub action: Option<NotificationAction>,
    pub variant: ToastVariant,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, lines: Vec<String>) -> Self {
        self.description = Some(lines);
        self
    }
}

// The booking flow only raises plain confirmations.
#[allow(dead_code)]
impl Notification {
    pub fn action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Ordered list of visible toasts. Nothing expires on its own; entries leave
/// only through [`NotificationQueue::dismiss`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, mut notification: Notification) {
        notification.id = self.next_id;
        self.next_id += 1;
        tracing::debug!(
            "Enqueue notification {}: {:?}",
            notification.id,
            notification.title
        );
        self.items.push(notification);
    }

    /// Removes the toast at `index`; later toasts shift down by one.
    /// Returns `None` and leaves the queue untouched when out of range.
    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        if index >= self.len() {
            tracing::debug!(
                "Ignoring dismiss of index {index}, only {} notifications",
                self.len()
            );
            return None;
        }
        let removed = self.items.remove(index);
        tracing::debug!("Dismissed notification {}", removed.id);
        Some(removed)
    }

    /// Current index of the toast with `id`, if it is still queued.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|n| n.id == id)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn queue_of(titles: &[&str]) -> NotificationQueue {
        let mut queue = NotificationQueue::new();
        for title in titles {
            queue.enqueue(Notification::new().title(*title));
        }
        queue
    }

    fn titles(queue: &NotificationQueue) -> Vec<&str> {
        queue
            .items()
            .iter()
            .filter_map(|n| n.title.as_deref())
            .collect()
    }

    #[test]
    fn test_enqueue_appends_in_order() {
        let mut queue = queue_of(&["a", "b"]);
        queue.enqueue(Notification::new().title("a"));
        assert_eq!(titles(&queue), ["a", "b", "a"]);
        let ids: Vec<_> = queue.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn test_dismiss_removes_only_that_position() {
        let mut queue = queue_of(&["a", "b", "c", "d"]);
        let removed = queue.dismiss(1).expect("index 1 exists");
        assert_eq!(removed.title.as_deref(), Some("b"));
        assert_eq!(titles(&queue), ["a", "c", "d"]);

        queue.dismiss(2);
        assert_eq!(titles(&queue), ["a", "c"]);
        queue.dismiss(0);
        assert_eq!(titles(&queue), ["c"]);
    }

    #[test]
    fn test_dismiss_out_of_range_is_noop() {
        let mut queue = queue_of(&["a", "b"]);
        assert!(queue.dismiss(2).is_none());
        assert!(queue.dismiss(usize::MAX).is_none());
        assert_eq!(titles(&queue), ["a", "b"]);

        let mut empty = NotificationQueue::new();
        assert!(empty.dismiss(0).is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_ids_keep_increasing_after_dismiss() {
        let mut queue = queue_of(&["a", "b"]);
        queue.dismiss(1);
        queue.enqueue(Notification::new().title("c"));
        let ids: Vec<_> = queue.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, [0, 2]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_position_follows_earlier_dismissals() {
        let mut queue = queue_of(&["a", "b", "c"]);
        let last = queue.items()[2].id;
        assert_eq!(queue.position(last), Some(2));

        queue.dismiss(0);
        assert_eq!(queue.position(last), Some(1));
        let index = queue.position(last).expect("still queued");
        queue.dismiss(index);
        assert_eq!(titles(&queue), ["b"]);
        assert_eq!(queue.position(last), None);
    }

    #[test]
    fn test_action_handler_runs() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let action = NotificationAction::new("Undo", move || counter.set(counter.get() + 1));
        let notification = Notification::new()
            .title("Heads up")
            .variant(ToastVariant::Destructive)
            .action(action.clone());

        notification.action.as_ref().unwrap().invoke();
        action.invoke();
        assert_eq!(clicks.get(), 2);
        assert_eq!(notification.action, Some(action));
    }
}
