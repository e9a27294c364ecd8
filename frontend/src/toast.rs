use crate::config::Config;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(Config::toast_duration_ms()),
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }
}

#[derive(Clone, Debug)]
struct Shown {
    toast: Toast,
    elapsed_ms: u32,
}

/// Shared handle to the notifications currently on screen.
///
/// Clones point at the same queue, so controllers and the rendering layer
/// can each hold one. Toasts with a duration leave the queue once it has
/// elapsed: in the browser a timer dismisses them, elsewhere the host calls
/// [`ToastQueue::advance`].
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Rc<RefCell<Vec<Shown>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, toast: Toast) -> Uuid {
        let id = toast.id;
        let duration = toast.duration;
        self.toasts.borrow_mut().push(Shown {
            toast,
            elapsed_ms: 0,
        });
        if let Some(duration_ms) = duration {
            self.schedule_dismiss(id, duration_ms);
        }
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid, duration_ms: u32) {
        let toasts = Rc::downgrade(&self.toasts);
        gloo_timers::callback::Timeout::new(duration_ms, move || {
            if let Some(toasts) = toasts.upgrade() {
                toasts.borrow_mut().retain(|shown| shown.toast.id != id);
            }
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid, _duration_ms: u32) {}

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(Toast::new(message.into(), ToastType::Success))
    }

    /// Errors stay a little longer than the default.
    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(Toast::new(message.into(), ToastType::Error).with_duration(8000))
    }

    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut toasts = self.toasts.borrow_mut();
        let before = toasts.len();
        toasts.retain(|shown| shown.toast.id != id);
        toasts.len() != before
    }

    /// Counts `elapsed_ms` against every timed toast and drops the expired
    /// ones. Returns how many were removed.
    pub fn advance(&self, elapsed_ms: u32) -> usize {
        let mut toasts = self.toasts.borrow_mut();
        let before = toasts.len();
        toasts.retain_mut(|shown| {
            shown.elapsed_ms = shown.elapsed_ms.saturating_add(elapsed_ms);
            shown
                .toast
                .duration
                .map_or(true, |duration| shown.elapsed_ms < duration)
        });
        before - toasts.len()
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts
            .borrow()
            .iter()
            .map(|shown| shown.toast.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.borrow().last().map(|shown| shown.toast.clone())
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clones_share_the_queue() {
        let queue = ToastQueue::new();
        let handle = queue.clone();
        let id = handle.error("Unable to reach the server");

        assert_eq!(queue.len(), 1);
        let toast = queue.last().unwrap();
        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.duration, Some(8000));

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(handle.is_empty());
    }

    #[test]
    fn test_timed_toasts_expire() {
        let queue = ToastQueue::new();
        queue.success("Match submitted");
        queue.error("Unable to reach the server");
        queue.push(Toast::new("Read me".to_string(), ToastType::Info).persistent());

        assert_eq!(queue.advance(4999), 0);
        assert_eq!(queue.advance(1), 1);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.advance(3000), 1);
        let left: Vec<String> = queue.snapshot().into_iter().map(|t| t.message).collect();
        assert_eq!(left, vec!["Read me"]);

        assert_eq!(queue.advance(u32::MAX), 0);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_persistent_toast_has_no_duration() {
        let toast = Toast::new("Saved".to_string(), ToastType::Success).persistent();
        assert_eq!(toast.duration, None);
    }
}
