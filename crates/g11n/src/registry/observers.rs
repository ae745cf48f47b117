//! Locale-change observation.
//!
//! A direct synchronous observer list rather than a general-purpose event
//! bus: one event, fired in registration order.

/// Handle returned by a subscription, used to unsubscribe.
///
/// Closures have no stable identity in Rust, so unsubscription is by handle
/// instead of by callback value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type LocaleListener = Box<dyn Fn(&str, &str) + Send + Sync>;

#[derive(Default)]
pub(crate) struct LocaleObservers {
    next_id: u64,
    listeners: Vec<(ListenerId, LocaleListener)>,
}

impl LocaleObservers {
    pub fn subscribe(&mut self, listener: impl Fn(&str, &str) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the handle was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Invoke every listener synchronously, in registration order.
    pub fn notify(&self, new_locale: &str, previous_locale: &str) {
        for (_, listener) in &self.listeners {
            listener(new_locale, previous_locale);
        }
    }
}
