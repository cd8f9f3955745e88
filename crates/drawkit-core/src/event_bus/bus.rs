//! Synchronous publish/subscribe hub.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::events::{EditorEvent, EventCategory, ListEvent, ListId};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Which events a subscriber wants
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Any event in one of these categories
    Categories(Vec<EventCategory>),
    /// Every event concerning one list
    List(ListId),
    /// Only the move-up/move-down requests of one item slot
    ListItem { list: ListId, unordered: usize },
}

impl EventFilter {
    pub fn matches(&self, event: &EditorEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
            EventFilter::List(list) => event.list() == Some(*list),
            EventFilter::ListItem { list, unordered } => {
                let (target, index) = match event {
                    EditorEvent::List(ListEvent::MoveUpRequested {
                        list: target,
                        unordered: index,
                    })
                    | EditorEvent::List(ListEvent::MoveDownRequested {
                        list: target,
                        unordered: index,
                    }) => (*target, *index),
                    _ => return false,
                };
                target == *list && index == *unordered
            }
        }
    }
}

type Handler = Box<dyn Fn(EditorEvent) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Record published events, heard or not
    pub enable_history: bool,
    pub max_history_size: usize,
    /// Recorded events older than this are discarded
    pub history_retention: Duration,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            enable_history: false,
            max_history_size: 1000,
            history_retention: Duration::from_secs(300),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Delivers [`EditorEvent`]s to subscribers on the publishing thread.
///
/// Subscribers are called in subscription order while the subscriber table
/// is read-locked, so a handler must not subscribe or unsubscribe on the
/// same bus.
pub struct EventBus {
    subscribers: RwLock<Vec<Subscriber>>,
    history: Mutex<VecDeque<(Instant, EditorEvent)>>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            history: Mutex::new(VecDeque::new()),
            config,
        }
    }

    /// Sends `event` to every subscriber whose filter accepts it.
    ///
    /// Returns how many handlers ran, or `NoSubscribers` when the bus has
    /// none at all. History, when enabled, records the event either way.
    pub fn publish(&self, event: EditorEvent) -> Result<usize, EventBusError> {
        if self.config.enable_history {
            self.record(&event);
        }
        tracing::trace!("Publishing: {}", event.description());

        let subscribers = self.subscribers.read();
        if subscribers.is_empty() {
            return Err(EventBusError::NoSubscribers);
        }

        let mut delivered = 0;
        for subscriber in subscribers.iter().filter(|s| s.filter.matches(&event)) {
            (subscriber.handler)(event.clone());
            delivered += 1;
        }
        Ok(delivered)
    }

    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(EditorEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().push(Subscriber {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::trace!("Subscription {} added", id);
        id
    }

    /// Returns false when `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let Some(position) = subscribers.iter().position(|s| s.id == id) else {
            return false;
        };
        subscribers.remove(position);
        tracing::trace!("Subscription {} removed", id);
        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Recorded events, oldest first, optionally only those at or after `since`
    pub fn history(&self, since: Option<Instant>) -> Vec<EditorEvent> {
        self.history
            .lock()
            .iter()
            .filter(|(at, _)| since.is_none_or(|since| *at >= since))
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &EditorEvent) {
        let now = Instant::now();
        let mut history = self.history.lock();
        history.push_back((now, event.clone()));

        let retention = self.config.history_retention;
        while let Some((at, _)) = history.front() {
            let expired = now.duration_since(*at) > retention;
            if !expired && history.len() <= self.config.max_history_size {
                break;
            }
            history.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
