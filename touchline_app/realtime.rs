use serde::Serialize;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, Weak},
};
use uuid::Uuid;

/// Something other club members may want to refresh for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClubChange {
    MessagePosted { club_id: Uuid, message_id: Uuid },
    AvailabilityChanged { club_id: Uuid },
    CompositionSaved { club_id: Uuid, event_id: Uuid },
}

impl ClubChange {
    pub fn club_id(&self) -> Uuid {
        match self {
            ClubChange::MessagePosted { club_id, .. }
            | ClubChange::AvailabilityChanged { club_id }
            | ClubChange::CompositionSaved { club_id, .. } => *club_id,
        }
    }
}

type Callback = Box<dyn Fn(&ClubChange) + Send + Sync>;

struct Subscriber {
    club_id: Uuid,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: HashMap<u64, Subscriber>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    match registry.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// In-process fan-out of [`ClubChange`]s to per-club subscribers.
///
/// Callbacks run synchronously on the publishing task while the registry is
/// locked: they must not block, and must not subscribe or unsubscribe.
#[derive(Clone, Default)]
pub struct ChangeFeed {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, club_id: Uuid, callback: F) -> Subscription
    where
        F: Fn(&ClubChange) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.insert(
            id,
            Subscriber {
                club_id,
                callback: Box::new(callback),
            },
        );

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Notifies every subscriber of the change's club, returns how many.
    pub fn publish(&self, change: &ClubChange) -> usize {
        let registry = lock(&self.registry);
        let club_id = change.club_id();
        let mut notified = 0;
        for subscriber in registry.subscribers.values() {
            if subscriber.club_id == club_id {
                (subscriber.callback)(change);
                notified += 1;
            }
        }
        notified
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).subscribers.len()
    }
}

/// Handle of a registered callback. Dropping it unsubscribes too.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }

    fn remove(&self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).subscribers.remove(&self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter(feed: &ChangeFeed, club_id: Uuid) -> (Subscription, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = hits.clone();
        let sub = feed.subscribe(club_id, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (sub, hits)
    }

    #[test]
    fn test_publish_reaches_only_the_same_club() {
        let feed = ChangeFeed::new();
        let club_a = Uuid::new_v4();
        let club_b = Uuid::new_v4();
        let (_sub_a, hits_a) = counter(&feed, club_a);
        let (_sub_b, hits_b) = counter(&feed, club_b);

        let notified = feed.publish(&ClubChange::AvailabilityChanged { club_id: club_a });

        assert_eq!(notified, 1);
        assert_eq!(hits_a.load(Ordering::SeqCst), 1);
        assert_eq!(hits_b.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsubscribe_and_drop_remove_callbacks() {
        let feed = ChangeFeed::new();
        let club_id = Uuid::new_v4();
        let (explicit, hits) = counter(&feed, club_id);
        let (dropped, _) = counter(&feed, club_id);
        assert_eq!(feed.subscriber_count(), 2);

        explicit.unsubscribe();
        drop(dropped);
        assert_eq!(feed.subscriber_count(), 0);

        let change = ClubChange::CompositionSaved {
            club_id,
            event_id: Uuid::new_v4(),
        };
        assert_eq!(feed.publish(&change), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscription_outliving_feed() {
        let feed = ChangeFeed::new();
        let (sub, _) = counter(&feed, Uuid::new_v4());
        drop(feed);
        sub.unsubscribe();
    }

    #[test]
    fn test_change_serializes_with_type_tag() {
        let club_id = Uuid::nil();
        let json = serde_json::to_value(ClubChange::AvailabilityChanged { club_id }).unwrap();
        assert_eq!(json["type"], "availability_changed");
        assert_eq!(json["club_id"], club_id.to_string());
    }
}
