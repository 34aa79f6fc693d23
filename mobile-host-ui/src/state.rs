// SPDX-License-Identifier: MIT OR Apache-2.0

//! Observable host state.
//!
//! The desktop page (or any other session implementation) publishes into
//! [`StateChannel`]s and the mobile widgets subscribe to them. A subscriber
//! receives the current value on subscription and then every later `set`,
//! synchronously and in order.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct ChannelInner<T> {
    value: T,
    subscribers: Vec<(usize, Subscriber<T>)>,
    next_subscriber_id: usize,
}

/// A single observable value.
pub struct StateChannel<T> {
    inner: Rc<RefCell<ChannelInner<T>>>,
}

impl<T> Clone for StateChannel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for StateChannel<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Default + Clone + 'static> Default for StateChannel<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> StateChannel<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                value,
                subscribers: Vec::new(),
                next_subscriber_id: 0,
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Store `value` and notify every subscriber, even if it is unchanged.
    pub fn set(&self, value: T) {
        let subscribers: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect()
        };
        // Borrow released so subscribers may read or write the channel.
        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.borrow().value);
        self.set(next);
    }

    /// Subscribe to changes. The callback runs once immediately with the
    /// current value. Dropping the returned guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Subscriber<T> = Rc::new(callback);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_subscriber_id;
            inner.next_subscriber_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&current);

        let weak: Weak<RefCell<ChannelInner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .borrow_mut()
                        .subscribers
                        .retain(|(sub_id, _)| *sub_id != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Unsubscribes from a [`StateChannel`] when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionQuality {
    Good,
    Poor,
}

impl ConnectionQuality {
    pub fn class_name(self) -> &'static str {
        match self {
            ConnectionQuality::Good => "good",
            ConnectionQuality::Poor => "poor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionQuality::Good => "Host Connection: Good",
            ConnectionQuality::Poor => "Host Connection: Poor",
        }
    }
}

/// Everything the mobile widgets mirror from the meeting.
#[derive(Clone, PartialEq)]
pub struct HostState {
    pub camera_active: StateChannel<bool>,
    pub mic_active: StateChannel<bool>,
    pub hand_raised: StateChannel<bool>,
    pub participant_count: StateChannel<u32>,
    pub recording: StateChannel<bool>,
    pub waiting_room: StateChannel<bool>,
    pub locked: StateChannel<bool>,
    pub connection: StateChannel<Option<ConnectionQuality>>,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            camera_active: StateChannel::new(true),
            mic_active: StateChannel::new(true),
            hand_raised: StateChannel::new(false),
            participant_count: StateChannel::new(0),
            recording: StateChannel::new(false),
            waiting_room: StateChannel::new(false),
            locked: StateChannel::new(false),
            connection: StateChannel::new(None),
        }
    }
}
