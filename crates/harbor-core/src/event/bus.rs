// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// An unbounded channel that carries change notifications of type `T`.
///
/// Any number of producers can hold a [`flume::Sender`] obtained from
/// [`ChangeBus::sender`]; the owner of the bus drains the queue.
#[derive(Debug)]
pub struct ChangeBus<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> ChangeBus<T> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Queues one notification.
    pub fn publish(&self, event: T) {
        // The bus owns a receiver, so the channel cannot be disconnected here.
        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to queue change notification: {e}");
        }
    }

    /// Returns a new producer handle.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a consumer handle. All handles share one queue.
    pub fn receiver(&self) -> flume::Receiver<T> {
        self.receiver.clone()
    }

    /// Removes and returns every queued notification, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Number of queued notifications.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl<T: Send + 'static> Default for ChangeBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::FieldChanged;
    use std::thread;

    fn changed(field: &'static str) -> FieldChanged {
        FieldChanged {
            uid: "abc".into(),
            field,
        }
    }

    #[test]
    fn new_bus_is_empty() {
        let bus = ChangeBus::<FieldChanged>::new();
        assert_eq!(bus.pending(), 0);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn drain_returns_events_in_publish_order() {
        let bus = ChangeBus::new();
        bus.publish(changed("clamping"));
        bus.sender()
            .send(changed("format"))
            .expect("Send should succeed");

        assert_eq!(bus.pending(), 2);
        assert_eq!(bus.drain(), vec![changed("clamping"), changed("format")]);
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn send_from_thread() {
        let bus = ChangeBus::new();
        let sender = bus.sender();

        let handle = thread::spawn(move || {
            sender
                .send(changed("display_name"))
                .expect("Send from thread failed");
        });
        handle.join().expect("Thread panicked");

        assert_eq!(bus.drain(), vec![changed("display_name")]);
    }
}
