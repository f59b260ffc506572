//! Notification feed store.

use std::sync::RwLock;

use bistro_core::{
    NewNotification, Notification, NotificationId, NotificationRepository, RepositoryError,
};

use super::{next_id, read, write};

/// Notifications kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    notifications: RwLock<Vec<Notification>>,
}

impl MemoryNotificationStore {
    #[must_use]
    pub const fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: RwLock::new(notifications),
        }
    }
}

impl NotificationRepository for MemoryNotificationStore {
    fn list(&self) -> Result<Vec<Notification>, RepositoryError> {
        Ok(read(&self.notifications)?.clone())
    }

    fn create(&self, new: NewNotification) -> Result<Notification, RepositoryError> {
        let mut notifications = write(&self.notifications)?;
        let id = NotificationId::new(next_id(&notifications, |n| n.id.as_i32()));
        let notification = Notification::from_new(id, new);
        notifications.push(notification.clone());
        Ok(notification)
    }

    fn mark_read(&self, id: NotificationId) -> Result<(), RepositoryError> {
        let mut notifications = write(&self.notifications)?;
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| RepositoryError::not_found("notification", id.as_i32()))?;
        notification.is_read = true;
        Ok(())
    }

    fn mark_all_read(&self) -> Result<(), RepositoryError> {
        for notification in write(&self.notifications)?.iter_mut() {
            notification.is_read = true;
        }
        Ok(())
    }
}
