use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    UnknownActivity,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

// Shared handle to the in-memory activity directory. Cloning is cheap; all
// clones see the same mapping. Signup and unregister hold the write lock
// across their check-then-mutate so concurrent calls on one activity
// serialize.
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityDirectory {
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed_catalog())),
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.read().clone()
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::UnknownActivity)?;

        if activity.is_registered(email) {
            return Err(DirectoryError::AlreadyRegistered);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::UnknownActivity)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered);
        };

        activity.participants.remove(pos);
        Ok(())
    }

    // Restore the seeded catalog. Used to isolate tests that mutate the
    // directory.
    pub fn reset(&self) {
        *self.inner.write() = seed_catalog();
    }
}

fn seed_catalog() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );

    activities.insert(
        "Programming Class".to_string(),
        Activity {
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );

    activities.insert(
        "Gym Class".to_string(),
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    );

    activities
}
