use tracing::info;

use crate::store::{ActivityDirectory, DirectoryError};

pub fn create_signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.signup(activity_name, email)?;
    info!("Signed up {} for {}", email, activity_name);
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn remove_signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.unregister(activity_name, email)?;
    info!("Unregistered {} from {}", email, activity_name);
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_message_names_the_student() {
        let directory = ActivityDirectory::seeded();
        let message =
            create_signup(&directory, "Chess Club", "newstudent@mergington.edu").unwrap();
        assert!(message.contains("newstudent@mergington.edu"));
        assert!(message.contains("Chess Club"));
    }

    #[test]
    fn unregister_message_names_the_student() {
        let directory = ActivityDirectory::seeded();
        let message =
            remove_signup(&directory, "Chess Club", "michael@mergington.edu").unwrap();
        assert!(message.contains("michael@mergington.edu"));
        assert!(message.contains("Chess Club"));
    }

    #[test]
    fn duplicate_signup_is_rejected() {
        let directory = ActivityDirectory::seeded();
        let err =
            create_signup(&directory, "Chess Club", "michael@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::AlreadyRegistered);
    }
}
