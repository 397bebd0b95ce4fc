use serde::{Deserialize, Serialize};

// One extracurricular offering. The activity name is the directory key,
// not a field of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    // Insertion order is kept so listings serialize stably; uniqueness is
    // enforced on signup.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
