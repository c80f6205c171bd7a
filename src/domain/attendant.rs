//! People listed in the attendee directory.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendant {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub interests: Vec<String>,
}
