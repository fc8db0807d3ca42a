use serde::{Deserialize, Serialize};

/// A stored user. `id` is always assigned by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Create/update payload. Omitted fields decode to their zero value; a
/// client-supplied `id` is accepted but never used.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
}

impl UserInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into() }
    }

    /// Build the full record stored under `id`, discarding any payload id.
    pub(crate) fn into_user(self, id: i64) -> User {
        User { id, name: self.name }
    }
}
