//! Wire DTOs shared with the identity server and the todo API.
//!
//! DESIGN
//! ======
//! Field names follow the JSON each server emits; Rust-side names differ only
//! where serde renames make that explicit.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user as returned by `GET /auth/userinfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity-provider subject identifier.
    pub id: String,
    pub email: String,
    /// Display name; may be empty when the provider withheld it.
    #[serde(default)]
    pub name: String,
    /// Avatar image URL.
    #[serde(rename = "picture", default)]
    pub picture_url: String,
}

impl User {
    /// Name to show in chrome and on the profile page.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { &self.email } else { &self.name }
    }
}

/// A single todo item from the todo API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier; absent until the todo is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub body: String,
}

impl Todo {
    /// A not-yet-persisted todo, as sent with `POST /todos`.
    pub fn draft(body: impl Into<String>) -> Self {
        Self { id: None, completed: false, body: body.into() }
    }
}
