//! Todo-list state for the todos page.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so the page only sequences network calls and
//! the list bookkeeping stays unit-testable.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use crate::net::types::Todo;

/// Todos loaded from the todo API plus request status.
#[derive(Clone, Debug, Default)]
pub struct TodosState {
    pub items: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TodosState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<Todo>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Record a failed mutation. Items and loading state are left as they were.
    pub fn rejected(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn created(&mut self, todo: Todo) {
        self.items.push(todo);
        self.error = None;
    }

    /// Mark the todo with `id` completed. Returns `false` if it is not listed.
    pub fn completed(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|t| t.id.as_deref() == Some(id)) {
            Some(todo) => {
                todo.completed = true;
                true
            }
            None => false,
        }
    }

    /// Drop the todo with `id`. Returns `false` if it is not listed.
    pub fn removed(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id.as_deref() != Some(id));
        self.items.len() != before
    }
}
