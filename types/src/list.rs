//! The list state controller.
//!
//! Holds the ordered collection of items and exposes the two mutating
//! operations (`submit`, `toggle`) plus the removal hook the presentation
//! layer calls once an exit transition has finished. Animation state lives
//! elsewhere, keyed by [`ItemId`]; items stay plain data.

use crate::ids::ItemId;
use crate::label::Label;

/// What tapping an item does. Fixed at list construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Flip the completion flag back and forth; items are never removed.
    Toggle,
    /// Mark completion exactly once; the caller removes the item after its
    /// exit transition finishes.
    RemoveOnComplete,
}

/// One todo entry. Created on submit, mutated only via [`TodoList::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    label: Label,
    completed: bool,
}

impl Item {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new item was appended to the end of the list.
    Added(ItemId),
    /// The text was empty or whitespace-only; nothing changed.
    Rejected,
}

/// Result of a toggle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Policy [`CompletionPolicy::Toggle`]: the flag was flipped.
    Toggled { id: ItemId, completed: bool },
    /// Policy [`CompletionPolicy::RemoveOnComplete`]: the item was marked
    /// complete for the first time. The caller should start the exit
    /// transition and remove the item when it finishes.
    Completing(ItemId),
    /// The item is already marked complete and awaiting removal; nothing
    /// further happens and no second removal may be scheduled.
    AlreadyCompleting(ItemId),
    /// No item with that id exists.
    NotFound,
}

/// Ordered, append-only collection of items.
///
/// # Invariants
///
/// - Ids are unique within the list (monotonic counter, never reused)
/// - Insertion order is preserved; new items always go to the end
/// - Under `RemoveOnComplete`, a completed item stays in the list until
///   [`TodoList::remove`] is called
#[derive(Debug)]
pub struct TodoList {
    items: Vec<Item>,
    next_id: u64,
    policy: CompletionPolicy,
}

impl TodoList {
    #[must_use]
    pub fn new(policy: CompletionPolicy) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Trim and validate `text`; on success append a new uncompleted item.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let Ok(label) = Label::new(text) else {
            return SubmitOutcome::Rejected;
        };

        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        self.items.push(Item {
            id,
            label,
            completed: false,
        });
        SubmitOutcome::Added(id)
    }

    /// Apply the variant's completion policy to the item with `id`.
    pub fn toggle(&mut self, id: ItemId) -> ToggleOutcome {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return ToggleOutcome::NotFound;
        };

        match self.policy {
            CompletionPolicy::Toggle => {
                item.completed = !item.completed;
                ToggleOutcome::Toggled {
                    id,
                    completed: item.completed,
                }
            }
            CompletionPolicy::RemoveOnComplete => {
                if item.completed {
                    ToggleOutcome::AlreadyCompleting(id)
                } else {
                    item.completed = true;
                    ToggleOutcome::Completing(id)
                }
            }
        }
    }

    /// Remove the item with `id`, returning whether it was present.
    ///
    /// Called by the presentation layer when the item's exit transition
    /// reports completion - never before.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}
