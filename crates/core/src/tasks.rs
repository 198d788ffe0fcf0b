//! Daily bed-task checklist rules.
//!
//! Each (bed, task, calendar day) is either incomplete or complete. A
//! completion row keyed by the date makes every new day start incomplete.

use std::collections::HashMap;

use crate::types::DbId;

/// How a bed identifier from the URL should be matched.
///
/// Field workers reach a bed either by its numeric primary key or by the QR
/// code printed on the bed's tag; a single lookup tries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedLookup {
    /// Primary key candidate, present when the identifier is numeric.
    pub id: Option<DbId>,
    /// QR code candidate (always the raw identifier).
    pub qr_code: String,
}

impl BedLookup {
    pub fn parse(identifier: &str) -> Self {
        let trimmed = identifier.trim();
        Self {
            id: trimmed.parse::<DbId>().ok(),
            qr_code: trimmed.to_string(),
        }
    }
}

/// Pair each default task with today's completion for it, if any.
///
/// Returns the paired list in catalogue order plus `all_completed`, which is
/// true iff every task has a completion. An empty catalogue counts as
/// completed.
pub fn build_checklist<T, C>(
    tasks: Vec<T>,
    completions: Vec<C>,
    task_key: impl Fn(&T) -> DbId,
    completion_key: impl Fn(&C) -> DbId,
) -> (Vec<(T, Option<C>)>, bool) {
    let mut by_task: HashMap<DbId, C> = completions
        .into_iter()
        .map(|c| (completion_key(&c), c))
        .collect();

    let paired: Vec<(T, Option<C>)> = tasks
        .into_iter()
        .map(|t| {
            let done = by_task.remove(&task_key(&t));
            (t, done)
        })
        .collect();

    let all_completed = paired.iter().all(|(_, c)| c.is_some());
    (paired, all_completed)
}
