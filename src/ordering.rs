//! Position bookkeeping for reorderable items

use crate::api::TodoItem;

/// Stable sort by server position
pub fn sort_by_position(items: &mut [TodoItem]) {
    items.sort_by_key(|item| item.position);
}

/// Move the element at `from` so it ends up at index `to`.
///
/// Out-of-range indices leave the vector untouched and return `false`.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from == to {
        return true;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Ids in their current order
pub fn ordered_ids(items: &[TodoItem]) -> Vec<i64> {
    items.iter().map(|item| item.id).collect()
}

/// Rearrange `items` to follow `ids` and renumber positions from zero.
///
/// Items missing from `ids` keep their relative order after the listed ones.
pub fn apply_order(items: &mut Vec<TodoItem>, ids: &[i64]) {
    let mut remaining = std::mem::take(items);
    let mut ordered = Vec::with_capacity(remaining.len());

    for id in ids {
        if let Some(index) = remaining.iter().position(|item| item.id == *id) {
            ordered.push(remaining.remove(index));
        }
    }
    ordered.extend(remaining);

    for (position, item) in ordered.iter_mut().enumerate() {
        item.position = position as i64;
    }
    *items = ordered;
}
