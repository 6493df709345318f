//! Name ordering for directory listings
//!
//! Entries are ordered with a top-down merge sort. The split keeps the
//! larger half on the left for odd lengths, and the merge takes from the
//! right only when its head is strictly smaller, so equal keys keep their
//! input order.

use std::cmp::Ordering;

use super::entry::DirectoryEntry;

/// Sort entries by raw name bytes (not locale-aware, case-sensitive).
pub fn sort_by_name(entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    merge_sort_by(entries, compare_names)
}

/// Byte-wise comparison of two entry names.
pub fn compare_names(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    a.name_bytes().cmp(b.name_bytes())
}

/// Stable merge sort over an owned sequence.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(items, &mut compare)
}

fn sort_recursive<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len().div_ceil(2));
    let left = sort_recursive(items, compare);
    let right = sort_recursive(right, compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}
