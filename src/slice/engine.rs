//! Slice extraction
//!
//! [`slice`] walks the resolved bounds and returns the selected indices in
//! traversal order. [`slice_items`] and [`slice_str`] map those indices back
//! through a concrete sequence.

use super::bounds::{resolve_bounds, signed_len};
use super::SliceParams;

/// Indices picked by a slice, in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}

/// Compute the indices selected from a sequence of `length` items
pub fn slice(length: usize, params: &SliceParams) -> Selection {
    if params.is_full_reverse() {
        return Selection {
            indices: (0..length).rev().collect(),
        };
    }

    let bounds = resolve_bounds(length, params);
    let len = signed_len(length);
    let step = params.step.get();
    let mut indices = Vec::new();
    let mut i = bounds.start;

    if step > 0 {
        while i < bounds.end && i < len {
            if i >= 0 {
                indices.push(i as usize);
            }
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
    } else {
        while i > bounds.end && i >= 0 {
            if i < len {
                indices.push(i as usize);
            }
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
    }

    Selection { indices }
}

/// Apply a slice to a slice of items
pub fn slice_items<'a, T>(items: &'a [T], params: &SliceParams) -> Vec<&'a T> {
    slice(items.len(), params)
        .iter()
        .map(|i| &items[i])
        .collect()
}

/// Apply a slice to the characters of a string
pub fn slice_str(text: &str, params: &SliceParams) -> String {
    let chars: Vec<char> = text.chars().collect();
    slice_items(&chars, params).into_iter().collect()
}
