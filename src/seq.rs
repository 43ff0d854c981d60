//! Slice helpers used by selection lists and line series.

use std::fmt::Display;

use crate::error::{DialogueError, DialogueResult};

pub trait SliceExt<T> {
    /// Element at `index`, or `IndexOutOfRange` instead of a panic.
    fn get_checked(&self, index: usize) -> DialogueResult<&T>;

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// New vector holding every element followed by `item`.
    fn appended(&self, item: T) -> Vec<T>
    where
        T: Clone;

    /// Renders the elements as `(a, b, c)`.
    fn display_list(&self) -> String
    where
        T: Display;
}

impl<T> SliceExt<T> for [T] {
    fn get_checked(&self, index: usize) -> DialogueResult<&T> {
        self.get(index).ok_or(DialogueError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    fn appended(&self, item: T) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len() + 1);
        out.extend_from_slice(self);
        out.push(item);
        out
    }

    fn display_list(&self) -> String
    where
        T: Display,
    {
        let items: Vec<String> = self.iter().map(ToString::to_string).collect();
        format!("({})", items.join(", "))
    }
}
