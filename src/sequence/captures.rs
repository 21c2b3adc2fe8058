use smallvec::SmallVec;
use std::sync::Arc;

use crate::pattern::Concat;

/// Maximum number of captures before heap allocation.
pub const MAX_INLINE_CAPTURES: usize = 8;

/// One captured slot of a [`super::Sequence`] match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Placeholder name, if the segment was declared with one
    pub name: Option<Arc<str>>,
    /// `None` only for an optional parameter with no segment left
    pub value: Option<String>,
}

/// Ordered, positionally indexed capture list.
///
/// Literals never occupy a slot: for `/users/{id}/posts/{post?}` slot 0 is
/// `id` and slot 1 is `post`, whatever the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    slots: SmallVec<[Capture; MAX_INLINE_CAPTURES]>,
}

impl Captures {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value at `index`. Absent optional parameters and out-of-range indices
    /// both return `None`; use [`Captures::slot`] to tell them apart.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index)?.value.as_deref()
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Capture> {
        self.slots.get(index)
    }

    /// Get a capture by placeholder name
    ///
    /// Uses "last write wins" semantics: if a name is declared twice
    /// (e.g. `/org/{id}/user/{id}`), returns the last occurrence.
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .rfind(|slot| slot.name.as_deref() == Some(name))
            .and_then(|slot| slot.value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capture> {
        self.slots.iter()
    }

    /// Drop names and return the values in order.
    #[must_use]
    pub fn into_values(self) -> Vec<Option<String>> {
        self.slots.into_iter().map(|slot| slot.value).collect()
    }

    pub(crate) fn push(&mut self, capture: Capture) {
        self.slots.push(capture);
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = &'a Capture;
    type IntoIter = std::slice::Iter<'a, Capture>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

// Literals leave the list untouched.
impl Concat<()> for Captures {
    type Output = Captures;

    #[inline]
    fn concat(self, _rhs: ()) -> Captures {
        self
    }
}

// A template placed after literals keeps its own slots.
impl Concat<Captures> for () {
    type Output = Captures;

    #[inline]
    fn concat(self, rhs: Captures) -> Captures {
        rhs
    }
}

// Parameters append one slot.
impl Concat<Capture> for Captures {
    type Output = Captures;

    #[inline]
    fn concat(mut self, rhs: Capture) -> Captures {
        self.push(rhs);
        self
    }
}
