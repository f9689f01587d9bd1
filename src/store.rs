//! Section Store
//!
//! Ordered, index-addressed section lists. Every operation is pure: it
//! builds the next list from the current one and leaves the input intact,
//! so a caller swaps its owned state in one step per edit.
//!
//! Out-of-range indices are always reported as
//! [`SectionError::IndexOutOfRange`]; they are never ignored silently.

use serde::{Deserialize, Serialize};

use crate::error::SectionError;
use crate::models::{ContentSection, SectionType};
use crate::schema::create_section_with;

fn check_index(index: usize, len: usize) -> Result<(), SectionError> {
    if index < len {
        Ok(())
    } else {
        tracing::warn!(index, len, "List index out of range");
        Err(SectionError::IndexOutOfRange { index, len })
    }
}

/// Add `item` at the end.
pub fn append<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

/// Replace the element at `index`, keeping length and position.
pub fn replace_at<T: Clone>(items: &[T], index: usize, item: T) -> Result<Vec<T>, SectionError> {
    check_index(index, items.len())?;

    Ok(items
        .iter()
        .enumerate()
        .map(|(i, existing)| if i == index { item.clone() } else { existing.clone() })
        .collect())
}

/// Remove the element at `index`. The list may become empty.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Result<Vec<T>, SectionError> {
    check_index(index, items.len())?;

    Ok(items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect())
}

/// Take the element at `from` out and reinsert it at `to`.
///
/// Both indices must be valid for the current length; `to` is clamped to
/// the shortened list after removal.
pub fn move_to<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, SectionError> {
    check_index(from, items.len())?;
    check_index(to, items.len())?;

    if from == to {
        return Ok(items.to_vec());
    }

    let mut next = items.to_vec();
    let item = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, item);
    Ok(next)
}

// ============================================
// Section List
// ============================================

/// The ordered sections of one page, in render order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionList(Vec<ContentSection>);

impl SectionList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ContentSection> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentSection> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ContentSection] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ContentSection> {
        self.0
    }

    /// Create a defaulted section of `section_type` and append it.
    pub fn add(&self, section_type: SectionType, placeholder_image: &str) -> Self {
        self.append(create_section_with(section_type, placeholder_image))
    }

    pub fn append(&self, section: ContentSection) -> Self {
        Self(append(&self.0, section))
    }

    pub fn replace_at(&self, index: usize, section: ContentSection) -> Result<Self, SectionError> {
        replace_at(&self.0, index, section).map(Self)
    }

    pub fn remove_at(&self, index: usize) -> Result<Self, SectionError> {
        remove_at(&self.0, index).map(Self)
    }

    pub fn move_to(&self, from: usize, to: usize) -> Result<Self, SectionError> {
        move_to(&self.0, from, to).map(Self)
    }

    /// Section types in order, for outlines and logging
    pub fn outline(&self) -> Vec<SectionType> {
        self.0.iter().map(ContentSection::section_type).collect()
    }
}

impl From<Vec<ContentSection>> for SectionList {
    fn from(sections: Vec<ContentSection>) -> Self {
        Self(sections)
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a ContentSection;
    type IntoIter = std::slice::Iter<'a, ContentSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
