//! In-memory fragment store
//!
//! A [`FragmentSet`] holds every fragment loaded from the input folder, in
//! enumeration order, together with a name lookup. Later phases refer to
//! fragments by their position in the set (`usize` index) and never mutate
//! them.

use std::collections::HashMap;

/// A single source file participating in the merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// File name, unique within the folder
    pub name: String,
    /// Raw file content
    pub content: String,
}

impl Fragment {
    /// Create a new fragment
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Ordered, immutable collection of loaded fragments
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    fragments: Vec<Fragment>,
    index: HashMap<String, usize>,
}

impl FragmentSet {
    /// Build a set from fragments, sorting them by name.
    ///
    /// If two fragments share a name the later one wins, mirroring what a
    /// directory listing can hold.
    pub fn from_fragments(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        let mut by_name: Vec<Fragment> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        for fragment in fragments {
            match seen.get(&fragment.name) {
                Some(&pos) => by_name[pos] = fragment,
                None => {
                    seen.insert(fragment.name.clone(), by_name.len());
                    by_name.push(fragment);
                }
            }
        }
        by_name.sort_by(|a, b| a.name.cmp(&b.name));
        Self::from_ordered(by_name)
    }

    /// Build a set keeping the given order as the enumeration order.
    ///
    /// Callers must not pass duplicate names.
    pub(crate) fn from_ordered(fragments: Vec<Fragment>) -> Self {
        let index = fragments
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();
        Self { fragments, index }
    }

    /// Position of a fragment in enumeration order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Whether a fragment with this name was loaded
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a fragment by name
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.index_of(name).map(|i| &self.fragments[i])
    }

    /// Get a fragment by position
    pub fn at(&self, index: usize) -> Option<&Fragment> {
        self.fragments.get(index)
    }

    /// Fragment names in enumeration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|f| f.name.as_str())
    }

    /// Iterate over fragments in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    /// Get the number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
