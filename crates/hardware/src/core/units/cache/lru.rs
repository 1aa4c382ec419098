//! Least Recently Used (LRU) Set.
//!
//! One cache row, kept as an ordered sequence of tag slots with the least
//! recently used slot at the front and the most recently used at the back.
//! Unused slots are `None` and only ever appear in front of every valid tag, so
//! the row never fragments. Every access leaves the touched tag at the back.
//!
//! # Performance
//!
//! - **Time Complexity:** `touch()` is O(W) where W is the associativity
//! - **Space Complexity:** O(W) per set
//!
//! Associativity is small (at most 16 in practice), so shifting a `Vec` is the
//! right implementation.

/// Identity of a block within its set.
pub type Tag = u16;

/// Result of touching a tag in a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The tag was present and has been promoted to most recently used.
    Hit,
    /// The tag was absent and took an unused slot.
    Filled,
    /// The tag was absent, the set was full, and the carried tag was evicted.
    Evicted(Tag),
}

impl Lookup {
    /// Returns `true` for [`Lookup::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// One LRU-ordered cache row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LruSet {
    /// Index 0 is LRU, last index is MRU.
    slots: Vec<Option<Tag>>,
}

impl LruSet {
    /// Creates an empty set with `ways` unused slots (at least one).
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity of the cache.
    pub fn new(ways: usize) -> Self {
        Self {
            slots: vec![None; ways.max(1)],
        }
    }

    /// Accesses `tag`, updating the LRU order.
    ///
    /// Scans from most to least recently used. A matching tag is moved to the
    /// back. If an unused slot is reached first, the tag is absent: the unused
    /// slot is consumed and the tag placed at the back. If neither is found, the
    /// front (least recently used) tag is evicted and the tag placed at the back.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag of the accessed block.
    ///
    /// # Returns
    ///
    /// Whether the access hit, filled a free slot, or evicted a tag.
    pub fn touch(&mut self, tag: Tag) -> Lookup {
        for i in (0..self.slots.len()).rev() {
            match self.slots[i] {
                Some(t) if t == tag => {
                    self.promote(i, tag);
                    return Lookup::Hit;
                }
                None => {
                    self.promote(i, tag);
                    return Lookup::Filled;
                }
                Some(_) => {}
            }
        }

        let victim = self.lru();
        let _ = self.slots.remove(0);
        self.slots.push(Some(tag));
        victim.map_or(Lookup::Filled, Lookup::Evicted)
    }

    /// Removes slot `pos`, shifting later slots toward the front, and appends `tag`.
    fn promote(&mut self, pos: usize, tag: Tag) {
        let _ = self.slots.remove(pos);
        self.slots.push(Some(tag));
    }

    /// Returns `true` if `tag` is resident. Does not change the LRU order.
    pub fn contains(&self, tag: Tag) -> bool {
        self.slots.contains(&Some(tag))
    }

    /// Returns the slots from least to most recently used, unused slots as `None`.
    pub fn slots(&self) -> &[Option<Tag>] {
        &self.slots
    }

    /// Iterates over the resident tags from least to most recently used.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Returns the least recently used resident tag.
    pub fn lru(&self) -> Option<Tag> {
        self.tags().next()
    }

    /// Returns the most recently used resident tag.
    pub fn mru(&self) -> Option<Tag> {
        self.slots.last().copied().flatten()
    }

    /// Returns the number of resident tags.
    pub fn occupancy(&self) -> usize {
        self.tags().count()
    }

    /// Returns the associativity of the set.
    pub fn ways(&self) -> usize {
        self.slots.len()
    }
}
