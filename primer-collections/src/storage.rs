//! Slot storage addressed by stable keys.
//!
//! Node-based containers (lists, stacks, hash chains) keep their nodes here and
//! link them with [`Key`]s instead of pointers. A key stays valid until its slot
//! is removed. Until the next insert, lookups through the removed key return
//! `None`; after that the slot may be handed out again, and the old key then
//! addresses the new value. Keys carry no generation, so callers must drop a
//! key once they remove it.
//!
//! ```text
//! slots:  [ A | vacant | C | vacant ]
//!                 │              ▲
//!     free_head ──┘   next_free ─┘
//! ```
//!
//! Vacant slots form a free list threaded through the slots themselves, so
//! removal and reuse are both O(1).

use crate::Full;

/// Copyable index type with a reserved "no key" sentinel.
///
/// Links inside nodes use `NONE` in place of a null pointer.
///
/// # Example
///
/// ```
/// use primer_collections::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel meaning "no node".
    const NONE: Self;

    /// Converts a slot position into a key.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot position this key addresses.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this addresses a slot.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, u64, usize);

/// Keyed storage for container nodes.
///
/// Implementations must keep keys stable until removal and reuse freed slots.
/// A removed key may therefore name a later value.
///
/// - [`SlotStorage`]: built in, optionally bounded
/// - `slab::Slab<T>`: growable (feature `slab`)
pub trait Storage<T> {
    /// Key type handed out by this storage.
    type Key: Key;

    /// Inserts a value, returning its key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the storage refuses more values.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of live values.
    fn len(&self) -> usize;

    /// Returns `true` if no values are stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of live values, or `None` if unbounded.
    fn limit(&self) -> Option<usize>;
}

#[derive(Debug)]
enum Slot<T, K> {
    Occupied(T),
    Vacant { next_free: K },
}

/// Vector-backed storage with a free list.
///
/// Created either unbounded ([`SlotStorage::new`]) or with a hard cap on the
/// number of live values ([`SlotStorage::with_capacity`]). Dropping the storage
/// drops every live value.
///
/// # Example
///
/// ```
/// use primer_collections::{SlotStorage, Storage};
///
/// let mut storage: SlotStorage<&str> = SlotStorage::with_capacity(2);
/// let a = storage.try_insert("a").unwrap();
/// let _b = storage.try_insert("b").unwrap();
/// assert!(storage.try_insert("c").is_err());
///
/// assert_eq!(storage.remove(a), Some("a"));
/// assert_eq!(storage.get(a), None);
/// let c = storage.try_insert("c").unwrap();
/// assert_eq!(c, a); // a's slot is reused
/// assert_eq!(storage.get(a), Some(&"c"));
/// ```
#[derive(Debug)]
pub struct SlotStorage<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    free_head: K,
    len: usize,
    limit: Option<usize>,
}

impl<T, K: Key> Default for SlotStorage<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> SlotStorage<T, K> {
    /// Creates storage that grows on demand.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: K::NONE,
            len: 0,
            limit: None,
        }
    }

    /// Creates storage holding at most `capacity` live values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` reaches the key type's sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity < K::NONE.as_usize(),
            "capacity exceeds key type maximum"
        );
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: K::NONE,
            len: 0,
            limit: Some(capacity),
        }
    }

    /// Returns `true` if a bounded storage holds its maximum.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.len >= limit)
    }

    /// Drops every live value and forgets all keys.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = K::NONE;
        self.len = 0;
    }
}

impl<T, K: Key> Storage<T> for SlotStorage<T, K> {
    type Key = K;

    fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }

        let key = if self.free_head.is_some() {
            let key = self.free_head;
            let slot = &mut self.slots[key.as_usize()];
            if let Slot::Vacant { next_free } = *slot {
                self.free_head = next_free;
            }
            *slot = Slot::Occupied(value);
            key
        } else {
            let pos = self.slots.len();
            // The sentinel itself must never address a slot.
            if pos >= K::NONE.as_usize() {
                return Err(Full(value));
            }
            self.slots.push(Slot::Occupied(value));
            K::from_usize(pos)
        };

        self.len += 1;
        Ok(key)
    }

    fn remove(&mut self, key: K) -> Option<T> {
        let slot = self.slots.get_mut(key.as_usize())?;
        if !matches!(slot, Slot::Occupied(_)) {
            return None;
        }

        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(slot, vacant) {
            Slot::Occupied(value) => {
                self.free_head = key;
                self.len -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn limit(&self) -> Option<usize> {
        self.limit
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<usize, Full<T>> {
        Ok(self.insert(value))
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    fn limit(&self) -> Option<usize> {
        None
    }
}
