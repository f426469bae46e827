//! Identity tags for shared values.
//!
//! Reference values (`Rc<T>` and the handles in [`value`](crate::value)) are
//! set members by identity. The first time an allocation is seen it receives
//! a tag from a process-wide counter; later lookups of the same allocation
//! return the same tag for as long as the allocation is alive.
//!
//! The side table holds only a [`Weak`] per allocation, so tagging a value
//! never extends its lifetime. Entries whose value was dropped are pruned
//! once the table outgrows its threshold.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

/// The first tag handed out.
const FIRST_TAG: u64 = 1_000_000;

/// Table size that triggers the first pruning pass.
const INITIAL_PRUNE_THRESHOLD: usize = 64;

static NEXT_TAG: AtomicU64 = AtomicU64::new(FIRST_TAG);

thread_local! {
    static IDENTITY_TABLE: RefCell<IdentityTable> = RefCell::new(IdentityTable::new());
}

/// Type-erased liveness check for a weakly held allocation.
trait Liveness {
    fn is_alive(&self) -> bool;
}

impl<T: ?Sized> Liveness for Weak<T> {
    fn is_alive(&self) -> bool {
        self.strong_count() > 0
    }
}

struct IdentityEntry {
    tag: u64,
    liveness: Box<dyn Liveness>,
}

struct IdentityTable {
    entries: HashMap<usize, IdentityEntry>,
    prune_threshold: usize,
}

impl IdentityTable {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            prune_threshold: INITIAL_PRUNE_THRESHOLD,
        }
    }

    fn tag_of<T: ?Sized + 'static>(&mut self, value: &Rc<T>) -> u64 {
        let address = Rc::as_ptr(value).cast::<()>() as usize;
        // A live entry at this address is this allocation: the Weak we hold
        // keeps the address from being reused.
        if let Some(entry) = self.entries.get(&address)
            && entry.liveness.is_alive()
        {
            return entry.tag;
        }

        if self.entries.len() >= self.prune_threshold {
            self.prune();
        }

        let tag = NEXT_TAG.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(tag, address, "assigned identity tag");
        self.entries.insert(
            address,
            IdentityEntry {
                tag,
                liveness: Box::new(Rc::downgrade(value)),
            },
        );
        tag
    }

    fn prune(&mut self) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.liveness.is_alive());
        let remaining = self.entries.len();
        self.prune_threshold = (remaining * 2).max(INITIAL_PRUNE_THRESHOLD);
        tracing::debug!(
            removed = before - remaining,
            remaining,
            threshold = self.prune_threshold,
            "pruned identity table"
        );
    }
}

/// Returns the identity tag of a shared allocation.
///
/// Clones of one `Rc` share a tag; distinct allocations never do, even when
/// their contents are equal.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use refset::key::identity_tag;
///
/// let first = Rc::new(String::from("same"));
/// let second = Rc::new(String::from("same"));
///
/// assert_eq!(identity_tag(&first), identity_tag(&Rc::clone(&first)));
/// assert_ne!(identity_tag(&first), identity_tag(&second));
/// ```
#[must_use]
pub fn identity_tag<T: ?Sized + 'static>(value: &Rc<T>) -> u64 {
    IDENTITY_TABLE.with(|table| table.borrow_mut().tag_of(value))
}

#[cfg(test)]
fn live_entries() -> usize {
    IDENTITY_TABLE.with(|table| {
        table
            .borrow()
            .entries
            .values()
            .filter(|entry| entry.liveness.is_alive())
            .count()
    })
}

#[cfg(test)]
fn table_len() -> usize {
    IDENTITY_TABLE.with(|table| table.borrow().entries.len())
}
