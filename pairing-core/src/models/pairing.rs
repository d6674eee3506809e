use thiserror::Error;

/// A one-to-one partial mapping between items and requesters.
///
/// Items and requesters are identified by their index in the slices the pairing was
/// computed from. Both directions are kept so that either side can be queried in
/// constant time; an entry of `None` means the item (or requester) is unassigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pairing {
    item_to_requester: Vec<Option<usize>>,
    requester_to_item: Vec<Option<usize>>,
}

impl Pairing {
    /// A pairing over `items` items and `requesters` requesters where nothing is assigned
    pub fn empty(items: usize, requesters: usize) -> Self {
        Self {
            item_to_requester: vec![None; items],
            requester_to_item: vec![None; requesters],
        }
    }

    /// Creates a new pairing from `(item, requester)` index pairs.
    ///
    /// Fails if an index is out of range, or if an item or requester appears more than once.
    pub fn new(
        items: usize,
        requesters: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, PairingError> {
        let mut pairing = Self::empty(items, requesters);
        for (item, requester) in pairs {
            if item >= items {
                return Err(PairingError::ItemOutOfRange { item, items });
            }
            if requester >= requesters {
                return Err(PairingError::RequesterOutOfRange {
                    requester,
                    requesters,
                });
            }
            if pairing.item_to_requester[item].is_some() {
                return Err(PairingError::DuplicateItem(item));
            }
            if pairing.requester_to_item[requester].is_some() {
                return Err(PairingError::DuplicateRequester(requester));
            }
            pairing.item_to_requester[item] = Some(requester);
            pairing.requester_to_item[requester] = Some(item);
        }
        Ok(pairing)
    }

    /// Creates a new pairing without validating the pairs
    ///
    /// # Safety
    ///
    /// Every index must be in range, and no item or requester may appear twice.
    /// Violating this panics on out-of-range indices and silently corrupts the
    /// two views of the mapping on duplicates.
    pub unsafe fn new_unchecked(
        items: usize,
        requesters: usize,
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut pairing = Self::empty(items, requesters);
        for (item, requester) in pairs {
            pairing.item_to_requester[item] = Some(requester);
            pairing.requester_to_item[requester] = Some(item);
        }
        pairing
    }

    /// The number of items the pairing was computed over
    pub fn item_count(&self) -> usize {
        self.item_to_requester.len()
    }

    /// The number of requesters the pairing was computed over
    pub fn requester_count(&self) -> usize {
        self.requester_to_item.len()
    }

    /// The requester assigned to `item`, if any
    pub fn requester_of(&self, item: usize) -> Option<usize> {
        self.item_to_requester.get(item).copied().flatten()
    }

    /// The item assigned to `requester`, if any
    pub fn item_of(&self, requester: usize) -> Option<usize> {
        self.requester_to_item.get(requester).copied().flatten()
    }

    /// The item → requester view
    pub fn item_to_requester(&self) -> &[Option<usize>] {
        &self.item_to_requester
    }

    /// The requester → item view
    pub fn requester_to_item(&self) -> &[Option<usize>] {
        &self.requester_to_item
    }

    /// The matched `(item, requester)` pairs, in item order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.item_to_requester
            .iter()
            .enumerate()
            .filter_map(|(item, requester)| requester.map(|requester| (item, requester)))
    }

    /// The number of matched pairs
    pub fn len(&self) -> usize {
        self.pairs().count()
    }

    /// Whether nothing is matched
    pub fn is_empty(&self) -> bool {
        self.item_to_requester.iter().all(Option::is_none)
    }

    /// The items that are not assigned to any requester
    pub fn leftover_items(&self) -> impl Iterator<Item = usize> + '_ {
        unassigned(&self.item_to_requester)
    }

    /// The requesters that did not receive any item
    pub fn unmatched_requesters(&self) -> impl Iterator<Item = usize> + '_ {
        unassigned(&self.requester_to_item)
    }
}

fn unassigned(view: &[Option<usize>]) -> impl Iterator<Item = usize> + '_ {
    view.iter()
        .enumerate()
        .filter_map(|(idx, other)| other.is_none().then_some(idx))
}

/// The ways in which a set of pairs fails to be a pairing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    /// Error when an item index does not exist
    #[error("Item {item} is out of range for {items} items")]
    ItemOutOfRange {
        /// The offending index
        item: usize,
        /// The number of items
        items: usize,
    },
    /// Error when a requester index does not exist
    #[error("Requester {requester} is out of range for {requesters} requesters")]
    RequesterOutOfRange {
        /// The offending index
        requester: usize,
        /// The number of requesters
        requesters: usize,
    },
    /// Error when an item is assigned twice
    #[error("Item {0} is assigned more than once")]
    DuplicateItem(usize),
    /// Error when a requester is assigned twice
    #[error("Requester {0} is assigned more than once")]
    DuplicateRequester(usize),
}
