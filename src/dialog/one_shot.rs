use std::collections::BTreeSet;

use super::RequestId;

/// In-flight dialog requests, each answerable exactly once.
#[derive(Debug)]
pub struct OneShotResponses {
    pending: BTreeSet<RequestId>,
    next_id: u64,
}

impl Default for OneShotResponses {
    fn default() -> Self {
        Self {
            pending: BTreeSet::new(),
            next_id: 1,
        }
    }
}

impl OneShotResponses {
    /// Allocate an id and mark it as awaiting a response.
    pub fn register(&mut self) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id);
        id
    }

    /// Consume the slot for `id`. True only for the first response to a
    /// registered request.
    pub fn take(&mut self, id: RequestId) -> bool {
        self.pending.remove(&id)
    }

    pub fn is_pending(&self, id: RequestId) -> bool {
        self.pending.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
