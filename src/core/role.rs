/// Role of the calling unit in a (possibly distributed) run.
///
/// Rank 0 organizes work distribution and must never classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Coordinator,
    Worker(u32),
}

impl NodeRole {
    pub fn from_rank(rank: i32) -> Self {
        if rank <= 0 {
            NodeRole::Coordinator
        } else {
            NodeRole::Worker(rank as u32)
        }
    }

    #[inline]
    pub fn is_coordinator(&self) -> bool {
        matches!(self, NodeRole::Coordinator)
    }
}
