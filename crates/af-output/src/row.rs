//! Plain data row type written by output backends.

/// One move with names resolved, ready to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRow<'g> {
    /// 1-based turn number.
    pub turn:  u64,
    /// 1-based ant number.
    pub agent: u32,
    pub room:  &'g str,
}

impl std::fmt::Display for MoveRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}-{}", self.agent, self.room)
    }
}
