/// Opaque block identifier. The engine stores these without interpreting
/// them; game-specific layers assign meaning to specific IDs (e.g. 4 =
/// cobblestone in the classic numbering the map format uses).
///
/// There is no "air" id: the grid is sparse, and an absent key *is* empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}
