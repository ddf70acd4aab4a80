use crate::CyclerError;

/// Which way a cycle transition moves through the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

impl std::fmt::Display for CycleDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleDirection::Forward => f.write_str("forward"),
            CycleDirection::Backward => f.write_str("backward"),
        }
    }
}

/// The two ring slots currently bound to the shader's texture uniforms.
///
/// `outgoing` is the base layer the blend starts from (shown at mix 0),
/// `incoming` is the blend target (shown at mix 1). Stored as indices into
/// the ring so role swaps stay cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSlots {
    pub outgoing: usize,
    pub incoming: usize,
}

/// Ordered, cyclic collection of named texture slots with a current pointer.
///
/// The ring owns the index arithmetic and the active slot pair; it enforces
/// no preconditions on when transitions are meaningful and trusts its caller
/// (the fade driver) to fire them at timeline boundaries.
#[derive(Debug, Clone)]
pub struct TextureRing {
    names: Vec<String>,
    index: usize,
    slots: ActiveSlots,
}

impl TextureRing {
    /// Builds a ring from ordered slot names. An empty ring is a
    /// configuration mistake and is rejected here rather than surfacing as
    /// bad modulo arithmetic later.
    pub fn new(names: Vec<String>) -> Result<Self, CyclerError> {
        if names.is_empty() {
            return Err(CyclerError::EmptyRing);
        }
        Ok(Self {
            names,
            index: 0,
            slots: ActiveSlots {
                outgoing: 0,
                incoming: 0,
            },
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_name(&self) -> &str {
        &self.names[self.index]
    }

    pub fn active_slots(&self) -> ActiveSlots {
        self.slots
    }

    pub fn outgoing_name(&self) -> &str {
        &self.names[self.slots.outgoing]
    }

    pub fn incoming_name(&self) -> &str {
        &self.names[self.slots.incoming]
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Steps the pointer forward and shifts the blend pair: the previous
    /// incoming slot becomes the new base layer, the slot at the new pointer
    /// becomes the blend target.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len();
        self.slots.outgoing = self.slots.incoming;
        self.slots.incoming = self.index;
    }

    /// Mirror image of [`advance`](Self::advance): steps the pointer
    /// backward with the outgoing/incoming roles swapped, so retreating
    /// visually rewinds a forward cross-fade.
    pub fn retreat(&mut self) {
        self.index = (self.index + self.len() - 1) % self.len();
        self.slots.incoming = self.slots.outgoing;
        self.slots.outgoing = self.index;
    }

    /// Direction-change compensation: the blend endpoints trade roles and
    /// the pointer follows the slot that is now incoming. Keeps the
    /// displayed texture in its uniform slot when the user reverses scroll
    /// direction mid-cycle, so the cross-fade stays continuous.
    pub fn reverse_slots(&mut self) {
        std::mem::swap(&mut self.slots.outgoing, &mut self.slots.incoming);
        self.index = self.slots.incoming;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(names: &[&str]) -> TextureRing {
        TextureRing::new(names.iter().map(|s| s.to_string()).collect()).expect("ring")
    }

    #[test]
    fn empty_ring_is_rejected() {
        let err = TextureRing::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CyclerError::EmptyRing));
    }

    #[test]
    fn index_stays_in_bounds_under_mixed_operations() {
        let mut ring = ring(&["a", "b", "c", "d", "e"]);
        let ops = [1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 1, 1, 1, 0];
        for op in ops {
            if op == 1 {
                ring.advance();
            } else {
                ring.retreat();
            }
            assert!(ring.current_index() < ring.len());
            assert!(ring.active_slots().outgoing < ring.len());
            assert!(ring.active_slots().incoming < ring.len());
        }
    }

    #[test]
    fn advance_then_retreat_round_trips() {
        let mut ring = ring(&["a", "b", "c"]);
        let index = ring.current_index();
        let slots = ring.active_slots();
        ring.advance();
        ring.retreat();
        assert_eq!(ring.current_index(), index);
        assert_eq!(ring.active_slots(), slots);
    }

    #[test]
    fn full_forward_cycle_returns_to_start() {
        let mut ring = ring(&["a", "b", "c", "d"]);
        let index = ring.current_index();
        for _ in 0..ring.len() {
            ring.advance();
        }
        assert_eq!(ring.current_index(), index);
    }

    #[test]
    fn advance_shifts_incoming_into_outgoing() {
        let mut ring = ring(&["a", "b", "c"]);
        ring.advance();
        assert_eq!(ring.current_index(), 1);
        assert_eq!(ring.outgoing_name(), "a");
        assert_eq!(ring.incoming_name(), "b");
        ring.advance();
        assert_eq!(ring.outgoing_name(), "b");
        assert_eq!(ring.incoming_name(), "c");
    }

    #[test]
    fn single_slot_ring_operations_are_noops() {
        let mut ring = ring(&["only"]);
        ring.advance();
        assert_eq!(ring.current_index(), 0);
        assert_eq!(ring.outgoing_name(), "only");
        assert_eq!(ring.incoming_name(), "only");
        ring.retreat();
        assert_eq!(ring.current_index(), 0);
        ring.reverse_slots();
        assert_eq!(ring.current_index(), 0);
    }

    #[test]
    fn reverse_slots_swaps_roles_and_moves_pointer() {
        let mut ring = ring(&["a", "b", "c"]);
        ring.advance();
        ring.reverse_slots();
        assert_eq!(ring.outgoing_name(), "b");
        assert_eq!(ring.incoming_name(), "a");
        assert_eq!(ring.current_index(), 0);
    }
}
