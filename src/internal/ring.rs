//! Circular index arithmetic shared by both descriptor rings.
//!
//! Indices live in `[0, n)` and advance with wraparound. The transmit
//! ring keeps one slot empty so that a full ring (`advance(head) == tail`)
//! is distinguishable from an empty one (`head == tail`).

/// Next index after `index` in a ring of capacity `n`.
#[inline(always)]
#[must_use]
pub const fn advance(index: usize, n: usize) -> usize {
    (index + 1) % n
}

/// Number of occupied slots between `tail` and `head`.
///
/// Wraparound-correct for unsigned indices: `head` and `tail` must both
/// be in `[0, n)`.
#[inline(always)]
#[must_use]
pub const fn count(head: usize, tail: usize, n: usize) -> usize {
    (head + n - tail) % n
}

/// Whether the ring is full, leaving the mandatory one-slot gap.
#[inline(always)]
#[must_use]
pub const fn is_full(head: usize, tail: usize, n: usize) -> bool {
    advance(head, n) == tail
}

/// Whether the ring is empty.
#[inline(always)]
#[must_use]
pub const fn is_empty(head: usize, tail: usize) -> bool {
    head == tail
}

// =============================================================================
// Tests
// =============================================================================
