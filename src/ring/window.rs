use super::{NodeId, Ring};

/// Values shown around the current node in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<T> {
    /// The `width` values leading up to the current node, oldest first
    pub before: Vec<T>,
    /// The `width` values following the current node
    pub after: Vec<T>,
}

/// Collect the `width` values on either side of `current`.
///
/// Rings smaller than `2 * width + 1` wrap into themselves, so values may
/// repeat and the current value may appear in its own window.
pub fn window<T: Clone>(ring: &Ring<T>, current: NodeId, width: usize) -> Window<T> {
    let before = collect_forward(ring, ring.step_backward(current, width), width);
    let after = collect_forward(ring, ring.next(current), width);
    Window { before, after }
}

fn collect_forward<T: Clone>(ring: &Ring<T>, start: NodeId, count: usize) -> Vec<T> {
    let mut values = Vec::with_capacity(count);
    let mut node = start;
    for _ in 0..count {
        values.push(ring.get(node).clone());
        node = ring.next(node);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(values: &[&'static str]) -> Ring<&'static str> {
        Ring::build(values.iter().copied()).unwrap()
    }

    #[test]
    fn window_in_the_middle() {
        let ring = ring_of(&["A", "B", "C", "D", "E"]);
        let w = window(&ring, ring.node(2).unwrap(), 2);

        assert_eq!(w.before, ["A", "B"]);
        assert_eq!(w.after, ["D", "E"]);
    }

    #[test]
    fn window_wraps_past_the_start() {
        let ring = ring_of(&["A", "B", "C", "D", "E"]);
        let w = window(&ring, ring.node(0).unwrap(), 2);

        assert_eq!(w.before, ["D", "E"]);
        assert_eq!(w.after, ["B", "C"]);
    }

    #[test]
    fn window_wraps_past_the_end() {
        let ring = ring_of(&["A", "B", "C", "D", "E"]);
        let w = window(&ring, ring.node(4).unwrap(), 2);

        assert_eq!(w.before, ["C", "D"]);
        assert_eq!(w.after, ["A", "B"]);
    }

    #[test]
    fn small_ring_repeats_through_itself() {
        let ring = ring_of(&["X", "Y"]);
        let w = window(&ring, ring.node(0).unwrap(), 2);

        assert_eq!(w.before, ["X", "Y"]);
        assert_eq!(w.after, ["Y", "X"]);
    }

    #[test]
    fn single_node_fills_window_with_itself() {
        let ring = ring_of(&["solo"]);
        let w = window(&ring, ring.node(0).unwrap(), 3);

        assert_eq!(w.before, ["solo"; 3]);
        assert_eq!(w.after, ["solo"; 3]);
    }

    #[test]
    fn zero_width_is_empty() {
        let ring = ring_of(&["A", "B", "C"]);
        let w = window(&ring, ring.node(1).unwrap(), 0);

        assert!(w.before.is_empty());
        assert!(w.after.is_empty());
    }

    #[test]
    fn window_leaves_ring_untouched() {
        let ring = ring_of(&["A", "B", "C", "D"]);
        let current = ring.node(1).unwrap();
        let _ = window(&ring, current, 5);

        assert_eq!(*ring.get(current), "B");
        assert_eq!(ring.next(current), ring.node(2).unwrap());
        assert_eq!(ring.prev(current), ring.node(0).unwrap());
    }
}
