//! The candidate list tried by the selection engine.

use crate::domain::ModelKind;

/// All model kinds, in evaluation order.
///
/// Selection keeps the earliest model among near-ties, so this order is the
/// tie-break: simple time-domain models first, then the log-target
/// Polynomial, then the log-size models, and Exponential last.
pub const ALL_MODELS: [ModelKind; 8] = [
    ModelKind::Constant,
    ModelKind::Linear,
    ModelKind::Quadratic,
    ModelKind::Cubic,
    ModelKind::Polynomial,
    ModelKind::Logarithmic,
    ModelKind::Linearithmic,
    ModelKind::Exponential,
];

/// Model kinds sorted by simplicity rank (for display).
pub fn by_simplicity(kinds: &[ModelKind]) -> Vec<ModelKind> {
    let mut out = kinds.to_vec();
    out.sort_by_key(|k| k.rank());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_kind_once() {
        let sorted = by_simplicity(&ALL_MODELS);
        assert_eq!(sorted.len(), 8);
        assert_eq!(sorted.first(), Some(&ModelKind::Constant));
        assert_eq!(sorted.last(), Some(&ModelKind::Exponential));
        for w in sorted.windows(2) {
            assert!(w[0].rank() < w[1].rank());
        }
    }
}
