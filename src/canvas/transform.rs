//! Affine transform kernel.
//!
//! Every node carries the chain of 3×3 matrices inherited from its ancestors
//! plus one matrix of its own: the placement of its local unit square inside
//! its parent's unit square. A node's bounds are computed in its own local
//! space and pushed through everything *but* that last matrix, so
//! [`compose`] deliberately stops one short of the end of the chain.

use glam::{DMat3, DVec2, DVec3, dvec2, dvec3};

/// Product of every matrix of `chain` except the last, starting from identity.
///
/// For a node's chain this is the ancestor transform: where the parent's unit
/// square lands in pixels. An empty or single-element chain yields identity.
pub fn compose(chain: &[DMat3]) -> DMat3 {
    match chain.split_last() {
        Some((_, ancestors)) => product(ancestors),
        None => DMat3::IDENTITY,
    }
}

/// Product of every matrix of `chain`, starting from identity.
pub fn product(chain: &[DMat3]) -> DMat3 {
    chain.iter().fold(DMat3::IDENTITY, |acc, m| acc * *m)
}

/// Maps the unit square onto the rectangle at `origin` with extent `size`.
pub fn placement(origin: DVec2, size: DVec2) -> DMat3 {
    DMat3::from_translation(origin) * DMat3::from_scale(size)
}

/// Flips Y around the horizontal line `height / 2`: math Y-up to screen Y-down.
pub fn y_flip(height: f64) -> DMat3 {
    DMat3::from_cols(DVec3::X, DVec3::NEG_Y, dvec3(0.0, height, 1.0))
}

/// Scales the unit square to `width × height` pixels.
pub fn pixel_scale(width: f64, height: f64) -> DMat3 {
    DMat3::from_scale(dvec2(width, height))
}

/// Ordered list of matrices from the root down to (and including) one node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformChain(Vec<DMat3>);

impl TransformChain {
    pub fn new(matrices: Vec<DMat3>) -> Self {
        Self(matrices)
    }

    /// The chain of a child: this chain plus the child's own placement.
    pub fn extend(&self, local: DMat3) -> Self {
        let mut matrices = Vec::with_capacity(self.0.len() + 1);
        matrices.extend_from_slice(&self.0);
        matrices.push(local);
        Self(matrices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[DMat3] {
        &self.0
    }

    /// The matrix contributed by the node owning this chain.
    pub fn local(&self) -> Option<&DMat3> {
        self.0.last()
    }

    /// See [`compose`].
    pub fn ancestors(&self) -> DMat3 {
        compose(&self.0)
    }

    /// Replace the matrix at `index`. Only the figure root uses this, on resize.
    pub(crate) fn set(&mut self, index: usize, matrix: DMat3) {
        self.0[index] = matrix;
    }

    /// Overwrite this chain's inherited prefix with `parent`'s current matrices.
    pub(crate) fn rebase(&mut self, parent: &TransformChain) {
        let inherited = parent.len().min(self.0.len());
        self.0[..inherited].copy_from_slice(&parent.0[..inherited]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DMat3, b: DMat3) -> bool {
        a.abs_diff_eq(b, 1e-12)
    }

    // ==================== compose tests ====================

    #[test]
    fn compose_of_empty_and_single_is_identity() {
        assert_eq!(compose(&[]), DMat3::IDENTITY);
        assert_eq!(compose(&[pixel_scale(3.0, 4.0)]), DMat3::IDENTITY);
    }

    #[test]
    fn compose_drops_the_last_matrix() {
        let a = y_flip(100.0);
        let b = pixel_scale(200.0, 100.0);
        let c = placement(dvec2(0.1, 0.2), dvec2(0.5, 0.5));
        assert_eq!(compose(&[a, b, c]), product(&[a, b]));
    }

    #[test]
    fn product_is_associative() {
        let a = y_flip(50.0);
        let b = pixel_scale(80.0, 50.0);
        let c = placement(dvec2(0.25, 0.5), dvec2(0.5, 0.25));
        assert!(close((a * b) * c, a * (b * c)));
        assert!(close(product(&[a, b, c]), a * product(&[b, c])));
    }

    // ==================== constructor tests ====================

    #[test]
    fn placement_maps_unit_square_corners() {
        let m = placement(dvec2(0.1, 0.2), dvec2(0.5, 0.4));
        let lo = m.transform_point2(DVec2::ZERO);
        let hi = m.transform_point2(DVec2::ONE);
        assert!(lo.abs_diff_eq(dvec2(0.1, 0.2), 1e-12));
        assert!(hi.abs_diff_eq(dvec2(0.6, 0.6), 1e-12));
    }

    #[test]
    fn y_flip_then_scale_maps_math_to_screen() {
        let m = y_flip(100.0) * pixel_scale(200.0, 100.0);
        // bottom-left of the unit square is the bottom-left pixel corner
        assert!(m.transform_point2(DVec2::ZERO).abs_diff_eq(dvec2(0.0, 100.0), 1e-12));
        // top-right is the top-right pixel corner
        assert!(m.transform_point2(DVec2::ONE).abs_diff_eq(dvec2(200.0, 0.0), 1e-12));
    }

    // ==================== TransformChain tests ====================

    #[test]
    fn extend_appends_local_matrix() {
        let root = TransformChain::new(vec![y_flip(10.0), pixel_scale(10.0, 10.0)]);
        let local = placement(dvec2(0.5, 0.5), dvec2(0.5, 0.5));
        let child = root.extend(local);
        assert_eq!(child.len(), 3);
        assert_eq!(child.local(), Some(&local));
        assert_eq!(child.ancestors(), product(root.as_slice()));
    }

    #[test]
    fn rebase_rewrites_only_the_inherited_prefix() {
        let root = TransformChain::new(vec![y_flip(10.0), pixel_scale(10.0, 10.0)]);
        let local = placement(dvec2(0.5, 0.0), dvec2(0.5, 1.0));
        let mut child = root.extend(local);

        let resized = TransformChain::new(vec![y_flip(40.0), pixel_scale(20.0, 40.0)]);
        child.rebase(&resized);

        assert_eq!(&child.as_slice()[..2], resized.as_slice());
        assert_eq!(child.local(), Some(&local));
    }
}
