//! Piece catalog - sampling weights and the weighted draw
//!
//! The catalog is a static table from piece identity to a sampling weight,
//! constructed once at sequencer construction and never mutated. The draw
//! walks the catalog in enumeration order accumulating weights, so each
//! piece's long-run frequency converges to `weight / total_weight`.

use crate::types::{PieceKind, I_PIECE_WEIGHT, STANDARD_PIECE_WEIGHT};
use rand::Rng;

/// Immutable weight table over the closed piece set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCatalog {
    /// Weights indexed by `PieceKind` enumeration order.
    weights: [u32; 7],
    total_weight: u32,
}

impl PieceCatalog {
    /// The session-standard table: I weighted 6, everything else 4.
    pub fn standard() -> Self {
        let mut weights = [STANDARD_PIECE_WEIGHT; 7];
        weights[PieceKind::I.index()] = I_PIECE_WEIGHT;
        Self::with_weights(weights)
    }

    /// Build a catalog from explicit weights. At least one weight must be
    /// positive; a zero weight removes that piece from the draw entirely.
    pub fn with_weights(weights: [u32; 7]) -> Self {
        let total_weight = weights.iter().sum();
        debug_assert!(total_weight > 0, "catalog needs positive weight mass");
        Self {
            weights,
            total_weight,
        }
    }

    /// Weight assigned to a piece.
    pub fn weight_of(&self, kind: PieceKind) -> u32 {
        self.weights[kind.index()]
    }

    /// Sum of all weights. Constant for the catalog's lifetime.
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Weighted draw by cumulative-interval walk.
    ///
    /// With `exclude_i` set, the draw covers only the non-I weight mass and
    /// skips I in the walk, which leaves the remaining pieces' pairwise
    /// probability ratios untouched. Exclusion is ignored when the catalog
    /// has no weight mass outside I (a draw must always succeed).
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, exclude_i: bool) -> PieceKind {
        let i_weight = self.weight_of(PieceKind::I);
        let exclude_i = exclude_i && self.total_weight > i_weight;
        let total = if exclude_i {
            self.total_weight - i_weight
        } else {
            self.total_weight
        };

        let mut draw = rng.gen_range(0..total);
        for kind in PieceKind::ALL {
            if exclude_i && kind == PieceKind::I {
                continue;
            }
            let weight = self.weight_of(kind);
            if draw < weight {
                return kind;
            }
            draw -= weight;
        }

        // The walk consumes exactly `total`, so the loop always returns.
        unreachable!("draw exceeded total weight mass")
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_standard_weights() {
        let catalog = PieceCatalog::standard();
        assert_eq!(catalog.weight_of(PieceKind::I), 6);
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::O,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(catalog.weight_of(kind), 4);
        }
        assert_eq!(catalog.total_weight(), 30);
    }

    #[test]
    fn test_sample_never_returns_excluded_i() {
        let catalog = PieceCatalog::standard();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            assert_ne!(catalog.sample(&mut rng, true), PieceKind::I);
        }
    }

    #[test]
    fn test_degenerate_single_piece_catalog() {
        let mut weights = [0; 7];
        weights[PieceKind::T.index()] = 5;
        let catalog = PieceCatalog::with_weights(weights);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            assert_eq!(catalog.sample(&mut rng, false), PieceKind::T);
        }
    }

    #[test]
    fn test_exclusion_ignored_when_only_i_has_weight() {
        let mut weights = [0; 7];
        weights[PieceKind::I.index()] = 6;
        let catalog = PieceCatalog::with_weights(weights);
        let mut rng = StdRng::seed_from_u64(11);

        // A draw must always succeed, so exclusion cannot apply here.
        assert_eq!(catalog.sample(&mut rng, true), PieceKind::I);
    }

    #[test]
    fn test_zero_weight_piece_never_drawn() {
        let mut weights = [4; 7];
        weights[PieceKind::S.index()] = 0;
        let catalog = PieceCatalog::with_weights(weights);
        let mut rng = StdRng::seed_from_u64(23);

        for _ in 0..5_000 {
            assert_ne!(catalog.sample(&mut rng, false), PieceKind::S);
        }
    }
}
