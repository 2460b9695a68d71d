/// Bit-significance reordering of the low-frequency DCT block.
///
/// A plain DCT hash emits the K×K block row by row, which scatters the most
/// visually significant coefficients across the bit string. This table
/// instead orders the block by "layer" (growing frequency square), so the
/// hash's high bits carry the coarse structure of the image and numerically
/// close hashes tend to be perceptually similar. That makes the hash usable
/// as an approximately sortable key.
pub struct ReorderTable {
    pairs: Vec<(usize, usize)>,
}

impl ReorderTable {
    /// Build the emission order for a K×K block.
    ///
    /// Layer `l` owns output positions `[l², (l+1)²)`: pairs `(u, l)` for
    /// `u <= l` land on the even offsets and pairs `(l, v)` for `v < l` on
    /// the odd offsets, interleaving column-varying and row-varying
    /// coefficients of the same frequency magnitude. Every cell of the
    /// block is placed exactly once, so the table is a permutation and each
    /// position can be written directly instead of sorting by key.
    pub fn new(k: usize) -> Self {
        let mut pairs = vec![(0usize, 0usize); k * k];
        for l in 0..k {
            let base = l * l;
            for u in 0..=l {
                pairs[base + 2 * u] = (u, l);
            }
            for v in 0..l {
                pairs[base + 2 * v + 1] = (l, v);
            }
        }
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in bit-emission order, most significant first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }
}
