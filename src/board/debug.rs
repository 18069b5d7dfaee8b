use std::fmt::Write;

use super::{Bitboard, Board};

impl Board {
    /// Assert the position invariants in debug builds. Compiles to nothing in release.
    #[inline]
    pub(crate) fn debug_validate(&self) {
        debug_assert!(
            (self.stones[0] & self.stones[1]).is_empty(),
            "stone masks overlap\n{}",
            mask_grid("overlap", self.stones[0] & self.stones[1])
        );
    }
}

/// Render a mask as an 8x8 grid, rank 8 on top, for assertion messages.
pub(crate) fn mask_grid(label: &str, bb: Bitboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {:#018x}", label, bb.0);
    for rank in (0..8).rev() {
        let _ = write!(out, "{} ", rank + 1);
        for file in 0..8 {
            let ch = if (bb.0 >> (rank * 8 + file)) & 1 == 1 {
                '1'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("  ABCDEFGH\n");
    out
}
