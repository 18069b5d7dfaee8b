use super::{Board, Color};

impl Board {
    /// Count the leaves of the move tree `depth` plies deep.
    ///
    /// A forced pass counts as a ply; a finished game counts as a single leaf.
    pub fn perft(&mut self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(color);
        if moves.is_empty() {
            if self.is_terminal() {
                return 1;
            }
            return self.perft(color.opponent(), depth - 1);
        }
        if depth == 1 {
            return u64::from(moves.popcount());
        }

        let mut nodes = 0;
        for cell in moves {
            let flips = self.flip_mask(color, cell);
            self.toggle(color, cell, flips);
            nodes += self.perft(color.opponent(), depth - 1);
            self.toggle(color, cell, flips);
        }

        nodes
    }
}
