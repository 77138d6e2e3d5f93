//! Candidate lines for a board size.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::BoardSize;

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row, numbered from the top.
    Row(usize),
    /// Column, numbered from the left.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A full-length row, column, or diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    indices: Vec<usize>,
}

impl Line {
    /// Which family this line belongs to.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Board indices along the line, in order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// Builds every candidate line for `size`, in search order.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal: `2 * side + 2` lines in total.
#[instrument]
pub fn lines(size: BoardSize) -> Vec<Line> {
    let n = size.side();
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push(Line {
            kind: LineKind::Row(row),
            indices: (0..n).map(|col| row * n + col).collect(),
        });
    }

    for col in 0..n {
        lines.push(Line {
            kind: LineKind::Column(col),
            indices: (0..n).map(|row| row * n + col).collect(),
        });
    }

    lines.push(Line {
        kind: LineKind::Diagonal,
        indices: (0..n).map(|i| i * n + i).collect(),
    });
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        indices: (0..n).map(|i| i * n + (n - 1 - i)).collect(),
    });

    lines
}
