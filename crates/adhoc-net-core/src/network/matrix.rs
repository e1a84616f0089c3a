//! Symmetric adjacency matrix keyed by node position

use crate::error::{NetError, Result};
use crate::id::LinkId;

/// Square matrix of optional link ids
///
/// Slot `(i, j)` and its mirror `(j, i)` always hold the same link or are
/// both empty. Indices are node positions, so the matrix is rebuilt whenever
/// the node list changes shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    slots: Vec<Option<LinkId>>,
}

impl AdjacencyMatrix {
    pub fn new(size: usize) -> Self {
        AdjacencyMatrix {
            size,
            slots: vec![None; size * size],
        }
    }

    /// Matrix dimension
    pub fn size(&self) -> usize {
        self.size
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(NetError::IndexOutOfRange {
                index,
                size: self.size,
            })
        }
    }

    fn slot(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Store `link` at `(row, col)` and its mirror.
    ///
    /// An occupied slot is never overwritten; the conflict names the link
    /// already there.
    pub fn put(&mut self, row: usize, col: usize, link: LinkId) -> Result<()> {
        self.check(row)?;
        self.check(col)?;

        let at = self.slot(row, col);
        if let Some(existing) = self.slots[at] {
            return Err(NetError::duplicate_link(row, col, existing));
        }

        let mirror = self.slot(col, row);
        self.slots[at] = Some(link);
        self.slots[mirror] = Some(link);
        Ok(())
    }

    /// Clear `(row, col)` and its mirror, returning the link that was there
    pub fn remove(&mut self, row: usize, col: usize) -> Result<LinkId> {
        self.check(row)?;
        self.check(col)?;

        let at = self.slot(row, col);
        let Some(link) = self.slots[at].take() else {
            return Err(NetError::MissingLink { row, col });
        };
        let mirror = self.slot(col, row);
        self.slots[mirror] = None;
        Ok(link)
    }

    /// Link at `(row, col)`; out-of-range pairs are simply empty
    pub fn get(&self, row: usize, col: usize) -> Option<LinkId> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.slots[self.slot(row, col)]
    }

    /// Occupied slots of `row` as `(col, link)`, in increasing column order
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, LinkId)> + '_ {
        let cells: &[Option<LinkId>] = if row < self.size {
            &self.slots[row * self.size..(row + 1) * self.size]
        } else {
            &[]
        };
        cells
            .iter()
            .enumerate()
            .filter_map(|(col, slot)| slot.map(|link| (col, link)))
    }

    /// Number of distinct links stored
    pub fn link_count(&self) -> usize {
        let mut count = 0;
        for row in 0..self.size {
            for col in row..self.size {
                if self.slots[self.slot(row, col)].is_some() {
                    count += 1;
                }
            }
        }
        count
    }
}
