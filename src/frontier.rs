use std::ops::Index;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pos: Position,
    ancestor: Option<usize>, // Index of the record this one was discovered from, None for entrances.
}

impl VisitRecord {
    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn ancestor(&self) -> Option<usize> {
        self.ancestor
    }

    pub fn is_root(&self) -> bool {
        self.ancestor.is_none()
    }
}

/// Breadth-first discovery order of the flood.
///
/// Records are only ever appended, so reading them by index from the front
/// gives FIFO order, while the ancestor indices form a forest rooted at the
/// entrances that paths can be walked back through.
#[derive(Debug, Default)]
pub struct Frontier {
    records: Vec<VisitRecord>,
}

impl Index<usize> for Frontier {
    type Output = VisitRecord;

    fn index(&self, ind: usize) -> &Self::Output {
        &self.records[ind]
    }
}

impl Frontier {
    pub fn seed<I: IntoIterator<Item = Position>>(positions: I) -> Self {
        Self {
            records: positions
                .into_iter()
                .map(|pos| VisitRecord {
                    pos,
                    ancestor: None,
                })
                .collect(),
        }
    }

    /// Appends a record at the tail and returns its index.
    pub fn append(&mut self, ancestor: usize, pos: Position) -> usize {
        debug_assert!(ancestor < self.records.len());
        self.records.push(VisitRecord {
            pos,
            ancestor: Some(ancestor),
        });

        self.records.len() - 1
    }

    pub fn get(&self, ind: usize) -> Option<&VisitRecord> {
        self.records.get(ind)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisitRecord> {
        self.records.iter()
    }

    /// Index of the first record for the given position.
    pub fn find(&self, pos: &Position) -> Option<usize> {
        self.records.iter().position(|record| record.pos == *pos)
    }

    /// Walks from the record at `ind` back to its root, yielding `ind` first.
    pub fn ancestors(&self, ind: usize) -> Ancestors<'_> {
        Ancestors {
            frontier: self,
            next_ind: self.records.get(ind).map(|_| ind),
        }
    }
}

pub struct Ancestors<'a> {
    frontier: &'a Frontier,
    next_ind: Option<usize>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a VisitRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.frontier.records.get(self.next_ind?)?;
        self.next_ind = record.ancestor;

        Some(record)
    }
}
