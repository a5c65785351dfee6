use std::collections::HashMap;

use crate::error::MazeError;

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parents: HashMap<usize, usize>,
    sizes: HashMap<usize, usize>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I: IntoIterator<Item = usize>>(ids: I) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.create_set(id);
        }
        set
    }

    pub fn create_set(&mut self, id: usize) {
        if !self.parents.contains_key(&id) {
            self.parents.insert(id, id);
            self.sizes.insert(id, 1);
        }
    }

    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.parents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn find(&mut self, id: usize) -> Result<usize, MazeError> {
        let mut root = id;
        loop {
            let parent = *self.parents.get(&root).ok_or(MazeError::UnknownId(id))?;
            if parent == root {
                break;
            }
            root = parent;
        }

        // point everything on the walked path straight at the root
        let mut node = id;
        while node != root {
            let next = self.parents[&node];
            self.parents.insert(node, root);
            node = next;
        }

        Ok(root)
    }

    // b's root goes under a's root, false if already joined
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, MazeError> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        self.parents.insert(root_b, root_a);
        let size_b = self.sizes.remove(&root_b).unwrap_or(1);
        *self.sizes.entry(root_a).or_insert(1) += size_b;

        Ok(true)
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool, MazeError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    pub fn set_size(&mut self, id: usize) -> Result<usize, MazeError> {
        let root = self.find(id)?;
        Ok(self.sizes.get(&root).copied().unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_root() {
        let mut set = DisjointSet::with_ids(0..4);
        assert_eq!(set.len(), 4);
        for id in 0..4 {
            assert_eq!(set.find(id), Ok(id));
            assert_eq!(set.set_size(id), Ok(1));
        }
    }

    #[test]
    fn union_hangs_second_root_under_first() {
        let mut set = DisjointSet::with_ids(0..6);
        assert_eq!(set.union(1, 2), Ok(true));
        assert_eq!(set.union(3, 2), Ok(true));

        assert_eq!(set.find(2), Ok(3));
        assert_eq!(set.find(1), Ok(3));
        assert_eq!(set.set_size(1), Ok(3));
        assert_eq!(set.same_set(1, 3), Ok(true));
        assert_eq!(set.same_set(1, 4), Ok(false));
    }

    #[test]
    fn union_within_a_set_is_a_no_op() {
        let mut set = DisjointSet::with_ids(0..3);
        set.union(0, 1).unwrap();
        assert_eq!(set.union(1, 0), Ok(false));
        assert_eq!(set.find(1), Ok(0));
        assert_eq!(set.set_size(0), Ok(2));
    }

    #[test]
    fn long_chains_terminate() {
        let mut set = DisjointSet::with_ids(0..1000);
        for id in 1..1000 {
            set.union(id, id - 1).unwrap();
        }
        assert_eq!(set.find(0), Ok(999));
        assert_eq!(set.set_size(500), Ok(1000));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut set = DisjointSet::with_ids(0..2);
        assert_eq!(set.find(7), Err(MazeError::UnknownId(7)));
        assert_eq!(set.union(0, 7), Err(MazeError::UnknownId(7)));
        assert_eq!(set.union(9, 0), Err(MazeError::UnknownId(9)));
        assert!(!set.contains(7));
    }

    #[test]
    fn recreating_a_set_keeps_its_membership() {
        let mut set = DisjointSet::with_ids(0..2);
        set.union(0, 1).unwrap();
        set.create_set(1);
        assert_eq!(set.same_set(0, 1), Ok(true));
    }
}
