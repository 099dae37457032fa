use std::collections::HashMap;
use std::io::ErrorKind;

pub type Result<T> = std::io::Result<T>;

/// Disjoint-set structure over string node identifiers. The identifiers
/// are interned into slots of a parent vector; representatives are slot
/// indices. State is owned by a single algorithm run and never shared.
pub struct UnionFind<'a> {
    index: HashMap<&'a str, usize>,
    parent: Vec<usize>,
}

impl<'a> UnionFind<'a> {
    /// Registers every node as its own singleton set. Registering an
    /// identifier twice keeps the first slot.
    pub fn new(nodes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = HashMap::new();
        for node in nodes {
            let slot = index.len();
            index.entry(node).or_insert(slot);
        }

        let parent = (0..index.len()).collect();
        Self { index, parent }
    }

    /// Representative of the set containing `node`, with path compression.
    /// Errs only if `node` was never registered.
    pub fn find(&mut self, node: &str) -> Result<usize> {
        match self.index.get(node) {
            Some(&slot) => Ok(self.find_root(slot)),
            None => Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("Node {node:?} was never registered"),
            )),
        }
    }

    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // retrace the walk and repoint every slot directly at the root
        let mut walk = slot;
        while self.parent[walk] != root {
            let next = self.parent[walk];
            self.parent[walk] = root;
            walk = next;
        }

        root
    }

    /// Merges two sets given their representatives, repointing `root_a`
    /// at `root_b`. Callers obtain the roots from `find` and must check
    /// they differ first.
    pub fn union(&mut self, root_a: usize, root_b: usize) {
        self.parent[root_a] = root_b;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn singletons_have_distinct_roots() {
        let mut uf = UnionFind::new(["a", "b", "c"]);

        let ra = uf.find("a").unwrap();
        let rb = uf.find("b").unwrap();
        let rc = uf.find("c").unwrap();

        assert_ne!(ra, rb);
        assert_ne!(ra, rc);
        assert_ne!(rb, rc);
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = UnionFind::new(["a", "b", "c"]);

        let ra = uf.find("a").unwrap();
        let rb = uf.find("b").unwrap();
        uf.union(ra, rb);

        assert_eq!(uf.find("a").unwrap(), uf.find("b").unwrap());
        assert_ne!(uf.find("a").unwrap(), uf.find("c").unwrap());
    }

    #[test]
    fn find_compresses_chains() {
        let mut uf = UnionFind::new(["a", "b", "c", "d"]);

        // build the chain a -> b -> c -> d by always linking roots
        for (u, v) in [("a", "b"), ("b", "c"), ("c", "d")] {
            let ru = uf.find(u).unwrap();
            let rv = uf.find(v).unwrap();
            uf.union(ru, rv);
        }

        let root = uf.find("a").unwrap();

        // every slot on the walk now points at the root directly
        for slot in 0..uf.parent.len() {
            assert_eq!(uf.parent[slot], root);
        }
    }

    #[test]
    fn unregistered_node_is_an_error() {
        let mut uf = UnionFind::new(["a"]);

        let err = uf.find("z").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn duplicate_registration_keeps_first_slot() {
        let mut uf = UnionFind::new(["a", "a", "b"]);

        assert_eq!(uf.parent.len(), 2);
        assert_ne!(uf.find("a").unwrap(), uf.find("b").unwrap());
    }
}
