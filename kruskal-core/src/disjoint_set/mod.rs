//! Union-find (disjoint set union) over a dense range of sites.
//!
//! The Kruskal selector uses this structure to test whether an edge joins two
//! different components and to merge them when it does. Roots are found with
//! an explicit loop over a flat parent array and every traversed node is
//! re-pointed at the root (path compression). Merges attach the shallower
//! tree under the deeper one (union by rank).
//!
//! When two roots share a rank, the root of the first argument to
//! [`DisjointSet::union`] becomes the parent. The choice has no effect on
//! correctness and callers must not depend on it.

use crate::error::DisjointSetError;

type SiteResult<T> = core::result::Result<T, DisjointSetError>;

/// Partition of `0..len()` into disjoint components.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(sets.union(2, 3)?);
/// assert!(!sets.connected(1, 2)?);
/// assert_eq!(sets.count(), 2);
/// # Ok::<(), kruskal_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSet {
    leader: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `size` singleton components.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            leader: (0..size).collect(),
            rank: vec![0; size],
            components: size,
        }
    }

    /// Returns the number of sites tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.leader.len() }

    /// Returns `true` when no sites are tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.leader.is_empty() }

    /// Returns the current number of components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> usize { self.components }

    /// Returns the direct parent pointer of `site` without compressing.
    #[must_use]
    pub fn leader(&self, site: usize) -> Option<usize> {
        self.leader.get(site).copied()
    }

    /// Returns the rank recorded for `site`.
    #[must_use]
    pub fn rank(&self, site: usize) -> Option<u8> {
        self.rank.get(site).copied()
    }

    /// Returns the root of the component containing `site`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at it.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::SiteOutOfBounds`] when `site >= len()`.
    pub fn find(&mut self, site: usize) -> SiteResult<usize> {
        self.check(site)?;

        let mut root = site;
        while self.leader[root] != root {
            root = self.leader[root];
        }

        let mut node = site;
        while self.leader[node] != root {
            let parent = self.leader[node];
            self.leader[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `true` when two components were merged and `false` when both
    /// sites already shared a component, in which case nothing changes.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::SiteOutOfBounds`] when either site is out
    /// of range. Neither site is touched in that case.
    pub fn union(&mut self, left: usize, right: usize) -> SiteResult<bool> {
        self.check(left)?;
        self.check(right)?;

        let mut parent = self.find(left)?;
        let mut child = self.find(right)?;
        if parent == child {
            return Ok(false);
        }

        let parent_rank = self.rank[parent];
        let child_rank = self.rank[child];
        if parent_rank < child_rank {
            std::mem::swap(&mut parent, &mut child);
        }
        self.leader[child] = parent;
        if parent_rank == child_rank {
            self.rank[parent] = parent_rank.saturating_add(1);
        }

        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::SiteOutOfBounds`] when either site is out
    /// of range.
    pub fn connected(&mut self, left: usize, right: usize) -> SiteResult<bool> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, site: usize) -> SiteResult<()> {
        if site < self.leader.len() {
            Ok(())
        } else {
            Err(DisjointSetError::SiteOutOfBounds {
                site,
                size: self.leader.len(),
            })
        }
    }
}
