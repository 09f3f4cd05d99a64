use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A closed, directed graph of pages.
///
/// Every link target is a page of the graph and no page links to itself.
/// Pages are kept in lexicographic order, and that order is the position
/// every estimator uses when it walks over the pages.
#[derive(Clone)]
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    pages: Vec<(String, VertexId)>,
    positions: HashMap<VertexId, usize, ahash::RandomState>,
    index: HashMap<String, usize, ahash::RandomState>,
}

impl LinkGraph {
    /// Builds a graph out of `(page, links)` pairs.
    ///
    /// Links pointing outside the collection and self links are dropped.
    /// A page listed more than once gets the union of its links.
    pub fn from_links<I, P, L, T>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, targets) in links {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let pages: Vec<(String, VertexId)> = raw
            .keys()
            .map(|page| (page.clone(), graph.add_vertex()))
            .collect();
        let positions: HashMap<_, _, ahash::RandomState> = pages
            .iter()
            .enumerate()
            .map(|(pos, (_, v))| (*v, pos))
            .collect();
        let index: HashMap<_, _, ahash::RandomState> = pages
            .iter()
            .enumerate()
            .map(|(pos, (page, _))| (page.clone(), pos))
            .collect();

        for (pos, targets) in raw.values().enumerate() {
            let source = pages[pos].1;
            for target in targets.iter() {
                let Some(&sink_pos) = index.get(target) else {
                    continue;
                };
                if sink_pos == pos {
                    continue;
                }
                graph.add_edge(source, pages[sink_pos].1);
            }
        }

        log::debug!(
            "link graph: {} pages, {} links",
            graph.vertex_size(),
            graph.edge_size()
        );
        Self {
            graph,
            pages,
            positions,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.index.contains_key(page)
    }

    /// Pages in lexicographic order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.iter().map(|(page, _)| page.as_str())
    }

    /// Sorted link targets of `page`, or `None` for an unknown page.
    pub fn links(&self, page: &str) -> Option<Vec<&str>> {
        let pos = self.position(page)?;
        Some(
            self.out_positions(pos)
                .into_iter()
                .map(|p| self.page_at(p))
                .collect(),
        )
    }

    pub(crate) fn position(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    pub(crate) fn page_at(&self, pos: usize) -> &str {
        &self.pages[pos].0
    }

    pub(crate) fn out_positions(&self, pos: usize) -> Vec<usize> {
        let u = self.pages[pos].1;
        let mut res: Vec<usize> = self
            .graph
            .out_edges(&u)
            .filter_map(|e| self.positions.get(&e.sink).copied())
            .collect();
        res.sort_unstable();
        res
    }
}

impl std::fmt::Debug for LinkGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (pos, (page, _)) in self.pages.iter().enumerate() {
            let links: Vec<_> = self
                .out_positions(pos)
                .into_iter()
                .map(|p| self.page_at(p))
                .collect();
            map.entry(page, &links);
        }
        map.finish()
    }
}
