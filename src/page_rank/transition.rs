use crate::{common::check_damping, Error, LinkGraph, ProbabilityDistribution, RankTable};

/// Distribution over the page visited after `page`.
///
/// With probability `damping` the surfer follows one of `page`'s links,
/// otherwise it jumps to any page of the corpus. A page without links jumps
/// uniformly to every page, itself included.
pub fn transition_model(
    graph: &LinkGraph,
    page: &str,
    damping: f64,
) -> crate::Result<ProbabilityDistribution> {
    check_damping(damping)?;
    let pos = graph
        .position(page)
        .ok_or_else(|| Error::InvalidPage(page.to_string()))?;
    let weights = transition_weights(graph, pos, damping);
    Ok(RankTable::from_positions(graph, &weights))
}

/// Same as [`transition_model`], indexed by page position.
pub(crate) fn transition_weights(graph: &LinkGraph, pos: usize, damping: f64) -> Vec<f64> {
    let n = graph.len() as f64;
    let links = graph.out_positions(pos);
    if links.is_empty() {
        return vec![1.0 / n; graph.len()];
    }
    let mut weights = vec![(1.0 - damping) / n; graph.len()];
    let unit = damping / (links.len() as f64);
    for v in links {
        weights[v] += unit;
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> LinkGraph {
        LinkGraph::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec![]),
        ])
    }

    #[test]
    fn follows_links() {
        let g = corpus();
        let d = transition_model(&g, "2.html", 0.85).unwrap();
        assert!((d.get("1.html").unwrap() - (0.05 + 0.425)).abs() < 1e-12);
        assert!((d.get("2.html").unwrap() - 0.05).abs() < 1e-12);
        assert!((d.get("3.html").unwrap() - (0.05 + 0.425)).abs() < 1e-12);
        assert!((d.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dead_end_is_uniform() {
        let g = corpus();
        let d = transition_model(&g, "3.html", 0.85).unwrap();
        for (_, w) in d.iter() {
            assert!((w - 1.0 / 3.0).abs() < 1e-12);
        }
        assert!((d.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_page() {
        let g = LinkGraph::from_links([("a", Vec::<&str>::new())]);
        let d = transition_model(&g, "a", 0.85).unwrap();
        assert_eq!(d.get("a"), Some(1.0));
    }

    #[test]
    fn rejects_unknown_page() {
        let g = corpus();
        let err = transition_model(&g, "4.html", 0.85).unwrap_err();
        assert!(matches!(err, Error::InvalidPage(p) if p == "4.html"));
    }

    #[test]
    fn rejects_bad_damping() {
        let g = corpus();
        for d in [0.0, 1.0, 1.5, -0.1] {
            let err = transition_model(&g, "1.html", d).unwrap_err();
            assert!(matches!(err, Error::InvalidDamping(_)), "{err:?}");
        }
    }
}
