/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod common;

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use weighted_sccs::graphs::random::BoundedDegree;
use weighted_sccs::prelude::*;
use weighted_sccs::sccs;
use weighted_sccs::visits::depth_first::{SeqIter, SeqRec};

macro_rules! test_scc_algo {
    ($scc:expr, $name:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn test_buckets() -> Result<()> {
                let arcs = [
                    (0, 0),
                    (1, 0),
                    (1, 2),
                    (2, 1),
                    (2, 3),
                    (2, 4),
                    (2, 5),
                    (3, 4),
                    (4, 3),
                    (5, 5),
                    (5, 6),
                    (5, 7),
                    (5, 8),
                    (6, 7),
                    (8, 7),
                ];
                let graph = common::from_arcs(9, &arcs)?;

                let mut components = $scc(&graph, no_logging![])?;
                assert!(common::is_partition(&components, 9));

                let labels = components.labels();
                assert_eq!(labels[1], labels[2]);
                assert_eq!(labels[3], labels[4]);

                let sizes = components.sort_by_size();
                assert_eq!(sizes, vec![2, 2, 1, 1, 1, 1, 1].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_buckets_2() -> Result<()> {
                let graph = common::from_arcs(4, &[(0, 1), (1, 2), (2, 0), (1, 3)])?;

                let mut components = $scc(&graph, no_logging![])?;
                let sizes = components.sort_by_size();

                assert_eq!(sizes, vec![3, 1].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_cycle() -> Result<()> {
                let graph = common::from_arcs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;

                let components = $scc(&graph, no_logging![])?;
                let sizes = components.compute_sizes();

                assert_eq!(sizes, vec![4].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_complete_graph() -> Result<()> {
                let mut graph = WeightedGraph::new(5, 4);
                for i in 0..5 {
                    for j in 0..5 {
                        if i != j {
                            graph.add_arc(i, j, (i * j) as i32)?;
                        }
                    }
                }

                let mut components = $scc(&graph, no_logging![])?;

                let sizes = components.sort_by_size();

                assert!(components.labels().iter().all(|&label| label == 0));
                assert_eq!(sizes, vec![5].into_boxed_slice());

                Ok(())
            }

            #[test]
            fn test_tree() -> Result<()> {
                let arcs = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)];
                let graph = common::from_arcs(7, &arcs)?;

                let components = $scc(&graph, no_logging![])?;

                assert_eq!(components.num_components(), 7);

                Ok(())
            }

            #[test]
            fn test_lozenge() -> Result<()> {
                let arcs = [(0, 1), (1, 0), (0, 2), (1, 3), (2, 3)];
                let graph = common::from_arcs(4, &arcs)?;

                let components = $scc(&graph, no_logging![])?;

                assert!(components.same_partition(&Sccs::new(vec![
                    vec![0, 1].into_boxed_slice(),
                    vec![2].into_boxed_slice(),
                    vec![3].into_boxed_slice(),
                ])));

                Ok(())
            }

            #[test]
            fn test_example() -> Result<()> {
                let graph = common::example_graph()?;

                let components = $scc(&graph, no_logging![])?;

                // Components in the order of the backward pass, and nodes in
                // the finish order of the visit of the transpose
                assert_eq!(
                    components.into_components(),
                    vec![
                        vec![6].into_boxed_slice(),
                        vec![7, 4, 2, 3, 5, 1].into_boxed_slice(),
                        vec![0].into_boxed_slice(),
                    ]
                );

                Ok(())
            }

            #[test]
            fn test_no_arcs() -> Result<()> {
                let components = $scc(&WeightedGraph::new(0, 0), no_logging![])?;
                assert_eq!(components.num_components(), 0);

                let components = $scc(&WeightedGraph::new(5, 3), no_logging![])?;
                assert_eq!(components.num_components(), 5);
                assert!(common::is_partition(&components, 5));

                Ok(())
            }

            #[test]
            fn test_random() -> Result<()> {
                for seed in 0..10 {
                    let graph = BoundedDegree::new(1000, 3, seed).max_weight(10).graph()?;
                    let components = $scc(&graph, no_logging![])?;
                    assert!(common::is_partition(&components, graph.num_nodes()));
                    assert!(components.same_partition(&common::tarjan(&graph)));
                }

                Ok(())
            }

            #[test]
            fn test_transpose_overflow() -> Result<()> {
                let graph = WeightedGraph::from_arcs(4, 1, [(1, 0, 0), (2, 0, 0), (3, 0, 0)])?;

                assert_eq!(
                    $scc(&graph, no_logging![]),
                    Err(VisitError::Graph(GraphError::CapacityExceeded {
                        node: 0,
                        max_degree: 1
                    }))
                );

                Ok(())
            }
        }
    };
}

test_scc_algo!(sccs::kosaraju_iter, kosaraju_iter);
test_scc_algo!(sccs::kosaraju_rec, kosaraju_rec);

#[test]
fn test_iter_and_rec_agree() -> Result<()> {
    for seed in 0..20 {
        for max_weight in [0, 1, 100] {
            let graph = BoundedDegree::new(1000, 8, seed)
                .max_weight(max_weight)
                .graph()?;
            assert_eq!(
                kosaraju_iter(&graph, no_logging![])?,
                kosaraju_rec(&graph, no_logging![])?
            );
        }
    }
    Ok(())
}

#[test]
fn test_steps() -> Result<()> {
    let graph = common::example_graph()?;
    let mut kosaraju = Kosaraju::new(&graph, SeqRec);
    assert_eq!(kosaraju.state(), KosarajuState::NotStarted);
    assert!(kosaraju.finish_order().is_empty());

    assert_eq!(kosaraju.step()?, KosarajuState::ForwardPassDone);
    assert_eq!(kosaraju.finish_order(), &[0, 5, 2, 3, 4, 7, 1, 6]);
    assert!(kosaraju.components().is_empty());

    assert_eq!(kosaraju.step()?, KosarajuState::ReversedBuilt);
    assert!(kosaraju.components().is_empty());

    for expected in [1, 2, 3] {
        assert_eq!(kosaraju.step()?, KosarajuState::BackwardPassRunning);
        assert_eq!(kosaraju.components().len(), expected);
    }

    assert_eq!(kosaraju.step()?, KosarajuState::Done);
    assert_eq!(kosaraju.step()?, KosarajuState::Done);
    assert_eq!(kosaraju.components().len(), 3);
    Ok(())
}

#[test]
fn test_steps_empty() -> Result<()> {
    let graph = WeightedGraph::new(0, 0);
    let mut kosaraju = Kosaraju::new(&graph, SeqIter::new());
    assert_eq!(kosaraju.step()?, KosarajuState::ForwardPassDone);
    assert_eq!(kosaraju.step()?, KosarajuState::ReversedBuilt);
    assert_eq!(kosaraju.step()?, KosarajuState::Done);
    Ok(())
}

#[test]
fn test_run_with_logger() -> Result<()> {
    let graph = common::example_graph()?;
    let mut pl = ProgressLogger::default();
    let components = Kosaraju::new(&graph, SeqIter::new()).run(&mut pl)?;
    assert_eq!(components.num_components(), 3);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<()> {
    let graph = common::example_graph()?;
    let components = kosaraju_iter(&graph, no_logging![])?;
    let json = serde_json::to_string(&components)?;
    assert_eq!(json, "{\"components\":[[6],[7,4,2,3,5,1],[0]]}");
    assert_eq!(serde_json::from_str::<Sccs>(&json)?, components);
    Ok(())
}

#[cfg_attr(feature = "slow_tests", test)]
#[cfg_attr(not(feature = "slow_tests"), allow(dead_code))]
fn test_large() -> Result<()> {
    let graph = BoundedDegree::new(1_000_000, 10, 0).graph()?;
    let iter = kosaraju_iter(&graph, no_logging![])?;
    assert!(common::is_partition(&iter, graph.num_nodes()));

    // The recursive visit might need a large stack
    let rec = std::thread::scope(|scope| {
        std::thread::Builder::new()
            .stack_size(1 << 30)
            .spawn_scoped(scope, || kosaraju_rec(&graph, no_logging![]))
            .map(|handle| handle.join())
    })?
    .map_err(|_| anyhow::anyhow!("The recursive visit panicked"))??;

    assert_eq!(iter, rec);
    Ok(())
}
