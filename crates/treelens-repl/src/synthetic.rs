//! Seeded synthetic search trees for demos and manual exploration.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use treelens_core::{NodeId, SearchTree, TreeError};

const ACTION_NAMES: [&str; 6] = ["listen", "open-left", "open-right", "north", "south", "wait"];
const DISCOUNT: f64 = 0.95;

/// Shape of a generated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticTreeConfig {
    pub seed: u64,
    /// Actions under every expanded decision node.
    pub actions: usize,
    /// Observations sampled under every action.
    pub observations: usize,
    /// Decision layers below the root.
    pub depth: usize,
    /// Visits given to the root and split among its descendants.
    pub simulations: u64,
}

impl Default for SyntheticTreeConfig {
    fn default() -> Self {
        SyntheticTreeConfig {
            seed: 7,
            actions: 3,
            observations: 2,
            depth: 3,
            simulations: 200,
        }
    }
}

fn action_label(index: usize) -> String {
    match ACTION_NAMES.get(index) {
        Some(name) => name.to_string(),
        None => format!("a{index}"),
    }
}

/// Spread `visits` over `ways` branches, skewed toward the first ones so
/// that some branches stay rarely visited.
fn split_visits(rng: &mut ChaCha8Rng, visits: u64, ways: usize) -> Vec<u64> {
    let mut counts = vec![0; ways];
    if ways == 0 {
        return counts;
    }
    for _ in 0..visits {
        let a = rng.gen_range(0..ways);
        let b = rng.gen_range(0..ways);
        counts[a.min(b)] += 1;
    }
    counts
}

/// Build a tree that looks like the output of a few hundred simulations.
/// The same config always yields the same tree.
pub fn generate(config: &SyntheticTreeConfig) -> Result<SearchTree<String>, TreeError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut tree = SearchTree::new(config.simulations, 0.0);
    let root = tree.root_id();
    let value = expand_decision(&mut tree, &mut rng, config, root, config.simulations, 0)?;
    tree.set_stats(root, config.simulations, value)?;
    Ok(tree)
}

fn expand_decision(
    tree: &mut SearchTree<String>,
    rng: &mut ChaCha8Rng,
    config: &SyntheticTreeConfig,
    node: NodeId,
    visits: u64,
    layer: usize,
) -> Result<f64, TreeError> {
    if layer >= config.depth || visits <= 1 || config.actions == 0 {
        return Ok(rng.gen_range(-1.0..1.0));
    }

    let mut best = f64::NEG_INFINITY;
    for (index, action_visits) in split_visits(rng, visits, config.actions)
        .into_iter()
        .enumerate()
    {
        let action = tree.add_child(node, action_label(index), action_visits, 0.0)?;
        let value = expand_action(tree, rng, config, action, action_visits, layer)?;
        tree.set_stats(action, action_visits, value)?;
        if action_visits > 0 {
            best = best.max(value);
        }
    }
    Ok(if best.is_finite() { best } else { 0.0 })
}

fn expand_action(
    tree: &mut SearchTree<String>,
    rng: &mut ChaCha8Rng,
    config: &SyntheticTreeConfig,
    node: NodeId,
    visits: u64,
    layer: usize,
) -> Result<f64, TreeError> {
    if visits == 0 {
        return Ok(0.0);
    }

    let reward = rng.gen_range(-1.0..1.0);
    let mut future = 0.0;
    for (index, obs_visits) in split_visits(rng, visits, config.observations)
        .into_iter()
        .enumerate()
    {
        if obs_visits == 0 {
            continue;
        }
        let child = tree.add_child(node, format!("obs-{index}"), obs_visits, 0.0)?;
        let value = expand_decision(tree, rng, config, child, obs_visits, layer + 1)?;
        tree.set_stats(child, obs_visits, value)?;
        future += value * obs_visits as f64 / visits as f64;
    }
    Ok(reward + DISCOUNT * future)
}

#[cfg(test)]
mod tests {
    use treelens_core::{SearchNode, TreeDebugger};

    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let config = SyntheticTreeConfig::default();
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();

        let render_a = TreeDebugger::new(a.root()).render_all();
        let render_b = TreeDebugger::new(b.root()).render_all();
        assert_eq!(render_a, render_b);
        assert_eq!(a.node_count(), b.node_count());
    }

    #[test]
    fn generated_tree_respects_shape() {
        let config = SyntheticTreeConfig {
            depth: 2,
            ..SyntheticTreeConfig::default()
        };
        let tree = generate(&config).unwrap();
        let debugger = TreeDebugger::new(tree.root());

        assert_eq!(tree.root().child_count(), config.actions);
        assert!(debugger.depth().unwrap() <= config.depth);
        assert_eq!(debugger.node_count(), tree.node_count());
        assert_eq!(tree.root().visit_count(), config.simulations);
    }

    #[test]
    fn visits_are_conserved_per_split() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let counts = split_visits(&mut rng, 50, 4);
        assert_eq!(counts.iter().sum::<u64>(), 50);
        assert!(split_visits(&mut rng, 5, 0).is_empty());
    }
}
