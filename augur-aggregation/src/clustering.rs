//! Origin clustering with correlation discounting.
//!
//! Reports that trace back to the same origin carry overlapping information.
//! A cluster of `m` reports with intra-cluster correlation `ρ` counts as
//! `m / (1 + (m - 1)ρ)` independent observations: `m` at `ρ = 0`, and
//! approaching 1 as `ρ → 1`.

use std::collections::HashMap;

use augur_core::Evidence;

use crate::math::clamp;

/// A group of evidence items sharing an origin.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginCluster {
    pub id: String,
    /// Indices into the evidence slice, in input order.
    pub members: Vec<usize>,
    /// Correlation in force for the full cluster.
    pub rho: f64,
}

impl OriginCluster {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn effective_count(&self) -> f64 {
        effective_count(self.size(), self.rho)
    }
}

/// `m / (1 + (m - 1)ρ)`, with `ρ` clamped to [0, 1]. An empty cluster counts 0.
pub fn effective_count(m: usize, rho: f64) -> f64 {
    if m == 0 {
        return 0.0;
    }
    let m = m as f64;
    m / (1.0 + (m - 1.0) * clamp(rho, 0.0, 1.0))
}

/// Correlation for a cluster of `size` members.
///
/// An explicit override wins. Otherwise multi-item clusters get
/// `default_rho` and singletons get 0.
pub fn cluster_rho(size: usize, override_rho: Option<f64>, default_rho: f64) -> f64 {
    match override_rho {
        Some(rho) => clamp(rho, 0.0, 1.0),
        None if size > 1 => default_rho,
        None => 0.0,
    }
}

/// Partition evidence by origin, preserving first-appearance order.
pub fn cluster_evidence(
    evidence: &[Evidence],
    rho_overrides: Option<&HashMap<String, f64>>,
    default_rho: f64,
) -> Vec<OriginCluster> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut clusters: Vec<OriginCluster> = Vec::new();

    for (i, ev) in evidence.iter().enumerate() {
        let key = ev.origin_key();
        match index.get(key) {
            Some(&slot) => clusters[slot].members.push(i),
            None => {
                index.insert(key, clusters.len());
                clusters.push(OriginCluster {
                    id: key.to_string(),
                    members: vec![i],
                    rho: 0.0,
                });
            }
        }
    }

    for cluster in &mut clusters {
        let override_rho = rho_overrides.and_then(|m| m.get(&cluster.id).copied());
        cluster.rho = cluster_rho(cluster.size(), override_rho, default_rho);
    }

    clusters
}
