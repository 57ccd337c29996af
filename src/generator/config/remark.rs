//! Remark processing utilities
//!
//! This module makes proxy remarks safe and unique before they are written.

use std::collections::{HashMap, HashSet};

use crate::models::Proxy;

/// Name used when a remark is empty once sanitized.
pub const EMPTY_REMARK: &str = "node";

/// Strips the characters the output document quotes names with.
///
/// # Examples
/// ```
/// use subclash::generator::config::remark::sanitize_remark;
///
/// assert_eq!(sanitize_remark("say \"hi\""), "say hi");
/// assert_eq!(sanitize_remark("\"\""), "node");
/// ```
pub fn sanitize_remark(remark: &str) -> String {
    let cleaned: String = remark.chars().filter(|c| *c != '"').collect();
    if cleaned.trim().is_empty() {
        EMPTY_REMARK.to_string()
    } else {
        cleaned
    }
}

/// Hands out unique remarks in arrival order.
///
/// The first node with a given remark keeps it; the n-th repeat becomes
/// `<remark>_<n>`. A resolver lives for a single conversion.
#[derive(Debug, Default)]
pub struct NameResolver {
    counters: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the unique remark for the next node called `remark`.
    pub fn resolve(&mut self, remark: &str) -> String {
        let remark = sanitize_remark(remark);

        if !self.taken.contains(&remark) {
            self.counters.insert(remark.clone(), 0);
            self.taken.insert(remark.clone());
            return remark;
        }

        // A generated name may already be taken by a node that literally
        // carried it, so keep counting until a free one turns up
        let counter = self.counters.entry(remark.clone()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{}_{}", remark, counter);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Rewrites the names of `proxies` in place so that no two are equal.
pub fn resolve_names(proxies: &mut [Proxy]) {
    let mut resolver = NameResolver::new();
    for proxy in proxies.iter_mut() {
        proxy.name = resolver.resolve(&proxy.name);
    }
}
