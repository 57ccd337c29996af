//! Group generation utilities
//!
//! This module expands the fixed routing topology into output groups.

use crate::generator::yaml::clash_output::ClashProxyGroup;
use crate::models::{ProxyGroupConfig, ROUTING_GROUPS};

/// Expands one group: fixed members first, then every proxy name unless the
/// group is terminal.
pub fn group_generate(group: &ProxyGroupConfig, proxy_names: &[String]) -> ClashProxyGroup {
    let mut proxies: Vec<String> = group.members.iter().map(|m| m.to_string()).collect();
    if !group.no_proxies {
        proxies.extend(proxy_names.iter().cloned());
    }

    ClashProxyGroup {
        name: group.name.to_string(),
        group_type: group.type_str().to_string(),
        url: group.probe.map(|p| p.url.to_string()),
        interval: group.probe.map(|p| p.interval),
        tolerance: group.probe.map(|p| p.tolerance),
        proxies,
    }
}

/// Expands the whole routing topology, in its fixed order.
pub fn generate_groups(proxy_names: &[String]) -> Vec<ClashProxyGroup> {
    ROUTING_GROUPS
        .iter()
        .map(|group| group_generate(group, proxy_names))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::proxy_group_config::{
        DIRECT, GROUP_AUTO, GROUP_DIRECT, GROUP_REJECT, GROUP_SELECT, REJECT,
    };

    fn names() -> Vec<String> {
        vec!["n1".to_string(), "n2".to_string()]
    }

    #[test]
    fn test_select_group_appends_proxies_after_members() {
        let groups = generate_groups(&names());
        assert_eq!(groups.len(), 11);
        assert_eq!(groups[0].name, GROUP_SELECT);
        assert_eq!(groups[0].group_type, "select");
        assert_eq!(groups[0].proxies, vec![GROUP_AUTO, DIRECT, "n1", "n2"]);
        assert!(groups[0].url.is_none());
    }

    #[test]
    fn test_url_test_group_carries_probe() {
        let groups = generate_groups(&names());
        let auto = &groups[1];
        assert_eq!(auto.name, GROUP_AUTO);
        assert_eq!(auto.group_type, "url-test");
        assert_eq!(auto.url.as_deref(), Some("http://www.gstatic.com/generate_204"));
        assert_eq!(auto.interval, Some(300));
        assert_eq!(auto.tolerance, Some(50));
        assert_eq!(auto.proxies, names());
    }

    #[test]
    fn test_terminal_groups_skip_proxies() {
        let groups = generate_groups(&names());
        assert_eq!(groups[7].name, GROUP_DIRECT);
        assert_eq!(groups[7].proxies, vec![DIRECT, GROUP_SELECT, GROUP_AUTO]);
        assert_eq!(groups[8].name, GROUP_REJECT);
        assert_eq!(groups[8].proxies, vec![REJECT, DIRECT]);
    }
}
