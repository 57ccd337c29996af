/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyGroupType {
    Select,
    URLTest,
}

impl ProxyGroupType {
    /// Get string representation of the proxy group type
    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyGroupType::Select => "select",
            ProxyGroupType::URLTest => "url-test",
        }
    }
}

/// Latency probe settings of a `url-test` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    pub url: &'static str,
    /// Seconds between probes
    pub interval: u32,
    /// Milliseconds of latency difference tolerated before switching
    pub tolerance: u32,
}

/// Configuration for one routing group of the fixed topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyGroupConfig {
    pub name: &'static str,
    pub group_type: ProxyGroupType,
    pub probe: Option<ProbeConfig>,
    /// Members listed before any proxy name
    pub members: &'static [&'static str],
    /// Terminal groups never list proxy names
    pub no_proxies: bool,
}

impl ProxyGroupConfig {
    /// Get string representation of the group type
    pub fn type_str(&self) -> &'static str {
        self.group_type.as_str()
    }
}

pub const GROUP_SELECT: &str = "🚀 节点选择";
pub const GROUP_AUTO: &str = "♻️ 自动选择";
pub const GROUP_MEDIA: &str = "🌍 国外媒体";
pub const GROUP_TELEGRAM: &str = "📲 电报信息";
pub const GROUP_MICROSOFT: &str = "Ⓜ️ 微软服务";
pub const GROUP_APPLE: &str = "🍎 苹果服务";
pub const GROUP_GOOGLE_FCM: &str = "📢 谷歌FCM";
pub const GROUP_DIRECT: &str = "🎯 全球直连";
pub const GROUP_REJECT: &str = "🛑 全球拦截";
pub const GROUP_AD_BLOCK: &str = "🍃 应用净化";
pub const GROUP_FINAL: &str = "🐟 漏网之鱼";

pub const DIRECT: &str = "DIRECT";
pub const REJECT: &str = "REJECT";

pub const AUTO_PROBE: ProbeConfig = ProbeConfig {
    url: "http://www.gstatic.com/generate_204",
    interval: 300,
    tolerance: 50,
};

const fn select(name: &'static str, members: &'static [&'static str]) -> ProxyGroupConfig {
    ProxyGroupConfig {
        name,
        group_type: ProxyGroupType::Select,
        probe: None,
        members,
        no_proxies: false,
    }
}

const fn terminal(name: &'static str, members: &'static [&'static str]) -> ProxyGroupConfig {
    ProxyGroupConfig {
        no_proxies: true,
        ..select(name, members)
    }
}

/// The routing group topology, in output order.
///
/// Names and positions are part of the output format; rule sets written
/// against it refer to these groups by name.
pub const ROUTING_GROUPS: [ProxyGroupConfig; 11] = [
    select(GROUP_SELECT, &[GROUP_AUTO, DIRECT]),
    ProxyGroupConfig {
        name: GROUP_AUTO,
        group_type: ProxyGroupType::URLTest,
        probe: Some(AUTO_PROBE),
        members: &[],
        no_proxies: false,
    },
    select(GROUP_MEDIA, &[GROUP_SELECT, GROUP_AUTO, GROUP_DIRECT]),
    select(GROUP_TELEGRAM, &[GROUP_SELECT, GROUP_DIRECT]),
    select(GROUP_MICROSOFT, &[GROUP_DIRECT, GROUP_SELECT]),
    select(GROUP_APPLE, &[GROUP_SELECT, GROUP_DIRECT]),
    select(GROUP_GOOGLE_FCM, &[GROUP_SELECT, GROUP_DIRECT, GROUP_AUTO]),
    terminal(GROUP_DIRECT, &[DIRECT, GROUP_SELECT, GROUP_AUTO]),
    terminal(GROUP_REJECT, &[REJECT, DIRECT]),
    terminal(GROUP_AD_BLOCK, &[REJECT, DIRECT]),
    select(GROUP_FINAL, &[GROUP_SELECT, GROUP_DIRECT, GROUP_AUTO]),
];
