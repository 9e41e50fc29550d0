use serde::{Deserialize, Serialize};

mod commands;

pub use commands::CheckConfig;

/// Site configuration file contents (`folleto.toml`)
///
/// This is the single declarative record handed to the site renderer. It is
/// built once when the file is parsed and never mutated afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    #[serde(rename = "basePath", default = "default_base_path")]
    pub base_path: String,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

fn default_base_path() -> String {
    String::from("/")
}

#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,
    #[serde(default, rename = "socialLinks")]
    pub social_links: Vec<SocialLink>,
}

/// A single navigation entry, used both for the top navigation bar and for
/// sidebar group items. Declaration order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavItem {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SidebarGroup {
    /// Path the group heading links to, must point to an existing page
    #[serde(rename = "rootPath")]
    pub root_path: String,
    /// How many heading levels are expanded by default
    #[serde(default = "default_sidebar_depth")]
    pub depth: usize,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

fn default_sidebar_depth() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SocialLink {
    pub platform: Platform,
    pub target: String,
}

/// Supported social link platforms, serialized as lowercase tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Gitlab,
    Codeberg,
    Mastodon,
    Twitter,
    Youtube,
    Discord,
    Linkedin,
    Rss,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Codeberg => "codeberg",
            Self::Mastodon => "mastodon",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Discord => "discord",
            Self::Linkedin => "linkedin",
            Self::Rss => "rss",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
