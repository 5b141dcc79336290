use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream endpoint category, the first segment of `/{category}/{operation}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// `/site-explorer`
    SiteExplorer,
    /// `/backlinks`
    Backlinks,
    /// `/organic`
    Organic,
    /// `/paid`
    Paid,
    /// `/pages`
    Pages,
    /// `/outgoing`
    Outgoing,
    /// `/keywords-explorer`
    KeywordsExplorer,
    /// `/rank-tracker`
    RankTracker,
    /// `/overview`
    Overview,
    /// `/serp`
    Serp,
    /// `/subscription`
    Subscription,
    /// `/management`
    Management,
    /// `/public`
    Public,
}

impl Category {
    /// Path segment for this category
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SiteExplorer => "site-explorer",
            Category::Backlinks => "backlinks",
            Category::Organic => "organic",
            Category::Paid => "paid",
            Category::Pages => "pages",
            Category::Outgoing => "outgoing",
            Category::KeywordsExplorer => "keywords-explorer",
            Category::RankTracker => "rank-tracker",
            Category::Overview => "overview",
            Category::Serp => "serp",
            Category::Subscription => "subscription",
            Category::Management => "management",
            Category::Public => "public",
        }
    }

    /// Default path for `operation` in this category
    #[must_use]
    pub fn path(&self, operation: &str) -> String {
        format!("/{}/{}", self.as_str(), operation.trim_start_matches('/'))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
