//! Page inventory and chrome metadata, available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module lets the route table and
//! hash handling be unit-tested on the host.

/// One row of the route table: a hash-history path plus the metadata the
/// surrounding chrome needs (title for the document/topbar, icon and blurb
/// for the sidebar and panels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    ApiOneClick,
    Screenshot,
    Ocr,
    Dev,
    Ops,
    More,
    AiSkills,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::ApiOneClick => "/api-one-click",
            Page::Screenshot => "/screenshot",
            Page::Ocr => "/ocr",
            Page::Dev => "/dev",
            Page::Ops => "/ops",
            Page::More => "/more",
            Page::AiSkills => "/ai-skills",
        }
    }

    /// Stable machine name, independent of path spelling.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::ApiOneClick => "api-one-click",
            Page::Screenshot => "screenshot",
            Page::Ocr => "ocr",
            Page::Dev => "dev",
            Page::Ops => "ops",
            Page::More => "more",
            Page::AiSkills => "ai-skills",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::ApiOneClick => "One-click API",
            Page::Screenshot => "Long Screenshot",
            Page::Ocr => "Screenshot OCR",
            Page::Dev => "Dev Toolbox",
            Page::Ops => "Ops Toolbox",
            Page::More => "More Tools",
            Page::AiSkills => "AI Skills",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::ApiOneClick => "🔌",
            Page::Screenshot => "📸",
            Page::Ocr => "🔤",
            Page::Dev => "🛠️",
            Page::Ops => "📦",
            Page::More => "➕",
            Page::AiSkills => "✨",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Page::Home => "Overview and host connection state.",
            Page::ApiOneClick => "Wire an API endpoint into the toolbox in one step.",
            Page::Screenshot => "Capture a scrolling window as one tall image.",
            Page::Ocr => "Extract text from a captured region.",
            Page::Dev => "Small utilities for development work.",
            Page::Ops => "Small utilities for operations work.",
            Page::More => "Everything that has not found a better home yet.",
            Page::AiSkills => "Prompt-driven helpers backed by the host.",
        }
    }

    /// Sidebar order.
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::ApiOneClick,
            Page::Screenshot,
            Page::Ocr,
            Page::Dev,
            Page::Ops,
            Page::More,
            Page::AiSkills,
        ]
    }

    /// Pages that cannot do real work without the desktop host attached.
    pub fn needs_host(self) -> bool {
        !matches!(self, Page::Home)
    }

    /// Hash-history fragment for this page, e.g. `#/ocr`.
    pub fn hash(self) -> String {
        format!("#{}", self.path())
    }

    /// Parse a `location.hash` fragment. Tolerates a missing leading `#`,
    /// query suffixes, and trailing slashes; anything unknown (including an
    /// empty fragment) lands on the home page.
    pub fn from_hash(hash: &str) -> Page {
        let frag = hash.strip_prefix('#').unwrap_or(hash);
        let frag = frag.split('?').next().unwrap_or_default();
        let frag = if frag.len() > 1 {
            frag.trim_end_matches('/')
        } else {
            frag
        };
        Page::all()
            .iter()
            .copied()
            .find(|p| p.path() == frag)
            .unwrap_or_default()
    }
}

/// Host-connection state surfaced in the topbar while the bridge resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeStatus {
    /// Bootstrap resolution still pending.
    #[default]
    Resolving,
    /// Capability handle resolved and injected.
    Connected,
    /// Resolution settled empty: running in a plain browser, no host.
    Detached,
}

impl BridgeStatus {
    pub fn label(self) -> &'static str {
        match self {
            BridgeStatus::Resolving => "connecting to host…",
            BridgeStatus::Connected => "host connected",
            BridgeStatus::Detached => "browser only",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BridgeStatus::Resolving => "bridge-pill resolving",
            BridgeStatus::Connected => "bridge-pill connected",
            BridgeStatus::Detached => "bridge-pill detached",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inventory_is_stable() {
        let all = Page::all();
        assert_eq!(all.len(), 8);

        let mut paths: Vec<&'static str> = all.iter().copied().map(Page::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 8);

        let mut names: Vec<&'static str> = all.iter().copied().map(Page::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);

        for p in all {
            assert!(p.path().starts_with('/'));
            assert!(!p.title().trim().is_empty());
            assert!(!p.icon().trim().is_empty());
            assert!(!p.description().trim().is_empty());
        }
    }

    #[test]
    fn hash_round_trips() {
        for &p in Page::all() {
            assert_eq!(Page::from_hash(&p.hash()), p);
        }
    }

    #[test]
    fn odd_fragments_normalize() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash("#"), Page::Home);
        assert_eq!(Page::from_hash("/ocr"), Page::Ocr);
        assert_eq!(Page::from_hash("#/ocr/"), Page::Ocr);
        assert_eq!(Page::from_hash("#/ocr?from=tray"), Page::Ocr);
        assert_eq!(Page::from_hash("#/no-such-tool"), Page::Home);
    }

    #[test]
    fn only_home_works_without_the_host() {
        assert!(!Page::Home.needs_host());
        for &p in Page::all() {
            if p != Page::Home {
                assert!(p.needs_host(), "{} should need the host", p.name());
            }
        }
    }

    #[test]
    fn bridge_status_labels_are_distinct() {
        let labels = [
            BridgeStatus::Resolving.label(),
            BridgeStatus::Connected.label(),
            BridgeStatus::Detached.label(),
        ];
        let mut sorted = labels.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), labels.len());
    }
}
