//! Declarative picker-tab model.
//!
//! The panel navigation is a keyed list of tabs filtered by
//! configuration flags. Hidden entries are filtered out by key, so the
//! canonical order survives any combination of flags; nothing here
//! removes entries by positional index.

use serde::Deserialize;

/// The file sources a picker panel can offer, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Recent,
    WebSearch,
    CloudDrive,
    Site,
    Upload,
    Link,
}

impl TabKey {
    /// Stable key string used for tab selection state.
    pub fn key(self) -> &'static str {
        match self {
            TabKey::Recent => "keyRecent",
            TabKey::WebSearch => "keyWeb",
            TabKey::CloudDrive => "keyCloudDrive",
            TabKey::Site => "keySite",
            TabKey::Upload => "keyUpload",
            TabKey::Link => "keyLink",
        }
    }

    /// Icon identifier for the navigation entry.
    pub fn icon(self) -> &'static str {
        match self {
            TabKey::Recent => "Recent",
            TabKey::WebSearch => "Search",
            TabKey::CloudDrive => "Cloud",
            TabKey::Site => "Globe",
            TabKey::Upload => "System",
            TabKey::Link => "Link",
        }
    }
}

const ALL_TABS: [TabKey; 6] = [
    TabKey::Recent,
    TabKey::WebSearch,
    TabKey::CloudDrive,
    TabKey::Site,
    TabKey::Upload,
    TabKey::Link,
];

/// Host-supplied flags controlling which tabs appear.
#[derive(Debug, Clone, Deserialize)]
pub struct PickerOptions {
    #[serde(default)]
    pub disable_local_upload: bool,
    #[serde(default = "default_true")]
    pub has_my_site_tab: bool,
    #[serde(default)]
    pub disable_web_search_tab: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            disable_local_upload: false,
            has_my_site_tab: true,
            disable_web_search_tab: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// The tabs to show for the given flags, in canonical order.
pub fn visible_tabs(options: &PickerOptions) -> Vec<TabKey> {
    ALL_TABS
        .iter()
        .copied()
        .filter(|tab| match tab {
            TabKey::WebSearch => !options.disable_web_search_tab,
            TabKey::CloudDrive => options.has_my_site_tab,
            TabKey::Upload => !options.disable_local_upload,
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_show_all_tabs_in_order() {
        let tabs = visible_tabs(&PickerOptions::default());
        assert_eq!(tabs, ALL_TABS);
    }

    #[test]
    fn flags_hide_their_tabs_without_reordering() {
        let options = PickerOptions {
            disable_local_upload: true,
            has_my_site_tab: false,
            disable_web_search_tab: true,
        };

        let tabs = visible_tabs(&options);
        assert_eq!(tabs, [TabKey::Recent, TabKey::Site, TabKey::Link]);
    }

    #[test]
    fn hiding_one_tab_leaves_the_rest_untouched() {
        let options = PickerOptions {
            disable_web_search_tab: true,
            ..PickerOptions::default()
        };

        let tabs = visible_tabs(&options);
        assert!(!tabs.contains(&TabKey::WebSearch));
        assert_eq!(tabs.len(), 5);
        assert_eq!(tabs[0], TabKey::Recent);
        assert_eq!(tabs[1], TabKey::CloudDrive);
    }

    #[test]
    fn tab_keys_are_stable() {
        assert_eq!(TabKey::Recent.key(), "keyRecent");
        assert_eq!(TabKey::Upload.key(), "keyUpload");
        assert_eq!(TabKey::Site.icon(), "Globe");
    }
}
