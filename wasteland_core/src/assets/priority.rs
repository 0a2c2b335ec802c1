//! Load ordering - five priority tiers with a static kind table

use super::{AssetKind, AssetRequest};
use serde::{Deserialize, Serialize};

/// Priority tier; lower tiers load first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPriority {
    Critical,
    High,
    Normal,
    Low,
    Deferred,
}

impl LoadPriority {
    /// Static kind -> tier table
    pub fn for_kind(kind: AssetKind) -> Self {
        match kind {
            AssetKind::Manifest => LoadPriority::Critical,
            AssetKind::Atlas => LoadPriority::High,
            AssetKind::Image => LoadPriority::Normal,
            AssetKind::Audio => LoadPriority::Low,
            AssetKind::Font => LoadPriority::Deferred,
        }
    }

    pub fn all() -> &'static [LoadPriority] {
        &[
            LoadPriority::Critical,
            LoadPriority::High,
            LoadPriority::Normal,
            LoadPriority::Low,
            LoadPriority::Deferred,
        ]
    }
}

/// Stable sort: tiers ascending, arrival order preserved within a tier
pub fn sort_by_priority(requests: &mut [AssetRequest]) {
    requests.sort_by_key(|request| LoadPriority::for_kind(request.kind));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_tiers() {
        assert_eq!(LoadPriority::all().len(), 5);
    }

    #[test]
    fn test_manifest_before_font() {
        assert!(LoadPriority::for_kind(AssetKind::Manifest) < LoadPriority::for_kind(AssetKind::Font));
    }

    #[test]
    fn test_sort_reorders_and_is_stable() {
        let mut requests = vec![
            AssetRequest::new("theme", "audio/theme.ogg", AssetKind::Audio),
            AssetRequest::new("tiles_a", "img/tiles_a.png", AssetKind::Image),
            AssetRequest::new("manifest", "data/manifest.json", AssetKind::Manifest),
            AssetRequest::new("tiles_b", "img/tiles_b.png", AssetKind::Image),
        ];
        sort_by_priority(&mut requests);

        let keys: Vec<&str> = requests.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["manifest", "tiles_a", "tiles_b", "theme"]);
    }
}
