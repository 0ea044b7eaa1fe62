use toml::Table;

use crate::types::EnvMap;

/// Lay `overlay` over `base`, key by key. Overlay values win; keys new to
/// `base` are appended in overlay order.
pub fn overlay(mut base: EnvMap, overlay: EnvMap) -> EnvMap {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}

/// Fold layers left to right: later layers override earlier ones.
pub fn overlay_all(layers: impl IntoIterator<Item = EnvMap>) -> EnvMap {
    layers.into_iter().fold(EnvMap::new(), overlay)
}

/// Merge an option layer on top of another. Options are flat, so an overlay
/// value (arrays included) replaces the base value whole.
pub fn merge_options(mut base: Table, overlay: Table) -> Table {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}
