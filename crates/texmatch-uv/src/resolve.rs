//! Material slot resolution.
//!
//! Given a renderer's slot list and a texture descriptor, finds the slot
//! that binds the texture. Exact instance identity wins; when the instance
//! was duplicated by the host (same asset, different id) a second pass
//! matches on name and dimensions.

use tracing::debug;

use texmatch_core::{MaterialSlot, TextureKey};

/// Finds the slot whose bound texture matches `target`.
///
/// Two passes: instance identity first, then same-asset fallback. Returns
/// `None` when no slot binds the texture.
pub fn find_material_slot_using_texture(
    slots: &[MaterialSlot],
    target: &TextureKey,
) -> Option<usize> {
    for (i, slot) in slots.iter().enumerate() {
        if let Some(key) = &slot.texture {
            if key.same_instance(target) {
                return Some(i);
            }
        }
    }

    for (i, slot) in slots.iter().enumerate() {
        if let Some(key) = &slot.texture {
            if key.same_asset(target) {
                debug!(
                    slot = i,
                    name = %slot.name,
                    texture = %target.name,
                    "resolved slot by asset match (instance ids differ)"
                );
                return Some(i);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: u64, name: &str) -> TextureKey {
        TextureKey::new(id, name, 64, 64)
    }

    #[test]
    fn test_instance_match_wins() {
        let slots = vec![
            MaterialSlot::new("base", key(10, "albedo")),
            MaterialSlot::new("detail", key(11, "albedo")),
        ];
        // Slot 1 is the exact instance even though slot 0 has the same asset.
        assert_eq!(
            find_material_slot_using_texture(&slots, &key(11, "albedo")),
            Some(1)
        );
    }

    #[test]
    fn test_asset_fallback_on_duplicated_instance() {
        let slots = vec![
            MaterialSlot::unbound("empty"),
            MaterialSlot::new("base", key(10, "albedo")),
        ];
        // id 99 is a host-side duplicate of the same asset.
        assert_eq!(
            find_material_slot_using_texture(&slots, &key(99, "albedo")),
            Some(1)
        );
    }

    #[test]
    fn test_asset_fallback_requires_matching_dimensions() {
        let slots = vec![MaterialSlot::new("base", key(10, "albedo"))];
        let resized = TextureKey::new(99, "albedo", 32, 32);
        assert_eq!(find_material_slot_using_texture(&slots, &resized), None);
    }

    #[test]
    fn test_no_match_returns_none() {
        let slots = vec![
            MaterialSlot::unbound("empty"),
            MaterialSlot::new("base", key(10, "albedo")),
        ];
        assert_eq!(
            find_material_slot_using_texture(&slots, &key(5, "normal")),
            None
        );
    }
}
