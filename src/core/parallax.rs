use super::constants::PARALLAX_TRAVEL;
use glam::Vec2;

/// Offset for the hero model given a pointer inside the hero's bounding rect.
///
/// The pointer position is normalized to \[-0.5, 0.5\] on each axis and scaled
/// by [`PARALLAX_TRAVEL`]. A degenerate rect yields no offset.
#[inline]
pub fn parallax_offset(pointer: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    ((pointer - rect_origin) / rect_size - Vec2::splat(0.5)) * PARALLAX_TRAVEL
}
