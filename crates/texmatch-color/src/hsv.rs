//! RGB <-> HSV conversion.
//!
//! Standard hexagonal HSV. Hue is in degrees, wrapped into [0, 360);
//! saturation and value are in [0, 1].

/// Converts RGB in [0,1] to (hue, saturation, value).
///
/// Achromatic inputs (max == min) report hue 0.
///
/// # Example
///
/// ```rust
/// use texmatch_color::hsv::rgb_to_hsv;
///
/// let [h, s, v] = rgb_to_hsv([0.0, 1.0, 0.0]);
/// assert!((h - 120.0).abs() < 1e-3);
/// assert_eq!(s, 1.0);
/// assert_eq!(v, 1.0);
/// ```
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max <= 0.0 { 0.0 } else { delta / max };

    [hue.rem_euclid(360.0), saturation, max]
}

/// Converts (hue, saturation, value) to RGB in [0,1].
///
/// Hue outside [0, 360) is wrapped.
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let h = h.rem_euclid(360.0) / 60.0;
    let sector = h.floor() as u32 % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
