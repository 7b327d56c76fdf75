use crate::core::data::colour::Colour;

/// Converts an HSV triple to RGB. `hue` is in degrees and wraps;
/// `saturation` and `value` are in `[0, 1]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let channel = |offset: f64| {
        let k = (offset + hue / 60.0).rem_euclid(6.0);
        let k = k.min(4.0 - k).clamp(0.0, 1.0);

        ((value - value * saturation * k) * 255.0).round() as u8
    };

    Colour::new(channel(5.0), channel(3.0), channel(1.0))
}
