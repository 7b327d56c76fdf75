use crate::core::colour_mapping::hsv::hsv_to_rgb;
use crate::core::colour_mapping::kinds::ColourMode;
use crate::core::data::colour::Colour;
use crate::core::util::map_range::map_range;

/// Hue range swept across `[0, max_iterations]` in colour-cycle mode. Spanning
/// more than 360 degrees repeats the palette several times over the range.
pub const COLOUR_CYCLE_HUE_SPAN: f64 = 1400.0;

/// Colours an escape count. Counts at or above `max_iterations` are inside the set.
#[must_use]
pub fn colourize(iterations: u32, max_iterations: u32, mode: ColourMode) -> Colour {
    let inside = iterations >= max_iterations;

    match mode {
        ColourMode::BlackWhite => {
            if inside {
                Colour::BLACK
            } else {
                Colour::WHITE
            }
        }
        ColourMode::WhiteBlack => {
            if inside {
                Colour::WHITE
            } else {
                Colour::BLACK
            }
        }
        ColourMode::ColourCycle => {
            if inside {
                return Colour::BLACK;
            }

            let hue = map_range(
                f64::from(iterations),
                0.0,
                f64::from(max_iterations),
                0.0,
                COLOUR_CYCLE_HUE_SPAN,
            )
            .rem_euclid(360.0);

            hsv_to_rgb(hue, 1.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invert(colour: Colour) -> Colour {
        Colour::new(255 - colour.r, 255 - colour.g, 255 - colour.b)
    }

    #[test]
    fn black_white_classifies_inside_and_outside() {
        assert_eq!(colourize(50, 50, ColourMode::BlackWhite), Colour::BLACK);
        assert_eq!(colourize(0, 50, ColourMode::BlackWhite), Colour::WHITE);
        assert_eq!(colourize(49, 50, ColourMode::BlackWhite), Colour::WHITE);
    }

    #[test]
    fn white_black_is_exact_inverse_of_black_white() {
        let max_iterations = 64;

        for i in 0..=max_iterations {
            let bw = colourize(i, max_iterations, ColourMode::BlackWhite);
            let wb = colourize(i, max_iterations, ColourMode::WhiteBlack);

            assert_eq!(wb, invert(bw), "iteration {}", i);
        }
    }

    #[test]
    fn colour_cycle_inside_is_black() {
        assert_eq!(colourize(100, 100, ColourMode::ColourCycle), Colour::BLACK);
    }

    #[test]
    fn colour_cycle_starts_at_red() {
        assert_eq!(colourize(0, 100, ColourMode::ColourCycle), Colour::new(255, 0, 0));
    }

    #[test]
    fn colour_cycle_hue_wraps_over_the_iteration_range() {
        // 1400 * 36 / 140 = 360, a full turn back to red.
        assert_eq!(colourize(36, 140, ColourMode::ColourCycle), Colour::new(255, 0, 0));
        // 1400 * 12 / 140 = 120, green.
        assert_eq!(colourize(12, 140, ColourMode::ColourCycle), Colour::new(0, 255, 0));
    }

    #[test]
    fn every_count_in_range_has_a_colour() {
        for &mode in ColourMode::ALL {
            for max_iterations in [1, 2, 50, 1000] {
                for i in 0..=max_iterations {
                    let _ = colourize(i, max_iterations, mode);
                }
            }
        }
    }

    #[test]
    fn counts_above_max_are_treated_as_inside() {
        assert_eq!(colourize(51, 50, ColourMode::BlackWhite), Colour::BLACK);
        assert_eq!(colourize(51, 50, ColourMode::WhiteBlack), Colour::WHITE);
        assert_eq!(colourize(u32::MAX, 0, ColourMode::ColourCycle), Colour::BLACK);
    }
}
