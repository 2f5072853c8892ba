/// Maps `input` over ascending `breakpoints` onto `outputs` with linear
/// interpolation between neighbouring breakpoints.
///
/// Inputs outside the breakpoint range are clamped to the first or last
/// output, so overshooting scroll positions never push an animated value past
/// its configured bounds. The two slices are expected to have equal length;
/// any surplus on either side is ignored.
pub fn interpolate(input: f64, breakpoints: &[f64], outputs: &[f64]) -> f64 {
    let len = breakpoints.len().min(outputs.len());
    if len == 0 {
        return 0.0;
    }
    if len == 1 || input.is_nan() || input <= breakpoints[0] {
        return outputs[0];
    }
    if input >= breakpoints[len - 1] {
        return outputs[len - 1];
    }

    let segment = breakpoints[..len]
        .windows(2)
        .position(|w| input >= w[0] && input <= w[1])
        .unwrap_or(len - 2);
    let (from, to) = (breakpoints[segment], breakpoints[segment + 1]);
    let (start, end) = (outputs[segment], outputs[segment + 1]);
    let width = to - from;
    if width <= 0.0 {
        return end;
    }
    start + (end - start) * ((input - from) / width)
}

/// Linear parallax displacement for an element that starts moving at
/// `start_offset` pixels of scroll.
pub fn parallax(scroll_y: f64, start_offset: f64, speed: f64) -> f64 {
    (scroll_y - start_offset) * speed
}

/// Same as [`parallax`], limited to `[min, max]`.
pub fn clamped_parallax(scroll_y: f64, start_offset: f64, speed: f64, min: f64, max: f64) -> f64 {
    parallax(scroll_y, start_offset, speed).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_interpolate_between_breakpoints() {
        assert!(approx(interpolate(0.5, &[0.0, 1.0], &[0.0, 20.0]), 10.0));
        assert!(approx(interpolate(0.1, &[0.0, 0.2], &[0.8, 1.0]), 0.9));
        assert!(approx(
            interpolate(0.9, &[0.0, 0.2, 0.8, 1.0], &[1.0, 1.0, 1.0, 0.0]),
            0.5
        ));
    }

    #[test]
    fn test_interpolate_clamps_overshoot() {
        let bp = [0.0, 0.2];
        let out = [0.8, 1.0];
        assert!(approx(interpolate(-3.0, &bp, &out), 0.8));
        assert!(approx(interpolate(7.5, &bp, &out), 1.0));
    }

    #[test]
    fn test_interpolate_degenerate_tables() {
        assert_eq!(interpolate(0.3, &[], &[]), 0.0);
        assert_eq!(interpolate(0.3, &[0.5], &[4.0]), 4.0);
        // repeated breakpoint is a step
        let bp = [0.0, 0.5, 0.5, 1.0];
        let out = [0.0, 1.0, 3.0, 3.0];
        assert_eq!(interpolate(0.5, &bp, &out), 1.0);
        assert_eq!(interpolate(0.6, &bp, &out), 3.0);
        assert_eq!(interpolate(f64::NAN, &[0.0, 1.0], &[2.0, 5.0]), 2.0);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax(300.0, 100.0, 0.5), 100.0);
        assert_eq!(parallax(50.0, 100.0, 0.5), -25.0);
        assert_eq!(clamped_parallax(1000.0, 0.0, 0.5, -50.0, 50.0), 50.0);
        assert_eq!(clamped_parallax(-1000.0, 0.0, 0.5, -50.0, 50.0), -50.0);
    }

    proptest! {
        #[test]
        fn interpolate_stays_within_outputs(input in -10.0f64..10.0, a in -100.0f64..100.0, b in -100.0f64..100.0) {
            let v = interpolate(input, &[0.0, 0.4, 1.0], &[a, b, a]);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "{} outside [{}, {}]", v, lo, hi);
        }

        #[test]
        fn interpolate_monotonic_for_increasing_outputs(x in -1.0f64..2.0, y in -1.0f64..2.0) {
            let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
            let table = ([0.0, 0.2, 0.8, 1.0], [0.0, 1.0, 1.5, 4.0]);
            prop_assert!(interpolate(lo, &table.0, &table.1) <= interpolate(hi, &table.0, &table.1));
        }
    }
}
