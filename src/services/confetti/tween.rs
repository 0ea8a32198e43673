/// Quadratic ease-in/ease-out from `start` to `end` over `duration`.
///
/// `elapsed` is clamped by the caller; values outside `0..=duration`
/// extrapolate along the curve.
pub fn ease_in_out_quad(elapsed: f64, start: f64, end: f64, duration: f64) -> f64 {
    let change = end - start;
    let t = elapsed / (duration / 2.0);
    if t < 1.0 {
        change / 2.0 * t * t + start
    } else {
        let t = t - 1.0;
        -change / 2.0 * (t * (t - 2.0) - 1.0) + start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0, 0.0, 200.0, 5000.0), 0.0);
        assert!((ease_in_out_quad(5000.0, 0.0, 200.0, 5000.0) - 200.0).abs() < 1e-9);
        assert!((ease_in_out_quad(2500.0, 0.0, 200.0, 5000.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_starts_slow() {
        let early = ease_in_out_quad(500.0, 0.0, 200.0, 5000.0);
        let middle = ease_in_out_quad(3000.0, 0.0, 200.0, 5000.0) - ease_in_out_quad(2500.0, 0.0, 200.0, 5000.0);
        assert!(early < middle);
    }

    #[test]
    fn test_offset_start() {
        assert_eq!(ease_in_out_quad(0.0, 50.0, 200.0, 1000.0), 50.0);
        assert!((ease_in_out_quad(1000.0, 50.0, 200.0, 1000.0) - 200.0).abs() < 1e-9);
    }
}
