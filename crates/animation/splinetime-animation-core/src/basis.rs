//! Cubic basis evaluation over a 4-control-point window.

/// Catmull-Rom blending matrix, pre-divided by 2. Row r holds the weights
/// multiplied by uʳ; shared read-only across every interpolation call.
pub const BASIS: [[f32; 4]; 4] = [
    [0.0, 1.0, 0.0, 0.0],
    [-0.5, 0.0, 0.5, 0.0],
    [1.0, -2.5, 2.0, -0.5],
    [-0.5, 1.5, -1.5, 0.5],
];

/// Evaluate `[1, u, u², u³] · B · [p0, p1, p2, p3]ᵗ` for one scalar
/// coordinate of one channel.
///
/// Interior callers pass 0 < u < 1; the boundary values are still exact
/// properties of the matrix (`evaluate(0, p) == p[1]`, `evaluate(1, p) ==
/// p[2]`) and are relied on by tests.
pub fn evaluate(u: f32, p: [f32; 4]) -> f32 {
    let powers = [1.0, u, u * u, u * u * u];
    let mut acc = 0.0;
    for (row, pw) in BASIS.iter().zip(powers) {
        acc += pw * (row[0] * p[0] + row[1] * p[1] + row[2] * p[2] + row[3] * p[3]);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_hit_inner_control_points() {
        let p = [3.0, -1.0, 7.0, 2.5];
        assert_eq!(evaluate(0.0, p), -1.0);
        assert_eq!(evaluate(1.0, p), 7.0);
    }

    #[test]
    fn constant_window_is_constant() {
        let p = [4.5; 4];
        for u in [0.1, 0.25, 0.5, 0.9] {
            assert!((evaluate(u, p) - 4.5).abs() <= 1e-6);
        }
    }

    #[test]
    fn symmetric_window_midpoint() {
        // Symmetric controls around the span midpoint land halfway between
        // the inner pair.
        let v = evaluate(0.5, [0.0, 1.0, 3.0, 4.0]);
        assert!((v - 2.0).abs() <= 1e-6);
    }
}
