/// Keeps fitness finite when a lookahead lands exactly on the target.
pub const EPSILON: f64 = 0.001;

/// Scores a lookahead distance. Strictly decreasing in `distance`, bounded above by
/// `1 / EPSILON` and approaching zero as the distance grows.
pub fn fitness_from_distance(distance: f64) -> f64 {
    1.0 / (EPSILON + distance)
}
