use rand::Rng;

/// Standard normal deviate via the Box-Muller transform
///
/// Used by the balanced grid to spread split depth around the requested
/// count. Two uniform draws are consumed per call; exact sampling without
/// pulling in a distributions dependency.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // random() yields [0, 1); flip to (0, 1] so the logarithm stays finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();

    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Draw from a normal distribution with the given mean and standard deviation
///
/// A zero standard deviation collapses the distribution onto the mean.
pub fn sample_gaussian<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    std_dev.mul_add(standard_normal(rng), mean)
}
