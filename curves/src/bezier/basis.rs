use super::super::coordinate::*;

///
/// Computes the binomial coefficient 'n choose k'
///
/// This multiplies and divides alternately so the intermediate values stay
/// small. Precision still degrades once `n` gets very large, but the result
/// degrades gracefully rather than overflowing outright.
///
pub fn n_choose_k(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    let mut result = 1.0;

    for i in 1..=k {
        result *= (n - (k - i)) as f64;
        result /= i as f64;
    }

    result
}

///
/// The Bernstein weighting function for control point `i` of a degree `m` curve
///
#[inline]
pub fn bernstein_weight(m: usize, i: usize, t: f64) -> f64 {
    n_choose_k(m, i) * f64::powi(t, i as i32) * f64::powi(1.0-t, (m-i) as i32)
}

///
/// De Casteljau's algorithm for a pair of weights (a linear interpolation)
///
#[inline]
pub fn de_casteljau2<Point: Coordinate>(t: f64, w1: Point, w2: Point) -> Point {
    w1*(1.0-t) + w2*t
}

///
/// Blends a set of weights into the curve point at `t` using the Bernstein
/// basis polynomials
///
/// The weights are the control points of a curve of degree `weights.len()-1`,
/// so the slice must contain at least one point.
///
pub fn basis<Point: Coordinate>(t: f64, weights: &[Point]) -> Point {
    let m = weights.len()-1;

    let mut result = Point::origin();

    for (i, weight) in weights.iter().enumerate() {
        result = result + *weight*bernstein_weight(m, i, t);
    }

    result
}
