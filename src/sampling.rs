//! Curve sampling: from a function model to visible device points.

use log::debug;

use crate::function::Function;
use crate::geom::ScreenPoint;
use crate::transform::CoordinateTransform;
use crate::view::PlaneLayout;

/// Sample a function over its family's domain and keep the visible points.
///
/// Points come back in ascending domain order. Samples that leave the axis
/// box or evaluate to a non-finite value are dropped, so the result may have
/// gaps (for example around `tan` asymptotes).
pub fn generate_points(function: &Function, layout: &PlaneLayout) -> Vec<ScreenPoint> {
    let kind = function.kind();
    let profile = kind.profile();
    let transform =
        CoordinateTransform::new(*layout, function.coefficients(), profile.scale_factor);
    let domain = profile.domain(layout.axis_half_length as f64);

    let mut total = 0usize;
    let points: Vec<ScreenPoint> = domain
        .samples(profile.step)
        .inspect(|_| total += 1)
        .filter_map(|x_raw| transform.sample(x_raw, |t| kind.eval(t)))
        .collect();
    debug!(
        "sampled {function}: kept {} of {total} samples",
        points.len()
    );
    points
}
