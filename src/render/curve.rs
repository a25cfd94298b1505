use super::svg::number;

use std::fmt::Write;

/// Control points of the natural cubic spline through `x` (one coordinate),
/// found with the Thomas algorithm. Requires at least three values.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }

    (a, b)
}

/// SVG path data for the natural cubic spline through `points`.
pub fn natural_curve(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    let Some(&(x0, y0)) = points.first() else {
        return d;
    };
    let _ = write!(d, "M{},{}", number(x0), number(y0));

    match points.len() {
        1 => {}
        2 => {
            let (x1, y1) = points[1];
            let _ = write!(d, "L{},{}", number(x1), number(y1));
        }
        _ => {
            let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
            let (px1, px2) = control_points(&xs);
            let (py1, py2) = control_points(&ys);
            for i in 0..points.len() - 1 {
                let _ = write!(
                    d,
                    "C{},{},{},{},{},{}",
                    number(px1[i]),
                    number(py1[i]),
                    number(px2[i]),
                    number(py2[i]),
                    number(xs[i + 1]),
                    number(ys[i + 1])
                );
            }
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_inputs() {
        assert_eq!(natural_curve(&[]), "");
        assert_eq!(natural_curve(&[(1.0, 2.0)]), "M1,2");
        assert_eq!(natural_curve(&[(0.0, 0.0), (10.0, 5.0)]), "M0,0L10,5");
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let d = natural_curve(&[(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)]);
        // evenly spaced collinear points put the control points at thirds
        assert_eq!(
            d,
            "M0,0C3.333333,3.333333,6.666667,6.666667,10,10C13.333333,13.333333,16.666667,16.666667,20,20"
        );
    }

    #[test]
    fn curve_ends_at_last_point() {
        let points = [(0.0, 5.0), (10.0, 1.0), (20.0, 8.0), (30.0, 2.0)];
        let d = natural_curve(&points);
        assert!(d.starts_with("M0,5C"));
        assert!(d.ends_with(",30,2"));
        assert_eq!(d.matches('C').count(), 3);
    }
}
