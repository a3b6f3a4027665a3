//! Letter shapes traced as polylines.

use polyline::{point, Polyline, Result};

/// The letter "D", traced clockwise from the bottom left corner.
///
/// The polyline has eight slots. Only the first seven are traced; the last
/// is left at the origin.
pub fn letter_d() -> Result<Polyline<f64>> {
    let mut d = Polyline::new(8)?;
    let outline = [
        (0.0, 0.0),
        (0.0, 4.0),
        (2.0, 5.0),
        (4.0, 4.0),
        (4.0, 1.0),
        (2.0, 0.0),
        (0.0, 0.0),
    ];
    for (i, &(x, y)) in outline.iter().enumerate() {
        d.set(i, point(x, y))?;
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d_has_eight_points() {
        let d = letter_d().unwrap();
        assert_eq!(d.len(), 8);
        assert_eq!(d[2], point(2.0, 5.0));
        assert_eq!(d.last(), point(0.0, 0.0));
    }

    #[test]
    fn d_renders() {
        assert_eq!(
            letter_d().unwrap().to_string(),
            "(0, 0) -> (0, 4) -> (2, 5) -> (4, 4) -> (4, 1) -> (2, 0) -> (0, 0) -> (0, 0)"
        );
    }
}
