//! SVG path data for tongue curves.
use std::fmt::Write;

use crate::geometry::Curve;

/// `M start C start_control middle_control middle S end_control end`.
pub fn curve_path_data(curve: &Curve) -> String {
    let mut d = String::with_capacity(64);
    // Writing into a String cannot fail.
    let _ = write!(
        d,
        "M {} {} C {} {}, {} {}, {} {} S {} {}, {} {}",
        curve.start.x,
        curve.start.y,
        curve.start_control.x,
        curve.start_control.y,
        curve.middle_control.x,
        curve.middle_control.y,
        curve.middle.x,
        curve.middle.y,
        curve.end_control.x,
        curve.end_control.y,
        curve.end.x,
        curve.end.y,
    );
    d
}

/// Escapes the characters that would break out of a double-quoted attribute.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn path_data_orders_controls_for_smooth_join() {
        let curve = Curve {
            start: Point::new(50, 0),
            start_control: Point::new(50, 40),
            middle: Point::new(59, 25),
            middle_control: Point::new(59, 5),
            end_control: Point::new(50, 10),
            end: Point::new(50, 50),
        };
        assert_eq!(
            curve_path_data(&curve),
            "M 50 0 C 50 40, 59 5, 59 25 S 50 10, 50 50"
        );
    }

    #[test]
    fn negative_coordinates_keep_their_sign() {
        let p = Point::new(-3, -4);
        let curve = Curve {
            start: p,
            start_control: p,
            middle: p,
            middle_control: p,
            end_control: p,
            end: p,
        };
        assert!(curve_path_data(&curve).starts_with("M -3 -4 C"));
    }

    #[test]
    fn escape_attr_handles_quotes_and_markup() {
        assert_eq!(escape_attr("#fff"), "#fff");
        assert_eq!(escape_attr("a\"b<c>&"), "a&quot;b&lt;c&gt;&amp;");
    }
}
