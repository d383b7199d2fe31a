/// Checks whether three side lengths form a triangle: no side is negative
/// and the sum of any two sides is strictly greater than the third one.
pub fn is_valid_triangle(side_a: f32, side_b: f32, side_c: f32) -> bool {
    side_a >= 0.0
        && side_b >= 0.0
        && side_c >= 0.0
        && side_a + side_b > side_c
        && side_a + side_c > side_b
        && side_b + side_c > side_a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_triangle_is_valid() {
        assert!(is_valid_triangle(3.0, 4.0, 5.0));
    }

    #[test]
    fn negative_sides_are_rejected() {
        assert!(!is_valid_triangle(-3.0, 4.0, 5.0));
        assert!(!is_valid_triangle(3.0, -4.0, 5.0));
        assert!(!is_valid_triangle(3.0, 4.0, -5.0));
    }

    #[test]
    fn inequality_has_to_hold_strictly() {
        assert!(!is_valid_triangle(2.0, 3.0, 6.0));
        assert!(!is_valid_triangle(1.0, 2.0, 3.0));
        assert!(!is_valid_triangle(0.0, 0.0, 0.0));
    }
}
