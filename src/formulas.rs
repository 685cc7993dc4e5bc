//! Area formulas for every shape
//!
//! Each `ShapeKind` has a display name, an ordered list of input labels and
//! a closed-form area. Text from the input form goes through
//! `parse_inputs` first; only a complete, numeric set of inputs reaches
//! `compute_area`.

use std::f64::consts::PI;

use thiserror::Error;

use crate::shapes::ShapeKind;

/// Errors from evaluating a shape's area
///
/// The `Display` text of the input errors is shown to the user in place of
/// a result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Please fill in all fields")]
    MissingInput,

    #[error("Invalid input")]
    InvalidInput,

    #[error("Expected {expected} inputs, got {got}")]
    Arity { expected: usize, got: usize },
}

/// Display data for one shape's formula
#[derive(Clone, Copy, Debug)]
pub struct ShapeFormula {
    pub display_name: &'static str,
    /// Input labels, in the order `compute_area` expects them
    pub input_labels: &'static [&'static str],
    /// Human-readable formula
    pub expression: &'static str,
}

/// Look up the formula for a shape
pub fn formula(kind: ShapeKind) -> ShapeFormula {
    match kind {
        ShapeKind::Triangle => ShapeFormula {
            display_name: "Triangle",
            input_labels: &["Base", "Height"],
            expression: "A = ½ · b · h",
        },
        ShapeKind::Rectangle => ShapeFormula {
            display_name: "Rectangle",
            input_labels: &["Length", "Width"],
            expression: "A = l · w",
        },
        ShapeKind::Circle => ShapeFormula {
            display_name: "Circle",
            input_labels: &["Radius"],
            expression: "A = π · r²",
        },
        ShapeKind::Trapezoid => ShapeFormula {
            display_name: "Trapezoid",
            input_labels: &["Base a", "Base b", "Height"],
            expression: "A = ½ · (a + b) · h",
        },
        ShapeKind::Box => ShapeFormula {
            display_name: "Box",
            input_labels: &["Length", "Width", "Height"],
            expression: "A = 2 · (lw + wh + hl)",
        },
        ShapeKind::Cylinder => ShapeFormula {
            display_name: "Cylinder",
            input_labels: &["Radius", "Height"],
            expression: "A = 2π · r · (r + h)",
        },
        ShapeKind::Cone => ShapeFormula {
            display_name: "Cone",
            input_labels: &["Radius", "Height"],
            expression: "A = π · r · (r + √(r² + h²))",
        },
    }
}

/// Compute the (surface) area of a shape
///
/// `inputs` must match `formula(kind).input_labels` in count and order.
/// Negative and zero values are computed as-is.
pub fn compute_area(kind: ShapeKind, inputs: &[f64]) -> Result<f64, CalcError> {
    let area = match (kind, inputs) {
        (ShapeKind::Triangle, &[base, height]) => 0.5 * base * height,
        (ShapeKind::Rectangle, &[length, width]) => length * width,
        (ShapeKind::Circle, &[r]) => PI * r * r,
        (ShapeKind::Trapezoid, &[a, b, height]) => 0.5 * (a + b) * height,
        (ShapeKind::Box, &[l, w, h]) => 2.0 * (l * w + w * h + h * l),
        (ShapeKind::Cylinder, &[r, h]) => 2.0 * PI * r * (r + h),
        (ShapeKind::Cone, &[r, h]) => {
            let slant = (r * r + h * h).sqrt();
            PI * r * (r + slant)
        }
        _ => {
            return Err(CalcError::Arity {
                expected: formula(kind).input_labels.len(),
                got: inputs.len(),
            })
        }
    };
    Ok(area)
}

/// Parse raw field text into numbers
///
/// Any blank field is `MissingInput`, which takes precedence over a field
/// that fails to parse (`InvalidInput`). Non-finite values are invalid.
pub fn parse_inputs<S: AsRef<str>>(fields: &[S]) -> Result<Vec<f64>, CalcError> {
    if fields.iter().any(|f| f.as_ref().trim().is_empty()) {
        return Err(CalcError::MissingInput);
    }

    fields
        .iter()
        .map(|f| match f.as_ref().trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(CalcError::InvalidInput),
        })
        .collect()
}

/// Parse the form fields and compute the area
pub fn evaluate<S: AsRef<str>>(kind: ShapeKind, fields: &[S]) -> Result<f64, CalcError> {
    let inputs = parse_inputs(fields)?;
    compute_area(kind, &inputs)
}

/// Format an area for display
pub fn format_area(area: f64) -> String {
    format!("{:.2}", area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_arity() {
        for kind in ShapeKind::ALL {
            let inputs = vec![1.0; formula(*kind).input_labels.len()];
            assert!(compute_area(*kind, &inputs).is_ok(), "{:?}", kind);
        }
    }

    #[test]
    fn test_circle() {
        let area = compute_area(ShapeKind::Circle, &[2.0]).unwrap();
        assert_eq!(format_area(area), "12.57");
    }

    #[test]
    fn test_rectangle() {
        let area = compute_area(ShapeKind::Rectangle, &[3.0, 4.0]).unwrap();
        assert_eq!(format_area(area), "12.00");
    }

    #[test]
    fn test_cone() {
        let area = compute_area(ShapeKind::Cone, &[3.0, 4.0]).unwrap();
        assert!((area - 24.0 * PI).abs() < 1e-9);
        assert_eq!(format_area(area), "75.40");
    }

    #[test]
    fn test_other_shapes() {
        assert_eq!(compute_area(ShapeKind::Triangle, &[4.0, 5.0]), Ok(10.0));
        assert_eq!(compute_area(ShapeKind::Trapezoid, &[2.0, 4.0, 3.0]), Ok(9.0));
        assert_eq!(compute_area(ShapeKind::Box, &[2.0, 3.0, 4.0]), Ok(52.0));

        let area = compute_area(ShapeKind::Cylinder, &[1.0, 2.0]).unwrap();
        assert!((area - 6.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs_are_computed() {
        assert_eq!(compute_area(ShapeKind::Rectangle, &[-3.0, 4.0]), Ok(-12.0));
        assert_eq!(compute_area(ShapeKind::Triangle, &[0.0, 4.0]), Ok(0.0));
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            compute_area(ShapeKind::Box, &[1.0, 2.0]),
            Err(CalcError::Arity { expected: 3, got: 2 })
        );
    }

    #[test]
    fn test_missing_field() {
        let result = evaluate(ShapeKind::Trapezoid, &["2", "", "3"]);
        assert_eq!(result, Err(CalcError::MissingInput));

        let result = evaluate(ShapeKind::Circle, &["   "]);
        assert_eq!(result, Err(CalcError::MissingInput));
    }

    #[test]
    fn test_invalid_field() {
        assert_eq!(evaluate(ShapeKind::Rectangle, &["3", "abc"]), Err(CalcError::InvalidInput));
        assert_eq!(evaluate(ShapeKind::Circle, &["NaN"]), Err(CalcError::InvalidInput));
        assert_eq!(evaluate(ShapeKind::Circle, &["inf"]), Err(CalcError::InvalidInput));
    }

    #[test]
    fn test_missing_wins_over_invalid() {
        assert_eq!(evaluate(ShapeKind::Rectangle, &["abc", ""]), Err(CalcError::MissingInput));
    }

    #[test]
    fn test_evaluate_trims_whitespace() {
        let area = evaluate(ShapeKind::Rectangle, &[" 3 ", "4\n"]).unwrap();
        assert_eq!(format_area(area), "12.00");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(CalcError::MissingInput.to_string(), "Please fill in all fields");
        assert_eq!(CalcError::InvalidInput.to_string(), "Invalid input");
    }
}
