//! Domain rendering
//!
//! Turns a dvar's legal-value domain into the help text shown by the
//! console. Open bounds are recognised by exact comparison with the
//! sentinel extremes; large but finite bounds are still printed.

use std::fmt::Write;

use dvars_sdk::{DvarDomain, FloatBounds, IntBounds, RawDvarLimits};

/// Describe a domain in human-readable form
pub fn render_domain(domain: &DvarDomain) -> String {
    match domain {
        DvarDomain::Boolean => "Domain is 0 or 1".to_string(),

        DvarDomain::Value(bounds) => render_value_domain(bounds),

        DvarDomain::Vec2(bounds)
        | DvarDomain::Vec3(bounds)
        | DvarDomain::Vec4(bounds)
        | DvarDomain::Rgb(bounds) => {
            render_vector_domain(domain.kind().components().unwrap_or(0), bounds)
        }

        DvarDomain::Integer(bounds) => render_integer_domain(bounds),

        DvarDomain::Color => "Domain is any 4-component color, in RGBA format".to_string(),

        DvarDomain::Enumeration(choices) => {
            let mut text = String::from("Domain is one of the following:");
            for (index, choice) in choices.iter().enumerate() {
                let _ = write!(text, "\n  {:>2}: {}", index, choice);
            }
            text
        }

        DvarDomain::String => "Domain is any text".to_string(),
    }
}

/// Describe a domain given as a raw type tag and limits union
///
/// Unknown tags render a diagnostic instead of failing.
///
/// # Safety
/// Same contract as [`DvarDomain::from_raw`].
pub unsafe fn render_raw_domain(type_tag: i32, limits: &RawDvarLimits) -> String {
    match DvarDomain::from_raw(type_tag, limits) {
        Some(domain) => render_domain(&domain),
        None => format!("unhandled dvar type '{}'", type_tag),
    }
}

fn render_value_domain(bounds: &FloatBounds) -> String {
    match (bounds.has_min(), bounds.has_max()) {
        (false, false) => "Domain is any number".to_string(),
        (false, true) => format!("Domain is any number {} or smaller", format_g(bounds.max)),
        (true, false) => format!("Domain is any number {} or bigger", format_g(bounds.min)),
        (true, true) => format!(
            "Domain is any number from {} to {}",
            format_g(bounds.min),
            format_g(bounds.max)
        ),
    }
}

fn render_vector_domain(components: u8, bounds: &FloatBounds) -> String {
    match (bounds.has_min(), bounds.has_max()) {
        (false, false) => format!("Domain is any {}D vector", components),
        (false, true) => format!(
            "Domain is any {}D vector with components {} or smaller",
            components,
            format_g(bounds.max)
        ),
        (true, false) => format!(
            "Domain is any {}D vector with components {} or bigger",
            components,
            format_g(bounds.min)
        ),
        (true, true) => format!(
            "Domain is any {}D vector with components from {} to {}",
            components,
            format_g(bounds.min),
            format_g(bounds.max)
        ),
    }
}

fn render_integer_domain(bounds: &IntBounds) -> String {
    match (bounds.has_min(), bounds.has_max()) {
        (false, false) => "Domain is any integer".to_string(),
        (false, true) => format!("Domain is any integer {} or smaller", bounds.max),
        (true, false) => format!("Domain is any integer {} or bigger", bounds.min),
        (true, true) => format!("Domain is any integer from {} to {}", bounds.min, bounds.max),
    }
}

/// Format like C's `%g`: six significant digits, trailing zeros removed,
/// exponent form outside `1e-4 <= |x| < 1e6`
fn format_g(value: f32) -> String {
    const PRECISION: i32 = 6;

    let value = f64::from(value);
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to the target precision
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strip trailing zeros and a dangling decimal point
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dvars_sdk::{DvarType, RawFloatLimits, RawIntLimits};

    #[test]
    fn test_boolean() {
        assert_eq!(render_domain(&DvarDomain::Boolean), "Domain is 0 or 1");
    }

    #[test]
    fn test_boolean_raw_ignores_limits() {
        let raw = RawDvarLimits {
            integer: RawIntLimits { min: 7, max: -3 },
        };
        let text = unsafe { render_raw_domain(DvarType::Boolean.as_raw(), &raw) };
        assert_eq!(text, "Domain is 0 or 1");
    }

    #[test]
    fn test_value_phrasings() {
        let any = DvarDomain::Value(FloatBounds::unbounded());
        let smaller = DvarDomain::Value(FloatBounds::new(-f32::MAX, 10.0));
        let bigger = DvarDomain::Value(FloatBounds::new(0.5, f32::MAX));
        let range = DvarDomain::Value(FloatBounds::new(0.0, 10.0));

        assert_eq!(render_domain(&any), "Domain is any number");
        assert_eq!(render_domain(&smaller), "Domain is any number 10 or smaller");
        assert_eq!(render_domain(&bigger), "Domain is any number 0.5 or bigger");
        assert_eq!(render_domain(&range), "Domain is any number from 0 to 10");
    }

    #[test]
    fn test_large_finite_bounds_are_bounded() {
        let domain = DvarDomain::Value(FloatBounds::new(-1e30, 3.4e38));
        assert_eq!(
            render_domain(&domain),
            "Domain is any number from -1e+30 to 3.4e+38"
        );
    }

    #[test]
    fn test_vector_phrasings() {
        assert_eq!(
            render_domain(&DvarDomain::Vec2(FloatBounds::unbounded())),
            "Domain is any 2D vector"
        );
        assert_eq!(
            render_domain(&DvarDomain::Vec3(FloatBounds::new(-f32::MAX, 1.0))),
            "Domain is any 3D vector with components 1 or smaller"
        );
        assert_eq!(
            render_domain(&DvarDomain::Vec4(FloatBounds::new(-1.0, f32::MAX))),
            "Domain is any 4D vector with components -1 or bigger"
        );
        assert_eq!(
            render_domain(&DvarDomain::Vec4(FloatBounds::new(0.0, 1.0))),
            "Domain is any 4D vector with components from 0 to 1"
        );
    }

    #[test]
    fn test_rgb_matches_vec3() {
        let bounds = FloatBounds::new(0.0, 1.0);
        assert_eq!(
            render_domain(&DvarDomain::Rgb(bounds)),
            render_domain(&DvarDomain::Vec3(bounds))
        );
        assert_eq!(
            render_domain(&DvarDomain::Rgb(FloatBounds::unbounded())),
            "Domain is any 3D vector"
        );
    }

    #[test]
    fn test_color() {
        assert_eq!(
            render_domain(&DvarDomain::Color),
            "Domain is any 4-component color, in RGBA format"
        );
    }

    #[test]
    fn test_integer_phrasings() {
        assert_eq!(
            render_domain(&DvarDomain::Integer(IntBounds::unbounded())),
            "Domain is any integer"
        );
        assert_eq!(
            render_domain(&DvarDomain::Integer(IntBounds::new(i32::MIN, 5))),
            "Domain is any integer 5 or smaller"
        );
        assert_eq!(
            render_domain(&DvarDomain::Integer(IntBounds::new(-3, i32::MAX))),
            "Domain is any integer -3 or bigger"
        );
        assert_eq!(
            render_domain(&DvarDomain::Integer(IntBounds::new(0, 100))),
            "Domain is any integer from 0 to 100"
        );
    }

    #[test]
    fn test_enumeration() {
        let domain = DvarDomain::Enumeration(vec![
            "low".to_string(),
            "medium".to_string(),
            "high".to_string(),
        ]);
        assert_eq!(
            render_domain(&domain),
            "Domain is one of the following:\n   0: low\n   1: medium\n   2: high"
        );
    }

    #[test]
    fn test_enumeration_wide_index() {
        let choices: Vec<String> = (0..12).map(|i| format!("c{}", i)).collect();
        let text = render_domain(&DvarDomain::Enumeration(choices));
        assert!(text.ends_with("\n   9: c9\n  10: c10\n  11: c11"));
    }

    #[test]
    fn test_empty_enumeration() {
        assert_eq!(
            render_domain(&DvarDomain::Enumeration(Vec::new())),
            "Domain is one of the following:"
        );
    }

    #[test]
    fn test_string() {
        assert_eq!(render_domain(&DvarDomain::String), "Domain is any text");
    }

    #[test]
    fn test_raw_unhandled_type() {
        let raw = RawDvarLimits::default();
        assert_eq!(unsafe { render_raw_domain(42, &raw) }, "unhandled dvar type '42'");
        assert_eq!(unsafe { render_raw_domain(-1, &raw) }, "unhandled dvar type '-1'");
    }

    #[test]
    fn test_raw_value() {
        let raw = RawDvarLimits {
            value: RawFloatLimits {
                min: -f32::MAX,
                max: 10.0,
            },
        };
        let text = unsafe { render_raw_domain(DvarType::Value.as_raw(), &raw) };
        assert_eq!(text, "Domain is any number 10 or smaller");
    }

    #[test]
    fn test_raw_integer_unbounded_min() {
        let raw = RawDvarLimits {
            integer: RawIntLimits {
                min: i32::MIN,
                max: 64,
            },
        };
        let text = unsafe { render_raw_domain(DvarType::Integer.as_raw(), &raw) };
        assert_eq!(text, "Domain is any integer 64 or smaller");
    }

    #[test]
    fn test_format_g() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(-0.0), "-0");
        assert_eq!(format_g(10.0), "10");
        assert_eq!(format_g(0.5), "0.5");
        assert_eq!(format_g(-2.5), "-2.5");
        assert_eq!(format_g(0.1), "0.1");
        assert_eq!(format_g(1.1), "1.1");
        assert_eq!(format_g(123456.0), "123456");
        assert_eq!(format_g(1_000_000.0), "1e+06");
        assert_eq!(format_g(1_234_567.0), "1.23457e+06");
        assert_eq!(format_g(0.0001), "0.0001");
        assert_eq!(format_g(0.00001), "1e-05");
        assert_eq!(format_g(f32::MAX), "3.40282e+38");
        assert_eq!(format_g(f32::INFINITY), "inf");
    }
}
