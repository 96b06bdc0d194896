//! Unit tests for the image-to-text core.
//!
//! These tests verify the core algorithms:
//! - Dimension planning
//! - Grayscale / AA-color conversion
//! - Text matrix trimming and counting
//! - Built-in glyph renderer

use i2a::ascii::*;

// ==================== Dimension Planning Tests ====================

#[test]
fn test_plan_default_multiplier_scenario() {
    // 2:1 image, unbounded, default multiplier
    let target = plan_dimensions(100, 50, 0, 0, DEFAULT_WIDTH_MULTIPLIER);
    assert_eq!(target.width, 180);
    assert_eq!(target.height, 50);
}

#[test]
fn test_plan_zero_bound_means_unbounded() {
    let bounded = plan_dimensions(300, 200, 300, 200, 1.0);
    let unbounded = plan_dimensions(300, 200, 0, 0, 1.0);
    assert_eq!(bounded, unbounded);
    assert_eq!(unbounded, ResizeTarget { width: 300, height: 200 });
}

#[test]
fn test_plan_always_positive() {
    let sizes = [1u32, 2, 3, 7, 50, 333, 1024, 4000];
    let bounds = [0u32, 1, 5, 80, 500];
    for &w in &sizes {
        for &h in &sizes {
            for &mw in &bounds {
                for &mh in &bounds {
                    for k in [0.5, 1.0, 1.8, 3.0] {
                        let t = plan_dimensions(w, h, mw, mh, k);
                        assert!(t.width > 0 && t.height > 0, "{w}x{h} {mw}/{mh} {k}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_plan_preserves_aspect_before_multiplier() {
    let sizes = [(640u32, 480u32), (1920, 1080), (500, 2000), (37, 91)];
    for (w, h) in sizes {
        for (mw, mh) in [(80, 0), (0, 24), (80, 24), (120, 40)] {
            let t = plan_dimensions(w, h, mw, mh, 1.0);
            let ratio = f64::from(w) / f64::from(h);
            // Off by at most one unit of rounding on the derived side
            let expected_w = f64::from(t.height) * ratio;
            let expected_h = f64::from(t.width) / ratio;
            assert!(
                (f64::from(t.width) - expected_w).abs() <= 1.0
                    || (f64::from(t.height) - expected_h).abs() <= 1.0,
                "{w}x{h} -> {t:?}"
            );
        }
    }
}

#[test]
fn test_plan_within_bounds_only_multiplier_changes() {
    let first = plan_dimensions(800, 600, 80, 60, 1.0);
    let again = plan_dimensions(first.width, first.height, 80, 60, 1.0);
    assert_eq!(first, again);

    let corrected = plan_dimensions(first.width, first.height, 80, 60, 1.8);
    assert_eq!(corrected.height, first.height);
    assert_eq!(corrected.width, (f64::from(first.width) * 1.8).round() as u32);
}

// ==================== Grayscale Conversion Tests ====================

#[test]
fn test_white_pixel_scenario() {
    assert_eq!(to_aa_color(1.0, 1.0, 1.0, 1.0, false), 255);
    assert_eq!(to_aa_color(1.0, 1.0, 1.0, 1.0, true), 0);
}

#[test]
fn test_gray_monotonic_per_channel() {
    let steps: Vec<f64> = (0..=10).map(|i| f64::from(i) / 10.0).collect();
    for &a in &[0.25, 0.5, 1.0] {
        for &base in &steps {
            for pair in steps.windows(2) {
                let (lo, hi) = (pair[0], pair[1]);
                assert!(to_gray(lo, base, base, a) <= to_gray(hi, base, base, a));
                assert!(to_gray(base, lo, base, a) <= to_gray(base, hi, base, a));
                assert!(to_gray(base, base, lo, a) <= to_gray(base, base, hi, a));
            }
        }
    }
}

#[test]
fn test_gray_transparent_is_black() {
    for &(r, g, b) in &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (0.2, 0.8, 0.4)] {
        assert_eq!(to_gray(r, g, b, 0.0), 0.0);
    }
}

#[test]
fn test_green_brightest_blue_darkest() {
    let r = to_aa_color(1.0, 0.0, 0.0, 1.0, false);
    let g = to_aa_color(0.0, 1.0, 0.0, 1.0, false);
    let b = to_aa_color(0.0, 0.0, 1.0, 1.0, false);
    assert!(g > r && r > b);
}

#[test]
fn test_invert_round_trip() {
    for v in 0..=255u8 {
        assert_eq!(invert_aa_color(invert_aa_color(v)), v);
    }
}

// ==================== Text Matrix Tests ====================

fn matrix(rows: &[&str]) -> TextMatrix {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let glyphs: Vec<char> = rows
        .iter()
        .flat_map(|r| format!("{:<width$}", r).chars().collect::<Vec<_>>())
        .collect();
    TextMatrix::from_glyphs(width, rows.len(), &glyphs)
}

#[test]
fn test_optimize_scenario() {
    let mut m = matrix(&["ab   "]);
    m.optimize();
    assert_eq!(m.lines().collect::<Vec<_>>(), vec!["ab"]);
    assert_eq!(m.char_count(), 2);
}

#[test]
fn test_optimize_idempotent_and_never_grows() {
    let cases: &[&[&str]] = &[
        &["a    ", "  b  ", "     "],
        &["@@@", "@ @", "@@@"],
        &["   "],
        &["x"],
    ];
    for rows in cases {
        let mut m = matrix(rows);
        let before = m.char_count();
        m.optimize();
        let once = m.clone();
        assert!(m.char_count() <= before);
        m.optimize();
        assert_eq!(m, once);
    }
}

#[test]
fn test_optimize_no_trailing_spaces_unchanged() {
    let mut m = matrix(&["abc", " de", "  f"]);
    let before = m.clone();
    m.optimize();
    assert_eq!(m, before);
}

#[test]
fn test_dimensions_fixed_after_optimize() {
    let mut m = matrix(&["a  ", "   "]);
    m.optimize();
    assert_eq!((m.width(), m.height()), (3, 2));
}

// ==================== Renderer Tests ====================

#[test]
fn test_renderer_output_length_matches_text_size() {
    let mut r = DensityRenderer::new(7, 3, CharSet::Standard).unwrap();
    assert_eq!(r.image_size(), (7 * CELL_SIZE, 3 * CELL_SIZE));
    assert_eq!(r.render().len(), 21);
}

#[test]
fn test_renderer_gradient_is_non_decreasing() {
    let mut r = DensityRenderer::new(10, 1, CharSet::Standard).unwrap();
    let (vw, vh) = r.image_size();
    for y in 0..vh {
        for x in 0..vw {
            r.put_pixel(x, y, ((x * 255) / (vw - 1)) as u8);
        }
    }
    let text = r.render().to_vec();
    let levels: Vec<usize> = text
        .iter()
        .map(|c| STANDARD_CHARSET.iter().position(|s| s == c).unwrap())
        .collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(text[0], ' ');
    assert!(levels[9] >= STANDARD_CHARSET.len() - 2);
}
