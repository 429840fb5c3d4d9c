use proptest::prelude::*;

use certify_app::export::{fit_to_page, A4_HEIGHT_PX, A4_WIDTH_PX, PAGE_MARGIN_PX, TOP_OFFSET_PX};

proptest! {
    /// Fitted images are centred, keep their aspect ratio and never exceed
    /// the usable width; only images taller than the page are fitted by height.
    #[test]
    fn fitted_image_keeps_ratio_and_centre(width in 1.0f64..10_000.0, height in 1.0f64..10_000.0) {
        let p = fit_to_page(width, height).unwrap();
        let ratio = width / height;
        let usable_width = A4_WIDTH_PX - PAGE_MARGIN_PX;

        prop_assert!(((p.width / p.height) - ratio).abs() < 1e-6 * ratio.max(1.0));
        prop_assert!((p.x - (A4_WIDTH_PX - p.width) / 2.0).abs() < 1e-9);
        prop_assert!(p.width <= usable_width + 1e-9);
        prop_assert_eq!(p.y, TOP_OFFSET_PX);

        if usable_width / ratio > A4_HEIGHT_PX {
            prop_assert!((p.height - (A4_HEIGHT_PX - PAGE_MARGIN_PX)).abs() < 1e-9);
        } else {
            prop_assert!((p.width - usable_width).abs() < 1e-9);
        }
    }
}
