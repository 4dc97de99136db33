//! Property tests for rectangle bounding boxes.

use proptest::prelude::*;
use sidney_core::Rect;

fn rect() -> impl Strategy<Value = Rect> {
    (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn union_all_contains_every_rect(rects in prop::collection::vec(rect(), 1..16)) {
        let bounds = Rect::union_all(&rects).expect("non-empty input");
        for r in &rects {
            prop_assert!(bounds.x <= r.x);
            prop_assert!(bounds.y <= r.y);
            prop_assert!(bounds.right() >= r.right());
            prop_assert!(bounds.bottom() >= r.bottom());
        }
    }

    #[test]
    fn union_all_touches_extremes(rects in prop::collection::vec(rect(), 1..16)) {
        let bounds = Rect::union_all(&rects).expect("non-empty input");
        prop_assert!(rects.iter().any(|r| r.x == bounds.x));
        prop_assert!(rects.iter().any(|r| r.y == bounds.y));
    }

    #[test]
    fn union_is_commutative(a in rect(), b in rect()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }
}
