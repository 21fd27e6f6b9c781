// Host-side tests for the content-drag and thumb-drag session machines.

use carousel_core::*;

#[test]
fn content_drag_scenario_from_the_product_page() {
    // Gain 1.5, origin offset 100, pointer moves -40:
    // walk = -60, new offset = 100 - (-60) = 160, session moved
    let mut drag = ContentDrag::default();
    drag.begin(200.0, 100.0);

    let target = drag.target_offset(160.0);
    assert_eq!(target, Some(160.0));
    assert!(drag.moved);
}

#[test]
fn content_drag_within_threshold_is_still_a_click() {
    let mut drag = ContentDrag::default();
    drag.begin(200.0, 100.0);

    // walk = 3 * 1.5 = 4.5, under the 5px threshold
    assert_eq!(drag.target_offset(203.0), None);
    assert!(!drag.moved);
}

#[test]
fn content_drag_marks_moved_once_past_threshold() {
    let mut drag = ContentDrag::default();
    drag.begin(200.0, 100.0);

    assert_eq!(drag.target_offset(202.0), None);
    assert!(!drag.moved);

    // walk = 10 * 1.5 = 15
    assert_eq!(drag.target_offset(210.0), Some(85.0));
    assert!(drag.moved);

    // moved stays set for the rest of the session, even if the pointer
    // returns to the origin
    assert_eq!(drag.target_offset(200.0), None);
    assert!(drag.moved);
}

#[test]
fn content_drag_inactive_session_yields_nothing() {
    let mut drag = ContentDrag::default();
    assert_eq!(drag.target_offset(500.0), None);

    drag.begin(200.0, 100.0);
    drag.end();
    assert_eq!(drag.target_offset(500.0), None);
}

#[test]
fn moved_flag_resets_on_the_next_session() {
    // Click suppression consumes the flag by reading it; only the next
    // pointer-down clears it.
    let mut drag = ContentDrag::default();
    drag.begin(200.0, 100.0);
    drag.target_offset(260.0);
    assert!(drag.moved);
    drag.end();
    assert!(drag.moved);

    drag.begin(300.0, 40.0);
    assert!(!drag.moved);
}

#[test]
fn thumb_drag_tracks_the_pointer_delta() {
    let mut drag = ThumbDrag::default();
    drag.begin(100.0, 50.0);

    assert_eq!(drag.thumb_offset_for_pointer(130.0, 180.0), Some(80.0));
    assert_eq!(drag.thumb_offset_for_pointer(90.0, 180.0), Some(40.0));
}

#[test]
fn thumb_drag_clamps_to_the_rail() {
    let mut drag = ThumbDrag::default();
    drag.begin(100.0, 50.0);

    assert_eq!(drag.thumb_offset_for_pointer(400.0, 180.0), Some(180.0));
    assert_eq!(drag.thumb_offset_for_pointer(-400.0, 180.0), Some(0.0));
}

#[test]
fn thumb_drag_guards_a_degenerate_rail() {
    // rail width == thumb width: the only legal offset is 0
    let mut drag = ThumbDrag::default();
    drag.begin(100.0, 0.0);
    assert_eq!(drag.thumb_offset_for_pointer(150.0, 0.0), Some(0.0));
    assert_eq!(drag.thumb_offset_for_pointer(150.0, -5.0), Some(0.0));
}

#[test]
fn thumb_drag_inactive_session_yields_nothing() {
    let drag = ThumbDrag::default();
    assert_eq!(drag.thumb_offset_for_pointer(150.0, 180.0), None);
}

#[test]
fn thumb_drag_round_trips_with_the_synchronize_mapping() {
    // Drag the thumb, derive the track offset from it, then re-derive the
    // thumb position the synchronize pass would draw: the two thumb
    // positions must agree within rounding tolerance.
    let rail = 240.0;
    let metrics = TrackMetrics {
        visible: 500.0,
        total: 2000.0,
        offset: 0.0,
    };
    let width = thumb_width(metrics, rail);

    let mut drag = ThumbDrag::default();
    drag.begin(100.0, 0.0);

    for pointer_x in [110.0_f32, 145.0, 200.0, 500.0] {
        let dragged = drag
            .thumb_offset_for_pointer(pointer_x, rail - width)
            .unwrap();
        let offset = offset_for_thumb(metrics, rail, width, dragged);
        let redrawn = thumb_offset(
            TrackMetrics { offset, ..metrics },
            rail,
            width,
        );
        assert!(
            (redrawn - dragged).abs() < 1e-2,
            "pointer {} -> thumb {} -> offset {} -> thumb {}",
            pointer_x,
            dragged,
            offset,
            redrawn
        );
    }
}
