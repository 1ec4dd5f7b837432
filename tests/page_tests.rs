use folio_core::events::*;
use folio_core::page::*;
use folio_core::tilt::{neutral_transform, Bounds, Tilt};

fn card() -> Bounds {
    Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn tilt_is_flat_at_centre() {
    let t = Tilt::at(&card(), 200.0, 100.0);
    assert_eq!(t, Tilt::default());
}

#[test]
fn tilt_top_left_corner_is_maximal() {
    let t = Tilt::at(&card(), 100.0, 50.0);
    assert_eq!(t.rotate_x, 10.0);
    assert_eq!(t.rotate_y, -10.0);
}

#[test]
fn tilt_bottom_right_corner_mirrors() {
    let t = Tilt::at(&card(), 300.0, 150.0);
    assert_eq!(t.rotate_x, -10.0);
    assert_eq!(t.rotate_y, 10.0);
}

#[test]
fn zero_sized_element_is_neutral() {
    let b = Bounds {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 40.0,
    };
    assert_eq!(Tilt::at(&b, 5.0, 5.0), Tilt::default());
}

#[test]
fn tilt_transform_strings() {
    let t = Tilt::at(&card(), 100.0, 50.0);
    assert_eq!(
        t.hover_transform(),
        "perspective(1000px) rotateX(10deg) rotateY(-10deg) scale3d(1.02, 1.02, 1.02)"
    );
    assert_eq!(
        neutral_transform(),
        "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)"
    );
}

#[test]
fn scroll_progress_percentages() {
    assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(1000.0, 3000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    assert_eq!(percent_width(50.0), "50%");
}

#[test]
fn unscrollable_page_reports_zero() {
    assert_eq!(scroll_progress_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress_percent(10.0, 600.0, 800.0), 0.0);
}

#[test]
fn overscroll_is_clamped() {
    assert_eq!(scroll_progress_percent(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(2100.0, 3000.0, 1000.0), 100.0);
}

#[test]
fn nav_menu_toggles_and_closes() {
    let mut menu = NavMenu::default();
    assert!(menu.toggle());
    assert!(!menu.toggle());
    menu.toggle();
    menu.close();
    assert!(!menu.open);
    menu.close();
    assert!(!menu.open);
}

#[test]
fn every_binding_row_is_unique() {
    for (i, a) in BINDINGS.iter().enumerate() {
        for b in &BINDINGS[i + 1..] {
            assert!(
                !(a.source == b.source && a.kind == b.kind && a.handler == b.handler),
                "duplicate row {:?}",
                a
            );
        }
    }
}

#[test]
fn menu_rows_require_both_elements() {
    let menu_rows: Vec<_> = BINDINGS
        .iter()
        .filter(|b| matches!(b.handler, Handler::ToggleMenu | Handler::CloseMenu))
        .collect();
    assert_eq!(menu_rows.len(), 2);
    for row in menu_rows {
        assert!(row.requires.contains(&MENU_TOGGLE_ID));
        assert!(row.requires.contains(&NAV_ID));
    }
}

#[test]
fn tilt_rows_cover_enter_and_leave() {
    let kinds: Vec<_> = BINDINGS
        .iter()
        .filter(|b| b.source == EventSource::Selector(TILT_SELECTOR))
        .map(|b| b.kind.as_str())
        .collect();
    assert_eq!(kinds, ["mousemove", "mouseleave"]);
}

#[test]
fn static_rows_are_persistent() {
    assert!(BINDINGS.iter().all(|b| !b.once));
    assert!(BINDINGS
        .iter()
        .all(|b| b.handler != Handler::TrackOrientation));
}

#[test]
fn gated_orientation_waits_for_one_body_click() {
    let gated = orientation_bindings(true);
    assert_eq!(gated.len(), 1);
    assert_eq!(gated[0].source, EventSource::Body);
    assert_eq!(gated[0].kind, EventKind::Click);
    assert_eq!(gated[0].handler, Handler::RequestMotionPermission);
    assert!(gated[0].once);

    let direct = orientation_bindings(false);
    assert_eq!(direct.len(), 1);
    assert_eq!(direct[0].source, EventSource::Window);
    assert_eq!(direct[0].kind.as_str(), "deviceorientation");
    assert_eq!(direct[0].handler, Handler::TrackOrientation);
    assert!(!direct[0].once);
}

#[test]
fn fade_targets_start_hidden_with_transition() {
    assert_eq!(
        FADE_HIDDEN_STYLES,
        [
            ("opacity", "0"),
            ("transform", "translateY(50px) rotateX(10deg)"),
            (
                "transition",
                "opacity 0.8s ease-out, transform 0.8s cubic-bezier(0.175, 0.885, 0.32, 1.275)"
            ),
        ]
    );
    assert_eq!(FADE_SELECTOR, ".fade-in, .fade-in-auto, section");
}

#[test]
fn intersecting_fade_target_is_revealed() {
    let shown = fade_styles(true).unwrap();
    assert_eq!(
        shown,
        [("opacity", "1"), ("transform", "translateY(0) rotateX(0)")]
    );
}

#[test]
fn leaving_viewport_does_not_hide_again() {
    assert!(fade_styles(true).is_some());
    assert_eq!(fade_styles(false), None);
    // the hidden styles are only ever applied up front
    let shown = fade_styles(true).unwrap();
    assert!(shown.iter().all(|(prop, _)| *prop != "transition"));
}
