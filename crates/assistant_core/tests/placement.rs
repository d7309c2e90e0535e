use assistant_core::{popup_origin, PointerPosition, Size, Viewport, DEFAULT_POPUP_SIZE};

const VIEWPORT: Viewport = Viewport {
    width: 1000.0,
    height: 800.0,
};

fn at(x: f64, y: f64) -> PointerPosition {
    PointerPosition { x, y }
}

#[test]
fn default_placement_offsets_below_and_right() {
    let origin = popup_origin(at(100.0, 100.0), DEFAULT_POPUP_SIZE, VIEWPORT);
    assert_eq!(origin, at(115.0, 115.0));
}

#[test]
fn flips_left_near_the_right_edge() {
    let popup = Size {
        width: 200.0,
        height: 50.0,
    };
    let origin = popup_origin(at(950.0, 100.0), popup, VIEWPORT);
    assert_eq!(origin, at(950.0 - 200.0 - 15.0, 115.0));
}

#[test]
fn flips_up_near_the_bottom_edge() {
    let popup = Size {
        width: 200.0,
        height: 50.0,
    };
    let origin = popup_origin(at(100.0, 790.0), popup, VIEWPORT);
    assert_eq!(origin, at(115.0, 790.0 - 50.0 - 15.0));
}

#[test]
fn flips_both_axes_in_the_corner() {
    let popup = Size {
        width: 300.0,
        height: 120.0,
    };
    let origin = popup_origin(at(990.0, 795.0), popup, VIEWPORT);
    assert_eq!(origin, at(990.0 - 300.0 - 15.0, 795.0 - 120.0 - 15.0));
}
