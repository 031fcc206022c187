use super::*;

fn details() -> CanvasDetails {
    CanvasDetails {
        start_index: 100,
        num_images: 11,
        duration: 2.0,
        size: 50.0,
        top: 10.0,
        left: 50.0,
        z_index: 0,
    }
}

#[test]
fn index_runs_start_to_last_then_loops() {
    let c = SectionCanvas::mount(0, details(), 5.0);
    assert_eq!(c.frame_index(5.0), 100);
    assert_eq!(c.frame_index(6.0), 105);
    assert_eq!(c.frame_index(6.999), 110);
    assert_eq!(c.frame_index(7.0), 100);
    assert_eq!(c.frame_index(8.0), 105);
}

#[test]
fn before_mount_shows_first_image() {
    let c = SectionCanvas::mount(0, details(), 5.0);
    assert_eq!(c.frame_index(1.0), 100);
}

#[test]
fn single_image_is_static() {
    let d = CanvasDetails {
        num_images: 1,
        ..details()
    };
    let c = SectionCanvas::mount(2, d, 0.0);
    assert_eq!(c.frame_index(123.4), 100);
    assert_eq!(c.section(), 2);
}

#[test]
fn rect_is_placed_by_percent() {
    let c = SectionCanvas::mount(1, details(), 0.0);
    let r = c.rect_in(Rect::new(0.0, 1000.0, 800.0, 1500.0));
    assert_eq!(r, Rect::new(400.0, 1050.0, 450.0, 1100.0));
}
