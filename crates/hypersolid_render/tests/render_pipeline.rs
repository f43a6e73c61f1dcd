//! Integration tests for the input -> rotation -> projection pipeline
//!
//! These tests drive a viewport the way an event loop would:
//! 1. Pointer positions become drag deltas
//! 2. Drags rotate the shared shape
//! 3. Observers see every rotation
//! 4. Frames reflect the new pose, zoom and surface size

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use hypersolid_input::PointerTracker;
use hypersolid_render::{
    InputEvent, Modifiers, RotationPlane, Shape, Viewport, ViewportConfig,
};

const EPSILON: f64 = 1e-9;

fn shared_tesseract() -> Rc<RefCell<Shape>> {
    Rc::new(RefCell::new(Shape::tesseract(2.0)))
}

#[test]
fn test_unrotated_tesseract_is_symmetric_about_centre() {
    let vp = Viewport::new(shared_tesseract(), 400, 400, ViewportConfig::default()).unwrap();
    let frame = vp.render();
    assert_eq!(frame.segment_count(), 32);

    // Every screen point has a mirror image through the centre pixel
    let mut xs: Vec<f64> = frame.segments.iter().flat_map(|s| [s.start[0], s.end[0]]).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let min = xs[0];
    let max = xs[xs.len() - 1];
    assert!(min < 200.5 && max > 200.5);
    assert!(((200.5 - min) - (max - 200.5)).abs() <= 1.0);
}

#[test]
fn test_pointer_drag_rotates_shape() {
    let shape = shared_tesseract();
    let mut vp = Viewport::new(shape.clone(), 200, 200, ViewportConfig::default()).unwrap();
    let mut tracker = PointerTracker::new();

    // First sample anchors, second moves right by 25 px
    for (x, y) in [(100.0, 100.0), (125.0, 100.0)] {
        let (dx, dy) = tracker.sample(x, y, vp.width(), vp.height());
        vp.handle(&InputEvent::Drag { dx, dy, modifiers: Modifiers::empty() });
    }

    let rotations = shape.borrow().rotations();
    assert!((rotations.angle(RotationPlane::XZ) - PI / 4.0).abs() < EPSILON);
    assert_eq!(rotations.angle(RotationPlane::YZ), 0.0);
}

#[test]
fn test_drag_and_reverse_restores_frame() {
    let mut vp = Viewport::new(shared_tesseract(), 300, 200, ViewportConfig::default()).unwrap();
    let before = vp.render();

    vp.drag(37.0, -12.0, Modifiers::SHIFT);
    let moved = vp.drag(-37.0, 12.0, Modifiers::SHIFT);

    for (a, b) in before.segments.iter().zip(&moved.segments) {
        // Pixel snapping may flip by one pixel at exact .5 boundaries
        assert!((a.start[0] - b.start[0]).abs() <= 1.0);
        assert!((a.start[1] - b.start[1]).abs() <= 1.0);
    }
}

#[test]
fn test_observers_fire_per_plane_in_order() {
    let shape = shared_tesseract();
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = log.clone();
    shape.borrow_mut().on_rotate(move |_| first.borrow_mut().push(1));
    let second = log.clone();
    shape.borrow_mut().on_rotate(move |_| second.borrow_mut().push(2));

    let mut vp = Viewport::new(shape, 200, 200, ViewportConfig::default()).unwrap();
    vp.drag(5.0, 5.0, Modifiers::SHIFT | Modifiers::ALT);

    assert_eq!(*log.borrow(), vec![1, 2, 1, 2]);
}

#[test]
fn test_zoom_out_shrinks_projection() {
    let mut vp = Viewport::new(shared_tesseract(), 200, 200, ViewportConfig::default()).unwrap();
    let span = |frame: &hypersolid_render::Frame| {
        frame
            .segments
            .iter()
            .flat_map(|s| [s.start[0], s.end[0]])
            .fold(0.0_f64, |acc, x| acc.max((x - 100.5).abs()))
    };

    let near = span(&vp.render());
    let far = span(&vp.wheel(40.0));
    assert!(far < near, "far {} should be smaller than near {}", far, near);
    assert!((vp.scale() - 6.0).abs() < EPSILON);
}

#[test]
fn test_resize_then_render_svg() {
    let mut vp = Viewport::new(shared_tesseract(), 200, 200, ViewportConfig::default()).unwrap();
    let frame = vp.handle(&InputEvent::Resize { width: 640, height: 480 });
    let svg = frame.to_svg();

    assert!(svg.contains(r#"width="640" height="480""#));
    assert_eq!(svg.matches("<line ").count(), 32);
    assert_eq!(svg.matches("<linearGradient ").count(), 32);
}

#[test]
fn test_gpu_vertices_cover_every_edge() {
    let mut vp = Viewport::new(shared_tesseract(), 200, 200, ViewportConfig::default()).unwrap();
    let frame = vp.drag(20.0, 20.0, Modifiers::empty());
    let vertices = frame.line_vertices();
    assert_eq!(vertices.len(), 64);
    for v in &vertices {
        assert!(v.position[0].abs() <= 1.0 && v.position[1].abs() <= 1.0);
        assert_eq!(v.color[3], 1.0);
    }
}
