//! Rotatable 4D shape
//!
//! A [`Shape`] owns a fixed reference vertex set, its edge topology and the
//! cumulative [`RotationState`]. Every rotation rebuilds the rotated vertex
//! cache from the reference vertices and reapplies all six cumulative plane
//! rotations, so floating-point error never compounds between frames.

use std::fmt;

use hypersolid_math::{Edge, Polytope4D, RotationPlane, Tesseract4D, Vec4};
use crate::{RotationState, ShapeError};

/// Events a [`Shape`] can notify observers about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeEvent {
    /// The cumulative rotation changed and the rotated vertices were rebuilt
    RotationChanged,
}

/// Handle returned when registering an observer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(usize);

/// Observer callback
///
/// Observers receive a shared borrow of the shape, so they can read its
/// vertices and rotations but can never start a nested rotation.
pub type ShapeObserver = Box<dyn FnMut(&Shape)>;

struct Registration {
    id: ObserverId,
    event: ShapeEvent,
    callback: ShapeObserver,
}

/// A 4D polytope with cumulative plane rotations
pub struct Shape {
    /// Canonical geometry, never mutated after construction
    reference: Vec<Vec4>,
    /// Reference vertices with the current rotation applied
    rotated: Vec<Vec4>,
    edges: Vec<Edge>,
    rotations: RotationState,
    observers: Vec<Registration>,
    next_observer: usize,
}

impl Shape {
    /// Create a shape from reference vertices and edges
    ///
    /// Fails if any edge refers to a vertex index outside `vertices`.
    pub fn new(vertices: Vec<Vec4>, edges: Vec<Edge>) -> Result<Self, ShapeError> {
        let vertex_count = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            if let Some(&index) = edge.indices.iter().find(|&&idx| idx >= vertex_count) {
                return Err(ShapeError::EdgeOutOfRange { edge: i, index, vertex_count });
            }
        }
        Ok(Self::from_validated(vertices, edges))
    }

    /// Create a shape from any polytope definition
    pub fn from_polytope<P: Polytope4D + ?Sized>(polytope: &P) -> Result<Self, ShapeError> {
        Self::new(polytope.vertices().to_vec(), polytope.edges().to_vec())
    }

    /// Create a tesseract of the given side length
    ///
    /// [`Tesseract4D`] only emits edges between its own 16 vertices, so there
    /// is nothing to validate.
    pub fn tesseract(size: f64) -> Self {
        let (vertices, edges) = Tesseract4D::new(size).into_parts();
        Self::from_validated(vertices, edges)
    }

    /// Shared constructor; every edge index must already be in range
    fn from_validated(vertices: Vec<Vec4>, edges: Vec<Edge>) -> Self {
        log::debug!("Created shape with {} vertices and {} edges", vertices.len(), edges.len());

        Self {
            rotated: vertices.clone(),
            reference: vertices,
            edges,
            rotations: RotationState::new(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Rotate by `theta` radians in `plane`
    ///
    /// The angle is added to the plane's cumulative angle, the rotated
    /// vertices are rebuilt from the reference set and every
    /// [`ShapeEvent::RotationChanged`] observer is notified in registration
    /// order.
    ///
    /// A non-finite `theta` is ignored and no observer is notified.
    pub fn rotate(&mut self, plane: RotationPlane, theta: f64) {
        if !theta.is_finite() {
            log::warn!("Ignoring non-finite rotation {} in {}", theta, plane);
            return;
        }
        let angle = self.rotations.add(plane, theta);
        log::trace!("rotate {} by {:.6} -> {:.6}", plane, theta, angle);

        self.rotations.apply_all(&self.reference, &mut self.rotated);
        self.notify(ShapeEvent::RotationChanged);
    }

    /// Rotate about a plane given by name (`"xy"`, `"zw"`, ...)
    pub fn rotate_named(&mut self, plane: &str, theta: f64) -> Result<(), ShapeError> {
        let plane: RotationPlane = plane.parse()?;
        self.rotate(plane, theta);
        Ok(())
    }

    /// Return to the canonical pose
    pub fn reset_rotation(&mut self) {
        self.rotations.reset();
        self.rotated.clone_from(&self.reference);
        self.notify(ShapeEvent::RotationChanged);
    }

    /// Current rotated vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.rotated
    }

    /// The unrotated reference vertices
    #[inline]
    pub fn reference_vertices(&self) -> &[Vec4] {
        &self.reference
    }

    /// The fixed edge topology
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Snapshot of the cumulative rotation angles
    #[inline]
    pub fn rotations(&self) -> RotationState {
        self.rotations
    }

    /// Register an observer for `event`
    pub fn on<F>(&mut self, event: ShapeEvent, callback: F) -> ObserverId
    where
        F: FnMut(&Shape) + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push(Registration {
            id,
            event,
            callback: Box::new(callback),
        });
        id
    }

    /// Register an observer for [`ShapeEvent::RotationChanged`]
    pub fn on_rotate<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&Shape) + 'static,
    {
        self.on(ShapeEvent::RotationChanged, callback)
    }

    /// Remove an observer
    ///
    /// Returns false if `id` was already removed. Takes effect from the next
    /// notification.
    pub fn off(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|r| r.id != id);
        self.observers.len() != before
    }

    /// Number of registered observers across all events
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, event: ShapeEvent) {
        let mut observers = std::mem::take(&mut self.observers);
        for registration in observers.iter_mut().filter(|r| r.event == event) {
            (registration.callback)(&*self);
        }
        self.observers = observers;
    }
}

impl Polytope4D for Shape {
    fn vertices(&self) -> &[Vec4] {
        &self.rotated
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("vertices", &self.rotated.len())
            .field("edges", &self.edges.len())
            .field("rotations", &self.rotations)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::f64::consts::PI;
    use std::rc::Rc;

    const EPSILON: f64 = 1e-9;

    fn two_vertex_shape() -> Shape {
        Shape::new(
            vec![Vec4::new(1.0, 1.0, 1.0, 1.0), Vec4::new(-1.0, 1.0, 1.0, 1.0)],
            vec![Edge::new(0, 1)],
        )
        .unwrap()
    }

    fn assert_vertices_eq(a: &[Vec4], b: &[Vec4]) {
        assert_eq!(a.len(), b.len());
        for (i, (va, vb)) in a.iter().zip(b).enumerate() {
            assert!(va.approx_eq(*vb, EPSILON), "vertex {}: {:?} != {:?}", i, va, vb);
        }
    }

    #[test]
    fn test_new_starts_unrotated() {
        let shape = two_vertex_shape();
        assert_eq!(shape.vertices(), shape.reference_vertices());
        assert!(shape.rotations().is_identity());
    }

    #[test]
    fn test_new_rejects_out_of_range_edge() {
        let result = Shape::new(vec![Vec4::ZERO, Vec4::X], vec![Edge::new(0, 1), Edge::new(1, 2)]);
        assert_eq!(
            result.unwrap_err(),
            ShapeError::EdgeOutOfRange { edge: 1, index: 2, vertex_count: 2 }
        );
    }

    #[test]
    fn test_xy_quarter_turn() {
        let mut shape = two_vertex_shape();
        shape.rotate(RotationPlane::XY, PI / 2.0);
        // x' = y, y' = -x
        assert!(shape.vertices()[0].approx_eq(Vec4::new(1.0, -1.0, 1.0, 1.0), EPSILON));
        assert!(shape.vertices()[1].approx_eq(Vec4::new(1.0, 1.0, 1.0, 1.0), EPSILON));
    }

    #[test]
    fn test_rotate_named() {
        let mut shape = two_vertex_shape();
        shape.rotate_named("xw", 0.5).unwrap();
        assert!((shape.rotations().angle(RotationPlane::XW) - 0.5).abs() < EPSILON);

        let err = shape.rotate_named("xq", 0.5).unwrap_err();
        assert!(matches!(err, ShapeError::UnknownPlane(_)));
        // A rejected plane leaves state untouched
        assert!((shape.rotations().angle(RotationPlane::XW) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_rebuilds_from_reference() {
        let mut shape = Shape::tesseract(2.0);
        for _ in 0..1000 {
            shape.rotate(RotationPlane::XZ, 0.001);
        }
        let mut once = Shape::tesseract(2.0);
        once.rotate(RotationPlane::XZ, 1.0);
        assert_vertices_eq(shape.vertices(), once.vertices());
    }

    #[test]
    fn test_reset_rotation() {
        let mut shape = Shape::tesseract(2.0);
        shape.rotate(RotationPlane::YW, 1.0);
        shape.rotate(RotationPlane::XY, 2.0);
        shape.reset_rotation();
        assert!(shape.rotations().is_identity());
        assert_eq!(shape.vertices(), shape.reference_vertices());
    }

    #[test]
    fn test_observers_called_in_registration_order() {
        let mut shape = two_vertex_shape();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let log_a = calls.clone();
        shape.on_rotate(move |_| log_a.borrow_mut().push("a"));
        let log_b = calls.clone();
        shape.on(ShapeEvent::RotationChanged, move |_| log_b.borrow_mut().push("b"));

        shape.rotate(RotationPlane::ZW, 0.1);
        assert_eq!(*calls.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_observer_sees_updated_state() {
        let mut shape = two_vertex_shape();
        let seen = Rc::new(RefCell::new(None));

        let sink = seen.clone();
        shape.on_rotate(move |s| {
            *sink.borrow_mut() = Some((s.rotations().angle(RotationPlane::XY), s.vertices()[0]));
        });

        shape.rotate(RotationPlane::XY, PI / 2.0);
        let (angle, v0) = seen.borrow().unwrap();
        assert!((angle - PI / 2.0).abs() < EPSILON);
        assert!(v0.approx_eq(Vec4::new(1.0, -1.0, 1.0, 1.0), EPSILON));
    }

    #[test]
    fn test_observer_ids_are_distinct() {
        let mut shape = two_vertex_shape();
        let a = shape.on_rotate(|_| {});
        let b = shape.on_rotate(|_| {});
        assert_ne!(a, b);
        assert_eq!(shape.observer_count(), 2);
    }

    #[test]
    fn test_observers_survive_notification() {
        let mut shape = two_vertex_shape();
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        shape.on_rotate(move |_| *counter.borrow_mut() += 1);

        shape.rotate(RotationPlane::XY, 0.1);
        shape.rotate(RotationPlane::XY, 0.1);
        assert_eq!(*count.borrow(), 2);
        assert_eq!(shape.observer_count(), 1);
    }

    #[test]
    fn test_off_removes_only_that_observer() {
        let mut shape = two_vertex_shape();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let log_a = calls.clone();
        let a = shape.on_rotate(move |_| log_a.borrow_mut().push("a"));
        let log_b = calls.clone();
        shape.on_rotate(move |_| log_b.borrow_mut().push("b"));

        assert!(shape.off(a));
        assert!(!shape.off(a));
        shape.rotate(RotationPlane::XY, 0.1);
        assert_eq!(*calls.borrow(), vec!["b"]);

        // Ids are never reused after removal
        let c = shape.on_rotate(|_| {});
        assert_ne!(a, c);
        assert_eq!(shape.observer_count(), 2);
    }

    #[test]
    fn test_non_finite_rotation_ignored() {
        let mut shape = Shape::tesseract(2.0);
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        shape.on_rotate(move |_| *counter.borrow_mut() += 1);

        shape.rotate(RotationPlane::XZ, 0.3);
        shape.rotate(RotationPlane::XZ, f64::INFINITY);
        shape.rotate(RotationPlane::XZ, f64::NAN);
        shape.rotate(RotationPlane::XZ, -0.3);

        let angle = shape.rotations().angle(RotationPlane::XZ);
        assert!(angle.is_finite());
        assert!(angle < EPSILON || std::f64::consts::TAU - angle < EPSILON, "angle = {}", angle);
        assert_vertices_eq(shape.vertices(), shape.reference_vertices());
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_tesseract_is_valid_shape() {
        let direct = Shape::tesseract(2.0);
        let checked = Shape::from_polytope(&Tesseract4D::new(2.0)).unwrap();
        assert_eq!(direct.vertices(), checked.vertices());
        assert_eq!(direct.edges(), checked.edges());
    }

    #[test]
    fn test_debug_omits_callbacks() {
        let mut shape = two_vertex_shape();
        shape.on_rotate(|_| {});
        let debug = format!("{:?}", shape);
        assert!(debug.contains("observers: 1"));
    }
}
