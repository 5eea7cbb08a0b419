/// Overlap detection for Rockfall
///
/// Everything that can touch something else exposes an axis-aligned bounding
/// box through the `Collidable` trait. Overlap is plain AABB intersection:
/// there is no push-apart response, the scene decides what a hit means.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by physics bodies and every entity that owns one
/// - `aabb_intersect`: the core rectangle test
/// - collection helpers: one-vs-many queries used by the scene's overlap handlers
use sdl2::rect::Rect;

/// Trait for anything with a hitbox.
///
/// # Example
///
/// ```rust
/// impl Collidable for Rock {
///     fn get_bounds(&self) -> Rect {
///         self.body.get_bounds()
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box in world pixels.
    fn get_bounds(&self) -> Rect;

    /// Whether this object takes part in overlap checks right now.
    ///
    /// Destroyed objects that have not been swept from their collection yet
    /// return false.
    fn is_collidable(&self) -> bool {
        true
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Rectangles that only share an edge do not intersect.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the indices of every live entity in `entities` that overlaps `entity`.
///
/// # Example
///
/// ```rust
/// let hits = check_collisions_with_collection(&jet, &rocks);
/// if !hits.is_empty() {
///     // jet touched at least one rock
/// }
/// ```
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    if !entity.is_collidable() {
        return Vec::new();
    }

    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| other.is_collidable())
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

/// Returns the index of the first live entity in `entities` that overlaps `entity`.
///
/// Used when a hit consumes the probing object (a bullet only ever hits one rock).
pub fn first_collision_in_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Option<usize> {
    if !entity.is_collidable() {
        return None;
    }

    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .position(|other| other.is_collidable() && aabb_intersect(&entity_bounds, &other.get_bounds()))
}
