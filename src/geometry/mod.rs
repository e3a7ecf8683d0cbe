pub mod bbox;
pub mod bearing;
pub mod coordinate;
pub mod distance;
pub mod simplify;
pub mod units;

pub use bbox::{BoundingBox, bounding_box, is_point_in_box, outer_bounding_box};
pub use bearing::{bearing, bearing_degrees};
pub use coordinate::{Coordinate, LatLng};
pub use distance::{EARTH_RADIUS_KM, p2l, p2p};
pub use simplify::{Simplified, simplify_indices, simplify_path};
pub use units::{degrees_to_radians, radians_to_degrees, to_compass_degrees, to_signed_degrees};
