//! geopath - Spherical geo math and GPS track simplification

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod io;

pub use domain::{Path, Point};
pub use error::{GeoError, PathError, Result};
pub use geometry::{
    BoundingBox, Coordinate, LatLng, Simplified, bearing, bounding_box, is_point_in_box,
    outer_bounding_box, p2l, p2p, simplify_path,
};
