mod field;
mod geometry;
mod interface;
mod operating_point;

pub use field::Field;
pub use geometry::Geometry;
pub use interface::InterfaceResistances;
pub use operating_point::OperatingPoint;
