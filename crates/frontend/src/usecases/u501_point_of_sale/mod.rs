pub mod cart;
mod view;

pub use view::PointOfSalePage;
