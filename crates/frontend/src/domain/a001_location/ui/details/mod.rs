mod view;
pub mod view_model;

pub use view::LocationDetails;
