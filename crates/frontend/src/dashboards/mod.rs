pub mod d400_dashboard;

pub use d400_dashboard::ui::DashboardPage;
