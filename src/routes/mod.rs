pub mod announcements;

pub use announcements::configure_announcement_routes;
