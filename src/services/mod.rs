pub mod announcements;
pub mod credentials;

pub use announcements::AnnouncementService;
pub use credentials::CredentialGate;
