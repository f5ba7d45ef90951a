mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod event_detail;
pub use event_detail::EventDetail;

mod event_create;
pub use event_create::EventCreate;

mod event_edit;
pub use event_edit::EventEdit;

mod profile;
pub use profile::Profile;

mod notifications;
pub use notifications::Notifications;
