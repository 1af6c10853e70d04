//! Screens shared by every launcher. Navigation leaves a screen through
//! `EventHandler` props so this crate never needs a platform `Route` enum.

mod form;

mod login;
pub use login::LoginScreen;

mod register;
pub use register::RegisterScreen;

mod recover;
pub use recover::RecoverScreen;

mod graphs;
pub use graphs::GraphScreen;

mod iot;
pub use iot::IotScreen;

mod signed_out;
pub use signed_out::SignedOutNotice;
