pub mod registration;

pub use registration::{NewRegistration, Registration, RegistrationView};
