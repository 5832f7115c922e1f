//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod activity;
pub mod camper;
pub mod signup;

pub use validation::ValidationError;
pub use activity::NewActivity;
pub use camper::{CamperAge, CamperName, CamperPatch, NewCamper};
pub use signup::{NewSignup, SignupTime};
