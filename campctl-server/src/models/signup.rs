//! Signup validation

use super::validation::in_range;
use super::ValidationError;

/// Latest hour a signup may start at
pub const MAX_HOUR: i64 = 23;

/// Validated signup hour (0..=23)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupTime(i64);

impl SignupTime {
    /// # Example
    /// ```
    /// use campctl_server::models::SignupTime;
    ///
    /// assert!(SignupTime::new(0).is_ok());
    /// assert!(SignupTime::new(24).is_err());
    /// ```
    pub fn new(hour: i64) -> Result<Self, ValidationError> {
        in_range("time", hour, 0, MAX_HOUR).map(Self)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// A signup ready to be inserted.
///
/// The referenced ids are only checked for presence here; whether the
/// camper and activity exist is left to the store's foreign keys.
#[derive(Debug, Clone)]
pub struct NewSignup {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: SignupTime,
}

impl NewSignup {
    pub fn new(
        camper_id: Option<i64>,
        activity_id: Option<i64>,
        time: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let camper_id = camper_id.ok_or(ValidationError::Missing { field: "camper_id" })?;
        let activity_id = activity_id.ok_or(ValidationError::Missing { field: "activity_id" })?;
        let time = time.ok_or(ValidationError::Missing { field: "time" })?;

        Ok(Self {
            camper_id,
            activity_id,
            time: SignupTime::new(time)?,
        })
    }
}
