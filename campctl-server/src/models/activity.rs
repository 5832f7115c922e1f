//! Activity input
//!
//! Activities carry no validation: both fields are optional and any value
//! is accepted.

/// An activity ready to be inserted.
#[derive(Debug, Clone, Default)]
pub struct NewActivity {
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

impl NewActivity {
    pub fn new(name: Option<String>, difficulty: Option<i64>) -> Self {
        Self { name, difficulty }
    }
}
