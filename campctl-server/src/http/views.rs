//! Response views
//!
//! Each endpoint picks the view that matches how far it follows
//! relationships. No view nests a path back to itself:
//! - `CamperDetailView`: camper → signups → activity
//! - `SignupCreatedView`: signup → activity and signup → camper

use serde::Serialize;

use crate::db::repos::{Activity, Camper, Signup, SignupWithActivity};

/// Activity without its signups
#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

impl From<Activity> for ActivityView {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            name: a.name,
            difficulty: a.difficulty,
        }
    }
}

/// Camper without signups
#[derive(Debug, Serialize)]
pub struct CamperView {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<Camper> for CamperView {
    fn from(c: Camper) -> Self {
        Self {
            id: c.id,
            name: c.name,
            age: c.age,
        }
    }
}

/// Signup with its activity, without its camper
#[derive(Debug, Serialize)]
pub struct SignupView {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity: ActivityView,
}

impl From<SignupWithActivity> for SignupView {
    fn from(s: SignupWithActivity) -> Self {
        let Signup {
            id,
            time,
            camper_id,
            activity_id,
        } = s.signup;

        Self {
            id,
            time,
            camper_id,
            activity_id,
            activity: ActivityView::from(s.activity),
        }
    }
}

/// Camper with one hop of signups
#[derive(Debug, Serialize)]
pub struct CamperDetailView {
    #[serde(flatten)]
    pub camper: CamperView,
    pub signups: Vec<SignupView>,
}

impl CamperDetailView {
    pub fn new(camper: Camper, signups: Vec<SignupWithActivity>) -> Self {
        Self {
            camper: CamperView::from(camper),
            signups: signups.into_iter().map(SignupView::from).collect(),
        }
    }
}

/// Freshly created signup with its camper
#[derive(Debug, Serialize)]
pub struct SignupCreatedView {
    #[serde(flatten)]
    pub signup: SignupView,
    pub camper: CamperView,
}

impl SignupCreatedView {
    pub fn new(signup: SignupWithActivity, camper: Camper) -> Self {
        Self {
            signup: SignupView::from(signup),
            camper: CamperView::from(camper),
        }
    }
}
