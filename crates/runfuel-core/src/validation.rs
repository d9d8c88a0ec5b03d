// ABOUTME: Client-side form validation run before any request is sent
// ABOUTME: Registration, login, password reset, profile, manual entry, race, and plan checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Form Validation
//!
//! Every check here runs locally. A form that fails validation never reaches
//! the network, and the returned [`ValidationError`] message is meant to be
//! shown to the user as-is.

use crate::constants::limits;
use crate::errors::ValidationError;
use crate::models::{
    GeneratePlanRequest, LoginRequest, ManualFoodEntry, ProfileForm, RaceCreate, RegisterRequest,
    TrainingPlanCreate,
};

/// Types that can be checked before submission
pub trait Validate {
    /// Check the value, returning the first problem found
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first failing rule
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Sign-up form including the password confirmation field
#[derive(Clone)]
pub struct RegisterForm {
    /// Account email
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
}

impl RegisterForm {
    /// Build the request body once the form is valid
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn into_request(self) -> Result<RegisterRequest, ValidationError> {
        self.validate()?;
        Ok(RegisterRequest {
            email: self.email.trim().to_owned(),
            password: self.password,
        })
    }
}

impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        check_password_length(&self.password)?;
        require("Email", &self.email)
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require("Email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField { field: "Password" });
        }
        Ok(())
    }
}

/// Password reset form reached from the emailed link
#[derive(Clone)]
pub struct ResetPasswordForm {
    /// Token carried by the reset link
    pub token: String,
    /// New password
    pub new_password: String,
    /// New password typed a second time
    pub confirm_password: String,
}

impl Validate for ResetPasswordForm {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        check_password_length(&self.new_password)?;
        require("Reset token", &self.token)
    }
}

impl Validate for ProfileForm {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age) {
            return Err(ValidationError::OutOfRange {
                field: "Age",
                min: f64::from(limits::MIN_AGE),
                max: f64::from(limits::MAX_AGE),
            });
        }
        check_open_range(
            "Height",
            self.height_cm,
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM,
        )?;
        check_open_range(
            "Weight",
            self.weight_kg,
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG,
        )
    }
}

impl Validate for ManualFoodEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name("Food name", &self.food_name)?;
        check_non_negative("Calories", self.calories)?;
        for (field, value) in [
            ("Protein", self.protein_g),
            ("Carbs", self.carbs_g),
            ("Fat", self.fat_g),
            ("Fiber", self.fiber_g),
        ] {
            if let Some(value) = value {
                check_non_negative(field, value)?;
            }
        }
        Ok(())
    }
}

impl Validate for RaceCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name("Race name", &self.name)?;
        if let Some(distance) = self.distance_km {
            check_non_negative("Distance", distance)?;
        }
        Ok(())
    }
}

impl Validate for TrainingPlanCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        check_name("Plan name", &self.name)
    }
}

impl Validate for GeneratePlanRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(limits::MIN_PLAN_WEEKS..=limits::MAX_PLAN_WEEKS).contains(&self.weeks) {
            return Err(ValidationError::OutOfRange {
                field: "Weeks",
                min: f64::from(limits::MIN_PLAN_WEEKS),
                max: f64::from(limits::MAX_PLAN_WEEKS),
            });
        }
        if let Some(km) = self.current_weekly_km {
            check_non_negative("Weekly distance", km)?;
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn check_password_length(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < limits::MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: limits::MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;
    if value.chars().count() > limits::MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: limits::MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

// Bounds are exclusive on both ends
fn check_open_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value > min && value < max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, min, max })
    }
}
