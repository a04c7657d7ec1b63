//! Domain services containing validation rules

use super::{DomainError, OwnerProfile};

/// Longest telephone number the clinic records
pub const MAX_TELEPHONE_DIGITS: usize = 12;

/// Service for validating the details customers submit
pub struct ClinicValidator;

impl ClinicValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check every field of an owner profile, reporting the first violation
    pub fn validate_owner(&self, profile: &OwnerProfile) -> Result<(), DomainError> {
        self.require("firstName", &profile.first_name)?;
        self.require("lastName", &profile.last_name)?;
        self.require("address", &profile.address)?;
        self.require("city", &profile.city)?;
        self.validate_telephone(&profile.telephone)
    }

    /// Telephone numbers are 1 to 12 digits, nothing else
    pub fn validate_telephone(&self, telephone: &str) -> Result<(), DomainError> {
        let telephone = telephone.trim();
        self.require("telephone", telephone)?;

        if !telephone.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::invalid_input(
                "telephone",
                "Telephone must contain digits only",
            ));
        }

        if telephone.len() > MAX_TELEPHONE_DIGITS {
            return Err(DomainError::invalid_input(
                "telephone",
                format!("Telephone cannot exceed {} digits", MAX_TELEPHONE_DIGITS),
            ));
        }

        Ok(())
    }

    pub fn validate_pet_name(&self, name: &str) -> Result<(), DomainError> {
        self.require("name", name)
    }

    fn require(&self, field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::invalid_input(field, "must not be blank"));
        }
        Ok(())
    }
}

impl Default for ClinicValidator {
    fn default() -> Self {
        Self::new()
    }
}
