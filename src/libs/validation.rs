use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::libs::core::models::Account;

// Registration requires a South African cell number; message recipients only
// need the broader international shape. The two rules are distinct.
static ZA_CELL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+27\d{9}$").expect("cell number pattern must compile"));

static INTERNATIONAL_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{10,15}$").expect("recipient pattern must compile"));

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Username must contain an underscore and be at most 5 characters")]
    UsernameFormat,
    #[error("Password must be at least 8 characters with an uppercase letter, a number and a special character")]
    PasswordComplexity,
    #[error("Cell number must be in +27XXXXXXXXX format")]
    CellNumberFormat,
}

/// Usernames are short by rule: an underscore somewhere and no more than
/// five characters total.
pub fn valid_username(username: &str) -> bool {
    username.contains('_') && username.chars().count() <= 5
}

/// At least 8 characters with an uppercase letter, a digit and a character
/// that is neither. Single scan, bails out once all three classes are seen.
pub fn valid_password(password: &str) -> bool {
    if password.chars().count() < 8 {
        return false;
    }

    let mut has_capital = false;
    let mut has_number = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_uppercase() {
            has_capital = true;
        } else if c.is_ascii_digit() {
            has_number = true;
        } else if !c.is_alphanumeric() {
            has_special = true;
        }

        if has_capital && has_number && has_special {
            return true;
        }
    }

    has_capital && has_number && has_special
}

/// `+27` followed by exactly nine digits, the registration format.
pub fn valid_cell_number(number: &str) -> bool {
    ZA_CELL_NUMBER.is_match(number)
}

/// `+` followed by 10 to 15 digits, the message-recipient format.
pub fn valid_recipient_number(number: &str) -> bool {
    INTERNATIONAL_NUMBER.is_match(number)
}

/// Runs the registration checks in order username -> password -> cell number
/// and reports the first rule that fails. `Ok(())` means the candidate may
/// be registered.
pub fn check_registration(account: &Account) -> Result<(), CredentialError> {
    if !valid_username(&account.username) {
        return Err(CredentialError::UsernameFormat);
    }

    if !valid_password(&account.password) {
        return Err(CredentialError::PasswordComplexity);
    }

    if !valid_cell_number(&account.phone_number) {
        return Err(CredentialError::CellNumberFormat);
    }

    Ok(())
}
