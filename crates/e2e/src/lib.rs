//! Acceptance scenarios for the MediPort prescription portal
//!
//! The scenarios live under `tests/`, grouped by role (login, patient,
//! specialist, pharmacist, admin). This library holds the one shared
//! thing between them: the [`portal`] surface model — routes, accounts
//! and locators — so scenario files carry only flow and assertions.

pub mod portal;
