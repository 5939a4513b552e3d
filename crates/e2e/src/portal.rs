//! Surface model of the portal under test
//!
//! Every route, account and locator the scenarios touch is defined here
//! once. Locators are functions because they are owned values; treat them
//! as the static contract with the application's markup.

use mediport_harness::Locator;

/// Portal routes.
pub mod routes {
    pub const PRESCRIPTIONS: &str = "/Prescriptions";
    pub const NEW_PRESCRIPTION: &str = "/Prescriptions/new";
    pub const MY_PRESCRIPTIONS: &str = "/Prescriptions/MyPrescriptions";
    pub const USERS: &str = "/Users";
    pub const LOG_FILES: &str = "/LogFiles";
    pub const PATIENT_INFO: &str = "/PatientInfo";

    /// A dossier the signed-in patient does not own.
    pub const OTHER_PATIENT_DOSSIER: &str = "/Dossiers/PAT-456";

    /// Query marker the portal puts in the URL after a rejected login.
    pub const LOGIN_ERROR_MARKER: &str = "loginError";
}

/// Seeded test accounts.
pub mod accounts {
    pub struct Account {
        pub username: &'static str,
        pub password: &'static str,
        pub role: &'static str,
    }

    pub const ADMIN: Account = Account {
        username: "admin",
        password: "admin1",
        role: "Admin",
    };

    pub const SPECIALIST: Account = Account {
        username: "specialist",
        password: "specialist1",
        role: "Specialist",
    };

    /// Patient with seeded medication (Panadol).
    pub const PATIENT: Account = Account {
        username: "patient",
        password: "Patient1",
        role: "Patient",
    };

    /// Patient without any prescriptions.
    pub const PATIENT_WITHOUT_MEDICATION: Account = Account {
        username: "patient2",
        password: "Patient1",
        role: "Patient",
    };

    pub const PHARMACIST: Account = Account {
        username: "apothecary",
        password: "apothecary1",
        role: "Pharmacist",
    };

    pub const HEALTH_INSURER: Account = Account {
        username: "healthinsurer",
        password: "healthinsurer1",
        role: "Health insurer",
    };

    /// Row id of the patient the admin scenarios reassign.
    pub const TARGET_USER_ID: &str = "7";
}

/// Login page elements.
pub mod login {
    use super::*;

    pub fn username_field() -> Locator {
        Locator::name("Username")
    }

    pub fn password_field() -> Locator {
        Locator::name("Password")
    }

    pub fn login_button() -> Locator {
        Locator::name("btn-login")
    }

    pub fn error_banner() -> Locator {
        Locator::id("login-error")
    }

    /// Signed-in username shown in the navbar.
    pub fn navbar_username() -> Locator {
        Locator::name("user_name")
    }
}

/// Role-gated navigation links.
pub mod links {
    use super::*;

    pub fn user_management() -> Locator {
        Locator::css("a[href='/Users']")
    }

    pub fn new_prescription() -> Locator {
        Locator::css("a[href='/Prescriptions/new']")
    }

    pub fn audit_trail() -> Locator {
        Locator::css("a[href='/LogFiles']")
    }
}

/// Patient medication schedule.
pub mod schedule {
    use super::*;

    pub fn table() -> Locator {
        Locator::css(".table-striped")
    }

    pub fn table_body() -> Locator {
        Locator::css(".table-striped tbody")
    }

    pub fn empty_state() -> Locator {
        Locator::css(".alert-info")
    }

    pub fn row(medicine: &str) -> Locator {
        Locator::xpath(format!("//tbody/tr[contains(., '{medicine}')]"))
    }

    pub fn mark_taken_button(medicine: &str) -> Locator {
        Locator::xpath(format!(
            "//tbody/tr[contains(., '{medicine}')]//button[contains(@class, 'mark-taken-button')]"
        ))
    }

    pub fn mark_skipped_button(medicine: &str) -> Locator {
        Locator::xpath(format!(
            "//tbody/tr[contains(., '{medicine}')]//button[contains(@class, 'mark-skipped-button')]"
        ))
    }

    pub fn taken_status(medicine: &str) -> Locator {
        Locator::xpath(format!(
            "//tbody/tr[contains(., '{medicine}')]//*[contains(@class, 'status-taken')]"
        ))
    }

    pub fn skipped_status(medicine: &str) -> Locator {
        Locator::xpath(format!(
            "//tbody/tr[contains(., '{medicine}')]//*[contains(@class, 'status-skipped')]"
        ))
    }

    pub fn confirmation_message() -> Locator {
        Locator::id("confirmation-message")
    }

    pub fn skip_alert() -> Locator {
        Locator::id("skip-alert")
    }
}

/// New-prescription form.
pub mod prescription_form {
    use super::*;

    pub fn patient_select() -> Locator {
        Locator::id("patientSelect")
    }

    pub fn start_date() -> Locator {
        Locator::id("Prescription_PrescriptionStartDate")
    }

    pub fn end_date() -> Locator {
        Locator::id("Prescription_PrescriptionEndDate")
    }

    pub fn description() -> Locator {
        Locator::id("descBox")
    }

    /// Loads the medicine section of the form.
    pub fn add_medicine_section_button() -> Locator {
        Locator::css("button[formaction$='handler=AddMedicine']")
    }

    pub fn medicine_select() -> Locator {
        Locator::id("SelectedMedicineId")
    }

    pub fn quantity() -> Locator {
        Locator::id("Quantity")
    }

    pub fn instructions() -> Locator {
        Locator::id("Instructions")
    }

    /// The small 'Add' button that lists the medicine on the prescription.
    pub fn add_medicine_confirm_button() -> Locator {
        Locator::css("button[name='action'][value='add']")
    }

    pub fn create_button() -> Locator {
        Locator::css("button.btn.btn-primary[type='submit']")
    }

    pub fn quantity_error() -> Locator {
        Locator::css("span[data-valmsg-for='Quantity']")
    }

    pub fn end_date_error() -> Locator {
        Locator::css("span[data-valmsg-for='Prescription.PrescriptionEndDate']")
    }

    pub fn dosage_warning() -> Locator {
        Locator::css("div.alert.alert-warning, span.text-warning, span[data-valmsg-for*='Quantity']")
    }

    pub fn listed_medicine(medicine: &str) -> Locator {
        Locator::xpath(format!("//table//td[contains(text(), '{medicine}')]"))
    }
}

/// User-management page.
pub mod users {
    use super::*;

    pub fn table() -> Locator {
        Locator::css(".table")
    }

    pub fn role_select(user_id: &str) -> Locator {
        Locator::xpath(format!(
            "//input[@name='UserId' and @value='{user_id}']/following-sibling::select[@name='NewRole']"
        ))
    }

    pub fn change_button(user_id: &str) -> Locator {
        Locator::xpath(format!(
            "//input[@name='UserId' and @value='{user_id}']/following-sibling::button[contains(text(), 'Change')]"
        ))
    }

    pub fn selected_role_option(user_id: &str, role_value: &str) -> Locator {
        Locator::xpath(format!(
            "//input[@name='UserId' and @value='{user_id}']/following-sibling::select/option[@value='{role_value}' and @selected]"
        ))
    }
}

/// Audit-trail log viewer.
pub mod logs {
    use super::*;

    pub fn file_dropdown() -> Locator {
        Locator::id("logFileDropdown")
    }

    pub fn file_buttons() -> Locator {
        Locator::xpath("//div[@id='dropdownList']/button")
    }

    pub fn first_file_button() -> Locator {
        Locator::xpath("//div[@id='dropdownList']/button[1]")
    }

    pub fn content() -> Locator {
        Locator::id("logContent")
    }

    pub fn download_txt_button() -> Locator {
        Locator::id("downloadBtn")
    }

    pub fn error_alert() -> Locator {
        Locator::css("div.alert-danger")
    }
}

/// Pharmacist patient-lookup page.
pub mod patient_info {
    use super::*;

    pub fn search_field() -> Locator {
        Locator::id("searchTerm")
    }

    pub fn first_autocomplete_item() -> Locator {
        Locator::css("ul#autocomplete-list > li:first-child")
    }

    pub fn select_button() -> Locator {
        Locator::id("search-btn")
    }

    pub fn confirm_button() -> Locator {
        Locator::css("button[name='action'][value='confirm']")
    }

    /// Row holding both the medicine name and the dispensed quantity.
    pub fn prescription_row(medicine: &str, quantity: &str) -> Locator {
        Locator::xpath(format!(
            "//table//tr[td[contains(text(), '{medicine}')] and td[contains(text(), '{quantity}')]]"
        ))
    }
}
