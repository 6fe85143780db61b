use crate::api::{ApiError, Employee, EmployeePayload, FieldErrors};

pub const EMPLOYEE_ID_CHARSET_MESSAGE: &str =
    "Can only contain letters, numbers, hyphens, and underscores";
pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::EmployeeId,
        EmployeeField::FullName,
        EmployeeField::Email,
        EmployeeField::Department,
    ];

    /// Wire name, also the key server validation errors use.
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "employee_id",
            EmployeeField::FullName => "full_name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "EMPLOYEE ID",
            EmployeeField::FullName => "FULL NAME",
            EmployeeField::Email => "EMAIL",
            EmployeeField::Department => "DEPARTMENT",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "EMP-001",
            EmployeeField::FullName => "John Doe",
            EmployeeField::Email => "john@example.com",
            EmployeeField::Department => "Engineering",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            _ => "text",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            EmployeeField::EmployeeId => "Employee ID cannot be empty",
            EmployeeField::FullName => "Full name cannot be empty",
            EmployeeField::Email => "Email cannot be empty",
            EmployeeField::Department => "Department cannot be empty",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
        }
    }

    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::EmployeeId => &self.employee_id,
            EmployeeField::FullName => &self.full_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::EmployeeId => self.employee_id = value,
            EmployeeField::FullName => self.full_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
        }
    }

    pub fn normalized(&self) -> EmployeePayload {
        EmployeePayload {
            employee_id: self.employee_id.trim().to_uppercase(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            department: self.department.trim().to_string(),
        }
    }

    /// Normalizes and checks every field; any error blocks submission.
    pub fn validate(&self) -> Result<EmployeePayload, FieldErrors> {
        let payload = self.normalized();
        let mut errors = FieldErrors::default();

        for field in EmployeeField::ALL {
            let value = match field {
                EmployeeField::EmployeeId => &payload.employee_id,
                EmployeeField::FullName => &payload.full_name,
                EmployeeField::Email => &payload.email,
                EmployeeField::Department => &payload.department,
            };
            if value.is_empty() {
                errors.insert(field.key(), field.empty_message());
            }
        }
        if !payload.employee_id.is_empty() && !is_valid_employee_id(&payload.employee_id) {
            errors.insert(EmployeeField::EmployeeId.key(), EMPLOYEE_ID_CHARSET_MESSAGE);
        }
        if !payload.email.is_empty() && !is_valid_email(&payload.email) {
            errors.insert(EmployeeField::Email.key(), INVALID_EMAIL_MESSAGE);
        }

        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(errors)
        }
    }
}

pub fn is_valid_employee_id(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Server errors for keys the form has no slot for are surfaced as the
/// general message so they are never silently dropped.
pub fn fold_unknown_fields(mut errors: FieldErrors) -> FieldErrors {
    let unknown: Vec<String> = errors
        .fields
        .keys()
        .filter(|key| !EmployeeField::ALL.iter().any(|f| f.key() == key.as_str()))
        .cloned()
        .collect();
    for key in unknown {
        if let Some(message) = errors.fields.remove(&key) {
            if errors.general.is_none() {
                errors.general = Some(message);
            }
        }
    }
    errors
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmployeeFormMode {
    Create,
    Edit(String),
}

impl EmployeeFormMode {
    pub fn from_route_id(id: Option<String>) -> Self {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => EmployeeFormMode::Edit(id),
            None => EmployeeFormMode::Create,
        }
    }

    pub fn employee_id(&self) -> Option<&str> {
        match self {
            EmployeeFormMode::Create => None,
            EmployeeFormMode::Edit(id) => Some(id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmployeeFormMode::Create => "ADD EMPLOYEE",
            EmployeeFormMode::Edit(_) => "EDIT EMPLOYEE",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            EmployeeFormMode::Create => "[ CREATE EMPLOYEE ]",
            EmployeeFormMode::Edit(_) => "[ UPDATE EMPLOYEE ]",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            EmployeeFormMode::Create => "Failed to create employee",
            EmployeeFormMode::Edit(_) => "Failed to update employee",
        }
    }

    /// Where a successful submit lands.
    pub fn success_path(&self) -> String {
        match self {
            EmployeeFormMode::Create => "/employees".to_string(),
            EmployeeFormMode::Edit(id) => format!("/employees/{}", id),
        }
    }

    pub fn cancel_path(&self) -> String {
        self.success_path()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(String),
    Rejected(FieldErrors),
}

pub fn submission_outcome(
    mode: &EmployeeFormMode,
    result: &Result<Employee, ApiError>,
) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome::Navigate(mode.success_path()),
        Err(err) => SubmitOutcome::Rejected(fold_unknown_fields(FieldErrors::from_api_error(
            err,
            mode.failure_message(),
        ))),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteClick {
    Arm,
    Confirm,
}

/// The first click on a row's delete arms it; a second click on the same row deletes.
pub fn delete_click(armed: Option<&str>, clicked: &str) -> DeleteClick {
    if armed == Some(clicked) {
        DeleteClick::Confirm
    } else {
        DeleteClick::Arm
    }
}

pub fn delete_label(armed: bool, deleting: bool) -> &'static str {
    match (armed, deleting) {
        (true, true) => "[ DELETING... ]",
        (true, false) => "[ CONFIRM DELETE? ]",
        _ => "[ DELETE ]",
    }
}

pub fn present_days(employee: &Employee) -> u32 {
    employee.total_present_days.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, name: &str, email: &str, dept: &str) -> EmployeeFormState {
        EmployeeFormState {
            employee_id: id.into(),
            full_name: name.into(),
            email: email.into(),
            department: dept.into(),
        }
    }

    #[test]
    fn validate_trims_and_normalizes_case() {
        let payload = form("  emp-001 ", " Asha Rao ", " Asha@Example.COM ", " Engineering ")
            .validate()
            .unwrap();
        assert_eq!(payload.employee_id, "EMP-001");
        assert_eq!(payload.full_name, "Asha Rao");
        assert_eq!(payload.email, "asha@example.com");
        assert_eq!(payload.department, "Engineering");
    }

    #[test]
    fn validate_reports_every_empty_field() {
        let errors = form("  ", "", " ", "\t").validate().unwrap_err();
        assert_eq!(errors.get("employee_id"), Some("Employee ID cannot be empty"));
        assert_eq!(errors.get("full_name"), Some("Full name cannot be empty"));
        assert_eq!(errors.get("email"), Some("Email cannot be empty"));
        assert_eq!(errors.get("department"), Some("Department cannot be empty"));
        assert!(errors.general.is_none());
    }

    #[test]
    fn validate_rejects_bad_employee_id_characters() {
        let errors = form("EMP 001", "A", "a@b.co", "D").validate().unwrap_err();
        assert_eq!(errors.get("employee_id"), Some(EMPLOYEE_ID_CHARSET_MESSAGE));
        let errors = form("EMP#1", "A", "a@b.co", "D").validate().unwrap_err();
        assert_eq!(errors.get("employee_id"), Some(EMPLOYEE_ID_CHARSET_MESSAGE));
        assert!(form("emp_01-x", "A", "a@b.co", "D").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_email_shape() {
        let errors = form("E1", "A", "not-an-email", "D").validate().unwrap_err();
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(errors.fields.len(), 1);
    }

    #[test]
    fn email_shape_matches_simple_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn employee_id_charset() {
        assert!(is_valid_employee_id("EMP-001_A"));
        assert!(!is_valid_employee_id(""));
        assert!(!is_valid_employee_id("EMP.001"));
        assert!(!is_valid_employee_id("ÉMP"));
    }

    #[test]
    fn unknown_server_fields_become_the_general_message() {
        let mut errors = FieldErrors::default();
        errors.insert("email", "taken");
        errors.insert("phone", "not allowed");
        let folded = fold_unknown_fields(errors);
        assert_eq!(folded.get("email"), Some("taken"));
        assert_eq!(folded.get("phone"), None);
        assert_eq!(folded.general.as_deref(), Some("not allowed"));
    }

    #[test]
    fn form_mode_paths_and_labels() {
        assert_eq!(EmployeeFormMode::Create.success_path(), "/employees");
        let edit = EmployeeFormMode::from_route_id(Some("e1".into()));
        assert_eq!(edit.success_path(), "/employees/e1");
        assert_eq!(edit.title(), "EDIT EMPLOYEE");
        assert_eq!(edit.employee_id(), Some("e1"));
        assert_eq!(EmployeeFormMode::from_route_id(None), EmployeeFormMode::Create);
        assert_eq!(
            EmployeeFormMode::Create.failure_message(),
            "Failed to create employee"
        );
    }

    #[test]
    fn unique_email_rejection_maps_to_field_without_navigation() {
        let err = ApiError::from_response(
            400,
            Some(serde_json::json!({ "email": ["This field must be unique."] })),
        );
        let outcome = submission_outcome(&EmployeeFormMode::Create, &Err(err));
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.get("email"), Some("This field must be unique."));
        assert!(errors.general.is_none());
    }

    #[test]
    fn transport_failure_falls_back_to_mode_message() {
        let outcome = submission_outcome(
            &EmployeeFormMode::Edit("e1".into()),
            &Err(ApiError::network("offline")),
        );
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(FieldErrors {
                general: Some("Failed to update employee".into()),
                ..FieldErrors::default()
            })
        );
    }

    #[test]
    fn delete_needs_two_clicks_on_the_same_row() {
        assert_eq!(delete_click(None, "e1"), DeleteClick::Arm);
        assert_eq!(delete_click(Some("e2"), "e1"), DeleteClick::Arm);
        assert_eq!(delete_click(Some("e1"), "e1"), DeleteClick::Confirm);
        assert_eq!(delete_label(false, false), "[ DELETE ]");
        assert_eq!(delete_label(true, false), "[ CONFIRM DELETE? ]");
        assert_eq!(delete_label(true, true), "[ DELETING... ]");
    }

    #[test]
    fn form_state_set_and_read_by_field() {
        let mut state = EmployeeFormState::default();
        state.set(EmployeeField::Department, "Finance".into());
        assert_eq!(state.value(EmployeeField::Department), "Finance");
        assert_eq!(state.value(EmployeeField::Email), "");
    }
}
