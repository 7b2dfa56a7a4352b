//! Employee records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wire;

/// Job title of the airport's head of staff.
pub const HEAD_OF_STAFF: &str = "Airport Head of Staff";
/// Job title of security personnel.
pub const SECURITY: &str = "Security";
/// Job title of ground engineers.
pub const GROUND_ENGINEER: &str = "Ground Engineer";
/// Job titles used for medical staff. Both spellings exist in the data.
pub const MEDICAL_STAFF: &[&str] = &["Medical staff", "Medical staffs"];

/// An airport employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee identifier.
    #[serde(rename = "Employee_ID", with = "wire::lenient_int")]
    pub employee_id: i64,

    /// First name.
    #[serde(rename = "F_Name")]
    pub f_name: String,

    /// Middle initial.
    #[serde(rename = "M_Initial", default, with = "wire::optional")]
    pub m_initial: Option<String>,

    /// Last name.
    #[serde(rename = "L_Name")]
    pub l_name: String,

    /// Display name.
    #[serde(rename = "Employee_name", default, with = "wire::optional")]
    pub employee_name: Option<String>,

    /// Date of hire.
    #[serde(rename = "Hire_date", default, with = "wire::optional")]
    pub hire_date: Option<NaiveDate>,

    /// Annual salary.
    #[serde(rename = "Employee_Salary", default, with = "wire::lenient_int_opt")]
    pub employee_salary: Option<i64>,

    /// Job title, e.g. `Pilot` or `Ground Engineer`.
    #[serde(rename = "Job_title", default, with = "wire::optional")]
    pub job_title: Option<String>,

    /// Airport the employee works at.
    #[serde(rename = "Airport_ID")]
    pub airport_id: String,
}

impl Employee {
    /// Create an employee with only the required fields set.
    #[must_use]
    pub fn new(
        employee_id: i64,
        f_name: impl Into<String>,
        l_name: impl Into<String>,
        airport_id: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            f_name: f_name.into(),
            m_initial: None,
            l_name: l_name.into(),
            employee_name: None,
            hire_date: None,
            employee_salary: None,
            job_title: None,
            airport_id: airport_id.into(),
        }
    }

    /// Full name built from first name, middle initial and last name.
    ///
    /// Empty parts are skipped so a missing initial does not leave a double space.
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            Some(self.f_name.as_str()),
            self.m_initial.as_deref(),
            Some(self.l_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Display name, falling back to [`Employee::full_name`].
    #[must_use]
    pub fn display_name(&self) -> String {
        self.employee_name
            .clone()
            .unwrap_or_else(|| self.full_name())
    }

    /// Whether the employee holds the given job title.
    #[must_use]
    pub fn has_title(&self, title: &str) -> bool {
        self.job_title.as_deref() == Some(title)
    }

    /// Whether the employee is medical staff.
    #[must_use]
    pub fn is_medical_staff(&self) -> bool {
        MEDICAL_STAFF.iter().any(|title| self.has_title(title))
    }

    /// Whether the employee is a ground engineer.
    #[must_use]
    pub fn is_ground_engineer(&self) -> bool {
        self.has_title(GROUND_ENGINEER)
    }
}

/// Compact employee listing used by selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Employee identifier.
    #[serde(rename = "Employee_ID")]
    pub employee_id: i64,
    /// Display name.
    #[serde(rename = "Employee_name")]
    pub employee_name: Option<String>,
    /// Job title.
    #[serde(rename = "Job_title")]
    pub job_title: Option<String>,
}

impl From<&Employee> for StaffMember {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            employee_name: employee.employee_name.clone(),
            job_title: employee.job_title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_skips_missing_initial() {
        let mut employee = Employee::new(1, "Ravi", "Kumar", "BLR");
        assert_eq!(employee.full_name(), "Ravi Kumar");

        employee.m_initial = Some("S".to_string());
        assert_eq!(employee.full_name(), "Ravi S Kumar");

        employee.m_initial = Some(String::new());
        assert_eq!(employee.full_name(), "Ravi Kumar");
    }

    #[test]
    fn test_display_name_prefers_stored_name() {
        let mut employee = Employee::new(1, "Ravi", "Kumar", "BLR");
        assert_eq!(employee.display_name(), "Ravi Kumar");
        employee.employee_name = Some("R. Kumar".to_string());
        assert_eq!(employee.display_name(), "R. Kumar");
    }

    #[test]
    fn test_title_predicates() {
        let mut employee = Employee::new(1, "Meera", "Iyer", "BLR");
        employee.job_title = Some("Medical staffs".to_string());
        assert!(employee.is_medical_staff());
        assert!(!employee.is_ground_engineer());

        employee.job_title = Some(GROUND_ENGINEER.to_string());
        assert!(employee.is_ground_engineer());
        assert!(!employee.is_medical_staff());
    }

    #[test]
    fn test_employee_from_form_payload() {
        let json = r#"{"Employee_ID": "55", "F_Name": "Anil", "M_Initial": "",
                       "L_Name": "Das", "Hire_date": "2021-04-01",
                       "Employee_Salary": "85000", "Job_title": "Ground Engineer",
                       "Airport_ID": "BLR", "pwd": null}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, 55);
        assert!(employee.m_initial.is_none());
        assert_eq!(employee.hire_date, NaiveDate::from_ymd_opt(2021, 4, 1));
        assert_eq!(employee.employee_salary, Some(85_000));
    }
}
