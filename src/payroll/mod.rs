use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::common::{Displayable, Identifiable};
use crate::utils::format_cents;

/// An employee whose salary changes only through validated raises.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    salary_cents: i64,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            salary_cents: salary_cents.max(0),
        }
    }

    /// Grows the salary by `percentage` percent, rounded to the nearest cent,
    /// and returns the new salary.
    pub fn give_raise(&mut self, percentage: f64) -> Result<i64, LedgerError> {
        if percentage <= 0.0 {
            return Err(LedgerError::InvalidPercentage(percentage));
        }
        let raise = (self.salary_cents as f64 * percentage / 100.0).round() as i64;
        self.salary_cents += raise;
        Ok(self.salary_cents)
    }

    pub fn salary_cents(&self) -> i64 {
        self.salary_cents
    }
}

impl Identifiable for Employee {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Employee {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, format_cents(self.salary_cents))
    }
}

#[cfg(test)]
mod tests {
    use super::Employee;
    use crate::errors::LedgerError;

    #[test]
    fn raise_grows_salary_by_percentage() {
        let mut employee = Employee::new("Asha", 200_000);
        let new_salary = employee.give_raise(10.0).unwrap();
        assert_eq!(new_salary, 220_000);
    }

    #[test]
    fn non_positive_percentage_is_rejected() {
        let mut employee = Employee::new("Asha", 200_000);
        let err = employee.give_raise(0.0).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidPercentage(_)));
        assert_eq!(employee.salary_cents(), 200_000);
    }
}
