use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Anything that can report what it is paid for a period.
pub trait SalaryComputable {
    fn name(&self) -> &str;

    /// Contracted salary, before any variant-specific extras.
    fn base_salary(&self) -> Decimal;

    /// Total pay. Pure: depends only on the current field values.
    fn calculate_salary(&self) -> Decimal;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Manager,
    Developer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub name: String,
    pub salary: Decimal,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: Decimal) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }
}

impl SalaryComputable for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn base_salary(&self) -> Decimal {
        self.salary
    }

    fn calculate_salary(&self) -> Decimal {
        self.salary
    }
}

/// Employee paid a flat bonus on top of salary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manager {
    #[serde(flatten)]
    pub employee: Employee,
    pub bonus: Decimal,
}

impl Manager {
    pub fn new(name: impl Into<String>, salary: Decimal, bonus: Decimal) -> Self {
        Self {
            employee: Employee::new(name, salary),
            bonus,
        }
    }
}

impl SalaryComputable for Manager {
    fn name(&self) -> &str {
        &self.employee.name
    }

    fn base_salary(&self) -> Decimal {
        self.employee.salary
    }

    fn calculate_salary(&self) -> Decimal {
        self.employee.salary + self.bonus
    }
}

/// Employee paid for overtime at an hourly rate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Developer {
    #[serde(flatten)]
    pub employee: Employee,
    pub overtime_hours: Decimal,
    pub hourly_rate: Decimal,
}

impl Developer {
    pub fn new(
        name: impl Into<String>,
        salary: Decimal,
        overtime_hours: Decimal,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            employee: Employee::new(name, salary),
            overtime_hours,
            hourly_rate,
        }
    }

    pub fn overtime_pay(&self) -> Decimal {
        self.overtime_hours * self.hourly_rate
    }
}

impl SalaryComputable for Developer {
    fn name(&self) -> &str {
        &self.employee.name
    }

    fn base_salary(&self) -> Decimal {
        self.employee.salary
    }

    fn calculate_salary(&self) -> Decimal {
        self.employee.salary + self.overtime_pay()
    }
}

/// Closed set of staff kinds the payroll knows how to pay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffMember {
    Employee(Employee),
    Manager(Manager),
    Developer(Developer),
}

impl StaffMember {
    pub fn role(&self) -> Role {
        match self {
            StaffMember::Employee(_) => Role::Employee,
            StaffMember::Manager(_) => Role::Manager,
            StaffMember::Developer(_) => Role::Developer,
        }
    }

    fn as_computable(&self) -> &dyn SalaryComputable {
        match self {
            StaffMember::Employee(e) => e,
            StaffMember::Manager(m) => m,
            StaffMember::Developer(d) => d,
        }
    }
}

impl SalaryComputable for StaffMember {
    fn name(&self) -> &str {
        self.as_computable().name()
    }

    fn base_salary(&self) -> Decimal {
        self.as_computable().base_salary()
    }

    fn calculate_salary(&self) -> Decimal {
        self.as_computable().calculate_salary()
    }
}

impl From<Employee> for StaffMember {
    fn from(e: Employee) -> Self {
        StaffMember::Employee(e)
    }
}

impl From<Manager> for StaffMember {
    fn from(m: Manager) -> Self {
        StaffMember::Manager(m)
    }
}

impl From<Developer> for StaffMember {
    fn from(d: Developer) -> Self {
        StaffMember::Developer(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_employee_salary() {
        let e = Employee::new("Anna", Decimal::from(30000));
        assert_eq!(e.calculate_salary(), Decimal::from(30000));
        assert_eq!(e.base_salary(), e.calculate_salary());
    }

    #[test]
    fn test_manager_salary_includes_bonus() {
        let m = Manager::new("Ivan Ivanov", Decimal::from(50000), Decimal::from(15000));
        assert_eq!(m.calculate_salary(), Decimal::from(65000));
        assert_eq!(m.base_salary(), Decimal::from(50000));
    }

    #[test]
    fn test_developer_salary_includes_overtime() {
        let d = Developer::new(
            "Petr Petrov",
            Decimal::from(40000),
            Decimal::from(10),
            Decimal::from(500),
        );
        assert_eq!(d.overtime_pay(), Decimal::from(5000));
        assert_eq!(d.calculate_salary(), Decimal::from(45000));
    }

    #[test]
    fn test_fractional_overtime() {
        let d = Developer::new("Dev", Decimal::from(1000), Decimal::new(25, 1), Decimal::from(40));
        assert_eq!(d.calculate_salary(), Decimal::from(1100));
    }

    #[test]
    fn test_calculate_salary_is_pure() {
        let m: StaffMember = Manager::new("M", Decimal::from(100), Decimal::from(5)).into();
        assert_eq!(m.calculate_salary(), m.calculate_salary());
        assert_eq!(m.name(), "M");
        assert_eq!(m.role(), Role::Manager);
    }

    #[test]
    fn test_staff_member_deserializes_by_role() {
        let json = r#"{"role":"DEVELOPER","name":"Petr","salary":"40000","overtime_hours":"10","hourly_rate":"500"}"#;
        let member: StaffMember = serde_json::from_str(json).unwrap();

        assert_eq!(member.role(), Role::Developer);
        assert_eq!(member.calculate_salary(), Decimal::from(45000));
    }
}
