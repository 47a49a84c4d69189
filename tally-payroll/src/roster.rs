use crate::employee::{Role, SalaryComputable, StaffMember};
use rust_decimal::Decimal;

/// In-memory roster of everyone on the payroll
#[derive(Debug, Default, Clone)]
pub struct Payroll {
    members: Vec<StaffMember>,
}

impl Payroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hire(&mut self, member: impl Into<StaffMember>) {
        let member = member.into();
        tracing::debug!(
            name = member.name(),
            role = ?member.role(),
            salary = %member.calculate_salary(),
            "Added to payroll"
        );
        self.members.push(member);
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &StaffMember> {
        self.members.iter().filter(move |m| m.role() == role)
    }

    /// Sum of every member's computed salary
    pub fn total(&self) -> Decimal {
        self.members.iter().map(|m| m.calculate_salary()).sum()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
