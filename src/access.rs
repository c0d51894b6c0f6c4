//! Role gating for back-office sections and row actions.
//!
//! Decides what an operator may see and do; building the actual nav tree
//! and routing is the embedding application's job.

use serde::{Deserialize, Serialize};

use crate::{DISPATCH_ROLE, FLEET_ROLE, SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

/// Back-office user as decoded from the session payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Operator {
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl Operator {
    pub fn has_role(&self, role: &str) -> bool {
        check_role(role, &self.roles)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(SERVICE_ADMIN_ROLE)
    }
}

/// Returns true when `roles` contains `role`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Sections of the back-office menu, one per administered entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSection {
    Orders,
    Containers,
    Drivers,
    Vehicles,
    Roles,
    SalaryFormulas,
}

/// Row-level actions a screen can enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListAction {
    View,
    Create,
    Edit,
    Delete,
    Export,
}

impl MenuSection {
    pub const ALL: [MenuSection; 6] = [
        MenuSection::Orders,
        MenuSection::Containers,
        MenuSection::Drivers,
        MenuSection::Vehicles,
        MenuSection::Roles,
        MenuSection::SalaryFormulas,
    ];

    /// Role required to see this section, on top of service access.
    pub fn required_role(self) -> &'static str {
        match self {
            MenuSection::Orders | MenuSection::Containers => DISPATCH_ROLE,
            MenuSection::Drivers | MenuSection::Vehicles => FLEET_ROLE,
            MenuSection::Roles | MenuSection::SalaryFormulas => SERVICE_ADMIN_ROLE,
        }
    }

    /// Whether the section shows up for this operator. Service access is
    /// always required; admins see every section on top of it.
    pub fn visible_to(self, operator: &Operator) -> bool {
        if !operator.has_role(SERVICE_ACCESS_ROLE) {
            return false;
        }
        operator.is_admin() || operator.has_role(self.required_role())
    }

    /// Actions enabled on this section's screen. Mutating actions are
    /// reserved for admins; everyone else gets a read-only table.
    pub fn allowed_actions(self, operator: &Operator) -> Vec<ListAction> {
        if !self.visible_to(operator) {
            return Vec::new();
        }
        if operator.is_admin() {
            vec![
                ListAction::View,
                ListAction::Create,
                ListAction::Edit,
                ListAction::Delete,
                ListAction::Export,
            ]
        } else {
            vec![ListAction::View, ListAction::Export]
        }
    }
}

/// Sections the operator's menu should offer, in display order.
pub fn visible_sections(operator: &Operator) -> Vec<MenuSection> {
    MenuSection::ALL
        .into_iter()
        .filter(|section| section.visible_to(operator))
        .collect()
}
