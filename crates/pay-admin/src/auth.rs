//! Role names forwarded by the identity gateway and per-area access checks.

use axum::http::HeaderMap;
use serde::Serialize;
use std::collections::BTreeSet;

pub const ROLES_HEADER: &str = "x-user-roles";
pub const USER_NAME_HEADER: &str = "x-user-name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    HoldAdmin,
    ClosureAdmin,
    ManualPaymentsAdmin,
    DataView,
}

impl Role {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HoldAdmin => "Payments.Admin.Holds",
            Self::ClosureAdmin => "Payments.Admin.Closures",
            Self::ManualPaymentsAdmin => "Payments.Admin.ManualPayments",
            Self::DataView => "Payments.Data.View",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::HoldAdmin,
            Self::ClosureAdmin,
            Self::ManualPaymentsAdmin,
            Self::DataView,
        ]
        .into_iter()
        .find(|role| role.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Sections of the admin service, each gated by a single role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminArea {
    Closures,
    Holds,
    ManualPayments,
    Reports,
}

impl AdminArea {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Closures,
            Self::Holds,
            Self::ManualPayments,
            Self::Reports,
        ]
    }

    pub const fn required_role(self) -> Role {
        match self {
            Self::Closures => Role::ClosureAdmin,
            Self::Holds => Role::HoldAdmin,
            Self::ManualPayments => Role::ManualPaymentsAdmin,
            Self::Reports => Role::DataView,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Closures => "Agreement closures",
            Self::Holds => "Payment holds",
            Self::ManualPayments => "Manual payments",
            Self::Reports => "Reports",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Closures => "/api/v1/closures",
            Self::Holds => "/api/v1/holds",
            Self::ManualPayments => "/api/v1/manual-payments",
            Self::Reports => "/api/v1/reports",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("access to {} requires the {} role", .area.label(), .area.required_role().name())]
    Forbidden { area: AdminArea },
}

/// Identity of the caller as forwarded by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub name: Option<String>,
    roles: BTreeSet<Role>,
}

impl UserContext {
    pub fn new(name: Option<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            name,
            roles: roles.into_iter().collect(),
        }
    }

    /// Reads roles and display name from gateway headers; unknown roles are ignored.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let roles = headers
            .get(ROLES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|raw| raw.split(',').filter_map(Role::from_name).collect())
            .unwrap_or_default();

        let name = headers
            .get(USER_NAME_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self { name, roles }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn can_access(&self, area: AdminArea) -> bool {
        self.has_role(area.required_role())
    }

    pub fn require(&self, area: AdminArea) -> Result<(), AccessError> {
        if self.can_access(area) {
            Ok(())
        } else {
            Err(AccessError::Forbidden { area })
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }
}
