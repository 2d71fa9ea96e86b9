use serde::Serialize;

use crate::auth::{AdminArea, UserContext};

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub area: AdminArea,
    pub label: &'static str,
    pub path: &'static str,
}

/// Areas the signed-in user can open.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub user_name: Option<String>,
    pub links: Vec<NavLink>,
}

impl NavigationView {
    pub fn for_user(user: &UserContext) -> Self {
        let links = AdminArea::ordered()
            .into_iter()
            .filter(|area| user.can_access(*area))
            .map(|area| NavLink {
                area,
                label: area.label(),
                path: area.path(),
            })
            .collect();

        Self {
            user_name: user.name.clone(),
            links,
        }
    }
}
