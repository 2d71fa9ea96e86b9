use serde::{Deserialize, Serialize};

use crate::catalog::{hold_categories, HoldCategory};
use crate::uploads::HoldRecord;

/// Fields posted from the add-hold form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldForm {
    pub frn: String,
    pub hold_category_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    pub value: u32,
    pub text: String,
    pub selected: bool,
}

impl SelectItem {
    fn for_category(category: &HoldCategory, selected: Option<u32>) -> Self {
        Self {
            value: category.id,
            text: format!("{} - {}", category.scheme_name, category.name),
            selected: selected == Some(category.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldFormView {
    pub frn: String,
    pub hold_category_id: Option<u32>,
    pub categories: Vec<SelectItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl HoldFormView {
    pub fn new(form: &HoldForm, error_message: Option<String>) -> Self {
        let categories = hold_categories()
            .iter()
            .map(|category| SelectItem::for_category(category, form.hold_category_id))
            .collect();

        Self {
            frn: form.frn.clone(),
            hold_category_id: form.hold_category_id,
            categories,
            error_message,
        }
    }
}

impl Default for HoldFormView {
    fn default() -> Self {
        Self::new(&HoldForm::default(), None)
    }
}

/// Stored hold joined with its category for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldEntryView {
    pub frn: String,
    pub hold_category_id: u32,
    pub category: Option<&'static str>,
    pub scheme: Option<&'static str>,
}

impl From<&HoldRecord> for HoldEntryView {
    fn from(hold: &HoldRecord) -> Self {
        let category = crate::catalog::hold_category(hold.hold_category_id);
        Self {
            frn: hold.frn.clone(),
            hold_category_id: hold.hold_category_id,
            category: category.map(|c| c.name),
            scheme: category.map(|c| c.scheme_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_category_is_marked() {
        let form = HoldForm {
            frn: "1234567890".to_string(),
            hold_category_id: Some(2),
        };
        let view = HoldFormView::new(&form, Some("The FRN is required".to_string()));

        let selected: Vec<_> = view
            .categories
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.value)
            .collect();
        assert_eq!(selected, vec![2]);
        assert_eq!(view.categories.len(), hold_categories().len());
    }

    #[test]
    fn entry_view_resolves_category_names() {
        let entry = HoldEntryView::from(&HoldRecord {
            frn: "1".to_string(),
            hold_category_id: 1,
        });
        assert_eq!(entry.category, Some("Bank account anomaly"));
        assert_eq!(entry.scheme, Some("SFI"));
    }
}
