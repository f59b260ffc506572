//! Menu catalog: items, dietary info and the filters used by the public menu
//! and the admin menu manager.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{MenuCategory, MenuItemId, Price};
use crate::validation::ValidationError;

/// Dietary markers shown as badges on a menu card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryInfo {
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains_allergens: Vec<String>,
}

impl DietaryInfo {
    /// Whether any marker is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_vegetarian
            && !self.is_vegan
            && !self.is_gluten_free
            && self.contains_allergens.is_empty()
    }
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub category: MenuCategory,
    pub is_available: bool,
    pub is_daily_special: bool,
    /// End of the promotion for a daily special.
    pub valid_until: Option<NaiveDateTime>,
    pub dietary_info: Option<DietaryInfo>,
}

impl MenuItem {
    /// Build an item from a validated draft.
    #[must_use]
    pub fn from_draft(id: MenuItemId, draft: MenuItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image_url: draft.image_url,
            category: draft.category,
            is_available: draft.is_available,
            is_daily_special: draft.is_daily_special,
            valid_until: draft.valid_until,
            dietary_info: draft.dietary_info,
        }
    }

    /// Overwrite the editable fields with a draft, keeping the ID.
    pub fn apply(&mut self, draft: MenuItemDraft) {
        *self = Self::from_draft(self.id, draft);
    }

    /// A daily special whose promotion has not expired at `now`.
    #[must_use]
    pub fn is_active_special(&self, now: NaiveDateTime) -> bool {
        self.is_daily_special && self.valid_until.is_none_or(|until| now <= until)
    }

    /// Case-insensitive match on name or description. `needle_lower` must
    /// already be lowercase.
    #[must_use]
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

/// Editable fields of a menu item, as submitted by the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: MenuCategory,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_daily_special: bool,
    #[serde(default)]
    pub valid_until: Option<NaiveDateTime>,
    #[serde(default)]
    pub dietary_info: Option<DietaryInfo>,
}

const fn default_true() -> bool {
    true
}

impl MenuItemDraft {
    /// Trim text fields and check required values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingMenuFields`] when the name or
    /// description is blank and [`ValidationError::NonPositivePrice`] when the
    /// price is zero or negative.
    pub fn validate(mut self) -> Result<Self, ValidationError> {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.image_url = self
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        self.dietary_info = self.dietary_info.filter(|info| !info.is_empty());

        if self.name.is_empty() || self.description.is_empty() {
            return Err(ValidationError::MissingMenuFields);
        }
        if !self.price.is_positive() {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(self)
    }
}

impl From<&MenuItem> for MenuItemDraft {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
            category: item.category,
            is_available: item.is_available,
            is_daily_special: item.is_daily_special,
            valid_until: item.valid_until,
            dietary_info: item.dietary_info.clone(),
        }
    }
}

/// Admin menu filter: free-text search plus an optional category tab.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    query: Option<String>,
    category: Option<MenuCategory>,
}

impl MenuFilter {
    /// Build a filter; a blank query matches everything.
    #[must_use]
    pub fn new(query: Option<&str>, category: Option<MenuCategory>) -> Self {
        let query = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        Self { query, category }
    }

    /// Whether the item passes the filter.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        let text_ok = self.query.as_deref().is_none_or(|q| item.matches_text(q));
        let category_ok = self.category.is_none_or(|c| item.category == c);
        text_ok && category_ok
    }

    /// Keep the matching items, preserving order.
    #[must_use]
    pub fn apply(&self, items: Vec<MenuItem>) -> Vec<MenuItem> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

/// Tab selected on the public menu page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuSelection {
    #[default]
    All,
    Daily,
    Category(MenuCategory),
}

impl MenuSelection {
    /// Parse a `?category=` value. Unknown values fall back to `All`.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("" | "all") => Self::All,
            Some("daily") => Self::Daily,
            Some(other) => other.parse().map_or(Self::All, Self::Category),
        }
    }

    /// URL identifier of the tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Daily => "daily",
            Self::Category(c) => c.as_str(),
        }
    }

    /// Only available items are ever shown publicly; the daily tab also
    /// drops specials that expired before `now`.
    #[must_use]
    pub fn matches(self, item: &MenuItem, now: NaiveDateTime) -> bool {
        if !item.is_available {
            return false;
        }
        match self {
            Self::All => true,
            Self::Daily => item.is_active_special(now),
            Self::Category(c) => item.category == c,
        }
    }
}

/// Daily specials for the home page: available and not expired at `now`.
#[must_use]
pub fn active_specials(items: &[MenuItem], now: NaiveDateTime) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.is_available && item.is_active_special(now))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn draft(name: &str, cents: i64) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: "Arroz arbóreo cremoso".to_string(),
            price: Price::from_cents(cents),
            image_url: None,
            category: MenuCategory::Main,
            is_available: true,
            is_daily_special: false,
            valid_until: None,
            dietary_info: None,
        }
    }

    fn item(id: i32, name: &str, category: MenuCategory) -> MenuItem {
        let mut d = draft(name, 1000);
        d.category = category;
        MenuItem::from_draft(MenuItemId::new(id), d)
    }

    #[test]
    fn test_validate_trims_and_accepts() {
        let mut d = draft("  Risoto  ", 4790);
        d.image_url = Some("   ".to_string());
        d.dietary_info = Some(DietaryInfo::default());
        let valid = d.validate().unwrap();
        assert_eq!(valid.name, "Risoto");
        assert_eq!(valid.image_url, None);
        assert_eq!(valid.dietary_info, None);
    }

    #[test]
    fn test_validate_requires_name_and_description() {
        assert_eq!(
            draft("  ", 100).validate(),
            Err(ValidationError::MissingMenuFields)
        );
        let mut d = draft("Risoto", 100);
        d.description = String::new();
        assert_eq!(d.validate(), Err(ValidationError::MissingMenuFields));
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        assert_eq!(
            draft("Risoto", 0).validate(),
            Err(ValidationError::NonPositivePrice)
        );
    }

    #[test]
    fn test_filter_search_is_case_insensitive_on_name_and_description() {
        let items = vec![
            item(1, "Risoto de Funghi", MenuCategory::Main),
            item(2, "Cheesecake", MenuCategory::Dessert),
        ];
        let filter = MenuFilter::new(Some("FUNGHI"), None);
        assert_eq!(filter.apply(items.clone()).len(), 1);

        let by_description = MenuFilter::new(Some("arbóreo"), None);
        assert_eq!(by_description.apply(items.clone()).len(), 2);

        let by_category = MenuFilter::new(Some(" "), Some(MenuCategory::Dessert));
        let result = by_category.apply(items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Cheesecake");
    }

    #[test]
    fn test_public_selection_hides_unavailable() {
        let mut hidden = item(1, "Filé", MenuCategory::Main);
        hidden.is_available = false;
        let mut special = item(2, "Risoto", MenuCategory::Main);
        special.is_daily_special = true;

        assert!(!MenuSelection::All.matches(&hidden, now()));
        assert!(MenuSelection::Daily.matches(&special, now()));
        assert!(!MenuSelection::Category(MenuCategory::Drink).matches(&special, now()));
    }

    #[test]
    fn test_daily_selection_skips_expired_specials() {
        let mut expired = item(1, "Cheesecake", MenuCategory::Dessert);
        expired.is_daily_special = true;
        expired.valid_until = Some(now() - chrono::Duration::days(1));

        assert!(!MenuSelection::Daily.matches(&expired, now()));
        assert!(MenuSelection::All.matches(&expired, now()));
        assert!(MenuSelection::Category(MenuCategory::Dessert).matches(&expired, now()));
    }

    #[test]
    fn test_selection_from_param() {
        assert_eq!(MenuSelection::from_param(None), MenuSelection::All);
        assert_eq!(MenuSelection::from_param(Some("daily")), MenuSelection::Daily);
        assert_eq!(
            MenuSelection::from_param(Some("drink")),
            MenuSelection::Category(MenuCategory::Drink)
        );
        assert_eq!(MenuSelection::from_param(Some("bogus")), MenuSelection::All);
    }

    #[test]
    fn test_active_specials_skip_expired() {
        let mut current = item(1, "Risoto", MenuCategory::Main);
        current.is_daily_special = true;
        current.valid_until = Some(now() + chrono::Duration::hours(1));

        let mut expired = item(2, "Cheesecake", MenuCategory::Dessert);
        expired.is_daily_special = true;
        expired.valid_until = Some(now() - chrono::Duration::hours(1));

        let mut open_ended = item(3, "Bruschetta", MenuCategory::Appetizer);
        open_ended.is_daily_special = true;

        let specials = active_specials(&[current, expired, open_ended], now());
        let names: Vec<_> = specials.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Risoto", "Bruschetta"]);
    }
}
