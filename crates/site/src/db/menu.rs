//! Menu item store.

use std::sync::RwLock;

use bistro_core::{MenuItem, MenuItemDraft, MenuItemId, MenuRepository, RepositoryError};

use super::{next_id, read, write};

const ENTITY: &str = "menu item";

/// Menu items kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryMenuStore {
    items: RwLock<Vec<MenuItem>>,
}

impl MemoryMenuStore {
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl MenuRepository for MemoryMenuStore {
    fn list(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        Ok(read(&self.items)?.clone())
    }

    fn get(&self, id: MenuItemId) -> Result<MenuItem, RepositoryError> {
        read(&self.items)?
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.as_i32()))
    }

    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, RepositoryError> {
        let mut items = write(&self.items)?;
        let id = MenuItemId::new(next_id(&items, |item| item.id.as_i32()));
        let item = MenuItem::from_draft(id, draft);
        items.push(item.clone());
        Ok(item)
    }

    fn update(&self, id: MenuItemId, draft: MenuItemDraft) -> Result<MenuItem, RepositoryError> {
        let mut items = write(&self.items)?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.as_i32()))?;
        item.apply(draft);
        Ok(item.clone())
    }

    fn delete(&self, id: MenuItemId) -> Result<(), RepositoryError> {
        let mut items = write(&self.items)?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(RepositoryError::not_found(ENTITY, id.as_i32()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bistro_core::{MenuCategory, Price};

    use super::*;

    fn draft(name: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: "Descrição".to_string(),
            price: Price::from_cents(1990),
            image_url: None,
            category: MenuCategory::Appetizer,
            is_available: true,
            is_daily_special: false,
            valid_until: None,
            dietary_info: None,
        }
    }

    #[test]
    fn test_crud_cycle() {
        let store = MemoryMenuStore::default();
        let first = store.create(draft("Bruschetta")).unwrap();
        let second = store.create(draft("Carpaccio")).unwrap();
        assert_eq!(first.id, MenuItemId::new(1));
        assert_eq!(second.id, MenuItemId::new(2));

        let updated = store.update(first.id, draft("Bruschetta Especial")).unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(store.get(first.id).unwrap().name, "Bruschetta Especial");

        store.delete(first.id).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(
            store.get(first.id),
            Err(RepositoryError::not_found("menu item", 1))
        );
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let store = MemoryMenuStore::default();
        let id = MenuItemId::new(42);
        assert!(matches!(
            store.update(id, draft("x")),
            Err(RepositoryError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete(id),
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_ids_continue_after_seed() {
        let store = MemoryMenuStore::new(vec![MenuItem::from_draft(MenuItemId::new(5), draft("a"))]);
        assert_eq!(store.create(draft("b")).unwrap().id, MenuItemId::new(6));
    }
}
