use crate::aggregate::UNCATEGORIZED;
use crate::record::EntryType;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping for transactions and budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub color: Option<String>,
}

impl Category {
    /// A category minted on first use, before the user has picked a color.
    fn implicit(name: &str, kind: EntryType) -> Self {
        Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            kind,
            color: None,
        }
    }
}

/// Finds a category by case-insensitive name match.
pub fn lookup<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Resolves a category name to a `Category`, creating one if no
/// case-insensitive match exists.
///
/// This is the create-on-first-use step performed when a transaction is
/// saved. It runs before the engine is ever invoked and is kept out of the
/// aggregation path on purpose: aggregation groups by stored name only and
/// must not invent records. Blank names resolve to the
/// [`UNCATEGORIZED`](crate::aggregate::UNCATEGORIZED) bucket.
pub fn reconcile<'a>(
    categories: &'a mut Vec<Category>,
    name: &str,
    kind: EntryType,
) -> &'a Category {
    let name = if name.trim().is_empty() {
        UNCATEGORIZED
    } else {
        name
    };

    let pos = match categories
        .iter()
        .position(|c| c.name.eq_ignore_ascii_case(name))
    {
        Some(pos) => pos,
        None => {
            debug!("no category matches '{}', creating one", name);
            categories.push(Category::implicit(name, kind));
            categories.len() - 1
        }
    };

    &categories[pos]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing(name: &str) -> Category {
        Category {
            id: format!("id-{}", name),
            name: name.to_owned(),
            kind: EntryType::Expense,
            color: Some("#d32f2f".into()),
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let categories = vec![existing("Groceries")];
        assert!(lookup(&categories, "groceries").is_some());
        assert!(lookup(&categories, "GROCERIES").is_some());
        assert!(lookup(&categories, "Rent").is_none());
    }

    #[test]
    fn reconcile_returns_existing_match() {
        let mut categories = vec![existing("Groceries")];
        let resolved = reconcile(&mut categories, "groceries", EntryType::Expense);
        assert_eq!(resolved.id, "id-Groceries");
        assert_eq!(categories.len(), 1);
    }

    #[test]
    fn reconcile_creates_on_first_use() {
        let mut categories = vec![existing("Groceries")];
        {
            let created = reconcile(&mut categories, "Rent", EntryType::Expense);
            assert_eq!(created.name, "Rent");
            assert_eq!(created.kind, EntryType::Expense);
            assert!(created.color.is_none());
            assert!(!created.id.is_empty());
        }
        assert_eq!(categories.len(), 2);

        // A second save reuses the freshly created category.
        reconcile(&mut categories, "rent", EntryType::Expense);
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn reconcile_blank_name_resolves_to_uncategorized() {
        let mut categories = Vec::new();
        let resolved = reconcile(&mut categories, "  ", EntryType::Income);
        assert_eq!(resolved.name, UNCATEGORIZED);
    }
}
