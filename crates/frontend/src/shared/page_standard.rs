//! Page category constants.
//!
//! Every routed page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a002_product--list"`) and a `data-page-category`. Searching the
//! codebase for the id part before `--` leads to the module that renders it.

/// Table with search / paging.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Task-oriented screen (point of sale, shift selection).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Administration pages (users, audit).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// `{entity}--{category}` with both parts non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_product--list"));
        assert!(!is_valid_page_id("a002_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_product--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(!is_known_category("legacy"));
    }
}
