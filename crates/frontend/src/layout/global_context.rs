use leptos::prelude::*;

use crate::routes::routes::NAV_GROUPS;

/// Layout state shared by the header and the sidebar.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub sidebar_open: RwSignal<bool>,
    /// Sidebar groups shown expanded
    pub expanded_groups: RwSignal<Vec<&'static str>>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            expanded_groups: RwSignal::new(NAV_GROUPS.to_vec()),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn toggle_group(&self, group: &'static str) {
        self.expanded_groups.update(|groups| toggle_entry(groups, group));
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle_entry(groups: &mut Vec<&'static str>, group: &'static str) {
    if let Some(pos) = groups.iter().position(|g| *g == group) {
        groups.remove(pos);
    } else {
        groups.push(group);
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_entry() {
        let mut groups = vec!["Sales", "Finance"];
        toggle_entry(&mut groups, "Sales");
        assert_eq!(groups, vec!["Finance"]);
        toggle_entry(&mut groups, "Sales");
        assert_eq!(groups, vec!["Finance", "Sales"]);
    }
}
