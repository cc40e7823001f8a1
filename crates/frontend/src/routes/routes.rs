use contracts::system::roles::UserRole;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::DashboardPage;
use crate::domain::a001_location::ui::list::LocationsListPage;
use crate::domain::a002_product::ui::list::ProductsListPage;
use crate::domain::a003_supplier::ui::list::SuppliersListPage;
use crate::domain::a004_customer::ui::list::CustomersListPage;
use crate::domain::a005_purchase_invoice::ui::list::PurchaseInvoicesListPage;
use crate::domain::a006_cash_account::ui::list::CashAccountsListPage;
use crate::domain::a007_cash_transaction::ui::list::CashTransactionsPage;
use crate::domain::a008_lost_sale::ui::list::LostSalesListPage;
use crate::domain::a009_order::ui::list::OrdersListPage;
use crate::domain::a010_shift::ui::ShiftPage;
use crate::layout::Shell;
use crate::system::audit::ui::AuditLogPage;
use crate::system::auth::guard::{ProtectedRoute, RouteRequirement};
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::users::ui::UsersListPage;
use crate::usecases::u501_point_of_sale::PointOfSalePage;

pub const REQ_STAFF: RouteRequirement = RouteRequirement::role(UserRole::Staff);
pub const REQ_STAFF_SHIFT: RouteRequirement = RouteRequirement::with_shift(UserRole::Staff);
pub const REQ_MANAGER: RouteRequirement = RouteRequirement::role(UserRole::Manager);
pub const REQ_MANAGER_SHIFT: RouteRequirement = RouteRequirement::with_shift(UserRole::Manager);
pub const REQ_ADMIN: RouteRequirement = RouteRequirement::role(UserRole::Admin);

/// Sidebar entry. `requirement` mirrors the route guard so a user never
/// sees a link that would answer "access denied".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub group: &'static str,
    pub requirement: RouteRequirement,
}

pub const NAV_GROUPS: [&str; 5] = ["Overview", "Sales", "Inventory", "Finance", "Administration"];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Dashboard", icon: "dashboard", group: "Overview", requirement: REQ_STAFF },
    NavItem { path: "/pos", label: "Point of sale", icon: "pos", group: "Sales", requirement: REQ_STAFF_SHIFT },
    NavItem { path: "/orders", label: "Orders", icon: "orders", group: "Sales", requirement: REQ_STAFF_SHIFT },
    NavItem { path: "/customers", label: "Customers", icon: "customers", group: "Sales", requirement: REQ_STAFF },
    NavItem { path: "/lost-sales", label: "Lost sales", icon: "lost-sales", group: "Sales", requirement: REQ_STAFF_SHIFT },
    NavItem { path: "/products", label: "Products", icon: "products", group: "Inventory", requirement: REQ_STAFF },
    NavItem { path: "/suppliers", label: "Suppliers", icon: "suppliers", group: "Inventory", requirement: REQ_MANAGER },
    NavItem { path: "/purchases", label: "Purchases", icon: "purchases", group: "Inventory", requirement: REQ_MANAGER },
    NavItem { path: "/cash-accounts", label: "Cash accounts", icon: "cash", group: "Finance", requirement: REQ_MANAGER },
    NavItem { path: "/locations", label: "Locations", icon: "locations", group: "Administration", requirement: REQ_ADMIN },
    NavItem { path: "/users", label: "Users", icon: "users", group: "Administration", requirement: REQ_ADMIN },
    NavItem { path: "/audit", label: "Audit log", icon: "audit", group: "Administration", requirement: REQ_ADMIN },
];

/// Entries the role may open. Shift-bound pages stay listed; the guard
/// sends a user without a shift to the shift picker.
pub fn visible_nav_items(role: Option<UserRole>) -> Vec<NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    NAV_ITEMS
        .iter()
        .filter(|item| role.satisfies(item.requirement.min_role))
        .copied()
        .collect()
}

/// `/` only matches itself; other entries also match their sub-pages
/// (`/cash-accounts/4` highlights "Cash accounts").
pub fn is_nav_active(current_path: &str, item_path: &str) -> bool {
    if item_path == "/" {
        return current_path == "/";
    }
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=Shell>
                    <Route
                        path=path!("")
                        view=|| view! { <ProtectedRoute requirement=REQ_STAFF><DashboardPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/shift")
                        view=|| view! { <ProtectedRoute requirement=REQ_STAFF><ShiftPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/products")
                        view=|| view! { <ProtectedRoute requirement=REQ_STAFF><ProductsListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/orders")
                        view=|| view! { <ProtectedRoute requirement=REQ_STAFF_SHIFT><OrdersListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/pos")
                        view=|| view! { <ProtectedRoute requirement=REQ_STAFF_SHIFT><PointOfSalePage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/customers")
                        view=|| view! { <ProtectedRoute requirement=REQ_STAFF><CustomersListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/suppliers")
                        view=|| view! { <ProtectedRoute requirement=REQ_MANAGER><SuppliersListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/purchases")
                        view=|| view! { <ProtectedRoute requirement=REQ_MANAGER><PurchaseInvoicesListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/cash-accounts")
                        view=|| view! { <ProtectedRoute requirement=REQ_MANAGER><CashAccountsListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/cash-accounts/:id")
                        view=|| view! { <ProtectedRoute requirement=REQ_MANAGER_SHIFT><CashTransactionsPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/lost-sales")
                        view=|| view! { <ProtectedRoute requirement=REQ_STAFF_SHIFT><LostSalesListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/locations")
                        view=|| view! { <ProtectedRoute requirement=REQ_ADMIN><LocationsListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/users")
                        view=|| view! { <ProtectedRoute requirement=REQ_ADMIN><UsersListPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/audit")
                        view=|| view! { <ProtectedRoute requirement=REQ_ADMIN><AuditLogPage /></ProtectedRoute> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(role: Option<UserRole>) -> Vec<&'static str> {
        visible_nav_items(role).into_iter().map(|i| i.path).collect()
    }

    #[test]
    fn test_staff_sees_no_back_office() {
        let staff = paths(Some(UserRole::Staff));
        assert!(staff.contains(&"/pos"));
        assert!(staff.contains(&"/products"));
        assert!(!staff.contains(&"/suppliers"));
        assert!(!staff.contains(&"/cash-accounts"));
        assert!(!staff.contains(&"/users"));
    }

    #[test]
    fn test_manager_and_admin_menus() {
        let manager = paths(Some(UserRole::Manager));
        assert!(manager.contains(&"/purchases"));
        assert!(manager.contains(&"/cash-accounts"));
        assert!(!manager.contains(&"/audit"));
        assert_eq!(paths(Some(UserRole::Admin)).len(), NAV_ITEMS.len());
        assert!(paths(None).is_empty());
    }

    #[test]
    fn test_every_item_has_a_known_group() {
        for item in NAV_ITEMS {
            assert!(NAV_GROUPS.contains(&item.group), "{} has group {}", item.path, item.group);
        }
    }

    #[test]
    fn test_is_nav_active() {
        assert!(is_nav_active("/", "/"));
        assert!(!is_nav_active("/products", "/"));
        assert!(is_nav_active("/cash-accounts/4", "/cash-accounts"));
        assert!(is_nav_active("/cash-accounts", "/cash-accounts"));
        assert!(!is_nav_active("/cash-accounts-old", "/cash-accounts"));
    }
}
