use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::routes::routes::AppRoutes;
use crate::shared::components::notifications::{NotificationService, ToastHost};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are raised from every page, including login
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
                <ToastHost />
            </AuthProvider>
        </ConfigProvider>
    }
}
