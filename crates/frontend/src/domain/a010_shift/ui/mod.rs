use contracts::domain::a001_location::aggregate::Location;
use contracts::domain::a010_shift::aggregate::{ClockInRequest, ClockOutRequest};
use contracts::domain::common::validation::parse_optional_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use thaw::*;

use crate::domain::a001_location::api::fetch_active_locations;
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_price;
use crate::shared::components::ui::{NumberInput, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::form::parse_id;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;

/// Builds the clock-in payload from the raw form values.
pub fn clock_in_request(location: &str, opening_cash: &str) -> Result<ClockInRequest, String> {
    let location_id = parse_id(location).ok_or_else(|| "Select a location".to_string())?;
    let request = ClockInRequest {
        location_id,
        opening_cash: parse_optional_amount(opening_cash, "Opening cash")?,
    };
    request.validate()?;
    Ok(request)
}

pub fn clock_out_request(closing_cash: &str) -> Result<ClockOutRequest, String> {
    let request = ClockOutRequest {
        closing_cash: parse_optional_amount(closing_cash, "Closing cash")?,
    };
    request.validate()?;
    Ok(request)
}

/// Clock in at a location, or close the shift that is still open.
#[component]
pub fn ShiftPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();

    let locations: RwSignal<Vec<Location>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let location = RwSignal::new(String::new());
    let opening_cash = RwSignal::new(String::new());
    let closing_cash = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let started = RwSignal::new(false);

    spawn_local(async move {
        match fetch_active_locations().await {
            Ok(list) => {
                // Preselect when there is only one branch
                if let [only] = list.as_slice() {
                    location.set(only.id.to_string());
                }
                locations.set(list);
            }
            Err(e) => error.set(Some(format!("Could not load locations: {}", e))),
        }
        set_loading.set(false);
    });

    let current_shift = Signal::derive(move || auth.state.with(|s| s.shift.clone()));
    let options = Signal::derive(move || {
        locations.with(|list| {
            list.iter()
                .map(|l| (l.id.to_string(), l.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let start = move |_| {
        let request = match clock_in_request(&location.get_untracked(), &opening_cash.get_untracked()) {
            Ok(r) => r,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        spawn_local(async move {
            match auth.start_shift(request).await {
                Ok(shift) => {
                    notifications.success(format!("Shift started at {}", shift.location_label()));
                    started.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let end = move |_| {
        let request = match clock_out_request(&closing_cash.get_untracked()) {
            Ok(r) => r,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        spawn_local(async move {
            match auth.end_shift(request).await {
                Ok(()) => {
                    closing_cash.set(String::new());
                    notifications.info("Shift closed");
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <PageFrame page_id="a010_shift--select" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Shift" subtitle="Choose where you are working today" />
            {move || started.get().then(|| view! { <Redirect path="/" /> })}
            <div class="page__content shift-page">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || match current_shift.get() {
                    Some(shift) => view! {
                        <div class="card shift-card">
                            <h3 class="card__title">{icon("shift")} " Current shift"</h3>
                            <p>"Location: " <strong>{shift.location_label()}</strong></p>
                            <p>"Started: " {format_datetime(&shift.started_at)}</p>
                            {shift.opening_cash.map(|c| view! { <p>"Opening cash: " {format_price(c)}</p> })}
                            <NumberInput
                                label="Closing cash (optional)"
                                value=closing_cash
                                on_input=Callback::new(move |v| closing_cash.set(v))
                                min="0"
                            />
                            <Flex gap=FlexGap::Small>
                                <A href="/" attr:class="button button--primary">
                                    "Continue"
                                </A>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=end
                                    disabled=Signal::derive(move || busy.get())
                                >
                                    {icon("logout")}
                                    " End shift"
                                </Button>
                            </Flex>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="card shift-card">
                            <h3 class="card__title">{icon("shift")} " Start a shift"</h3>
                            <Show
                                when=move || !loading.get()
                                fallback=|| view! { <Spinner /> }
                            >
                                <Select
                                    label="Location"
                                    value=location
                                    on_change=Callback::new(move |v| location.set(v))
                                    options=options
                                    placeholder="Select a location"
                                />
                                <NumberInput
                                    label="Opening cash (optional)"
                                    value=opening_cash
                                    on_input=Callback::new(move |v| opening_cash.set(v))
                                    min="0"
                                />
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=start
                                    disabled=Signal::derive(move || busy.get() || location.get().is_empty())
                                >
                                    {icon("check")}
                                    " Clock in"
                                </Button>
                            </Show>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_in_request() {
        let req = clock_in_request("3", "").unwrap();
        assert_eq!(req.location_id, 3);
        assert_eq!(req.opening_cash, None);

        let req = clock_in_request("3", "150,5").unwrap();
        assert_eq!(req.opening_cash, Some(150.5));

        assert_eq!(clock_in_request("", "").unwrap_err(), "Select a location");
        assert!(clock_in_request("3", "-1").is_err());
        assert!(clock_in_request("3", "lots").is_err());
    }

    #[test]
    fn test_clock_out_request() {
        assert_eq!(clock_out_request("  ").unwrap().closing_cash, None);
        assert_eq!(clock_out_request("80").unwrap().closing_cash, Some(80.0));
        assert!(clock_out_request("-5").is_err());
    }
}
