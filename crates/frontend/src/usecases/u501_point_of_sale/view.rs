use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_customer::aggregate::Customer;
use contracts::domain::a009_order::aggregate::PaymentMethod;
use contracts::domain::common::validation::parse_optional_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::cart::{discount_input_text, Cart, CartLine};
use crate::domain::a002_product::api::fetch_active_products;
use crate::domain::a004_customer::api::fetch_customers;
use crate::domain::a009_order::api::create_order;
use crate::shared::components::notifications::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_price;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::form::{id_to_value, parse_id};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::context::use_auth;

const MAX_RESULTS: usize = 24;

#[component]
pub fn PointOfSalePage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();

    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let customers: RwSignal<Vec<Customer>> = RwSignal::new(Vec::new());
    let cart = RwSignal::new(Cart::default());
    let search = RwSignal::new(String::new());
    let discount_text = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let submitting = RwSignal::new(false);

    let load_products = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_active_products().await {
                Ok(list) => products.set(list),
                Err(e) => notifications.error(format!("Could not load products: {}", e)),
            }
            set_loading.set(false);
        });
    };
    load_products();

    spawn_local(async move {
        match fetch_customers().await {
            Ok(list) => customers.set(list),
            Err(e) => log::warn!("Could not load customers: {}", e),
        }
    });

    let results = Signal::derive(move || {
        let query = search.get();
        products.with(|list| {
            list.iter()
                .filter(|p| p.matches(&query))
                .take(MAX_RESULTS)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let add_to_cart = move |product: Product| {
        let mut outcome = Ok(());
        cart.update(|c| outcome = c.add(&product));
        if let Err(msg) = outcome {
            notifications.info(msg);
        }
    };

    let apply_discount = move |value: String| {
        discount_text.set(value.clone());
        let amount = parse_optional_amount(&value, "Discount").ok().flatten().unwrap_or(0.0);
        cart.update(|c| c.set_discount(amount));
    };

    // Adding, removing or re-pricing lines can clamp the discount
    Effect::new(move |_| {
        let discount = cart.with(|c| c.discount);
        if let Some(text) = discount_text.with_untracked(|t| discount_input_text(t, discount)) {
            discount_text.set(text);
        }
    });

    let customer_options = Signal::derive(move || {
        customers.with(|list| list.iter().map(|c| (c.id.to_string(), c.label())).collect::<Vec<_>>())
    });
    let payment_options: Vec<(String, String)> = PaymentMethod::ALL
        .iter()
        .map(|m| (m.as_str().to_string(), m.label().to_string()))
        .collect();

    let checkout = move |_| {
        let (location_id, shift_id) = auth
            .state
            .with_untracked(|s| (s.location_id(), s.shift.as_ref().map(|sh| sh.id)));
        let dto = match cart.with_untracked(|c| c.to_order_dto(location_id, shift_id)) {
            Ok(dto) => dto,
            Err(msg) => {
                notifications.error(msg);
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match create_order(&dto).await {
                Ok(order) => {
                    notifications.success(format!(
                        "Sale {} completed: {}",
                        order.display_number(),
                        format_price(order.total)
                    ));
                    cart.update(Cart::clear);
                    discount_text.set(String::new());
                    // Stock levels changed on the server
                    load_products();
                }
                Err(e) => notifications.error(format!("Sale failed: {}", e)),
            }
            submitting.set(false);
        });
    };

    let cart_row = move |line: CartLine| {
        let id = line.product_id;
        let stock = line.stock;
        let quantity = Signal::derive(move || {
            cart.with(|c| c.lines.iter().find(|l| l.product_id == id).map(|l| l.quantity).unwrap_or(0))
        });
        let line_total = Signal::derive(move || {
            cart.with(|c| c.lines.iter().find(|l| l.product_id == id).map(CartLine::total).unwrap_or(0.0))
        });
        view! {
            <div class="cart__line">
                <div class="cart__line-name">
                    <span>{line.name.clone()}</span>
                    <small class="text-muted">{format!("{} · {}", line.sku, format_price(line.unit_price))}</small>
                </div>
                <div class="cart__qty">
                    <button
                        class="button button--icon"
                        on:click=move |_| cart.update(|c| c.set_quantity(id, quantity.get_untracked() - 1))
                    >
                        {icon("minus")}
                    </button>
                    <input
                        type="number"
                        class="form__input cart__qty-input"
                        min="1"
                        max=stock.to_string()
                        prop:value=move || quantity.get().to_string()
                        on:change=move |ev| {
                            let qty = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
                            cart.update(|c| c.set_quantity(id, qty));
                        }
                    />
                    <button
                        class="button button--icon"
                        on:click=move |_| cart.update(|c| c.set_quantity(id, quantity.get_untracked() + 1))
                        disabled=move || quantity.get() >= stock
                    >
                        {icon("plus")}
                    </button>
                </div>
                <span class="cart__line-total">{move || format_price(line_total.get())}</span>
                <button
                    class="button button--icon"
                    title="Remove"
                    on:click=move |_| cart.update(|c| c.remove(id))
                >
                    {icon("delete")}
                </button>
            </div>
        }
    };

    view! {
        <PageFrame page_id="u501_point_of_sale--sale" category=PAGE_CAT_USECASE>
            <PageHeader
                title="Point of sale"
                subtitle=Signal::derive(move || auth.state.with(|s| s.shift.as_ref().map(|sh| sh.location_label())))
            />
            <div class="pos">
                <section class="pos__catalogue">
                    <input
                        type="search"
                        class="form__input pos__search"
                        placeholder="Scan or search by SKU, name, category..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            // Enter adds the single match, as a barcode scanner would
                            if ev.key() == "Enter" {
                                let found = results.get_untracked();
                                if let [only] = found.as_slice() {
                                    add_to_cart(only.clone());
                                    search.set(String::new());
                                }
                            }
                        }
                    />
                    <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                        <div class="pos__grid">
                            <For
                                each=move || results.get()
                                key=|p| (p.id, p.stock_qty)
                                children=move |p| {
                                    let out_of_stock = p.stock_qty <= 0;
                                    let name = p.name.clone();
                                    let sku = p.sku.clone();
                                    let price = format_price(p.price);
                                    let stock = p.stock_qty;
                                    view! {
                                        <button
                                            class="pos__product"
                                            disabled=out_of_stock
                                            on:click=move |_| add_to_cart(p.clone())
                                        >
                                            <span class="pos__product-name">{name}</span>
                                            <span class="pos__product-sku">{sku}</span>
                                            <span class="pos__product-price">{price}</span>
                                            {if out_of_stock {
                                                view! { <Badge variant="error">"out of stock"</Badge> }.into_any()
                                            } else {
                                                view! { <span class="text-muted">{format!("{} in stock", stock)}</span> }.into_any()
                                            }}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </section>

                <section class="pos__cart card">
                    <h3 class="card__title">
                        {icon("pos")}
                        {move || format!(" Cart ({})", cart.with(Cart::item_count))}
                    </h3>
                    <Show
                        when=move || !cart.with(Cart::is_empty)
                        fallback=|| view! { <p class="text-muted">"Add products from the left."</p> }
                    >
                        <For
                            each=move || cart.with(|c| c.lines.clone())
                            key=|l| l.product_id
                            children=cart_row
                        />
                    </Show>

                    <Select
                        label="Customer"
                        value=Signal::derive(move || cart.with(|c| id_to_value(c.customer_id)))
                        on_change=Callback::new(move |v: String| cart.update(|c| c.customer_id = parse_id(&v)))
                        options=customer_options
                        placeholder="Walk-in customer"
                    />
                    <div class="form__row">
                        <div class="form__group">
                            <label class="form__label">"Discount"</label>
                            <input
                                type="number"
                                class="form__input form__input--numeric"
                                step="0.01"
                                min="0"
                                prop:value=move || discount_text.get()
                                on:input=move |ev| apply_discount(event_target_value(&ev))
                            />
                        </div>
                        <Select
                            label="Payment"
                            value=Signal::derive(move || cart.with(|c| c.payment_method.as_str().to_string()))
                            on_change=Callback::new(move |v: String| {
                                cart.update(|c| c.payment_method = PaymentMethod::parse(&v))
                            })
                            options=payment_options
                        />
                    </div>

                    <dl class="pos__totals">
                        <dt>"Subtotal"</dt>
                        <dd>{move || format_price(cart.with(Cart::subtotal))}</dd>
                        <dt>"Discount"</dt>
                        <dd>{move || format!("-{}", format_price(cart.with(|c| c.discount)))}</dd>
                        <dt class="pos__grand-total">"Total"</dt>
                        <dd class="pos__grand-total">{move || format_price(cart.with(Cart::total))}</dd>
                    </dl>

                    <div class="pos__actions">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                cart.update(Cart::clear);
                                discount_text.set(String::new());
                            }
                            disabled=Signal::derive(move || cart.with(Cart::is_empty))
                        >
                            "Clear"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=checkout
                            disabled=Signal::derive(move || submitting.get() || cart.with(Cart::is_empty))
                        >
                            {icon("check")}
                            {move || if submitting.get() { " Processing..." } else { " Complete sale" }}
                        </Button>
                    </div>
                </section>
            </div>
        </PageFrame>
    }
}
