//! Right-aligned money cell for thaw tables.
//!
//! ```ignore
//! <TableCellMoney value=Signal::derive(move || Some(balance)) />
//! <TableCellMoney value=total bold=true color_by_sign=false />
//! ```

use super::number_format::format_currency;
use crate::shared::config::config;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    /// Positive values green, negative red
    #[prop(optional, default = false)]
    color_by_sign: bool,
    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let symbol = config().ui.currency_symbol.clone();
    let text = move || match value.get() {
        Some(v) => format_currency(v, &symbol),
        None => "-".to_string(),
    };

    let style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            match value.get() {
                Some(v) if v > 0.0 => styles.push("color: var(--color-success-700)"),
                Some(v) if v < 0.0 => styles.push("color: var(--color-error-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=style>{text}</span>
        </TableCell>
    }
}
