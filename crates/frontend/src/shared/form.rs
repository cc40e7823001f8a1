//! Binds one field of a form struct held in a signal to an input.
//!
//! ```ignore
//! let (name, set_name) = bind_text(vm.form, |f| f.name.clone(), |f, v| f.name = v);
//! view! { <Input label="Name" value=name on_input=set_name /> }
//! ```

use leptos::prelude::*;

pub fn bind_text<T, G, S>(form: RwSignal<T>, get: G, set: S) -> (Signal<String>, Callback<String>)
where
    T: Send + Sync + 'static,
    G: Fn(&T) -> String + Send + Sync + 'static,
    S: Fn(&mut T, String) + Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(|f| get(f))),
        Callback::new(move |value: String| form.update(|f| set(f, value))),
    )
}

pub fn bind_flag<T, G, S>(form: RwSignal<T>, get: G, set: S) -> (Signal<bool>, Callback<bool>)
where
    T: Send + Sync + 'static,
    G: Fn(&T) -> bool + Send + Sync + 'static,
    S: Fn(&mut T, bool) + Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(|f| get(f))),
        Callback::new(move |value: bool| form.update(|f| set(f, value))),
    )
}

/// `Some(id)` for a select value, `None` for the empty option or garbage.
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub fn id_to_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(id_to_value(Some(3)), "3");
        assert_eq!(id_to_value(None), "");
    }
}
