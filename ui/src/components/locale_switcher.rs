use dioxus::prelude::*;
use tracing::{info, warn};

use crate::i18n;
use crate::t;

/// Language picker. Hidden when only one locale is embedded.
///
/// On change it switches the shared loader and writes the new tag into the
/// `Signal<String>` context (when the shell provides one) so every component
/// that called `i18n::use_language` re-renders with fresh strings.
#[component]
pub fn LocaleSwitcher() -> Element {
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, %err, "language switch failed"),
        }
    };

    if langs().len() < 2 {
        return rsx! {};
    }

    rsx! {
        div { class: "site-header__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{current_lang()}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
