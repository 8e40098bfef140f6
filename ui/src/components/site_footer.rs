use dioxus::prelude::*;
use tracing::debug;

use super::brand::{BrandMark, BrandSize};
use crate::core::config::SITE;
use crate::core::footer::{FooterColumn, FooterLink, LinkTarget, FOOTER_COLUMNS, LEGAL_LINKS};
use crate::i18n;
use crate::t;

#[component]
pub fn SiteFooter(on_subscribe: Option<EventHandler<String>>) -> Element {
    let _lang = i18n::use_language();
    let copyright = SITE.copyright_line(&t!("footer-rights"));

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__grid",
                    for (index, column) in FOOTER_COLUMNS.iter().enumerate() {
                        FooterColumnView { key: "{index}", column: *column, on_subscribe }
                    }
                }
                div { class: "site-footer__legal",
                    span { "{copyright}" }
                    div { class: "site-footer__legal-links",
                        for link in LEGAL_LINKS.iter() {
                            FooterAnchor { key: "{link.label_id}", link: *link }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FooterColumnView(column: FooterColumn, on_subscribe: Option<EventHandler<String>>) -> Element {
    let _lang = i18n::use_language();
    match column {
        FooterColumn::Brand { blurb_id } => rsx! {
            div { class: "site-footer__column site-footer__column--brand",
                div { class: "site-footer__brand",
                    BrandMark { size: BrandSize::Medium }
                    span { class: "site-footer__brand-name", "{SITE.brand_name}" }
                }
                p { class: "site-footer__text", {i18n::message(blurb_id)} }
            }
        },
        FooterColumn::Links { heading_id, links } => rsx! {
            div { class: "site-footer__column",
                h4 { class: "site-footer__heading", {i18n::message(heading_id)} }
                div { class: "site-footer__links",
                    for link in links.iter() {
                        FooterAnchor { key: "{link.label_id}", link: *link }
                    }
                }
            }
        },
        FooterColumn::Subscribe { heading_id, blurb_id } => rsx! {
            div { class: "site-footer__column",
                h4 { class: "site-footer__heading", {i18n::message(heading_id)} }
                p { class: "site-footer__text", {i18n::message(blurb_id)} }
                SubscribeForm { on_subscribe }
            }
        },
    }
}

#[component]
fn FooterAnchor(link: FooterLink) -> Element {
    let _lang = i18n::use_language();
    let label = i18n::message(link.label_id);
    match link.target {
        LinkTarget::Page(page) => rsx! {
            Link { class: "site-footer__link", to: page.url(), "{label}" }
        },
        LinkTarget::Placeholder => rsx! {
            a { class: "site-footer__link", href: link.target.href(), "{label}" }
        },
    }
}

/// Email field plus Subscribe button. Submission is delegated to the optional
/// hook; without one the button does nothing.
#[component]
pub fn SubscribeForm(on_subscribe: Option<EventHandler<String>>) -> Element {
    let _lang = i18n::use_language();
    let mut email = use_signal(String::new);

    let submit = move |_: MouseEvent| match on_subscribe {
        Some(handler) => {
            debug!("subscribe hook invoked");
            handler.call(email());
        }
        None => debug!("subscribe clicked without a hook"),
    };

    rsx! {
        div { class: "subscribe-form",
            input {
                class: "subscribe-form__input",
                r#type: "email",
                aria_label: t!("footer-email-label"),
                placeholder: t!("footer-email-placeholder"),
                value: "{email}",
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            button {
                class: "button button--accent subscribe-form__submit",
                r#type: "button",
                onclick: submit,
                {t!("footer-subscribe")}
            }
        }
    }
}
