//! Buttons

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Unstyled button: accessibility attributes and click gating only.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Submit / confirm
    Primary,
    /// Cancel
    Secondary,
}

/// Styled button.
///
/// While `pending` the button is disabled and shows a spinner in front of
/// its label, which is how forms block a second submit.
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] pending: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-300",
    };
    let class = format!(
        "inline-flex items-center gap-2 px-4 py-2 rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed {variant_class}"
    );

    rsx! {
        ChromelessButton {
            disabled: disabled || pending,
            class: Some(class),
            onclick,
            if pending {
                LoaderIcon { class: "w-4 h-4 animate-spin" }
            }
            {children}
        }
    }
}
