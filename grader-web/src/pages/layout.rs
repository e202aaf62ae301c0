use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-gray-200",
            header { class: "px-6 py-4 border-b border-gray-800",
                h1 { class: "text-lg font-semibold text-white", "Grading" }
            }
            main { class: "p-6", Outlet::<Route> {} }
        }
    }
}
