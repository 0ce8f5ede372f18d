use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::TopicsView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TopicsView)] Topics {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Trail" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
