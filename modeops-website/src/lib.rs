// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(non_snake_case)]

use cfg_if::cfg_if;
pub mod app;
pub mod components;
pub mod constants;
pub mod pages;

/// Id of the container `index.html` provides for the app.
pub const MOUNT_POINT_ID: &str = "root";

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use leptos::mount::{mount_to, mount_to_body};
        use wasm_bindgen::JsCast;

        use crate::app::App;

        /// Install logging and render the page into `#root`, falling back to
        /// `<body>` when the container is missing.
        pub fn start() {
            console_error_panic_hook::set_once();
            if let Err(e) = console_log::init_with_level(constants::log_level()) {
                web_sys::console::warn_1(&format!("logger already set: {e}").into());
            }

            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(MOUNT_POINT_ID))
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

            match root {
                Some(root) => mount_to(root, App).forget(),
                None => {
                    log::warn!("#{MOUNT_POINT_ID} not found, mounting to <body>");
                    mount_to_body(App);
                }
            }
        }
    }
}
