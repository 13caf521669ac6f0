// SPDX-License-Identifier: MIT OR Apache-2.0

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        fn main() {
            modeops_website::start();
        }
    } else {
        fn main() {
            eprintln!("modeops_website renders in the browser; build it with `trunk serve`");
        }
    }
}
