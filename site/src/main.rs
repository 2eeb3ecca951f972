// Browser entry point. Built by trunk with `--no-default-features --features csr`.

use leptos::prelude::*;
use portfolio_site::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
