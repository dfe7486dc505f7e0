use leptos::*;
use leptos_meta::*;
use repl_console::ReplConsole;

#[component]
/// Page shell hosting the REPL console.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="CSV REPL" />
        <Meta name="description" content="A browser-hosted command REPL over mock CSV datasets." />

        <main class="site-root">
            <ReplConsole />
        </main>
    }
}
