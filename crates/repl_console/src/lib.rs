//! REPL console UI component backed by the headless [`repl_engine`].
//!
//! The component owns one [`Repl`], forwards submitted lines to it, and swaps the history pane's
//! markup for the freshly rendered history after every submit.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use repl_engine::{Repl, ReplConfig};
use repl_host::{mock_dataset_source, DatasetSource, NoopDatasetSource};
use serde_json::Value;

const INPUT_ID: &str = "repl-command-input";

/// Reads the console config from launch parameters, falling back to defaults.
fn console_config(launch_params: &Value) -> ReplConfig {
    ReplConfig::from_launch_params(launch_params).unwrap_or_else(|err| {
        logging::warn!("{err}; using default repl config");
        ReplConfig::default()
    })
}

/// Dataset source used when the host does not inject one.
fn default_source() -> Rc<dyn DatasetSource> {
    match mock_dataset_source() {
        Ok(source) => Rc::new(source),
        Err(err) => {
            logging::warn!("mock datasets unavailable: {err}");
            Rc::new(NoopDatasetSource)
        }
    }
}

fn status_text(verbose: bool, entries: usize) -> String {
    let mode = if verbose { "verbose" } else { "brief" };
    format!("{mode} mode, {entries} entrie(s)")
}

#[component]
/// REPL console with a command box, a submit button, and a scrolling history pane.
pub fn ReplConsole(
    /// App launch parameters. An optional `repl` object is read as [`ReplConfig`].
    #[prop(default = Value::Null)]
    launch_params: Value,
    /// Dataset source for `load_file` and `search`. Defaults to the bundled mock datasets.
    #[prop(optional)]
    source: Option<Rc<dyn DatasetSource>>,
) -> impl IntoView {
    let config = console_config(&launch_params);
    let repl = store_value(Repl::new(
        &config,
        source.unwrap_or_else(default_source),
    ));
    let input = create_rw_signal(String::new());
    let history_html = create_rw_signal(repl.with_value(Repl::render));
    let status = create_rw_signal(status_text(config.start_verbose, 0));
    let input_ref = create_node_ref::<html::Input>();

    let refresh = move |html: String| {
        history_html.set(html);
        status.set(repl.with_value(|repl| {
            status_text(repl.session().is_verbose(), repl.history().len())
        }));
    };

    let submit = move || {
        let line = input.get_untracked();
        if let Some(html) = repl.try_update_value(|repl| repl.submit(&line)) {
            refresh(html);
        }
        input.set(String::new());
        if let Some(element) = input_ref.get_untracked() {
            let _ = element.focus();
        }
    };

    let on_keypress = move |ev: KeyboardEvent| {
        let presses = repl
            .try_update_value(|repl| repl.session_mut().record_keypress())
            .unwrap_or_default();
        logging::log!("key pressed: {}. {presses} presses seen so far.", ev.key());
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let on_click = move |_: MouseEvent| {
        let clicks = repl
            .try_update_value(|repl| repl.session_mut().record_click())
            .unwrap_or_default();
        logging::log!("{clicks} clicks seen so far.");
        submit();
    };

    let on_clear = move |_: MouseEvent| {
        if let Some(html) = repl.try_update_value(|repl| {
            repl.session_mut().clear_history();
            repl.render()
        }) {
            refresh(html);
        }
    };

    view! {
        <div class="app-shell repl-shell">
            <div
                class="repl-history"
                role="log"
                aria-live="polite"
                title="Command Output"
                inner_html=move || history_html.get()
            ></div>

            <div class="repl-input">
                <div class="command-box-wrapper">
                    <label for=INPUT_ID>"Command"</label>
                    <input
                        id=INPUT_ID
                        node_ref=input_ref
                        class="repl-command-box app-field"
                        name="command-input"
                        type="text"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keypress=on_keypress
                        placeholder="Try: load_file stringCSV.csv"
                        autocomplete="off"
                        spellcheck="false"
                    />
                </div>
                <button type="button" class="repl-button app-action" on:click=on_click>
                    "Submit"
                </button>
                <button type="button" class="repl-clear app-action" on:click=on_clear>
                    "Clear"
                </button>
            </div>

            <div class="app-statusbar">
                <span>{move || status.get()}</span>
            </div>
        </div>
    }
}
