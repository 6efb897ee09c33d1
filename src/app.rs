//! Root application module.

use leptos::prelude::*;

use crate::components::TerminalView;

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    background: #141414;
                    color: #ffffff;
                    font-family: 'JetBrains Mono', monospace;
                ">
                    <h1 style="color: #ff6b6b;">"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| crate::utils::dom::reload()>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <TerminalView />
        </ErrorBoundary>
    }
}
