//! Signup / login tab switcher for the login card.

use leptos::prelude::*;

use crate::state::login_form::AuthTab;

#[component]
pub fn LoginTabs(#[prop(into)] tab: Signal<AuthTab>, on_select: Callback<AuthTab>) -> impl IntoView {
    view! {
        <div class="login-tabs">
            <button
                type="button"
                class:active=move || tab.get() == AuthTab::Signup
                on:click=move |_| on_select.run(AuthTab::Signup)
            >
                "S'INSCRIRE"
            </button>
            <button
                type="button"
                class:active=move || tab.get() == AuthTab::Login
                on:click=move |_| on_select.run(AuthTab::Login)
            >
                "SE CONNECTER"
            </button>
        </div>
    }
}
