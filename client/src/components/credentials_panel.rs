//! Panel listing the shared test accounts under the login form.

use leptos::prelude::*;

use crate::state::login_form::TEST_ACCOUNTS;

#[component]
pub fn CredentialsPanel() -> impl IntoView {
    view! {
        <div class="credentials-panel">
            <h4>"Identifiants test"</h4>
            <p>"Utilisez ces comptes pour vous connecter."</p>
            <ul>
                {TEST_ACCOUNTS
                    .iter()
                    .map(|account| {
                        view! {
                            <li>
                                <strong>{account.label}</strong>
                                <span>{account.email}</span>
                                <span>{account.password}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
