//! Signup form on the login card.
//!
//! Submitting is an intentional stub. There is no registration endpoint, so
//! the fields are captured in `LoginFormState::signup` and submit only logs
//! the attempt.

use leptos::prelude::*;

use crate::state::login_form::{GuestType, LoginFormState};

#[component]
pub fn SignupForm(form: RwSignal<LoginFormState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let guest_type = form.with_untracked(|f| f.signup.guest_type);
        leptos::logging::log!("signup submitted ({}), no registration endpoint configured", guest_type.as_str());
    };

    view! {
        <form class="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="firstName">"Prénom"</label>
                <input
                    id="firstName"
                    type="text"
                    placeholder="Prénom"
                    required=true
                    prop:value=move || form.with(|f| f.signup.first_name.clone())
                    on:input=move |ev| form.update(|f| f.signup.first_name = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="surname">"Nom"</label>
                <input
                    id="surname"
                    type="text"
                    placeholder="Nom"
                    required=true
                    prop:value=move || form.with(|f| f.signup.surname.clone())
                    on:input=move |ev| form.update(|f| f.signup.surname = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="signupEmail">"Email"</label>
                <input
                    id="signupEmail"
                    type="email"
                    placeholder="email@exemple.com"
                    required=true
                    prop:value=move || form.with(|f| f.signup.email.clone())
                    on:input=move |ev| form.update(|f| f.signup.email = event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="guestType">"Type d'invité"</label>
                <select
                    id="guestType"
                    required=true
                    prop:value=move || form.with(|f| f.signup.guest_type.as_str())
                    on:change=move |ev| {
                        if let Some(guest_type) = GuestType::parse(&event_target_value(&ev)) {
                            form.update(|f| f.signup.guest_type = guest_type);
                        }
                    }
                >
                    {GuestType::ALL
                        .into_iter()
                        .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>
            <button type="submit" class="login-button login-signup-cta">"Créer un compte"</button>
        </form>
    }
}
