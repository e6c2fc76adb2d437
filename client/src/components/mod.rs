//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the login card and read/write the page's
//! form state through signals passed in as props.

pub mod credentials_panel;
pub mod login_tabs;
pub mod signup_form;
