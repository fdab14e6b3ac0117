use crate::api;
use crate::form::{validate, Credentials, ValidationErrors};
use crate::theme::{use_theme, Theme};
use leptos::ev::SubmitEvent;
use leptos::{
    component, create_signal, event_target_value, logging, spawn_local, view, IntoView, SignalGet,
    SignalSet,
};
use leptos_router::use_navigate;

fn input_class(theme: Theme, has_error: bool) -> String {
    let ring = if has_error {
        "ring-red-600 focus:ring-red-600"
    } else {
        "ring-gray-300 focus:ring-indigo-600"
    };
    let colors = if theme.is_dark() {
        "text-white bg-gray-700"
    } else {
        "text-gray-900 bg-white"
    };
    format!(
        "block w-full rounded-md border-0 py-1.5 shadow-sm ring-1 ring-inset {ring} placeholder:text-gray-400 focus:ring-2 focus:ring-inset sm:text-sm sm:leading-6 {colors}"
    )
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let theme = use_theme();
    let navigate = use_navigate();

    let (username, set_username) = create_signal::<String>(String::new());
    let (password, set_password) = create_signal::<String>(String::new());
    let (errors, set_errors) = create_signal::<ValidationErrors>(ValidationErrors::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            username: username.get(),
            password: password.get(),
        };

        // errors are replaced wholesale on every attempt
        let outcome = validate(&credentials);
        let valid = outcome.is_valid();
        set_errors.set(outcome);
        if !valid {
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::post_login(&credentials).await {
                Ok(body) => {
                    set_submitting.set(false);
                    logging::log!("Login successful: {body}");
                    navigate(api::DASHBOARD_PATH, Default::default());
                }
                Err(error) => {
                    set_submitting.set(false);
                    logging::error!("Login failed: {}", error.detail());
                }
            }
        });
    };

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <div>
                <label class="block text-sm font-medium leading-6" for="userName">
                    Username
                </label>
                <div class="mt-2">
                    <input
                        id="userName"
                        name="userName"
                        type="text"
                        autocomplete="username"
                        class=move || input_class(theme, !errors.get().username.is_empty())
                        prop:value=username
                        on:input=move |ev| { set_username.set(event_target_value(&ev)) }
                    />
                    {move || {
                        let message = errors.get().username;
                        (!message.is_empty())
                            .then(|| {
                                view! {
                                    <p id="userName-error" class="text-sm text-red-600">
                                        {message}
                                    </p>
                                }
                            })
                    }}

                </div>
            </div>
            <div>
                <label class="block text-sm font-medium leading-6" for="password">
                    Password
                </label>
                <div class="mt-2">
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        class=move || input_class(theme, !errors.get().password.is_empty())
                        prop:value=password
                        on:input=move |ev| { set_password.set(event_target_value(&ev)) }
                    />
                    {move || {
                        let message = errors.get().password;
                        (!message.is_empty())
                            .then(|| {
                                view! {
                                    <p id="password-error" class="text-sm text-red-600">
                                        {message}
                                    </p>
                                }
                            })
                    }}

                </div>
            </div>
            <div>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="flex w-full justify-center rounded-md bg-indigo-600 px-3 py-1.5 text-sm font-semibold leading-6 text-white shadow-sm hover:bg-indigo-500 focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-indigo-600"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </div>
            <div class="text-sm">
                <a class="font-semibold text-indigo-600 hover:text-indigo-500" href="#">
                    "Forgot password?"
                </a>
            </div>
        </form>
    }
}

// region:    --- Tests

#[cfg(test)]
mod tests {
    type Error = Box<dyn std::error::Error>;
    type Result<T> = core::result::Result<T, Error>; // For tests.

    use leptos::*;
    use leptos_router::Router;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::LoginForm;
    use crate::form::{PASSWORD_REQUIRED, PASSWORD_TOO_SHORT, USERNAME_REQUIRED};
    use crate::theme::{Theme, ThemeProvider};

    wasm_bindgen_test_configure!(run_in_browser);

    fn new_wrapper() -> Result<web_sys::Element> {
        let document = leptos::document();
        let test_wrapper = document
            .create_element("section")
            .expect("Cannot create section");
        let _ = document.body().unwrap().append_child(&test_wrapper);
        Ok(test_wrapper)
    }

    fn mount(test_wrapper: &web_sys::Element) {
        mount_to(test_wrapper.clone().unchecked_into(), || {
            view! {
                <Router>
                    <LoginForm/>
                </Router>
            }
        });
    }

    fn input(test_wrapper: &web_sys::Element, selector: &str) -> web_sys::HtmlInputElement {
        test_wrapper
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlInputElement>()
    }

    fn type_into(field: &web_sys::HtmlInputElement, value: &str) -> Result<()> {
        field.set_value(value);
        let mut init = web_sys::EventInit::new();
        init.bubbles(true);
        let ev = web_sys::Event::new_with_event_init_dict("input", &init)
            .map_err(|_| "cannot build input event")?;
        field
            .dispatch_event(&ev)
            .map_err(|_| "cannot dispatch input event")?;
        Ok(())
    }

    fn submit(test_wrapper: &web_sys::Element) -> Result<()> {
        test_wrapper
            .query_selector("button[type=submit]")
            .unwrap()
            .ok_or("no submit button")?
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
        Ok(())
    }

    fn error_text(test_wrapper: &web_sys::Element, id: &str) -> Option<String> {
        test_wrapper
            .query_selector(&format!("#{id}"))
            .unwrap()
            .and_then(|el| el.text_content())
    }

    #[wasm_bindgen_test]
    fn create() -> Result<()> {
        let test_wrapper = new_wrapper()?;
        mount(&test_wrapper);

        let username = input(&test_wrapper, "#userName");
        assert_eq!(username.autocomplete(), "username".to_string());

        let password = input(&test_wrapper, "#password");
        assert_eq!(password.type_(), "password".to_string());

        if let Some(btn_text) = test_wrapper
            .query_selector("button")
            .unwrap()
            .unwrap()
            .text_content()
        {
            assert_eq!(btn_text.trim(), "Sign in".to_string());
        }

        // no error is rendered before the first submit attempt
        assert_eq!(error_text(&test_wrapper, "userName-error"), None);
        assert_eq!(error_text(&test_wrapper, "password-error"), None);

        test_wrapper.remove();
        Ok(())
    }

    #[wasm_bindgen_test]
    fn empty_submit_reports_both_fields() -> Result<()> {
        let test_wrapper = new_wrapper()?;
        mount(&test_wrapper);

        submit(&test_wrapper)?;

        assert_eq!(
            error_text(&test_wrapper, "userName-error"),
            Some(USERNAME_REQUIRED.to_string())
        );
        assert_eq!(
            error_text(&test_wrapper, "password-error"),
            Some(PASSWORD_REQUIRED.to_string())
        );

        test_wrapper.remove();
        Ok(())
    }

    #[wasm_bindgen_test]
    fn short_password_reports_length_only() -> Result<()> {
        let test_wrapper = new_wrapper()?;
        mount(&test_wrapper);

        type_into(&input(&test_wrapper, "#userName"), "ab")?;
        type_into(&input(&test_wrapper, "#password"), "abc")?;
        submit(&test_wrapper)?;

        assert_eq!(error_text(&test_wrapper, "userName-error"), None);
        assert_eq!(
            error_text(&test_wrapper, "password-error"),
            Some(PASSWORD_TOO_SHORT.to_string())
        );

        test_wrapper.remove();
        Ok(())
    }

    #[wasm_bindgen_test]
    fn dark_theme_variant() -> Result<()> {
        let test_wrapper = new_wrapper()?;
        mount_to(test_wrapper.clone().unchecked_into(), || {
            view! {
                <Router>
                    <ThemeProvider theme=Theme::Dark>
                        <LoginForm/>
                    </ThemeProvider>
                </Router>
            }
        });

        let username = input(&test_wrapper, "#userName");
        assert!(username.class_name().contains("bg-gray-700"));

        test_wrapper.remove();
        Ok(())
    }
}

// endregion: --- Tests
