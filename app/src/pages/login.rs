use crate::components::{AcmeLogo, LoginForm};
use crate::theme::use_theme;
use leptos::{component, view, IntoView};

#[component]
pub fn Login() -> impl IntoView {
    let theme = use_theme();

    let page_class = move || {
        if theme.is_dark() {
            "min-h-screen bg-cover bg-center relative flex flex-col justify-center items-center bg-black"
        } else {
            "min-h-screen bg-cover bg-center relative flex flex-col justify-center items-center bg-white"
        }
    };
    let page_style = move || {
        if theme.is_dark() {
            "background-image: url('/assets/hero-background-dark.jpg')"
        } else {
            "background-image: url('/assets/hero-background-light.jpg')"
        }
    };
    let panel_class = move || {
        if theme.is_dark() {
            "relative z-20 flex flex-col justify-center items-center px-6 py-12 lg:px-8 bg-gray-800 text-white p-8 rounded-lg shadow-lg space-y-6"
        } else {
            "relative z-20 flex flex-col justify-center items-center px-6 py-12 lg:px-8 bg-blue-200 text-gray-900 p-8 rounded-lg shadow-lg space-y-6"
        }
    };

    view! {
        <div class=page_class style=page_style>
            <div class="absolute inset-0 opacity-50"></div>
            <div class=panel_class>
                <div class="sm:mx-auto sm:w-full sm:max-w-sm flex flex-col items-center">
                    <AcmeLogo/>
                    <h2 class="text-center text-2xl font-bold leading-9 tracking-tight">
                        Login to your account
                    </h2>
                </div>
                <LoginForm/>
                <p class="mt-10 text-center text-sm text-gray-500">
                    "Not a member? "
                    <a class="font-semibold leading-6 text-indigo-600 hover:text-indigo-500" href="/signup">
                        "Register Here!"
                    </a>
                </p>
            </div>
        </div>
    }
}
