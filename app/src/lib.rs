mod api;
mod components;
mod error;
mod form;
mod pages;
mod theme;

pub use error::{Error, Result};
pub use theme::Theme;

use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Link, Stylesheet, Title};
use leptos_router::{Route, Router, Routes};
use theme::ThemeProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/asset.css"/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <Title text="Acme login"/>
        <ThemeProvider>
            <Router fallback=|| pages::Page404.into_view()>
                <main>
                    <Routes>
                        <Route path="/" view=pages::Login/>
                        <Route path="/dashboard" view=pages::Dashboard/>
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}
