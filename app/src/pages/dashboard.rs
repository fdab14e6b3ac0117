use leptos::{component, view, IntoView};

/// Landing page after a successful login.
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center py-12">
            <h1 class="text-4xl font-bold my-5">Dashboard</h1>
            <p class="text-sm text-gray-500">"You are signed in."</p>
        </div>
    }
}
