use leptos::{component, view, IntoView};
use leptos_router::A;

#[component]
pub fn Page404() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center py-12">
            <h1 class="text-4xl my-5">404 not found</h1>
            <A class="mt-5 rounded-md p-3 h-8 bg-indigo-600 text-white hover:bg-indigo-500" href="/">
                To login page
            </A>
        </div>
    }
}
