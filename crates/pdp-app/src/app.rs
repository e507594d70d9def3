//! Application shell: router, layout, fallback pages.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::pages::ProductPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::default());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Lumen Store product catalog"/>
        <Title text="Lumen Store"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <h1>"Lumen Store"</h1>
            <nav>
                <a href="/">"Home"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Lumen Store"</p>
        </footer>
    }
}

/// Minimal landing page; the product detail page is the app's substance.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Welcome to Lumen Store"</h2>
            <a href="/product/1" class="btn">"Featured Product"</a>
        </div>
    }
}

/// 404 page for unknown routes.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
