//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::guards::RouteGuards;
use crate::net::api::{ApiClient, ApiConfig};
use crate::pages::{
    application_form::ApplicationFormPage, applications::ApplicationsPage,
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage,
    register::RegisterPage, reset_password::ResetPasswordPage, unauthorized::UnauthorizedPage,
    users::UsersPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the session store and API client, provides them via context,
/// and sets up client-side routing with the navigation guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::new());
    provide_context(session);
    provide_context(ApiClient::new(ApiConfig::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/credisol.css"/>
        <Title text="Credisol"/>

        <Router>
            <RouteGuards/>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=StaticSegment("credit-applications") view=ApplicationsPage/>
                    <Route
                        path=(StaticSegment("credit-applications"), StaticSegment("new"))
                        view=ApplicationFormPage
                    />
                    <Route path=StaticSegment("users") view=UsersPage/>
                </Routes>
            </main>
        </Router>
    }
}
