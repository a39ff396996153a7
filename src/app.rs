//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{guard::Guard, layout::Layout, session_indicator::SessionIndicator, session_provider::SessionProvider};
use crate::config::{ClientConfig, LANDING_PATH};
use crate::pages::{
    admin::AdminPage, home::HomePage, login::LoginPage, one_rep_max::OneRepMaxPage, register::RegisterPage,
    trainer_panel::TrainerPanelPage, workouts::WorkoutsPage,
};
use crate::util::guard::Capability;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Public routes (`/login`, `/register`) render bare. Everything else sits
/// under `Layout`, which requires a session; role routes add their own guard.
/// The expiry indicator lives outside `Routes` so it survives the redirect
/// to `/login`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = ClientConfig::from_build_env();

    view! {
        <Stylesheet id="leptos" href="/pkg/train-gym.css"/>
        <Title text="Train Gym"/>

        <SessionProvider config=config>
            <Router>
                <SessionIndicator/>
                <Routes fallback=|| view! { <Redirect path=LANDING_PATH/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <ParentRoute path=StaticSegment("") view=Layout>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=LANDING_PATH/> }/>
                        <Route path=StaticSegment("main") view=HomePage/>
                        <Route path=StaticSegment("your-workouts") view=WorkoutsPage/>
                        <Route path=StaticSegment("1rm-calculator") view=OneRepMaxPage/>
                        <Route
                            path=StaticSegment("admin")
                            view=|| view! { <Guard capability=Capability::Admin><AdminPage/></Guard> }
                        />
                        <Route
                            path=StaticSegment("trainer-panel")
                            view=|| view! { <Guard capability=Capability::Trainer><TrainerPanelPage/></Guard> }
                        />
                    </ParentRoute>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
