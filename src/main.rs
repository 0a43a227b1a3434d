#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use lan_game_vote::app::App;
    use lan_game_vote::model::AppState;
    use lan_game_vote::router;
    use leptos::prelude::*;
    use leptos_axum::generate_route_list;

    println!("Starting server...");
    if dotenvy::dotenv().is_err() {
        eprintln!("didn't find env file")
    };
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    // votes live in memory on purpose; every start is a fresh session
    let state = AppState::new(leptos_options);
    let app = router::new(routes, state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for a purely client-side app
    // see lib.rs for hydration function instead
}
