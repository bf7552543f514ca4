use whack_a_jerry::components::App;

fn main() {
    console_error_panic_hook::set_once();
    // WHACK_LOG=debug at build time for chattier consoles.
    let level = option_env!("WHACK_LOG")
        .and_then(|l| l.parse().ok())
        .unwrap_or(log::Level::Info);
    console_log::init_with_level(level).expect("Failed to init logger");
    log::info!("Whack-a-Jerry starting");
    yew::Renderer::<App>::new().render();
}
