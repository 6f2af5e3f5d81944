use popup_pos::pages::payment_form::PaymentPage;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Payment backend at {}", popup_pos::config::get_backend_url());
    yew::Renderer::<PaymentPage>::new().render();
}
