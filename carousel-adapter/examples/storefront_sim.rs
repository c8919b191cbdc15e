// Example: drive the controller the way a UI shell would.
use carousel::{Metrics, PointerButton, PointerEvent};
use carousel_adapter::{
    CachedProducts, Controller, Product, ProductSource, ProductTab, ProductsRequest,
};

struct DemoCatalog;

impl ProductSource for DemoCatalog {
    type Error = core::convert::Infallible;

    fn fetch(&mut self, _req: &ProductsRequest) -> Result<Vec<Product>, Self::Error> {
        Ok((1..=10)
            .map(|i| Product {
                id: i,
                name: format!("Product {i}"),
                img: format!("https://img.example/{i}.png"),
                price: 50.0 * i as f64,
                price_text: format!("{}", 50 * i),
                rating: 4.0,
                rating_count: 25,
                url: format!("https://shop.example/p/{i}"),
            })
            .collect())
    }
}

fn main() {
    let mut source = CachedProducts::new(DemoCatalog);
    let req = ProductsRequest {
        category_id: 42,
        country: "cz".into(),
        filter_params: Vec::new(),
    };
    let products = match source.get(&req, 0) {
        Ok(products) => products.to_vec(),
        Err(never) => match never {},
    };

    let metrics = Metrics::measure(900.0, 220.0); // 4 cards fit
    let mut controller = Controller::new(products, metrics);
    controller.set_tab(ProductTab::PriceAsc);
    println!(
        "loop_enabled={} base_len={}",
        controller.carousel().loop_enabled(),
        controller.carousel().len()
    );

    // a quick leftward drag: just over one card step
    controller.on_pointer_down(&PointerEvent::mouse(1, PointerButton::Primary, 500.0));
    controller.on_pointer_move(&PointerEvent::mouse(1, PointerButton::Primary, 230.0));
    if controller.needs_frame() {
        controller.on_frame();
    }
    controller.on_pointer_up(&PointerEvent::mouse(1, PointerButton::Primary, 230.0));
    controller.on_frame();

    let state = controller.frame_state();
    println!(
        "after drag: offset={} suppress_click={}",
        state.rotation.offset,
        controller.should_suppress_click()
    );

    let mut head = Vec::new();
    controller.for_each_visible(|slot| {
        if head.len() < 4 {
            head.push(slot.carousel_id.clone());
        }
    });
    println!("visible head: {head:?}");
}
