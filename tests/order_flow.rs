//! End-to-end storefront flow: browse the catalog, fill a bag, compose the
//! WhatsApp hand-off link.

use mogra_storefront::catalog::Catalog;
use mogra_storefront::domain::aggregates::{Cart, OrderDraft};
use mogra_storefront::whatsapp;

#[test]
fn full_order_flow_produces_stable_message_and_link() {
    let catalog = Catalog::builtin();
    let mut cart = Cart::new();

    let gajra = catalog.get("3").expect("gajra in catalog");
    let roses = catalog.get("2").expect("roses in catalog");
    cart.add(gajra);
    cart.add(roses);
    cart.add(gajra); // merges into the existing line, order unchanged

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.count(), 3);
    assert_eq!(cart.total().value(), 2 * 150 + 850);
    assert_eq!(cart.lines()[0].name, "Mogra Gajra");

    cart.update_quantity("2", -5); // floors at 1, never removes
    assert_eq!(cart.lines()[1].quantity.value(), 1);
    assert_eq!(cart.total().value(), 1150);

    let mut draft = OrderDraft::for_customer("Asha");
    draft.set_note("Deliver before 10am");

    let message = whatsapp::order_message(cart.lines(), cart.total(), &draft);
    assert!(message.starts_with("Hi, I am Asha. I would like to place an order via the Mogra website."));
    assert!(message.contains("• 2x Mogra Gajra (₹300)"));
    assert!(message.contains("• 1x Classic Red Roses (₹850)"));
    assert!(message.contains("*Total Estimate:* ₹1150"));
    assert!(message.contains("*Note:* Deliver before 10am"));
    assert!(message.ends_with("Please confirm availability and delivery details."));

    let link = whatsapp::order_link("917249611277", cart.lines(), cart.total(), &draft);
    assert!(link.starts_with("https://wa.me/917249611277?text=Hi%2C%20I%20am%20Asha."));
    assert!(link.contains("%E2%82%B9300"));

    // composing the link never drains the bag; clearing is the shell's call
    assert_eq!(cart.count(), 3);
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total().value(), 0);
}

#[test]
fn quick_order_skips_the_bag_entirely() {
    let catalog = Catalog::builtin();
    let lotus = catalog.get("4").expect("lotus in catalog");

    let link = whatsapp::quick_order_link("917249611277", lotus);
    assert!(link.starts_with("https://wa.me/917249611277?text=Hi%20Mogra%2C"));
    assert!(link.contains("Pink%20Lotus"));
    assert!(link.contains("%E2%82%B91200"));
}
