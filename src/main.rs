//! Mogra Storefront - terminal shop front
//!
//! Renders the catalog, drives the cart through its four operations, and
//! prints the WhatsApp hand-off link at checkout. All storefront state lives
//! here for the duration of the session; nothing is persisted.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mogra_storefront::catalog::Catalog;
use mogra_storefront::config::StoreConfig;
use mogra_storefront::domain::aggregates::{Cart, OrderDraft};
use mogra_storefront::whatsapp;

enum Command {
    Shop,
    Add(String),
    Remove(String),
    Qty(String, i32),
    Cart,
    Clear,
    Name(String),
    Note(String),
    Checkout,
    Quick(String),
    Help,
    Quit,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env()?;
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    tracing::info!(flowers = catalog.len(), contact = %config.whatsapp_number, "storefront ready");

    let mut cart = Cart::new();
    let mut draft = OrderDraft::new();

    println!("Mogra — Poetry in Blooms");
    print_catalog(&catalog);
    println!("Type `help` for commands.");

    let mut stdin = io::stdin().lock();
    loop {
        print!("mogra> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            None => println!("Unrecognized command, type `help`."),
            Some(Command::Shop) => print_catalog(&catalog),
            Some(Command::Add(id)) => match catalog.get(&id) {
                Some(flower) => {
                    cart.add(flower);
                    println!("Added {} to your bag ({} item(s)).", flower.name, cart.count());
                }
                None => println!("No flower with id {id}."),
            },
            Some(Command::Remove(id)) => {
                cart.remove(&id);
                print_cart(&cart);
            }
            Some(Command::Qty(id, delta)) => {
                cart.update_quantity(&id, delta);
                print_cart(&cart);
            }
            Some(Command::Cart) => print_cart(&cart),
            Some(Command::Clear) => {
                cart.clear();
                println!("Your bag is empty.");
            }
            Some(Command::Name(name)) => draft.set_customer_name(name),
            Some(Command::Note(note)) => draft.set_note(note),
            Some(Command::Checkout) => {
                if cart.is_empty() {
                    println!("Your bag is empty. `add <id>` something first.");
                } else {
                    tracing::info!(cart = %cart.id(), total = %cart.total(), "composing whatsapp order");
                    println!("{}", whatsapp::order_message(cart.lines(), cart.total(), &draft));
                    println!();
                    println!(
                        "Open to confirm: {}",
                        whatsapp::order_link(&config.whatsapp_number, cart.lines(), cart.total(), &draft)
                    );
                }
            }
            Some(Command::Quick(id)) => match catalog.get(&id) {
                Some(flower) => println!(
                    "Open to confirm: {}",
                    whatsapp::quick_order_link(&config.whatsapp_number, flower)
                ),
                None => println!("No flower with id {id}."),
            },
            Some(Command::Help) => print_help(),
            Some(Command::Quit) => break,
        }
    }
    Ok(())
}

fn parse_command(line: &str) -> Option<Command> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head {
        "shop" | "list" => Some(Command::Shop),
        "add" if !rest.is_empty() => Some(Command::Add(rest.to_string())),
        "remove" | "rm" if !rest.is_empty() => Some(Command::Remove(rest.to_string())),
        "qty" => {
            let (id, delta) = rest.split_once(char::is_whitespace)?;
            Some(Command::Qty(id.to_string(), delta.trim().parse().ok()?))
        }
        "cart" => Some(Command::Cart),
        "clear" => Some(Command::Clear),
        "name" => Some(Command::Name(rest.to_string())),
        "note" => Some(Command::Note(rest.to_string())),
        "checkout" => Some(Command::Checkout),
        "quick" if !rest.is_empty() => Some(Command::Quick(rest.to_string())),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn print_catalog(catalog: &Catalog) {
    println!();
    for flower in catalog.iter() {
        println!("{:>3}  {:<22} {:>6}  {}", flower.id, flower.name, flower.price.to_string(), flower.category);
        println!("     {}", flower.description);
    }
    println!();
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your bag is empty.");
        return;
    }
    for line in cart.lines() {
        println!("{}x {} ({})", line.quantity, line.name, line.line_total());
    }
    println!("Total: {} ({} item(s))", cart.total(), cart.count());
}

fn print_help() {
    println!("shop               show the collection");
    println!("add <id>           put one of a flower in your bag");
    println!("remove <id>        take a flower out of your bag");
    println!("qty <id> <delta>   adjust a line's quantity (never below 1)");
    println!("cart               show your bag");
    println!("clear              empty your bag");
    println!("name <text>        set your name for the order message");
    println!("note <text>        add a delivery note");
    println!("checkout           compose the WhatsApp order link");
    println!("quick <id>         one-flower availability ask, skipping the bag");
    println!("quit               leave the shop");
}
