//! Cart commands.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Context as _, Result};
use chrono::Utc;
use dialoguer::Confirm;
use masala_cache::FileStorage;
use masala_commerce::cart::{CartEvent, CartStore, EventLog, LineItem, MAX_QUANTITY_PER_ITEM};
use masala_commerce::checkout::begin_checkout;
use masala_commerce::notify::{Notification, NotificationKind};
use masala_commerce::CommerceError;
use masala_view::CartView;
use serde::Serialize;

use super::{CartArgs, CartCommand};
use crate::catalog;
use crate::context::Context;
use crate::output::line_columns;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_cart();
    let log = Rc::new(RefCell::new(EventLog::new()));
    store.subscribe(Rc::clone(&log));

    match args.command {
        CartCommand::Add {
            name,
            price,
            image,
            quantity,
        } => add(&mut store, ctx, name, price, image, quantity)?,
        CartCommand::Remove { name } => {
            if !store.remove(&name)? {
                ctx.output.warn(&format!("{} is not in the cart", name));
            }
        }
        CartCommand::Set { name, quantity } => {
            if !store.set_quantity(&name, quantity)? {
                ctx.output.warn(&format!("{} is not in the cart", name));
            }
        }
        CartCommand::Inc { name } => {
            if !store.increment(&name)? {
                ctx.output.warn(&format!("{} is not in the cart", name));
            }
        }
        CartCommand::Dec { name } => {
            if !store.decrement(&name)? {
                ctx.output.warn(&format!("{} is not in the cart", name));
            }
        }
        CartCommand::Show { html } => return show(&store, ctx, html),
        CartCommand::Clear { yes } => return clear(&mut store, ctx, yes, &log),
        CartCommand::Checkout => return checkout(&store, ctx),
    }

    let events = log.borrow_mut().drain();
    report(&store, ctx, &events);
    Ok(())
}

fn add(
    store: &mut CartStore<FileStorage>,
    ctx: &Context,
    name: String,
    price: Option<String>,
    image: Option<String>,
    quantity: i64,
) -> Result<()> {
    if quantity < 1 {
        return Err(CommerceError::InvalidQuantity(quantity).into());
    }
    let quantity = u32::try_from(quantity)
        .map_err(|_| CommerceError::QuantityExceedsLimit(quantity, MAX_QUANTITY_PER_ITEM))?;

    let currency = store.cart().currency;
    let menu = catalog::house_menu()?;
    let on_menu = menu.find(&name);

    let mut item = match (price, on_menu) {
        (Some(price), _) => {
            let item = LineItem::from_display_price(name.as_str(), &price, currency, quantity);
            if item.price.is_zero() {
                ctx.output
                    .warn(&format!("Could not read price {:?}; counting it as zero", price));
            }
            item
        }
        (None, Some(menu_item)) if menu_item.price.currency == currency => {
            menu_item.to_line_item(quantity)
        }
        (None, Some(_)) => bail!(
            "{} is priced in a different currency than the cart; pass --price",
            name
        ),
        (None, None) => bail!("{} is not on the menu; pass --price", name),
    };
    if let Some(image) = image {
        item = item.with_image(image);
    }

    store
        .add(item)
        .with_context(|| format!("Failed to add {} to the cart", name))?;

    let mut banners = ctx.notifications();
    let banner = banners.added_to_cart(&name, Utc::now()).clone();
    show_banner(ctx, &banner);
    Ok(())
}

fn clear(
    store: &mut CartStore<FileStorage>,
    ctx: &Context,
    yes: bool,
    log: &Rc<RefCell<EventLog>>,
) -> Result<()> {
    if store.is_empty() {
        ctx.output.info("Cart is already empty");
        return Ok(());
    }

    if !yes && ctx.output.is_interactive() && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from the cart?", store.item_count()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    store.clear()?;
    let events = log.borrow_mut().drain();
    report(store, ctx, &events);
    Ok(())
}

fn checkout(store: &CartStore<FileStorage>, ctx: &Context) -> Result<()> {
    let mut banners = ctx.notifications();
    let now = Utc::now();

    match begin_checkout(store.cart()) {
        Ok(summary) => {
            let banner = banners.proceeding_to_checkout(now).clone();
            show_banner(ctx, &banner);

            if ctx.output.is_json() {
                ctx.output.json(&summary);
                return Ok(());
            }
            ctx.output.kv("Lines", &summary.lines.to_string());
            ctx.output.kv("Items", &summary.item_count.to_string());
            ctx.output.kv("Total", &summary.total.display());
            Ok(())
        }
        Err(CommerceError::EmptyCart) => {
            let banner = banners.cart_empty(now).clone();
            show_banner(ctx, &banner);
            bail!("Checkout aborted")
        }
        Err(e) => Err(e.into()),
    }
}

fn show(store: &CartStore<FileStorage>, ctx: &Context, html: bool) -> Result<()> {
    if html {
        let view = CartView::new(store.cart());
        if ctx.output.is_json() {
            ctx.output.json(&view);
        } else {
            ctx.output.raw(view.badge());
            ctx.output.raw(view.sidebar());
        }
        return Ok(());
    }

    report(store, ctx, &[]);
    Ok(())
}

#[derive(Serialize)]
struct CartReport<'a> {
    key: &'a str,
    currency: &'static str,
    items: &'a [LineItem],
    item_count: u32,
    total: String,
    events: &'a [CartEvent],
}

/// Print the cart and the changes that led to it.
fn report(store: &CartStore<FileStorage>, ctx: &Context, events: &[CartEvent]) {
    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            key: store.key(),
            currency: store.cart().currency.code(),
            items: store.items(),
            item_count: store.item_count(),
            total: store.total().display_amount(),
            events,
        });
        return;
    }

    for event in events {
        match event {
            CartEvent::Added { name, added, .. } => {
                ctx.output.debug(&format!("added {} × {}", added, name))
            }
            CartEvent::Removed { name } => ctx.output.success(&format!("Removed {}", name)),
            CartEvent::QuantityChanged { name, quantity } => ctx
                .output
                .success(&format!("{} quantity is now {}", name, quantity)),
            CartEvent::Cleared => ctx.output.success("Cart cleared"),
        }
    }

    ctx.output.header("Your Cart");
    if store.is_empty() {
        ctx.output.info("Your cart is empty");
    } else {
        let rows: Vec<[String; 4]> = store.items().iter().map(line_columns).collect();
        let widths = column_widths(&rows);
        for row in &rows {
            let cols: Vec<&str> = row.iter().map(String::as_str).collect();
            ctx.output.table_row(&cols, &widths);
        }
    }
    ctx.output.kv("Items", &store.item_count().to_string());
    ctx.output.kv("Total", &store.total().display());
}

fn column_widths(rows: &[[String; 4]]) -> Vec<usize> {
    (0..4)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn show_banner(ctx: &Context, banner: &Notification) {
    if ctx.output.is_json() {
        return;
    }
    match banner.kind {
        NotificationKind::Success => ctx.output.success(&banner.message),
        NotificationKind::Error => ctx.output.error(&banner.message),
        NotificationKind::Info => ctx.output.info(&banner.message),
    }
}
